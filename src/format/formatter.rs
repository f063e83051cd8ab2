//! Record formatter implementation

use super::types::{Detail, FieldChain, FormattedRecord};
use crate::types::{JsonValue, RawRecord};

// ============================================================================
// Field chains
// ============================================================================

const TITLE: FieldChain = FieldChain::new(&["com_nom_usuel", "arbres_libellefrancais"]);
const LATIN_NAME: FieldChain = FieldChain::new(&["com_nom_latin"]);
const GENUS: FieldChain = FieldChain::new(&["arbres_genre"]);
const SPECIES: FieldChain = FieldChain::new(&["arbres_espece"]);
const ADDRESS: FieldChain = FieldChain::new(&["com_adresse", "arbres_adresse"]);
const DISTRICT: FieldChain = FieldChain::new(&["com_arrondissement", "arbres_arrondissement"]);
const HEIGHT: FieldChain = FieldChain::new(&["arbres_hauteurenm"]);
const GIRTH: FieldChain = FieldChain::new(&["arbres_circonferenceencm"]);
const PLANTING_YEAR: FieldChain = FieldChain::new(&["com_annee_plantation"]);
const PLANTING_DATE: FieldChain = FieldChain::new(&["arbres_dateplantation"]);
const PHOTO: FieldChain = FieldChain::new(&["com_url_photo1"]);

/// Title used when no name field is present
pub const DEFAULT_TITLE: &str = "Arbre remarquable";

/// Icon prefixed to every card title
pub const TITLE_ICON: &str = "🌳";

// ============================================================================
// Field resolution
// ============================================================================

/// Display text of a field value, `None` when the value counts as absent.
///
/// Present values are non-empty strings, non-zero finite numbers and `true`.
/// Integral floats print without a fractional part.
pub fn field_text(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) if !s.is_empty() => Some(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                return (i != 0).then(|| i.to_string());
            }
            if let Some(u) = n.as_u64() {
                return (u != 0).then(|| u.to_string());
            }
            let f = n.as_f64()?;
            if f == 0.0 || !f.is_finite() {
                None
            } else if f.fract() == 0.0 && f.abs() < 1e15 {
                Some(format!("{}", f as i64))
            } else {
                Some(f.to_string())
            }
        }
        JsonValue::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// First present value along a field chain
pub fn resolve(record: &RawRecord, chain: &FieldChain) -> Option<String> {
    chain
        .fields
        .iter()
        .filter_map(|name| record.get(*name))
        .find_map(field_text)
}

// ============================================================================
// RecordFormatter
// ============================================================================

/// Maps raw catalog records to [`FormattedRecord`] cards
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordFormatter;

impl RecordFormatter {
    /// Create a new formatter
    pub fn new() -> Self {
        Self
    }

    /// Format one record. Never fails.
    pub fn format(&self, record: &RawRecord) -> FormattedRecord {
        let title = resolve(record, &TITLE).unwrap_or_else(|| DEFAULT_TITLE.to_string());

        let detail_lines = Detail::ORDER
            .iter()
            .filter_map(|detail| {
                self.detail_value(record, *detail)
                    .map(|value| detail.line(&value))
            })
            .collect();

        FormattedRecord {
            title: format!("{TITLE_ICON} {title}"),
            detail_lines,
            photo_url: resolve(record, &PHOTO),
        }
    }

    /// Format a page of records, preserving order
    pub fn format_all(&self, records: &[RawRecord]) -> Vec<FormattedRecord> {
        records.iter().map(|r| self.format(r)).collect()
    }

    /// Resolved value for a detail line, `None` when it should be left out
    pub fn detail_value(&self, record: &RawRecord, detail: Detail) -> Option<String> {
        match detail {
            Detail::LatinName => latin_name(record),
            Detail::Address => resolve(record, &ADDRESS),
            Detail::District => resolve(record, &DISTRICT),
            Detail::Height => resolve(record, &HEIGHT),
            Detail::Girth => resolve(record, &GIRTH),
            Detail::PlantingYear => planting_year(record),
        }
    }
}

/// Dedicated latin name, else "genus species"
fn latin_name(record: &RawRecord) -> Option<String> {
    if let Some(name) = resolve(record, &LATIN_NAME) {
        return Some(name);
    }

    let genus = resolve(record, &GENUS).unwrap_or_default();
    let species = resolve(record, &SPECIES).unwrap_or_default();
    let combined = format!("{genus} {species}");
    let combined = combined.trim();

    (!combined.is_empty()).then(|| combined.to_string())
}

/// Dedicated year, else the part of the planting date before the first '-'
fn planting_year(record: &RawRecord) -> Option<String> {
    if let Some(year) = resolve(record, &PLANTING_YEAR) {
        return Some(year);
    }

    let date = resolve(record, &PLANTING_DATE)?;
    let year = date.split('-').next().unwrap_or_default();

    (!year.is_empty()).then(|| year.to_string())
}
