//! Tests for the record formatter

use super::*;
use crate::types::RawRecord;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

fn record(value: serde_json::Value) -> RawRecord {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

// ============================================================================
// field_text
// ============================================================================

#[test_case(json!("Platane"), Some("Platane") ; "non-empty string")]
#[test_case(json!(""), None ; "empty string")]
#[test_case(json!(30), Some("30") ; "integer")]
#[test_case(json!(0), None ; "zero")]
#[test_case(json!(30.0), Some("30") ; "integral float")]
#[test_case(json!(12.5), Some("12.5") ; "fractional float")]
#[test_case(json!(-3), Some("-3") ; "negative integer")]
#[test_case(json!(true), Some("true") ; "true")]
#[test_case(json!(false), None ; "false")]
#[test_case(json!(null), None ; "null")]
#[test_case(json!(["a"]), None ; "array")]
fn test_field_text(value: serde_json::Value, expected: Option<&str>) {
    assert_eq!(field_text(&value).as_deref(), expected);
}

#[test]
fn test_resolve_primary_wins() {
    let chain = FieldChain::new(&["com_adresse", "arbres_adresse"]);
    let rec = record(json!({
        "com_adresse": "Jardin des Plantes",
        "arbres_adresse": "57 rue Cuvier"
    }));
    assert_eq!(resolve(&rec, &chain).as_deref(), Some("Jardin des Plantes"));
    assert_eq!(chain.primary(), Some("com_adresse"));
}

#[test]
fn test_resolve_falls_back_past_empty_primary() {
    let chain = FieldChain::new(&["com_adresse", "arbres_adresse"]);
    let rec = record(json!({"com_adresse": "", "arbres_adresse": "57 rue Cuvier"}));
    assert_eq!(resolve(&rec, &chain).as_deref(), Some("57 rue Cuvier"));

    let rec = record(json!({}));
    assert_eq!(resolve(&rec, &chain), None);
}

// ============================================================================
// Detail
// ============================================================================

#[test]
fn test_detail_lines_text() {
    assert_eq!(Detail::LatinName.line("Platanus"), "🌿 Nom latin: Platanus");
    assert_eq!(Detail::Address.line("Parc Monceau"), "📍 Adresse: Parc Monceau");
    assert_eq!(Detail::District.line("PARIS 8E ARRDT"), "🏙️ Arrondissement: PARIS 8E ARRDT");
    assert_eq!(Detail::Height.line("30"), "📏 Hauteur: 30 m");
    assert_eq!(Detail::Girth.line("520"), "📐 Circonférence: 520 cm");
    assert_eq!(Detail::PlantingYear.line("1814"), "🌱 Planté en: 1814");
}

// ============================================================================
// RecordFormatter
// ============================================================================

#[test]
fn test_format_platane_height_only() {
    let rec = record(json!({"com_nom_usuel": "Platane", "arbres_hauteurenm": 30}));
    let formatted = RecordFormatter::new().format(&rec);

    assert_eq!(
        formatted,
        FormattedRecord {
            title: "🌳 Platane".to_string(),
            detail_lines: vec!["📏 Hauteur: 30 m".to_string()],
            photo_url: None,
        }
    );
    assert!(!formatted.has_photo());
}

#[test]
fn test_format_empty_record() {
    let formatted = RecordFormatter::new().format(&RawRecord::new());
    assert_eq!(formatted.title, "🌳 Arbre remarquable");
    assert!(formatted.detail_lines.is_empty());
    assert!(formatted.photo_url.is_none());
}

#[test]
fn test_format_title_fallback() {
    let rec = record(json!({"arbres_libellefrancais": "Marronnier"}));
    assert_eq!(RecordFormatter::new().format(&rec).title, "🌳 Marronnier");
}

#[test]
fn test_format_full_current_schema() {
    let rec = record(json!({
        "com_nom_usuel": "Platane d'Orient",
        "com_nom_latin": "Platanus orientalis",
        "com_adresse": "Parc Monceau",
        "com_arrondissement": "PARIS 8E ARRDT",
        "arbres_hauteurenm": 30,
        "arbres_circonferenceencm": 720,
        "com_annee_plantation": 1814,
        "com_url_photo1": "https://example.org/platane.jpg"
    }));

    let formatted = RecordFormatter::new().format(&rec);

    assert_eq!(formatted.title, "🌳 Platane d'Orient");
    assert_eq!(
        formatted.detail_lines,
        vec![
            "🌿 Nom latin: Platanus orientalis",
            "📍 Adresse: Parc Monceau",
            "🏙️ Arrondissement: PARIS 8E ARRDT",
            "📏 Hauteur: 30 m",
            "📐 Circonférence: 720 cm",
            "🌱 Planté en: 1814",
        ]
    );
    assert_eq!(
        formatted.photo_url.as_deref(),
        Some("https://example.org/platane.jpg")
    );
}

#[test]
fn test_format_legacy_schema() {
    let rec = record(json!({
        "arbres_libellefrancais": "Cèdre",
        "arbres_genre": "Cedrus",
        "arbres_espece": "libani",
        "arbres_adresse": "57 rue Cuvier",
        "arbres_arrondissement": "PARIS 5E ARRDT",
        "arbres_dateplantation": "1734-01-01T00:09:21+00:00"
    }));

    let formatted = RecordFormatter::new().format(&rec);

    assert_eq!(formatted.title, "🌳 Cèdre");
    assert_eq!(
        formatted.detail_lines,
        vec![
            "🌿 Nom latin: Cedrus libani",
            "📍 Adresse: 57 rue Cuvier",
            "🏙️ Arrondissement: PARIS 5E ARRDT",
            "🌱 Planté en: 1734",
        ]
    );
}

#[test]
fn test_latin_name_from_genus_only_is_trimmed() {
    let rec = record(json!({"arbres_genre": "Quercus"}));
    let formatter = RecordFormatter::new();
    assert_eq!(
        formatter.detail_value(&rec, Detail::LatinName).as_deref(),
        Some("Quercus")
    );

    let rec = record(json!({"arbres_espece": "robur"}));
    assert_eq!(
        formatter.detail_value(&rec, Detail::LatinName).as_deref(),
        Some("robur")
    );
}

#[test]
fn test_latin_name_prefers_dedicated_field() {
    let rec = record(json!({
        "com_nom_latin": "Ginkgo biloba",
        "arbres_genre": "Ginkgo",
        "arbres_espece": "other"
    }));
    assert_eq!(
        RecordFormatter::new().detail_value(&rec, Detail::LatinName).as_deref(),
        Some("Ginkgo biloba")
    );
}

#[test_case(json!({"com_annee_plantation": 1850, "arbres_dateplantation": "1700-01-01"}), Some("1850") ; "year field wins")]
#[test_case(json!({"arbres_dateplantation": "1602-01-01T00:00:00+00:00"}), Some("1602") ; "year from date")]
#[test_case(json!({"arbres_dateplantation": "1602"}), Some("1602") ; "date without dash")]
#[test_case(json!({"arbres_dateplantation": "-01-01"}), None ; "empty year part")]
#[test_case(json!({"com_annee_plantation": ""}), None ; "empty year field")]
fn test_planting_year(fields: serde_json::Value, expected: Option<&str>) {
    let rec = record(fields);
    assert_eq!(
        RecordFormatter::new()
            .detail_value(&rec, Detail::PlantingYear)
            .as_deref(),
        expected
    );
}

#[test]
fn test_detail_order_latin_address_height() {
    // Insertion order deliberately differs from display order
    let rec = record(json!({
        "arbres_hauteurenm": 18,
        "com_adresse": "Square du Temple",
        "com_nom_latin": "Sophora japonica"
    }));

    let lines = RecordFormatter::new().format(&rec).detail_lines;
    assert_eq!(
        lines,
        vec![
            "🌿 Nom latin: Sophora japonica",
            "📍 Adresse: Square du Temple",
            "📏 Hauteur: 18 m",
        ]
    );
}

#[test]
fn test_zero_height_is_omitted() {
    let rec = record(json!({"arbres_hauteurenm": 0, "arbres_circonferenceencm": 310}));
    assert_eq!(
        RecordFormatter::new().format(&rec).detail_lines,
        vec!["📐 Circonférence: 310 cm"]
    );
}

#[test]
fn test_format_is_idempotent() {
    let rec = record(json!({
        "com_nom_usuel": "Tilleul",
        "arbres_genre": "Tilia",
        "com_url_photo1": "https://example.org/t.jpg"
    }));
    let formatter = RecordFormatter::new();
    assert_eq!(formatter.format(&rec), formatter.format(&rec));
}

#[test]
fn test_format_all_preserves_order() {
    let records = vec![
        record(json!({"com_nom_usuel": "A"})),
        record(json!({"com_nom_usuel": "B"})),
        record(json!({})),
    ];
    let titles: Vec<String> = RecordFormatter::new()
        .format_all(&records)
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(titles, vec!["🌳 A", "🌳 B", "🌳 Arbre remarquable"]);
}
