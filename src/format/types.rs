//! Formatter types
//!
//! The display model of a tree card and the field chains feeding it.

use serde::{Deserialize, Serialize};

/// A display-ready tree card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedRecord {
    /// Card title, prefixed with the tree icon
    pub title: String,
    /// Detail lines in [`Detail::ORDER`] order
    pub detail_lines: Vec<String>,
    /// Photo link, `None` shows the "no photo" placeholder
    pub photo_url: Option<String>,
}

impl FormattedRecord {
    /// Check if the record has a photo
    pub fn has_photo(&self) -> bool {
        self.photo_url.is_some()
    }
}

/// Ordered field names resolving one logical attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldChain {
    /// Field names, primary first
    pub fields: &'static [&'static str],
}

impl FieldChain {
    /// Create a chain from field names, primary first
    pub const fn new(fields: &'static [&'static str]) -> Self {
        Self { fields }
    }

    /// Primary field name
    pub fn primary(&self) -> Option<&'static str> {
        self.fields.first().copied()
    }
}

/// Detail line kinds, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Detail {
    /// Latin (botanical) name
    LatinName,
    /// Street address
    Address,
    /// Paris district (arrondissement)
    District,
    /// Height in metres
    Height,
    /// Girth in centimetres
    Girth,
    /// Planting year
    PlantingYear,
}

impl Detail {
    /// Display order of detail lines
    pub const ORDER: [Detail; 6] = [
        Detail::LatinName,
        Detail::Address,
        Detail::District,
        Detail::Height,
        Detail::Girth,
        Detail::PlantingYear,
    ];

    /// Leading icon
    pub fn icon(self) -> &'static str {
        match self {
            Detail::LatinName => "🌿",
            Detail::Address => "📍",
            Detail::District => "🏙️",
            Detail::Height => "📏",
            Detail::Girth => "📐",
            Detail::PlantingYear => "🌱",
        }
    }

    /// Label shown before the value
    pub fn label(self) -> &'static str {
        match self {
            Detail::LatinName => "Nom latin",
            Detail::Address => "Adresse",
            Detail::District => "Arrondissement",
            Detail::Height => "Hauteur",
            Detail::Girth => "Circonférence",
            Detail::PlantingYear => "Planté en",
        }
    }

    /// Unit appended after the value
    pub fn unit(self) -> Option<&'static str> {
        match self {
            Detail::Height => Some("m"),
            Detail::Girth => Some("cm"),
            _ => None,
        }
    }

    /// Render the detail line for a value
    pub fn line(self, value: &str) -> String {
        match self.unit() {
            Some(unit) => format!("{} {}: {value} {unit}", self.icon(), self.label()),
            None => format!("{} {}: {value}", self.icon(), self.label()),
        }
    }
}
