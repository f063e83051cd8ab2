//! Renderer implementations
//!
//! Each renderer handles a specific output format.

use super::types::{messages, ViewRenderer};
use crate::format::FormattedRecord;
use crate::pagination::{ResultsSummary, ViewUpdate};
use serde_json::{json, Value};
use std::fmt::Write as _;

// ============================================================================
// Text Renderer
// ============================================================================

/// Plain-text cards for the terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    /// Create a new text renderer
    pub fn new() -> Self {
        Self
    }

    fn card(&self, record: &FormattedRecord) -> String {
        let mut out = record.title.clone();
        for line in &record.detail_lines {
            let _ = write!(out, "\n   {line}");
        }
        match &record.photo_url {
            Some(url) => {
                let _ = write!(out, "\n   📷 {}: {url}", messages::PHOTO_LINK);
            }
            None => {
                let _ = write!(out, "\n   🌳 {}", messages::NO_PHOTO);
            }
        }
        out
    }

    fn page(&self, records: &[FormattedRecord], summary: ResultsSummary) -> String {
        let mut out = records
            .iter()
            .map(|r| self.card(r))
            .collect::<Vec<_>>()
            .join("\n\n");

        if !out.is_empty() {
            out.push_str("\n\n");
        }
        let _ = write!(out, "{summary}");
        if summary.has_more() {
            let _ = write!(out, "\n↓ {} (+)", messages::LOAD_MORE);
        }
        out
    }
}

impl ViewRenderer for TextRenderer {
    fn render(&self, update: &ViewUpdate) -> String {
        match update {
            ViewUpdate::Replace { records, summary } | ViewUpdate::Append { records, summary } => {
                self.page(records, *summary)
            }
            ViewUpdate::NoResults { .. } => format!(
                "{}\n{}",
                messages::NO_RESULTS_TITLE,
                messages::NO_RESULTS_HINT
            ),
            ViewUpdate::Failed { error } => format!(
                "{}\n{}: {}\n{}",
                messages::ERROR_TITLE,
                messages::ERROR_PREFIX,
                error.message(),
                messages::ERROR_HINT
            ),
            ViewUpdate::Skipped => String::new(),
        }
    }

    fn loader(&self) -> String {
        messages::LOADING.to_string()
    }
}

// ============================================================================
// JSON Renderer
// ============================================================================

/// One compact JSON document per update
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    /// Create a new JSON renderer
    pub fn new() -> Self {
        Self
    }

    /// JSON value for an update
    pub fn to_value(&self, update: &ViewUpdate) -> Value {
        match update {
            ViewUpdate::Replace { records, summary } => page_value("replace", records, *summary),
            ViewUpdate::Append { records, summary } => page_value("append", records, *summary),
            ViewUpdate::NoResults { summary } => json!({
                "kind": "no_results",
                "displayed": summary.displayed,
                "total": summary.total,
            }),
            ViewUpdate::Failed { error } => json!({
                "kind": "error",
                "message": error.message(),
                "status": error.status(),
            }),
            ViewUpdate::Skipped => json!({ "kind": "skipped" }),
        }
    }
}

fn page_value(kind: &str, records: &[FormattedRecord], summary: ResultsSummary) -> Value {
    json!({
        "kind": kind,
        "records": records,
        "displayed": summary.displayed,
        "total": summary.total,
        "has_more": summary.has_more(),
    })
}

impl ViewRenderer for JsonRenderer {
    fn render(&self, update: &ViewUpdate) -> String {
        self.to_value(update).to_string()
    }

    fn loader(&self) -> String {
        json!({ "kind": "loading" }).to_string()
    }
}

// ============================================================================
// HTML Renderer
// ============================================================================

/// HTML fragments using the catalog widget's card markup
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    /// Create a new HTML renderer
    pub fn new() -> Self {
        Self
    }

    /// Markup of one card
    pub fn card(&self, record: &FormattedRecord) -> String {
        let photo = match &record.photo_url {
            Some(url) => format!(
                "<div class=\"photo-info\"><p class=\"photo-link\">📷 <a href=\"{}\" target=\"_blank\">{}</a></p></div>",
                escape_html(url),
                messages::PHOTO_LINK
            ),
            None => format!(
                "<div class=\"no-photo-info\"><p class=\"no-photo\">🌳 <em>{}</em></p></div>",
                messages::NO_PHOTO
            ),
        };

        let details: String = record
            .detail_lines
            .iter()
            .map(|line| format!("<p>{}</p>", detail_markup(line)))
            .collect();

        format!(
            "<div class=\"data-card\"><h3>{}</h3><div class=\"card-content\">{photo}<div class=\"card-details\">{details}</div></div></div>",
            escape_html(&record.title)
        )
    }

    fn page(&self, records: &[FormattedRecord], summary: ResultsSummary) -> String {
        let mut out: String = records.iter().map(|r| self.card(r)).collect();
        let _ = write!(out, "<p class=\"results-count\">{summary}</p>");
        if summary.has_more() {
            let _ = write!(
                out,
                "<button class=\"load-more\">{}</button>",
                messages::LOAD_MORE
            );
        }
        out
    }
}

/// Bold the label of an "icon Label: value" detail line
fn detail_markup(line: &str) -> String {
    let Some((icon, rest)) = line.split_once(' ') else {
        return escape_html(line);
    };
    match rest.split_once(": ") {
        Some((label, value)) => format!(
            "{icon} <strong>{}:</strong> {}",
            escape_html(label),
            escape_html(value)
        ),
        None => escape_html(line),
    }
}

impl ViewRenderer for HtmlRenderer {
    fn render(&self, update: &ViewUpdate) -> String {
        match update {
            ViewUpdate::Replace { records, summary } | ViewUpdate::Append { records, summary } => {
                self.page(records, *summary)
            }
            ViewUpdate::NoResults { .. } => format!(
                "<div class=\"no-results\"><h3>{}</h3><p>{}</p></div>",
                messages::NO_RESULTS_TITLE,
                escape_html(messages::NO_RESULTS_HINT)
            ),
            ViewUpdate::Failed { error } => format!(
                "<div class=\"error-message\"><h3>{}</h3><p>{}: {}</p><p>{}</p></div>",
                messages::ERROR_TITLE,
                messages::ERROR_PREFIX,
                escape_html(&error.message()),
                messages::ERROR_HINT
            ),
            ViewUpdate::Skipped => String::new(),
        }
    }

    fn loader(&self) -> String {
        format!(
            "<div class=\"loader\"><div class=\"spinner\"></div><p>{}</p></div>",
            messages::LOADING
        )
    }
}

/// Escape text for HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
