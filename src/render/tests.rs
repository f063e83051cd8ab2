//! Tests for renderer module

use super::*;
use crate::fetch::FetchError;
use crate::format::FormattedRecord;
use crate::pagination::{ResultsSummary, ViewUpdate};
use pretty_assertions::assert_eq;

fn platane() -> FormattedRecord {
    FormattedRecord {
        title: "🌳 Platane".to_string(),
        detail_lines: vec![
            "🌿 Nom latin: Platanus x hispanica".to_string(),
            "📏 Hauteur: 30 m".to_string(),
        ],
        photo_url: Some("https://example.org/p.jpg".to_string()),
    }
}

fn marronnier() -> FormattedRecord {
    FormattedRecord {
        title: "🌳 Marronnier".to_string(),
        detail_lines: vec![],
        photo_url: None,
    }
}

fn replace(summary: ResultsSummary) -> ViewUpdate {
    ViewUpdate::Replace {
        records: vec![platane(), marronnier()],
        summary,
    }
}

const SOME_MORE: ResultsSummary = ResultsSummary {
    displayed: 9,
    total: 25,
};

const ALL_SHOWN: ResultsSummary = ResultsSummary {
    displayed: 25,
    total: 25,
};

// ============================================================================
// RenderFormat Tests
// ============================================================================

#[test]
fn test_render_format_default() {
    assert_eq!(RenderFormat::default(), RenderFormat::Text);
}

#[test]
fn test_render_format_builds_matching_renderer() {
    let update = ViewUpdate::Skipped;
    for format in [RenderFormat::Text, RenderFormat::Html] {
        assert_eq!(format.renderer().render(&update), "");
    }
    assert_eq!(
        RenderFormat::Json.renderer().render(&update),
        r#"{"kind":"skipped"}"#
    );
}

// ============================================================================
// TextRenderer Tests
// ============================================================================

#[test]
fn test_text_page_with_more() {
    let out = TextRenderer::new().render(&replace(SOME_MORE));

    assert_eq!(
        out,
        "🌳 Platane\n   🌿 Nom latin: Platanus x hispanica\n   📏 Hauteur: 30 m\n   📷 Voir la photo: https://example.org/p.jpg\n\n\
         🌳 Marronnier\n   🌳 Photo non disponible\n\n\
         9 arbres sur 25\n↓ Charger plus (+)"
    );
}

#[test]
fn test_text_last_page_has_no_load_more() {
    let out = TextRenderer::new().render(&ViewUpdate::Append {
        records: vec![marronnier()],
        summary: ALL_SHOWN,
    });
    assert!(out.ends_with("25 arbres sur 25"));
    assert!(!out.contains("Charger plus"));
}

#[test]
fn test_text_empty_append_shows_counter_only() {
    let out = TextRenderer::new().render(&ViewUpdate::Append {
        records: vec![],
        summary: ALL_SHOWN,
    });
    assert_eq!(out, "25 arbres sur 25");
}

#[test]
fn test_text_no_results() {
    let out = TextRenderer::new().render(&ViewUpdate::NoResults {
        summary: ResultsSummary::default(),
    });
    assert_eq!(
        out,
        "🔍 Aucun arbre trouvé\nEssayez avec d'autres termes de recherche."
    );
}

#[test]
fn test_text_error() {
    let out = TextRenderer::new().render(&ViewUpdate::Failed {
        error: FetchError::HttpStatus { status: 500 },
    });
    assert_eq!(
        out,
        "❌ Erreur\nImpossible de charger les données: Erreur HTTP 500\nVérifiez votre connexion internet ou réessayez plus tard."
    );
}

#[test]
fn test_text_loader() {
    assert_eq!(
        TextRenderer::new().loader(),
        "Chargement des arbres remarquables..."
    );
}

// ============================================================================
// JsonRenderer Tests
// ============================================================================

#[test]
fn test_json_page() {
    let value = JsonRenderer::new().to_value(&replace(SOME_MORE));

    assert_eq!(value["kind"], "replace");
    assert_eq!(value["displayed"], 9);
    assert_eq!(value["total"], 25);
    assert_eq!(value["has_more"], true);
    assert_eq!(value["records"][0]["title"], "🌳 Platane");
    assert_eq!(value["records"][0]["detail_lines"][1], "📏 Hauteur: 30 m");
    assert!(value["records"][1]["photo_url"].is_null());
}

#[test]
fn test_json_error_and_no_results() {
    let renderer = JsonRenderer::new();

    let value = renderer.to_value(&ViewUpdate::Failed {
        error: FetchError::network("connection refused"),
    });
    assert_eq!(value["kind"], "error");
    assert_eq!(value["message"], "connection refused");
    assert!(value["status"].is_null());

    let value = renderer.to_value(&ViewUpdate::NoResults {
        summary: ResultsSummary::default(),
    });
    assert_eq!(value["kind"], "no_results");
    assert_eq!(value["total"], 0);
}

#[test]
fn test_json_render_is_single_line() {
    let out = JsonRenderer::new().render(&replace(SOME_MORE));
    assert!(!out.contains('\n'));
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["kind"], "replace");
}

// ============================================================================
// HtmlRenderer Tests
// ============================================================================

#[test]
fn test_html_card_with_photo() {
    let out = HtmlRenderer::new().card(&platane());

    assert_eq!(
        out,
        "<div class=\"data-card\"><h3>🌳 Platane</h3><div class=\"card-content\">\
         <div class=\"photo-info\"><p class=\"photo-link\">📷 <a href=\"https://example.org/p.jpg\" target=\"_blank\">Voir la photo</a></p></div>\
         <div class=\"card-details\"><p>🌿 <strong>Nom latin:</strong> Platanus x hispanica</p><p>📏 <strong>Hauteur:</strong> 30 m</p></div>\
         </div></div>"
    );
}

#[test]
fn test_html_card_without_photo() {
    let out = HtmlRenderer::new().card(&marronnier());
    assert!(out.contains("<p class=\"no-photo\">🌳 <em>Photo non disponible</em></p>"));
    assert!(!out.contains("<a href"));
}

#[test]
fn test_html_escapes_record_text() {
    let record = FormattedRecord {
        title: "🌳 <script>".to_string(),
        detail_lines: vec!["📍 Adresse: 1 rue \"A&B\"".to_string()],
        photo_url: Some("https://x.org/?a=1&b=\"2\"".to_string()),
    };
    let out = HtmlRenderer::new().card(&record);

    assert!(out.contains("<h3>🌳 &lt;script&gt;</h3>"));
    assert!(out.contains("<strong>Adresse:</strong> 1 rue &quot;A&amp;B&quot;"));
    assert!(out.contains("href=\"https://x.org/?a=1&amp;b=&quot;2&quot;\""));
}

#[test]
fn test_html_page_counter_and_button() {
    let renderer = HtmlRenderer::new();

    let out = renderer.render(&replace(SOME_MORE));
    assert!(out.contains("<p class=\"results-count\">9 arbres sur 25</p>"));
    assert!(out.ends_with("<button class=\"load-more\">Charger plus</button>"));

    let out = renderer.render(&replace(ALL_SHOWN));
    assert!(!out.contains("load-more"));
}

#[test]
fn test_html_error_and_no_results() {
    let renderer = HtmlRenderer::new();

    let out = renderer.render(&ViewUpdate::Failed {
        error: FetchError::network("<timeout>"),
    });
    assert!(out.starts_with("<div class=\"error-message\"><h3>❌ Erreur</h3>"));
    assert!(out.contains("Impossible de charger les données: &lt;timeout&gt;"));

    let out = renderer.render(&ViewUpdate::NoResults {
        summary: ResultsSummary::default(),
    });
    assert!(out.contains("<h3>🔍 Aucun arbre trouvé</h3>"));
    assert!(out.contains("Essayez avec d&#39;autres termes de recherche."));
}

#[test]
fn test_html_loader() {
    assert!(HtmlRenderer::new()
        .loader()
        .contains("<div class=\"spinner\"></div>"));
}

#[test]
fn test_escape_html_plain_text_unchanged() {
    assert_eq!(escape_html("Arbre remarquable"), "Arbre remarquable");
}
