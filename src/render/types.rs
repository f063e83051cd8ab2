//! Renderer types and traits

use super::renderers::{HtmlRenderer, JsonRenderer, TextRenderer};
use crate::pagination::ViewUpdate;

/// User-facing texts shared by all renderers
pub mod messages {
    /// Shown while the first page is loading
    pub const LOADING: &str = "Chargement des arbres remarquables...";
    /// Error heading
    pub const ERROR_TITLE: &str = "❌ Erreur";
    /// Prefix of the error message
    pub const ERROR_PREFIX: &str = "Impossible de charger les données";
    /// Hint under the error message
    pub const ERROR_HINT: &str = "Vérifiez votre connexion internet ou réessayez plus tard.";
    /// No-result heading
    pub const NO_RESULTS_TITLE: &str = "🔍 Aucun arbre trouvé";
    /// Hint under the no-result heading
    pub const NO_RESULTS_HINT: &str = "Essayez avec d'autres termes de recherche.";
    /// Photo link label
    pub const PHOTO_LINK: &str = "Voir la photo";
    /// Placeholder when a tree has no photo
    pub const NO_PHOTO: &str = "Photo non disponible";
    /// Load-more control label
    pub const LOAD_MORE: &str = "Charger plus";
}

/// Output format of a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderFormat {
    /// Terminal cards (default)
    #[default]
    Text,
    /// One JSON document per update
    Json,
    /// HTML fragments
    Html,
}

impl RenderFormat {
    /// Build the renderer for this format
    pub fn renderer(self) -> Box<dyn ViewRenderer> {
        match self {
            RenderFormat::Text => Box::new(TextRenderer::new()),
            RenderFormat::Json => Box::new(JsonRenderer::new()),
            RenderFormat::Html => Box::new(HtmlRenderer::new()),
        }
    }
}

/// Turns controller output into displayable text
pub trait ViewRenderer: Send + Sync {
    /// Render one update. Skipped updates render as an empty string.
    fn render(&self, update: &ViewUpdate) -> String;

    /// Render the loading indicator shown before a fresh search
    fn loader(&self) -> String;
}
