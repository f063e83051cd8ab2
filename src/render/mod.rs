//! Rendering module
//!
//! Supports: terminal text, JSON lines, HTML fragments
//!
//! # Overview
//!
//! Renderers turn [`ViewUpdate`](crate::pagination::ViewUpdate) values into
//! output text. They hold no state: whether an update clears or extends the
//! list is carried by the update itself.

mod renderers;
mod types;

pub use renderers::{escape_html, HtmlRenderer, JsonRenderer, TextRenderer};
pub use types::{messages, RenderFormat, ViewRenderer};

#[cfg(test)]
mod tests;
