//! CLI module
//!
//! Command-line front end playing the role of the view layer.
//!
//! # Commands
//!
//! - `list` - Print the first page(s) of the catalog or of a search
//! - `browse` - Interactive search and load-more session on stdin

mod commands;
mod runner;

pub use commands::{Cli, Commands, Intent, OutputFormat};
pub use runner::Runner;
