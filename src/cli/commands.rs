//! CLI commands and argument parsing

use crate::render::RenderFormat;
use clap::{Parser, Subcommand};

/// Browse and search the Paris notable trees catalog
#[derive(Parser, Debug)]
#[command(name = "arbres")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Catalog search endpoint
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Records per page
    #[arg(long, global = true)]
    pub page_size: Option<u32>,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the catalog, or the results of a search
    List {
        /// Free-text search
        #[arg(short, long)]
        query: Option<String>,

        /// Number of pages to fetch
        #[arg(short, long, default_value = "1")]
        pages: u32,
    },

    /// Interactive session: type a search, empty line or `+` for more, `q` to quit
    Browse,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable cards
    Text,
    /// JSON output (one update per line)
    Json,
    /// HTML fragments
    Html,
}

impl From<OutputFormat> for RenderFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => RenderFormat::Text,
            OutputFormat::Json => RenderFormat::Json,
            OutputFormat::Html => RenderFormat::Html,
        }
    }
}

/// One line of input in a browse session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Start a new search
    Search(String),
    /// Fetch the next page
    LoadMore,
    /// Back to the unfiltered catalog
    Reset,
    /// End the session
    Quit,
}

impl Intent {
    /// Parse a line typed by the user
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "" | "+" => Intent::LoadMore,
            "q" | ":q" | ":quit" => Intent::Quit,
            ":reset" => Intent::Reset,
            text => Intent::Search(text.to_string()),
        }
    }
}
