//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, Intent};
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::pagination::{PaginationController, ViewUpdate};
use crate::render::{RenderFormat, ViewRenderer};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::List { query, pages } => self.list(query.as_deref(), *pages).await,
            Commands::Browse => self.browse().await,
        }
    }

    /// Catalog config with command-line overrides applied
    pub fn catalog_config(&self) -> Result<CatalogConfig> {
        let mut builder = CatalogConfig::builder();
        if let Some(endpoint) = &self.cli.endpoint {
            builder = builder.endpoint(endpoint);
        }
        if let Some(page_size) = self.cli.page_size {
            builder = builder.page_size(page_size);
        }
        builder.build()
    }

    fn renderer(&self) -> Box<dyn ViewRenderer> {
        RenderFormat::from(self.cli.format).renderer()
    }

    /// Print the first page, then load more until `pages` pages or the end
    async fn list(&self, query: Option<&str>, pages: u32) -> Result<()> {
        let mut controller = PaginationController::from_config(self.catalog_config()?)?;
        let renderer = self.renderer();

        let first = match query {
            Some(text) => controller.search(text).await,
            None => controller.initial_load().await,
        };
        emit(renderer.as_ref(), &first);

        let mut fetched = 1;
        while fetched < pages && controller.has_more() && !first.is_error() {
            let update = controller.load_more().await;
            emit(renderer.as_ref(), &update);
            if update.is_error() {
                break;
            }
            fetched += 1;
        }

        debug!("Listed {fetched} page(s), {}", controller.summary());
        Ok(())
    }

    /// Interactive session reading intents from stdin
    async fn browse(&self) -> Result<()> {
        let mut controller = PaginationController::from_config(self.catalog_config()?)?;
        let renderer = self.renderer();

        println!("{}", renderer.loader());
        let update = controller.initial_load().await;
        emit(renderer.as_ref(), &update);

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            let update = match Intent::parse(&line) {
                Intent::Quit => break,
                Intent::LoadMore if !controller.has_more() => {
                    info!("All {} trees shown", controller.summary().total);
                    println!("{}", controller.summary());
                    continue;
                }
                Intent::LoadMore => controller.load_more().await,
                Intent::Reset => {
                    println!("{}", renderer.loader());
                    controller.initial_load().await
                }
                Intent::Search(text) => {
                    println!("{}", renderer.loader());
                    controller.search(&text).await
                }
            };
            emit(renderer.as_ref(), &update);
        }

        Ok(())
    }
}

/// Print a rendered update, skipping empty output
fn emit(renderer: &dyn ViewRenderer, update: &ViewUpdate) {
    let out = renderer.render(update);
    if !out.is_empty() {
        println!("{out}");
    }
}
