mod catalog;
mod variants;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::catalog::CatalogCommands;
use crate::variants::VariantsCommands;

#[derive(Debug, Parser)]
#[command(name = "storedeck")]
#[command(about = "Storefront dashboard catalog and variant tools")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Inspect the fixture product catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
    /// Generate and edit product variants
    Variants {
        #[command(subcommand)]
        command: VariantsCommands,
    },
}

fn main() -> anyhow::Result<()> {
    let config = storedeck_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::debug!(env = %config.env, catalog = %config.catalog_path.display(), "starting");

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Catalog { command }) => catalog::run(&config, command),
        Some(Commands::Variants { command }) => variants::run(&config, command),
        None => {
            println!("storedeck: run with --help to list commands");
            Ok(())
        }
    }
}
