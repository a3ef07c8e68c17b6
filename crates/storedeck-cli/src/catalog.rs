//! `catalog` sub-commands: read-only views over the fixture catalog.

use clap::Subcommand;
use storedeck_core::{load_catalog, AppConfig, Product};

/// Sub-commands available under `catalog`.
#[derive(Debug, Subcommand)]
pub enum CatalogCommands {
    /// List every product with status, price and stock
    List,
    /// Show the variants of one product
    Show {
        /// Product id (e.g., 1)
        id: String,
    },
}

pub(crate) fn run(config: &AppConfig, command: CatalogCommands) -> anyhow::Result<()> {
    let catalog = load_catalog(&config.catalog_path)?;
    match command {
        CatalogCommands::List => {
            if catalog.is_empty() {
                println!("catalog is empty: {}", config.catalog_path.display());
                return Ok(());
            }
            println!(
                "{:<6}{:<28}{:<16}{:<14}{:>10}{:>7}{:>10}",
                "ID", "NAME", "CATEGORY", "STATUS", "PRICE", "STOCK", "VARIANTS"
            );
            for product in catalog.products() {
                println!(
                    "{:<6}{:<28}{:<16}{:<14}{:>10}{:>7}{:>10}",
                    product.id,
                    truncate(&product.name, 26),
                    truncate(&product.category, 14),
                    product.status.to_string(),
                    product.price,
                    product.stock,
                    product.variant_count()
                );
            }
        }
        CatalogCommands::Show { id } => {
            let product = catalog
                .get(&id)
                .ok_or_else(|| anyhow::anyhow!("product '{id}' not found in catalog"))?;
            print_product(product);
        }
    }
    Ok(())
}

fn print_product(product: &Product) {
    println!("{} ({})", product.name, product.id);
    println!(
        "category: {}  status: {}  price: {}  stock: {}",
        product.category, product.status, product.price, product.stock
    );
    println!();
    crate::variants::print_table(&product.variants);
}

/// Cut `s` to at most `max` characters, marking the cut with `...`.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        format!(
            "{}...",
            s.chars().take(max.saturating_sub(3)).collect::<String>()
        )
    } else {
        s.to_string()
    }
}
