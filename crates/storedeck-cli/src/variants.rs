//! `variants` sub-commands: drive a product edit session from the terminal.

use clap::Subcommand;
use storedeck_core::{
    load_catalog, AppConfig, CombinationKey, ProductEditor, ProductOption, Variant, VariantField,
};

/// Sub-commands available under `variants`.
#[derive(Debug, Subcommand)]
pub enum VariantsCommands {
    /// Generate every option combination and print the variant table
    Generate {
        /// Option as `Name=value1,value2`; repeat for each option, in order
        #[arg(long = "option", value_name = "SPEC")]
        options: Vec<String>,
        /// Base price seeded into new variants
        #[arg(long)]
        price: Option<String>,
        /// Sale price seeded into new variants
        #[arg(long)]
        sale_price: Option<String>,
        /// Start from an existing catalog product's variants
        #[arg(long)]
        product: Option<String>,
        /// Disable a combination, written as `Red/S`; repeatable
        #[arg(long = "disable", value_name = "COMBINATION")]
        disable: Vec<String>,
        /// Bulk edit as `field=value` (price, salePrice, stock); repeatable
        #[arg(long = "bulk", value_name = "FIELD=VALUE")]
        bulk: Vec<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Everything `variants generate` needs to build a session.
#[derive(Debug, Default)]
pub(crate) struct GenerateRequest<'a> {
    pub options: &'a [String],
    pub price: Option<&'a str>,
    pub sale_price: Option<&'a str>,
    pub disable: &'a [String],
    pub bulk: &'a [String],
}

pub(crate) fn run(config: &AppConfig, command: VariantsCommands) -> anyhow::Result<()> {
    match command {
        VariantsCommands::Generate {
            options,
            price,
            sale_price,
            product,
            disable,
            bulk,
            json,
        } => {
            let editor = match product {
                Some(id) => load_catalog(&config.catalog_path)?
                    .open_editor(&id, config.variant_defaults())
                    .ok_or_else(|| anyhow::anyhow!("product '{id}' not found in catalog"))?,
                None => ProductEditor::new(config.variant_defaults()),
            };

            let request = GenerateRequest {
                options: &options,
                price: price.as_deref(),
                sale_price: sale_price.as_deref(),
                disable: &disable,
                bulk: &bulk,
            };
            let editor = build_session(editor, &request)?;

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(editor.variants().variants())?
                );
            } else {
                print_table(editor.variants().variants());
                println!();
                println!(
                    "{} variants, {} enabled, total stock {}",
                    editor.variants().len(),
                    editor.variants().enabled_count(),
                    editor.variant_stock_total()
                );
            }
            Ok(())
        }
    }
}

/// Apply prices, options, disables and bulk edits to `editor`, in that order.
///
/// # Errors
///
/// Returns an error if an option spec or bulk edit is malformed, or a
/// combination to disable does not exist.
pub(crate) fn build_session(
    mut editor: ProductEditor,
    request: &GenerateRequest<'_>,
) -> anyhow::Result<ProductEditor> {
    if let Some(price) = request.price {
        editor.set_base_price(price);
    }
    if let Some(sale_price) = request.sale_price {
        editor.set_sale_price(sale_price);
    }

    for spec in request.options {
        editor.push_option(ProductOption::parse_spec(spec)?);
    }

    for combination in request.disable {
        let key = parse_combination(combination);
        let id = editor
            .variants()
            .find_by_key(&key)
            .map(|v| v.id.clone())
            .ok_or_else(|| anyhow::anyhow!("no variant for combination '{combination}'"))?;
        editor.set_variant_enabled(&id, false);
    }

    for edit in request.bulk {
        let (field, value) = edit
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("bulk edit '{edit}' must be field=value"))?;
        let field: VariantField = field.parse()?;
        let written = editor.apply_bulk(field, value);
        tracing::info!(%field, value, written, "bulk edit applied");
    }

    Ok(editor)
}

/// `"Red / S"` → `["Red", "S"]`.
fn parse_combination(raw: &str) -> CombinationKey {
    CombinationKey::from(
        raw.split('/')
            .map(|part| part.trim().to_string())
            .collect::<Vec<_>>(),
    )
}

pub(crate) fn print_table(variants: &[Variant]) {
    if variants.is_empty() {
        println!("no variants");
        return;
    }
    println!(
        "{:<4}{:<30}{:>10}{:>10}{:>8}  SKU",
        "ON", "COMBINATION", "PRICE", "SALE", "STOCK"
    );
    for variant in variants {
        let sale = if variant.sale_price.is_empty() {
            "---"
        } else {
            variant.sale_price.as_str()
        };
        println!(
            "{:<4}{:<30}{:>10}{:>10}{:>8}  {}",
            if variant.is_enabled { "x" } else { "" },
            crate::catalog::truncate(&variant.key().to_string(), 28),
            variant.price,
            sale,
            variant.stock,
            variant.sku
        );
    }
}
