use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::editor::ProductEditor;
use crate::generator::VariantDefaults;
use crate::variant::Variant;
use crate::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    Active,
    Draft,
    OutOfStock,
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductStatus::Active => write!(f, "active"),
            ProductStatus::Draft => write!(f, "draft"),
            ProductStatus::OutOfStock => write!(f, "out_of_stock"),
        }
    }
}

/// A storefront product as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Base price as a decimal string, e.g. `"299.00"`.
    pub price: String,
    /// Product-level stock as shown in listings.
    pub stock: u32,
    pub status: ProductStatus,
    #[serde(default)]
    pub variants: Vec<Variant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Product {
    #[must_use]
    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }

    #[must_use]
    pub fn has_enabled_variants(&self) -> bool {
        self.variants.iter().any(|v| v.is_enabled)
    }

    /// Sum of variant stock; entries that are not integers count as zero.
    #[must_use]
    pub fn variant_stock_total(&self) -> i64 {
        self.variants.iter().filter_map(Variant::stock_count).sum()
    }
}

#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    pub products: Vec<Product>,
}

/// Products available to one dashboard session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from already-loaded products.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if ids or names are blank, product
    /// ids repeat, or a product repeats a variant id.
    pub fn new(products: Vec<Product>) -> Result<Self, ConfigError> {
        validate_products(&products)?;
        Ok(Self { products })
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    #[must_use]
    pub fn get(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    /// Removes the product. Unknown ids are ignored.
    pub fn remove(&mut self, product_id: &str) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != product_id);
        self.products.len() != before
    }

    /// Start an edit session for the product, if it exists.
    #[must_use]
    pub fn open_editor(&self, product_id: &str, defaults: VariantDefaults) -> Option<ProductEditor> {
        self.get(product_id)
            .map(|product| ProductEditor::from_product(product, defaults))
    }
}

/// Load and validate the fixture catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let catalog_file: CatalogFile =
        serde_yaml::from_str(&content).map_err(ConfigError::CatalogFileParse)?;

    let catalog = Catalog::new(catalog_file.products)?;
    tracing::debug!(
        path = %path.display(),
        products = catalog.len(),
        "loaded catalog fixtures"
    );
    Ok(catalog)
}

fn validate_products(products: &[Product]) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for product in products {
        if product.id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "product id must be non-empty".to_string(),
            ));
        }

        if product.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "product '{}' must have a non-empty name",
                product.id
            )));
        }

        if !seen_ids.insert(product.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate product id: '{}'",
                product.id
            )));
        }

        let mut seen_variants = HashSet::new();
        for variant in &product.variants {
            if variant.id.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "product '{}' has a variant with an empty id",
                    product.id
                )));
            }
            if !seen_variants.insert(variant.id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate variant id '{}' in product '{}'",
                    variant.id, product.id
                )));
            }
        }
    }

    Ok(())
}
