use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// YAML fixture file the session catalog is seeded from.
    pub catalog_path: PathBuf,
    /// Prefix for placeholder SKUs, e.g. `"SKU"` → `"SKU-3F9A01C2"`.
    pub sku_prefix: String,
    /// Price given to new variants while the product's base price is empty.
    pub default_price: String,
}

impl AppConfig {
    /// Variant seeding defaults for an editing session that has no base or
    /// sale price yet.
    #[must_use]
    pub fn variant_defaults(&self) -> crate::VariantDefaults {
        crate::VariantDefaults {
            fallback_price: self.default_price.clone(),
            sku_prefix: self.sku_prefix.clone(),
            ..crate::VariantDefaults::default()
        }
    }
}
