pub mod app_config;
pub mod catalog;
pub mod config;
pub mod editor;
pub mod generator;
pub mod options;
pub mod store;
pub mod variant;

pub use app_config::{AppConfig, Environment};
pub use catalog::{load_catalog, Catalog, Product, ProductStatus};
pub use config::{load_app_config, load_app_config_from_env};
pub use editor::ProductEditor;
pub use generator::{cartesian_product, generate_variants, VariantDefaults};
pub use options::{OptionKind, OptionRegistry, OptionValue, ProductOption};
pub use store::VariantStore;
pub use variant::{CombinationKey, Variant, VariantField};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read catalog file {path}: {source}")]
    CatalogFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file: {0}")]
    CatalogFileParse(#[source] serde_yaml::Error),

    #[error("catalog validation failed: {0}")]
    Validation(String),
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid variant field: {0}")]
    InvalidVariantField(String),

    #[error("invalid option kind: {0}")]
    InvalidOptionKind(String),

    #[error("invalid option spec \"{0}\": expected Name=value1,value2")]
    InvalidOptionSpec(String),
}

/// Fresh opaque identifier for options, values and variants.
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
