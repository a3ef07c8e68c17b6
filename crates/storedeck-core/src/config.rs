use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it from a
/// plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let env = parse_environment(&or_default("STOREDECK_ENV", "development"));
    let log_level = or_default("STOREDECK_LOG_LEVEL", "info");
    let catalog_path = PathBuf::from(or_default(
        "STOREDECK_CATALOG_PATH",
        "./config/catalog.yaml",
    ));

    let sku_prefix = or_default("STOREDECK_SKU_PREFIX", "SKU").trim().to_string();
    if sku_prefix.is_empty() || sku_prefix.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidEnvVar {
            var: "STOREDECK_SKU_PREFIX".to_string(),
            reason: "must be non-empty and contain no whitespace".to_string(),
        });
    }

    let default_price = or_default("STOREDECK_DEFAULT_PRICE", "0.00")
        .trim()
        .to_string();
    if default_price.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "STOREDECK_DEFAULT_PRICE".to_string(),
            reason: "must be non-empty".to_string(),
        });
    }

    Ok(AppConfig {
        env,
        log_level,
        catalog_path,
        sku_prefix,
        default_price,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
