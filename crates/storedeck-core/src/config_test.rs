use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(parse_environment("development"), Environment::Development);
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test"), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn build_app_config_uses_defaults_when_env_is_empty() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.catalog_path.to_str(), Some("./config/catalog.yaml"));
    assert_eq!(cfg.sku_prefix, "SKU");
    assert_eq!(cfg.default_price, "0.00");
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("STOREDECK_ENV", "production");
    map.insert("STOREDECK_LOG_LEVEL", "debug");
    map.insert("STOREDECK_CATALOG_PATH", "/srv/catalog.yaml");
    map.insert("STOREDECK_SKU_PREFIX", " WATCH ");
    map.insert("STOREDECK_DEFAULT_PRICE", "1.00");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.catalog_path.to_str(), Some("/srv/catalog.yaml"));
    assert_eq!(cfg.sku_prefix, "WATCH");
    assert_eq!(cfg.default_price, "1.00");
}

#[test]
fn build_app_config_rejects_blank_sku_prefix() {
    let mut map = HashMap::new();
    map.insert("STOREDECK_SKU_PREFIX", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOREDECK_SKU_PREFIX"),
        "expected InvalidEnvVar(STOREDECK_SKU_PREFIX), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_sku_prefix_with_inner_whitespace() {
    let mut map = HashMap::new();
    map.insert("STOREDECK_SKU_PREFIX", "MY SKU");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOREDECK_SKU_PREFIX"),
        "expected InvalidEnvVar(STOREDECK_SKU_PREFIX), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_blank_default_price() {
    let mut map = HashMap::new();
    map.insert("STOREDECK_DEFAULT_PRICE", "");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOREDECK_DEFAULT_PRICE"),
        "expected InvalidEnvVar(STOREDECK_DEFAULT_PRICE), got: {result:?}"
    );
}

#[test]
fn variant_defaults_carry_config_prefix_and_price() {
    let mut map = HashMap::new();
    map.insert("STOREDECK_SKU_PREFIX", "BAG");
    map.insert("STOREDECK_DEFAULT_PRICE", "5.00");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let defaults = cfg.variant_defaults();
    assert_eq!(defaults.sku_prefix, "BAG");
    assert_eq!(defaults.fallback_price, "5.00");
    assert!(defaults.base_price.is_empty());
    assert!(defaults.sale_price.is_empty());
}
