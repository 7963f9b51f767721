//! Integration tests for YAML configuration loading

use catalog::prelude::*;
use std::io::Write;

fn write_config(yaml: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(yaml.as_bytes()).unwrap();
    file
}

#[test]
fn test_full_config_file() {
    let file = write_config(
        r#"
server:
  bind: "0.0.0.0:9000"
listing:
  base_path: "/v2/products"
  default_limit: 20
  max_limit: 50
  strict_pagination: true
  malformed_filter: ignore
  link_style: legacy
  store_timeout_ms: 750
"#,
    );

    let config = CatalogConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();

    assert_eq!(config.server.bind, "0.0.0.0:9000");
    assert_eq!(config.listing.base_path, "/v2/products");
    assert_eq!(config.listing.default_limit, 20);
    assert_eq!(config.listing.max_limit, 50);
    assert!(config.listing.strict_pagination);
    assert_eq!(config.listing.malformed_filter, MalformedFilterPolicy::Ignore);
    assert_eq!(config.listing.link_style, LinkStyle::Legacy);
    assert_eq!(config.listing.store_timeout().as_millis(), 750);
}

#[test]
fn test_partial_config_keeps_defaults() {
    let file = write_config("listing:\n  default_limit: 25\n");

    let config = CatalogConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();

    assert_eq!(config.listing.default_limit, 25);
    assert_eq!(config.listing.max_limit, 100);
    assert_eq!(config.listing.base_path, "/api/products");
    assert_eq!(config.listing.malformed_filter, MalformedFilterPolicy::Reject);
    assert_eq!(config.server.bind, "127.0.0.1:8080");
}

#[test]
fn test_empty_mapping_is_default() {
    let config = CatalogConfig::from_yaml_str("{}").unwrap();
    assert_eq!(config.listing.default_limit, 10);
    assert_eq!(config.listing.link_style, LinkStyle::Omit);
}

#[test]
fn test_parse_error_names_the_file() {
    let file = write_config("listing:\n  default_limit: [oops\n");
    let path = file.path().to_str().unwrap().to_string();

    let err = CatalogConfig::from_yaml_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { file: Some(ref f), .. } if *f == path));
    assert!(err.to_string().contains(&path));
}

#[test]
fn test_unknown_policy_is_parse_error() {
    let err = CatalogConfig::from_yaml_str("listing:\n  malformed_filter: shrug\n").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = CatalogConfig::from_yaml_file("/nonexistent/catalog.yaml").unwrap_err();
    assert!(matches!(err, ConfigError::IoError { .. }));
}

#[test]
fn test_invalid_values_are_rejected() {
    let cases = [
        ("listing:\n  default_limit: 0\n", "listing.default_limit"),
        (
            "listing:\n  default_limit: 30\n  max_limit: 20\n",
            "listing.max_limit",
        ),
        ("listing:\n  base_path: products\n", "listing.base_path"),
    ];

    for (yaml, field) in cases {
        match CatalogConfig::from_yaml_str(yaml) {
            Err(ConfigError::InvalidValue { field: f, .. }) => assert_eq!(f, field),
            other => panic!("expected InvalidValue for {}, got {:?}", field, other),
        }
    }
}

#[test]
fn test_builder_uses_loaded_config() {
    let file = write_config("listing:\n  base_path: /shop/items\n");

    let host = ServerBuilder::new()
        .with_catalog_store(InMemoryCatalogStore::new())
        .with_config_file(file.path().to_str().unwrap())
        .unwrap()
        .build_host()
        .unwrap();

    assert_eq!(host.base_path(), "/shop/items");
}
