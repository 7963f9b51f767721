//! Configuration loading and management

use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What to do with a `query` parameter that is not a valid filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedFilterPolicy {
    /// Answer 400 with the decoding error
    #[default]
    Reject,
    /// Log a warning and list without a filter
    Ignore,
}

/// How navigation links render parameters the client did not send
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkStyle {
    /// Leave absent `sort`/`query` out of the link
    #[default]
    Omit,
    /// Write the literal `undefined`, as legacy clients expect
    Legacy,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the server binds to
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Listing endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    /// Path the product routes are mounted on, also used in navigation links
    pub base_path: String,

    /// Page size when `limit` is absent or unusable
    pub default_limit: usize,

    /// Upper bound applied to `limit`
    pub max_limit: usize,

    /// Reject non-numeric `limit`/`page` with a 400 instead of defaulting
    pub strict_pagination: bool,

    pub malformed_filter: MalformedFilterPolicy,

    pub link_style: LinkStyle,

    /// Deadline for a single catalog store call
    pub store_timeout_ms: u64,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            base_path: "/api/products".to_string(),
            default_limit: 10,
            max_limit: 100,
            strict_pagination: false,
            malformed_filter: MalformedFilterPolicy::Reject,
            link_style: LinkStyle::Omit,
            store_timeout_ms: 5_000,
        }
    }
}

impl ListingConfig {
    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }
}

/// Complete service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub server: ServerConfig,
    pub listing: ListingConfig,
}

impl CatalogConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
                file: Some(path.to_string()),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        let listing = &self.listing;

        if listing.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "listing.default_limit".to_string(),
                value: "0".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        if listing.max_limit < listing.default_limit {
            return Err(ConfigError::InvalidValue {
                field: "listing.max_limit".to_string(),
                value: listing.max_limit.to_string(),
                message: format!(
                    "must not be lower than default_limit ({})",
                    listing.default_limit
                ),
            });
        }

        if !listing.base_path.starts_with('/') || listing.base_path.ends_with('/') {
            return Err(ConfigError::InvalidValue {
                field: "listing.base_path".to_string(),
                value: listing.base_path.clone(),
                message: "must start with '/' and not end with '/'".to_string(),
            });
        }

        Ok(())
    }
}
