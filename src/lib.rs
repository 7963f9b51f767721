//! # Product Catalog
//!
//! A product catalog REST service built on axum.
//!
//! ## Features
//!
//! - **Listing pipeline**: untrusted `limit`/`page`/`sort`/`query` parameters are
//!   decoded into a validated [`QuerySpec`](core::QuerySpec) before any store call
//! - **Defensive filters**: the JSON `query` parameter decodes to a typed
//!   [`FieldMatchMap`](core::FieldMatchMap) or a well-defined client error
//! - **Navigation links**: `prevLink`/`nextLink` replay the client's own parameters
//! - **Pluggable storage**: any [`CatalogStore`](core::CatalogStore) can be injected
//! - **YAML configuration**: page sizes, error policies and link style
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use catalog::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     ServerBuilder::new()
//!         .with_catalog_store(InMemoryCatalogStore::new())
//!         .with_config_file("catalog.yaml")?
//!         .serve_configured()
//!         .await
//! }
//! ```
//!
//! ```text
//! GET /api/products?limit=5&page=2&sort=asc&query={"category":"tools"}
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        CatalogError, CatalogStore, ConfigError, Criterion, FieldMatchMap, FieldSource,
        ListingParams, ListingResponse, PageResult, Product, ProductError, QueryError,
        QuerySpec, SortKey, StorageError, list_products,
    };

    // === Storage ===
    pub use crate::storage::InMemoryCatalogStore;

    // === Config ===
    pub use crate::config::{CatalogConfig, LinkStyle, ListingConfig, MalformedFilterPolicy};

    // === Server ===
    pub use crate::server::{RestExposure, ServerBuilder, ServerHost};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
