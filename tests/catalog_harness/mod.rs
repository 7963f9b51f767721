//! Shared test infrastructure for the catalog integration tests.
//!
//! ```text
//! axum_test::TestServer
//!     └─ Router (built by ServerBuilder)
//!         ├─ GET    /api/products        → list_products
//!         ├─ POST   /api/products        → create_product
//!         ├─ GET    /api/products/{pid}  → get_product
//!         ├─ PUT    /api/products/{pid}  → update_product
//!         └─ DELETE /api/products/{pid}  → delete_product
//! ```

#![allow(dead_code)]

use axum_test::TestServer;
use catalog::prelude::*;
use serde_json::{Map, Value, json};
use std::sync::Arc;

/// Attributes of the products every seeded store starts with, in insertion order
pub fn seed_attributes() -> Vec<Value> {
    vec![
        json!({"title": "Hammer", "category": "tools", "price": 15, "stock": 10}),
        json!({"title": "Rake", "category": "garden", "price": 22.5, "stock": 0}),
        json!({"title": "Saw", "category": "tools", "price": 31, "stock": 4}),
        json!({"title": "Hose", "category": "garden", "price": 9.99, "stock": 12}),
        json!({"title": "Wrench", "category": "tools", "price": 12, "stock": 7}),
    ]
}

pub fn as_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {}", other),
    }
}

pub fn seeded_store() -> InMemoryCatalogStore {
    InMemoryCatalogStore::with_products(
        seed_attributes()
            .into_iter()
            .map(|attrs| Product::new(as_map(attrs))),
    )
}

pub fn server_with(store: impl CatalogStore + 'static, config: CatalogConfig) -> TestServer {
    let router = ServerBuilder::new()
        .with_catalog_store(store)
        .with_config(config)
        .build()
        .expect("router should build");
    TestServer::new(router)
}

pub fn seeded_server() -> TestServer {
    server_with(seeded_store(), CatalogConfig::default())
}

pub fn shared_server(store: Arc<dyn CatalogStore>) -> TestServer {
    let router = ServerBuilder::new()
        .with_shared_store(store)
        .build()
        .expect("router should build");
    TestServer::new(router)
}

/// Percent-encode a query parameter value
pub fn encode(raw: &str) -> String {
    raw.bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            }
            _ => format!("%{:02X}", b),
        })
        .collect()
}

/// Titles of the products in a listing payload, in order
pub fn titles(body: &Value) -> Vec<String> {
    body["payload"]
        .as_array()
        .expect("payload should be an array")
        .iter()
        .map(|p| p["title"].as_str().unwrap_or_default().to_string())
        .collect()
}

/// Prices of the products in a listing payload, in order
pub fn prices(body: &Value) -> Vec<f64> {
    body["payload"]
        .as_array()
        .expect("payload should be an array")
        .iter()
        .filter_map(|p| p["price"].as_f64())
        .collect()
}

/// Store that fails every call, for server error paths
pub struct FailingStore;

impl FailingStore {
    fn error() -> StorageError {
        StorageError::Unavailable {
            backend: "failing".to_string(),
            message: "connection refused by db-primary:27017".to_string(),
        }
    }
}

#[async_trait]
impl CatalogStore for FailingStore {
    async fn query(
        &self,
        _filter: &FieldMatchMap,
        _page: usize,
        _limit: usize,
        _sort: SortKey,
    ) -> Result<PageResult<Product>, StorageError> {
        Err(Self::error())
    }

    async fn get(&self, _id: &Uuid) -> Result<Option<Product>, StorageError> {
        Err(Self::error())
    }

    async fn create(&self, _attributes: Map<String, Value>) -> Result<Product, StorageError> {
        Err(Self::error())
    }

    async fn update(
        &self,
        _id: &Uuid,
        _attributes: Map<String, Value>,
    ) -> Result<Option<Product>, StorageError> {
        Err(Self::error())
    }

    async fn delete(&self, _id: &Uuid) -> Result<bool, StorageError> {
        Err(Self::error())
    }

    fn backend(&self) -> &'static str {
        "failing"
    }
}
