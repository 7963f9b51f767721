//! Catalog store contract

use crate::core::error::StorageError;
use crate::core::filter::FieldMatchMap;
use crate::core::product::Product;
use crate::core::query::PageResult;
use crate::core::sort::SortKey;
use async_trait::async_trait;
use serde_json::{Map, Value};
use uuid::Uuid;

/// Persistence behind the product routes
///
/// Implementations own the records. The listing pipeline only hands over a
/// decoded filter, a page window and a sort key, and forwards whatever page
/// comes back.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Run a listing query
    ///
    /// - `filter` is a conjunction over record fields
    /// - ordering is deterministic: equal sort keys keep insertion order
    /// - `page` is 1-based; a page past the end has no docs and no next page
    async fn query(
        &self,
        filter: &FieldMatchMap,
        page: usize,
        limit: usize,
        sort: SortKey,
    ) -> Result<PageResult<Product>, StorageError>;

    /// Get a product by ID
    async fn get(&self, id: &Uuid) -> Result<Option<Product>, StorageError>;

    /// Create a product from client attributes
    async fn create(&self, attributes: Map<String, Value>) -> Result<Product, StorageError>;

    /// Merge attributes into an existing product, `None` when absent
    async fn update(
        &self,
        id: &Uuid,
        attributes: Map<String, Value>,
    ) -> Result<Option<Product>, StorageError>;

    /// Delete a product, returns whether it existed
    async fn delete(&self, id: &Uuid) -> Result<bool, StorageError>;

    /// Backend name used in errors and logs
    fn backend(&self) -> &'static str;
}
