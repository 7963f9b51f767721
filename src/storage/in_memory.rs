//! In-memory implementation of CatalogStore for testing and development

use crate::core::error::StorageError;
use crate::core::filter::FieldMatchMap;
use crate::core::product::Product;
use crate::core::query::PageResult;
use crate::core::sort::SortKey;
use crate::core::store::CatalogStore;
use async_trait::async_trait;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

const BACKEND: &str = "in-memory";

/// In-memory catalog store
///
/// Records are kept in insertion order, which is the natural listing order
/// and the tie-break for price sorting. Uses RwLock for thread-safe access.
#[derive(Clone)]
pub struct InMemoryCatalogStore {
    products: Arc<RwLock<IndexMap<Uuid, Product>>>,
}

impl InMemoryCatalogStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Create a store holding the given products, in order
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let products = products.into_iter().map(|p| (p.id, p)).collect();
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }

    /// Number of stored products
    pub fn len(&self) -> usize {
        self.products.read().map(|p| p.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock_error(e: impl std::fmt::Display) -> StorageError {
        StorageError::Unavailable {
            backend: BACKEND.to_string(),
            message: format!("Failed to acquire lock: {}", e),
        }
    }
}

impl Default for InMemoryCatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn query(
        &self,
        filter: &FieldMatchMap,
        page: usize,
        limit: usize,
        sort: SortKey,
    ) -> Result<PageResult<Product>, StorageError> {
        let mut matching: Vec<Product> = {
            let products = self.products.read().map_err(Self::lock_error)?;
            products
                .values()
                .filter(|product| filter.matches(*product))
                .cloned()
                .collect()
        };

        if sort.is_explicit() {
            // sort_by is stable, equal prices keep insertion order
            matching.sort_by(|a, b| sort.compare_prices(a.price(), b.price()));
        }

        Ok(PageResult::paginate(matching, page, limit))
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Product>, StorageError> {
        let products = self.products.read().map_err(Self::lock_error)?;
        Ok(products.get(id).cloned())
    }

    async fn create(&self, attributes: Map<String, Value>) -> Result<Product, StorageError> {
        let product = Product::new(attributes);
        let mut products = self.products.write().map_err(Self::lock_error)?;
        products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(
        &self,
        id: &Uuid,
        attributes: Map<String, Value>,
    ) -> Result<Option<Product>, StorageError> {
        let mut products = self.products.write().map_err(Self::lock_error)?;

        let Some(product) = products.get_mut(id) else {
            return Ok(None);
        };
        product.merge(attributes);

        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, StorageError> {
        let mut products = self.products.write().map_err(Self::lock_error)?;
        Ok(products.shift_remove(id).is_some())
    }

    fn backend(&self) -> &'static str {
        BACKEND
    }
}
