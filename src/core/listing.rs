//! The listing pipeline: raw parameters in, response envelope out

use crate::config::ListingConfig;
use crate::core::error::{CatalogError, StorageError};
use crate::core::product::Product;
use crate::core::query::{ListingParams, QuerySpec};
use crate::core::response::ListingResponse;
use crate::core::store::CatalogStore;
use std::future::Future;

/// Run one listing request against a store
///
/// Decoding happens before the store is touched, so a rejected filter never
/// costs a query. The store call is bounded by `store_timeout_ms`.
pub async fn list_products(
    store: &dyn CatalogStore,
    raw: &ListingParams,
    config: &ListingConfig,
) -> Result<ListingResponse<Product>, CatalogError> {
    let spec = QuerySpec::decode(raw, config)?;

    tracing::debug!(
        page = spec.page,
        limit = spec.limit,
        sort = ?spec.sort,
        filter_fields = spec.filter.len(),
        "listing products"
    );

    let result = with_deadline(
        store.backend(),
        config,
        store.query(&spec.filter, spec.page, spec.limit, spec.sort),
    )
    .await?;

    Ok(ListingResponse::build(result, raw, config))
}

/// Bound a store call by the configured deadline
pub async fn with_deadline<T, F>(
    backend: &str,
    config: &ListingConfig,
    call: F,
) -> Result<T, StorageError>
where
    F: Future<Output = Result<T, StorageError>>,
{
    match tokio::time::timeout(config.store_timeout(), call).await {
        Ok(result) => result,
        Err(_) => Err(StorageError::Timeout {
            backend: backend.to_string(),
            after_ms: config.store_timeout_ms,
        }),
    }
}
