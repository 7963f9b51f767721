//! Router builder utilities for product routes

use crate::server::exposure::rest::handlers::{
    CatalogState, create_product, delete_product, get_product, list_products, update_product,
};
use axum::{Router, routing::get};

/// Build product routes under the configured base path
///
/// - GET    {base} - Filtered, sorted, paginated listing
/// - POST   {base} - Create a product
/// - GET    {base}/{pid} - Get a product
/// - PUT    {base}/{pid} - Merge attributes into a product
/// - DELETE {base}/{pid} - Delete a product
pub fn build_product_routes(state: CatalogState) -> Router {
    let base = state.config.listing.base_path.clone();
    let item = format!("{}/{{pid}}", base);

    Router::new()
        .route(&base, get(list_products).post(create_product))
        .route(
            &item,
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(state)
}
