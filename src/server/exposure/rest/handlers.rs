//! HTTP handlers for the product routes

use crate::config::CatalogConfig;
use crate::core::error::{CatalogError, ProductError, QueryError};
use crate::core::listing::{self, with_deadline};
use crate::core::product::Product;
use crate::core::query::ListingParams;
use crate::core::response::ListingResponse;
use crate::core::store::CatalogStore;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use uuid::Uuid;

/// Shared state for the product handlers
#[derive(Clone)]
pub struct CatalogState {
    pub store: Arc<dyn CatalogStore>,
    pub config: Arc<CatalogConfig>,
}

/// Success body for single-product routes
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub status: &'static str,
    pub payload: Product,
}

impl ProductResponse {
    fn success(product: Product) -> Json<Self> {
        Json(Self {
            status: "success",
            payload: product,
        })
    }
}

/// GET {base_path}
pub async fn list_products(
    State(state): State<CatalogState>,
    params: Result<Query<ListingParams>, QueryRejection>,
) -> Result<Json<ListingResponse<Product>>, CatalogError> {
    let Query(params) = params.map_err(|rejection| QueryError::InvalidQueryString {
        message: rejection.body_text(),
    })?;

    let response =
        listing::list_products(state.store.as_ref(), &params, &state.config.listing).await?;
    Ok(Json(response))
}

/// GET {base_path}/{pid}
pub async fn get_product(
    State(state): State<CatalogState>,
    Path(pid): Path<String>,
) -> Result<Json<ProductResponse>, CatalogError> {
    let id = parse_id(&pid)?;

    let product = with_deadline(
        state.store.backend(),
        &state.config.listing,
        state.store.get(&id),
    )
    .await?
    .ok_or(ProductError::NotFound { id: pid })?;

    Ok(ProductResponse::success(product))
}

/// POST {base_path}
pub async fn create_product(
    State(state): State<CatalogState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ProductResponse>), CatalogError> {
    let attributes = object_body(body)?;

    let product = with_deadline(
        state.store.backend(),
        &state.config.listing,
        state.store.create(attributes),
    )
    .await?;

    tracing::info!(product_id = %product.id, "product created");
    Ok((StatusCode::CREATED, ProductResponse::success(product)))
}

/// PUT {base_path}/{pid}
pub async fn update_product(
    State(state): State<CatalogState>,
    Path(pid): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ProductResponse>, CatalogError> {
    let id = parse_id(&pid)?;
    let attributes = object_body(body)?;

    let product = with_deadline(
        state.store.backend(),
        &state.config.listing,
        state.store.update(&id, attributes),
    )
    .await?
    .ok_or(ProductError::NotFound { id: pid })?;

    tracing::info!(product_id = %product.id, "product updated");
    Ok(ProductResponse::success(product))
}

/// DELETE {base_path}/{pid}
pub async fn delete_product(
    State(state): State<CatalogState>,
    Path(pid): Path<String>,
) -> Result<StatusCode, CatalogError> {
    let id = parse_id(&pid)?;

    let existed = with_deadline(
        state.store.backend(),
        &state.config.listing,
        state.store.delete(&id),
    )
    .await?;

    if !existed {
        return Err(ProductError::NotFound { id: pid }.into());
    }

    tracing::info!(product_id = %id, "product deleted");
    Ok(StatusCode::NO_CONTENT)
}

fn parse_id(pid: &str) -> Result<Uuid, ProductError> {
    Uuid::parse_str(pid).map_err(|_| ProductError::InvalidId {
        id: pid.to_string(),
    })
}

fn object_body(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Map<String, Value>, ProductError> {
    let Json(value) = body.map_err(|rejection| ProductError::InvalidBody {
        message: rejection.body_text(),
    })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(ProductError::InvalidBody {
            message: "expected a JSON object".to_string(),
        }),
    }
}
