//! REST API exposure for the catalog
//!
//! The REST exposure consumes a `ServerHost` and produces an Axum `Router`.

pub mod handlers;

use super::super::host::ServerHost;
use crate::server::router::build_product_routes;
use anyhow::Result;
use axum::{Json, Router, routing::get};
use handlers::CatalogState;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// # Returns
    ///
    /// Returns a fully configured Axum router with:
    /// - Health check routes
    /// - Product routes (listing + CRUD)
    /// - Custom routes
    /// - Request tracing
    pub fn build_router(host: Arc<ServerHost>, custom_routes: Vec<Router>) -> Result<Router> {
        let state = CatalogState {
            store: host.store.clone(),
            config: host.config.clone(),
        };

        let mut app = Self::health_routes(host.store.backend()).merge(build_product_routes(state));

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        Ok(app.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http())))
    }

    /// Build health check routes
    fn health_routes(backend: &'static str) -> Router {
        let health = move || async move {
            Json(json!({
                "status": "ok",
                "service": "product-catalog",
                "store": backend
            }))
        };

        Router::new()
            .route("/health", get(health.clone()))
            .route("/healthz", get(health))
    }
}
