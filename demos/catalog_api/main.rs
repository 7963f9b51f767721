//! Product Catalog Example
//!
//! Serves a seeded in-memory catalog:
//! - Paginated, filtered and sorted listing with navigation links
//! - Single-product CRUD routes
//!
//! Pass a YAML config path as the first argument to override the defaults:
//!
//! ```text
//! cargo run --example catalog_api -- demos/catalog_api/catalog.yaml
//! ```

use catalog::prelude::*;
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("catalog=debug,tower_http=info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => CatalogConfig::from_yaml_file(&path)?,
        None => CatalogConfig::default(),
    };

    let store = InMemoryCatalogStore::with_products(sample_products());
    let base = config.listing.base_path.clone();
    let bind = config.server.bind.clone();

    println!("🚀 Starting product catalog with {} products", store.len());
    println!("\n🌐 Server running on http://{}", bind);
    println!("\n  GET    {}                      - List products", base);
    println!("  POST   {}                      - Create a product", base);
    println!("  GET    {}/{{pid}}                - Get a product", base);
    println!("  PUT    {}/{{pid}}                - Update a product", base);
    println!("  DELETE {}/{{pid}}                - Delete a product", base);
    println!("\n  Try: {}?limit=2&page=2&sort=asc", base);
    println!("       {}?query={{\"category\":\"tools\"}}", base);

    ServerBuilder::new()
        .with_catalog_store(store)
        .with_config(config)
        .serve_configured()
        .await
}

fn sample_products() -> Vec<Product> {
    let samples = [
        json!({"title": "Claw Hammer", "category": "tools", "price": 15, "stock": 10}),
        json!({"title": "Leaf Rake", "category": "garden", "price": 22.5, "stock": 0}),
        json!({"title": "Hand Saw", "category": "tools", "price": 31, "stock": 4}),
        json!({"title": "Garden Hose", "category": "garden", "price": 9.99, "stock": 12}),
        json!({"title": "Adjustable Wrench", "category": "tools", "price": 12, "stock": 7}),
        json!({"title": "Pruning Shears", "category": "garden", "price": 18, "stock": 3}),
        json!({"title": "Work Gloves", "category": "apparel", "stock": 40}),
    ];

    samples
        .into_iter()
        .filter_map(|value| match value {
            Value::Object(map) => Some(Product::new(map)),
            _ => None,
        })
        .collect()
}
