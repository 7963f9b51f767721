//! HTTP-level tests for the single-product routes

mod catalog_harness;

use axum::http::StatusCode;
use catalog::prelude::*;
use catalog_harness::*;
use serde_json::{Value, json};
use std::sync::Arc;

async fn create(server: &axum_test::TestServer, body: Value) -> Value {
    let resp = server.post("/api/products").json(&body).await;
    resp.assert_status(StatusCode::CREATED);
    resp.json::<Value>()["payload"].clone()
}

#[tokio::test]
async fn test_create_returns_product() {
    let server = seeded_server();

    let resp = server
        .post("/api/products")
        .json(&json!({"title": "Chisel", "category": "tools", "price": 7.5}))
        .await;
    resp.assert_status(StatusCode::CREATED);

    let body: Value = resp.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["payload"]["title"], "Chisel");
    assert_eq!(body["payload"]["price"], 7.5);
    assert!(Uuid::parse_str(body["payload"]["id"].as_str().unwrap()).is_ok());
    assert_eq!(body["payload"]["created_at"], body["payload"]["updated_at"]);
}

#[tokio::test]
async fn test_create_ignores_reserved_fields() {
    let server = seeded_server();
    let forged = Uuid::new_v4().to_string();

    let created = create(
        &server,
        json!({"id": forged, "created_at": "1970-01-01T00:00:00Z", "title": "Level"}),
    )
    .await;

    assert_ne!(created["id"], forged.as_str());
    assert_ne!(created["created_at"], "1970-01-01T00:00:00Z");
    assert_eq!(created["title"], "Level");
}

#[tokio::test]
async fn test_created_product_is_listed_last() {
    let server = seeded_server();
    create(&server, json!({"title": "Chisel", "price": 7.5})).await;

    let body: Value = server.get("/api/products").await.json();
    assert_eq!(
        titles(&body),
        vec!["Hammer", "Rake", "Saw", "Hose", "Wrench", "Chisel"]
    );
}

#[tokio::test]
async fn test_get_by_id() {
    let server = seeded_server();
    let created = create(&server, json!({"title": "Chisel"})).await;
    let id = created["id"].as_str().unwrap();

    let resp = server.get(&format!("/api/products/{}", id)).await;
    resp.assert_status(StatusCode::OK);

    let body: Value = resp.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["payload"], created);
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let server = seeded_server();
    let id = Uuid::new_v4();

    let resp = server.get(&format!("/api/products/{}", id)).await;
    resp.assert_status(StatusCode::NOT_FOUND);

    let body: Value = resp.json();
    assert_eq!(body["status"], "error");
    assert_eq!(body["error"], format!("Product '{}' not found", id));
}

#[tokio::test]
async fn test_get_invalid_id_is_bad_request() {
    let server = seeded_server();

    let resp = server.get("/api/products/not-a-uuid").await;
    resp.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = resp.json();
    assert_eq!(body["error"], "Invalid product id: 'not-a-uuid'");
}

#[tokio::test]
async fn test_update_merges_attributes() {
    let store = Arc::new(seeded_store());
    let server = shared_server(store.clone());
    let created = create(&server, json!({"title": "Chisel", "price": 7.5, "stock": 3})).await;
    let id = created["id"].as_str().unwrap();

    let resp = server
        .put(&format!("/api/products/{}", id))
        .json(&json!({"price": 8, "stock": 2, "id": "ignored"}))
        .await;
    resp.assert_status(StatusCode::OK);

    let payload = resp.json::<Value>()["payload"].clone();
    assert_eq!(payload["id"], id);
    assert_eq!(payload["title"], "Chisel");
    assert_eq!(payload["price"], 8);
    assert_eq!(payload["stock"], 2);
    assert_eq!(payload["created_at"], created["created_at"]);
    assert_eq!(store.len(), 6);
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let server = seeded_server();

    let resp = server
        .put(&format!("/api/products/{}", Uuid::new_v4()))
        .json(&json!({"price": 1}))
        .await;
    resp.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_then_get() {
    let server = seeded_server();
    let created = create(&server, json!({"title": "Chisel"})).await;
    let url = format!("/api/products/{}", created["id"].as_str().unwrap());

    server.delete(&url).await.assert_status(StatusCode::NO_CONTENT);
    server.get(&url).await.assert_status(StatusCode::NOT_FOUND);
    server.delete(&url).await.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_object_body_is_bad_request() {
    let server = seeded_server();

    let resp = server.post("/api/products").json(&json!(["Chisel"])).await;
    resp.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = resp.json();
    assert_eq!(body["status"], "error");
    assert_eq!(body["error"], "Invalid request body: expected a JSON object");
}

#[tokio::test]
async fn test_unparseable_body_is_bad_request() {
    let server = seeded_server();

    let resp = server
        .post("/api/products")
        .text("{\"title\": ")
        .content_type("application/json")
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = resp.json();
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid request body")
    );
}

#[tokio::test]
async fn test_health_reports_backend() {
    let server = seeded_server();

    for path in ["/health", "/healthz"] {
        let resp = server.get(path).await;
        resp.assert_status(StatusCode::OK);

        let body: Value = resp.json();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "product-catalog");
        assert_eq!(body["store"], "in-memory");
    }
}
