//! Handler tests for the Products domain
//!
//! These verify the HTTP layer end to end against the in-memory
//! repository:
//! - Request deserialization (JSON → DTOs, including int-or-string stock)
//! - Both validation passes and their status codes
//! - Response serialization (price as decimal string, timestamps)
//! - Error responses and status mapping

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()

fn app() -> axum::Router {
    let repository = InMemoryProductRepository::new();
    let service = ProductService::new(repository);
    handlers::router(service)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn put_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_create_product_returns_201_with_generated_fields() {
    let app = app();

    let response = app
        .oneshot(post_json(
            "/",
            json!({"name": "Widget", "price": 9.99, "stock": 5}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let product = json_body(response.into_body()).await;
    assert_eq!(product["name"], "Widget");
    assert_eq!(product["price"], "9.99");
    assert_eq!(product["stock"], 5);
    assert_eq!(product["description"], "");
    assert_eq!(product["id"], 1);
    assert!(product["created_at"].is_string());
    assert!(product["updated_at"].is_string());
}

#[tokio::test]
async fn test_create_product_with_empty_name_returns_400_mentioning_name() {
    let app = app();

    let response = app
        .oneshot(post_json("/", json!({"name": "", "price": 1, "stock": 1})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert!(body["details"]["name"].is_array());
}

#[tokio::test]
async fn test_create_product_with_missing_price_returns_400() {
    let app = app();

    let response = app
        .oneshot(post_json("/", json!({"name": "Widget", "stock": 1})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_product_price_boundary() {
    let app = app();

    let rejected = app
        .clone()
        .oneshot(post_json(
            "/",
            json!({"name": "Widget", "price": "0.00", "stock": 1}),
        ))
        .await
        .unwrap();
    assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);

    let accepted = app
        .oneshot(post_json(
            "/",
            json!({"name": "Widget", "price": "0.01", "stock": 1}),
        ))
        .await
        .unwrap();
    assert_eq!(accepted.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_product_accepts_zero_stock_but_not_negative() {
    let app = app();

    let zero = app
        .clone()
        .oneshot(post_json(
            "/",
            json!({"name": "Widget", "price": 1, "stock": 0}),
        ))
        .await
        .unwrap();
    assert_eq!(zero.status(), StatusCode::CREATED);

    let negative = app
        .oneshot(post_json(
            "/",
            json!({"name": "Widget", "price": 1, "stock": -1}),
        ))
        .await
        .unwrap();
    assert_eq!(negative.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_products_returns_created_products() {
    let app = app();

    for name in ["First", "Second"] {
        let response = app
            .clone()
            .oneshot(post_json(
                "/",
                json!({"name": name, "price": 1, "stock": 1}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let products = json_body(response.into_body()).await;
    assert_eq!(products.as_array().unwrap().len(), 2);
    assert_eq!(products[0]["name"], "First");
    assert_eq!(products[1]["name"], "Second");
}

#[tokio::test]
async fn test_get_product_by_id() {
    let app = app();

    app.clone()
        .oneshot(post_json(
            "/",
            json!({"name": "Widget", "price": "2.50", "stock": 3}),
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let product = json_body(response.into_body()).await;
    assert_eq!(product["id"], 1);
    assert_eq!(product["price"], "2.50");
}

#[tokio::test]
async fn test_get_nonexistent_product_returns_404() {
    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_with_garbage_id_returns_400() {
    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_partial_update_changes_only_supplied_fields() {
    let app = app();

    let created = app
        .clone()
        .oneshot(post_json(
            "/",
            json!({"name": "Widget", "price": "9.99", "stock": 5, "category": "tools"}),
        ))
        .await
        .unwrap();
    let created = json_body(created.into_body()).await;

    let response = app
        .oneshot(put_json("/1", json!({"stock": 0})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated = json_body(response.into_body()).await;
    assert_eq!(updated["stock"], 0);
    assert_eq!(updated["name"], "Widget");
    assert_eq!(updated["price"], "9.99");
    assert_eq!(updated["category"], "tools");
    assert_eq!(updated["created_at"], created["created_at"]);
    assert_ne!(updated["updated_at"], created["updated_at"]);
}

#[tokio::test]
async fn test_update_with_invalid_field_returns_400() {
    let app = app();

    app.clone()
        .oneshot(post_json(
            "/",
            json!({"name": "Widget", "price": 1, "stock": 1}),
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(put_json("/1", json!({"price": "0.00"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_nonexistent_product_returns_404() {
    let app = app();

    let response = app
        .oneshot(put_json("/999", json!({"stock": 1})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_product_then_get_returns_404() {
    let app = app();

    app.clone()
        .oneshot(post_json(
            "/",
            json!({"name": "Widget", "price": 1, "stock": 1}),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Product deleted successfully");

    let gone = app
        .oneshot(
            Request::builder()
                .uri("/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_nonexistent_product_returns_404() {
    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_failed_request_leaves_storage_unchanged() {
    let app = app();

    app.clone()
        .oneshot(post_json(
            "/",
            json!({"name": "Widget", "price": 1, "stock": 1}),
        ))
        .await
        .unwrap();

    // Failed update and delete against a missing row
    app.clone()
        .oneshot(put_json("/999", json!({"stock": 3})))
        .await
        .unwrap();
    app.clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let products = json_body(response.into_body()).await;
    assert_eq!(products.as_array().unwrap().len(), 1);
    assert_eq!(products[0]["stock"], 1);
}
