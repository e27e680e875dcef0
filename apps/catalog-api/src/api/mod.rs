//! API routes module

use axum::{routing::get, Json, Router};
use domain_products::{handlers, PgProductRepository, ProductService};
use serde_json::{json, Value};

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    let repository = PgProductRepository::new(state.db.clone());
    let service = ProductService::new(repository);

    Router::new()
        .route("/", get(api_root))
        .nest("/products", handlers::router(service))
}

/// Service description with the endpoint map
async fn api_root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the Product Management API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "List all products": "/api/products",
            "Get product by ID": "/api/products/{id}",
            "Create product": "/api/products",
            "Update product": "/api/products/{id}",
            "Delete product": "/api/products/{id}",
            "API Documentation": "/swagger-ui"
        }
    }))
}
