//! Server-rendered web UI for the product catalog.
//!
//! Three read-only pages: the product listing, the add form, and the edit
//! form. The forms submit to the JSON API from the browser, so every write
//! still goes through the API's validation stack.

mod templates;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use axum_helpers::IdPath;
use domain_products::{PgProductRepository, ProductError, ProductRepository, ProductService};
use serde_json::json;
use std::sync::Arc;

use crate::state::AppState;
use templates::PageTemplates;

struct WebContext<R: ProductRepository> {
    service: Arc<ProductService<R>>,
    templates: Arc<PageTemplates>,
}

// Manual impl: a derive would require R: Clone, which Pg repos are not
impl<R: ProductRepository> Clone for WebContext<R> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            templates: Arc::clone(&self.templates),
        }
    }
}

/// Create the web page router
pub fn router(state: &AppState) -> eyre::Result<Router> {
    let repository = PgProductRepository::new(state.db.clone());
    pages_router(ProductService::new(repository))
}

fn pages_router<R: ProductRepository + 'static>(service: ProductService<R>) -> eyre::Result<Router> {
    let context = WebContext {
        service: Arc::new(service),
        templates: Arc::new(PageTemplates::new()?),
    };

    Ok(Router::new()
        .route("/", get(index))
        .route("/add_product", get(add_product))
        .route("/edit_product/{id}", get(edit_product))
        .with_state(context))
}

/// Page-level error: not-found keeps its status, everything else becomes a
/// generic 500 page. Detail goes to the log, never to the client.
enum WebError {
    NotFound(i32),
    Internal(String),
}

impl From<ProductError> for WebError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => WebError::NotFound(id),
            other => WebError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::NotFound(id) => {
                tracing::warn!("Product {} not found", id);
                (
                    StatusCode::NOT_FOUND,
                    Html("<h1>Product not found</h1>".to_string()),
                )
                    .into_response()
            }
            WebError::Internal(detail) => {
                tracing::error!("Error rendering page: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html("<h1>An unexpected error occurred</h1>".to_string()),
                )
                    .into_response()
            }
        }
    }
}

/// Product listing page
async fn index<R: ProductRepository>(
    State(ctx): State<WebContext<R>>,
) -> Result<Html<String>, WebError> {
    let products = ctx.service.list_products().await?;

    let markup = ctx
        .templates
        .render("index", &json!({ "products": products }))
        .map_err(|e| WebError::Internal(e.to_string()))?;

    tracing::info!("Successfully loaded index page");
    Ok(Html(markup))
}

/// Empty add-product form
async fn add_product<R: ProductRepository>(
    State(ctx): State<WebContext<R>>,
) -> Result<Html<String>, WebError> {
    let markup = ctx
        .templates
        .render("product_form", &json!({ "product": null }))
        .map_err(|e| WebError::Internal(e.to_string()))?;

    tracing::info!("Loading add product form");
    Ok(Html(markup))
}

/// Edit form pre-filled with an existing product
async fn edit_product<R: ProductRepository>(
    State(ctx): State<WebContext<R>>,
    IdPath(id): IdPath,
) -> Result<Html<String>, WebError> {
    let product = ctx.service.get_product(id).await?;

    let markup = ctx
        .templates
        .render("product_form", &json!({ "product": product }))
        .map_err(|e| WebError::Internal(e.to_string()))?;

    tracing::info!("Loading edit form for product: {}", product.name);
    Ok(Html(markup))
}
