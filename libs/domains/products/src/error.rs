use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(i32),

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl ProductError {
    /// Emit the single failure log line for an operation, e.g.
    /// "Database error while creating product: ...". Handlers call this
    /// right before the error leaves, so each failed request logs once
    /// with the operation attached.
    pub(crate) fn log(&self, operation: &str) {
        match self {
            ProductError::Database(_) | ProductError::Internal(_) => {
                tracing::error!("{}", failure_line(operation, self));
            }
            _ => tracing::warn!("{}", failure_line(operation, self)),
        }
    }
}

fn failure_line(operation: &str, err: &ProductError) -> String {
    match err {
        ProductError::NotFound(id) => format!("Product {} not found while {}", id, operation),
        ProductError::Validation(msg) => {
            format!("Validation failed while {}: {}", operation, msg)
        }
        ProductError::Database(e) => format!("Database error while {}: {}", operation, e),
        ProductError::Internal(msg) => format!("Internal error while {}: {}", operation, msg),
    }
}

/// Convert ProductError to AppError for standardized error responses.
///
/// Validation and not-found messages are safe to expose verbatim; the
/// database and internal variants carry storage detail, which AppError
/// replaces with a generic client message. The detail only reaches the
/// log, via [`ProductError::log`] in the handlers.
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => AppError::NotFound(format!("Product {} not found", id)),
            ProductError::Validation(msg) => AppError::BadRequest(msg),
            ProductError::Database(e) => AppError::Database(e),
            ProductError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_not_found_response_is_404() {
        let response = ProductError::NotFound(42).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_validation_response_is_400() {
        let response =
            ProductError::Validation("Name cannot be empty".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_failure_line_carries_operation_and_detail() {
        let err = ProductError::Database(sea_orm::DbErr::Custom("pool timed out".to_string()));
        let line = failure_line("creating product", &err);
        assert!(line.starts_with("Database error while creating product"));
        assert!(line.contains("pool timed out"));

        let line = failure_line("updating product", &ProductError::NotFound(7));
        assert_eq!(line, "Product 7 not found while updating product");
    }

    #[tokio::test]
    async fn test_database_error_hides_detail_from_client() {
        use http_body_util::BodyExt;

        let err = ProductError::Database(sea_orm::DbErr::Custom(
            "connection refused at 10.0.0.5".to_string(),
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(body.contains("Database error occurred"));
        assert!(!body.contains("10.0.0.5"));
    }
}
