//! # Axum Helpers
//!
//! Utilities shared by the Axum applications in this workspace.
//!
//! ## Modules
//!
//! - **[`errors`]**: Structured error responses (`AppError`, `ErrorResponse`)
//! - **[`extractors`]**: Custom extractors (integer path id, validated JSON)
//! - **[`server`]**: Router assembly, middleware stack, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod server;

// Re-export error types
pub use errors::{AppError, ErrorResponse};

// Re-export extractors
pub use extractors::{IdPath, ValidatedJson};

// Re-export server setup
pub use server::{create_app, create_router, shutdown_signal};
