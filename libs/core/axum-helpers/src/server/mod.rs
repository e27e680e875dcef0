//! Server infrastructure module.
//!
//! Provides router assembly with OpenAPI documentation and the common
//! middleware stack, plus server startup with graceful shutdown.

pub mod app;

pub use app::{create_app, create_router, shutdown_signal};
