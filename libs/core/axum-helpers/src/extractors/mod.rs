//! Custom extractors for Axum handlers.
//!
//! These reduce boilerplate and standardize error handling across the API.

pub mod id_path;
pub mod validated_json;

pub use id_path::IdPath;
pub use validated_json::ValidatedJson;
