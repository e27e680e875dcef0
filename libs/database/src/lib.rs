//! Database library providing the PostgreSQL connector and repository
//! building blocks used by the domain crates.

pub mod postgres;
pub mod repository;

pub use postgres::{connect, connect_from_config};
pub use repository::BaseRepository;

/// Unified database error type
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
