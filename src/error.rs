//! Error types for cabinet queries and the surrounding tooling.

use thiserror::Error;

/// Errors raised by the query engine.
///
/// "Not found" is never an error: name lookups return `None` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The requested (or stored) size is absent or not one of small, medium, large.
    #[error("Invalid folder size.")]
    InvalidSize,
}

/// Crate-level error for configuration, layout loading and CLI execution.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Layout error: {0}")]
    LayoutError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
