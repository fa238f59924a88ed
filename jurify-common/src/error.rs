//! Common error types for the JuriFy client

use thiserror::Error;

/// Common result type for JuriFy operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the JuriFy client crates
#[derive(Error, Debug)]
pub enum Error {
    /// Local store operation error (wraps sqlx::Error)
    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Locale table loading or parse error
    #[error("Locale error: {0}")]
    Locale(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal client error
    #[error("Internal error: {0}")]
    Internal(String),
}
