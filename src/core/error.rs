//! Error types and handling for the API server.
//!
//! Request-level failures are owned by each domain (`UserError`,
//! `ProductError`) and render themselves as HTTP responses. This module holds
//! the unified error used by startup and lifecycle code, where a failure
//! means the process cannot serve at all.

use thiserror::Error;

/// A specialized Result type for server lifecycle operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the API server.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database pool or schema errors raised during startup.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Errors raised while binding or serving HTTP.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
