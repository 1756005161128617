//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the API server,
//! including error handling, configuration, the database pool, the request
//! dispatcher and the HTTP transport.

pub mod api;
pub mod config;
pub mod database;
pub mod error;
pub mod server;
pub mod transport;

pub use api::{ApiError, ErrorBody};
pub use config::Config;
pub use error::{Error, Result};
pub use server::ApiServer;
pub use transport::{HttpConfig, HttpTransport};
