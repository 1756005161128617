//! Transport layer for the API server.
//!
//! Binds the HTTP listener, wraps the dispatcher built by
//! [`ApiServer`](crate::core::ApiServer) with CORS and request tracing, and
//! serves until a shutdown signal arrives.

mod config;
mod error;
pub mod http;

pub use config::HttpConfig;
pub use error::{TransportError, TransportResult};
pub use http::HttpTransport;
