//! Inventory API Library
//!
//! A small REST API exposing CRUD operations over two resource collections:
//! an in-memory users list and a MySQL-backed products table.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the database pool, the request
//!   dispatcher ([`ApiServer`]) and the HTTP transport
//! - **domains**: the resource handlers
//!   - **users**: in-memory collection reset-able to a fixed seed
//!   - **products**: validated CRUD over a [`ProductStore`](domains::products::ProductStore)
//!   - **info**: root info and health routes
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use inventory_api::core::{ApiServer, Config, HttpTransport};
//! use inventory_api::domains::products::MemoryProductStore;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let transport = HttpTransport::new(config.http.clone());
//!     let server = ApiServer::new(config, Arc::new(MemoryProductStore::new()));
//!     transport.run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{ApiServer, Config, Error, Result};
