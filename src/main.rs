//! API Server Entry Point
//!
//! Initializes logging, loads configuration, prepares the product table and
//! serves the REST API until ctrl-c.

use std::sync::Arc;

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use inventory_api::core::{ApiServer, Config, HttpTransport, database};
use inventory_api::domains::products::MySqlProductStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    // Connect to MySQL and make sure the table exists
    let pool = database::connect(&config.database);
    database::test_connection(&pool).await;

    let store = MySqlProductStore::new(pool.clone());
    store.initialize().await.map_err(inventory_api::Error::from)?;

    info!("Connected to MySQL database {}", config.database.name);

    let transport = HttpTransport::new(config.http.clone());
    let server = ApiServer::new(config, Arc::new(store));

    info!("Server initialized");

    transport.run(server).await.map_err(inventory_api::Error::from)?;

    pool.close().await;
    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level. `RUST_LOG` directives
/// are honoured on top of it.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
