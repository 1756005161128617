//! MySQL connection pool for the product store.

use sqlx::MySqlPool;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use tracing::{error, info};

use super::config::DatabaseConfig;

/// Build the connection pool. Connections are opened on first use.
pub fn connect(config: &DatabaseConfig) -> MySqlPool {
    let options = MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .database(&config.name)
        .username(&config.user)
        .password(&config.password);

    MySqlPoolOptions::new()
        .max_connections(config.pool_size)
        .connect_lazy_with(options)
}

/// Probe the pool by checking out a single connection.
pub async fn test_connection(pool: &MySqlPool) -> bool {
    match pool.acquire().await {
        Ok(_conn) => {
            info!("MySQL connection established");
            true
        }
        Err(e) => {
            error!("Failed to connect to MySQL: {}", e);
            false
        }
    }
}
