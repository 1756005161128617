//! Configuration management for the API server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (optionally seeded by a `.env` file) on top of
//! defaults.

use super::error::{Error, Result};
use super::transport::HttpConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Main configuration structure for the API server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// HTTP listener configuration.
    pub http: HttpConfig,

    /// Product store connection settings.
    pub database: DatabaseConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server, used in startup logs.
    pub name: String,

    /// The version reported by the root info route.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// MySQL connection settings for the product store.
#[derive(Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,

    /// Upper bound on pooled connections.
    pub pool_size: u32,
}

/// Custom Debug implementation to redact the password from logs.
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("pool_size", &self.pool_size)
            .finish()
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3306,
            name: "inventory".to_string(),
            user: "root".to_string(),
            password: String::new(),
            pool_size: 10,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "inventory-api".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            http: HttpConfig::default(),
            database: DatabaseConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Database settings use the `DB_` prefix (`DB_HOST`, `DB_PORT`,
    /// `DB_NAME`, `DB_USER`, `DB_PASSWORD`, `DB_POOL_SIZE`), the listener port
    /// is `PORT`, and everything else is prefixed with `API_`.
    ///
    /// Logging is not initialized yet when this runs, so the messages emitted
    /// here only show up if a subscriber was installed earlier.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("API_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("API_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.http = HttpConfig::from_env()?;

        let db = &mut config.database;
        if let Ok(host) = std::env::var("DB_HOST") {
            db.host = host;
        }
        if let Some(port) = parse_var("DB_PORT")? {
            db.port = port;
        }
        if let Ok(name) = std::env::var("DB_NAME") {
            db.name = name;
        }
        if let Ok(user) = std::env::var("DB_USER") {
            db.user = user;
        }
        if let Ok(password) = std::env::var("DB_PASSWORD") {
            db.password = password;
        } else {
            warn!("DB_PASSWORD not set - connecting to MySQL without a password");
        }
        if let Some(pool_size) = parse_var("DB_POOL_SIZE")? {
            if pool_size == 0 {
                return Err(Error::config("DB_POOL_SIZE must be at least 1"));
            }
            db.pool_size = pool_size;
        }

        info!("Product store: {}@{}:{}/{}", db.user, db.host, db.port, db.name);

        Ok(config)
    }
}

/// Parse an optional environment variable, rejecting values that do not parse.
pub(crate) fn parse_var<T>(key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| Error::config(format!("invalid {key} '{raw}': {e}"))),
        Err(_) => Ok(None),
    }
}
