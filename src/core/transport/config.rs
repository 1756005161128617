//! Transport configuration types.

use serde::{Deserialize, Serialize};

use crate::core::config::parse_var;
use crate::core::error::Result;

/// HTTP transport configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_cors() -> bool {
    true
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: default_host(),
            enable_cors: default_cors(),
        }
    }
}

impl HttpConfig {
    /// Create an HTTP config for the given address.
    pub fn new(port: u16, host: impl Into<String>) -> Self {
        Self {
            port,
            host: host.into(),
            ..Default::default()
        }
    }

    /// Load HTTP config from environment variables.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(port) = parse_var("PORT")? {
            config.port = port;
        }
        if let Ok(host) = std::env::var("API_HTTP_HOST") {
            config.host = host;
        }
        if let Ok(cors) = std::env::var("API_HTTP_CORS") {
            config.enable_cors = cors.to_lowercase() != "false" && cors != "0";
        }

        Ok(config)
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        let cors = if self.enable_cors { "enabled" } else { "disabled" };
        format!("HTTP on {} (CORS {})", self.address(), cors)
    }
}
