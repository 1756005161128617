//! HTTP transport implementation.
//!
//! Serves the REST dispatcher over a TCP listener. Standard HTTP clients
//! (curl, browsers, test harnesses) talk to it directly.

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::{HttpConfig, TransportError, TransportResult};
use crate::core::ApiServer;

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Wrap the dispatcher with the transport-level layers.
    pub fn app(&self, server: &ApiServer) -> Router {
        let mut app = server.router().layer(TraceLayer::new_for_http());

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        app
    }

    /// Run the HTTP transport until ctrl-c.
    pub async fn run(self, server: ApiServer) -> TransportResult<()> {
        let addr = self.config.address();
        let app = self.app(&server);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Ready - listening on {}", self.config.description());
        info!("  → Users:    http://{}{}", addr, crate::domains::users::USERS_PATH);
        info!("  → Products: http://{}{}", addr, crate::domains::products::PRODUCTS_PATH);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for ctrl-c: {}", e);
        // Without a signal handler there is nothing to wait on; keep serving.
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
