//! API server state and request dispatch.
//!
//! [`ApiServer`] owns the two resource handlers and builds the dispatcher:
//! the root info route first, then the products and users collections under
//! their mount points, then a catch-all 404. Each collection also answers at
//! its mount point with a trailing slash. Unmatched methods on known paths
//! land on the same catch-all.

use std::sync::Arc;

use axum::{Router, extract::FromRef, routing::get};
use tracing::info;

use super::api::route_not_found;
use super::config::Config;
use crate::domains::info::{health_check, root_info};
use crate::domains::products::{self, PRODUCTS_PATH, ProductService, ProductStore};
use crate::domains::users::{self, USERS_PATH, UserStore};

/// Shared state behind every request.
#[derive(Clone)]
pub struct ApiServer {
    /// Server configuration.
    config: Arc<Config>,

    /// In-memory user collection.
    users: Arc<UserStore>,

    /// Product operations over the configured store.
    products: Arc<ProductService>,
}

impl ApiServer {
    /// Create a server with a freshly seeded user collection and the given
    /// product store.
    pub fn new(config: Config, product_store: Arc<dyn ProductStore>) -> Self {
        Self {
            config: Arc::new(config),
            users: Arc::new(UserStore::new()),
            products: Arc::new(ProductService::new(product_store)),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// The user collection, for resetting between test runs.
    pub fn users(&self) -> &Arc<UserStore> {
        &self.users
    }

    /// The product service, for maintenance calls such as `delete_all`.
    pub fn products(&self) -> &Arc<ProductService> {
        &self.products
    }

    /// Build the dispatcher.
    pub fn router(&self) -> Router {
        info!("Building router for {} v{}", self.name(), self.version());

        Router::new()
            .route("/", get(root_info).fallback(route_not_found))
            .nest(PRODUCTS_PATH, products::routes())
            .route(&format!("{PRODUCTS_PATH}/"), products::collection())
            .nest(USERS_PATH, users::routes())
            .route(&format!("{USERS_PATH}/"), users::collection())
            .route("/health", get(health_check).fallback(route_not_found))
            .fallback(route_not_found)
            .with_state(self.clone())
    }
}

impl FromRef<ApiServer> for Arc<UserStore> {
    fn from_ref(server: &ApiServer) -> Self {
        server.users.clone()
    }
}

impl FromRef<ApiServer> for Arc<ProductService> {
    fn from_ref(server: &ApiServer) -> Self {
        server.products.clone()
    }
}
