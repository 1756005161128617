//! Root info and health routes. Neither touches storage.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use super::products::PRODUCTS_PATH;
use super::users::USERS_PATH;
use crate::core::ApiServer;

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiInfo {
    pub message: String,
    pub version: String,
    pub endpoints: Endpoints,
}

/// Collection paths advertised by `GET /`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endpoints {
    pub users: String,
    pub products: String,
}

impl ApiInfo {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            message: "Welcome to the REST API".to_string(),
            version: version.into(),
            endpoints: Endpoints {
                users: USERS_PATH.to_string(),
                products: PRODUCTS_PATH.to_string(),
            },
        }
    }
}

pub async fn root_info(State(server): State<ApiServer>) -> Json<ApiInfo> {
    Json(ApiInfo::new(server.version()))
}

/// Health check endpoint.
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
