//! HTTP handlers for the products collection.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{MethodRouter, get},
};
use serde::Serialize;
use tracing::instrument;

use super::error::ProductError;
use super::model::{NewProduct, Product, ProductChanges, ProductPayload};
use super::service::ProductService;
use crate::core::ApiServer;
use crate::core::api::{ApiError, JsonObject, json_body, parse_id, route_not_found};

/// Body returned by a successful delete.
#[derive(Debug, Serialize)]
pub struct ProductDeleted {
    pub message: &'static str,
    pub product: Product,
}

/// Routes for the products collection, relative to its mount point.
pub fn routes() -> Router<ApiServer> {
    Router::new()
        .route("/", collection())
        .route(
            "/{id}",
            get(get_product)
                .put(update_product)
                .delete(delete_product)
                .fallback(route_not_found),
        )
}

/// List and create, served at the mount point with or without a trailing
/// slash.
pub fn collection() -> MethodRouter<ApiServer> {
    get(list_products)
        .post(create_product)
        .fallback(route_not_found)
}

#[instrument(skip_all)]
async fn list_products(
    State(products): State<Arc<ProductService>>,
) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(products.list().await?))
}

#[instrument(skip(products))]
async fn get_product(
    State(products): State<Arc<ProductService>>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_id(&id).ok_or(ProductError::NotFound)?;
    Ok(Json(products.get(id).await?))
}

#[instrument(skip_all)]
async fn create_product(
    State(products): State<Arc<ProductService>>,
    body: JsonObject,
) -> Result<impl IntoResponse, ApiError> {
    let product = NewProduct::try_from(json_body::<ProductPayload>(body)?)?;
    let created = products.create(product).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[instrument(skip(products, body))]
async fn update_product(
    State(products): State<Arc<ProductService>>,
    Path(id): Path<String>,
    body: JsonObject,
) -> Result<Json<Product>, ApiError> {
    let changes = ProductChanges::try_from(json_body::<ProductPayload>(body)?)?;
    let id = parse_id(&id).ok_or(ProductError::NotFound)?;
    Ok(Json(products.update(id, changes).await?))
}

#[instrument(skip(products))]
async fn delete_product(
    State(products): State<Arc<ProductService>>,
    Path(id): Path<String>,
) -> Result<Json<ProductDeleted>, ApiError> {
    let id = parse_id(&id).ok_or(ProductError::NotFound)?;
    let product = products.delete(id).await?;
    Ok(Json(ProductDeleted {
        message: "Product deleted successfully",
        product,
    }))
}
