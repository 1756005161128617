//! HTTP handlers for the users collection.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{MethodRouter, get},
};
use serde::Serialize;
use tracing::{info, instrument};

use super::error::UserError;
use super::model::{NewUser, User, UserChanges, UserPayload};
use super::store::UserStore;
use crate::core::ApiServer;
use crate::core::api::{ApiError, JsonObject, json_body, parse_id, route_not_found};

/// Body returned by a successful delete.
#[derive(Debug, Serialize)]
pub struct UserDeleted {
    pub message: &'static str,
    pub user: User,
}

/// Routes for the users collection, relative to its mount point.
pub fn routes() -> Router<ApiServer> {
    Router::new()
        .route("/", collection())
        .route(
            "/{id}",
            get(get_user)
                .put(update_user)
                .delete(delete_user)
                .fallback(route_not_found),
        )
}

pub fn collection() -> MethodRouter<ApiServer> {
    get(list_users).post(create_user).fallback(route_not_found)
}

#[instrument(skip_all)]
async fn list_users(State(users): State<Arc<UserStore>>) -> Json<Vec<User>> {
    Json(users.list().await)
}

#[instrument(skip(users))]
async fn get_user(
    State(users): State<Arc<UserStore>>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(&id).ok_or(UserError::NotFound)?;
    Ok(Json(users.get(id).await?))
}

#[instrument(skip_all)]
async fn create_user(
    State(users): State<Arc<UserStore>>,
    body: JsonObject,
) -> Result<impl IntoResponse, ApiError> {
    let new_user = NewUser::try_from(json_body::<UserPayload>(body)?)?;
    let user = users.create(new_user).await;
    info!("User {} created", user.id);
    Ok((StatusCode::CREATED, Json(user)))
}

#[instrument(skip(users, body))]
async fn update_user(
    State(users): State<Arc<UserStore>>,
    Path(id): Path<String>,
    body: JsonObject,
) -> Result<Json<User>, ApiError> {
    let changes = UserChanges::from(json_body::<UserPayload>(body)?);
    let id = parse_id(&id).ok_or(UserError::NotFound)?;
    Ok(Json(users.update(id, changes).await?))
}

#[instrument(skip(users))]
async fn delete_user(
    State(users): State<Arc<UserStore>>,
    Path(id): Path<String>,
) -> Result<Json<UserDeleted>, ApiError> {
    let id = parse_id(&id).ok_or(UserError::NotFound)?;
    let user = users.delete(id).await?;
    info!("User {} deleted", user.id);
    Ok(Json(UserDeleted {
        message: "User deleted",
        user,
    }))
}
