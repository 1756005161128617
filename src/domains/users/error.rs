//! User-specific error types.

use thiserror::Error;

use crate::core::api::ApiError;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// `name` or `email` was missing or empty.
    #[error("Name and email are required")]
    MissingFields,

    /// No user has the requested id.
    #[error("User not found")]
    NotFound,
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::MissingFields => ApiError::bad_request(err.to_string()),
            UserError::NotFound => ApiError::not_found(err.to_string()),
        }
    }
}
