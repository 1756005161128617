//! Product-specific error types.

use thiserror::Error;

use crate::core::api::ApiError;

/// A failure reported by a [`ProductStore`](super::ProductStore).
///
/// Carries the operation that failed plus the driver's message, which is
/// surfaced to clients verbatim.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{context}: {message}")]
pub struct StoreError {
    context: &'static str,
    message: String,
}

impl StoreError {
    pub fn new(context: &'static str, source: impl std::fmt::Display) -> Self {
        Self {
            context,
            message: source.to_string(),
        }
    }
}

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// One of `name`, `unit`, `price`, `quantity` was not supplied.
    #[error("All fields are required: name, unit, price, quantity")]
    MissingFields,

    #[error("The price must be a number greater than or equal to 0")]
    InvalidPrice,

    #[error("The quantity must be an integer greater than or equal to 0")]
    InvalidQuantity,

    #[error("The name must be a non-empty string")]
    InvalidName,

    #[error("The unit must be a non-empty string")]
    InvalidUnit,

    /// No row has the requested id.
    #[error("Product not found")]
    NotFound,

    /// The underlying store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::MissingFields
            | ProductError::InvalidPrice
            | ProductError::InvalidQuantity
            | ProductError::InvalidName
            | ProductError::InvalidUnit => ApiError::bad_request(err.to_string()),
            ProductError::NotFound => ApiError::not_found(err.to_string()),
            ProductError::Store(_) => ApiError::internal(err.to_string()),
        }
    }
}
