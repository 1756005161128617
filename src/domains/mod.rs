//! Domains module containing the resource handlers.
//!
//! Each resource is self-contained: it owns its model, storage access,
//! validation and HTTP handlers. The dispatcher in
//! [`ApiServer`](crate::core::ApiServer) is the only place they meet.

pub mod info;
pub mod products;
pub mod users;
