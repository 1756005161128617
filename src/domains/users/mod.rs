//! Users domain module.
//!
//! An in-memory, ordered user collection seeded with three fixed records.
//! Nothing here is persisted; [`UserStore::reset`] puts the collection back
//! to its seed state.
//!
//! ## Architecture
//!
//! - `model.rs` - `User` plus the create/update payloads
//! - `store.rs` - the lock-guarded collection and its operations
//! - `handlers.rs` - HTTP handlers mounted at [`USERS_PATH`]

mod error;
mod handlers;
mod model;
mod store;

pub use error::UserError;
pub use handlers::{UserDeleted, collection, routes};
pub use model::{NewUser, User, UserChanges, UserPayload};
pub use store::{UserStore, seed_users};

/// Mount point of the users collection.
pub const USERS_PATH: &str = "/api/users";
