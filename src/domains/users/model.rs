//! User records and request payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::UserError;

/// A user held in the in-memory collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Raw request body for user create/update.
///
/// Fields stay untyped so that a wrong type reads as "not supplied" instead
/// of failing the whole body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserPayload {
    pub name: Option<Value>,
    pub email: Option<Value>,
}

/// Validated fields for a new user.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Fields to overwrite on an existing user. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserChanges {
    /// Merge the supplied fields into `user`.
    pub fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
    }
}

impl TryFrom<UserPayload> for NewUser {
    type Error = UserError;

    fn try_from(payload: UserPayload) -> Result<Self, Self::Error> {
        match (non_empty(payload.name), non_empty(payload.email)) {
            (Some(name), Some(email)) => Ok(Self { name, email }),
            _ => Err(UserError::MissingFields),
        }
    }
}

impl From<UserPayload> for UserChanges {
    fn from(payload: UserPayload) -> Self {
        Self {
            name: non_empty(payload.name),
            email: non_empty(payload.email),
        }
    }
}

fn non_empty(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}
