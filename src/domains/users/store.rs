//! In-memory user collection.
//!
//! The collection is owned by a [`UserStore`] value rather than a global, so
//! each server (and each test) gets its own copy. Ids come from
//! `max(existing) + 1`, floored by the highest id ever issued so a deleted id
//! never comes back. All mutations run under one write lock.

use tokio::sync::RwLock;
use tracing::{debug, info};

use super::error::UserError;
use super::model::{NewUser, User, UserChanges};

/// The fixed records the collection starts from and resets to.
pub fn seed_users() -> Vec<User> {
    vec![
        User::new(1, "Juan", "juan@example.com"),
        User::new(2, "María", "maria@example.com"),
        User::new(3, "Pedro", "pedro@example.com"),
    ]
}

/// Ordered, lock-guarded user collection.
pub struct UserStore {
    inner: RwLock<Inner>,
}

struct Inner {
    users: Vec<User>,
    // Highest id ever issued or seeded.
    last_id: i64,
}

impl Inner {
    fn new(users: Vec<User>) -> Self {
        let last_id = users.iter().map(|u| u.id).max().unwrap_or(0);
        Self { users, last_id }
    }

    fn next_id(&self) -> i64 {
        let max = self.users.iter().map(|u| u.id).max().unwrap_or(0);
        max.max(self.last_id) + 1
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    /// Create a store holding the seed records.
    pub fn new() -> Self {
        Self::with_users(seed_users())
    }

    /// Create a store holding the given records, in order.
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            inner: RwLock::new(Inner::new(users)),
        }
    }

    /// Restore the seed records, dropping every change.
    pub async fn reset(&self) {
        *self.inner.write().await = Inner::new(seed_users());
        info!("User collection reset to seed data");
    }

    pub async fn list(&self) -> Vec<User> {
        self.inner.read().await.users.clone()
    }

    pub async fn get(&self, id: i64) -> Result<User, UserError> {
        self.inner
            .read()
            .await
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(UserError::NotFound)
    }

    pub async fn create(&self, new_user: NewUser) -> User {
        let mut inner = self.inner.write().await;
        let id = inner.next_id();
        let user = User::new(id, new_user.name, new_user.email);
        inner.users.push(user.clone());
        inner.last_id = id;
        debug!("Created user {}", id);
        user
    }

    pub async fn update(&self, id: i64, changes: UserChanges) -> Result<User, UserError> {
        let mut inner = self.inner.write().await;
        let user = inner
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(UserError::NotFound)?;
        changes.apply(user);
        Ok(user.clone())
    }

    /// Remove a user and hand back the removed record.
    pub async fn delete(&self, id: i64) -> Result<User, UserError> {
        let mut inner = self.inner.write().await;
        let index = inner
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or(UserError::NotFound)?;
        debug!("Deleted user {}", id);
        Ok(inner.users.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    fn new_user(name: &str, email: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn test_store_starts_seeded() {
        let store = UserStore::new();
        let users = store.list().await;
        assert_eq!(users.len(), 3);
        assert_eq!(users[0], User::new(1, "Juan", "juan@example.com"));
    }

    #[tokio::test]
    async fn test_create_uses_max_plus_one() {
        let store = UserStore::with_users(vec![User::new(7, "A", "a@x"), User::new(2, "B", "b@x")]);
        let user = store.create(new_user("Ana", "ana@example.com")).await;
        assert_eq!(user.id, 8);
        assert_eq!(store.get(8).await, Ok(user));
    }

    #[tokio::test]
    async fn test_create_on_empty_collection_starts_at_one() {
        let store = UserStore::with_users(Vec::new());
        let user = store.create(new_user("Ana", "ana@example.com")).await;
        assert_eq!(user.id, 1);
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let store = UserStore::new();
        let removed = assert_ok!(store.delete(1).await);
        assert_eq!(removed.name, "Juan");
        assert_eq!(store.get(1).await, Err(UserError::NotFound));
        assert_eq!(store.list().await.len(), 2);
        assert_err!(store.delete(1).await);
    }

    #[tokio::test]
    async fn test_deleted_top_id_is_not_reissued() {
        let store = UserStore::new();
        store.delete(3).await.unwrap();
        let user = store.create(new_user("Ana", "ana@example.com")).await;
        assert_eq!(user.id, 4);
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let store = UserStore::new();
        let result = store.update(999, UserChanges::default()).await;
        assert_eq!(result, Err(UserError::NotFound));
    }

    #[tokio::test]
    async fn test_reset_restores_seed() {
        let store = UserStore::new();
        store.delete(2).await.unwrap();
        store.create(new_user("Ana", "ana@example.com")).await;
        store.reset().await;
        assert_eq!(store.list().await, seed_users());
    }
}
