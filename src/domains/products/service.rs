//! Product service implementation.
//!
//! Sequences store primitives into the resource operations. Mutations look
//! the row up first so a missing id is always reported as not-found. The
//! lookup and the mutation are separate statements with no transaction
//! around them, so a concurrent delete can still turn an update into a
//! not-found.

use std::sync::Arc;

use tracing::{info, warn};

use super::error::ProductError;
use super::model::{NewProduct, Product, ProductChanges};
use super::store::ProductStore;

/// Resource operations over a [`ProductStore`].
pub struct ProductService {
    store: Arc<dyn ProductStore>,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        info!("Initializing ProductService");
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Product>, ProductError> {
        Ok(self.store.list().await?)
    }

    pub async fn get(&self, id: i32) -> Result<Product, ProductError> {
        self.store.get(id).await?.ok_or(ProductError::NotFound)
    }

    pub async fn create(&self, product: NewProduct) -> Result<Product, ProductError> {
        let created = self.store.insert(&product).await?;
        info!("Product {} created", created.id);
        Ok(created)
    }

    /// Apply `changes` to row `id` and return the row as stored afterwards.
    /// With no changes the existing row comes back untouched.
    pub async fn update(&self, id: i32, changes: ProductChanges) -> Result<Product, ProductError> {
        let existing = self.get(id).await?;
        if changes.is_empty() {
            return Ok(existing);
        }

        self.store.update(id, &changes).await?;
        self.store.get(id).await?.ok_or_else(|| {
            warn!("Product {} disappeared during update", id);
            ProductError::NotFound
        })
    }

    /// Remove row `id`, returning the row as it was before removal.
    pub async fn delete(&self, id: i32) -> Result<Product, ProductError> {
        let existing = self.get(id).await?;
        self.store.delete(id).await?;
        info!("Product {} deleted", id);
        Ok(existing)
    }

    /// Remove every row and restart ids at 1. Maintenance only, not routed.
    pub async fn delete_all(&self) -> Result<(), ProductError> {
        self.store.delete_all().await?;
        warn!("All products deleted");
        Ok(())
    }
}
