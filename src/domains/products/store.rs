//! Store primitives for the products table.
//!
//! [`ProductStore`] is the seam between the product service and whatever
//! holds the rows. Each method is a single statement against the backing
//! store; sequencing (lookup before mutate) is the service's job.

use async_trait::async_trait;

use super::error::StoreError;
use super::model::{NewProduct, Product, ProductChanges};

#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All rows, newest id first.
    async fn list(&self) -> Result<Vec<Product>, StoreError>;

    async fn get(&self, id: i32) -> Result<Option<Product>, StoreError>;

    /// Insert a row and return it as stored, with its assigned id.
    async fn insert(&self, product: &NewProduct) -> Result<Product, StoreError>;

    /// Overwrite the supplied fields of row `id`. A missing row is not an error.
    async fn update(&self, id: i32, changes: &ProductChanges) -> Result<(), StoreError>;

    /// Remove row `id`. A missing row is not an error.
    async fn delete(&self, id: i32) -> Result<(), StoreError>;

    /// Remove every row and restart ids at 1.
    async fn delete_all(&self) -> Result<(), StoreError>;
}
