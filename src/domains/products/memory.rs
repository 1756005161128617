//! In-process product store.
//!
//! Mirrors the MySQL table's observable behavior (auto-increment ids that
//! survive deletes, newest-first listing, automatic timestamps) without a
//! database. Used by tests and for running the API without MySQL.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::error::StoreError;
use super::model::{NewProduct, Product, ProductChanges};
use super::store::ProductStore;

pub struct MemoryProductStore {
    inner: RwLock<Table>,
}

struct Table {
    rows: BTreeMap<i32, Product>,
    next_id: i32,
}

impl Default for MemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.inner.read().await.rows.values().rev().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Product>, StoreError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn insert(&self, product: &NewProduct) -> Result<Product, StoreError> {
        let mut table = self.inner.write().await;
        let id = table.next_id;
        table.next_id += 1;

        let now = Utc::now();
        let row = Product {
            id,
            name: product.name.clone(),
            unit: product.unit.clone(),
            price: product.price,
            quantity: product.quantity,
            created_at: Some(now),
            updated_at: Some(now),
        };
        table.rows.insert(id, row.clone());
        Ok(row)
    }

    async fn update(&self, id: i32, changes: &ProductChanges) -> Result<(), StoreError> {
        if let Some(row) = self.inner.write().await.rows.get_mut(&id) {
            changes.apply(row);
            row.updated_at = Some(Utc::now());
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        self.inner.write().await.rows.remove(&id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), StoreError> {
        let mut table = self.inner.write().await;
        table.rows.clear();
        table.next_id = 1;
        Ok(())
    }
}
