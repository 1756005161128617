//! MySQL-backed product store.

use async_trait::async_trait;
use sqlx::{MySql, MySqlPool, QueryBuilder};
use tracing::{debug, info};

use super::error::StoreError;
use super::model::{NewProduct, Product, ProductChanges};
use super::store::ProductStore;

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS product (
        id INT AUTO_INCREMENT PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        unit VARCHAR(50) NOT NULL,
        price DOUBLE NOT NULL,
        quantity INT NOT NULL,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP
    )
"#;

const SELECT_ALL: &str = "SELECT id, name, unit, price, quantity, created_at, updated_at \
                          FROM product ORDER BY id DESC";

const SELECT_ONE: &str = "SELECT id, name, unit, price, quantity, created_at, updated_at \
                          FROM product WHERE id = ?";

/// Product store over a pooled MySQL connection.
#[derive(Clone)]
pub struct MySqlProductStore {
    pool: MySqlPool,
}

impl MySqlProductStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Create the `product` table if it does not exist yet.
    pub async fn initialize(&self) -> Result<(), sqlx::Error> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        info!("Table \"product\" verified/created");
        Ok(())
    }

    async fn fetch_one(&self, id: i32, context: &'static str) -> Result<Option<Product>, StoreError> {
        sqlx::query_as::<_, Product>(SELECT_ONE)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::new(context, e))
    }
}

#[async_trait]
impl ProductStore for MySqlProductStore {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        sqlx::query_as::<_, Product>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::new("Error fetching products", e))
    }

    async fn get(&self, id: i32) -> Result<Option<Product>, StoreError> {
        self.fetch_one(id, "Error fetching product").await
    }

    async fn insert(&self, product: &NewProduct) -> Result<Product, StoreError> {
        const CONTEXT: &str = "Error creating product";

        let result = sqlx::query("INSERT INTO product (name, unit, price, quantity) VALUES (?, ?, ?, ?)")
            .bind(&product.name)
            .bind(&product.unit)
            .bind(product.price)
            .bind(product.quantity)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::new(CONTEXT, e))?;

        let id = i32::try_from(result.last_insert_id()).map_err(|e| StoreError::new(CONTEXT, e))?;
        debug!("Inserted product {}", id);

        self.fetch_one(id, CONTEXT)
            .await?
            .ok_or_else(|| StoreError::new(CONTEXT, format!("row {id} vanished after insert")))
    }

    async fn update(&self, id: i32, changes: &ProductChanges) -> Result<(), StoreError> {
        if changes.is_empty() {
            return Ok(());
        }

        let mut builder = QueryBuilder::<MySql>::new("UPDATE product SET ");
        {
            let mut fields = builder.separated(", ");
            if let Some(name) = &changes.name {
                fields.push("name = ").push_bind_unseparated(name.clone());
            }
            if let Some(unit) = &changes.unit {
                fields.push("unit = ").push_bind_unseparated(unit.clone());
            }
            if let Some(price) = changes.price {
                fields.push("price = ").push_bind_unseparated(price);
            }
            if let Some(quantity) = changes.quantity {
                fields.push("quantity = ").push_bind_unseparated(quantity);
            }
        }
        builder.push(" WHERE id = ").push_bind(id);

        builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::new("Error updating product", e))?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM product WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::new("Error deleting product", e))?;
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), StoreError> {
        const CONTEXT: &str = "Error clearing products";

        sqlx::query("DELETE FROM product")
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::new(CONTEXT, e))?;
        sqlx::query("ALTER TABLE product AUTO_INCREMENT = 1")
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::new(CONTEXT, e))?;
        Ok(())
    }
}
