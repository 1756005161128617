//! Products domain module.
//!
//! CRUD over the persistent `product` table. Rows are never cached between
//! requests; every operation goes to the [`ProductStore`].
//!
//! ## Architecture
//!
//! - `model.rs` - `Product` row plus create/update payloads
//! - `validation.rs` - payload → validated `NewProduct` / `ProductChanges`
//! - `store.rs` - the `ProductStore` trait (store primitives)
//! - `mysql.rs` / `memory.rs` - store implementations
//! - `service.rs` - lookup-then-mutate sequencing
//! - `handlers.rs` - HTTP handlers mounted at [`PRODUCTS_PATH`]

mod error;
mod handlers;
mod memory;
mod model;
mod mysql;
mod service;
mod store;
mod validation;

pub use error::{ProductError, StoreError};
pub use handlers::{ProductDeleted, collection, routes};
pub use memory::MemoryProductStore;
pub use model::{NewProduct, Product, ProductChanges, ProductPayload};
pub use mysql::MySqlProductStore;
pub use service::ProductService;
pub use store::ProductStore;
pub use validation::{validate_price, validate_quantity};

/// Mount point of the products collection.
pub const PRODUCTS_PATH: &str = "/api/products";
