pub mod database;
pub mod seed;

pub use database::{ProductStore, StoreError, PRODUCT_COLLECTION};
pub use seed::seed_products_if_empty;
