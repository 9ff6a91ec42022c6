pub mod products;

pub use products::{ListProductsParams, ProductIn};
