pub mod category;
pub mod product;

pub use category::{Category, CATEGORIES};
pub use product::Product;
