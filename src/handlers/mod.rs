pub mod categories;
pub mod diagnostics;
pub mod products;
pub mod root;

pub use categories::get_categories;
pub use diagnostics::test_database;
pub use products::{create_product, list_products};
pub use root::read_root;
