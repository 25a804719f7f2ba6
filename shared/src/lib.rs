// Inventory data model and value-coercion helpers shared by the engine and its front ends.
pub mod models;
pub mod utils;

pub use models::{CanonicalField, InventoryTable, NewProduct, ProductRecord};
pub use utils::Coerced;
