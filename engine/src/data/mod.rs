// Loading, normalizing and persisting the inventory file
pub mod cache;
pub mod columns;
pub mod csv_parser;
pub mod inventory_store;

pub use csv_parser::InventoryCsvParser;
pub use inventory_store::InventoryStore;
