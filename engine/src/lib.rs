// Engine library root
// Loader/normalizer, filter engine and report aggregates for the inventory CSV.

pub mod config;
pub mod data;
pub mod error;
pub mod filters;
pub mod reports;

pub use data::{InventoryCsvParser, InventoryStore};
pub use error::InventoryError;
pub use filters::{filter, lookup_barcode, FilterOptions, FilterPredicate, PriceRange};

use shared::models::InventoryTable;
use std::path::Path;

/// Uncached, comma-delimited load. Use [`InventoryStore`] for cached loads and appends.
pub fn load(source: &Path) -> Result<InventoryTable, InventoryError> {
    InventoryCsvParser::default().load_table(source)
}
