// Backing-file access for inventory tables: cached loads and whole-file appends.
//
// The backing file is shared without any locking. Two sessions appending at the
// same time each rewrite the whole file from their own in-memory table, so the
// last write wins and the other append is lost.
use chrono::Utc;
use shared::models::{InventoryTable, NewProduct};
use std::path::Path;

use super::cache::TableCache;
use super::csv_parser::InventoryCsvParser;
use crate::config::InventorySettings;
use crate::error::InventoryError;

pub struct InventoryStore {
    parser: InventoryCsvParser,
    cache: TableCache,
}

impl InventoryStore {
    pub fn new(parser: InventoryCsvParser, cache: TableCache) -> Self {
        InventoryStore { parser, cache }
    }

    pub fn from_settings(settings: &InventorySettings) -> Result<Self, InventoryError> {
        Ok(Self::new(
            InventoryCsvParser::new(settings.delimiter()?),
            TableCache::new(settings.cache_ttl()),
        ))
    }

    /// Returns the normalized table for `source`, served from cache while it is fresh.
    pub fn load(&mut self, source: &Path) -> Result<InventoryTable, InventoryError> {
        let now = Utc::now();
        if let Some(table) = self.cache.get(source, now) {
            tracing::debug!(path = %source.display(), records = table.len(), "Serving inventory from cache");
            return Ok(table.clone());
        }

        let table = self.parser.load_table(source)?;
        tracing::info!(path = %source.display(), records = table.len(), "Loaded inventory");
        self.cache.insert(source, table.clone(), now);
        Ok(table)
    }

    /// Appends `product` to `table`, rewrites `source` with the whole table and drops the cached copy.
    ///
    /// On `PersistenceFailure` the record stays in `table`: memory and file disagree
    /// until the next successful write, and the caller has to tell the user.
    pub fn append(
        &mut self,
        source: &Path,
        table: &mut InventoryTable,
        product: NewProduct,
    ) -> Result<(), InventoryError> {
        table.push(product.into_record());

        let written = self.parser.write_table(source, table);
        self.cache.invalidate(source);

        match &written {
            Ok(()) => tracing::info!(path = %source.display(), records = table.len(), "Appended product and saved inventory"),
            Err(e) => tracing::error!(path = %source.display(), error = %e, "Product kept in memory but saving failed"),
        }
        written
    }
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new(InventoryCsvParser::default(), TableCache::new(None))
    }
}
