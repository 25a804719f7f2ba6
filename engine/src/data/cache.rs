// Session cache of normalized tables, keyed by source path
use chrono::{DateTime, Duration, Utc};
use shared::models::InventoryTable;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
struct CachedTable {
    table: InventoryTable,
    loaded_at: DateTime<Utc>,
}

/// Entries expire after `ttl`; without a ttl they live until invalidated.
#[derive(Debug, Clone, Default)]
pub struct TableCache {
    ttl: Option<Duration>,
    entries: HashMap<PathBuf, CachedTable>,
}

impl TableCache {
    pub fn new(ttl: Option<Duration>) -> Self {
        TableCache {
            ttl,
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, source: &Path, now: DateTime<Utc>) -> Option<&InventoryTable> {
        self.entries
            .get(source)
            .filter(|entry| self.ttl.map_or(true, |ttl| now - entry.loaded_at < ttl))
            .map(|entry| &entry.table)
    }

    pub fn insert(&mut self, source: &Path, table: InventoryTable, now: DateTime<Utc>) {
        self.entries.insert(
            source.to_path_buf(),
            CachedTable { table, loaded_at: now },
        );
    }

    pub fn invalidate(&mut self, source: &Path) -> bool {
        self.entries.remove(source).is_some()
    }
}
