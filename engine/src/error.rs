use std::path::PathBuf;
use thiserror::Error;

// Unparseable individual cells never show up here: they are replaced by field
// defaults while loading and only counted in the debug log.
#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Inventory source '{}' is unreadable: {source}", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    // The in-memory table already holds the appended record when this is returned.
    #[error("Failed to persist inventory to '{}': {source}", .path.display())]
    PersistenceFailure {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl InventoryError {
    pub fn unreadable(path: impl Into<PathBuf>, source: impl Into<csv::Error>) -> Self {
        InventoryError::SourceUnreadable {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn persistence(path: impl Into<PathBuf>, source: impl Into<csv::Error>) -> Self {
        InventoryError::PersistenceFailure {
            path: path.into(),
            source: source.into(),
        }
    }
}
