// Engine settings, loaded from a JSON file or the embedded defaults
use crate::error::InventoryError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct InventorySettings {
    /// File names tried in order when no explicit source is given.
    pub candidate_files: Vec<String>,
    pub csv_delimiter: String, // Should be a single ASCII char, but JSON string is easier
    /// How long a loaded table may be served from cache. `None` keeps it for the whole session.
    pub cache_ttl_seconds: Option<u64>,
}

impl Default for InventorySettings {
    fn default() -> Self {
        InventorySettings {
            candidate_files: vec!["data.csv".to_string(), "inventory.csv".to_string()],
            csv_delimiter: ",".to_string(),
            cache_ttl_seconds: Some(300),
        }
    }
}

impl InventorySettings {
    pub fn load_default() -> Result<Self, InventoryError> {
        let config_str = include_str!("../../assets/config/default.json");
        Self::from_json_str(config_str)
    }

    pub fn from_json_str(json: &str) -> Result<Self, InventoryError> {
        let settings: InventorySettings = serde_json::from_str(json)
            .map_err(|e| InventoryError::ConfigError(format!("Invalid settings JSON: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, InventoryError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            InventoryError::ConfigError(format!("Failed to read settings file '{}': {}", path.display(), e))
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), InventoryError> {
        self.delimiter()?;
        if self.candidate_files.is_empty() {
            return Err(InventoryError::ConfigError(
                "At least one candidate file name is required".to_string(),
            ));
        }
        Ok(())
    }

    pub fn delimiter(&self) -> Result<u8, InventoryError> {
        match self.csv_delimiter.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(InventoryError::ConfigError(format!(
                "CSV delimiter must be a single ASCII character, got '{}'",
                self.csv_delimiter
            ))),
        }
    }

    pub fn cache_ttl(&self) -> Option<chrono::Duration> {
        // Values too large for chrono are treated as "never expires".
        self.cache_ttl_seconds
            .and_then(|secs| i64::try_from(secs).ok())
            .and_then(chrono::Duration::try_seconds)
    }

    /// First candidate that exists under `dir`, falling back to the first candidate
    /// so an append can create it.
    pub fn resolve_source(&self, dir: &Path) -> PathBuf {
        let existing = self
            .candidate_files
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file());

        match existing {
            Some(path) => path,
            None => {
                let fallback = self
                    .candidate_files
                    .first()
                    .map(String::as_str)
                    .unwrap_or("data.csv");
                tracing::debug!(dir = %dir.display(), fallback, "No inventory file found among candidates");
                dir.join(fallback)
            }
        }
    }
}
