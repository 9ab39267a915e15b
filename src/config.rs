//! Configuration management
//!
//! Config is stored at `<config dir>/moulberry-utils/config.toml`:
//!
//! ```toml
//! seed = 42
//!
//! [tables.loot]
//! sword = 1.0
//! shield = 3.0
//! potion = 6.0
//! ```
//!
//! Each table becomes a [`WeightedRandomSet`] of its keys.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::paths;
use crate::probability::WeightedRandomSet;

/// Global configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UtilsConfig {
    /// Default seed for random operations (`None` = seed from the OS)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Named weighted tables (table name -> entry -> weight)
    #[serde(default)]
    pub tables: BTreeMap<String, BTreeMap<String, f32>>,
}

impl UtilsConfig {
    /// Get the default config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load the default config file, or an empty config if it does not exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`, or an empty config if the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("loaded {} table(s) from {}", config.tables.len(), path.display());
        Ok(config)
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|source| Error::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Add or replace an entry in a table, creating the table if needed
    pub fn set_entry(&mut self, table: &str, entry: &str, weight: f32) {
        self.tables
            .entry(table.to_string())
            .or_default()
            .insert(entry.to_string(), weight);
    }

    /// Build the weighted set for a named table
    ///
    /// # Errors
    ///
    /// [`Error::UnknownTable`] if no such table exists, [`Error::InvalidWeight`]
    /// if any entry has a non-positive or non-finite weight.
    pub fn table(&self, name: &str) -> Result<WeightedRandomSet<String>> {
        let entries = self
            .tables
            .get(name)
            .ok_or_else(|| Error::UnknownTable(name.to_string()))?;

        let mut set = WeightedRandomSet::new();
        for (entry, &weight) in entries {
            set.insert(entry.clone(), weight)?;
        }
        Ok(set)
    }
}
