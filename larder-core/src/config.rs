//! Storage configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::models::DEFAULT_SHELF_LIFE_DAYS;
use crate::store::FileStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KitchenConfig {
    /// Directory holding one JSON file per collection.
    pub data_dir: PathBuf,
    /// Days until expiry for items added without a date.
    pub shelf_life_days: u64,
}

impl Default for KitchenConfig {
    fn default() -> Self {
        Self {
            data_dir: FileStore::default_dir(),
            shelf_life_days: DEFAULT_SHELF_LIFE_DAYS,
        }
    }
}

impl KitchenConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `LARDER_DATA_DIR`: data directory (default: "~/.larder/data")
    /// - `LARDER_DEFAULT_SHELF_LIFE_DAYS`: default shelf life (default: 7)
    pub fn from_env() -> Self {
        let data_dir = env::var("LARDER_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| FileStore::default_dir());

        let shelf_life_days = env::var("LARDER_DEFAULT_SHELF_LIFE_DAYS")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_SHELF_LIFE_DAYS);

        Self {
            data_dir,
            shelf_life_days,
        }
    }
}
