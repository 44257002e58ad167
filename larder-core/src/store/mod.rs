//! Persistence for user-entered kitchen data.
//!
//! Each collection is a single JSON blob under a fixed key, the same layout a
//! browser local-storage backend would use. [`Kitchen`] layers typed
//! operations and change notifications on top of any [`KeyValueStore`].

mod events;
mod file;
mod inventory;
mod kitchen;
mod memory;
mod recipes;
mod shopping;

pub use events::{EventBus, StoreEvent};
pub use file::FileStore;
pub use kitchen::Kitchen;
pub use memory::MemoryStore;

use crate::error::StoreError;

pub const INVENTORY_KEY: &str = "smart-kitchen-inventory";
pub const SHOPPING_KEY: &str = "smart-kitchen-shopping";
pub const SAVED_RECIPES_KEY: &str = "smart-kitchen-saved-recipes";
pub const VIDEOS_KEY: &str = "smart-kitchen-videos";

/// A string-keyed blob store.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Keys become file names, so keep them to a safe alphabet.
pub(crate) fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        assert!(validate_key(INVENTORY_KEY).is_ok());
        assert!(validate_key("a_b-1").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("with space").is_err());
    }
}
