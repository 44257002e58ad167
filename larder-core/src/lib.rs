pub mod ai;
pub mod categorize;
pub mod clock;
pub mod config;
pub mod error;
pub mod expiry;
pub mod import;
pub mod matching;
pub mod models;
pub mod recipes;
pub mod store;
pub mod video;

pub use categorize::{classify, resolve_details, Category, ItemDetails};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::KitchenConfig;
pub use error::{ImportError, StoreError, ValidationError};
pub use expiry::{
    days_until_expiry, days_until_expiry_at, display_for, expiring_soon, parse_expiry,
    urgency_label, ExpiringItem, ExpiryInfo, ExpiryStatus, ExpirySummary,
};
pub use matching::{missing_not_on_list, score, MatchMode, Readiness, RecipeMatch};
pub use models::{
    CustomVideo, InventoryDraft, InventoryItem, InventoryPatch, NewCustomVideo, NewInventoryItem,
    ShoppingDraft, ShoppingItem, ShoppingPatch, VideoPlatform,
};
pub use store::{EventBus, FileStore, Kitchen, KeyValueStore, MemoryStore, StoreEvent};
