use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};

use super::{EventBus, KeyValueStore, MemoryStore, StoreEvent};
use crate::clock::{Clock, SystemClock};
use crate::error::StoreError;
use crate::models::DEFAULT_SHELF_LIFE_DAYS;

/// Typed access to every kitchen collection.
///
/// All read-modify-write sequences run under one lock, so concurrent callers
/// in the same process never lose each other's updates. The lock also guards
/// the id generator.
pub struct Kitchen {
    store: Box<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    events: EventBus,
    last_id: Mutex<i64>,
    shelf_life_days: u64,
}

impl Kitchen {
    pub fn new(store: impl KeyValueStore + 'static, clock: Arc<dyn Clock>) -> Self {
        Self {
            store: Box::new(store),
            clock,
            events: EventBus::new(),
            last_id: Mutex::new(0),
            shelf_life_days: DEFAULT_SHELF_LIFE_DAYS,
        }
    }

    /// Memory-backed kitchen on the system clock.
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new(), Arc::new(SystemClock))
    }

    /// Shelf life applied when an item is added without an expiry.
    pub fn with_shelf_life(mut self, days: u64) -> Self {
        self.shelf_life_days = days;
        self
    }

    pub fn shelf_life_days(&self) -> u64 {
        self.shelf_life_days
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn today(&self) -> chrono::NaiveDate {
        self.clock.today()
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub(super) fn lock(&self) -> Result<MutexGuard<'_, i64>, StoreError> {
        self.last_id.lock().map_err(|_| StoreError::Poisoned)
    }

    /// Next id, strictly greater than both the previous one and every id
    /// already in the collection. Normally this is the current millisecond.
    pub(super) fn next_id(&self, last_id: &mut i64, existing_max: i64) -> i64 {
        let now_ms = self.clock.now().timestamp_millis();
        let id = now_ms.max(existing_max + 1).max(*last_id + 1);
        *last_id = id;
        id
    }

    pub(super) fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StoreError> {
        match self.store.get(key)? {
            Some(raw) if !raw.trim().is_empty() => Ok(serde_json::from_str(&raw)?),
            _ => Ok(Vec::new()),
        }
    }

    pub(super) fn save<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(items)?;
        self.store.set(key, &raw)
    }

    pub(super) fn remove_key(&self, key: &str) -> Result<(), StoreError> {
        self.store.remove(key)
    }

    pub(super) fn notify(&self, event: StoreEvent) {
        tracing::debug!(?event, "Store updated");
        self.events.publish(event);
    }
}

impl std::fmt::Debug for Kitchen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Kitchen")
            .field("events", &self.events)
            .field("shelf_life_days", &self.shelf_life_days)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    #[test]
    fn test_ids_strictly_increase_under_frozen_clock() {
        let clock = FixedClock::on(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        let kitchen = Kitchen::new(MemoryStore::new(), Arc::new(clock));
        let mut guard = kitchen.lock().unwrap();

        let a = kitchen.next_id(&mut guard, 0);
        let b = kitchen.next_id(&mut guard, 0);
        let c = kitchen.next_id(&mut guard, 0);
        assert_eq!(a, clock.now().timestamp_millis());
        assert_eq!(b, a + 1);
        assert_eq!(c, a + 2);
    }

    #[test]
    fn test_id_beyond_existing_max() {
        let clock = FixedClock::on(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        let kitchen = Kitchen::new(MemoryStore::new(), Arc::new(clock));
        let mut guard = kitchen.lock().unwrap();

        let far_future = clock.now().timestamp_millis() + 10_000;
        assert_eq!(kitchen.next_id(&mut guard, far_future), far_future + 1);
    }

    #[test]
    fn test_corrupt_blob_is_a_serialization_error() {
        let store = MemoryStore::new();
        store.set(super::super::INVENTORY_KEY, "{not json").unwrap();
        let kitchen = Kitchen::new(store, Arc::new(SystemClock));
        assert!(matches!(
            kitchen.list_inventory(),
            Err(StoreError::Serialization(_))
        ));
    }
}
