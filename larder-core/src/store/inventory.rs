use super::{Kitchen, StoreEvent, INVENTORY_KEY};
use crate::error::StoreError;
use crate::models::{InventoryDraft, InventoryItem, InventoryPatch};

impl Kitchen {
    pub fn list_inventory(&self) -> Result<Vec<InventoryItem>, StoreError> {
        let _guard = self.lock()?;
        self.load(INVENTORY_KEY)
    }

    pub fn get_item(&self, id: i64) -> Result<Option<InventoryItem>, StoreError> {
        Ok(self.list_inventory()?.into_iter().find(|item| item.id == id))
    }

    pub fn add_item(&self, draft: InventoryDraft) -> Result<InventoryItem, StoreError> {
        draft.validate()?;

        let item = {
            let mut last_id = self.lock()?;
            let mut items: Vec<InventoryItem> = self.load(INVENTORY_KEY)?;
            let max_id = items.iter().map(|i| i.id).max().unwrap_or(0);
            let id = self.next_id(&mut last_id, max_id);
            let item = draft.into_item(id, self.clock().now());
            items.push(item.clone());
            self.save(INVENTORY_KEY, &items)?;
            item
        };

        tracing::info!(id = item.id, name = %item.name, "Added inventory item");
        self.notify(StoreEvent::InventoryUpdated);
        Ok(item)
    }

    /// Add several items in one write. Either every draft is stored or none.
    pub fn add_items(&self, drafts: Vec<InventoryDraft>) -> Result<Vec<InventoryItem>, StoreError> {
        for draft in &drafts {
            draft.validate()?;
        }
        if drafts.is_empty() {
            return Ok(Vec::new());
        }

        let added = {
            let mut last_id = self.lock()?;
            let mut items: Vec<InventoryItem> = self.load(INVENTORY_KEY)?;
            let mut max_id = items.iter().map(|i| i.id).max().unwrap_or(0);
            let added_at = self.clock().now();

            let added: Vec<InventoryItem> = drafts
                .into_iter()
                .map(|draft| {
                    let id = self.next_id(&mut last_id, max_id);
                    max_id = id;
                    draft.into_item(id, added_at)
                })
                .collect();

            items.extend(added.iter().cloned());
            self.save(INVENTORY_KEY, &items)?;
            added
        };

        tracing::info!(count = added.len(), "Added inventory items");
        self.notify(StoreEvent::InventoryUpdated);
        Ok(added)
    }

    /// Returns `None` when no item has `id`.
    pub fn update_item(
        &self,
        id: i64,
        patch: InventoryPatch,
    ) -> Result<Option<InventoryItem>, StoreError> {
        patch.validate()?;

        let updated = {
            let _guard = self.lock()?;
            let mut items: Vec<InventoryItem> = self.load(INVENTORY_KEY)?;
            let Some(item) = items.iter_mut().find(|item| item.id == id) else {
                return Ok(None);
            };
            patch.apply(item);
            let updated = item.clone();
            self.save(INVENTORY_KEY, &items)?;
            updated
        };

        self.notify(StoreEvent::InventoryUpdated);
        Ok(Some(updated))
    }

    /// Returns whether an item was removed.
    pub fn delete_item(&self, id: i64) -> Result<bool, StoreError> {
        {
            let _guard = self.lock()?;
            let mut items: Vec<InventoryItem> = self.load(INVENTORY_KEY)?;
            let before = items.len();
            items.retain(|item| item.id != id);
            if items.len() == before {
                return Ok(false);
            }
            self.save(INVENTORY_KEY, &items)?;
        }

        self.notify(StoreEvent::InventoryUpdated);
        Ok(true)
    }

    pub fn clear_inventory(&self) -> Result<(), StoreError> {
        {
            let _guard = self.lock()?;
            self.remove_key(INVENTORY_KEY)?;
        }
        tracing::info!("Cleared inventory");
        self.notify(StoreEvent::InventoryUpdated);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::MemoryStore;
    use super::*;
    use crate::categorize::Category;
    use crate::clock::FixedClock;
    use crate::models::NewInventoryItem;
    use chrono::NaiveDate;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn kitchen() -> Kitchen {
        let clock = FixedClock::on(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        Kitchen::new(MemoryStore::new(), Arc::new(clock))
    }

    fn draft(name: &str) -> InventoryDraft {
        NewInventoryItem::named(name)
            .into_draft(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(), 7)
            .unwrap()
    }

    #[test]
    fn test_add_and_list() {
        let kitchen = kitchen();
        let milk = kitchen.add_item(draft("Milk")).unwrap();
        assert_eq!(milk.category, Category::Dairy);

        let items = kitchen.list_inventory().unwrap();
        assert_eq!(items, vec![milk.clone()]);
        assert_eq!(kitchen.get_item(milk.id).unwrap(), Some(milk));
        assert_eq!(kitchen.get_item(-5).unwrap(), None);
    }

    #[test]
    fn test_ids_unique_within_one_millisecond() {
        let kitchen = kitchen();
        let drafts = (0..50).map(|i| draft(&format!("item {i}"))).collect();
        let mut added = kitchen.add_items(drafts).unwrap();
        added.push(kitchen.add_item(draft("one more")).unwrap());

        let ids: HashSet<i64> = added.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), 51);
    }

    #[test]
    fn test_invalid_draft_is_rejected_before_writing() {
        let kitchen = kitchen();
        let mut bad = draft("Milk");
        bad.quantity = 0.0;
        let result = kitchen.add_items(vec![draft("Eggs"), bad]);
        assert!(matches!(result, Err(StoreError::Invalid(_))));
        assert!(kitchen.list_inventory().unwrap().is_empty());
    }

    #[test]
    fn test_update_and_delete() {
        let kitchen = kitchen();
        let item = kitchen.add_item(draft("Bread")).unwrap();

        let updated = kitchen
            .update_item(
                item.id,
                InventoryPatch {
                    quantity: Some(2.0),
                    unit: Some("loaves".to_string()),
                    ..InventoryPatch::default()
                },
            )
            .unwrap()
            .unwrap();
        assert_eq!(updated.quantity, 2.0);
        assert_eq!(updated.unit, "loaves");
        assert_eq!(updated.name, "Bread");

        assert!(kitchen
            .update_item(12345, InventoryPatch::default())
            .unwrap()
            .is_none());

        assert!(kitchen.delete_item(item.id).unwrap());
        assert!(!kitchen.delete_item(item.id).unwrap());
        assert!(kitchen.list_inventory().unwrap().is_empty());
    }

    #[test]
    fn test_clear_inventory() {
        let kitchen = kitchen();
        kitchen.add_item(draft("Rice")).unwrap();
        kitchen.clear_inventory().unwrap();
        assert!(kitchen.list_inventory().unwrap().is_empty());
    }
}
