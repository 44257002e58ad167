use std::collections::HashSet;

use super::{Kitchen, StoreEvent, INVENTORY_KEY, SHOPPING_KEY};
use crate::error::{StoreError, ValidationError};
use crate::models::{
    InventoryDraft, InventoryItem, ShoppingDraft, ShoppingItem, ShoppingPatch,
    MANUAL_SHOPPING_CATEGORY, RECIPE_SHOPPING_CATEGORY,
};

impl Kitchen {
    pub fn list_shopping(&self) -> Result<Vec<ShoppingItem>, StoreError> {
        let _guard = self.lock()?;
        self.load(SHOPPING_KEY)
    }

    pub fn add_shopping(&self, draft: ShoppingDraft) -> Result<ShoppingItem, StoreError> {
        let mut added = self.add_shopping_many(vec![draft])?;
        Ok(added.remove(0))
    }

    pub fn add_shopping_many(
        &self,
        drafts: Vec<ShoppingDraft>,
    ) -> Result<Vec<ShoppingItem>, StoreError> {
        if drafts.is_empty() {
            return Ok(Vec::new());
        }
        if drafts.iter().any(|d| d.name.trim().is_empty()) {
            return Err(ValidationError::BlankName.into());
        }

        let added = {
            let mut last_id = self.lock()?;
            let mut items: Vec<ShoppingItem> = self.load(SHOPPING_KEY)?;
            let added = self.append_shopping(&mut last_id, &mut items, drafts);
            self.save(SHOPPING_KEY, &items)?;
            added
        };

        tracing::info!(count = added.len(), "Added shopping items");
        self.notify(StoreEvent::ShoppingUpdated);
        Ok(added)
    }

    fn append_shopping(
        &self,
        last_id: &mut i64,
        items: &mut Vec<ShoppingItem>,
        drafts: Vec<ShoppingDraft>,
    ) -> Vec<ShoppingItem> {
        let mut max_id = items.iter().map(|i| i.id).max().unwrap_or(0);
        let added: Vec<ShoppingItem> = drafts
            .into_iter()
            .map(|draft| {
                let id = self.next_id(last_id, max_id);
                max_id = id;
                ShoppingItem {
                    id,
                    name: draft.name.trim().to_string(),
                    quantity: draft
                        .quantity
                        .filter(|q| !q.trim().is_empty())
                        .unwrap_or_else(|| "1".to_string()),
                    checked: false,
                    category: draft
                        .category
                        .unwrap_or_else(|| MANUAL_SHOPPING_CATEGORY.to_string()),
                    from_recipe: draft.from_recipe,
                }
            })
            .collect();
        items.extend(added.iter().cloned());
        added
    }

    pub fn update_shopping(
        &self,
        id: i64,
        patch: ShoppingPatch,
    ) -> Result<Option<ShoppingItem>, StoreError> {
        let updated = {
            let _guard = self.lock()?;
            let mut items: Vec<ShoppingItem> = self.load(SHOPPING_KEY)?;
            let Some(item) = items.iter_mut().find(|item| item.id == id) else {
                return Ok(None);
            };
            patch.apply(item);
            let updated = item.clone();
            self.save(SHOPPING_KEY, &items)?;
            updated
        };

        self.notify(StoreEvent::ShoppingUpdated);
        Ok(Some(updated))
    }

    /// Flip the checked flag.
    pub fn toggle_shopping(&self, id: i64) -> Result<Option<ShoppingItem>, StoreError> {
        let updated = {
            let _guard = self.lock()?;
            let mut items: Vec<ShoppingItem> = self.load(SHOPPING_KEY)?;
            let Some(item) = items.iter_mut().find(|item| item.id == id) else {
                return Ok(None);
            };
            item.checked = !item.checked;
            let updated = item.clone();
            self.save(SHOPPING_KEY, &items)?;
            updated
        };

        self.notify(StoreEvent::ShoppingUpdated);
        Ok(Some(updated))
    }

    pub fn delete_shopping(&self, id: i64) -> Result<bool, StoreError> {
        {
            let _guard = self.lock()?;
            let mut items: Vec<ShoppingItem> = self.load(SHOPPING_KEY)?;
            let before = items.len();
            items.retain(|item| item.id != id);
            if items.len() == before {
                return Ok(false);
            }
            self.save(SHOPPING_KEY, &items)?;
        }

        self.notify(StoreEvent::ShoppingUpdated);
        Ok(true)
    }

    /// Remove every checked item. Returns how many were removed.
    pub fn clear_checked(&self) -> Result<usize, StoreError> {
        let removed = {
            let _guard = self.lock()?;
            let mut items: Vec<ShoppingItem> = self.load(SHOPPING_KEY)?;
            let before = items.len();
            items.retain(|item| !item.checked);
            let removed = before - items.len();
            if removed > 0 {
                self.save(SHOPPING_KEY, &items)?;
            }
            removed
        };

        if removed > 0 {
            self.notify(StoreEvent::ShoppingUpdated);
        }
        Ok(removed)
    }

    /// Turn every checked shopping item into an inventory item, then drop the
    /// checked items from the list.
    ///
    /// The inventory is written first. If removing the items from the
    /// shopping list then fails, the new inventory items stay and the error is
    /// returned; nothing is rolled back.
    pub fn move_checked_to_inventory(&self) -> Result<Vec<InventoryItem>, StoreError> {
        let today = self.today();
        let shelf_life = self.shelf_life_days();

        let (moved, result) = {
            let mut last_id = self.lock()?;
            let shopping: Vec<ShoppingItem> = self.load(SHOPPING_KEY)?;
            let (checked, remaining): (Vec<_>, Vec<_>) =
                shopping.into_iter().partition(|item| item.checked);
            if checked.is_empty() {
                return Ok(Vec::new());
            }

            let mut inventory: Vec<InventoryItem> = self.load(INVENTORY_KEY)?;
            let mut max_id = inventory.iter().map(|i| i.id).max().unwrap_or(0);
            let added_at = self.clock().now();
            let moved: Vec<InventoryItem> = checked
                .iter()
                .map(|item| {
                    let id = self.next_id(&mut last_id, max_id);
                    max_id = id;
                    InventoryDraft::guessed(&item.name, &item.quantity, today, shelf_life)
                        .into_item(id, added_at)
                })
                .collect();

            inventory.extend(moved.iter().cloned());
            self.save(INVENTORY_KEY, &inventory)?;
            (moved, self.save(SHOPPING_KEY, &remaining))
        };

        self.notify(StoreEvent::InventoryUpdated);
        if let Err(e) = result {
            tracing::error!(
                moved = moved.len(),
                "Moved items to inventory but failed to remove them from the shopping list: {}",
                e
            );
            return Err(e);
        }

        tracing::info!(count = moved.len(), "Moved checked shopping items to inventory");
        self.notify(StoreEvent::ShoppingUpdated);
        Ok(moved)
    }

    /// Put a recipe's missing ingredients on the shopping list, skipping any
    /// name already there (ignoring case). `ingredients` are `(name, amount)`.
    pub fn add_missing_from_recipe(
        &self,
        recipe_name: &str,
        ingredients: &[(String, String)],
    ) -> Result<Vec<ShoppingItem>, StoreError> {
        let added = {
            let mut last_id = self.lock()?;
            let mut items: Vec<ShoppingItem> = self.load(SHOPPING_KEY)?;
            let mut listed: HashSet<String> =
                items.iter().map(|i| i.name.trim().to_lowercase()).collect();

            let drafts: Vec<ShoppingDraft> = ingredients
                .iter()
                .filter(|(name, _)| {
                    let key = name.trim().to_lowercase();
                    !key.is_empty() && listed.insert(key)
                })
                .map(|(name, amount)| ShoppingDraft {
                    name: name.clone(),
                    quantity: Some(amount.clone()),
                    category: Some(RECIPE_SHOPPING_CATEGORY.to_string()),
                    from_recipe: Some(recipe_name.to_string()),
                })
                .collect();

            if drafts.is_empty() {
                return Ok(Vec::new());
            }

            let added = self.append_shopping(&mut last_id, &mut items, drafts);
            self.save(SHOPPING_KEY, &items)?;
            added
        };

        tracing::info!(recipe = recipe_name, count = added.len(), "Added missing ingredients to shopping list");
        self.notify(StoreEvent::ShoppingUpdated);
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::super::MemoryStore;
    use super::*;
    use crate::categorize::Category;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;
    use std::sync::{Arc, Mutex};

    fn kitchen() -> Kitchen {
        let clock = FixedClock::on(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        Kitchen::new(MemoryStore::new(), Arc::new(clock))
    }

    #[test]
    fn test_add_defaults() {
        let kitchen = kitchen();
        let item = kitchen.add_shopping(ShoppingDraft::named(" Eggs ")).unwrap();
        assert_eq!(item.name, "Eggs");
        assert_eq!(item.quantity, "1");
        assert_eq!(item.category, "Other");
        assert!(!item.checked);
        assert!(item.from_recipe.is_none());
    }

    #[test]
    fn test_blank_name_rejected() {
        let kitchen = kitchen();
        assert!(matches!(
            kitchen.add_shopping(ShoppingDraft::named("  ")),
            Err(StoreError::Invalid(ValidationError::BlankName))
        ));
    }

    #[test]
    fn test_toggle_and_clear_checked() {
        let kitchen = kitchen();
        let eggs = kitchen.add_shopping(ShoppingDraft::named("Eggs")).unwrap();
        kitchen.add_shopping(ShoppingDraft::named("Flour")).unwrap();

        assert!(kitchen.toggle_shopping(eggs.id).unwrap().unwrap().checked);
        assert!(kitchen.toggle_shopping(999).unwrap().is_none());

        assert_eq!(kitchen.clear_checked().unwrap(), 1);
        assert_eq!(kitchen.clear_checked().unwrap(), 0);
        let names: Vec<String> = kitchen
            .list_shopping()
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["Flour"]);
    }

    #[test]
    fn test_move_checked_to_inventory() {
        let kitchen = kitchen();
        let chicken = kitchen
            .add_shopping(ShoppingDraft {
                quantity: Some("2 lbs".to_string()),
                ..ShoppingDraft::named("Chicken Thighs")
            })
            .unwrap();
        let flour = kitchen.add_shopping(ShoppingDraft::named("Flour")).unwrap();
        kitchen
            .update_shopping(
                chicken.id,
                ShoppingPatch {
                    checked: Some(true),
                    ..ShoppingPatch::default()
                },
            )
            .unwrap();

        let moved = kitchen.move_checked_to_inventory().unwrap();
        assert_eq!(moved.len(), 1);
        assert_eq!(moved[0].name, "Chicken Thighs");
        assert_eq!(moved[0].category, Category::Meat);
        assert_eq!(moved[0].icon, "🍗");
        assert_eq!(moved[0].quantity, 1.0);
        assert_eq!(moved[0].unit, "2 lbs");
        assert_eq!(moved[0].expiry_date, NaiveDate::from_ymd_opt(2024, 6, 17));

        assert_eq!(kitchen.list_inventory().unwrap(), moved);
        assert_eq!(kitchen.list_shopping().unwrap(), vec![flour]);

        // nothing checked any more
        assert!(kitchen.move_checked_to_inventory().unwrap().is_empty());
    }

    #[test]
    fn test_add_missing_from_recipe_skips_listed_names() {
        let kitchen = kitchen();
        kitchen.add_shopping(ShoppingDraft::named("sugar")).unwrap();

        let missing = vec![
            ("Sugar".to_string(), "1 cup".to_string()),
            ("Vanilla".to_string(), "1 tsp".to_string()),
            ("vanilla".to_string(), "2 tsp".to_string()),
        ];
        let added = kitchen
            .add_missing_from_recipe("Vanilla Cake", &missing)
            .unwrap();
        assert_eq!(added.len(), 1);
        assert_eq!(added[0].name, "Vanilla");
        assert_eq!(added[0].quantity, "1 tsp");
        assert_eq!(added[0].category, "Groceries");
        assert_eq!(added[0].from_recipe.as_deref(), Some("Vanilla Cake"));

        // second call adds nothing
        assert!(kitchen
            .add_missing_from_recipe("Vanilla Cake", &missing)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_mutations_publish_events() {
        let kitchen = kitchen();
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        kitchen
            .events()
            .subscribe(move |event| sink.lock().unwrap().push(event));

        let item = kitchen.add_shopping(ShoppingDraft::named("Milk")).unwrap();
        kitchen.toggle_shopping(item.id).unwrap();
        kitchen.move_checked_to_inventory().unwrap();

        assert_eq!(
            *events.lock().unwrap(),
            vec![
                StoreEvent::ShoppingUpdated,
                StoreEvent::ShoppingUpdated,
                StoreEvent::InventoryUpdated,
                StoreEvent::ShoppingUpdated,
            ]
        );
    }
}
