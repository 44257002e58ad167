use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::categorize::{resolve_details, Category};
use crate::error::ValidationError;
use crate::expiry::{parse_expiry, ExpiryInfo, ExpiryStatus};

/// Shelf life assumed for items added without an explicit expiry.
pub const DEFAULT_SHELF_LIFE_DAYS: u64 = 7;

pub const DEFAULT_UNIT: &str = "count";

/// Category label for shopping items added by hand.
pub const MANUAL_SHOPPING_CATEGORY: &str = "Other";

/// Category label for shopping items added from a recipe.
pub const RECIPE_SHOPPING_CATEGORY: &str = "Groceries";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: i64,
    pub name: String,
    pub category: Category,
    pub quantity: f64,
    pub unit: String,
    /// Calendar date the item goes off, if known.
    pub expiry_date: Option<NaiveDate>,
    pub icon: String,
    pub added_at: DateTime<Utc>,
}

impl InventoryItem {
    pub fn status(&self, today: NaiveDate) -> ExpiryStatus {
        ExpiryStatus::for_date(self.expiry_date, today)
    }

    pub fn expiry(&self, today: NaiveDate) -> ExpiryInfo {
        ExpiryInfo::compute(self.expiry_date, today)
    }
}

/// A validated inventory item waiting for an id and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryDraft {
    pub name: String,
    pub category: Category,
    pub icon: String,
    pub quantity: f64,
    pub unit: String,
    pub expiry_date: Option<NaiveDate>,
}

impl InventoryDraft {
    /// Draft with guessed category and icon, quantity 1 and the default shelf
    /// life. This is how bulk sources (scans, statements, shopping) add items.
    pub fn guessed(name: &str, unit: &str, today: NaiveDate, shelf_life_days: u64) -> Self {
        let details = resolve_details(name, None);
        Self {
            name: name.trim().to_string(),
            category: details.category,
            icon: details.icon.to_string(),
            quantity: 1.0,
            unit: unit.to_string(),
            expiry_date: today.checked_add_days(Days::new(shelf_life_days)),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::BlankName);
        }
        validate_quantity(self.quantity)
    }

    pub fn into_item(self, id: i64, added_at: DateTime<Utc>) -> InventoryItem {
        InventoryItem {
            id,
            name: self.name,
            category: self.category,
            quantity: self.quantity,
            unit: self.unit,
            expiry_date: self.expiry_date,
            icon: self.icon,
            added_at,
        }
    }
}

fn validate_quantity(quantity: f64) -> Result<(), ValidationError> {
    if quantity.is_finite() && quantity > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidQuantity(quantity))
    }
}

/// Loosely-typed new item as entered by a user.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewInventoryItem {
    pub name: String,
    pub category: Option<Category>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    /// `YYYY-MM-DD`, an RFC 3339 timestamp, or a relative "N days".
    pub expiry: Option<String>,
    pub icon: Option<String>,
}

impl NewInventoryItem {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Fill in defaults and guesses. An expiry that is present but unreadable
    /// is rejected rather than silently dropped.
    pub fn into_draft(
        self,
        today: NaiveDate,
        shelf_life_days: u64,
    ) -> Result<InventoryDraft, ValidationError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::BlankName);
        }

        let quantity = self.quantity.unwrap_or(1.0);
        validate_quantity(quantity)?;

        let expiry_date = match self.expiry.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(
                parse_expiry(raw, today)
                    .ok_or_else(|| ValidationError::InvalidExpiry(raw.to_string()))?,
            ),
            _ => today.checked_add_days(Days::new(shelf_life_days)),
        };

        let details = resolve_details(&name, self.category);
        let unit = self
            .unit
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_UNIT.to_string());

        Ok(InventoryDraft {
            icon: self
                .icon
                .filter(|icon| !icon.trim().is_empty())
                .unwrap_or_else(|| details.icon.to_string()),
            name,
            category: details.category,
            quantity,
            unit,
            expiry_date,
        })
    }
}

/// Partial update for an inventory item. `None` fields are left alone.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryPatch {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub expiry_date: Option<NaiveDate>,
    pub icon: Option<String>,
}

impl InventoryPatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(ValidationError::BlankName);
            }
        }
        if let Some(quantity) = self.quantity {
            validate_quantity(quantity)?;
        }
        Ok(())
    }

    pub fn apply(self, item: &mut InventoryItem) {
        if let Some(name) = self.name {
            item.name = name.trim().to_string();
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity;
        }
        if let Some(unit) = self.unit {
            item.unit = unit;
        }
        if let Some(expiry_date) = self.expiry_date {
            item.expiry_date = Some(expiry_date);
        }
        if let Some(icon) = self.icon {
            item.icon = icon;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub id: i64,
    pub name: String,
    /// Free text, e.g. "2 lbs".
    pub quantity: String,
    pub checked: bool,
    pub category: String,
    /// Display label of the recipe this item was added for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_recipe: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingDraft {
    pub name: String,
    pub quantity: Option<String>,
    pub category: Option<String>,
    pub from_recipe: Option<String>,
}

impl ShoppingDraft {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingPatch {
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub checked: Option<bool>,
    pub category: Option<String>,
}

impl ShoppingPatch {
    pub fn apply(self, item: &mut ShoppingItem) {
        if let Some(name) = self.name.filter(|n| !n.trim().is_empty()) {
            item.name = name.trim().to_string();
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity;
        }
        if let Some(checked) = self.checked {
            item.checked = checked;
        }
        if let Some(category) = self.category {
            item.category = category;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum VideoPlatform {
    Youtube,
    Tiktok,
    Instagram,
    Other,
}

impl VideoPlatform {
    /// Guess the platform from a video URL's host.
    pub fn from_url(raw: &str) -> Self {
        let host = match url::Url::parse(raw.trim()) {
            Ok(parsed) => parsed.host_str().unwrap_or_default().to_lowercase(),
            Err(_) => return VideoPlatform::Other,
        };
        let is = |domain: &str| host == domain || host.ends_with(&format!(".{domain}"));

        if is("youtube.com") || is("youtu.be") {
            VideoPlatform::Youtube
        } else if is("tiktok.com") {
            VideoPlatform::Tiktok
        } else if is("instagram.com") {
            VideoPlatform::Instagram
        } else {
            VideoPlatform::Other
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomVideo {
    pub id: i64,
    pub recipe_id: i64,
    pub url: String,
    pub title: String,
    pub platform: VideoPlatform,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomVideo {
    pub url: String,
    pub title: Option<String>,
    pub platform: Option<VideoPlatform>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    #[test]
    fn test_into_draft_defaults() {
        let draft = NewInventoryItem::named("  Greek Yogurt ")
            .into_draft(today(), DEFAULT_SHELF_LIFE_DAYS)
            .unwrap();
        assert_eq!(draft.name, "Greek Yogurt");
        assert_eq!(draft.category, Category::Dairy);
        assert_eq!(draft.icon, "🥛");
        assert_eq!(draft.quantity, 1.0);
        assert_eq!(draft.unit, "count");
        assert_eq!(draft.expiry_date, NaiveDate::from_ymd_opt(2024, 6, 17));
    }

    #[test]
    fn test_into_draft_explicit_fields() {
        let draft = NewInventoryItem {
            name: "Popcorn".to_string(),
            category: Some(Category::Snacks),
            quantity: Some(2.5),
            unit: Some("bags".to_string()),
            expiry: Some("2024-12-01".to_string()),
            icon: None,
        }
        .into_draft(today(), DEFAULT_SHELF_LIFE_DAYS)
        .unwrap();
        assert_eq!(draft.category, Category::Snacks);
        assert_eq!(draft.icon, "🍿");
        assert_eq!(draft.unit, "bags");
        assert_eq!(draft.expiry_date, NaiveDate::from_ymd_opt(2024, 12, 1));
    }

    #[test]
    fn test_into_draft_rejects_bad_input() {
        let blank = NewInventoryItem::named("   ").into_draft(today(), 7);
        assert_eq!(blank.unwrap_err(), ValidationError::BlankName);

        let bad_expiry = NewInventoryItem {
            expiry: Some("next tuesday".to_string()),
            ..NewInventoryItem::named("Milk")
        }
        .into_draft(today(), 7);
        assert_eq!(
            bad_expiry.unwrap_err(),
            ValidationError::InvalidExpiry("next tuesday".to_string())
        );

        let negative = NewInventoryItem {
            quantity: Some(-1.0),
            ..NewInventoryItem::named("Milk")
        }
        .into_draft(today(), 7);
        assert!(matches!(
            negative,
            Err(ValidationError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn test_guessed_draft() {
        let draft = InventoryDraft::guessed("Orange Juice", "64 oz", today(), 7);
        assert_eq!(draft.category, Category::Produce);
        assert_eq!(draft.icon, "🍊");
        assert_eq!(draft.unit, "64 oz");
        assert_eq!(draft.quantity, 1.0);
    }

    #[test]
    fn test_inventory_item_wire_format() {
        let item = InventoryItem {
            id: 1,
            name: "Milk".to_string(),
            category: Category::Dairy,
            quantity: 1.0,
            unit: "gallon".to_string(),
            expiry_date: NaiveDate::from_ymd_opt(2024, 6, 12),
            icon: "🥛".to_string(),
            added_at: DateTime::parse_from_rfc3339("2024-06-10T08:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["expiryDate"], "2024-06-12");
        assert_eq!(json["category"], "dairy");
        assert!(json.get("addedAt").is_some());
        assert_eq!(item.status(today()), ExpiryStatus::Expiring);
    }

    #[test]
    fn test_patch_apply() {
        let mut item = ShoppingItem {
            id: 1,
            name: "Eggs".to_string(),
            quantity: "1".to_string(),
            checked: false,
            category: "Other".to_string(),
            from_recipe: None,
        };
        ShoppingPatch {
            checked: Some(true),
            name: Some("  ".to_string()),
            ..ShoppingPatch::default()
        }
        .apply(&mut item);
        assert!(item.checked);
        assert_eq!(item.name, "Eggs");
    }

    #[test]
    fn test_video_platform_from_url() {
        assert_eq!(
            VideoPlatform::from_url("https://www.youtube.com/watch?v=abc"),
            VideoPlatform::Youtube
        );
        assert_eq!(
            VideoPlatform::from_url("https://youtu.be/abc"),
            VideoPlatform::Youtube
        );
        assert_eq!(
            VideoPlatform::from_url("https://www.tiktok.com/@chef/video/1"),
            VideoPlatform::Tiktok
        );
        assert_eq!(
            VideoPlatform::from_url("https://instagram.com/reel/xyz"),
            VideoPlatform::Instagram
        );
        assert_eq!(
            VideoPlatform::from_url("https://notyoutube.com/x"),
            VideoPlatform::Other
        );
        assert_eq!(VideoPlatform::from_url("not a url"), VideoPlatform::Other);
    }
}
