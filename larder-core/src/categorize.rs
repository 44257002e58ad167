//! Grocery category and icon guessing from an item name.
//!
//! Rules are an ordered table of keyword sets. The lower-cased name is checked
//! against each rule in turn and the first rule with a matching keyword wins,
//! so the table order decides every overlap ("chicken noodle soup" is meat
//! because the chicken rule precedes the noodle rule, "ice cream" is dairy
//! because `cream` is checked before `ice cream`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::error::ValidationError;

/// Grocery category for an inventory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Produce,
    Dairy,
    Meat,
    Pantry,
    Frozen,
    Bakery,
    Beverages,
    /// Only ever chosen explicitly; no guessing rule produces it.
    Snacks,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Produce,
        Category::Dairy,
        Category::Meat,
        Category::Pantry,
        Category::Frozen,
        Category::Bakery,
        Category::Beverages,
        Category::Snacks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Produce => "produce",
            Category::Dairy => "dairy",
            Category::Meat => "meat",
            Category::Pantry => "pantry",
            Category::Frozen => "frozen",
            Category::Bakery => "bakery",
            Category::Beverages => "beverages",
            Category::Snacks => "snacks",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Produce => "Produce",
            Category::Dairy => "Dairy",
            Category::Meat => "Meat & Seafood",
            Category::Pantry => "Pantry",
            Category::Frozen => "Frozen",
            Category::Bakery => "Bakery",
            Category::Beverages => "Beverages",
            Category::Snacks => "Snacks",
        }
    }

    /// Icon shown for the category itself (used when a user picks a category).
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Produce => "🥬",
            Category::Dairy => "🥛",
            Category::Meat => "🥩",
            Category::Pantry => "🥫",
            Category::Frozen => "🧊",
            Category::Bakery => "🍞",
            Category::Beverages => "🥤",
            Category::Snacks => "🍿",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted || c.label().to_lowercase() == wanted)
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}

/// Guessed category and icon for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemDetails {
    pub category: Category,
    pub icon: &'static str,
}

struct Rule {
    keywords: &'static [&'static str],
    category: Category,
    icon: &'static str,
}

const fn rule(keywords: &'static [&'static str], category: Category, icon: &'static str) -> Rule {
    Rule {
        keywords,
        category,
        icon,
    }
}

/// Order is load-bearing; do not sort.
const RULES: &[Rule] = &[
    rule(&["milk", "cream"], Category::Dairy, "🥛"),
    rule(&["cheese"], Category::Dairy, "🧀"),
    rule(&["yogurt"], Category::Dairy, "🥛"),
    rule(&["butter"], Category::Dairy, "🧈"),
    rule(&["egg"], Category::Dairy, "🥚"),
    rule(&["chicken"], Category::Meat, "🍗"),
    rule(&["beef", "steak"], Category::Meat, "🥩"),
    rule(&["pork", "bacon"], Category::Meat, "🥓"),
    rule(&["fish", "salmon", "shrimp"], Category::Meat, "🐟"),
    rule(
        &["lettuce", "spinach", "salad", "kale"],
        Category::Produce,
        "🥬",
    ),
    rule(&["tomato"], Category::Produce, "🍅"),
    rule(&["onion"], Category::Produce, "🧅"),
    rule(&["garlic"], Category::Produce, "🧄"),
    rule(&["carrot"], Category::Produce, "🥕"),
    rule(&["apple"], Category::Produce, "🍎"),
    rule(&["banana"], Category::Produce, "🍌"),
    rule(&["orange"], Category::Produce, "🍊"),
    rule(&["juice"], Category::Beverages, "🧃"),
    rule(&["bread", "bagel", "muffin"], Category::Bakery, "🍞"),
    rule(&["rice"], Category::Pantry, "🍚"),
    rule(&["pasta", "noodle"], Category::Pantry, "🍝"),
    rule(&["frozen", "ice cream"], Category::Frozen, "🧊"),
];

pub const DEFAULT_DETAILS: ItemDetails = ItemDetails {
    category: Category::Pantry,
    icon: "📦",
};

/// Guess the category and icon for an item name.
///
/// Matching is case-insensitive substring containment. Names that match no
/// rule (including blank names) get the pantry box.
pub fn classify(name: &str) -> ItemDetails {
    let lower = name.to_lowercase();

    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| lower.contains(kw)))
        .map(|rule| ItemDetails {
            category: rule.category,
            icon: rule.icon,
        })
        .unwrap_or(DEFAULT_DETAILS)
}

/// Category and icon for a new item, honoring an explicit user choice.
///
/// An explicit category gets that category's own icon; otherwise both are
/// guessed from the name.
pub fn resolve_details(name: &str, explicit: Option<Category>) -> ItemDetails {
    match explicit {
        Some(category) => ItemDetails {
            category,
            icon: category.icon(),
        },
        None => classify(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dairy() {
        assert_eq!(
            classify("Whole Milk"),
            ItemDetails {
                category: Category::Dairy,
                icon: "🥛"
            }
        );
        assert_eq!(classify("Sharp Cheddar Cheese").icon, "🧀");
        assert_eq!(classify("Greek Yogurt").category, Category::Dairy);
        assert_eq!(classify("Unsalted Butter").icon, "🧈");
        assert_eq!(classify("Organic Eggs").icon, "🥚");
    }

    #[test]
    fn test_unknown_falls_back_to_pantry() {
        assert_eq!(classify("Xyzzy"), DEFAULT_DETAILS);
        assert_eq!(classify(""), DEFAULT_DETAILS);
        assert_eq!(classify("   "), DEFAULT_DETAILS);
    }

    #[test]
    fn test_first_rule_wins() {
        // chicken (meat) is declared before noodle (pantry)
        assert_eq!(classify("Chicken Noodle Soup").category, Category::Meat);
        // butter rule precedes the generic produce rules
        assert_eq!(classify("Almond Butter").category, Category::Dairy);
        // cream is checked long before the frozen rule
        assert_eq!(classify("Ice Cream").category, Category::Dairy);
        // "eggplant" contains "egg"
        assert_eq!(classify("Eggplant").category, Category::Dairy);
    }

    #[test]
    fn test_produce_and_others() {
        assert_eq!(classify("Baby Spinach").icon, "🥬");
        assert_eq!(classify("Roma Tomatoes").icon, "🍅");
        assert_eq!(classify("Orange Juice").category, Category::Produce);
        assert_eq!(classify("Apple Juice").icon, "🍎");
        assert_eq!(classify("Grape Juice").category, Category::Beverages);
        assert_eq!(classify("Sourdough Bread").category, Category::Bakery);
        assert_eq!(classify("Jasmine Rice").icon, "🍚");
        assert_eq!(classify("Frozen Vegetables").category, Category::Frozen);
        assert_eq!(classify("Ground Beef").icon, "🥩");
        assert_eq!(classify("Smoked Salmon").icon, "🐟");
    }

    #[test]
    fn test_classify_is_stable() {
        assert_eq!(classify("Thick Cut Bacon"), classify("Thick Cut Bacon"));
    }

    #[test]
    fn test_resolve_details_prefers_explicit_category() {
        let details = resolve_details("Milk", Some(Category::Beverages));
        assert_eq!(details.category, Category::Beverages);
        assert_eq!(details.icon, "🥤");
        assert_eq!(resolve_details("Milk", None), classify("Milk"));
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("Dairy".parse::<Category>(), Ok(Category::Dairy));
        assert_eq!("meat & seafood".parse::<Category>(), Ok(Category::Meat));
        assert!("Groceries".parse::<Category>().is_err());
    }
}
