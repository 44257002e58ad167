//! Recipe ingredient matching against what is on hand.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use utoipa::ToSchema;

use crate::models::ShoppingItem;

/// How a recipe ingredient is compared to an inventory name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Case-insensitive, whitespace-trimmed equality.
    #[default]
    Exact,
    /// Case-insensitive containment in either direction, so "chicken" and
    /// "chicken breast" match each other.
    Substring,
}

impl MatchMode {
    fn matches(&self, ingredient: &str, on_hand: &str) -> bool {
        match self {
            MatchMode::Exact => ingredient == on_hand,
            MatchMode::Substring => {
                !ingredient.is_empty()
                    && !on_hand.is_empty()
                    && (ingredient.contains(on_hand) || on_hand.contains(ingredient))
            }
        }
    }
}

/// How close the user is to being able to cook a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Readiness {
    /// Nothing missing.
    CanMake,
    /// One or two ingredients short.
    Almost,
    NeedsMore,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeMatch {
    pub matched_ingredients: Vec<String>,
    pub missing_ingredients: Vec<String>,
    pub match_percentage: u8,
}

impl RecipeMatch {
    /// Build a match from an already split pair, e.g. the used/missed lists a
    /// recipe search API returns.
    pub fn from_split(matched: Vec<String>, missing: Vec<String>) -> Self {
        let match_percentage = percentage(matched.len(), missing.len());
        Self {
            matched_ingredients: matched,
            missing_ingredients: missing,
            match_percentage,
        }
    }

    pub fn readiness(&self) -> Readiness {
        match self.missing_ingredients.len() {
            0 => Readiness::CanMake,
            1 | 2 => Readiness::Almost,
            _ => Readiness::NeedsMore,
        }
    }
}

/// `round(100 * matched / (matched + missing))`, halves rounded up. Zero when
/// there is nothing to compare.
pub fn percentage(matched: usize, missing: usize) -> u8 {
    let total = matched + missing;
    if total == 0 {
        return 0;
    }
    let rounded = (matched * 200 + total) / (total * 2);
    // matched <= total, so this never exceeds 100
    rounded.min(100) as u8
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Split a recipe's ingredients into those on hand and those missing.
///
/// Recipe ingredients that repeat (ignoring case) are counted once, keeping
/// the spelling and position of their first appearance.
pub fn score<R, I>(recipe_ingredients: R, inventory: I, mode: MatchMode) -> RecipeMatch
where
    R: IntoIterator,
    R::Item: AsRef<str>,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let on_hand: Vec<String> = inventory
        .into_iter()
        .map(|name| normalize(name.as_ref()))
        .filter(|name| !name.is_empty())
        .collect();

    let mut seen = HashSet::new();
    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for ingredient in recipe_ingredients {
        let original = ingredient.as_ref().trim();
        let key = normalize(original);
        if key.is_empty() || !seen.insert(key.clone()) {
            continue;
        }

        if on_hand.iter().any(|name| mode.matches(&key, name)) {
            matched.push(original.to_string());
        } else {
            missing.push(original.to_string());
        }
    }

    RecipeMatch::from_split(matched, missing)
}

/// Missing ingredients that are not already on the shopping list.
pub fn missing_not_on_list<'a>(
    recipe_match: &'a RecipeMatch,
    shopping: &[ShoppingItem],
) -> Vec<&'a str> {
    let listed: HashSet<String> = shopping.iter().map(|item| normalize(&item.name)).collect();
    recipe_match
        .missing_ingredients
        .iter()
        .filter(|name| !listed.contains(&normalize(name)))
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_split_percentage() {
        let m = RecipeMatch::from_split(strings(&["eggs", "milk"]), strings(&["sugar"]));
        assert_eq!(m.match_percentage, 67);
        assert_eq!(m.readiness(), Readiness::Almost);
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(0, 4), 0);
        assert_eq!(percentage(3, 0), 100);
        assert_eq!(percentage(1, 2), 33);
        assert_eq!(percentage(1, 1), 50);
        // 12.5 rounds up
        assert_eq!(percentage(1, 7), 13);
        // 62.5 rounds up
        assert_eq!(percentage(5, 3), 63);
    }

    #[test]
    fn test_score_exact() {
        let m = score(
            ["Eggs", "Milk", "Sugar", "Flour"],
            ["milk", " eggs ", "butter"],
            MatchMode::Exact,
        );
        assert_eq!(m.matched_ingredients, strings(&["Eggs", "Milk"]));
        assert_eq!(m.missing_ingredients, strings(&["Sugar", "Flour"]));
        assert_eq!(m.match_percentage, 50);
    }

    #[test]
    fn test_exact_does_not_match_partial_names() {
        let m = score(["chicken"], ["Chicken Breast"], MatchMode::Exact);
        assert!(m.matched_ingredients.is_empty());
    }

    #[test]
    fn test_score_substring_both_directions() {
        let m = score(
            ["chicken", "red onion", "garlic"],
            ["Chicken Breast", "Onion"],
            MatchMode::Substring,
        );
        assert_eq!(m.matched_ingredients, strings(&["chicken", "red onion"]));
        assert_eq!(m.missing_ingredients, strings(&["garlic"]));
    }

    #[test]
    fn test_duplicates_counted_once() {
        let m = score(["Salt", "salt", "SALT ", "Pepper"], ["salt"], MatchMode::Exact);
        assert_eq!(m.matched_ingredients, strings(&["Salt"]));
        assert_eq!(m.missing_ingredients, strings(&["Pepper"]));
        assert_eq!(m.match_percentage, 50);
    }

    #[test]
    fn test_empty_inputs() {
        let empty: [&str; 0] = [];
        let m = score(empty, empty, MatchMode::Substring);
        assert_eq!(m, RecipeMatch::default());
        assert_eq!(m.readiness(), Readiness::CanMake);

        // blank inventory names never match everything via substring
        let m = score(["rice"], ["", "  "], MatchMode::Substring);
        assert_eq!(m.missing_ingredients, strings(&["rice"]));
    }

    #[test]
    fn test_readiness() {
        let needs = RecipeMatch::from_split(vec![], strings(&["a", "b", "c"]));
        assert_eq!(needs.readiness(), Readiness::NeedsMore);
        let can = RecipeMatch::from_split(strings(&["a"]), vec![]);
        assert_eq!(can.readiness(), Readiness::CanMake);
    }

    #[test]
    fn test_missing_not_on_list() {
        let m = RecipeMatch::from_split(vec![], strings(&["Sugar", "Vanilla", "Flour"]));
        let shopping = vec![ShoppingItem {
            id: 1,
            name: "sugar".to_string(),
            quantity: "1 bag".to_string(),
            checked: false,
            category: "Groceries".to_string(),
            from_recipe: None,
        }];
        assert_eq!(missing_not_on_list(&m, &shopping), vec!["Vanilla", "Flour"]);
    }
}
