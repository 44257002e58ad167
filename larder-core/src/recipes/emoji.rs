//! Display emoji for a recipe, picked from its title and dish types.

/// First matching rule wins; order matters ("chicken soup" is a soup bowl,
/// "beef stew" is a steak).
pub fn recipe_emoji(title: &str, dish_types: &[String]) -> &'static str {
    let title = title.to_lowercase();
    let dish_types: Vec<String> = dish_types.iter().map(|d| d.to_lowercase()).collect();
    let has = |words: &[&str]| words.iter().any(|w| title.contains(w));
    let is_dish = |kind: &str| dish_types.iter().any(|d| d == kind);

    if has(&["chicken"]) || is_dish("main course") {
        if has(&["soup"]) {
            return "🍲";
        }
        if has(&["salad"]) {
            return "🥗";
        }
        return "🍗";
    }

    const TITLE_RULES: &[(&[&str], &str)] = &[
        (&["beef", "steak"], "🥩"),
        (&["fish", "salmon", "seafood"], "🐟"),
        (&["pasta", "spaghetti"], "🍝"),
        (&["pizza"], "🍕"),
        (&["salad"], "🥗"),
        (&["soup", "stew"], "🍲"),
        (&["rice", "risotto"], "🍚"),
        (&["egg", "omelet", "scramble"], "🍳"),
        (&["sandwich", "burger"], "🍔"),
        (&["taco", "mexican"], "🌮"),
    ];
    if let Some((_, emoji)) = TITLE_RULES.iter().find(|(words, _)| has(*words)) {
        return *emoji;
    }

    if has(&["cake", "dessert"]) || is_dish("dessert") {
        return "🍰";
    }
    if has(&["cookie", "brownie"]) {
        return "🍪";
    }
    if has(&["smoothie", "shake"]) {
        return "🥤";
    }
    if is_dish("breakfast") {
        return "🍳";
    }
    if is_dish("appetizer") || is_dish("snack") {
        return "🥪";
    }
    if is_dish("side dish") {
        return "🥗";
    }

    "🍽️"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_chicken_and_main_course() {
        assert_eq!(recipe_emoji("Chicken Tikka", &[]), "🍗");
        assert_eq!(recipe_emoji("Chicken Noodle Soup", &[]), "🍲");
        assert_eq!(recipe_emoji("Chicken Caesar Salad", &[]), "🥗");
        assert_eq!(recipe_emoji("Beef Stew", &types(&["main course"])), "🍗");
    }

    #[test]
    fn test_title_rules_in_order() {
        assert_eq!(recipe_emoji("Beef Stew", &[]), "🥩");
        assert_eq!(recipe_emoji("Salmon Pasta", &[]), "🐟");
        assert_eq!(recipe_emoji("Pizza Margherita", &[]), "🍕");
        assert_eq!(recipe_emoji("Mushroom Risotto", &[]), "🍚");
        assert_eq!(recipe_emoji("Veggie Omelet", &[]), "🍳");
        assert_eq!(recipe_emoji("Fish Tacos", &[]), "🐟");
        assert_eq!(recipe_emoji("Street Tacos", &[]), "🌮");
    }

    #[test]
    fn test_dish_type_fallbacks() {
        assert_eq!(recipe_emoji("Tiramisu", &types(&["Dessert"])), "🍰");
        assert_eq!(recipe_emoji("Chocolate Chip Cookies", &[]), "🍪");
        assert_eq!(recipe_emoji("Overnight Oats", &types(&["breakfast"])), "🍳");
        assert_eq!(recipe_emoji("Hummus", &types(&["snack"])), "🥪");
        assert_eq!(recipe_emoji("Roasted Carrots", &types(&["side dish"])), "🥗");
        assert_eq!(recipe_emoji("Mystery Dish", &[]), "🍽️");
    }
}
