//! Prompt templates for grocery detection.

use super::ScanKind;

pub fn receipt_prompt() -> &'static str {
    r#"Analyze this receipt image and extract all food/grocery items. For each item, provide:
- name: the item name (clean, no prices)
- quantity: estimated quantity or "1" if unclear
Return ONLY a JSON array of objects with "name" and "quantity" fields. Example:
[{"name": "Milk", "quantity": "1 gallon"}, {"name": "Eggs", "quantity": "1 dozen"}]
If you cannot read the receipt clearly, return what you can identify.
Return ONLY the JSON array, no other text."#
}

pub fn fridge_prompt() -> &'static str {
    r#"Analyze this fridge/food image and identify all visible food items. For each item, provide:
- name: the food item name
- quantity: estimated quantity (e.g., "2 bottles", "1 carton", "~5 eggs")
- confidence: your confidence level 1-100
Return ONLY a JSON array of objects. Example:
[{"name": "Milk", "quantity": "1 gallon", "confidence": 95}]
Be thorough - identify everything you can see including items partially visible.
Return ONLY the JSON array, no other text."#
}

pub fn prompt_for(kind: ScanKind) -> &'static str {
    match kind {
        ScanKind::Receipt => receipt_prompt(),
        ScanKind::Fridge => fridge_prompt(),
    }
}
