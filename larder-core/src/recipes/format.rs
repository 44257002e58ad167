//! Shape upstream recipe data for the app.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use utoipa::ToSchema;

use super::emoji::recipe_emoji;
use super::types::{IngredientHit, RecipeInformation, SearchHit};
use crate::matching::{score, MatchMode, RecipeMatch};

/// A find-by-ingredients result with its match against the query.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: i64,
    pub name: String,
    pub image: Option<String>,
    pub emoji: String,
    pub matched_ingredients: Vec<String>,
    pub missing_ingredients: Vec<String>,
    pub used_ingredient_count: u32,
    pub missed_ingredient_count: u32,
    pub match_percentage: u8,
}

impl From<IngredientHit> for RecipeSummary {
    fn from(hit: IngredientHit) -> Self {
        let matched: Vec<String> = hit.used_ingredients.into_iter().map(|i| i.name).collect();
        let missing: Vec<String> = hit.missed_ingredients.into_iter().map(|i| i.name).collect();
        let recipe_match = RecipeMatch::from_split(matched, missing);

        Self {
            emoji: recipe_emoji(&hit.title, &[]).to_string(),
            id: hit.id,
            name: hit.title,
            image: hit.image,
            used_ingredient_count: hit.used_ingredient_count,
            missed_ingredient_count: hit.missed_ingredient_count,
            match_percentage: recipe_match.match_percentage,
            matched_ingredients: recipe_match.matched_ingredients,
            missing_ingredients: recipe_match.missing_ingredients,
        }
    }
}

/// A free-text search result.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: i64,
    pub name: String,
    pub image: Option<String>,
    pub emoji: String,
    pub ready_in_minutes: Option<u32>,
    pub servings: Option<u32>,
    pub health_score: Option<f64>,
}

impl From<SearchHit> for SearchResult {
    fn from(hit: SearchHit) -> Self {
        Self {
            emoji: recipe_emoji(&hit.title, &hit.dish_types).to_string(),
            id: hit.id,
            name: hit.title,
            image: hit.image,
            ready_in_minutes: hit.ready_in_minutes,
            servings: hit.servings,
            health_score: hit.health_score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStep {
    pub number: u32,
    pub instruction: String,
    pub ingredients: Vec<String>,
    pub equipment: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredient {
    pub id: Option<i64>,
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub original: String,
}

impl RecipeIngredient {
    /// "2 cups", "1.5", or "" when there is no amount.
    pub fn amount_text(&self) -> String {
        if self.amount <= 0.0 {
            return self.unit.trim().to_string();
        }
        format!("{} {}", self.amount, self.unit.trim())
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    pub id: i64,
    pub name: String,
    pub image: Option<String>,
    pub emoji: String,
    pub servings: Option<u32>,
    pub ready_in_minutes: Option<u32>,
    pub health_score: Option<f64>,
    pub spoonacular_score: Option<f64>,
    pub summary: String,
    pub instructions: String,
    pub steps: Vec<RecipeStep>,
    pub ingredients: Vec<RecipeIngredient>,
    pub dish_types: Vec<String>,
    pub diets: Vec<String>,
    pub cuisines: Vec<String>,
    pub vegetarian: bool,
    pub vegan: bool,
    pub gluten_free: bool,
    pub dairy_free: bool,
    pub source_url: Option<String>,
    pub source_name: Option<String>,
}

impl From<RecipeInformation> for RecipeDetail {
    fn from(info: RecipeInformation) -> Self {
        let steps = info
            .analyzed_instructions
            .into_iter()
            .next()
            .map(|block| {
                block
                    .steps
                    .into_iter()
                    .map(|step| RecipeStep {
                        number: step.number,
                        instruction: step.step,
                        ingredients: step.ingredients.into_iter().map(|i| i.name).collect(),
                        equipment: step.equipment.into_iter().map(|e| e.name).collect(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            emoji: recipe_emoji(&info.title, &info.dish_types).to_string(),
            id: info.id,
            name: info.title,
            image: info.image,
            servings: info.servings,
            ready_in_minutes: info.ready_in_minutes,
            health_score: info.health_score,
            spoonacular_score: info.spoonacular_score,
            summary: strip_html(&info.summary),
            instructions: info.instructions.as_deref().map(strip_html).unwrap_or_default(),
            steps,
            ingredients: info
                .extended_ingredients
                .into_iter()
                .map(|i| RecipeIngredient {
                    id: i.id,
                    name: i.name,
                    amount: i.amount,
                    unit: i.unit,
                    original: i.original,
                })
                .collect(),
            dish_types: info.dish_types,
            diets: info.diets,
            cuisines: info.cuisines,
            vegetarian: info.vegetarian,
            vegan: info.vegan,
            gluten_free: info.gluten_free,
            dairy_free: info.dairy_free,
            source_url: info.source_url,
            source_name: info.source_name,
        }
    }
}

impl RecipeDetail {
    /// Compare this recipe's ingredients with what is on hand. Names must be
    /// equal ignoring case and surrounding whitespace.
    pub fn match_against<I>(&self, inventory: I) -> RecipeMatch
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        score(
            self.ingredients.iter().map(|i| i.name.as_str()),
            inventory,
            MatchMode::Exact,
        )
    }

    /// `(name, amount)` for each ingredient in `recipe_match`'s missing list.
    pub fn missing_with_amounts(&self, recipe_match: &RecipeMatch) -> Vec<(String, String)> {
        recipe_match
            .missing_ingredients
            .iter()
            .map(|name| {
                let amount = self
                    .ingredients
                    .iter()
                    .find(|i| i.name.trim().eq_ignore_ascii_case(name))
                    .map(RecipeIngredient::amount_text)
                    .unwrap_or_default();
                (name.clone(), amount)
            })
            .collect()
    }
}

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Invalid HTML tag regex"));

/// Drop anything that looks like an HTML tag, keeping the text between.
pub fn strip_html(html: &str) -> String {
    HTML_TAG.replace_all(html, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipes::types::{
        ExtendedIngredient, HitIngredient, InstructionBlock, InstructionStep, Named,
    };

    fn hit_ingredient(name: &str) -> HitIngredient {
        HitIngredient {
            name: name.to_string(),
            amount: 1.0,
            unit: String::new(),
            original: name.to_string(),
        }
    }

    #[test]
    fn test_strip_html() {
        assert_eq!(
            strip_html("A <b>quick</b> dish from <a href=\"x\">here</a>."),
            "A quick dish from here."
        );
        assert_eq!(strip_html("no tags"), "no tags");
    }

    #[test]
    fn test_summary_from_hit() {
        let summary = RecipeSummary::from(IngredientHit {
            id: 7,
            title: "Garlic Butter Salmon".to_string(),
            image: None,
            used_ingredient_count: 2,
            missed_ingredient_count: 1,
            used_ingredients: vec![hit_ingredient("salmon"), hit_ingredient("butter")],
            missed_ingredients: vec![hit_ingredient("lemon")],
        });
        assert_eq!(summary.name, "Garlic Butter Salmon");
        assert_eq!(summary.emoji, "🐟");
        assert_eq!(summary.match_percentage, 67);
        assert_eq!(summary.missing_ingredients, vec!["lemon"]);
    }

    #[test]
    fn test_detail_from_information() {
        let info: RecipeInformation = serde_json::from_str(
            r#"{
                "id": 1,
                "title": "Tomato Soup",
                "summary": "<p>Warm and <b>easy</b></p>",
                "instructions": null,
                "analyzedInstructions": [],
                "extendedIngredients": [
                    {"id": 11529, "name": "tomatoes", "original": "4 tomatoes", "amount": 4, "unit": ""},
                    {"name": "heavy cream", "original": "1 cup heavy cream", "amount": 1, "unit": "cup"}
                ],
                "dishTypes": ["soup"]
            }"#,
        )
        .unwrap();
        let detail = RecipeDetail::from(info);
        assert_eq!(detail.summary, "Warm and easy");
        assert_eq!(detail.instructions, "");
        assert!(detail.steps.is_empty());
        assert_eq!(detail.emoji, "🍲");
        assert_eq!(detail.ingredients[1].amount_text(), "1 cup");
        assert_eq!(detail.ingredients[0].amount_text(), "4");
    }

    #[test]
    fn test_match_against_requires_whole_names() {
        let info: RecipeInformation = serde_json::from_str(
            r#"{
                "id": 3,
                "title": "Licorice Shortbread",
                "extendedIngredients": [
                    {"name": "unsalted butter", "original": "1 cup unsalted butter", "amount": 1, "unit": "cup"},
                    {"name": "licorice", "original": "2 oz licorice", "amount": 2, "unit": "oz"},
                    {"name": "flour", "original": "2 cups flour", "amount": 2, "unit": "cups"}
                ]
            }"#,
        )
        .unwrap();
        let detail = RecipeDetail::from(info);

        let m = detail.match_against(["Salt", "Rice"]);
        assert!(m.matched_ingredients.is_empty());
        assert_eq!(m.match_percentage, 0);
        assert_eq!(
            detail.missing_with_amounts(&m)[0],
            ("unsalted butter".to_string(), "1 cup".to_string())
        );

        let m = detail.match_against([" FLOUR "]);
        assert_eq!(m.matched_ingredients, vec!["flour"]);
        assert_eq!(m.missing_ingredients, vec!["unsalted butter", "licorice"]);
    }

    #[test]
    fn test_only_first_instruction_block_is_used() {
        let info = RecipeInformation {
            id: 2,
            title: "Pancakes".to_string(),
            image: None,
            servings: Some(4),
            ready_in_minutes: Some(20),
            source_name: None,
            source_url: None,
            spoonacular_score: None,
            health_score: None,
            summary: String::new(),
            instructions: Some("<ol><li>Mix</li></ol>".to_string()),
            analyzed_instructions: vec![
                InstructionBlock {
                    name: String::new(),
                    steps: vec![InstructionStep {
                        number: 1,
                        step: "Mix".to_string(),
                        ingredients: vec![Named {
                            name: "flour".to_string(),
                        }],
                        equipment: vec![Named {
                            name: "bowl".to_string(),
                        }],
                    }],
                },
                InstructionBlock {
                    name: "Syrup".to_string(),
                    steps: vec![InstructionStep {
                        number: 1,
                        step: "Boil".to_string(),
                        ingredients: vec![],
                        equipment: vec![],
                    }],
                },
            ],
            extended_ingredients: vec![ExtendedIngredient {
                id: None,
                name: "flour".to_string(),
                original: "2 cups flour".to_string(),
                amount: 2.0,
                unit: "cups".to_string(),
            }],
            dish_types: vec!["breakfast".to_string()],
            diets: vec![],
            cuisines: vec![],
            vegetarian: true,
            vegan: false,
            gluten_free: false,
            dairy_free: false,
        };
        let detail = RecipeDetail::from(info);
        assert_eq!(detail.instructions, "Mix");
        assert_eq!(
            detail.steps,
            vec![RecipeStep {
                number: 1,
                instruction: "Mix".to_string(),
                ingredients: vec!["flour".to_string()],
                equipment: vec!["bowl".to_string()],
            }]
        );

        let m = detail.match_against(["Eggs"]);
        assert_eq!(m.missing_ingredients, vec!["flour"]);
        assert_eq!(
            detail.missing_with_amounts(&m),
            vec![("flour".to_string(), "2 cups".to_string())]
        );
    }
}
