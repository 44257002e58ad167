//! Recipe discovery through a third-party recipe database.

mod emoji;
mod fake;
mod format;
mod spoonacular;
pub mod types;

pub use emoji::recipe_emoji;
pub use fake::FakeRecipeSource;
pub use format::{
    strip_html, RecipeDetail, RecipeIngredient, RecipeStep, RecipeSummary, SearchResult,
};
pub use spoonacular::{SpoonacularClient, DEFAULT_BASE_URL};
pub use types::{IngredientHit, RecipeInformation, SearchHit, SearchPage, SearchQuery};

use async_trait::async_trait;
use thiserror::Error;

/// Default page size for recipe searches.
pub const DEFAULT_RESULT_COUNT: u32 = 12;

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Recipe API not configured: {0}")]
    NotConfigured(String),

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Recipes that use as many of `ingredients` as possible.
    async fn find_by_ingredients(
        &self,
        ingredients: &[String],
        number: u32,
    ) -> Result<Vec<IngredientHit>, RecipeError>;

    async fn search(&self, query: &SearchQuery) -> Result<SearchPage, RecipeError>;

    /// `None` when there is no recipe with this id.
    async fn details(&self, id: i64) -> Result<Option<RecipeInformation>, RecipeError>;
}

/// Split a comma-separated ingredient list, trimming and dropping blanks.
pub fn parse_ingredient_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ingredient_list() {
        assert_eq!(
            parse_ingredient_list(" eggs, milk ,,  ,flour"),
            vec!["eggs", "milk", "flour"]
        );
        assert!(parse_ingredient_list(" , ").is_empty());
    }
}
