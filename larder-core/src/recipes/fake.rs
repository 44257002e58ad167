//! In-memory recipe source for tests and offline development.

use async_trait::async_trait;
use std::collections::HashMap;

use super::types::{IngredientHit, RecipeInformation, SearchHit, SearchPage, SearchQuery};
use super::{RecipeError, RecipeSource};

/// Serves canned recipes. Ingredient searches return every hit that uses at
/// least one of the requested ingredients; text searches match on title.
#[derive(Debug, Default)]
pub struct FakeRecipeSource {
    hits: Vec<IngredientHit>,
    search_hits: Vec<SearchHit>,
    details: HashMap<i64, RecipeInformation>,
    unavailable: bool,
}

impl FakeRecipeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source whose every call fails like an unconfigured client.
    pub fn unconfigured() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn with_hit(mut self, hit: IngredientHit) -> Self {
        self.hits.push(hit);
        self
    }

    pub fn with_search_hit(mut self, hit: SearchHit) -> Self {
        self.search_hits.push(hit);
        self
    }

    pub fn with_details(mut self, info: RecipeInformation) -> Self {
        self.details.insert(info.id, info);
        self
    }

    fn check(&self) -> Result<(), RecipeError> {
        if self.unavailable {
            Err(RecipeError::NotConfigured("fake source disabled".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl RecipeSource for FakeRecipeSource {
    async fn find_by_ingredients(
        &self,
        ingredients: &[String],
        number: u32,
    ) -> Result<Vec<IngredientHit>, RecipeError> {
        self.check()?;
        let wanted: Vec<String> = ingredients.iter().map(|i| i.to_lowercase()).collect();
        Ok(self
            .hits
            .iter()
            .filter(|hit| {
                hit.used_ingredients
                    .iter()
                    .any(|i| wanted.contains(&i.name.to_lowercase()))
            })
            .take(number as usize)
            .cloned()
            .collect())
    }

    async fn search(&self, query: &SearchQuery) -> Result<SearchPage, RecipeError> {
        self.check()?;
        let needle = query.query.to_lowercase();
        let matching: Vec<SearchHit> = self
            .search_hits
            .iter()
            .filter(|hit| hit.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        Ok(SearchPage {
            total_results: matching.len() as u32,
            results: matching
                .into_iter()
                .skip(query.offset as usize)
                .take(query.number as usize)
                .collect(),
        })
    }

    async fn details(&self, id: i64) -> Result<Option<RecipeInformation>, RecipeError> {
        self.check()?;
        Ok(self.details.get(&id).cloned())
    }
}
