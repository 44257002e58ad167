//! Spoonacular recipe API client.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::env;

use super::types::{IngredientHit, RecipeInformation, SearchPage, SearchQuery};
use super::{RecipeError, RecipeSource};

pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";

pub struct SpoonacularClient {
    api_key: Option<String>,
    base_url: String,
    client: reqwest::Client,
}

impl SpoonacularClient {
    pub fn new(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Reads `SPOONACULAR_API_KEY` and `LARDER_SPOONACULAR_BASE_URL`. A
    /// missing key is allowed; every call then fails with `NotConfigured`.
    pub fn from_env() -> Self {
        let api_key = env::var("SPOONACULAR_API_KEY").ok();
        let base_url = env::var("LARDER_SPOONACULAR_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(api_key, base_url)
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn api_key(&self) -> Result<&str, RecipeError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| RecipeError::NotConfigured("SPOONACULAR_API_KEY not set".to_string()))
    }

    /// GET `path` with `params`. `Ok(None)` on 404.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Option<T>, RecipeError> {
        let api_key = self.api_key()?;
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .query(&[("apiKey", api_key)])
            .query(params)
            .send()
            .await
            .map_err(|e| RecipeError::RequestFailed(e.without_url().to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let body = response
            .text()
            .await
            .map_err(|e| RecipeError::RequestFailed(e.without_url().to_string()))?;

        if !status.is_success() {
            tracing::warn!(path, status = status.as_u16(), "Recipe API error");
            return Err(RecipeError::ApiError {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        serde_json::from_str(&body)
            .map(Some)
            .map_err(|e| RecipeError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl RecipeSource for SpoonacularClient {
    async fn find_by_ingredients(
        &self,
        ingredients: &[String],
        number: u32,
    ) -> Result<Vec<IngredientHit>, RecipeError> {
        let params = [
            ("ingredients", ingredients.join(",")),
            ("number", number.to_string()),
            ("ranking", "1".to_string()),
            ("ignorePantry", "true".to_string()),
        ];
        tracing::debug!(count = ingredients.len(), number, "Searching recipes by ingredients");
        Ok(self
            .get_json("/recipes/findByIngredients", &params)
            .await?
            .unwrap_or_default())
    }

    async fn search(&self, query: &SearchQuery) -> Result<SearchPage, RecipeError> {
        let mut params = vec![
            ("query", query.query.clone()),
            ("number", query.number.to_string()),
            ("offset", query.offset.to_string()),
            ("addRecipeInformation", "true".to_string()),
            ("fillIngredients", "true".to_string()),
        ];
        if let Some(diet) = &query.diet {
            params.push(("diet", diet.clone()));
        }
        if let Some(cuisine) = &query.cuisine {
            params.push(("cuisine", cuisine.clone()));
        }
        tracing::debug!(query = %query.query, "Searching recipes");
        Ok(self
            .get_json("/recipes/complexSearch", &params)
            .await?
            .unwrap_or_default())
    }

    async fn details(&self, id: i64) -> Result<Option<RecipeInformation>, RecipeError> {
        self.get_json(&format!("/recipes/{}/information", id), &[])
            .await
    }
}
