use larder_core::ai::{GeminiClient, VisionClient};
use larder_core::recipes::{RecipeSource, SpoonacularClient};
use larder_core::store::{FileStore, Kitchen};
use larder_core::video::{VideoSearch, YouTubeClient};
use larder_core::{KitchenConfig, SystemClock};
use std::sync::Arc;

/// Everything a handler can reach.
pub struct AppContext {
    pub kitchen: Kitchen,
    pub recipes: Arc<dyn RecipeSource>,
    pub videos: Arc<dyn VideoSearch>,
    /// `None` when no vision API key is configured.
    pub vision: Option<Arc<dyn VisionClient>>,
}

impl AppContext {
    /// File-backed kitchen plus real third-party clients, all configured
    /// from environment variables.
    pub fn from_env() -> Self {
        let config = KitchenConfig::from_env();
        tracing::info!(data_dir = %config.data_dir.display(), "Using kitchen data directory");

        let kitchen = Kitchen::new(FileStore::new(&config.data_dir), Arc::new(SystemClock))
            .with_shelf_life(config.shelf_life_days);
        kitchen.events().subscribe(|event| {
            tracing::debug!(?event, "Kitchen data changed");
        });

        let recipes = SpoonacularClient::from_env();
        if !recipes.is_configured() {
            tracing::warn!("SPOONACULAR_API_KEY not set, recipe search will return no results");
        }

        let videos = YouTubeClient::from_env();
        if !videos.is_configured() {
            tracing::warn!("YOUTUBE_API_KEY not set, video search is disabled");
        }

        let vision: Option<Arc<dyn VisionClient>> = match GeminiClient::from_env() {
            Ok(client) => Some(Arc::new(client)),
            Err(e) => {
                tracing::warn!("Image analysis disabled: {}", e);
                None
            }
        };

        Self {
            kitchen,
            recipes: Arc::new(recipes),
            videos: Arc::new(videos),
            vision,
        }
    }
}
