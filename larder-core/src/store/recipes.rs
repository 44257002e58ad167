use super::{Kitchen, StoreEvent, SAVED_RECIPES_KEY, VIDEOS_KEY};
use crate::error::{StoreError, ValidationError};
use crate::models::{CustomVideo, NewCustomVideo, VideoPlatform};

impl Kitchen {
    /// Saved recipe ids, in the order they were saved.
    pub fn saved_recipes(&self) -> Result<Vec<i64>, StoreError> {
        let _guard = self.lock()?;
        self.load(SAVED_RECIPES_KEY)
    }

    pub fn is_saved(&self, recipe_id: i64) -> Result<bool, StoreError> {
        Ok(self.saved_recipes()?.contains(&recipe_id))
    }

    /// Returns false if the recipe was already saved.
    pub fn save_recipe(&self, recipe_id: i64) -> Result<bool, StoreError> {
        {
            let _guard = self.lock()?;
            let mut saved: Vec<i64> = self.load(SAVED_RECIPES_KEY)?;
            if saved.contains(&recipe_id) {
                return Ok(false);
            }
            saved.push(recipe_id);
            self.save(SAVED_RECIPES_KEY, &saved)?;
        }
        self.notify(StoreEvent::SavedRecipesUpdated);
        Ok(true)
    }

    /// Returns false if the recipe was not saved.
    pub fn unsave_recipe(&self, recipe_id: i64) -> Result<bool, StoreError> {
        {
            let _guard = self.lock()?;
            let mut saved: Vec<i64> = self.load(SAVED_RECIPES_KEY)?;
            let before = saved.len();
            saved.retain(|id| *id != recipe_id);
            if saved.len() == before {
                return Ok(false);
            }
            self.save(SAVED_RECIPES_KEY, &saved)?;
        }
        self.notify(StoreEvent::SavedRecipesUpdated);
        Ok(true)
    }

    pub fn videos_for_recipe(&self, recipe_id: i64) -> Result<Vec<CustomVideo>, StoreError> {
        let _guard = self.lock()?;
        let videos: Vec<CustomVideo> = self.load(VIDEOS_KEY)?;
        Ok(videos
            .into_iter()
            .filter(|v| v.recipe_id == recipe_id)
            .collect())
    }

    /// Attach a video link to a recipe. The platform is taken from the URL
    /// when not given, and the title defaults to the URL.
    pub fn add_video(
        &self,
        recipe_id: i64,
        video: NewCustomVideo,
    ) -> Result<CustomVideo, StoreError> {
        let url = video.url.trim().to_string();
        if url.is_empty() {
            return Err(ValidationError::BlankUrl.into());
        }

        let added = {
            let mut last_id = self.lock()?;
            let mut videos: Vec<CustomVideo> = self.load(VIDEOS_KEY)?;
            let max_id = videos.iter().map(|v| v.id).max().unwrap_or(0);
            let added = CustomVideo {
                id: self.next_id(&mut last_id, max_id),
                recipe_id,
                platform: video
                    .platform
                    .unwrap_or_else(|| VideoPlatform::from_url(&url)),
                title: video
                    .title
                    .map(|t| t.trim().to_string())
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| url.clone()),
                url,
            };
            videos.push(added.clone());
            self.save(VIDEOS_KEY, &videos)?;
            added
        };

        self.notify(StoreEvent::VideosUpdated);
        Ok(added)
    }

    pub fn delete_video(&self, id: i64) -> Result<bool, StoreError> {
        {
            let _guard = self.lock()?;
            let mut videos: Vec<CustomVideo> = self.load(VIDEOS_KEY)?;
            let before = videos.len();
            videos.retain(|v| v.id != id);
            if videos.len() == before {
                return Ok(false);
            }
            self.save(VIDEOS_KEY, &videos)?;
        }
        self.notify(StoreEvent::VideosUpdated);
        Ok(true)
    }
}
