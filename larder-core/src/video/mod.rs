//! Cooking video lookup.

mod fake;
mod youtube;

pub use fake::FakeVideoSearch;
pub use youtube::{format_duration, YouTubeClient, PLACEHOLDER_API_KEY};

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Videos returned per search.
pub const DEFAULT_MAX_RESULTS: u32 = 5;

#[derive(Error, Debug)]
pub enum VideoError {
    #[error("YouTube API key not configured")]
    NotConfigured,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("{message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    pub thumbnail: Option<String>,
    /// `m:ss` or `h:mm:ss`.
    pub duration: String,
    pub channel_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_count: Option<String>,
}

#[async_trait]
pub trait VideoSearch: Send + Sync {
    /// Cooking videos for a dish name.
    async fn search(&self, query: &str, max_results: u32) -> Result<Vec<Video>, VideoError>;
}
