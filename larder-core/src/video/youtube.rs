//! YouTube Data API v3 client.

use async_trait::async_trait;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::LazyLock;

use super::{Video, VideoError, VideoSearch};

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// The sample key shipped in example env files; treated as no key.
pub const PLACEHOLDER_API_KEY: &str = "your-youtube-api-key";

pub struct YouTubeClient {
    api_key: Option<String>,
    base_url: String,
    client: reqwest::Client,
}

impl YouTubeClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty() && k != PLACEHOLDER_API_KEY),
            base_url: DEFAULT_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Reads `YOUTUBE_API_KEY`.
    pub fn from_env() -> Self {
        Self::new(std::env::var("YOUTUBE_API_KEY").ok())
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
        failure: &str,
    ) -> Result<T, VideoError> {
        let api_key = self.api_key.as_deref().ok_or(VideoError::NotConfigured)?;

        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .query(params)
            .query(&[("key", api_key)])
            .send()
            .await
            .map_err(|e| VideoError::RequestFailed(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| VideoError::RequestFailed(e.without_url().to_string()))?;

        if !status.is_success() {
            tracing::error!(path, status = status.as_u16(), "YouTube API error: {}", body);
            return Err(VideoError::ApiError {
                status: status.as_u16(),
                message: failure.to_string(),
            });
        }

        serde_json::from_str(&body).map_err(|e| VideoError::ParseError(e.to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    title: String,
    #[serde(default)]
    channel_title: String,
    #[serde(default)]
    thumbnails: HashMap<String, Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    #[serde(default)]
    items: Vec<DetailsItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DetailsItem {
    id: String,
    content_details: Option<ContentDetails>,
    statistics: Option<Statistics>,
}

#[derive(Debug, Deserialize)]
struct ContentDetails {
    duration: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Statistics {
    view_count: Option<String>,
}

static DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?").expect("Invalid duration regex")
});

/// Render an ISO 8601 duration (`PT1H2M3S`) as `1:02:03`, or `8:24` when
/// under an hour. Anything unrecognized is `0:00`.
pub fn format_duration(iso: &str) -> String {
    let Some(caps) = DURATION.captures(iso) else {
        return "0:00".to_string();
    };
    let part = |i: usize| -> u64 {
        caps.get(i)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    };
    let (hours, minutes, seconds) = (part(1), part(2), part(3));

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

fn thumbnail(snippet: &Snippet) -> Option<String> {
    snippet
        .thumbnails
        .get("medium")
        .or_else(|| snippet.thumbnails.get("default"))
        .map(|t| t.url.clone())
}

fn merge(search: SearchResponse, details: DetailsResponse) -> Vec<Video> {
    let details: HashMap<String, DetailsItem> = details
        .items
        .into_iter()
        .map(|d| (d.id.clone(), d))
        .collect();

    search
        .items
        .into_iter()
        .filter_map(|item| {
            let id = item.id.video_id?;
            let detail = details.get(&id);
            Some(Video {
                thumbnail: thumbnail(&item.snippet),
                title: item.snippet.title,
                channel_title: item.snippet.channel_title,
                duration: format_duration(
                    detail
                        .and_then(|d| d.content_details.as_ref())
                        .map(|c| c.duration.as_str())
                        .unwrap_or("PT0M0S"),
                ),
                view_count: detail
                    .and_then(|d| d.statistics.as_ref())
                    .and_then(|s| s.view_count.clone()),
                id,
            })
        })
        .collect()
}

#[async_trait]
impl VideoSearch for YouTubeClient {
    async fn search(&self, query: &str, max_results: u32) -> Result<Vec<Video>, VideoError> {
        let search: SearchResponse = self
            .get_json(
                "/search",
                &[
                    ("part", "snippet".to_string()),
                    ("type", "video".to_string()),
                    ("maxResults", max_results.to_string()),
                    ("q", format!("{} recipe cooking", query)),
                ],
                "Failed to search YouTube",
            )
            .await?;

        let ids: Vec<&str> = search
            .items
            .iter()
            .filter_map(|item| item.id.video_id.as_deref())
            .collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let details: DetailsResponse = self
            .get_json(
                "/videos",
                &[
                    ("part", "contentDetails,statistics".to_string()),
                    ("id", ids.join(",")),
                ],
                "Failed to get video details",
            )
            .await?;

        let videos = merge(search, details);
        tracing::debug!(query, count = videos.len(), "Found videos");
        Ok(videos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration("PT1H2M3S"), "1:02:03");
        assert_eq!(format_duration("PT8M24S"), "8:24");
        assert_eq!(format_duration("PT45S"), "0:45");
        assert_eq!(format_duration("PT2H"), "2:00:00");
        assert_eq!(format_duration("PT10M"), "10:00");
        assert_eq!(format_duration("garbage"), "0:00");
    }

    #[test]
    fn test_placeholder_key_is_unconfigured() {
        assert!(!YouTubeClient::new(Some(PLACEHOLDER_API_KEY.to_string())).is_configured());
        assert!(!YouTubeClient::new(None).is_configured());
        assert!(YouTubeClient::new(Some("real".to_string())).is_configured());
    }

    #[tokio::test]
    async fn test_search_without_key_fails() {
        let err = YouTubeClient::new(None).search("pasta", 5).await.unwrap_err();
        assert!(matches!(err, VideoError::NotConfigured));
        assert_eq!(err.to_string(), "YouTube API key not configured");
    }

    #[test]
    fn test_merge_search_and_details() {
        let search: SearchResponse = serde_json::from_str(
            r#"{"items": [
                {"id": {"videoId": "a1"}, "snippet": {"title": "Carbonara", "channelTitle": "Chef",
                    "thumbnails": {"default": {"url": "d.jpg"}, "medium": {"url": "m.jpg"}}}},
                {"id": {"kind": "youtube#channel"}, "snippet": {"title": "A channel"}},
                {"id": {"videoId": "b2"}, "snippet": {"title": "Cacio e Pepe", "channelTitle": "Nonna",
                    "thumbnails": {"default": {"url": "only.jpg"}}}}
            ]}"#,
        )
        .unwrap();
        let details: DetailsResponse = serde_json::from_str(
            r#"{"items": [
                {"id": "b2", "contentDetails": {"duration": "PT1H5S"}, "statistics": {"viewCount": "42"}},
                {"id": "a1", "contentDetails": {"duration": "PT12M3S"}, "statistics": {}}
            ]}"#,
        )
        .unwrap();

        let videos = merge(search, details);
        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0].id, "a1");
        assert_eq!(videos[0].duration, "12:03");
        assert_eq!(videos[0].thumbnail.as_deref(), Some("m.jpg"));
        assert_eq!(videos[0].view_count, None);
        assert_eq!(videos[1].duration, "1:00:05");
        assert_eq!(videos[1].thumbnail.as_deref(), Some("only.jpg"));
        assert_eq!(videos[1].view_count.as_deref(), Some("42"));
    }
}
