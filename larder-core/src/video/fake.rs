use async_trait::async_trait;

use super::{Video, VideoError, VideoSearch};

/// Returns the same canned videos for every query.
#[derive(Debug, Default)]
pub struct FakeVideoSearch {
    videos: Vec<Video>,
    unconfigured: bool,
}

impl FakeVideoSearch {
    pub fn new(videos: Vec<Video>) -> Self {
        Self {
            videos,
            unconfigured: false,
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            videos: Vec::new(),
            unconfigured: true,
        }
    }
}

#[async_trait]
impl VideoSearch for FakeVideoSearch {
    async fn search(&self, _query: &str, max_results: u32) -> Result<Vec<Video>, VideoError> {
        if self.unconfigured {
            return Err(VideoError::NotConfigured);
        }
        Ok(self
            .videos
            .iter()
            .take(max_results as usize)
            .cloned()
            .collect())
    }
}
