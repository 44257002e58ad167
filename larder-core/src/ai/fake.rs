//! Fake vision client for tests.

use async_trait::async_trait;
use std::sync::Mutex;

use super::{AiError, ImageData, VisionClient};

/// Answers by prompt substring, ignoring the image.
///
/// Patterns are checked in the order they were added, case-insensitively.
#[derive(Debug, Default)]
pub struct FakeVisionClient {
    responses: Vec<(String, String)>,
    default_response: Option<String>,
    calls: Mutex<usize>,
}

impl FakeVisionClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let mut client = Self::new();
        client.add_response(prompt_contains, response);
        client
    }

    pub fn add_response(&mut self, prompt_contains: &str, response: &str) {
        self.responses
            .push((prompt_contains.to_lowercase(), response.to_string()));
    }

    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// Number of `describe` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.lock().map(|c| *c).unwrap_or(0)
    }
}

#[async_trait]
impl VisionClient for FakeVisionClient {
    async fn describe(&self, prompt: &str, _image: &ImageData) -> Result<String, AiError> {
        if let Ok(mut calls) = self.calls.lock() {
            *calls += 1;
        }

        let prompt_lower = prompt.to_lowercase();
        if let Some((_, response)) = self
            .responses
            .iter()
            .find(|(pattern, _)| prompt_lower.contains(pattern))
        {
            return Ok(response.clone());
        }

        self.default_response.clone().ok_or_else(|| {
            AiError::RequestFailed(format!(
                "FakeVisionClient: no response configured for prompt: {}",
                prompt.chars().take(60).collect::<String>()
            ))
        })
    }

    fn model_name(&self) -> &str {
        "fake"
    }
}
