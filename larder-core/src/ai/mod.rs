//! Grocery detection from receipt and fridge photos using a vision model.
//!
//! # Configuration
//!
//! - `GOOGLE_AI_API_KEY` (required): Gemini API key
//! - `LARDER_AI_MODEL` (optional): model name, default "gemini-1.5-flash"
//! - `LARDER_AI_BASE_URL` (optional): API base URL

mod config;
mod fake;
mod gemini;
mod prompts;
mod scan;

pub use config::{AiConfig, ConfigError};
pub use fake::FakeVisionClient;
pub use gemini::GeminiClient;
pub use prompts::{fridge_prompt, prompt_for, receipt_prompt};
pub use scan::{
    analyze_image, detected_to_drafts, strip_code_fences, DetectedItem, ImageData, ScanKind,
};

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AiError {
    #[error("Vision model not configured: {0}")]
    NotConfigured(String),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse detected items: {message}")]
    ParseError { message: String, raw: String },
}

/// A multimodal model that answers a text prompt about one image.
#[async_trait]
pub trait VisionClient: Send + Sync {
    /// Returns the model's raw text answer.
    async fn describe(&self, prompt: &str, image: &ImageData) -> Result<String, AiError>;

    fn model_name(&self) -> &str;
}
