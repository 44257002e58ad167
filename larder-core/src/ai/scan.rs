use base64::Engine;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use super::prompts::prompt_for;
use super::{AiError, VisionClient};
use crate::models::InventoryDraft;

/// What the photo shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScanKind {
    Receipt,
    /// Anything that is not a receipt is analyzed as a fridge or pantry shot.
    #[default]
    Fridge,
}

impl ScanKind {
    pub fn from_type(kind: Option<&str>) -> Self {
        match kind.map(|k| k.trim().to_lowercase()).as_deref() {
            Some("receipt") => ScanKind::Receipt,
            _ => ScanKind::Fridge,
        }
    }
}

/// A base64-encoded image and its MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub mime_type: String,
    pub data: String,
}

impl ImageData {
    /// Split a `data:image/...;base64,...` URL. The payload must be valid
    /// base64 and the MIME type an image type.
    pub fn from_data_url(url: &str) -> Result<Self, AiError> {
        let rest = url
            .trim()
            .strip_prefix("data:")
            .ok_or_else(|| AiError::InvalidImage("expected a data: URL".to_string()))?;
        let (header, data) = rest
            .split_once(',')
            .ok_or_else(|| AiError::InvalidImage("data URL has no payload".to_string()))?;
        let mime_type = header
            .strip_suffix(";base64")
            .ok_or_else(|| AiError::InvalidImage("data URL is not base64 encoded".to_string()))?;

        if !mime_type.starts_with("image/") {
            return Err(AiError::InvalidImage(format!(
                "unsupported MIME type '{}'",
                mime_type
            )));
        }
        if data.is_empty() {
            return Err(AiError::InvalidImage("image data is empty".to_string()));
        }
        base64::engine::general_purpose::STANDARD
            .decode(data)
            .map_err(|e| AiError::InvalidImage(format!("invalid base64: {}", e)))?;

        Ok(Self {
            mime_type: mime_type.to_string(),
            data: data.to_string(),
        })
    }
}

/// An item the model claims to see.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DetectedItem {
    pub name: String,
    #[serde(default = "default_quantity", deserialize_with = "text_or_number")]
    pub quantity: String,
    /// 1 to 100, only reported for fridge scans.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

fn default_quantity() -> String {
    "1".to_string()
}

/// Models sometimes answer `"quantity": 2` instead of `"2"`.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Quantity {
        Text(String),
        Number(serde_json::Number),
        Missing(()),
    }

    Ok(match Quantity::deserialize(deserializer)? {
        Quantity::Text(text) if !text.trim().is_empty() => text.trim().to_string(),
        Quantity::Number(n) => n.to_string(),
        _ => default_quantity(),
    })
}

/// Remove a surrounding Markdown code fence (```json ... ``` or ``` ... ```).
pub fn strip_code_fences(text: &str) -> &str {
    let mut cleaned = text.trim();
    if let Some(rest) = cleaned.strip_prefix("```json") {
        cleaned = rest;
    } else if let Some(rest) = cleaned.strip_prefix("```") {
        cleaned = rest;
    }
    if let Some(rest) = cleaned.strip_suffix("```") {
        cleaned = rest;
    }
    cleaned.trim()
}

/// Ask the vision model which groceries appear in `data_url`.
pub async fn analyze_image(
    client: &dyn VisionClient,
    data_url: &str,
    kind: ScanKind,
) -> Result<Vec<DetectedItem>, AiError> {
    let image = ImageData::from_data_url(data_url)?;

    tracing::debug!(
        model = client.model_name(),
        ?kind,
        mime_type = %image.mime_type,
        "Analyzing image"
    );

    let raw = client.describe(prompt_for(kind), &image).await?;
    let raw = if raw.trim().is_empty() {
        "[]".to_string()
    } else {
        raw
    };

    let items: Vec<DetectedItem> =
        serde_json::from_str(strip_code_fences(&raw)).map_err(|e| AiError::ParseError {
            message: e.to_string(),
            raw: raw.clone(),
        })?;

    let items: Vec<DetectedItem> = items
        .into_iter()
        .filter(|item| !item.name.trim().is_empty())
        .collect();

    tracing::info!(count = items.len(), ?kind, "Detected items in image");
    Ok(items)
}

/// Inventory drafts for the detected items the user kept. The detected
/// quantity text becomes the unit, as with shopping list items.
pub fn detected_to_drafts(
    items: &[DetectedItem],
    today: NaiveDate,
    shelf_life_days: u64,
) -> Vec<InventoryDraft> {
    items
        .iter()
        .map(|item| InventoryDraft::guessed(&item.name, &item.quantity, today, shelf_life_days))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::FakeVisionClient;
    use crate::categorize::Category;

    const PNG: &str = "data:image/png;base64,iVBORw0KGgo=";

    #[test]
    fn test_from_data_url() {
        let image = ImageData::from_data_url(PNG).unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, "iVBORw0KGgo=");
    }

    #[test]
    fn test_from_data_url_rejects() {
        for bad in [
            "iVBORw0KGgo=",
            "data:image/png;base64",
            "data:image/png,iVBORw0KGgo=",
            "data:text/plain;base64,aGVsbG8=",
            "data:image/png;base64,",
            "data:image/png;base64,not base64!!",
        ] {
            assert!(
                matches!(ImageData::from_data_url(bad), Err(AiError::InvalidImage(_))),
                "accepted {bad}"
            );
        }
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```json\n[]\n```"), "[]");
        assert_eq!(strip_code_fences("```\n[1]\n```"), "[1]");
        assert_eq!(strip_code_fences("  [2]  "), "[2]");
    }

    #[test]
    fn test_scan_kind_from_type() {
        assert_eq!(ScanKind::from_type(Some("receipt")), ScanKind::Receipt);
        assert_eq!(ScanKind::from_type(Some("Receipt ")), ScanKind::Receipt);
        assert_eq!(ScanKind::from_type(Some("fridge")), ScanKind::Fridge);
        assert_eq!(ScanKind::from_type(Some("pantry")), ScanKind::Fridge);
        assert_eq!(ScanKind::from_type(None), ScanKind::Fridge);
    }

    #[tokio::test]
    async fn test_analyze_receipt() {
        let client = FakeVisionClient::with_response(
            "receipt",
            "```json\n[{\"name\": \"Milk\", \"quantity\": \"1 gallon\"}, {\"name\": \"Eggs\", \"quantity\": 12}, {\"name\": \"Bread\"}]\n```",
        );
        let items = analyze_image(&client, PNG, ScanKind::Receipt).await.unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].quantity, "1 gallon");
        assert_eq!(items[1].quantity, "12");
        assert_eq!(items[2].quantity, "1");
        assert_eq!(items[0].confidence, None);
    }

    #[tokio::test]
    async fn test_analyze_uses_fridge_prompt() {
        let client = FakeVisionClient::with_response(
            "fridge",
            r#"[{"name": "Yogurt", "quantity": "4 cups", "confidence": 88}]"#,
        );
        let items = analyze_image(&client, PNG, ScanKind::Fridge).await.unwrap();
        assert_eq!(items[0].confidence, Some(88.0));

        // receipt prompt does not mention the fridge
        assert!(analyze_image(&client, PNG, ScanKind::Receipt).await.is_err());
    }

    #[tokio::test]
    async fn test_analyze_empty_answer_is_no_items() {
        let client = FakeVisionClient::new().with_default_response("");
        let items = analyze_image(&client, PNG, ScanKind::Fridge).await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_analyze_unparseable_answer_keeps_raw_text() {
        let client = FakeVisionClient::new().with_default_response("I see a fridge.");
        let err = analyze_image(&client, PNG, ScanKind::Fridge).await.unwrap_err();
        match err {
            AiError::ParseError { raw, .. } => assert_eq!(raw, "I see a fridge."),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_detected_to_drafts() {
        let items = vec![DetectedItem {
            name: "Chicken Breast".to_string(),
            quantity: "2 lbs".to_string(),
            confidence: Some(90.0),
        }];
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let drafts = detected_to_drafts(&items, today, 7);
        assert_eq!(drafts[0].category, Category::Meat);
        assert_eq!(drafts[0].unit, "2 lbs");
        assert_eq!(drafts[0].expiry_date, NaiveDate::from_ymd_opt(2024, 6, 17));
    }
}
