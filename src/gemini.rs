//! Gemini (Google) image generation client.

use crate::error::{AssetError, Result};
use crate::generator::{GeneratedImage, ImageGenerator};
use async_trait::async_trait;
use base64::Engine;
use serde::{Deserialize, Serialize};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used for landing-page asset generation.
const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";

/// Builder for [`GeminiClient`].
#[derive(Debug, Clone, Default)]
pub struct GeminiClientBuilder {
    api_key: Option<String>,
    model: Option<String>,
}

impl GeminiClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key. Falls back to `GOOGLE_API_KEY`, then `GEMINI_API_KEY`.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Overrides the model identifier.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Builds the client, resolving the API key.
    ///
    /// A missing key is an [`AssetError::Auth`] here, before any request is
    /// made, so a run with no credential aborts pre-flight.
    pub fn build(self) -> Result<GeminiClient> {
        let api_key = self
            .api_key
            .or_else(|| std::env::var("GOOGLE_API_KEY").ok())
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .ok_or_else(|| {
                AssetError::Auth(
                    "set GOOGLE_API_KEY or GEMINI_API_KEY, or provide a key explicitly".into(),
                )
            })?;

        Ok(GeminiClient {
            client: reqwest::Client::new(),
            api_key,
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        })
    }
}

/// Client for the Gemini `generateContent` endpoint.
#[derive(Debug)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Creates a new [`GeminiClientBuilder`].
    pub fn builder() -> GeminiClientBuilder {
        GeminiClientBuilder::new()
    }

    /// Model identifier this client requests.
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn generate_impl(&self, prompt: &str) -> Result<GeneratedImage> {
        let url = format!("{API_BASE}/models/{}:generateContent", self.model);
        let body = GeminiRequest::from_prompt(prompt);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let headers = response.headers().clone();
            let text = response.text().await.unwrap_or_default();
            return Err(parse_error(status.as_u16(), &text, &headers));
        }

        let gemini_response: GeminiResponse = response.json().await?;
        extract_image(gemini_response)
    }
}

/// Pulls the first image-bearing part out of a response.
///
/// Text parts are skipped; a response with no inline image data at all is a
/// [`AssetError::MissingImage`] failure, not a panic or an empty payload.
fn extract_image(response: GeminiResponse) -> Result<GeneratedImage> {
    // Blocked prompts come back as HTTP 200 with promptFeedback set
    if let Some(ref feedback) = response.prompt_feedback {
        if let Some(ref reason) = feedback.block_reason {
            let msg = feedback
                .block_reason_message
                .clone()
                .unwrap_or_else(|| format!("Prompt blocked: {reason}"));
            return Err(AssetError::ContentBlocked(msg));
        }
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| AssetError::MissingImage("no candidates in response".into()))?;

    if let Some(ref finish_reason) = candidate.finish_reason {
        match finish_reason.as_str() {
            "SAFETY" | "IMAGE_SAFETY" | "IMAGE_PROHIBITED_CONTENT" | "IMAGE_RECITATION"
            | "RECITATION" | "PROHIBITED_CONTENT" | "BLOCKLIST" => {
                return Err(AssetError::ContentBlocked(format!(
                    "blocked by safety filter: {finish_reason}"
                )));
            }
            _ => {} // STOP, MAX_TOKENS, etc. are normal
        }
    }

    let content = candidate
        .content
        .ok_or_else(|| AssetError::MissingImage("no content in candidate".into()))?;

    // First image-bearing part wins; text parts are skipped
    let inline_data = content
        .parts
        .into_iter()
        .find_map(|p| p.inline_data)
        .ok_or_else(|| AssetError::MissingImage("response carried text parts only".into()))?;

    let data = base64::engine::general_purpose::STANDARD
        .decode(&inline_data.data)
        .map_err(|e| AssetError::Decode(e.to_string()))?;

    Ok(GeneratedImage::new(data, inline_data.mime_type))
}

/// Longest response-body excerpt carried into an error message.
const MAX_ERROR_BODY: usize = 512;

/// Trims and bounds a response body before it lands in an error message;
/// provider error bodies can be arbitrarily large HTML or JSON dumps.
fn sanitize_error_message(text: &str) -> String {
    let text = text.trim();
    if text.len() <= MAX_ERROR_BODY {
        return text.to_string();
    }
    let mut end = MAX_ERROR_BODY;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

fn parse_error(status: u16, text: &str, headers: &reqwest::header::HeaderMap) -> AssetError {
    let text = sanitize_error_message(text);
    if status == 429 {
        let retry_after = headers
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok())
            .map(std::time::Duration::from_secs);
        return AssetError::RateLimited { retry_after };
    }
    if status == 401 || status == 403 {
        return AssetError::Auth(text);
    }
    let lower = text.to_lowercase();
    if lower.contains("safety") || lower.contains("blocked") || lower.contains("prohibited") {
        return AssetError::ContentBlocked(text);
    }
    AssetError::Api {
        status,
        message: text,
    }
}

#[async_trait]
impl ImageGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage> {
        self.generate_impl(prompt).await
    }
}

// Request/Response types
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    generation_config: GeminiConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    parts: Vec<GeminiRequestPart>,
}

#[derive(Debug, Serialize)]
struct GeminiRequestPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiConfig {
    response_modalities: Vec<String>,
}

impl GeminiRequest {
    fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![GeminiContent {
                parts: vec![GeminiRequestPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GeminiConfig {
                // Image plus optional text commentary are both acceptable
                response_modalities: vec!["IMAGE".to_string(), "TEXT".to_string()],
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    #[serde(default)]
    content: Option<GeminiContentResponse>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
    #[serde(default)]
    block_reason_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiContentResponse {
    #[serde(default)]
    parts: Vec<GeminiPartResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPartResponse {
    #[serde(default)]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}
