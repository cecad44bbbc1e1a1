//! Gemini API client
//!
//! The one production implementation of [`GenerativeModel`]: a typed
//! reqwest client for the `generateContent` operation. Each request carries
//! two ordered parts, the instruction prompt and the inline document, and
//! returns the model's free-text reply.
//!
//! Failures are tagged here, as close to the wire as possible: HTTP 429 and
//! quota-exhaustion bodies become [`ModelError::Throttled`], retired-model
//! bodies become [`ModelError::ModelTransition`], everything else keeps its
//! status and message.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::ModelConfig;
use crate::error::ModelError;

use super::provider::{GenerativeModel, InlineDocument};

/// Gemini `generateContent` client.
pub struct GeminiClient {
    client: Client,
    config: ModelConfig,
}

impl GeminiClient {
    /// Create a client from configuration.
    ///
    /// A missing API key is not an error here; calls fail with
    /// [`ModelError::MissingCredential`] at invocation time instead.
    pub fn new(config: ModelConfig) -> Result<Self, ModelError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Check that the configured credential is accepted by the API.
    pub async fn validate_credentials(&self) -> Result<bool, ModelError> {
        if !self.config.has_credential() {
            return Err(ModelError::MissingCredential);
        }

        let url = format!(
            "{}/v1beta/models/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        );

        let response = self
            .client
            .get(url)
            .header("x-goog-api-key", &self.config.api_key)
            .send()
            .await?;

        Ok(response.status().is_success())
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        document: &InlineDocument,
    ) -> Result<String, ModelError> {
        if !self.config.has_credential() {
            return Err(ModelError::MissingCredential);
        }

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![
                    RequestPart::Text { text: prompt },
                    RequestPart::Inline {
                        inline_data: InlineDataPayload {
                            mime_type: &document.media_type,
                            data: &document.data,
                        },
                    },
                ],
            }],
            generation_config: GenerationConfig { temperature: 0.1 },
        };

        let response = self
            .client
            .post(self.generate_url())
            .header("x-goog-api-key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_api_error(status.as_u16(), &body));
        }

        let reply: GenerateResponse = response.json().await?;

        if let Some(usage) = &reply.usage_metadata {
            tracing::debug!(
                prompt_tokens = usage.prompt_token_count,
                reply_tokens = usage.candidates_token_count,
                total_tokens = usage.total_token_count,
                "model usage"
            );
        }

        reply_text(reply)
    }
}

/// Map a non-success API response to a tagged error.
fn classify_api_error(status: u16, body: &str) -> ModelError {
    let envelope: Option<ApiErrorEnvelope> = serde_json::from_str(body).ok();
    let (api_status, message) = match envelope {
        Some(e) => (e.error.status, e.error.message),
        None => (String::new(), body.trim().to_string()),
    };

    let lowered = message.to_lowercase();

    if status == 429 || api_status == "RESOURCE_EXHAUSTED" || lowered.contains("rate limit") {
        return ModelError::Throttled;
    }

    if lowered.contains("deprecated") {
        return ModelError::ModelTransition;
    }

    ModelError::Api { status, message }
}

/// Concatenate the text parts of the first candidate.
fn reply_text(reply: GenerateResponse) -> Result<String, ModelError> {
    let text = reply
        .candidates
        .into_iter()
        .next()
        .ok_or(ModelError::EmptyResponse)?
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(ModelError::EmptyResponse);
    }

    Ok(text)
}

// API request/response types

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum RequestPart<'a> {
    Text {
        text: &'a str,
    },
    Inline {
        #[serde(rename = "inlineData")]
        inline_data: InlineDataPayload<'a>,
    },
}

#[derive(Serialize)]
struct InlineDataPayload<'a> {
    #[serde(rename = "mimeType")]
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(rename = "usageMetadata")]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize, Default)]
struct UsageMetadata {
    #[serde(rename = "promptTokenCount", default)]
    prompt_token_count: u32,
    #[serde(rename = "candidatesTokenCount", default)]
    candidates_token_count: u32,
    #[serde(rename = "totalTokenCount", default)]
    total_token_count: u32,
}

#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape_keeps_part_order() {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![
                    RequestPart::Text { text: "analyze" },
                    RequestPart::Inline {
                        inline_data: InlineDataPayload {
                            mime_type: "application/pdf",
                            data: "QUJD",
                        },
                    },
                ],
            }],
            generation_config: GenerationConfig { temperature: 0.1 },
        };

        let value = serde_json::to_value(&request).unwrap();
        let parts = &value["contents"][0]["parts"];
        assert_eq!(parts[0]["text"], "analyze");
        assert_eq!(parts[1]["inlineData"]["mimeType"], "application/pdf");
        assert_eq!(parts[1]["inlineData"]["data"], "QUJD");
        let temperature = value["generationConfig"]["temperature"].as_f64().unwrap();
        assert!((temperature - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_classify_429_as_throttled() {
        let err = classify_api_error(429, r#"{"error":{"message":"quota","status":"RESOURCE_EXHAUSTED"}}"#);
        assert!(matches!(err, ModelError::Throttled));
    }

    #[test]
    fn test_classify_rate_limit_message_as_throttled() {
        let err = classify_api_error(400, r#"{"error":{"message":"Rate limit reached for model"}}"#);
        assert!(matches!(err, ModelError::Throttled));
    }

    #[test]
    fn test_classify_deprecated_as_transition() {
        let err = classify_api_error(
            404,
            r#"{"error":{"message":"Model gemini-pro-vision is deprecated","status":"NOT_FOUND"}}"#,
        );
        assert!(matches!(err, ModelError::ModelTransition));
    }

    #[test]
    fn test_classify_other_keeps_status_and_message() {
        let err = classify_api_error(500, r#"{"error":{"message":"internal"}}"#);
        match err {
            ModelError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "internal");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_classify_unparseable_body_uses_raw_text() {
        let err = classify_api_error(502, "Bad Gateway");
        match err {
            ModelError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_reply_text_joins_parts() {
        let reply: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"{\"a\":"},{"text":"1}"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(reply_text(reply).unwrap(), "{\"a\":1}");
    }

    #[test]
    fn test_reply_without_candidates_is_empty_response() {
        let reply: GenerateResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(matches!(reply_text(reply), Err(ModelError::EmptyResponse)));
    }

    #[test]
    fn test_reply_with_blank_text_is_empty_response() {
        let reply: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"   "}]}}]}"#,
        )
        .unwrap();
        assert!(matches!(reply_text(reply), Err(ModelError::EmptyResponse)));
    }
}
