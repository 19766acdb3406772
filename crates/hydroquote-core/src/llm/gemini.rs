//! Google Gemini provider using the `generateContent` REST endpoint.

use super::provider::{LlmProvider, LlmRequest, LlmResponse};
use crate::error::EnrichError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Gemini provider bound to one API key and model.
pub struct GeminiProvider {
    api_key: String,
    model: String,
    endpoint: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl GeminiProvider {
    pub fn new(api_key: &str, model: &str, endpoint: &str, timeout: Duration) -> Self {
        Self {
            api_key: api_key.to_string(),
            model: model.to_string(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            timeout,
            client: reqwest::Client::new(),
        }
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

// --- Request types ---

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

// --- Response types ---

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
    model_version: Option<String>,
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
    #[serde(default)]
    thought: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    total_token_count: Option<u32>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, untouched.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter(|p| !p.thought)
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, request: &LlmRequest) -> Result<LlmResponse, EnrichError> {
        let start = Instant::now();

        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: request.prompt.clone(),
                }],
            }],
        };

        let resp = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .timeout(self.timeout())
            .send()
            .await
            .map_err(|e| EnrichError::Provider {
                message: format!("Gemini request failed: {e}"),
                status_code: None,
            })?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(EnrichError::Provider {
                message: format!("Gemini HTTP {status}: {text}"),
                status_code: Some(status.as_u16()),
            });
        }

        let gen_resp: GenerateContentResponse =
            resp.json().await.map_err(|e| EnrichError::Provider {
                message: format!("Failed to parse Gemini response: {e}"),
                status_code: None,
            })?;

        Ok(LlmResponse {
            text: gen_resp.text(),
            model: gen_resp
                .model_version
                .clone()
                .unwrap_or_else(|| self.model.clone()),
            tokens_used: gen_resp.usage_metadata.and_then(|u| u.total_token_count),
            latency_ms: start.elapsed().as_millis() as u64,
        })
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemCategory;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const GENERATE_PATH: &str = "/models/gemini-2.5-flash:generateContent";

    fn provider_for(server: &MockServer) -> GeminiProvider {
        GeminiProvider::new(
            "test-key",
            "gemini-2.5-flash",
            &server.uri(),
            Duration::from_secs(5),
        )
    }

    fn text_response(parts: &[&str]) -> serde_json::Value {
        let parts: Vec<_> = parts.iter().map(|t| json!({ "text": t })).collect();
        json!({
            "candidates": [{
                "content": { "role": "model", "parts": parts },
                "finishReason": "STOP"
            }],
            "usageMetadata": { "promptTokenCount": 80, "totalTokenCount": 120 },
            "modelVersion": "gemini-2.5-flash"
        })
    }

    #[tokio::test]
    async fn test_generate_sends_prompt_and_key() {
        let server = MockServer::start().await;
        let request = LlmRequest::suggest_description(ItemCategory::Material, "manta asfáltica");

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({
                "contents": [{ "role": "user", "parts": [{ "text": request.prompt.clone() }] }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_response(&[
                "Manta asfáltica aluminizada 3mm.",
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let response = provider_for(&server).generate(&request).await.unwrap();
        assert_eq!(response.text, "Manta asfáltica aluminizada 3mm.");
        assert_eq!(response.model, "gemini-2.5-flash");
        assert_eq!(response.tokens_used, Some(120));
    }

    #[tokio::test]
    async fn test_generate_concatenates_parts_without_trimming() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(text_response(&["  Primeira parte.", " Segunda.\n"])),
            )
            .mount(&server)
            .await;

        let request = LlmRequest::refine_notes("", "Laje");
        let response = provider_for(&server).generate(&request).await.unwrap();
        assert_eq!(response.text, "  Primeira parte. Segunda.\n");
    }

    #[tokio::test]
    async fn test_generate_skips_thought_parts() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": { "parts": [
                        { "text": "pensando...", "thought": true },
                        { "text": "Texto final." }
                    ] }
                }]
            })))
            .mount(&server)
            .await;

        let request = LlmRequest::refine_notes("", "Laje");
        let response = provider_for(&server).generate(&request).await.unwrap();
        assert_eq!(response.text, "Texto final.");
        assert_eq!(response.model, "gemini-2.5-flash");
        assert_eq!(response.tokens_used, None);
    }

    #[tokio::test]
    async fn test_generate_without_candidates_yields_empty_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "promptFeedback": { "blockReason": "SAFETY" }
            })))
            .mount(&server)
            .await;

        let request = LlmRequest::refine_notes("", "Laje");
        let response = provider_for(&server).generate(&request).await.unwrap();
        assert!(response.text.is_empty());
    }

    #[tokio::test]
    async fn test_generate_http_error_carries_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
            .mount(&server)
            .await;

        let request = LlmRequest::refine_notes("", "Laje");
        let err = provider_for(&server).generate(&request).await.unwrap_err();
        match err {
            EnrichError::Provider {
                message,
                status_code,
            } => {
                assert_eq!(status_code, Some(429));
                assert!(message.contains("quota exceeded"), "Got: {message}");
            }
            other => panic!("Expected provider error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_generate_malformed_body_is_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let request = LlmRequest::refine_notes("", "Laje");
        let err = provider_for(&server).generate(&request).await.unwrap_err();
        assert!(matches!(
            err,
            EnrichError::Provider {
                status_code: None,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_generate_connection_refused_is_provider_error() {
        // Nothing listens on port 9 locally
        let provider = GeminiProvider::new(
            "test-key",
            "gemini-2.5-flash",
            "http://127.0.0.1:9",
            Duration::from_secs(2),
        );
        let request = LlmRequest::refine_notes("", "Laje");
        let err = provider.generate(&request).await.unwrap_err();
        assert!(err.to_string().contains("Gemini request failed"));
    }

    #[test]
    fn test_url_trims_trailing_slash() {
        let provider = GeminiProvider::new(
            "k",
            "gemini-2.5-flash",
            "https://generativelanguage.googleapis.com/v1beta/",
            Duration::from_secs(1),
        );
        assert_eq!(
            provider.url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
