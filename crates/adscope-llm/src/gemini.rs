//! Gemini Provider Implementation
//!
//! Integration with the hosted Gemini `generateContent` API.
//!
//! # Features
//!
//! - Async HTTP communication via reqwest
//! - Configurable model, endpoint, and generation parameters
//! - Bounded request timeout; expiry surfaces as a transport error
//!
//! The provider performs no retries: retry policy, if any, belongs to a
//! calling orchestrator.

use crate::LlmError;
use adscope_domain::traits::LlmProvider as LlmProviderTrait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-8b";

/// Default timeout for model requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Low sampling temperature to bias toward deterministic structured output
pub const DEFAULT_TEMPERATURE: f64 = 0.1;

/// Output token bound keeping responses to one JSON object
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 2000;

/// Provider for the hosted Gemini generateContent API
pub struct GeminiProvider {
    endpoint: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
    temperature: f64,
    max_output_tokens: u32,
}

/// Request body for the generateContent API
#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent {
    role: String,
    parts: Vec<RequestPart>,
}

#[derive(Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    max_output_tokens: u32,
}

/// Response from the generateContent API.
///
/// Every level is optional: absence of any nesting level is a handled error,
/// not a deserialization failure.
#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GeminiProvider {
    /// Create a new provider with default endpoint, model, and parameters.
    ///
    /// The API key is an explicit argument; resolving it from the process
    /// environment is the caller's concern.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
            client: build_client(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }

    /// Set the model to use
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set a non-default API endpoint (e.g. a regional mirror or test server)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = build_client(timeout);
        self
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the maximum output token bound
    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    /// Generate text for a prompt
    ///
    /// Sends one user-role message and returns the text of the first part of
    /// the first candidate.
    ///
    /// # Errors
    ///
    /// - [`LlmError::Transport`] on network failure or timeout
    /// - [`LlmError::Status`] on a non-success HTTP status
    /// - [`LlmError::MalformedResponse`] when the candidate/parts/text
    ///   nesting is missing
    /// - [`LlmError::EmptyResponse`] when the text payload is blank
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        );

        let body = GenerateRequest {
            contents: vec![RequestContent {
                role: "user".to_string(),
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            },
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LlmError::Status(response.status().as_u16()));
        }

        let data: GenerateResponse = response
            .json()
            .await
            .map_err(|e| LlmError::MalformedResponse(format!("not a generateContent body: {}", e)))?;

        extract_text(data)
    }
}

/// Pull the text payload out of a response, validating each nesting level.
fn extract_text(response: GenerateResponse) -> Result<String, LlmError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::MalformedResponse("no candidates".to_string()))?;

    let content = candidate
        .content
        .ok_or_else(|| LlmError::MalformedResponse("candidate has no content".to_string()))?;

    let part = content
        .parts
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::MalformedResponse("content has no parts".to_string()))?;

    if part.text.trim().is_empty() {
        return Err(LlmError::EmptyResponse);
    }

    Ok(part.text)
}

fn build_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap()
}

impl LlmProviderTrait for GeminiProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        // Blocking wrapper for async function
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(async { self.generate(prompt).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> GenerateResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_provider_defaults() {
        let provider = GeminiProvider::new("key");
        assert_eq!(provider.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(provider.model, DEFAULT_MODEL);
        assert_eq!(provider.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(provider.max_output_tokens, DEFAULT_MAX_OUTPUT_TOKENS);
    }

    #[test]
    fn test_provider_builders() {
        let provider = GeminiProvider::new("key")
            .with_model("gemini-1.5-pro")
            .with_temperature(0.0)
            .with_max_output_tokens(512);
        assert_eq!(provider.model, "gemini-1.5-pro");
        assert_eq!(provider.temperature, 0.0);
        assert_eq!(provider.max_output_tokens, 512);
    }

    #[test]
    fn test_extract_text_happy_path() {
        let response = parse(
            r#"{"candidates": [{"content": {"parts": [{"text": "{\"ad_type\": \"game\"}"}]}}]}"#,
        );
        assert_eq!(extract_text(response).unwrap(), "{\"ad_type\": \"game\"}");
    }

    #[test]
    fn test_extract_text_no_candidates() {
        let response = parse(r#"{"candidates": []}"#);
        assert!(matches!(
            extract_text(response),
            Err(LlmError::MalformedResponse(_))
        ));

        let response = parse(r#"{}"#);
        assert!(matches!(
            extract_text(response),
            Err(LlmError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_extract_text_missing_content_or_parts() {
        let response = parse(r#"{"candidates": [{}]}"#);
        assert!(matches!(
            extract_text(response),
            Err(LlmError::MalformedResponse(_))
        ));

        let response = parse(r#"{"candidates": [{"content": {"parts": []}}]}"#);
        assert!(matches!(
            extract_text(response),
            Err(LlmError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_extract_text_empty_text() {
        let response = parse(r#"{"candidates": [{"content": {"parts": [{"text": "   "}]}}]}"#);
        assert_eq!(extract_text(response), Err(LlmError::EmptyResponse));
    }
}
