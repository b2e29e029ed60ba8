//! Adscope LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `adscope-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `GeminiProvider`: Hosted Gemini generateContent API integration
//!
//! # Examples
//!
//! ```
//! use adscope_llm::MockProvider;
//! use adscope_domain::traits::LlmProvider;
//!
//! let provider = MockProvider::new(r#"{"ad_type": "game"}"#);
//! let result = provider.generate("test prompt").unwrap();
//! assert_eq!(result, r#"{"ad_type": "game"}"#);
//! ```

#![warn(missing_docs)]

pub mod gemini;

use adscope_domain::traits::LlmProvider as LlmProviderTrait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use gemini::GeminiProvider;

/// Errors that can occur while calling the external model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LlmError {
    /// Network failure or expired timeout; the two are not distinguished
    #[error("Transport error: {0}")]
    Transport(String),

    /// Non-success HTTP status from the upstream service
    #[error("Upstream returned status {0}")]
    Status(u16),

    /// Response missing the expected candidate/content/parts/text nesting
    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),

    /// Upstream produced a candidate with no usable text
    #[error("Empty response from upstream")]
    EmptyResponse,
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
///
/// # Examples
///
/// ```
/// use adscope_llm::MockProvider;
/// use adscope_domain::traits::LlmProvider;
///
/// // Simple fixed response
/// let provider = MockProvider::new("Fixed response");
/// assert_eq!(provider.generate("any prompt").unwrap(), "Fixed response");
///
/// // Per-prompt responses
/// let mut provider = MockProvider::default();
/// provider.add_response("prompt1", "response1");
/// assert_eq!(provider.generate("prompt1").unwrap(), "response1");
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: Result<String, LlmError>,
    responses: Arc<Mutex<HashMap<String, Result<String, LlmError>>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: Ok(response.into()),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a MockProvider that fails every call with the given error
    pub fn failing(error: LlmError) -> Self {
        Self {
            default_response: Err(error),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), Ok(response.into()));
    }

    /// Configure a specific prompt to fail with the given error
    pub fn add_error(&mut self, prompt: impl Into<String>, error: LlmError) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), Err(error));
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(prompt) {
            return response.clone();
        }

        self.default_response.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_provider_default() {
        let provider = MockProvider::new("Test response");
        assert_eq!(provider.generate("any prompt").unwrap(), "Test response");
    }

    #[test]
    fn test_mock_provider_specific_responses() {
        let mut provider = MockProvider::default();
        provider.add_response("hello", "world");

        assert_eq!(provider.generate("hello").unwrap(), "world");
        assert_eq!(
            provider.generate("unknown").unwrap(),
            "Default mock response"
        );
    }

    #[test]
    fn test_mock_provider_call_count() {
        let provider = MockProvider::new("test");

        assert_eq!(provider.call_count(), 0);
        provider.generate("prompt1").unwrap();
        provider.generate("prompt2").unwrap();
        assert_eq!(provider.call_count(), 2);

        provider.reset_call_count();
        assert_eq!(provider.call_count(), 0);
    }

    #[test]
    fn test_mock_provider_errors() {
        let mut provider = MockProvider::default();
        provider.add_error("bad prompt", LlmError::Status(500));

        assert_eq!(
            provider.generate("bad prompt").unwrap_err(),
            LlmError::Status(500)
        );

        let failing = MockProvider::failing(LlmError::EmptyResponse);
        assert_eq!(failing.generate("anything").unwrap_err(), LlmError::EmptyResponse);
    }

    #[test]
    fn test_mock_provider_clone_shares_state() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.generate("test").unwrap();

        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }
}
