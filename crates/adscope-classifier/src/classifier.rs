//! Core classifier implementation

use crate::config::ClassifierConfig;
use crate::error::ClassifierError;
use crate::normalizer::normalize;
use crate::parser::parse_model_response;
use crate::prompt::PromptBuilder;
use adscope_domain::traits::LlmProvider;
use adscope_domain::{AdMetadata, ClassificationRecord};
use adscope_llm::LlmError;
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info};

/// The classifier turns one ad's metadata into a Classification Record
///
/// Stateless apart from its read-only configuration: each call is
/// independent, so arbitrarily many classifications may run concurrently in
/// separate invocations without coordination.
pub struct AdClassifier<L>
where
    L: LlmProvider<Error = LlmError>,
{
    provider: Arc<L>,
    config: ClassifierConfig,
}

impl<L> AdClassifier<L>
where
    L: LlmProvider<Error = LlmError> + Send + Sync + 'static,
{
    /// Create a new classifier
    pub fn new(provider: L, config: ClassifierConfig) -> Self {
        Self {
            provider: Arc::new(provider),
            config,
        }
    }

    /// Classify one advertisement.
    ///
    /// Builds the prompt, calls the external model under the configured
    /// timeout, recovers the JSON object from the raw response, and
    /// normalizes it into a schema-complete record with the input metadata
    /// echoed in. Any upstream or recovery failure short-circuits before
    /// normalization; no partial record is ever returned.
    pub async fn classify(
        &self,
        metadata: AdMetadata,
    ) -> Result<ClassificationRecord, ClassifierError> {
        let prompt = PromptBuilder::new(metadata.clone()).build();

        debug!("prompt length: {} chars", prompt.len());

        let raw = timeout(self.config.request_timeout(), self.call_provider(&prompt))
            .await
            .map_err(|_| ClassifierError::Timeout)??;

        debug!("model response length: {} chars", raw.len());

        let parsed = parse_model_response(&raw)?;
        let record = normalize(parsed, &metadata);

        info!(
            "classified ad '{}' as '{}'",
            metadata.ads_name, record.ad_type
        );

        Ok(record)
    }

    /// Call the provider on a blocking thread
    async fn call_provider(&self, prompt: &str) -> Result<String, ClassifierError> {
        let provider = Arc::clone(&self.provider);
        let prompt = prompt.to_string();

        tokio::task::spawn_blocking(move || {
            provider
                .generate(&prompt)
                .map_err(ClassifierError::Upstream)
        })
        .await
        .map_err(|e| {
            ClassifierError::Upstream(LlmError::Transport(format!("task join error: {}", e)))
        })?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adscope_llm::MockProvider;

    #[tokio::test]
    async fn test_classify_minimal_response() {
        let provider = MockProvider::new(r#"{"ad_type": "app"}"#);
        let classifier = AdClassifier::new(provider, ClassifierConfig::default());

        let record = classifier.classify(AdMetadata::default()).await.unwrap();
        assert_eq!(record.ad_type, "app");
        assert_eq!(record.motivation.fun.as_f64(), Some(0.0));
    }

    #[tokio::test]
    async fn test_classify_propagates_upstream_error() {
        let provider = MockProvider::failing(LlmError::EmptyResponse);
        let classifier = AdClassifier::new(provider, ClassifierConfig::default());

        let result = classifier.classify(AdMetadata::default()).await;
        assert!(matches!(
            result,
            Err(ClassifierError::Upstream(LlmError::EmptyResponse))
        ));
    }
}
