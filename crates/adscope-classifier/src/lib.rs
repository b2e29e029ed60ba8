//! Adscope Classifier
//!
//! Turns free-text advertisement descriptions into schema-complete
//! Classification Records by delegating language understanding to an
//! external generative model, then deterministically recovering and
//! normalizing its output.
//!
//! # Architecture
//!
//! ```text
//! AdMetadata → PromptBuilder → LlmProvider → ResponseParser → SchemaNormalizer → ClassificationRecord
//! ```
//!
//! # Key Features
//!
//! - **Prompt Engineering**: fixed instruction template plus rendered ad
//!   fields, with user override support
//! - **Robust JSON Recovery**: fenced, bare, and prose-wrapped model output
//!   all parse; brace-span slicing as the fallback strategy
//! - **Total Normalization**: once parsing succeeds, a schema-complete
//!   record is guaranteed - missing leaves default, wrong types coerce
//! - **No Hidden Policy**: no retries, no logging-and-swallowing; every
//!   failure surfaces as a typed error before normalization
//!
//! # Example Usage
//!
//! ```no_run
//! use adscope_classifier::{AdClassifier, ClassifierConfig};
//! use adscope_domain::AdMetadata;
//! use adscope_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = MockProvider::new(r#"{"ad_type": "game"}"#);
//! let classifier = AdClassifier::new(provider, ClassifierConfig::default());
//!
//! let metadata = AdMetadata {
//!     ads_name: "Coin Quest".to_string(),
//!     ads_summary: "Earn coins by completing daily quests".to_string(),
//!     ..AdMetadata::default()
//! };
//!
//! let record = classifier.classify(metadata).await?;
//! assert_eq!(record.ad_type, "game");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod classifier;
mod config;
mod error;
mod normalizer;
mod parser;
mod prompt;


pub use classifier::AdClassifier;
pub use config::ClassifierConfig;
pub use error::ClassifierError;
pub use normalizer::normalize;
pub use parser::parse_model_response;
pub use prompt::PromptBuilder;
