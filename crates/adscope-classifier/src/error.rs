//! Error types for the classifier

use adscope_llm::LlmError;
use thiserror::Error;

/// Errors that can occur during classification
///
/// All variants short-circuit the pipeline before normalization; once
/// parsing succeeds, normalization is total and cannot fail.
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// The external model call failed before usable text was produced
    #[error("Upstream error: {0}")]
    Upstream(#[from] LlmError),

    /// The bounded classification timeout expired
    #[error("Classification timeout")]
    Timeout,

    /// Both JSON recovery strategies failed on the model output
    #[error("Could not recover JSON from model output: {snippet}")]
    JsonRecovery {
        /// Bounded snippet of the cleaned model output, for diagnostics
        snippet: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
