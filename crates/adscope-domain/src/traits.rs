//! Trait definitions for external interactions
//!
//! These traits define the boundary between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

/// Trait for the external text-generation service
///
/// Implemented by the infrastructure layer (adscope-llm)
pub trait LlmProvider {
    /// Error type for provider operations
    type Error;

    /// Generate text for a prompt
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;
}
