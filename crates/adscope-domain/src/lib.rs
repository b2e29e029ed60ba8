//! Adscope Domain Layer
//!
//! This crate contains the core data model for Adscope: the schema-complete
//! Classification Record produced for every advertisement, the lenient value
//! types that absorb loosely-typed model output, and the trait interface to
//! the external text-generation service.
//!
//! ## Key Concepts
//!
//! - **Classification Record**: the fixed-shape profile of one ad - category,
//!   audience, and five groups of named sub-scores
//! - **Score**: a numeric leaf that coerces numeric strings and retains
//!   anything it cannot coerce, instead of dropping it
//! - **Ad Metadata**: caller-supplied descriptive fields echoed through
//!   unchanged into the final record
//! - **Labels**: raw-key to localized-label lookup tables for presentation
//!   layers
//!
//! ## Architecture
//!
//! This crate holds pure data and trait seams only. Network, prompt, and
//! export concerns live in the other workspace crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod labels;
mod lenient;
pub mod metadata;
pub mod record;
pub mod score;
pub mod session;
pub mod traits;

// Re-exports for convenience
pub use metadata::AdMetadata;
pub use record::{
    BrandScores, ClassificationRecord, CommerceScores, EngagementScores, MotivationScores,
    PromoScores,
};
pub use score::Score;
pub use session::SessionLength;
