//! # grapewatch-core
//!
//! Foundation crate for the grape disease analysis backend.
//! Defines the verdict model, errors, config, tracing setup, and the
//! collaborator traits. Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::GrapewatchConfig;
pub use errors::{
    DatasetError, GrapewatchError, GrapewatchErrorCode, GrapewatchResult, InferenceError,
};
pub use models::{AnalysisOutcome, ParseOutcome, Verdict};
pub use traits::IInferenceProvider;
