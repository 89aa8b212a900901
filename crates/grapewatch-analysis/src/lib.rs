//! # grapewatch-analysis
//!
//! Disease analysis of grape plant photos through a remote vision model.
//!
//! ## Modules
//! - `prompt` — the fixed instruction sent with every image
//! - `extraction` — response normalization, the ordered parse chain, `VerdictExtractor`
//! - `providers` — Gemini HTTP provider, offline provider
//! - `engine` — provider selection from config, degraded-mode fallback

pub mod engine;
pub mod extraction;
pub mod prompt;
pub mod providers;

pub use engine::AnalysisEngine;
pub use extraction::VerdictExtractor;
