//! Inference providers.
//!
//! - `gemini` — Generative Language API over blocking HTTP
//! - `offline` — always unavailable; used when no credential is configured
//! - `mime` — image type sniffing for the request payload

pub mod gemini;
pub mod mime;
pub mod offline;

pub use gemini::GeminiProvider;
pub use offline::OfflineProvider;
