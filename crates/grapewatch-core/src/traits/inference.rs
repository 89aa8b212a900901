//! `IInferenceProvider` trait — the outbound boundary to a vision model.

use crate::errors::InferenceError;

/// A remote image-understanding service.
///
/// Transport, authentication, quota, and timeout handling all live behind
/// this trait. Callers only distinguish "text came back" (`Ok` with
/// non-empty text) from "nothing came back" (anything else).
pub trait IInferenceProvider: Send + Sync {
    /// Short provider name for logs.
    fn name(&self) -> &str;

    /// Send one image and an instruction; return the model's raw text.
    fn analyze_image(&self, image: &[u8], instruction: &str) -> Result<String, InferenceError>;
}
