//! Provider that never answers. Stands in for a real provider when none can
//! be built, so analysis degrades to the no-response verdict.

use grapewatch_core::{IInferenceProvider, InferenceError};

#[derive(Debug, Clone)]
pub struct OfflineProvider {
    reason: String,
}

impl OfflineProvider {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl Default for OfflineProvider {
    fn default() -> Self {
        Self::new("offline mode")
    }
}

impl IInferenceProvider for OfflineProvider {
    fn name(&self) -> &str {
        "offline"
    }

    fn analyze_image(&self, _image: &[u8], _instruction: &str) -> Result<String, InferenceError> {
        Err(InferenceError::Unavailable {
            reason: self.reason.clone(),
        })
    }
}
