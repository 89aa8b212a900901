//! AnalysisEngine: builds the configured provider and wraps it in an extractor.
//!
//! A provider that cannot be built (no credential, unknown name) does not
//! fail startup. The engine runs degraded on `OfflineProvider`, and every
//! analysis then yields the no-response verdict.

use std::sync::Arc;

use grapewatch_core::config::InferenceConfig;
use grapewatch_core::{AnalysisOutcome, GrapewatchResult, IInferenceProvider, InferenceError, Verdict};
use tracing::{info, warn};

use crate::extraction::VerdictExtractor;
use crate::providers::{GeminiProvider, OfflineProvider};

#[derive(Debug, Clone)]
pub struct AnalysisEngine {
    extractor: VerdictExtractor,
    degraded: Option<String>,
}

impl AnalysisEngine {
    /// Build the configured provider, falling back to offline mode on failure.
    pub fn from_config(config: &InferenceConfig) -> Self {
        match Self::try_from_config(config) {
            Ok(engine) => engine,
            Err(e) => {
                warn!(provider = %config.provider, error = %e, "Inference provider unavailable, running offline");
                let reason = e.to_string();
                Self {
                    extractor: VerdictExtractor::new(Arc::new(OfflineProvider::new(reason.clone()))),
                    degraded: Some(reason),
                }
            }
        }
    }

    /// Build the configured provider, returning the error instead of degrading.
    pub fn try_from_config(config: &InferenceConfig) -> GrapewatchResult<Self> {
        let provider: Arc<dyn IInferenceProvider> = match config.provider.as_str() {
            "gemini" => Arc::new(GeminiProvider::from_config(config)?),
            "offline" => Arc::new(OfflineProvider::default()),
            other => {
                return Err(InferenceError::Unavailable {
                    reason: format!("unknown provider '{other}'"),
                }
                .into())
            }
        };
        info!(provider = provider.name(), model = %config.model, "Analysis engine ready");
        Ok(Self::with_provider(provider))
    }

    /// Wrap an explicit provider.
    pub fn with_provider(provider: Arc<dyn IInferenceProvider>) -> Self {
        Self {
            extractor: VerdictExtractor::new(provider),
            degraded: None,
        }
    }

    pub fn extractor(&self) -> &VerdictExtractor {
        &self.extractor
    }

    /// True when the configured provider could not be built.
    pub fn is_degraded(&self) -> bool {
        self.degraded.is_some()
    }

    /// Why the engine is running offline, if it is.
    pub fn degraded_reason(&self) -> Option<&str> {
        self.degraded.as_deref()
    }

    pub fn analyze(&self, image: &[u8]) -> AnalysisOutcome {
        self.extractor.analyze(image)
    }

    pub fn extract(&self, image: &[u8]) -> (Verdict, Option<String>) {
        self.extractor.extract(image)
    }
}
