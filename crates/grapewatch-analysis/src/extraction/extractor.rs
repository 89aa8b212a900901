//! VerdictExtractor: image bytes in, verdict and raw response out.

use std::sync::Arc;

use grapewatch_core::{AnalysisOutcome, IInferenceProvider, ParseOutcome, Verdict};
use tracing::{info, warn};

use super::parse_chain::parse_response;
use crate::prompt;

/// Sends an image to an inference provider and recovers a verdict from
/// whatever text comes back.
///
/// Holds no mutable state; one extractor can serve concurrent callers as
/// long as the provider tolerates concurrent calls. No retries are made.
#[derive(Clone)]
pub struct VerdictExtractor {
    provider: Arc<dyn IInferenceProvider>,
    instruction: String,
}

impl VerdictExtractor {
    pub fn new(provider: Arc<dyn IInferenceProvider>) -> Self {
        Self {
            provider,
            instruction: prompt::instruction(),
        }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// The instruction sent with every image.
    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    /// Analyze one image. Never fails: every failure is a verdict with the
    /// unknown label.
    pub fn analyze(&self, image: &[u8]) -> AnalysisOutcome {
        let raw = match self.provider.analyze_image(image, &self.instruction) {
            Ok(text) => text,
            Err(e) => {
                warn!(provider = self.provider.name(), error = %e, "Inference call returned no response");
                return AnalysisOutcome {
                    verdict: Verdict::no_response(),
                    raw_response: None,
                    outcome: ParseOutcome::NoResponse,
                };
            }
        };

        if raw.is_empty() {
            warn!(provider = self.provider.name(), "Inference call returned empty text");
            return AnalysisOutcome {
                verdict: Verdict::no_response(),
                raw_response: Some(raw),
                outcome: ParseOutcome::NoResponse,
            };
        }

        let (verdict, outcome) = parse_response(&raw);
        info!(
            provider = self.provider.name(),
            outcome = %outcome,
            disease = verdict.disease_detected(),
            confidence = verdict.confidence_score(),
            "Image analyzed"
        );
        AnalysisOutcome {
            verdict,
            raw_response: Some(raw),
            outcome,
        }
    }

    /// Analyze one image and return `(verdict, raw_response)`.
    pub fn extract(&self, image: &[u8]) -> (Verdict, Option<String>) {
        self.analyze(image).into_pair()
    }
}

impl std::fmt::Debug for VerdictExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerdictExtractor")
            .field("provider", &self.provider.name())
            .finish()
    }
}
