//! Verdict: the structured result of one disease analysis.

use serde::{Deserialize, Serialize};

use super::sentinels::{
    EMBEDDED_INVALID_PREFIX, HEALTHY_CONFIDENCE, HEALTHY_EXPLANATION, HEALTHY_LABEL,
    NO_RECORD_PREFIX, NO_RESPONSE_EXPLANATION, UNKNOWN_LABEL,
};

/// Disease verdict for a single image.
///
/// Always fully populated. Fields are read-only after construction; a new
/// `Verdict` is produced for every analysis.
///
/// `confidence_score` is expected in `[0.0, 1.0]` but is not enforced.
/// Consumers should use [`Verdict::confidence_in_range`] before relying on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawVerdict")]
pub struct Verdict {
    disease_detected: String,
    confidence_score: f64,
    explanation: String,
}

/// Wire shape of the record emitted by the model. All three fields are required.
#[derive(Debug, Deserialize)]
struct RawVerdict {
    disease_detected: String,
    confidence_score: f64,
    explanation: String,
}

impl TryFrom<RawVerdict> for Verdict {
    type Error = String;

    fn try_from(raw: RawVerdict) -> Result<Self, Self::Error> {
        if raw.disease_detected.is_empty() {
            return Err("disease_detected must not be empty".to_string());
        }
        Ok(Self {
            disease_detected: raw.disease_detected,
            confidence_score: raw.confidence_score,
            explanation: raw.explanation,
        })
    }
}

impl Verdict {
    pub fn new(
        disease_detected: impl Into<String>,
        confidence_score: f64,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            disease_detected: disease_detected.into(),
            confidence_score,
            explanation: explanation.into(),
        }
    }

    /// Verdict for an inference call that returned nothing.
    pub fn no_response() -> Self {
        Self::new(UNKNOWN_LABEL, 0.0, NO_RESPONSE_EXPLANATION)
    }

    /// The reserved "no disease detected" verdict.
    pub fn healthy() -> Self {
        Self::new(HEALTHY_LABEL, HEALTHY_CONFIDENCE, HEALTHY_EXPLANATION)
    }

    /// Verdict for a response that could not be decoded.
    ///
    /// `span_found` selects between the two diagnostics: a brace-delimited
    /// span existed but failed to decode, or there was no span at all.
    /// The raw response is embedded verbatim in both.
    pub fn unparseable(raw_response: &str, span_found: bool) -> Self {
        let prefix = if span_found {
            EMBEDDED_INVALID_PREFIX
        } else {
            NO_RECORD_PREFIX
        };
        Self::new(UNKNOWN_LABEL, 0.0, format!("{prefix}{raw_response}"))
    }

    pub fn disease_detected(&self) -> &str {
        &self.disease_detected
    }

    pub fn confidence_score(&self) -> f64 {
        self.confidence_score
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// True when the analysis failed in any way.
    pub fn is_unknown(&self) -> bool {
        self.disease_detected == UNKNOWN_LABEL
    }

    /// True when the model reported the reserved healthy label.
    pub fn is_healthy(&self) -> bool {
        self.disease_detected == HEALTHY_LABEL
    }

    pub fn confidence_in_range(&self) -> bool {
        (0.0..=1.0).contains(&self.confidence_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_response_is_unknown() {
        let v = Verdict::no_response();
        assert!(v.is_unknown());
        assert!(!v.is_healthy());
        assert_eq!(v.confidence_score(), 0.0);
        assert_eq!(v.explanation(), NO_RESPONSE_EXPLANATION);
    }

    #[test]
    fn test_healthy_is_not_unknown() {
        let v = Verdict::healthy();
        assert!(v.is_healthy());
        assert!(!v.is_unknown());
    }

    #[test]
    fn test_unparseable_messages_differ() {
        let a = Verdict::unparseable("raw", true);
        let b = Verdict::unparseable("raw", false);
        assert_ne!(a.explanation(), b.explanation());
        assert!(a.explanation().ends_with("raw"));
        assert!(b.explanation().ends_with("raw"));
    }

    #[test]
    fn test_rejects_empty_label() {
        let json = r#"{"disease_detected": "", "confidence_score": 0.5, "explanation": "x"}"#;
        assert!(serde_json::from_str::<Verdict>(json).is_err());
    }

    #[test]
    fn test_out_of_range_confidence_is_kept() {
        let json = r#"{"disease_detected": "Mildew", "confidence_score": 7.5, "explanation": ""}"#;
        let v: Verdict = serde_json::from_str(json).unwrap();
        assert_eq!(v.confidence_score(), 7.5);
        assert!(!v.confidence_in_range());
    }
}
