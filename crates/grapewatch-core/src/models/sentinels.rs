//! Fixed verdict strings shared by the extractor, the prompt, and consumers.
//!
//! The healthy triple is what the model is told to emit when it sees no
//! disease; the unknown label marks every failure path. The two must never
//! collide.

/// Label for "the image could not be analyzed".
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Explanation used when the inference call produced no text at all.
pub const NO_RESPONSE_EXPLANATION: &str = "Failed to get response from AI.";

/// Label the model reports for a plant with no visible disease.
pub const HEALTHY_LABEL: &str = "Sağlıklı";

/// Confidence the model reports alongside the healthy label.
pub const HEALTHY_CONFIDENCE: f64 = 1.0;

/// Explanation the model reports alongside the healthy label.
pub const HEALTHY_EXPLANATION: &str = "Hastalık belirtisi tespit edilmedi.";

/// Diagnostic prefix when a brace-delimited span was found but did not decode.
pub const EMBEDDED_INVALID_PREFIX: &str = "AI yanıtı ayrıştırılamadı (regex de başarısız). Ham yanıt: ";

/// Diagnostic prefix when the response contained no brace-delimited span.
pub const NO_RECORD_PREFIX: &str = "AI yanıtı ayrıştırılamadı. Ham yanıt: ";
