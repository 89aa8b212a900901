//! Analysis outcome: the verdict plus how it was obtained.

use serde::{Deserialize, Serialize};

use super::verdict::Verdict;

/// Which terminal branch of the extraction produced the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseOutcome {
    /// The normalized response decoded as a record.
    Direct,
    /// A brace-delimited span inside the response decoded as a record.
    Embedded,
    /// The inference provider returned no text.
    NoResponse,
    /// A brace-delimited span was found but did not decode.
    EmbeddedInvalid,
    /// No brace-delimited span was found.
    NoRecordFound,
}

impl ParseOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, Self::Direct | Self::Embedded)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Embedded => "embedded",
            Self::NoResponse => "no_response",
            Self::EmbeddedInvalid => "embedded_invalid",
            Self::NoRecordFound => "no_record_found",
        }
    }
}

impl std::fmt::Display for ParseOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one extraction. The raw response is kept for display and audit
/// even when decoding failed.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    pub verdict: Verdict,
    pub raw_response: Option<String>,
    pub outcome: ParseOutcome,
}

impl AnalysisOutcome {
    /// Split into the `(verdict, raw_response)` pair handed to callers.
    pub fn into_pair(self) -> (Verdict, Option<String>) {
        (self.verdict, self.raw_response)
    }
}

impl From<AnalysisOutcome> for (Verdict, Option<String>) {
    fn from(outcome: AnalysisOutcome) -> Self {
        outcome.into_pair()
    }
}
