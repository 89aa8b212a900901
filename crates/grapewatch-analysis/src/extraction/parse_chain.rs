//! Ordered parse attempts over a model response.
//!
//! 1. decode the normalized text as a record
//! 2. decode the greedy first-`{`-to-last-`}` span
//! 3. give up with a diagnostic verdict embedding the raw text

use std::sync::OnceLock;

use grapewatch_core::{ParseOutcome, Verdict};
use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

use super::normalize::normalize;

static RECORD_SPAN: OnceLock<Regex> = OnceLock::new();

fn record_span_pattern() -> &'static Regex {
    RECORD_SPAN.get_or_init(|| Regex::new(r"(?s)\{.*\}").expect("record span pattern is valid"))
}

/// Decode text as a three-field verdict record. Missing fields, wrong types,
/// non-object JSON, and an empty label are all rejected. A repeated key keeps
/// its last value.
pub fn decode_record(text: &str) -> Result<Verdict, serde_json::Error> {
    let value: Value = serde_json::from_str(text)?;
    serde_json::from_value(value)
}

/// Greedy span from the first `{` to the last `}`, newlines included.
pub fn find_record_span(text: &str) -> Option<&str> {
    record_span_pattern().find(text).map(|m| m.as_str().trim())
}

/// Run the parse chain over a non-empty raw response.
pub fn parse_response(raw: &str) -> (Verdict, ParseOutcome) {
    let cleaned = normalize(raw);

    let direct_err = match decode_record(cleaned) {
        Ok(verdict) => {
            debug!(raw_response = raw, "Parsed verdict directly");
            return (verdict, ParseOutcome::Direct);
        }
        Err(e) => e,
    };
    debug!(error = %direct_err, "Direct decode failed, searching for embedded record");

    let Some(span) = find_record_span(cleaned) else {
        warn!(raw_response = raw, "No record span in model response");
        return (Verdict::unparseable(raw, false), ParseOutcome::NoRecordFound);
    };

    match decode_record(span) {
        Ok(verdict) => {
            debug!(record = span, raw_response = raw, "Parsed verdict from embedded record");
            (verdict, ParseOutcome::Embedded)
        }
        Err(e) => {
            warn!(error = %e, raw_response = raw, "Embedded record failed to decode");
            (Verdict::unparseable(raw, true), ParseOutcome::EmbeddedInvalid)
        }
    }
}
