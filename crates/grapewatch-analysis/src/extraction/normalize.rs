//! Strip whitespace and markdown fences the model wraps around JSON.

const OPENING_FENCE: &str = "```json";
const CLOSING_FENCE: &str = "```";

/// Trim the response and remove a leading "```json" and a trailing "```".
pub fn normalize(text: &str) -> &str {
    let mut cleaned = text.trim();
    if let Some(rest) = cleaned.strip_prefix(OPENING_FENCE) {
        cleaned = rest.trim();
    }
    if let Some(rest) = cleaned.strip_suffix(CLOSING_FENCE) {
        cleaned = rest.trim();
    }
    cleaned
}
