//! Best-effort extraction of a `Verdict` from free-text model output.
//!
//! ```text
//! image ──▶ provider ──▶ normalize ──▶ decode_record ──▶ find_record_span ──▶ unparseable
//!            (none?)       (fences)      (direct)          (embedded)          (diagnostic)
//! ```
//!
//! Every branch terminates in a fully populated `Verdict`. Nothing is
//! returned as an error.

pub mod extractor;
pub mod normalize;
pub mod parse_chain;

pub use extractor::VerdictExtractor;
pub use normalize::normalize;
pub use parse_chain::{decode_record, find_record_span, parse_response};
