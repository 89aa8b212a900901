//! Stable, machine-readable error codes.

/// Maps an error variant to a code string that stays fixed across releases.
pub trait GrapewatchErrorCode {
    fn error_code(&self) -> &'static str;
}
