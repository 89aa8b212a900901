//! Inference provider errors.

use super::error_code::GrapewatchErrorCode;

/// Errors raised by an inference provider.
///
/// These never reach extractor callers: the extractor logs them and
/// treats the call as having returned nothing.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("no credential configured (checked {env_var})")]
    MissingCredential { env_var: String },

    #[error("inference provider unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("HTTP request failed: {message}")]
    Transport { message: String },

    #[error("inference service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("prompt blocked by inference service: {reason}")]
    Blocked { reason: String },

    #[error("response contained no candidate text")]
    EmptyResponse,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GrapewatchErrorCode for InferenceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingCredential { .. } => "INFERENCE_MISSING_CREDENTIAL",
            Self::Unavailable { .. } => "INFERENCE_UNAVAILABLE",
            Self::Transport { .. } => "INFERENCE_TRANSPORT",
            Self::Status { .. } => "INFERENCE_STATUS",
            Self::Blocked { .. } => "INFERENCE_BLOCKED",
            Self::EmptyResponse => "INFERENCE_EMPTY_RESPONSE",
            Self::Serialization(_) => "INFERENCE_SERIALIZATION",
        }
    }
}
