use super::{DatasetError, GrapewatchErrorCode, InferenceError};

/// Top-level error type for the grape analysis backend.
/// All subsystem errors convert into this via `From` impls.
#[derive(Debug, thiserror::Error)]
pub enum GrapewatchError {
    #[error("inference error: {0}")]
    Inference(#[from] InferenceError),

    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: String,
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GrapewatchErrorCode for GrapewatchError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Inference(e) => e.error_code(),
            Self::Dataset(e) => e.error_code(),
            Self::Config(_) => "CONFIG_INVALID",
            Self::ConfigIo { .. } => "CONFIG_IO",
            Self::Serialization(_) => "SERIALIZATION",
        }
    }
}

/// Convenience type alias.
pub type GrapewatchResult<T> = Result<T, GrapewatchError>;
