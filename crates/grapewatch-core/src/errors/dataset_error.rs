//! Fungicide dataset errors.

use super::error_code::GrapewatchErrorCode;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("malformed dataset: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("dataset must be a JSON array of records")]
    NotARecordArray,

    #[error("dataset record {index} is not a flat object")]
    InvalidRecord { index: usize },

    #[error("dataset has no records")]
    Empty,

    #[error("dataset source not configured")]
    NotConfigured,
}

impl GrapewatchErrorCode for DatasetError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "DATASET_IO",
            Self::Malformed(_) => "DATASET_MALFORMED",
            Self::NotARecordArray => "DATASET_NOT_A_RECORD_ARRAY",
            Self::InvalidRecord { .. } => "DATASET_INVALID_RECORD",
            Self::Empty => "DATASET_EMPTY",
            Self::NotConfigured => "DATASET_NOT_CONFIGURED",
        }
    }
}
