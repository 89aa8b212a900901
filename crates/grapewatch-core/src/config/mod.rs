pub mod dataset_config;
pub mod inference_config;
pub mod observability_config;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{GrapewatchError, GrapewatchResult};

pub use dataset_config::DatasetConfig;
pub use inference_config::InferenceConfig;
pub use observability_config::ObservabilityConfig;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GrapewatchConfig {
    pub inference: InferenceConfig,
    pub dataset: DatasetConfig,
    pub observability: ObservabilityConfig,
}

impl GrapewatchConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load config from a TOML file on disk.
    pub fn from_file(path: impl AsRef<Path>) -> GrapewatchResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| GrapewatchError::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml(&contents)?;
        debug!(path = %path.display(), provider = %config.inference.provider, "Loaded config");
        Ok(config)
    }
}
