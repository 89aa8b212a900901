//! Fungicide dataset configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Path to the pre-fetched dataset (JSON array of records).
    pub path: Option<String>,
    /// How long a loaded dataset is served before it is fetched again.
    pub cache_ttl_secs: u64,
    /// Drop rows where every cell is empty.
    pub drop_empty_rows: bool,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: None,
            cache_ttl_secs: 3600,
            drop_empty_rows: true,
        }
    }
}
