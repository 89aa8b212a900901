//! Dataset sources and the TTL cache in front of them.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use grapewatch_core::config::DatasetConfig;
use grapewatch_core::DatasetError;
use moka::sync::Cache;
use tracing::{debug, info};

use crate::table::FungicideTable;

/// The external step that produces the fungicide dataset.
pub trait IFungicideSource: Send + Sync {
    fn name(&self) -> &str;

    fn fetch(&self) -> Result<FungicideTable, DatasetError>;
}

/// Reads a pre-fetched dataset saved as a JSON array of records.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Build from config. Fails when no path is configured.
    pub fn from_config(config: &DatasetConfig) -> Result<Self, DatasetError> {
        config
            .path
            .as_deref()
            .map(Self::new)
            .ok_or(DatasetError::NotConfigured)
    }
}

impl IFungicideSource for JsonFileSource {
    fn name(&self) -> &str {
        "json-file"
    }

    fn fetch(&self) -> Result<FungicideTable, DatasetError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|source| DatasetError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        FungicideTable::from_json_records(&contents)
    }
}

/// Single cache slot; the dataset is loaded as a whole.
const DATASET_KEY: &str = "fungicide-dataset";

/// Serves the cleaned dataset from memory until its TTL expires.
pub struct CachedFungicideSource {
    source: Arc<dyn IFungicideSource>,
    cache: Cache<&'static str, Arc<FungicideTable>>,
    drop_empty_rows: bool,
}

impl CachedFungicideSource {
    pub fn new(source: Arc<dyn IFungicideSource>, config: &DatasetConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(1)
            .time_to_live(Duration::from_secs(config.cache_ttl_secs))
            .build();
        Self {
            source,
            cache,
            drop_empty_rows: config.drop_empty_rows,
        }
    }

    /// The cleaned dataset, fetched again when expired or `force_refresh` is set.
    /// A dataset with no rows left after cleaning is an error and is not cached.
    pub fn load(&self, force_refresh: bool) -> Result<Arc<FungicideTable>, DatasetError> {
        if force_refresh {
            self.cache.invalidate(DATASET_KEY);
        } else if let Some(table) = self.cache.get(DATASET_KEY) {
            debug!(rows = table.row_count(), "Fungicide dataset served from cache");
            return Ok(table);
        }

        let mut table = self.source.fetch()?;
        if self.drop_empty_rows {
            table = table.drop_empty_rows();
        }
        if table.is_empty() {
            return Err(DatasetError::Empty);
        }

        let table = Arc::new(table);
        self.cache.insert(DATASET_KEY, Arc::clone(&table));
        info!(
            source = self.source.name(),
            rows = table.row_count(),
            columns = table.column_count(),
            "Fungicide dataset loaded"
        );
        Ok(table)
    }

    /// Drop the cached dataset.
    pub fn clear(&self) {
        self.cache.invalidate(DATASET_KEY);
    }
}
