//! # grapewatch-fungicide
//!
//! The fungicide efficacy dataset, as delivered pre-fetched by an external
//! retrieval step. Column names are whatever the source provides.
//!
//! ## Modules
//! - `table` — `FungicideTable`, JSON record loading, empty-row cleaning
//! - `search` — case-insensitive search and `TableSummary`
//! - `cross_reference` — treatments for a disease verdict
//! - `source` — `IFungicideSource`, file source, TTL-cached source

pub mod cross_reference;
pub mod search;
pub mod source;
pub mod table;

pub use cross_reference::treatments_for;
pub use search::TableSummary;
pub use source::{CachedFungicideSource, IFungicideSource, JsonFileSource};
pub use table::FungicideTable;
