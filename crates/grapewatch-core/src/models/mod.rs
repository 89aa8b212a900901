pub mod analysis_outcome;
pub mod sentinels;
pub mod verdict;

pub use analysis_outcome::{AnalysisOutcome, ParseOutcome};
pub use verdict::Verdict;
