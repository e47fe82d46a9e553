//! Filtering, scoring and solving
//!
//! Everything here is pure and synchronous; data parallelism comes from rayon.

mod config;
mod engine;
mod error;
mod filter;
mod frequency;
pub mod partition;
mod report;
mod scoring;

pub use config::{
    MAX_PERMUTATION_THRESHOLD, PartitionMetric, Preset, SolveConfig, SolverLimits, UnknownPreset,
};
pub use engine::{Solver, Turn};
pub use error::SolveError;
pub use filter::{filter_candidates, is_candidate};
pub use frequency::FrequencyModel;
pub use partition::{partition_cost, select_best_guess};
pub use report::{CandidateReport, FISHING_WORD_SIZE, MAX_RESULT_LIST_SIZE, compute_candidates};
pub use scoring::{ScoredWord, Scorer};
