//! Command implementations

pub mod benchmark;
pub mod candidates;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark, sample_targets};
pub use candidates::{CandidateQuery, ConfigOverrides, find_candidates};
pub use solve::{GuessStep, SolveResult, solve_word};
