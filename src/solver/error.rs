//! Solve failures

use crate::core::{ConstraintError, WordError};
use thiserror::Error;

/// Why a solve ended without finding the solution
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// No dictionary word is consistent with the feedback so far
    #[error("no candidates left after {} guesses", .guesses.len())]
    EmptyCandidateSet { guesses: Vec<String> },
    #[error("attempt budget of {attempts} exhausted")]
    BudgetExceeded { attempts: usize, guesses: Vec<String> },
    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),
    #[error("first guess has {actual} letters but the solution has {expected}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error(transparent)]
    Constraint(#[from] ConstraintError),
}

impl SolveError {
    /// Guesses made before the solve stopped
    #[must_use]
    pub fn guesses(&self) -> &[String] {
        match self {
            Self::EmptyCandidateSet { guesses } | Self::BudgetExceeded { guesses, .. } => guesses,
            Self::InvalidWord(_) | Self::LengthMismatch { .. } | Self::Constraint(_) => &[],
        }
    }
}
