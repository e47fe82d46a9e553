//! Word solving command
//!
//! Solves a specific target word and returns the solution path.

use crate::core::{Pattern, Word};
use crate::solver::{SolveError, Solver, Turn};

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: String,
    pub steps: Vec<GuessStep>,
    /// Why the solve stopped short, if it did
    pub failure: Option<SolveError>,
}

impl SolveResult {
    #[must_use]
    pub const fn success(&self) -> bool {
        self.failure.is_none()
    }

    /// Guesses in the order they were made
    #[must_use]
    pub fn guesses(&self) -> Vec<&str> {
        self.steps.iter().map(|step| step.word.as_str()).collect()
    }
}

/// A single guess step in the solution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessStep {
    pub word: String,
    pub pattern: Pattern,
    /// Candidates open before the guess; unknown for abandoned solves
    pub candidates_before: Option<usize>,
    pub candidates_after: Option<usize>,
}

/// Solve `target`, optionally forcing the first guess
///
/// Running out of candidates or attempts is reported through
/// [`SolveResult::failure`] together with the guesses made.
///
/// # Errors
///
/// Returns an error if the target or first word is not a valid word, or the
/// first word does not match the target's length
pub fn solve_word(
    solver: &Solver<'_>,
    target: &str,
    first_word: Option<&str>,
) -> Result<SolveResult, SolveError> {
    let target_word = Word::new(target)?;

    match solver.play(target, first_word) {
        Ok(turns) => Ok(SolveResult {
            target: target_word.text().to_string(),
            steps: steps_from_turns(&turns),
            failure: None,
        }),
        Err(
            failure @ (SolveError::EmptyCandidateSet { .. } | SolveError::BudgetExceeded { .. }),
        ) => {
            let steps = failure
                .guesses()
                .iter()
                .filter_map(|guess| Word::new(guess.as_str()).ok())
                .map(|guess| GuessStep {
                    pattern: Pattern::calculate(&guess, &target_word),
                    word: guess.text().to_string(),
                    candidates_before: None,
                    candidates_after: None,
                })
                .collect();
            Ok(SolveResult {
                target: target_word.text().to_string(),
                steps,
                failure: Some(failure),
            })
        }
        Err(other) => Err(other),
    }
}

fn steps_from_turns(turns: &[Turn]) -> Vec<GuessStep> {
    turns
        .iter()
        .enumerate()
        .map(|(i, turn)| GuessStep {
            word: turn.guess.text().to_string(),
            pattern: turn.pattern,
            candidates_before: Some(turn.candidates),
            candidates_after: Some(
                turns
                    .get(i + 1)
                    .map_or(usize::from(turn.pattern.is_perfect()), |next| next.candidates),
            ),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{SolveConfig, SolverLimits};
    use crate::wordlists::{Dictionary, WORDLE};

    fn dictionary() -> Dictionary {
        Dictionary::from_slice(&WORDLE[..200])
    }

    #[test]
    fn solve_word_succeeds() {
        let dictionary = dictionary();
        let solver = Solver::new(&dictionary, SolveConfig::default(), SolverLimits::default());
        let target = dictionary.partition(5)[17].text().to_string();

        let result = solve_word(&solver, &target, None).unwrap();

        assert!(result.success());
        assert_eq!(result.guesses().last().copied(), Some(target.as_str()));
        assert!(result.steps.last().is_some_and(|step| step.pattern.is_perfect()));
    }

    #[test]
    fn solve_records_shrinking_candidates() {
        let dictionary = dictionary();
        let solver = Solver::new(&dictionary, SolveConfig::default(), SolverLimits::default());
        let target = dictionary.partition(5)[42].text().to_string();

        let result = solve_word(&solver, &target, None).unwrap();

        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
        assert_eq!(result.steps.last().and_then(|s| s.candidates_after), Some(1));
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let dictionary = dictionary();
        let solver = Solver::new(&dictionary, SolveConfig::default(), SolverLimits::default());

        assert!(solve_word(&solver, "zz-zz", None).is_err());
    }

    #[test]
    fn budget_failure_keeps_guesses() {
        let dictionary = Dictionary::from_slice(&["crane", "trace", "zonal"]);
        let solver = Solver::new(&dictionary, SolveConfig::default(), SolverLimits::new(200, 1));

        let result = solve_word(&solver, "zonal", Some("crane")).unwrap();

        assert!(!result.success());
        assert_eq!(result.guesses(), vec!["crane"]);
        assert_eq!(result.steps[0].candidates_before, None);
        assert!(matches!(
            result.failure,
            Some(SolveError::BudgetExceeded { attempts: 1, .. })
        ));
    }

    #[test]
    fn forced_first_word() {
        let dictionary = Dictionary::from_slice(&["crane", "trace", "zonal"]);
        let solver = Solver::new(&dictionary, SolveConfig::default(), SolverLimits::default());

        let result = solve_word(&solver, "crane", Some("trace")).unwrap();
        assert_eq!(result.guesses(), vec!["trace", "crane"]);
        assert_eq!(result.steps[0].candidates_before, Some(3));
        assert_eq!(result.steps[0].candidates_after, Some(1));
    }
}
