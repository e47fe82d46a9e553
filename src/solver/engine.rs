//! Autonomous solver
//!
//! Plays against a known solution: pick a guess, derive its feedback, fold
//! the feedback into the constraints, and repeat until the guess is right or
//! a budget runs out.

use super::config::{SolveConfig, SolverLimits};
use super::error::SolveError;
use super::filter::filter_candidates;
use super::frequency::FrequencyModel;
use super::partition::select_best_guess;
use super::scoring::Scorer;
use crate::core::{ConstraintSet, LetterSet, Pattern, Word};
use crate::wordlists::Dictionary;
use log::{debug, info};

/// One guess and what it revealed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub pattern: Pattern,
    /// Candidates still open when the guess was chosen
    pub candidates: usize,
}

/// Solver over a fixed dictionary
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    dictionary: &'a Dictionary,
    config: SolveConfig,
    limits: SolverLimits,
}

impl<'a> Solver<'a> {
    /// Create a solver drawing guesses from `dictionary`
    ///
    /// # Parameters
    /// - `config`: scoring weights and the partition threshold
    /// - `limits`: permutation budget and maximum number of guesses
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary, config: SolveConfig, limits: SolverLimits) -> Self {
        Self {
            dictionary,
            config,
            limits,
        }
    }

    /// Solve for `solution`, returning the guesses in order
    ///
    /// The last guess is always the solution itself.
    ///
    /// # Errors
    /// See [`Solver::play`]
    ///
    /// # Examples
    /// ```
    /// use wordsieve::solver::{SolveConfig, Solver, SolverLimits};
    /// use wordsieve::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_slice(&["crane", "trace", "zonal"]);
    /// let solver = Solver::new(&dictionary, SolveConfig::default(), SolverLimits::default());
    ///
    /// let guesses = solver.solve("crane", Some("trace")).unwrap();
    /// assert_eq!(guesses, vec!["trace", "crane"]);
    /// ```
    pub fn solve(&self, solution: &str, first_guess: Option<&str>) -> Result<Vec<String>, SolveError> {
        let turns = self.play(solution, first_guess)?;
        Ok(turns.into_iter().map(|turn| turn.guess.text().to_string()).collect())
    }

    /// Solve for `solution`, returning every turn with its feedback
    ///
    /// # Errors
    /// - `InvalidWord` if the solution or first guess is not a valid word
    /// - `LengthMismatch` if the first guess differs in length from the solution
    /// - `EmptyCandidateSet` if no dictionary word fits the feedback
    /// - `BudgetExceeded` if `max_attempts` guesses were made without success
    pub fn play(&self, solution: &str, first_guess: Option<&str>) -> Result<Vec<Turn>, SolveError> {
        let solution = Word::new(solution)?;
        let first_guess = first_guess.map(Word::new).transpose()?;
        if let Some(first) = &first_guess {
            if first.len() != solution.len() {
                return Err(SolveError::LengthMismatch {
                    expected: solution.len(),
                    actual: first.len(),
                });
            }
        }

        let partition = self.dictionary.partition(solution.len());
        let mut constraints = ConstraintSet::new();
        let mut turns: Vec<Turn> = Vec::new();

        loop {
            if turns.len() >= self.limits.max_attempts {
                info!("Gave up on {solution} after {} guesses", turns.len());
                return Err(SolveError::BudgetExceeded {
                    attempts: turns.len(),
                    guesses: texts(&turns),
                });
            }

            let candidates = filter_candidates(partition, &constraints);
            let override_guess = if turns.is_empty() {
                first_guess.clone()
            } else {
                None
            };
            let guess = match override_guess {
                Some(word) if !candidates.is_empty() => Some(word),
                _ => self.next_guess(&candidates, &constraints),
            };
            let Some(guess) = guess else {
                info!("No candidates left for {solution} after {} guesses", turns.len());
                return Err(SolveError::EmptyCandidateSet {
                    guesses: texts(&turns),
                });
            };

            let pattern = Pattern::calculate(&guess, &solution);
            debug!(
                "Guess {}: {guess} {} ({} candidates)",
                turns.len() + 1,
                pattern.to_emoji(),
                candidates.len()
            );

            let solved = pattern.is_perfect();
            if !solved {
                constraints.apply_feedback(&guess, pattern)?;
            }
            turns.push(Turn {
                guess,
                pattern,
                candidates: candidates.len(),
            });

            if solved {
                info!("Solved {solution} in {} guesses", turns.len());
                return Ok(turns);
            }
        }
    }

    /// Choose the next guess from a non-empty candidate set
    ///
    /// Small candidate sets are scored by exhaustive partitioning over the
    /// best-ranked candidates; larger ones take the top frequency score.
    /// Returns `None` only when `candidates` is empty.
    #[must_use]
    pub fn next_guess(&self, candidates: &[Word], constraints: &ConstraintSet) -> Option<Word> {
        if candidates.len() <= 1 {
            return candidates.first().cloned();
        }

        let model = FrequencyModel::build(candidates, LetterSet::EMPTY);
        let ranked = Scorer::new(&model, constraints, &self.config).rank(candidates);

        if candidates.len() <= self.config.partition_threshold
            && self.limits.permutation_threshold > 0
        {
            let pool: Vec<Word> = ranked
                .iter()
                .take(self.limits.permutation_threshold)
                .map(|scored| scored.word.clone())
                .collect();
            if let Some((best, cost)) =
                select_best_guess(&pool, candidates, self.config.partition_metric)
            {
                debug!(
                    "Partitioned {} candidates over {} guesses: {best} (cost {cost})",
                    candidates.len(),
                    pool.len()
                );
                return Some(best.clone());
            }
        }

        ranked.into_iter().next().map(|scored| scored.word)
    }
}

fn texts(turns: &[Turn]) -> Vec<String> {
    turns.iter().map(|turn| turn.guess.text().to_string()).collect()
}
