//! Frequency-weighted scoring of guesses

use super::config::SolveConfig;
use super::filter::is_candidate;
use super::frequency::FrequencyModel;
use crate::core::{ConstraintSet, LetterSet, Word};
use rayon::prelude::*;
use std::cmp::Ordering;

/// A word paired with its score
#[derive(Debug, Clone)]
pub struct ScoredWord {
    pub word: Word,
    pub score: f64,
}

impl PartialEq for ScoredWord {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScoredWord {}

impl PartialOrd for ScoredWord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Highest score first; equal scores fall back to alphabetical order
impl Ord for ScoredWord {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.word.cmp(&other.word))
    }
}

/// Scores words against a frequency model and the known constraints
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a> {
    model: &'a FrequencyModel,
    constraints: &'a ConstraintSet,
    config: &'a SolveConfig,
}

impl<'a> Scorer<'a> {
    #[must_use]
    pub const fn new(
        model: &'a FrequencyModel,
        constraints: &'a ConstraintSet,
        config: &'a SolveConfig,
    ) -> Self {
        Self {
            model,
            constraints,
            config,
        }
    }

    /// Score a single word
    ///
    /// Each distinct letter contributes its weight once, at its first
    /// occurrence. That weight is scaled by the right-location multiplier when
    /// the occurrence lands on a position already fixed to that letter. Words
    /// without repeated letters get the uniqueness multiplier, and words that
    /// could still be the answer get a bonus proportional to the candidate count.
    ///
    /// # Examples
    /// ```
    /// use wordsieve::core::{ConstraintSet, LetterSet, Word};
    /// use wordsieve::solver::{FrequencyModel, Scorer, SolveConfig};
    ///
    /// let candidates = vec![Word::new("crane").unwrap(), Word::new("slate").unwrap()];
    /// let model = FrequencyModel::build(&candidates, LetterSet::EMPTY);
    /// let constraints = ConstraintSet::new();
    /// let config = SolveConfig::default();
    /// let scorer = Scorer::new(&model, &constraints, &config);
    ///
    /// assert!(scorer.score(&candidates[0]) > scorer.score(&Word::new("eerie").unwrap()));
    /// ```
    #[must_use]
    pub fn score(&self, word: &Word) -> f64 {
        let mut seen = LetterSet::EMPTY;
        let mut total = 0.0;

        for (position, &letter) in word.bytes().iter().enumerate() {
            if seen.contains(letter) {
                continue;
            }
            seen.insert(letter);

            #[allow(clippy::cast_precision_loss)]
            let weight = self.model.weight(letter) as f64;
            total += if self.constraints.fixed_at(position) == Some(letter) {
                weight * self.config.right_location_multiplier
            } else {
                weight
            };
        }

        if !word.has_repeats() {
            total *= self.config.uniqueness_multiplier;
        }

        if is_candidate(word, self.constraints) {
            #[allow(clippy::cast_precision_loss)]
            let bonus = self.config.viable_word_preference * self.model.total_candidates() as f64;
            total += bonus;
        }

        total
    }

    /// Score every word in parallel and sort best first
    ///
    /// Returns an empty list when the model was built from no candidates.
    #[must_use]
    pub fn rank(&self, words: &[Word]) -> Vec<ScoredWord> {
        if self.model.total_candidates() == 0 {
            return Vec::new();
        }

        let mut ranked: Vec<ScoredWord> = words
            .par_iter()
            .map(|word| ScoredWord {
                word: word.clone(),
                score: self.score(word),
            })
            .collect();
        ranked.par_sort_unstable();
        ranked
    }
}
