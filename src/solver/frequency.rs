//! Letter frequency model over a candidate set
//!
//! Each candidate contributes one unit of weight per *distinct* letter, so the
//! weights measure how many candidates a letter's presence would split off.

use crate::core::{ALPHABET_SIZE, LetterSet, Word};
use rayon::prelude::*;

/// Per-letter occurrence weights over the current candidates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyModel {
    total_candidates: usize,
    letter_weights: [usize; ALPHABET_SIZE],
}

impl FrequencyModel {
    /// Aggregate weights over `candidates`, ignoring letters in `exclude`
    ///
    /// Per-shard partial sums are reduced with element-wise addition, so the
    /// result does not depend on how rayon splits the work.
    ///
    /// # Examples
    /// ```
    /// use wordsieve::core::{LetterSet, Word};
    /// use wordsieve::solver::FrequencyModel;
    ///
    /// let candidates = vec![Word::new("speed").unwrap(), Word::new("crane").unwrap()];
    /// let model = FrequencyModel::build(&candidates, LetterSet::EMPTY);
    ///
    /// assert_eq!(model.total_candidates(), 2);
    /// assert_eq!(model.weight(b'e'), 2); // SPEED counts its E once
    /// assert_eq!(model.weight(b'c'), 1);
    /// ```
    #[must_use]
    pub fn build(candidates: &[Word], exclude: LetterSet) -> Self {
        let letter_weights = candidates
            .par_iter()
            .fold(
                || [0usize; ALPHABET_SIZE],
                |mut acc, word| {
                    for letter in word.letters().difference(exclude).iter() {
                        acc[(letter - b'a') as usize] += 1;
                    }
                    acc
                },
            )
            .reduce(
                || [0usize; ALPHABET_SIZE],
                |mut left, right| {
                    for (l, r) in left.iter_mut().zip(right) {
                        *l += r;
                    }
                    left
                },
            );

        Self {
            total_candidates: candidates.len(),
            letter_weights,
        }
    }

    /// Copy of this model with the given letters weighted zero
    #[must_use]
    pub fn without(&self, exclude: LetterSet) -> Self {
        let mut letter_weights = self.letter_weights;
        for letter in exclude.iter() {
            letter_weights[(letter - b'a') as usize] = 0;
        }
        Self {
            total_candidates: self.total_candidates,
            letter_weights,
        }
    }

    #[inline]
    #[must_use]
    pub const fn total_candidates(&self) -> usize {
        self.total_candidates
    }

    /// Weight of a single letter; zero for non-letters
    #[inline]
    #[must_use]
    pub fn weight(&self, letter: u8) -> usize {
        LetterSet::index_of(letter).map_or(0, |i| self.letter_weights[i])
    }

    /// All weights indexed `a = 0 .. z = 25`
    #[inline]
    #[must_use]
    pub const fn weights(&self) -> &[usize; ALPHABET_SIZE] {
        &self.letter_weights
    }
}
