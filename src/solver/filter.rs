//! Candidate filtering
//!
//! Narrows a dictionary partition to the words consistent with a `ConstraintSet`.

use crate::core::{ConstraintSet, Word};
use rayon::prelude::*;

/// Check whether `word` could still be the hidden word
///
/// Checks run cheapest-rejection first:
/// 1. every required letter is present
/// 2. every fixed position matches
/// 3. no letter sits where it is excluded
/// 4. every letter of the word is allowed
#[must_use]
pub fn is_candidate(word: &Word, constraints: &ConstraintSet) -> bool {
    let letters = word.letters();

    if !constraints.required().is_subset(letters) {
        return false;
    }

    if !constraints
        .fixed()
        .all(|(position, letter)| position < word.len() && word.char_at(position) == letter)
    {
        return false;
    }

    if constraints
        .exclusions()
        .any(|(position, excluded)| position < word.len() && excluded.contains(word.char_at(position)))
    {
        return false;
    }

    letters.is_subset(constraints.allowed())
}

/// Filter a dictionary partition down to the candidate set
///
/// The result is sorted by word text. Runs in parallel over the partition.
///
/// # Examples
/// ```
/// use wordsieve::core::{restriction, Word};
/// use wordsieve::solver::filter_candidates;
///
/// let partition: Vec<Word> = ["rusty", "sunny"].iter().map(|w| Word::new(*w).unwrap()).collect();
/// let constraints = restriction::parse("*s!1", 5).unwrap();
///
/// let candidates = filter_candidates(&partition, &constraints);
/// assert_eq!(candidates.len(), 1);
/// assert_eq!(candidates[0].text(), "rusty");
/// ```
#[must_use]
pub fn filter_candidates(partition: &[Word], constraints: &ConstraintSet) -> Vec<Word> {
    let mut candidates: Vec<Word> = partition
        .par_iter()
        .filter(|word| is_candidate(word, constraints))
        .cloned()
        .collect();
    candidates.par_sort_unstable();
    candidates
}
