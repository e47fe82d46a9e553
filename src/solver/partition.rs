//! Exhaustive partition scoring
//!
//! Simulates each guess against every remaining candidate and measures how the
//! resulting feedback patterns split the candidate set.

use super::config::PartitionMetric;
use super::scoring::ScoredWord;
use crate::core::{Pattern, Word};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Group candidates by the pattern they produce with the guess
#[must_use]
pub fn group_by_pattern(guess: &Word, candidates: &[Word]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let pattern = Pattern::calculate(guess, candidate);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// Cost of a guess under the metric; lower is better
///
/// `Mean` is the sum of squared group sizes, which orders guesses the same
/// way as the expected size of the group holding the answer. `Worst` is the
/// largest group.
///
/// # Examples
/// ```
/// use wordsieve::core::Word;
/// use wordsieve::solver::{PartitionMetric, partition_cost};
///
/// let candidates = vec![Word::new("aaaaa").unwrap(), Word::new("bbbbb").unwrap()];
///
/// let splits = Word::new("aaaaa").unwrap();
/// let blind = Word::new("zzzzz").unwrap();
/// assert_eq!(partition_cost(&splits, &candidates, PartitionMetric::Worst), 1);
/// assert_eq!(partition_cost(&blind, &candidates, PartitionMetric::Worst), 2);
/// ```
#[must_use]
pub fn partition_cost(guess: &Word, candidates: &[Word], metric: PartitionMetric) -> usize {
    let groups = group_by_pattern(guess, candidates);
    match metric {
        PartitionMetric::Mean => groups.values().map(|&size| size * size).sum(),
        PartitionMetric::Worst => groups.values().max().copied().unwrap_or(0),
    }
}

/// Pick the guess in `pool` with the lowest cost against `candidates`
///
/// Ties go to the guess that comes first in `pool`. Returns `None` for an
/// empty pool.
#[must_use]
pub fn select_best_guess<'a>(
    pool: &'a [Word],
    candidates: &[Word],
    metric: PartitionMetric,
) -> Option<(&'a Word, usize)> {
    pool.par_iter()
        .enumerate()
        .map(|(index, guess)| (index, guess, partition_cost(guess, candidates, metric)))
        .min_by_key(|&(index, _, cost)| (cost, index))
        .map(|(_, guess, cost)| (guess, cost))
}

/// Reorder the first `budget` entries of `ranked` by partition cost
///
/// Entries with equal cost keep their ranked order, and entries past the
/// budget stay where they are, so the new head is what
/// [`select_best_guess`] would pick from the same pool.
pub fn order_by_partition_cost(
    ranked: &mut [ScoredWord],
    candidates: &[Word],
    metric: PartitionMetric,
    budget: usize,
) {
    let len = budget.min(ranked.len());
    let pool = &mut ranked[..len];
    let costs: Vec<usize> = pool
        .par_iter()
        .map(|scored| partition_cost(&scored.word, candidates, metric))
        .collect();

    let mut order: Vec<usize> = (0..pool.len()).collect();
    order.sort_by_key(|&index| costs[index]);
    let reordered: Vec<ScoredWord> = order.iter().map(|&index| pool[index].clone()).collect();
    pool.clone_from_slice(&reordered);
}
