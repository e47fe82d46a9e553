//! Candidate reports: ranked candidates plus fishing words

use super::config::{MAX_PERMUTATION_THRESHOLD, Preset, SolveConfig};
use super::filter::filter_candidates;
use super::frequency::FrequencyModel;
use super::partition::order_by_partition_cost;
use super::scoring::{ScoredWord, Scorer};
use crate::core::{ALPHABET_SIZE, ConstraintSet, LetterSet, Word};
use log::{debug, info};

/// Upper bound on ranked candidates returned by one report
pub const MAX_RESULT_LIST_SIZE: usize = 100;

/// Number of fishing words returned by one report
pub const FISHING_WORD_SIZE: usize = 10;

/// Everything known about the candidate set for one set of constraints
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateReport {
    /// The constraints the report was computed for
    pub constraints: ConstraintSet,
    /// Best candidates, best first
    pub ranked: Vec<ScoredWord>,
    /// Best words for probing letters not yet known to be in the answer
    pub fishing: Vec<ScoredWord>,
    pub total_candidates: usize,
    pub letter_weights: [usize; ALPHABET_SIZE],
}

impl CandidateReport {
    fn empty(constraints: &ConstraintSet) -> Self {
        Self {
            constraints: constraints.clone(),
            ranked: Vec::new(),
            fishing: Vec::new(),
            total_candidates: 0,
            letter_weights: [0; ALPHABET_SIZE],
        }
    }
}

/// Filter `partition`, rank the survivors, and pick fishing words
///
/// `result_limit` is clamped to [`MAX_RESULT_LIST_SIZE`]. When there are at
/// most `config.partition_threshold` candidates, the best-scored ones are
/// reordered by partition cost under `config.partition_metric`, so the head
/// of `ranked` is the guess the solver would play. Fishing words are
/// drawn from the whole partition, scored on letters not yet known to be
/// required, with no preference for viable answers. Both lists are empty
/// when nothing matches.
///
/// # Examples
/// ```
/// use wordsieve::core::{restriction, Word};
/// use wordsieve::solver::{SolveConfig, compute_candidates};
///
/// let partition: Vec<Word> = ["crane", "slate", "zonal"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let constraints = restriction::parse("*e!", 5).unwrap();
///
/// let report = compute_candidates(&constraints, &partition, &SolveConfig::default(), 10);
/// assert_eq!(report.total_candidates, 2);
/// assert_eq!(report.ranked.len(), 2);
/// assert_eq!(report.fishing.len(), 3);
/// ```
#[must_use]
pub fn compute_candidates(
    constraints: &ConstraintSet,
    partition: &[Word],
    config: &SolveConfig,
    result_limit: usize,
) -> CandidateReport {
    let candidates = filter_candidates(partition, constraints);
    info!("Found {} viable matches", candidates.len());

    if candidates.is_empty() {
        return CandidateReport::empty(constraints);
    }

    let model = FrequencyModel::build(&candidates, LetterSet::EMPTY);
    let mut ranked = Scorer::new(&model, constraints, config).rank(&candidates);
    if candidates.len() > 1 && candidates.len() <= config.partition_threshold {
        order_by_partition_cost(
            &mut ranked,
            &candidates,
            config.partition_metric,
            MAX_PERMUTATION_THRESHOLD,
        );
        debug!(
            "Ordered {} candidates by {:?} partition cost",
            candidates.len(),
            config.partition_metric
        );
    }
    ranked.truncate(result_limit.min(MAX_RESULT_LIST_SIZE));

    let fishing_model = model.without(constraints.required());
    let fishing_config = SolveConfig {
        uniqueness_multiplier: config.uniqueness_multiplier,
        ..Preset::Fishing.config()
    };
    let mut fishing = Scorer::new(&fishing_model, constraints, &fishing_config).rank(partition);
    fishing.truncate(FISHING_WORD_SIZE);

    CandidateReport {
        constraints: constraints.clone(),
        ranked,
        fishing,
        total_candidates: model.total_candidates(),
        letter_weights: *model.weights(),
    }
}
