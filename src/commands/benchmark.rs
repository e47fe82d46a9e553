//! Benchmark command
//!
//! Solves a sample of dictionary words and collects guess statistics.

use crate::core::Word;
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    /// Words the solver gave up on, with the reason
    pub failures: Vec<(String, String)>,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Solved words per guess count
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` distinct words from `partition`, reproducibly for a seed
///
/// Returns the whole partition, shuffled, when `count` exceeds its size.
#[must_use]
pub fn sample_targets(partition: &[Word], count: usize, seed: u64) -> Vec<Word> {
    let mut rng = StdRng::seed_from_u64(seed);
    partition.choose_multiple(&mut rng, count).cloned().collect()
}

/// Run the solver on every target word
///
/// If `first_word` is provided, it is forced as the first guess of every
/// solve. Averages only cover solved words.
#[allow(clippy::cast_precision_loss)]
pub fn run_benchmark(
    solver: &Solver<'_>,
    target_words: &[Word],
    first_word: Option<&str>,
) -> BenchmarkResult {
    let start = Instant::now();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut failures = Vec::new();

    let pb = ProgressBar::new(target_words.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    for (idx, target) in target_words.iter().enumerate() {
        match solver.solve(target.text(), first_word) {
            Ok(guesses) => {
                let count = guesses.len();
                total_guesses += count;
                min_guesses = min_guesses.min(count);
                max_guesses = max_guesses.max(count);
                *distribution.entry(count).or_insert(0) += 1;
            }
            Err(e) => failures.push((target.text().to_string(), e.to_string())),
        }

        let solved = idx + 1 - failures.len();
        if idx % 10 == 0 && solved > 0 {
            let avg = total_guesses as f64 / solved as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_words = target_words.len();
    let solved = total_words - failures.len();

    BenchmarkResult {
        total_words,
        solved,
        failures,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{SolveConfig, SolverLimits};
    use crate::wordlists::{Dictionary, WORDLE};

    fn dictionary() -> Dictionary {
        Dictionary::from_slice(&WORDLE[..150])
    }

    #[test]
    fn benchmark_runs() {
        let dictionary = dictionary();
        let solver = Solver::new(&dictionary, SolveConfig::default(), SolverLimits::default());
        let targets = sample_targets(dictionary.partition(5), 10, 7);

        let result = run_benchmark(&solver, &targets, None);

        assert_eq!(result.total_words, 10);
        assert_eq!(result.solved, 10);
        assert!(result.failures.is_empty());
        assert!(result.min_guesses >= 1);
        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
    }

    #[test]
    fn distribution_sums_to_solved() {
        let dictionary = dictionary();
        let solver = Solver::new(&dictionary, SolveConfig::default(), SolverLimits::default());
        let targets = sample_targets(dictionary.partition(5), 12, 1);

        let result = run_benchmark(&solver, &targets, None);

        assert_eq!(result.distribution.values().sum::<usize>(), result.solved);
        assert_eq!(
            result
                .distribution
                .iter()
                .map(|(guesses, count)| guesses * count)
                .sum::<usize>(),
            result.total_guesses
        );
    }

    #[test]
    fn forced_first_word_is_used() {
        let dictionary = dictionary();
        let solver = Solver::new(&dictionary, SolveConfig::default(), SolverLimits::default());
        let targets = sample_targets(dictionary.partition(5), 5, 3);

        let result = run_benchmark(&solver, &targets, Some("crane"));

        assert_eq!(result.solved, 5);
        assert!(result.min_guesses >= 2);
    }

    #[test]
    fn failures_are_collected() {
        let dictionary = dictionary();
        let solver = Solver::new(&dictionary, SolveConfig::default(), SolverLimits::new(200, 1));
        let targets = sample_targets(dictionary.partition(5), 4, 11);

        let result = run_benchmark(&solver, &targets, Some("zzzzz"));

        assert_eq!(result.solved, 0);
        assert_eq!(result.failures.len(), 4);
        assert!(result.average_guesses.abs() < f64::EPSILON);
        assert_eq!(result.min_guesses, 0);
    }

    #[test]
    fn sampling_is_reproducible() {
        let dictionary = dictionary();
        let partition = dictionary.partition(5);

        assert_eq!(sample_targets(partition, 8, 42), sample_targets(partition, 8, 42));
        assert_eq!(sample_targets(partition, 1000, 0).len(), partition.len());

        let mut sample = sample_targets(partition, 20, 5);
        sample.sort_unstable();
        sample.dedup();
        assert_eq!(sample.len(), 20);
    }

    #[test]
    fn benchmark_empty_word_list() {
        let dictionary = dictionary();
        let solver = Solver::new(&dictionary, SolveConfig::default(), SolverLimits::default());
        let result = run_benchmark(&solver, &[], None);

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
    }
}
