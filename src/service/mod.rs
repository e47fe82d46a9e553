//! Request-handling layer around the pure solver
//!
//! Owns the dictionaries, the candidate cache and the request counter, and
//! turns raw restriction strings into resolved constraints.

mod cache;
mod metrics;

pub use cache::{CacheKey, CandidateCache};
pub use metrics::{DEFAULT_LOG_EVERY, DEFAULT_LOG_INTERVAL, RequestMetrics};

use crate::core::{ConstraintError, restriction};
use crate::solver::{CandidateReport, Preset, SolveConfig, Solver, SolverLimits, compute_candidates};
use crate::wordlists::{Dictionaries, DictionaryId};
use log::info;
use std::sync::Arc;

/// Word lookup and solving service
#[derive(Debug, Default)]
pub struct WordService {
    dictionaries: Dictionaries,
    cache: CandidateCache,
    metrics: RequestMetrics,
}

impl WordService {
    #[must_use]
    pub fn new(dictionaries: Dictionaries) -> Self {
        Self {
            dictionaries,
            cache: CandidateCache::new(),
            metrics: RequestMetrics::new(),
        }
    }

    #[must_use]
    pub const fn dictionaries(&self) -> &Dictionaries {
        &self.dictionaries
    }

    #[must_use]
    pub const fn metrics(&self) -> &RequestMetrics {
        &self.metrics
    }

    #[must_use]
    pub const fn cache(&self) -> &CandidateCache {
        &self.cache
    }

    /// Candidate report for a restriction string under a preset, memoized
    ///
    /// # Errors
    /// Returns `ConstraintError` if the restriction string is malformed or
    /// addresses positions outside words of `length` letters
    pub fn candidates(
        &self,
        restrictions: &str,
        length: usize,
        dictionary: DictionaryId,
        preset: Preset,
        limit: usize,
    ) -> Result<Arc<CandidateReport>, ConstraintError> {
        self.metrics.record();
        let constraints = restriction::parse(restrictions, length)?;
        let (resolved, source) = self.dictionaries.resolve(dictionary, length);
        info!("Searching {resolved} for words of length {length}");

        let key = CacheKey {
            constraints,
            length,
            dictionary: resolved,
            limit,
            preset,
        };
        Ok(self.cache.get_or_compute(key.clone(), || {
            compute_candidates(
                &key.constraints,
                source.partition(length),
                &preset.config(),
                limit,
            )
        }))
    }

    /// Candidate report under an explicit configuration; never cached
    ///
    /// # Errors
    /// Returns `ConstraintError` for a malformed restriction string
    pub fn candidates_with_config(
        &self,
        restrictions: &str,
        length: usize,
        dictionary: DictionaryId,
        config: &SolveConfig,
        limit: usize,
    ) -> Result<CandidateReport, ConstraintError> {
        self.metrics.record();
        let constraints = restriction::parse(restrictions, length)?;
        let (resolved, source) = self.dictionaries.resolve(dictionary, length);
        info!("Searching {resolved} for words of length {length}");
        Ok(compute_candidates(
            &constraints,
            source.partition(length),
            config,
            limit,
        ))
    }

    /// Solver over the dictionary `dictionary` resolves to for `length`
    #[must_use]
    pub fn solver(
        &self,
        dictionary: DictionaryId,
        length: usize,
        config: SolveConfig,
        limits: SolverLimits,
    ) -> Solver<'_> {
        self.metrics.record();
        let (resolved, source) = self.dictionaries.resolve(dictionary, length);
        info!("Solving with {resolved} for words of length {length}");
        Solver::new(source, config, limits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Dictionary;

    fn service() -> WordService {
        WordService::new(Dictionaries::new(
            Dictionary::from_slice(&["crane", "trace", "zonal", "rusty", "sunny", "cat", "cot"]),
            Dictionary::from_slice(&["crane", "trace"]),
        ))
    }

    #[test]
    fn candidates_are_cached_per_request_shape() {
        let service = service();
        let first = service
            .candidates("*s!1", 5, DictionaryId::Simple, Preset::OptimalMean, 10)
            .unwrap();
        let second = service
            .candidates("*S!1", 5, DictionaryId::Simple, Preset::OptimalMean, 10)
            .unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.total_candidates, 1);
        assert_eq!(first.ranked[0].word.text(), "rusty");
        assert_eq!(service.cache().len(), 1);
        assert_eq!(service.metrics().requests(), 2);
    }

    #[test]
    fn wordle_dictionary_only_for_five_letters() {
        let service = service();
        let five = service
            .candidates("", 5, DictionaryId::Wordle, Preset::OptimalMean, 10)
            .unwrap();
        assert_eq!(five.total_candidates, 2);

        let three = service
            .candidates("", 3, DictionaryId::Wordle, Preset::OptimalMean, 10)
            .unwrap();
        assert_eq!(three.total_candidates, 2);
    }

    #[test]
    fn malformed_restrictions_are_rejected() {
        let service = service();
        assert!(
            service
                .candidates("a7", 5, DictionaryId::Simple, Preset::OptimalMean, 10)
                .is_err()
        );
        assert!(service.cache().is_empty());
    }

    #[test]
    fn explicit_config_bypasses_cache() {
        let service = service();
        let config = SolveConfig {
            uniqueness_multiplier: 1.0,
            ..SolveConfig::default()
        };
        let report = service
            .candidates_with_config("*a!", 5, DictionaryId::Simple, &config, 10)
            .unwrap();
        assert_eq!(report.total_candidates, 3);
        assert!(service.cache().is_empty());
    }

    #[test]
    fn solver_uses_resolved_dictionary() {
        let service = service();
        let solver = service.solver(
            DictionaryId::Simple,
            5,
            SolveConfig::default(),
            SolverLimits::default(),
        );
        assert_eq!(
            solver.solve("crane", Some("trace")).unwrap(),
            vec!["trace", "crane"]
        );

        // no three-letter Wordle words: falls back to Simple
        let solver = service.solver(
            DictionaryId::Wordle,
            3,
            SolveConfig::default(),
            SolverLimits::default(),
        );
        let guesses = solver.solve("cot", None).unwrap();
        assert_eq!(guesses.last().map(String::as_str), Some("cot"));
        assert_eq!(service.metrics().requests(), 2);
    }
}
