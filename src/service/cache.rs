//! Memoized candidate reports

use crate::core::ConstraintSet;
use crate::solver::{CandidateReport, Preset};
use crate::wordlists::DictionaryId;
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Everything a candidate report depends on
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub constraints: ConstraintSet,
    pub length: usize,
    pub dictionary: DictionaryId,
    pub limit: usize,
    pub preset: Preset,
}

/// Content-addressed store of candidate reports
///
/// Reports are computed outside the lock. When two threads miss on the same
/// key at once, both compute and the first insert wins, so every caller
/// still sees a single stored report per key.
#[derive(Debug, Default)]
pub struct CandidateCache {
    entries: Mutex<FxHashMap<CacheKey, Arc<CandidateReport>>>,
}

impl CandidateCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached report for `key`, if any
    #[must_use]
    pub fn get(&self, key: &CacheKey) -> Option<Arc<CandidateReport>> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Return the cached report for `key`, computing and storing it on a miss
    pub fn get_or_compute<F>(&self, key: CacheKey, compute: F) -> Arc<CandidateReport>
    where
        F: FnOnce() -> CandidateReport,
    {
        if let Some(report) = self.get(&key) {
            return report;
        }

        let report = Arc::new(compute());
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key)
            .or_insert(report)
            .clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, restriction};
    use crate::solver::compute_candidates;
    use std::cell::Cell;

    fn key(restrictions: &str, limit: usize) -> CacheKey {
        CacheKey {
            constraints: restriction::parse(restrictions, 5).unwrap(),
            length: 5,
            dictionary: DictionaryId::Simple,
            limit,
            preset: Preset::OptimalMean,
        }
    }

    fn report(restrictions: &str) -> CandidateReport {
        let partition: Vec<Word> = ["crane", "slate", "zonal"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        compute_candidates(
            &restriction::parse(restrictions, 5).unwrap(),
            &partition,
            &Preset::OptimalMean.config(),
            10,
        )
    }

    #[test]
    fn computes_once_per_key() {
        let cache = CandidateCache::new();
        let calls = Cell::new(0);

        for _ in 0..3 {
            let report = cache.get_or_compute(key("*e!", 10), || {
                calls.set(calls.get() + 1);
                report("*e!")
            });
            assert_eq!(report.total_candidates, 2);
        }

        assert_eq!(calls.get(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn distinct_keys_are_distinct_entries() {
        let cache = CandidateCache::new();
        cache.get_or_compute(key("*e!", 10), || report("*e!"));
        cache.get_or_compute(key("*e!", 5), || report("*e!"));
        cache.get_or_compute(key("*z!", 10), || report("*z!"));

        assert_eq!(cache.len(), 3);
        assert_eq!(cache.get(&key("*z!", 10)).unwrap().total_candidates, 1);
    }

    #[test]
    fn equivalent_restrictions_share_an_entry() {
        let cache = CandidateCache::new();
        cache.get_or_compute(key("*s!1", 10), || report("*s!1"));
        assert!(cache.get(&key("* S!1", 10)).is_some());
    }

    #[test]
    fn clear_empties_the_cache() {
        let cache = CandidateCache::new();
        cache.get_or_compute(key("", 10), || report(""));
        assert!(!cache.is_empty());
        cache.clear();
        assert!(cache.is_empty());
    }
}
