//! Candidate lookup command

use crate::core::ConstraintError;
use crate::service::WordService;
use crate::solver::{CandidateReport, Preset, SolveConfig};
use crate::wordlists::DictionaryId;
use std::sync::Arc;

/// Per-request overrides on top of a preset
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConfigOverrides {
    pub right_location_multiplier: Option<f64>,
    pub uniqueness_multiplier: Option<f64>,
    pub viable_word_preference: Option<f64>,
    pub partition_threshold: Option<usize>,
}

impl ConfigOverrides {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.right_location_multiplier.is_none()
            && self.uniqueness_multiplier.is_none()
            && self.viable_word_preference.is_none()
            && self.partition_threshold.is_none()
    }

    /// `config` with every set override applied
    #[must_use]
    pub fn apply(&self, config: SolveConfig) -> SolveConfig {
        SolveConfig {
            right_location_multiplier: self
                .right_location_multiplier
                .unwrap_or(config.right_location_multiplier),
            uniqueness_multiplier: self
                .uniqueness_multiplier
                .unwrap_or(config.uniqueness_multiplier),
            viable_word_preference: self
                .viable_word_preference
                .unwrap_or(config.viable_word_preference),
            partition_threshold: self.partition_threshold.unwrap_or(config.partition_threshold),
            partition_metric: config.partition_metric,
        }
    }
}

/// One candidate lookup
#[derive(Debug, Clone)]
pub struct CandidateQuery {
    pub restrictions: String,
    pub length: usize,
    pub limit: usize,
    pub dictionary: DictionaryId,
    pub preset: Preset,
    pub overrides: ConfigOverrides,
}

/// Look up candidates for a query
///
/// Plain preset lookups go through the service cache; lookups with
/// overrides are computed fresh.
///
/// # Errors
/// Returns `ConstraintError` for a malformed restriction string
pub fn find_candidates(
    service: &WordService,
    query: &CandidateQuery,
) -> Result<Arc<CandidateReport>, ConstraintError> {
    if query.overrides.is_empty() {
        return service.candidates(
            &query.restrictions,
            query.length,
            query.dictionary,
            query.preset,
            query.limit,
        );
    }

    let config = query.overrides.apply(query.preset.config());
    service
        .candidates_with_config(
            &query.restrictions,
            query.length,
            query.dictionary,
            &config,
            query.limit,
        )
        .map(Arc::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{Dictionaries, Dictionary};

    fn service() -> WordService {
        WordService::new(Dictionaries::new(
            Dictionary::from_slice(&["crane", "trace", "zonal", "slate", "eerie"]),
            Dictionary::default(),
        ))
    }

    fn query(restrictions: &str, overrides: ConfigOverrides) -> CandidateQuery {
        CandidateQuery {
            restrictions: restrictions.to_string(),
            length: 5,
            limit: 10,
            dictionary: DictionaryId::Simple,
            preset: Preset::OptimalMean,
            overrides,
        }
    }

    #[test]
    fn overrides_replace_only_what_is_set() {
        let overrides = ConfigOverrides {
            uniqueness_multiplier: Some(1.0),
            ..ConfigOverrides::default()
        };
        let config = overrides.apply(Preset::LowestMax.config());
        assert!((config.uniqueness_multiplier - 1.0).abs() < f64::EPSILON);
        assert!((config.right_location_multiplier - 4.0).abs() < f64::EPSILON);
        assert_eq!(config.partition_metric, Preset::LowestMax.config().partition_metric);
        assert!(ConfigOverrides::default().is_empty());
        assert!(!overrides.is_empty());
    }

    #[test]
    fn plain_queries_are_cached() {
        let service = service();
        let report = find_candidates(&service, &query("*e!", ConfigOverrides::default())).unwrap();
        assert_eq!(report.total_candidates, 4);
        assert_eq!(service.cache().len(), 1);
    }

    #[test]
    fn overridden_queries_are_not_cached() {
        let service = service();
        let overrides = ConfigOverrides {
            uniqueness_multiplier: Some(1.0),
            ..ConfigOverrides::default()
        };
        let report = find_candidates(&service, &query("*e!", overrides)).unwrap();
        assert_eq!(report.total_candidates, 4);
        assert!(service.cache().is_empty());
    }

    #[test]
    fn repeated_letters_rank_last() {
        let service = service();
        let plain = find_candidates(&service, &query("*e!", ConfigOverrides::default())).unwrap();
        assert_eq!(plain.ranked.last().map(|s| s.word.text()), Some("eerie"));
    }

    #[test]
    fn partition_threshold_override_changes_the_best_guess() {
        let service = WordService::new(Dictionaries::new(
            Dictionary::from_slice(&["atoll", "droit", "fritz", "nutty", "steal", "watch"]),
            Dictionary::default(),
        ));
        let lookup = |overrides| {
            let query = CandidateQuery {
                preset: Preset::LowestMax,
                ..query("", overrides)
            };
            let report = find_candidates(&service, &query).unwrap();
            report.ranked[0].word.text().to_string()
        };

        assert_eq!(lookup(ConfigOverrides::default()), "watch");
        let frequency_only = ConfigOverrides {
            partition_threshold: Some(0),
            ..ConfigOverrides::default()
        };
        assert_eq!(lookup(frequency_only), "droit");
    }

    #[test]
    fn bad_restrictions_propagate() {
        let service = service();
        assert!(find_candidates(&service, &query("e!0", ConfigOverrides::default())).is_err());
    }
}
