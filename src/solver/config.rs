//! Scoring and solving configuration
//!
//! Named presets resolve to a fully populated [`SolveConfig`]; unknown names
//! fall back to [`Preset::OptimalMean`] with a logged warning.

use log::warn;
use std::fmt;
use std::str::FromStr;

/// How exhaustive partition scoring ranks a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartitionMetric {
    /// Minimize the expected size of the group the answer lands in
    Mean,
    /// Minimize the largest group (minimax)
    Worst,
}

/// Weights for the frequency heuristic plus the partition settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveConfig {
    /// Applied to a letter's weight when it sits at a position already known correct
    pub right_location_multiplier: f64,
    /// Applied to the whole score when a word has no repeated letter
    pub uniqueness_multiplier: f64,
    /// Bonus per remaining candidate when the word could itself be the answer
    pub viable_word_preference: f64,
    /// Largest candidate set scored by exhaustive partitioning
    pub partition_threshold: usize,
    pub partition_metric: PartitionMetric,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Preset::default().config()
    }
}

/// Named configuration presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Preset {
    /// Exhaustive partitioning minimizing expected remaining candidates
    #[default]
    OptimalMean,
    /// Exhaustive partitioning minimizing the worst-case remaining candidates
    LowestMax,
    /// Frequency heuristic only
    Frequency,
    /// Frequency heuristic with no preference for viable answers
    Fishing,
}

impl Preset {
    pub const ALL: [Self; 4] = [
        Self::OptimalMean,
        Self::LowestMax,
        Self::Frequency,
        Self::Fishing,
    ];

    /// Canonical preset name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::OptimalMean => "OPTIMAL_MEAN",
            Self::LowestMax => "LOWEST_MAX",
            Self::Frequency => "FREQUENCY",
            Self::Fishing => "FISHING",
        }
    }

    #[must_use]
    pub const fn config(self) -> SolveConfig {
        match self {
            Self::OptimalMean => SolveConfig {
                right_location_multiplier: 4.0,
                uniqueness_multiplier: 9.0,
                viable_word_preference: 0.007,
                partition_threshold: 50,
                partition_metric: PartitionMetric::Mean,
            },
            Self::LowestMax => SolveConfig {
                right_location_multiplier: 4.0,
                uniqueness_multiplier: 9.0,
                viable_word_preference: 0.007,
                partition_threshold: 50,
                partition_metric: PartitionMetric::Worst,
            },
            Self::Frequency => SolveConfig {
                right_location_multiplier: 4.0,
                uniqueness_multiplier: 9.0,
                viable_word_preference: 0.007,
                partition_threshold: 0,
                partition_metric: PartitionMetric::Mean,
            },
            Self::Fishing => SolveConfig {
                right_location_multiplier: 1.0,
                uniqueness_multiplier: 9.0,
                viable_word_preference: 0.0,
                partition_threshold: 0,
                partition_metric: PartitionMetric::Mean,
            },
        }
    }

    /// Resolve a preset name
    ///
    /// Case-insensitive; `-` and `_` are interchangeable. Unknown names resolve
    /// to the default preset and log a warning.
    ///
    /// # Examples
    /// ```
    /// use wordsieve::solver::Preset;
    ///
    /// assert_eq!(Preset::from_name("lowest-max"), Preset::LowestMax);
    /// assert_eq!(Preset::from_name("no-such-preset"), Preset::OptimalMean);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            warn!(
                "Unknown config preset '{name}', using {}",
                Self::default().name()
            );
            Self::default()
        })
    }
}

/// Error for a preset name that matches nothing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown preset '{0}'")]
pub struct UnknownPreset(pub String);

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|preset| preset.name() == normalized)
            .ok_or_else(|| UnknownPreset(s.to_string()))
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Hard cap on guesses considered in exhaustive mode
pub const MAX_PERMUTATION_THRESHOLD: usize = 200;

/// Budgets bounding a single solve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverLimits {
    /// Guesses evaluated by exhaustive partitioning, at most [`MAX_PERMUTATION_THRESHOLD`]
    pub permutation_threshold: usize,
    /// Guesses allowed before the solve is abandoned
    pub max_attempts: usize,
}

impl SolverLimits {
    /// Build limits, clamping the permutation budget to its hard maximum
    #[must_use]
    pub fn new(permutation_threshold: usize, max_attempts: usize) -> Self {
        Self {
            permutation_threshold: permutation_threshold.min(MAX_PERMUTATION_THRESHOLD),
            max_attempts,
        }
    }
}

impl Default for SolverLimits {
    fn default() -> Self {
        Self::new(MAX_PERMUTATION_THRESHOLD, 20)
    }
}
