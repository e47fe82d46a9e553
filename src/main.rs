//! wordsieve - CLI
//!
//! Filters a dictionary against what is known about a hidden word, ranks the
//! survivors as next guesses, and plays the puzzle autonomously.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use std::path::PathBuf;
use wordsieve::{
    commands::{
        CandidateQuery, ConfigOverrides, find_candidates, run_benchmark, sample_targets,
        solve_word,
    },
    output::{print_benchmark_result, print_candidate_report, print_solve_result},
    service::WordService,
    solver::{MAX_PERMUTATION_THRESHOLD, Preset, SolverLimits},
    wordlists::{Dictionaries, DictionaryId, WORDLE_LENGTH},
};

#[derive(Parser)]
#[command(
    name = "wordsieve",
    about = "Word puzzle solver: constraint filtering, frequency scoring and exhaustive partitioning",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dictionary: simple (default), wordle, big, huge
    #[arg(short, long, global = true, default_value = "simple")]
    dictionary: String,

    /// Config preset: OPTIMAL_MEAN (default), LOWEST_MAX, FREQUENCY, FISHING
    #[arg(short, long, global = true, default_value = "OPTIMAL_MEAN")]
    preset: String,

    /// Word list file backing the `big` dictionary
    #[arg(long, global = true)]
    big: Option<PathBuf>,

    /// Word list file backing the `huge` dictionary
    #[arg(long, global = true)]
    huge: Option<PathBuf>,
}

/// Overrides on top of the selected preset
#[derive(Args, Default)]
struct TuningArgs {
    /// Multiplier for letters already known at this position
    #[arg(long)]
    right_location_multiplier: Option<f64>,

    /// Multiplier for words without repeated letters
    #[arg(long)]
    uniqueness_multiplier: Option<f64>,

    /// Bonus per candidate for words that could be the answer
    #[arg(long)]
    viable_word_preference: Option<f64>,

    /// Largest candidate set scored by exhaustive partitioning
    #[arg(long)]
    partition_threshold: Option<usize>,
}

impl From<TuningArgs> for ConfigOverrides {
    fn from(args: TuningArgs) -> Self {
        Self {
            right_location_multiplier: args.right_location_multiplier,
            uniqueness_multiplier: args.uniqueness_multiplier,
            viable_word_preference: args.viable_word_preference,
            partition_threshold: args.partition_threshold,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List candidates and fishing words for a restriction string
    Candidates {
        /// Restrictions, e.g. "a1bcs!1e5" ("" or "*" for no knowledge)
        #[arg(default_value = "")]
        restrictions: String,

        /// Word length
        #[arg(short, long, default_value_t = WORDLE_LENGTH)]
        length: usize,

        /// Number of ranked candidates to show (at most 100)
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,

        #[command(flatten)]
        tuning: TuningArgs,
    },

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Force the first guess
        #[arg(short = 'f', long)]
        first_word: Option<String>,

        /// Guesses evaluated by exhaustive partitioning (at most 200)
        #[arg(long, default_value_t = MAX_PERMUTATION_THRESHOLD)]
        permutation_threshold: usize,

        /// Give up after this many guesses
        #[arg(long, default_value = "20")]
        max_attempts: usize,

        /// Show candidate counts per turn
        #[arg(short, long)]
        verbose: bool,

        #[command(flatten)]
        tuning: TuningArgs,
    },

    /// Solve a random sample of dictionary words
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for sampling the words
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Word length
        #[arg(short, long, default_value_t = WORDLE_LENGTH)]
        length: usize,

        /// Force the first guess of every solve
        #[arg(short = 'f', long)]
        first_word: Option<String>,

        #[command(flatten)]
        tuning: TuningArgs,
    },
}

/// Embedded dictionaries plus any file-backed ones given on the command line
fn load_dictionaries(big: Option<PathBuf>, huge: Option<PathBuf>) -> Result<Dictionaries> {
    let mut dictionaries = Dictionaries::embedded();
    for (id, path) in [(DictionaryId::Big, big), (DictionaryId::Huge, huge)] {
        if let Some(path) = path {
            dictionaries = dictionaries
                .load(id, &path)
                .with_context(|| format!("Failed to load {id} dictionary from {}", path.display()))?;
            info!("Loaded {id} dictionary from {}", path.display());
        }
    }
    Ok(dictionaries)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let dictionary = DictionaryId::from_name(&cli.dictionary);
    let preset = Preset::from_name(&cli.preset);
    let service = WordService::new(load_dictionaries(cli.big, cli.huge)?);

    match cli.command {
        Commands::Candidates {
            restrictions,
            length,
            limit,
            tuning,
        } => {
            let query = CandidateQuery {
                restrictions,
                length,
                limit,
                dictionary,
                preset,
                overrides: tuning.into(),
            };
            run_candidates_command(&service, &query)
        }
        Commands::Solve {
            word,
            first_word,
            permutation_threshold,
            max_attempts,
            verbose,
            tuning,
        } => {
            let overrides: ConfigOverrides = tuning.into();
            let solver = service.solver(
                dictionary,
                word.trim().len(),
                overrides.apply(preset.config()),
                SolverLimits::new(permutation_threshold, max_attempts),
            );
            let result = solve_word(&solver, word.trim(), first_word.as_deref())?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Benchmark {
            count,
            seed,
            length,
            first_word,
            tuning,
        } => {
            let overrides: ConfigOverrides = tuning.into();
            let solver = service.solver(
                dictionary,
                length,
                overrides.apply(preset.config()),
                SolverLimits::default(),
            );
            let targets = sample_targets(
                service.dictionaries().partition(dictionary, length),
                count,
                seed,
            );

            if let Some(word) = &first_word {
                println!(
                    "Running benchmark on {} random words with forced first word: {word}...",
                    targets.len()
                );
            } else {
                println!("Running benchmark on {} random words...", targets.len());
            }

            let result = run_benchmark(&solver, &targets, first_word.as_deref());
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_candidates_command(service: &WordService, query: &CandidateQuery) -> Result<()> {
    let report = find_candidates(service, query)
        .with_context(|| format!("Invalid restrictions '{}'", query.restrictions))?;
    print_candidate_report(&report);
    Ok(())
}
