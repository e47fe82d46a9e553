//! wordsieve
//!
//! Word puzzle solving: filter a dictionary against partial knowledge of a
//! hidden word, rank the candidates as next guesses, and play to a solution.
//!
//! # Quick Start
//!
//! ```rust
//! use wordsieve::core::restriction;
//! use wordsieve::solver::{SolveConfig, compute_candidates};
//! use wordsieve::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::from_slice(&["rusty", "sunny", "crane"]);
//!
//! // 's' is in the word, but not first
//! let constraints = restriction::parse("*s!1", 5).unwrap();
//! let report = compute_candidates(&constraints, dictionary.partition(5), &SolveConfig::default(), 10);
//!
//! assert_eq!(report.total_candidates, 1);
//! assert_eq!(report.ranked[0].word.text(), "rusty");
//! ```

// Core domain types
pub mod core;

// Filtering, scoring and solving
pub mod solver;

// Dictionaries
pub mod wordlists;

// Cache and request metrics around the solver
pub mod service;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
