//! Core domain types
//!
//! Words, feedback patterns and the constraint set that accumulates knowledge
//! about the hidden word. Everything here is pure and deterministic.

mod constraints;
mod letters;
mod pattern;
pub mod restriction;
mod word;

pub use constraints::{ConstraintError, ConstraintSet};
pub use letters::{ALPHABET_SIZE, LetterSet};
pub use pattern::{Mark, Pattern};
pub use word::{MAX_WORD_LENGTH, Word, WordError};
