//! Compact restriction strings
//!
//! The text form lists the letters still allowed, each optionally followed by
//! one-based positions:
//!
//! | Form    | Meaning                                        |
//! |---------|------------------------------------------------|
//! | `a`     | `a` may appear                                 |
//! | `a13`   | `a` is at positions 1 and 3                    |
//! | `s!1`   | `s` is in the word, but not at position 1      |
//! | `s!`    | `s` is in the word, position unknown           |
//! | `e5!2`  | `e` is at position 5 and not at position 2     |
//! | `*`     | every letter is allowed (may prefix the rest)  |
//!
//! Letters not listed are ruled out unless the string contains `*`.
//! An empty string carries no knowledge at all.

use super::constraints::{ConstraintError, ConstraintSet};
use super::letters::LetterSet;
use std::fmt;

/// Highest position the text form can address
pub const MAX_TEXT_POSITION: usize = 9;

/// Parse a restriction string for words of `length` letters
///
/// # Errors
/// Returns `ConstraintError` for malformed input, positions outside the word,
/// or facts that contradict each other
///
/// # Examples
/// ```
/// use wordsieve::core::restriction::parse;
///
/// let constraints = parse("a1bcs!1e5", 5).unwrap();
/// assert_eq!(constraints.fixed_at(0), Some(b'a'));
/// assert_eq!(constraints.fixed_at(4), Some(b'e'));
/// assert!(constraints.required().contains(b's'));
/// assert!(constraints.excluded_at(0).contains(b's'));
/// assert!(!constraints.allowed().contains(b'z'));
///
/// assert!(parse("a6", 5).is_err());
/// ```
pub fn parse(input: &str, length: usize) -> Result<ConstraintSet, ConstraintError> {
    let mut set = ConstraintSet::new();
    let mut pool = LetterSet::EMPTY;
    let mut open = false;
    let mut current: Option<u8> = None;
    let mut excluding = false;

    for (offset, ch) in input.char_indices() {
        if ch.is_whitespace() {
            continue;
        }
        let ch = ch.to_ascii_lowercase();
        match ch {
            'a'..='z' => {
                let letter = ch as u8;
                pool.insert(letter);
                current = Some(letter);
                excluding = false;
            }
            '*' => {
                open = true;
                current = None;
            }
            '!' => {
                let letter = current.ok_or(ConstraintError::Malformed {
                    offset,
                    reason: "'!' must follow a letter",
                })?;
                if excluding {
                    return Err(ConstraintError::Malformed {
                        offset,
                        reason: "'!' given twice for one letter",
                    });
                }
                excluding = true;
                set.require(letter)?;
            }
            '1'..='9' => {
                let letter = current.ok_or(ConstraintError::Malformed {
                    offset,
                    reason: "a position must follow a letter",
                })?;
                let position = (ch as u8 - b'1') as usize;
                if position >= length {
                    return Err(ConstraintError::PositionOutOfRange { position, length });
                }
                if excluding {
                    set.require_elsewhere(position, letter)?;
                } else {
                    set.fix(position, letter)?;
                }
            }
            '0' => {
                return Err(ConstraintError::Malformed {
                    offset,
                    reason: "positions are numbered from 1",
                });
            }
            other if other.is_alphabetic() => return Err(ConstraintError::InvalidLetter(other)),
            _ => {
                return Err(ConstraintError::Malformed {
                    offset,
                    reason: "unexpected character",
                });
            }
        }
    }

    if !open && !pool.is_empty() {
        set.restrict_to(pool)?;
    }
    Ok(set)
}

/// Renders the set in the restriction text form
///
/// Positions past [`MAX_TEXT_POSITION`] cannot be written and are left out.
impl fmt::Display for ConstraintSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.allowed() == LetterSet::ALL {
            write!(f, "*")?;
        }
        for letter in self.allowed().iter() {
            let fixed: Vec<usize> = self
                .fixed()
                .filter(|&(p, l)| l == letter && p < MAX_TEXT_POSITION)
                .map(|(p, _)| p + 1)
                .collect();
            let excluded: Vec<usize> = self
                .exclusions()
                .filter(|&(p, set)| set.contains(letter) && p < MAX_TEXT_POSITION)
                .map(|(p, _)| p + 1)
                .collect();
            let required = self.required().contains(letter);

            if self.allowed() == LetterSet::ALL && !required && excluded.is_empty() {
                continue;
            }

            write!(f, "{}", letter as char)?;
            for p in &fixed {
                write!(f, "{p}")?;
            }
            if !excluded.is_empty() || (required && fixed.is_empty()) {
                write!(f, "!")?;
                for p in &excluded {
                    write!(f, "{p}")?;
                }
            }
        }
        Ok(())
    }
}
