//! Accumulated knowledge about the hidden word
//!
//! A `ConstraintSet` only ever tightens: every operation adds a fact, and any
//! fact that contradicts what is already known is rejected with a
//! [`ConstraintError`] while leaving the set untouched.

use super::letters::LetterSet;
use super::pattern::{Mark, Pattern};
use super::word::{MAX_WORD_LENGTH, Word};
use std::collections::BTreeMap;
use thiserror::Error;

/// A contradictory or malformed constraint
///
/// Positions are stored zero-based and reported one-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintError {
    #[error("'{}' cannot be required: it is already known to be absent", *.letter as char)]
    RequiredButAbsent { letter: u8 },

    #[error("'{}' cannot be ruled out: it is already known to be present", *.letter as char)]
    AbsentButRequired { letter: u8 },

    #[error(
        "position {} is already fixed to '{}', cannot fix it to '{}'",
        .position + 1, *.existing as char, *.letter as char
    )]
    PositionConflict {
        position: usize,
        existing: u8,
        letter: u8,
    },

    #[error("'{}' cannot be both fixed and excluded at position {}", *.letter as char, .position + 1)]
    FixedAndExcluded { position: usize, letter: u8 },

    #[error("position {} is outside a word of {length} letters", .position + 1)]
    PositionOutOfRange { position: usize, length: usize },

    #[error("'{0}' is not a letter")]
    InvalidLetter(char),

    #[error("malformed restriction at offset {offset}: {reason}")]
    Malformed { offset: usize, reason: &'static str },

    #[error("feedback covers {feedback} positions but the guess has {guess}")]
    LengthMismatch { guess: usize, feedback: usize },
}

/// Known facts about the hidden word
///
/// - `required`: letters known to be in the word
/// - `fixed`: exact position matches
/// - `exclusions`: letters known not to sit at a position
/// - `allowed`: letters that may appear anywhere; absent letters are missing from it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConstraintSet {
    required: LetterSet,
    fixed: BTreeMap<usize, u8>,
    exclusions: BTreeMap<usize, LetterSet>,
    allowed: LetterSet,
}

impl Default for ConstraintSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstraintSet {
    /// No knowledge: every letter allowed, nothing required or placed
    #[must_use]
    pub fn new() -> Self {
        Self {
            required: LetterSet::EMPTY,
            fixed: BTreeMap::new(),
            exclusions: BTreeMap::new(),
            allowed: LetterSet::ALL,
        }
    }

    #[inline]
    #[must_use]
    pub const fn required(&self) -> LetterSet {
        self.required
    }

    #[inline]
    #[must_use]
    pub const fn allowed(&self) -> LetterSet {
        self.allowed
    }

    /// Letter fixed at a zero-based position, if known
    #[inline]
    #[must_use]
    pub fn fixed_at(&self, position: usize) -> Option<u8> {
        self.fixed.get(&position).copied()
    }

    /// All fixed `(position, letter)` pairs in position order
    pub fn fixed(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.fixed.iter().map(|(&p, &l)| (p, l))
    }

    /// Positional exclusions in position order
    pub fn exclusions(&self) -> impl Iterator<Item = (usize, LetterSet)> + '_ {
        self.exclusions.iter().map(|(&p, &s)| (p, s))
    }

    /// Letters that cannot sit at a position
    ///
    /// Includes globally absent letters, which are excluded everywhere.
    #[must_use]
    pub fn excluded_at(&self, position: usize) -> LetterSet {
        let positional = self
            .exclusions
            .get(&position)
            .copied()
            .unwrap_or(LetterSet::EMPTY);
        positional.union(LetterSet::ALL.difference(self.allowed))
    }

    /// True when no fact has been recorded
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::new()
    }

    /// Record that a letter is somewhere in the word
    ///
    /// # Errors
    /// Fails if the letter is not a lowercase ASCII letter or is known absent
    pub fn require(&mut self, letter: u8) -> Result<(), ConstraintError> {
        check_letter(letter)?;
        if !self.allowed.contains(letter) {
            return Err(ConstraintError::RequiredButAbsent { letter });
        }
        self.required.insert(letter);
        Ok(())
    }

    /// Record that `letter` sits exactly at `position`
    ///
    /// # Errors
    /// Fails on an out-of-range position, a position already fixed to another
    /// letter, a letter excluded at that position, or a letter known absent
    pub fn fix(&mut self, position: usize, letter: u8) -> Result<(), ConstraintError> {
        check_letter(letter)?;
        check_position(position)?;
        match self.fixed_at(position) {
            Some(existing) if existing == letter => return Ok(()),
            Some(existing) => {
                return Err(ConstraintError::PositionConflict {
                    position,
                    existing,
                    letter,
                });
            }
            None => {}
        }
        if self.excluded_at(position).contains(letter) && self.allowed.contains(letter) {
            return Err(ConstraintError::FixedAndExcluded { position, letter });
        }
        self.require(letter)?;
        self.fixed.insert(position, letter);
        Ok(())
    }

    /// Record that `letter` does not sit at `position`
    ///
    /// Does not by itself make the letter required.
    ///
    /// # Errors
    /// Fails if `position` is already fixed to `letter`
    pub fn exclude(&mut self, position: usize, letter: u8) -> Result<(), ConstraintError> {
        check_letter(letter)?;
        check_position(position)?;
        if self.fixed_at(position) == Some(letter) {
            return Err(ConstraintError::FixedAndExcluded { position, letter });
        }
        self.exclusions.entry(position).or_default().insert(letter);
        Ok(())
    }

    /// Record that `letter` is in the word but not at `position`
    ///
    /// # Errors
    /// See [`ConstraintSet::require`] and [`ConstraintSet::exclude`]
    pub fn require_elsewhere(&mut self, position: usize, letter: u8) -> Result<(), ConstraintError> {
        check_letter(letter)?;
        check_position(position)?;
        if self.fixed_at(position) == Some(letter) {
            return Err(ConstraintError::FixedAndExcluded { position, letter });
        }
        self.require(letter)?;
        self.exclusions.entry(position).or_default().insert(letter);
        Ok(())
    }

    /// Record that a letter does not appear anywhere in the word
    ///
    /// # Errors
    /// Fails if the letter is already required
    pub fn forbid(&mut self, letter: u8) -> Result<(), ConstraintError> {
        check_letter(letter)?;
        if self.required.contains(letter) {
            return Err(ConstraintError::AbsentButRequired { letter });
        }
        self.allowed.remove(letter);
        Ok(())
    }

    /// Forbid every letter outside `pool`
    ///
    /// # Errors
    /// Fails without modifying the set if a required letter is outside `pool`
    pub fn restrict_to(&mut self, pool: LetterSet) -> Result<(), ConstraintError> {
        let removed = self.allowed.difference(pool);
        if let Some(letter) = removed.iter().find(|&l| self.required.contains(l)) {
            return Err(ConstraintError::AbsentButRequired { letter });
        }
        self.allowed = self.allowed.difference(removed);
        Ok(())
    }

    /// Merge the facts implied by one guess and its feedback
    ///
    /// - Correct: fixed position
    /// - Present: required letter, excluded at this position
    /// - Absent: globally absent, unless the same letter is marked correct or
    ///   present elsewhere in this guess; then only excluded at this position
    ///
    /// # Errors
    /// Returns the first contradiction found; the set is left unchanged
    ///
    /// # Examples
    /// ```
    /// use wordsieve::core::{ConstraintSet, Pattern, Word};
    ///
    /// let guess = Word::new("trace").unwrap();
    /// let answer = Word::new("crane").unwrap();
    /// let mut constraints = ConstraintSet::new();
    /// constraints
    ///     .apply_feedback(&guess, Pattern::calculate(&guess, &answer))
    ///     .unwrap();
    ///
    /// assert_eq!(constraints.fixed_at(1), Some(b'r'));
    /// assert!(constraints.required().contains(b'c'));
    /// assert!(!constraints.allowed().contains(b't'));
    /// ```
    pub fn apply_feedback(&mut self, guess: &Word, pattern: Pattern) -> Result<(), ConstraintError> {
        if pattern.len() != guess.len() {
            return Err(ConstraintError::LengthMismatch {
                guess: guess.len(),
                feedback: pattern.len(),
            });
        }

        let marks: Vec<Mark> = pattern.marks().collect();
        let confirmed: LetterSet = guess
            .bytes()
            .iter()
            .zip(&marks)
            .filter(|&(_, &mark)| mark != Mark::Absent)
            .map(|(&letter, _)| letter)
            .collect();

        let mut next = self.clone();
        for (position, (&letter, &mark)) in guess.bytes().iter().zip(&marks).enumerate() {
            match mark {
                Mark::Correct => next.fix(position, letter)?,
                Mark::Present => next.require_elsewhere(position, letter)?,
                Mark::Absent if confirmed.contains(letter) => next.exclude(position, letter)?,
                Mark::Absent => next.forbid(letter)?,
            }
        }

        *self = next;
        Ok(())
    }

    /// Merge every fact of `other` into this set
    ///
    /// # Errors
    /// Returns the first contradiction found; the set is left unchanged
    pub fn merge(&mut self, other: &Self) -> Result<(), ConstraintError> {
        let mut next = self.clone();
        for letter in other.required.iter() {
            next.require(letter)?;
        }
        for (position, letter) in other.fixed() {
            next.fix(position, letter)?;
        }
        for (position, letters) in other.exclusions() {
            for letter in letters.iter() {
                next.exclude(position, letter)?;
            }
        }
        next.restrict_to(other.allowed)?;

        *self = next;
        Ok(())
    }
}

fn check_letter(letter: u8) -> Result<(), ConstraintError> {
    if letter.is_ascii_lowercase() {
        Ok(())
    } else {
        Err(ConstraintError::InvalidLetter(letter as char))
    }
}

const fn check_position(position: usize) -> Result<(), ConstraintError> {
    if position < MAX_WORD_LENGTH {
        Ok(())
    } else {
        Err(ConstraintError::PositionOutOfRange {
            position,
            length: MAX_WORD_LENGTH,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback(guess: &str, answer: &str) -> (Word, Pattern) {
        let guess = Word::new(guess).unwrap();
        let pattern = Pattern::calculate(&guess, &Word::new(answer).unwrap());
        (guess, pattern)
    }

    #[test]
    fn new_set_is_unconstrained() {
        let set = ConstraintSet::new();
        assert!(set.is_unconstrained());
        assert_eq!(set.allowed(), LetterSet::ALL);
        assert!(set.required().is_empty());
    }

    #[test]
    fn fix_implies_required() {
        let mut set = ConstraintSet::new();
        set.fix(2, b'a').unwrap();
        assert_eq!(set.fixed_at(2), Some(b'a'));
        assert!(set.required().contains(b'a'));
        // Same fact twice is a no-op
        set.fix(2, b'a').unwrap();
        assert_eq!(set.fixed().count(), 1);
    }

    #[test]
    fn fix_conflicting_letter_rejected() {
        let mut set = ConstraintSet::new();
        set.fix(0, b'c').unwrap();
        let before = set.clone();
        assert_eq!(
            set.fix(0, b't'),
            Err(ConstraintError::PositionConflict {
                position: 0,
                existing: b'c',
                letter: b't'
            })
        );
        assert_eq!(set, before);
    }

    #[test]
    fn fixed_and_excluded_rejected_both_ways() {
        let mut set = ConstraintSet::new();
        set.exclude(1, b's').unwrap();
        assert_eq!(
            set.fix(1, b's'),
            Err(ConstraintError::FixedAndExcluded {
                position: 1,
                letter: b's'
            })
        );

        let mut set = ConstraintSet::new();
        set.fix(1, b's').unwrap();
        assert!(set.exclude(1, b's').is_err());
        assert!(set.require_elsewhere(1, b's').is_err());
    }

    #[test]
    fn required_and_absent_conflict() {
        let mut set = ConstraintSet::new();
        set.require(b'e').unwrap();
        assert_eq!(
            set.forbid(b'e'),
            Err(ConstraintError::AbsentButRequired { letter: b'e' })
        );

        let mut set = ConstraintSet::new();
        set.forbid(b'q').unwrap();
        assert_eq!(
            set.require(b'q'),
            Err(ConstraintError::RequiredButAbsent { letter: b'q' })
        );
        assert!(set.fix(0, b'q').is_err());
    }

    #[test]
    fn forbidden_letters_excluded_everywhere() {
        let mut set = ConstraintSet::new();
        set.forbid(b'z').unwrap();
        set.exclude(3, b'a').unwrap();
        assert!(set.excluded_at(0).contains(b'z'));
        assert!(set.excluded_at(3).contains(b'z'));
        assert!(set.excluded_at(3).contains(b'a'));
        assert!(!set.excluded_at(0).contains(b'a'));
    }

    #[test]
    fn invalid_letters_and_positions() {
        let mut set = ConstraintSet::new();
        assert_eq!(set.require(b'A'), Err(ConstraintError::InvalidLetter('A')));
        assert!(matches!(
            set.fix(MAX_WORD_LENGTH, b'a'),
            Err(ConstraintError::PositionOutOfRange { .. })
        ));
    }

    #[test]
    fn restrict_to_keeps_required() {
        let mut set = ConstraintSet::new();
        set.require(b's').unwrap();
        let pool: LetterSet = b"abc".iter().copied().collect();
        assert!(set.restrict_to(pool).is_err());
        assert_eq!(set.allowed(), LetterSet::ALL);

        let pool: LetterSet = b"abcs".iter().copied().collect();
        set.restrict_to(pool).unwrap();
        assert_eq!(set.allowed(), pool);
    }

    #[test]
    fn feedback_trace_against_crane() {
        let (guess, pattern) = feedback("trace", "crane");
        let mut set = ConstraintSet::new();
        set.apply_feedback(&guess, pattern).unwrap();

        assert!(!set.allowed().contains(b't'));
        assert_eq!(set.fixed_at(1), Some(b'r'));
        assert_eq!(set.fixed_at(2), Some(b'a'));
        assert_eq!(set.fixed_at(4), Some(b'e'));
        assert!(set.required().contains(b'c'));
        assert!(set.excluded_at(3).contains(b'c'));
    }

    #[test]
    fn feedback_absent_duplicate_only_excludes_position() {
        // SPEED vs ABIDE: the second E is absent, but E is present elsewhere
        let (guess, pattern) = feedback("speed", "abide");
        let mut set = ConstraintSet::new();
        set.apply_feedback(&guess, pattern).unwrap();

        assert!(set.allowed().contains(b'e'));
        assert!(set.required().contains(b'e'));
        assert!(set.excluded_at(2).contains(b'e'));
        assert!(set.excluded_at(3).contains(b'e'));
        assert!(!set.allowed().contains(b's'));
        assert!(!set.allowed().contains(b'p'));
    }

    #[test]
    fn feedback_absent_duplicate_next_to_correct() {
        // EERIE vs THERE: final E correct, second E absent
        let (guess, pattern) = feedback("eerie", "there");
        let mut set = ConstraintSet::new();
        set.apply_feedback(&guess, pattern).unwrap();

        assert_eq!(set.fixed_at(4), Some(b'e'));
        assert!(set.allowed().contains(b'e'));
        assert!(set.excluded_at(1).contains(b'e'));
        assert!(!set.allowed().contains(b'i'));
    }

    #[test]
    fn feedback_length_mismatch() {
        let guess = Word::new("crane").unwrap();
        let mut set = ConstraintSet::new();
        assert_eq!(
            set.apply_feedback(&guess, Pattern::perfect(4)),
            Err(ConstraintError::LengthMismatch {
                guess: 5,
                feedback: 4
            })
        );
    }

    #[test]
    fn contradictory_feedback_leaves_set_unchanged() {
        let mut set = ConstraintSet::new();
        set.forbid(b'c').unwrap();
        let before = set.clone();

        let (guess, pattern) = feedback("crane", "crane");
        assert!(set.apply_feedback(&guess, pattern).is_err());
        assert_eq!(set, before);
    }

    #[test]
    fn merge_unions_facts() {
        let mut a = ConstraintSet::new();
        a.fix(0, b'c').unwrap();
        let mut b = ConstraintSet::new();
        b.require_elsewhere(1, b's').unwrap();
        b.forbid(b'z').unwrap();

        a.merge(&b).unwrap();
        assert_eq!(a.fixed_at(0), Some(b'c'));
        assert!(a.required().contains(b's'));
        assert!(a.excluded_at(1).contains(b's'));
        assert!(!a.allowed().contains(b'z'));
    }

    #[test]
    fn merge_conflict_leaves_set_unchanged() {
        let mut a = ConstraintSet::new();
        a.fix(0, b'c').unwrap();
        let before = a.clone();
        let mut b = ConstraintSet::new();
        b.fix(0, b't').unwrap();

        assert!(a.merge(&b).is_err());
        assert_eq!(a, before);
    }
}
