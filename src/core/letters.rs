//! Compact set of lowercase ASCII letters
//!
//! Stored as a 26-bit mask so constraint sets stay `Copy`-cheap, hashable,
//! and fast to test during filtering.

use std::fmt;

/// Number of letters in the alphabet the solver works over
pub const ALPHABET_SIZE: usize = 26;

/// A set of lowercase ASCII letters (`b'a'..=b'z'`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Every letter `a` through `z`
    pub const ALL: Self = Self((1 << ALPHABET_SIZE) - 1);

    /// Map a lowercase letter to its alphabet index (0-25)
    ///
    /// Returns `None` for anything outside `a..=z`.
    #[inline]
    #[must_use]
    pub const fn index_of(letter: u8) -> Option<usize> {
        if letter.is_ascii_lowercase() {
            Some((letter - b'a') as usize)
        } else {
            None
        }
    }

    /// Map an alphabet index (0-25) back to its letter
    #[inline]
    #[must_use]
    pub const fn letter_at(index: usize) -> u8 {
        debug_assert!(index < ALPHABET_SIZE);
        b'a' + index as u8
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        match Self::index_of(letter) {
            Some(i) => self.0 & (1 << i) != 0,
            None => false,
        }
    }

    /// Add a letter; non-letters are ignored
    #[inline]
    pub const fn insert(&mut self, letter: u8) {
        if let Some(i) = Self::index_of(letter) {
            self.0 |= 1 << i;
        }
    }

    #[inline]
    pub const fn remove(&mut self, letter: u8) {
        if let Some(i) = Self::index_of(letter) {
            self.0 &= !(1 << i);
        }
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..ALPHABET_SIZE)
            .filter(move |&i| self.0 & (1 << i) != 0)
            .map(Self::letter_at)
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}
