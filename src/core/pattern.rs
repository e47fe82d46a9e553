//! Guess feedback calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (letter not in the solution, or all copies accounted for)
//! - 1 = Present (letter in the solution, wrong position)
//! - 2 = Correct (letter in the right position)
//!
//! Position `i` contributes `digit × 3^i`. Words are capped at
//! [`MAX_WORD_LENGTH`] letters so the code always fits in a `u32`.

use super::Word;
use super::word::MAX_WORD_LENGTH;

/// Feedback for a single position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Absent,
    Present,
    Correct,
}

impl Mark {
    const fn digit(self) -> u32 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    const fn from_digit(digit: u32) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }
}

/// Feedback pattern for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    code: u32,
    len: u8,
}

impl Pattern {
    /// All-correct pattern for a word of `len` letters
    #[must_use]
    pub const fn perfect(len: usize) -> Self {
        debug_assert!(len <= MAX_WORD_LENGTH);
        Self {
            code: 3u32.pow(len as u32) - 1,
            len: len as u8,
        }
    }

    /// Build a pattern from explicit marks
    ///
    /// # Panics
    /// Panics in debug mode if more than [`MAX_WORD_LENGTH`] marks are given
    #[must_use]
    pub fn from_marks(marks: &[Mark]) -> Self {
        debug_assert!(marks.len() <= MAX_WORD_LENGTH);
        let mut code = 0u32;
        let mut multiplier = 1u32;
        for mark in marks {
            code += mark.digit() * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self {
            code,
            len: marks.len() as u8,
        }
    }

    /// Get the raw base-3 code
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.code
    }

    /// Number of positions covered
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.code == Self::perfect(self.len as usize).code
    }

    /// Calculate the pattern when `guess` is played against `answer`
    ///
    /// Duplicate letters follow the standard rule:
    /// 1. First pass: mark exact matches correct and consume them from the answer's letters
    /// 2. Second pass: left to right, mark a letter present while unconsumed copies remain
    ///
    /// # Examples
    /// ```
    /// use wordsieve::core::{Mark, Pattern, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let answer = Word::new("abide").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// // Only the first E is marked present: ABIDE holds a single E
    /// let marks: Vec<Mark> = pattern.marks().collect();
    /// assert_eq!(marks[2], Mark::Present);
    /// assert_eq!(marks[3], Mark::Absent);
    /// assert_eq!(marks[4], Mark::Present);
    /// ```
    ///
    /// # Panics
    /// Panics in debug mode if the words differ in length
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        debug_assert_eq!(guess.len(), answer.len(), "guess and answer lengths differ");

        let mut available = *answer.counts();
        let guess = guess.bytes();
        let answer = answer.bytes();
        let len = guess.len().min(answer.len());

        let mut result = [Mark::Absent; MAX_WORD_LENGTH];

        // First pass: greens consume their letter, the rest stays available for yellows
        #[allow(clippy::needless_range_loop)]
        for i in 0..len {
            if guess[i] == answer[i] {
                result[i] = Mark::Correct;
                available[(answer[i] - b'a') as usize] -= 1;
            }
        }

        // Second pass: yellows from the remaining pool
        #[allow(clippy::needless_range_loop)]
        for i in 0..len {
            if result[i] == Mark::Absent {
                let slot = &mut available[(guess[i] - b'a') as usize];
                if *slot > 0 {
                    result[i] = Mark::Present;
                    *slot -= 1;
                }
            }
        }

        Self::from_marks(&result[..len])
    }

    /// Decode the per-position marks
    pub fn marks(self) -> impl Iterator<Item = Mark> {
        let mut val = self.code;
        (0..self.len).map(move |_| {
            let mark = Mark::from_digit(val % 3);
            val /= 3;
            mark
        })
    }

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use wordsieve::core::Pattern;
    ///
    /// let p1 = Pattern::from_str("GY-GY").unwrap();
    /// let p2 = Pattern::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let marks = s
            .chars()
            .map(|ch| match ch {
                'G' | 'g' | '🟩' => Some(Mark::Correct),
                'Y' | 'y' | '🟨' => Some(Mark::Present),
                '-' | '_' | '⬜' => Some(Mark::Absent),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()?;

        if marks.is_empty() || marks.len() > MAX_WORD_LENGTH {
            return None;
        }

        Some(Self::from_marks(&marks))
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordsieve::core::Pattern;
    ///
    /// let p = Pattern::from_str("GY-GY").unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.marks()
            .map(|mark| match mark {
                Mark::Correct => '🟩',
                Mark::Present => '🟨',
                Mark::Absent => '⬜',
            })
            .collect()
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}
