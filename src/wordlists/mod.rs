//! Dictionaries
//!
//! `Simple` and `Wordle` are embedded in the binary; `Big` and `Huge` are
//! optional and loaded from files at startup. Lookups by [`DictionaryId`]
//! never fail: a dictionary that does not apply or was not loaded resolves
//! to `Simple`.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{SIMPLE, SIMPLE_COUNT, WORDLE, WORDLE_COUNT};

use crate::core::Word;
use log::warn;
use std::fmt;
use std::io;
use std::path::Path;
use std::str::FromStr;

/// Length of the words in the `Wordle` dictionary
pub const WORDLE_LENGTH: usize = 5;

/// Identifies one of the available dictionaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DictionaryId {
    #[default]
    Simple,
    Wordle,
    Big,
    Huge,
}

impl DictionaryId {
    pub const ALL: [Self; 4] = [Self::Simple, Self::Wordle, Self::Big, Self::Huge];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Wordle => "wordle",
            Self::Big => "big",
            Self::Huge => "huge",
        }
    }

    /// Resolve a dictionary name, falling back to `Simple` with a warning
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            warn!("Unknown dictionary '{name}', using {}", Self::default());
            Self::default()
        })
    }
}

/// Error for a dictionary name that matches nothing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dictionary '{0}'")]
pub struct UnknownDictionary(pub String);

impl FromStr for DictionaryId {
    type Err = UnknownDictionary;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "simple" | "default" => Ok(Self::Simple),
            _ => Self::ALL
                .into_iter()
                .find(|id| id.name() == normalized)
                .ok_or_else(|| UnknownDictionary(s.to_string())),
        }
    }
}

impl fmt::Display for DictionaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Registry of every dictionary available to the process
#[derive(Debug, Clone)]
pub struct Dictionaries {
    simple: Dictionary,
    wordle: Dictionary,
    big: Option<Dictionary>,
    huge: Option<Dictionary>,
}

impl Dictionaries {
    /// Registry holding only the embedded dictionaries
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            simple: Dictionary::from_slice(SIMPLE),
            wordle: Dictionary::from_slice(WORDLE),
            big: None,
            huge: None,
        }
    }

    /// Registry built from explicit dictionaries
    #[must_use]
    pub fn new(simple: Dictionary, wordle: Dictionary) -> Self {
        Self {
            simple,
            wordle,
            big: None,
            huge: None,
        }
    }

    /// Install a file-backed `Big` or `Huge` dictionary
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read, or `InvalidInput` when
    /// `id` names an embedded dictionary
    pub fn load<P: AsRef<Path>>(mut self, id: DictionaryId, path: P) -> io::Result<Self> {
        let slot = match id {
            DictionaryId::Big => &mut self.big,
            DictionaryId::Huge => &mut self.huge,
            DictionaryId::Simple | DictionaryId::Wordle => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("the {id} dictionary is embedded and cannot be replaced"),
                ));
            }
        };
        *slot = Some(Dictionary::load(path)?);
        Ok(self)
    }

    /// Dictionary actually used for `id` and words of `length` letters
    ///
    /// `Wordle` only covers five-letter words; any other length, or a file
    /// dictionary that was never loaded, resolves to `Simple`.
    #[must_use]
    pub fn resolve(&self, id: DictionaryId, length: usize) -> (DictionaryId, &Dictionary) {
        match id {
            DictionaryId::Simple => (DictionaryId::Simple, &self.simple),
            DictionaryId::Wordle if length == WORDLE_LENGTH => (DictionaryId::Wordle, &self.wordle),
            DictionaryId::Wordle => (DictionaryId::Simple, &self.simple),
            DictionaryId::Big | DictionaryId::Huge => {
                let loaded = if id == DictionaryId::Big {
                    self.big.as_ref()
                } else {
                    self.huge.as_ref()
                };
                loaded.map_or_else(
                    || {
                        warn!("Dictionary '{id}' is not loaded, using {}", DictionaryId::Simple);
                        (DictionaryId::Simple, &self.simple)
                    },
                    |dictionary| (id, dictionary),
                )
            }
        }
    }

    /// Words of `length` letters from the dictionary `id` resolves to
    #[must_use]
    pub fn partition(&self, id: DictionaryId, length: usize) -> &[Word] {
        self.resolve(id, length).1.partition(length)
    }
}

impl Default for Dictionaries {
    fn default() -> Self {
        Self::embedded()
    }
}
