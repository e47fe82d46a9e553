//! Word list loading utilities
//!
//! Reads dictionaries from plain text files (one word per line) or from the
//! embedded constants. Entries that are not valid words are skipped.

use crate::core::Word;
use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Blank lines and lines starting with `#` are ignored; invalid entries are
/// skipped and counted in a debug log line.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordsieve::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/simple.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content, &path.display().to_string()))
}

fn words_from_lines(content: &str, source: &str) -> Vec<Word> {
    let mut skipped = 0usize;
    let words: Vec<Word> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let word = Word::new(line).ok();
            if word.is_none() {
                skipped += 1;
            }
            word
        })
        .collect();

    if skipped > 0 {
        debug!("Skipped {skipped} invalid entries in {source}");
    }
    words
}

/// Convert an embedded string slice to words
///
/// # Examples
/// ```
/// use wordsieve::wordlists::loader::words_from_slice;
/// use wordsieve::wordlists::WORDLE;
///
/// let words = words_from_slice(WORDLE);
/// assert_eq!(words.len(), WORDLE.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "at"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "at");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "it's", "", "slate", "ab1"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn lines_skip_comments_and_blanks() {
        let words = words_from_lines("# header\ncrane\n\n  Slate  \nno way\n", "test");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "slate"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_from_file("/nonexistent/wordsieve/words.txt").is_err());
    }
}
