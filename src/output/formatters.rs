//! Formatting utilities for terminal output

use crate::core::{Mark, Pattern};
use colored::{ColoredString, Colorize};

/// Render a guess with each letter colored by its feedback mark
#[must_use]
pub fn colored_guess(word: &str, pattern: Pattern) -> String {
    word.chars()
        .zip(pattern.marks())
        .map(|(letter, mark)| colored_letter(letter, mark).to_string())
        .collect()
}

fn colored_letter(letter: char, mark: Mark) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match mark {
        Mark::Correct => text.black().on_green().bold(),
        Mark::Present => text.black().on_yellow().bold(),
        Mark::Absent => text.white().on_bright_black(),
    }
}

/// Create a progress bar string
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).clamp(0.0, 1.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing a letter weight relative to the candidate count
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn weight_bar(weight: usize, total: usize, width: usize) -> String {
    create_progress_bar(weight as f64, total as f64, width)
}
