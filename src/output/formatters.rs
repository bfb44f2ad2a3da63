//! Formatting utilities for terminal output

use crate::core::{Feedback, Pattern, Word};
use colored::Colorize;

/// Render each letter of `word` on the background its feedback would show
#[must_use]
pub fn colored_guess(word: &Word, pattern: &Pattern) -> String {
    word.chars()
        .iter()
        .zip(pattern.entries())
        .map(|(&letter, feedback)| {
            let cell = format!(" {letter} ");
            match feedback {
                Feedback::CorrectPlace => cell.black().on_green().bold().to_string(),
                Feedback::PresentWrongPlace => cell.black().on_yellow().bold().to_string(),
                Feedback::Absent => cell.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
