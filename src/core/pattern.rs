//! Feedback for a single guess
//!
//! Each letter of a guess is scored as one of three states:
//! - `CorrectPlace` (green): the letter is at this exact position
//! - `PresentWrongPlace` (yellow): the letter is in the word elsewhere
//! - `Absent` (gray): no further copies of the letter are in the word
//!
//! A [`Pattern`] is the ordered sequence of those states for one guess.

use super::Word;
use std::fmt;

/// Result for one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    CorrectPlace,
    PresentWrongPlace,
    Absent,
}

impl Feedback {
    /// Parse a single feedback character
    ///
    /// Accepts `G`/`g`/🟩, `Y`/`y`/🟨 and `-`/`_`/`X`/`x`/⬜.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::CorrectPlace),
            'Y' | 'y' | '🟨' => Some(Self::PresentWrongPlace),
            '-' | '_' | 'X' | 'x' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::CorrectPlace => '🟩',
            Self::PresentWrongPlace => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Whether the letter is confirmed to be in the word
    #[inline]
    #[must_use]
    pub const fn is_present(self) -> bool {
        matches!(self, Self::CorrectPlace | Self::PresentWrongPlace)
    }
}

/// Feedback pattern for a whole guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(Vec<Feedback>);

impl Pattern {
    #[must_use]
    pub const fn new(entries: Vec<Feedback>) -> Self {
        Self(entries)
    }

    /// A pattern of `len` greens
    #[must_use]
    pub fn perfect(len: usize) -> Self {
        Self(vec![Feedback::CorrectPlace; len])
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[Feedback] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Non-empty and every entry is `CorrectPlace`
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&f| f == Feedback::CorrectPlace)
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// Implements the game's feedback rules, including duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches (greens) and remove them from the letter budget
    /// 2. Second pass: mark present-but-wrong-position (yellows) from what remains
    ///
    /// # Examples
    /// ```
    /// use wordy_bot::core::{Feedback, Pattern, Word};
    ///
    /// let pattern = Pattern::calculate(&Word::new("crane"), &Word::new("slate"));
    /// assert_eq!(pattern.to_string(), "--G-G");
    /// assert_eq!(pattern.entries()[2], Feedback::CorrectPlace);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut result = vec![Feedback::Absent; guess.len()];
        let mut answer_available = answer.char_counts();

        for (i, &letter) in guess.chars().iter().enumerate() {
            if answer.char_at(i) == Some(letter) {
                result[i] = Feedback::CorrectPlace;
                if let Some(count) = answer_available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (i, &letter) in guess.chars().iter().enumerate() {
            if result[i] == Feedback::CorrectPlace {
                continue;
            }
            if let Some(count) = answer_available.get_mut(&letter)
                && *count > 0
            {
                result[i] = Feedback::PresentWrongPlace;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Surrounding whitespace is ignored. Any unrecognized character rejects
    /// the whole string.
    ///
    /// # Examples
    /// ```
    /// use wordy_bot::core::Pattern;
    ///
    /// let p1 = Pattern::from_str("GY-GY").unwrap();
    /// let p2 = Pattern::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let entries = s
            .trim()
            .chars()
            .map(Feedback::from_char)
            .collect::<Option<Vec<_>>>()?;

        if entries.is_empty() {
            return None;
        }
        Some(Self(entries))
    }

    /// Convert pattern to emoji string, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.to_emoji()).collect()
    }

    #[must_use]
    pub fn count_greens(&self) -> usize {
        self.count(Feedback::CorrectPlace)
    }

    #[must_use]
    pub fn count_yellows(&self) -> usize {
        self.count(Feedback::PresentWrongPlace)
    }

    fn count(&self, kind: Feedback) -> usize {
        self.0.iter().filter(|&&f| f == kind).count()
    }
}

impl From<Vec<Feedback>> for Pattern {
    fn from(entries: Vec<Feedback>) -> Self {
        Self(entries)
    }
}

impl AsRef<[Feedback]> for Pattern {
    fn as_ref(&self) -> &[Feedback] {
        &self.0
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.0 {
            let ch = match entry {
                Feedback::CorrectPlace => 'G',
                Feedback::PresentWrongPlace => 'Y',
                Feedback::Absent => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
