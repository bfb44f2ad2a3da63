//! Word representation
//!
//! A Word stores an uppercase guessable word along with its characters for
//! positional lookup. Word lists are not validated: anything that survives
//! trimming is kept, so a `Word` may be shorter or longer than
//! [`WORD_LENGTH`].

use rustc_hash::FxHashMap;
use std::fmt;

/// Number of letters in every board row
pub const WORD_LENGTH: usize = 5;

/// An uppercase word with per-position character access
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: Vec<char>,
}

impl Word {
    /// Create a new Word, trimming whitespace and normalizing to uppercase
    ///
    /// # Examples
    /// ```
    /// use wordy_bot::core::Word;
    ///
    /// let word = Word::new("  crane\n");
    /// assert_eq!(word.text(), "CRANE");
    /// assert_eq!(word.char_at(2), Some('A'));
    /// ```
    #[must_use]
    pub fn new(text: impl AsRef<str>) -> Self {
        let text = text.as_ref().trim().to_uppercase();
        let chars = text.chars().collect();
        Self { text, chars }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the characters of the word in order
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters (not bytes) in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Get the character at a specific position, if the word is long enough
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> Option<char> {
        self.chars.get(position).copied()
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.chars.contains(&letter)
    }

    /// How many times a letter occurs in the word
    #[must_use]
    pub fn count_of(&self, letter: char) -> usize {
        self.chars.iter().filter(|&&c| c == letter).count()
    }

    /// Get the count of each letter in the word
    ///
    /// Used for pattern calculation with duplicate letters.
    pub(crate) fn char_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
