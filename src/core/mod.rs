//! Core domain types for the guessing game
//!
//! Words and per-letter feedback. Nothing here holds game state.

mod pattern;
mod word;

pub use pattern::{Feedback, Pattern};
pub use word::{WORD_LENGTH, Word};
