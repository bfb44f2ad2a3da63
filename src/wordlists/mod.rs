//! Word lists for the guessing bot
//!
//! Provides an embedded default list compiled into the binary, plus loaders
//! for user-supplied lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
