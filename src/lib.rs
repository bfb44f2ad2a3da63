//! Wordy Bot
//!
//! A word-guessing bot for five-letter word games. It keeps a pool of
//! candidate words, learns from per-letter feedback (given directly or read
//! off a rendered row of colored blocks) and picks its next guess with a
//! small set of tiered heuristics.
//!
//! # Quick Start
//!
//! ```rust
//! use wordy_bot::core::{Pattern, Word};
//! use wordy_bot::solver::GuessEngine;
//!
//! let mut engine = GuessEngine::seeded(["crane", "slate", "plaza"].map(Word::new), 7);
//! let guess = engine.select_guess().unwrap();
//!
//! let pattern = Pattern::calculate(&guess, &Word::new("slate"));
//! engine.record_feedback(&guess, pattern.entries()).unwrap();
//! assert_eq!(engine.remaining(), 2);
//! ```

// Core domain types
pub mod core;

// Guess selection
pub mod solver;

// Image-based feedback
pub mod vision;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
