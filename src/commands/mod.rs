//! Command implementations

pub mod benchmark;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, pick_targets, run_benchmark};
pub use simple::{run_session, run_simple};
pub use solve::{FeedbackMode, GuessStep, SolveConfig, SolveResult, new_engine, play_game, solve_word};
