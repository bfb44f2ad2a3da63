//! Benchmark command
//!
//! Plays many independent games and summarizes how the bot does.

use super::solve::{FeedbackMode, play_game};
use crate::core::Word;
use crate::solver::GuessEngine;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Settings shared by every game in a run
pub struct BenchmarkConfig {
    pub max_guesses: usize,
    pub mode: FeedbackMode,
    /// Game `i` uses seed `seed + i`
    pub seed: u64,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            max_guesses: 6,
            mode: FeedbackMode::Direct,
            seed: 0,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count -> number of solved games
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` distinct target words, reproducibly for a given seed
#[must_use]
pub fn pick_targets(words: &[Word], count: usize, seed: u64) -> Vec<Word> {
    let mut rng = StdRng::seed_from_u64(seed);
    words.choose_multiple(&mut rng, count).cloned().collect()
}

/// Play one game per target, in parallel
pub fn run_benchmark(words: &[Word], targets: &[Word], config: &BenchmarkConfig) -> BenchmarkResult {
    let start = Instant::now();

    let pb = if config.show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    ) {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let outcomes: Vec<Option<usize>> = targets
        .par_iter()
        .enumerate()
        .map(|(idx, target)| {
            let mut engine = GuessEngine::seeded(words.iter().cloned(), config.seed.wrapping_add(idx as u64));
            let outcome = match play_game(&mut engine, target, &config.mode, config.max_guesses) {
                Ok(result) if result.success => Some(result.guesses.len()),
                Ok(_) => None,
                Err(err) => {
                    log::error!("game against {target} aborted: {err}");
                    None
                }
            };
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_with_message("Complete!");
    summarize(&outcomes, start.elapsed())
}

fn summarize(outcomes: &[Option<usize>], duration: Duration) -> BenchmarkResult {
    let solved: Vec<usize> = outcomes.iter().flatten().copied().collect();
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    for &guesses in &solved {
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let total_words = outcomes.len();
    let average_guesses = if solved.is_empty() {
        0.0
    } else {
        solved.iter().sum::<usize>() as f64 / solved.len() as f64
    };
    let words_per_second = if duration.is_zero() {
        0.0
    } else {
        total_words as f64 / duration.as_secs_f64()
    };

    BenchmarkResult {
        total_words,
        solved: solved.len(),
        failed: total_words - solved.len(),
        average_guesses,
        min_guesses: solved.iter().copied().min().unwrap_or(0),
        max_guesses: solved.iter().copied().max().unwrap_or(0),
        distribution,
        duration,
        words_per_second,
    }
}
