//! Word solving command
//!
//! Lets the bot play one game against a known secret word.

use crate::core::{Pattern, Word};
use crate::solver::{EngineError, GuessEngine, Tier};
use crate::vision::{DisplaySpec, render_pattern};
use rand::Rng;

/// How the bot receives the result of each guess
#[derive(Debug, Clone, Default)]
pub enum FeedbackMode {
    /// Per-letter results handed over directly
    #[default]
    Direct,
    /// A rendered row of colored blocks that has to be decoded
    Image(DisplaySpec),
}

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
    pub mode: FeedbackMode,
    pub seed: Option<u64>,
}

impl SolveConfig {
    #[must_use]
    pub fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
            mode: FeedbackMode::Direct,
            seed: None,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub pattern: Pattern,
    pub tier: Tier,
    pub pool_before: usize,
    pub pool_after: usize,
}

/// Build a fresh engine over `words`, seeded when a seed is given
#[must_use]
pub fn new_engine(words: &[Word], seed: Option<u64>) -> GuessEngine {
    match seed {
        Some(seed) => GuessEngine::seeded(words.iter().cloned(), seed),
        None => GuessEngine::new(words.iter().cloned()),
    }
}

/// Solve a specific word with a fresh engine over `words`
///
/// # Errors
///
/// Returns an error if the engine rejects the feedback it is given, which
/// indicates a bug in the driving loop rather than bad input.
pub fn solve_word(config: &SolveConfig, words: &[Word]) -> Result<SolveResult, EngineError> {
    let mut engine = new_engine(words, config.seed);
    play_game(&mut engine, &Word::new(&config.target), &config.mode, config.max_guesses)
}

/// Play until the target is hit, the guess limit is reached, or the pool
/// runs dry
///
/// # Errors
///
/// Propagates feedback errors from the engine.
pub fn play_game<R: Rng>(
    engine: &mut GuessEngine<R>,
    target: &Word,
    mode: &FeedbackMode,
    max_guesses: usize,
) -> Result<SolveResult, EngineError> {
    if let FeedbackMode::Image(spec) = mode
        && !spec.samples_inside_blocks(target.len() as u32)
    {
        log::warn!(
            "{}px blocks with {}px spacing cannot be decoded reliably",
            spec.block_width,
            spec.space_between_letters
        );
    }

    let mut guesses = Vec::new();
    let mut success = false;

    while guesses.len() < max_guesses {
        let pool_before = engine.remaining();
        let guess = match engine.select_guess() {
            Ok(guess) => guess,
            Err(EngineError::EmptyCandidates) => {
                log::info!("ran out of words before finding {target}");
                break;
            }
            Err(err) => return Err(err),
        };

        let pattern = Pattern::calculate(&guess, target);
        match mode {
            FeedbackMode::Direct => engine.record_feedback(&guess, pattern.entries())?,
            FeedbackMode::Image(spec) => {
                let image = render_pattern(&pattern, spec);
                engine.record_image_feedback(&guess, &image, spec)?;
            }
        }

        success = pattern.is_perfect();
        guesses.push(GuessStep {
            word: guess.text().to_string(),
            pattern,
            tier: engine.last_tier().unwrap_or(Tier::WholePoolFallback),
            pool_before,
            pool_after: engine.remaining(),
        });
        if success {
            break;
        }
    }

    Ok(SolveResult {
        success,
        guesses,
        target: target.text().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn solves_single_word_pool() {
        let words = words_from_slice(&["crane"]);
        let mut config = SolveConfig::new("crane".to_string());
        config.seed = Some(1);

        let result = solve_word(&config, &words).unwrap();
        assert!(result.success);
        assert_eq!(result.guesses.len(), 1);
        assert_eq!(result.target, "CRANE");
        assert!(result.guesses[0].pattern.is_perfect());
    }

    #[test]
    fn never_exceeds_guess_limit() {
        let words = words_from_slice(WORDS);
        let mut config = SolveConfig::new("zebra".to_string());
        config.seed = Some(2);
        config.max_guesses = 4;

        let result = solve_word(&config, &words).unwrap();
        assert!(!result.success);
        assert_eq!(result.guesses.len(), 4);
    }

    #[test]
    fn stops_when_pool_is_exhausted() {
        let words = words_from_slice(&["apple", "berry"]);
        let mut config = SolveConfig::new("crane".to_string());
        config.seed = Some(3);

        let result = solve_word(&config, &words).unwrap();
        assert!(!result.success);
        assert_eq!(result.guesses.len(), 2);
    }

    #[test]
    fn guesses_are_distinct_and_pool_shrinks() {
        let words = words_from_slice(WORDS);
        let mut config = SolveConfig::new("house".to_string());
        config.seed = Some(4);
        config.max_guesses = 10;

        let result = solve_word(&config, &words).unwrap();
        for (i, step) in result.guesses.iter().enumerate() {
            assert_eq!(step.pool_after + 1, step.pool_before);
            assert!(result.guesses[..i].iter().all(|prev| prev.word != step.word));
        }
    }

    #[test]
    fn small_blocks_without_spacing_play_like_direct_mode() {
        let words = words_from_slice(WORDS);
        let spec = DisplaySpec::default().with_block_size(20, 20).with_spacing(0);
        assert!(spec.samples_inside_blocks(5));

        let config = |mode| SolveConfig {
            target: "slate".to_string(),
            max_guesses: 8,
            mode,
            seed: Some(6),
        };
        let direct = solve_word(&config(FeedbackMode::Direct), &words).unwrap();
        let image = solve_word(&config(FeedbackMode::Image(spec)), &words).unwrap();

        let words_a: Vec<&str> = direct.guesses.iter().map(|s| s.word.as_str()).collect();
        let words_b: Vec<&str> = image.guesses.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(words_a, words_b);
    }

    #[test]
    fn image_mode_plays_the_same_game_as_direct_mode() {
        let words = words_from_slice(WORDS);
        let direct = SolveConfig {
            target: "stone".to_string(),
            max_guesses: 8,
            mode: FeedbackMode::Direct,
            seed: Some(5),
        };
        let image = SolveConfig {
            mode: FeedbackMode::Image(DisplaySpec::default()),
            ..SolveConfig::new("stone".to_string())
        };
        let image = SolveConfig {
            max_guesses: 8,
            seed: Some(5),
            ..image
        };

        let a = solve_word(&direct, &words).unwrap();
        let b = solve_word(&image, &words).unwrap();
        let words_a: Vec<&str> = a.guesses.iter().map(|s| s.word.as_str()).collect();
        let words_b: Vec<&str> = b.guesses.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(words_a, words_b);
        assert_eq!(a.success, b.success);
    }
}
