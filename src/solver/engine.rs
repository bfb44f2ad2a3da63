//! Main guess engine

use super::error::EngineError;
use super::knowledge::Knowledge;
use super::policy::{self, Tier};
use crate::core::{Feedback, Word};
use crate::vision::{DisplaySpec, PixelSource, decode_each};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;

/// Heuristic guessing bot for one game session
///
/// Owns the shrinking word pool and the evidence gathered so far. Every
/// guess it hands out is removed from the pool, so it never repeats itself.
pub struct GuessEngine<R = StdRng> {
    pool: Vec<Word>,
    knowledge: Knowledge,
    rng: R,
    guesses_made: usize,
    last_tier: Option<Tier>,
}

impl GuessEngine<StdRng> {
    /// Create an engine with an OS-seeded random source
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        Self::with_rng(words, StdRng::from_os_rng())
    }

    /// Create an engine whose guess sequence is reproducible
    ///
    /// # Examples
    /// ```
    /// use wordy_bot::core::Word;
    /// use wordy_bot::solver::GuessEngine;
    ///
    /// let words = ["apple", "berry", "crane"].map(Word::new);
    /// let mut a = GuessEngine::seeded(words.clone(), 9);
    /// let mut b = GuessEngine::seeded(words, 9);
    /// assert_eq!(a.select_guess().unwrap(), b.select_guess().unwrap());
    /// ```
    pub fn seeded(words: impl IntoIterator<Item = Word>, seed: u64) -> Self {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GuessEngine<R> {
    /// Create an engine drawing randomness from `rng`
    ///
    /// Duplicate and empty words are dropped; the first occurrence keeps its
    /// place in the pool order.
    pub fn with_rng(words: impl IntoIterator<Item = Word>, rng: R) -> Self {
        let mut seen = FxHashSet::default();
        let pool: Vec<Word> = words
            .into_iter()
            .filter(|word| !word.is_empty() && seen.insert(word.clone()))
            .collect();
        log::debug!("engine created with {} candidate words", pool.len());

        Self {
            pool,
            knowledge: Knowledge::new(),
            rng,
            guesses_made: 0,
            last_tier: None,
        }
    }

    /// Choose the next guess and remove it from the pool
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyCandidates`] once the pool is exhausted.
    pub fn select_guess(&mut self) -> Result<Word, EngineError> {
        let selection = policy::select(&self.pool, &self.knowledge, &mut self.rng)
            .ok_or(EngineError::EmptyCandidates)?;

        let guess = self.pool.remove(selection.index);
        self.guesses_made += 1;
        self.last_tier = Some(selection.tier);
        log::debug!(
            "guess {}: {guess} ({}, {} words left)",
            self.guesses_made,
            selection.tier,
            self.pool.len()
        );
        Ok(guess)
    }

    /// Absorb direct per-letter feedback for an earlier guess
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] when `feedback` and `guess`
    /// differ in length. Knowledge is left untouched in that case.
    pub fn record_feedback(&mut self, guess: &Word, feedback: &[Feedback]) -> Result<(), EngineError> {
        let entries: Vec<Option<Feedback>> = feedback.iter().copied().map(Some).collect();
        self.record_partial_feedback(guess, &entries)
    }

    /// Like [`record_feedback`](Self::record_feedback), but entries may be
    /// unknown. Unknown entries teach nothing and are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] on a length mismatch.
    pub fn record_partial_feedback(
        &mut self,
        guess: &Word,
        feedback: &[Option<Feedback>],
    ) -> Result<(), EngineError> {
        if feedback.len() != guess.len() {
            return Err(EngineError::InvalidInput {
                expected: guess.len(),
                actual: feedback.len(),
            });
        }
        self.knowledge.absorb(guess, feedback);
        Ok(())
    }

    /// Decode a rendered feedback image and absorb what it shows
    ///
    /// Blocks whose color cannot be mapped are logged and skipped rather than
    /// aborting the whole turn.
    ///
    /// # Errors
    ///
    /// Same as [`record_partial_feedback`](Self::record_partial_feedback). The
    /// decoder yields one entry per letter, so a mismatch cannot occur here.
    pub fn record_image_feedback<P: PixelSource + ?Sized>(
        &mut self,
        guess: &Word,
        image: &P,
        spec: &DisplaySpec,
    ) -> Result<(), EngineError> {
        let entries: Vec<Option<Feedback>> = decode_each(guess, image, spec)
            .into_iter()
            .map(|decoded| {
                decoded
                    .inspect_err(|err| log::warn!("{guess}: {err}"))
                    .ok()
            })
            .collect();
        self.record_partial_feedback(guess, &entries)
    }

    /// Words that can still be guessed, in pool order
    #[must_use]
    pub fn pool(&self) -> &[Word] {
        &self.pool
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    #[must_use]
    pub const fn knowledge(&self) -> &Knowledge {
        &self.knowledge
    }

    #[must_use]
    pub const fn guesses_made(&self) -> usize {
        self.guesses_made
    }

    /// The rule that produced the most recent guess
    #[must_use]
    pub const fn last_tier(&self) -> Option<Tier> {
        self.last_tier
    }

    /// The secret word, if every position has been confirmed
    #[must_use]
    pub fn solution(&self) -> Option<Word> {
        self.knowledge.solution()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback::{Absent, CorrectPlace, PresentWrongPlace};
    use crate::core::Pattern;
    use crate::vision::render_pattern;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|&w| Word::new(w)).collect()
    }

    #[test]
    fn guess_comes_from_pool_and_is_removed() {
        let mut engine = GuessEngine::seeded(words(&["APPLE", "BERRY", "CRANE"]), 1);
        let guess = engine.select_guess().unwrap();

        assert!(["APPLE", "BERRY", "CRANE"].contains(&guess.text()));
        assert_eq!(engine.remaining(), 2);
        assert!(!engine.pool().contains(&guess));
        assert_eq!(engine.guesses_made(), 1);
        assert_eq!(engine.last_tier(), Some(Tier::Open));
    }

    #[test]
    fn guesses_are_never_repeated() {
        let mut engine = GuessEngine::seeded(words(&["APPLE", "BERRY", "CRANE", "SLATE"]), 2);
        let mut seen = Vec::new();
        while let Ok(guess) = engine.select_guess() {
            assert!(!seen.contains(&guess));
            seen.push(guess);
        }
        assert_eq!(seen.len(), 4);
        assert_eq!(engine.select_guess(), Err(EngineError::EmptyCandidates));
    }

    #[test]
    fn pool_is_deduplicated_in_order() {
        let engine = GuessEngine::seeded(words(&["crane", "CRANE", "", "slate", "Crane"]), 0);
        let texts: Vec<&str> = engine.pool().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["CRANE", "SLATE"]);
    }

    #[test]
    fn crane_feedback_scenario() {
        let mut engine = GuessEngine::seeded(words(&["CRANE", "GHAST"]), 3);
        let crane = Word::new("CRANE");
        engine
            .record_feedback(&crane, &[Absent, Absent, CorrectPlace, Absent, Absent])
            .unwrap();

        let knowledge = engine.knowledge();
        assert_eq!(knowledge.positions()[2], Some('A'));
        for letter in ['C', 'R', 'N', 'E'] {
            assert!(knowledge.invalid().contains(&letter));
        }
    }

    #[test]
    fn berry_feedback_restricts_to_words_with_b() {
        let pool = words(&["CRANE", "MOULD", "ABBOT", "BASIC", "SLATE", "FOCUS"]);
        for seed in 0..10 {
            let mut engine = GuessEngine::seeded(pool.clone(), seed);
            engine
                .record_feedback(
                    &Word::new("BERRY"),
                    &[PresentWrongPlace, Absent, Absent, Absent, Absent],
                )
                .unwrap();
            assert_eq!(engine.knowledge().misplaced().get(&'B'), Some(&0));

            let guess = engine.select_guess().unwrap();
            assert!(guess.has_letter('B'), "seed {seed} picked {guess}");
        }
    }

    #[test]
    fn known_position_constrains_later_guesses() {
        let pool = words(&["SLATE", "BLOCK", "CHANT", "GRAND", "PLAZA", "MOULD"]);
        let mut engine = GuessEngine::seeded(pool, 4);
        engine
            .record_feedback(&Word::new("CRANE"), &[Absent, Absent, CorrectPlace, Absent, Absent])
            .unwrap();

        let guess = engine.select_guess().unwrap();
        assert_eq!(guess.char_at(2), Some('A'));
        assert_eq!(engine.last_tier(), Some(Tier::RankedByPosition));
    }

    #[test]
    fn length_mismatch_is_rejected_without_side_effects() {
        let mut engine = GuessEngine::seeded(words(&["CRANE"]), 5);
        let err = engine
            .record_feedback(&Word::new("CRANE"), &[CorrectPlace, Absent])
            .unwrap_err();

        assert_eq!(err, EngineError::InvalidInput { expected: 5, actual: 2 });
        assert!(!engine.knowledge().has_known_position());
        assert!(engine.knowledge().invalid().is_empty());
    }

    #[test]
    fn recording_same_feedback_twice_changes_nothing() {
        let mut engine = GuessEngine::seeded(words(&["CRANE"]), 6);
        let guess = Word::new("SLATE");
        let feedback = [Absent, PresentWrongPlace, CorrectPlace, Absent, CorrectPlace];

        engine.record_feedback(&guess, &feedback).unwrap();
        let first = engine.knowledge().clone();
        engine.record_feedback(&guess, &feedback).unwrap();
        assert_eq!(engine.knowledge(), &first);
    }

    #[test]
    fn all_green_reveals_solution() {
        let mut engine = GuessEngine::seeded(words(&["CRANE", "SLATE"]), 7);
        let guess = engine.select_guess().unwrap();
        engine.record_feedback(&guess, Pattern::perfect(5).entries()).unwrap();
        assert_eq!(engine.solution(), Some(guess));
    }

    #[test]
    fn image_feedback_matches_direct_feedback() {
        let spec = DisplaySpec::default();
        let guess = Word::new("CRANE");
        let pattern = Pattern::calculate(&guess, &Word::new("SLATE"));
        let image = render_pattern(&pattern, &spec);

        let mut direct = GuessEngine::seeded(words(&["SLATE"]), 8);
        direct.record_feedback(&guess, pattern.entries()).unwrap();

        let mut decoded = GuessEngine::seeded(words(&["SLATE"]), 8);
        decoded.record_image_feedback(&guess, &image, &spec).unwrap();

        assert_eq!(decoded.knowledge(), direct.knowledge());
    }
}
