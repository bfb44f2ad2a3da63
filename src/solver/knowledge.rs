//! Accumulated evidence about the secret word
//!
//! Three structures grow monotonically over a game:
//! - known positions: slot `i` holds the letter confirmed green there
//! - misplaced letters: letter -> first index where it came back yellow
//! - invalid letters: letters confirmed absent from the word entirely
//!
//! On top of those, per-letter count bounds track duplicates: a guess that
//! shows a letter green/yellow `n` times raises its minimum to `n`, and a
//! gray for the same letter in that guess pins its maximum to `n`. A letter
//! is only invalid when its maximum is zero.

use crate::core::{Feedback, WORD_LENGTH, Word};
use rustc_hash::{FxHashMap, FxHashSet};

/// How many copies of a letter the secret word can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterBounds {
    pub min: usize,
    pub max: Option<usize>,
}

impl LetterBounds {
    #[must_use]
    pub fn allows(self, count: usize) -> bool {
        self.max.is_none_or(|max| count <= max)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Knowledge {
    positions: [Option<char>; WORD_LENGTH],
    misplaced: FxHashMap<char, usize>,
    invalid: FxHashSet<char>,
    bounds: FxHashMap<char, LetterBounds>,
}

impl Knowledge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn positions(&self) -> &[Option<char>; WORD_LENGTH] {
        &self.positions
    }

    #[must_use]
    pub const fn misplaced(&self) -> &FxHashMap<char, usize> {
        &self.misplaced
    }

    #[must_use]
    pub const fn invalid(&self) -> &FxHashSet<char> {
        &self.invalid
    }

    #[must_use]
    pub fn bounds(&self, letter: char) -> LetterBounds {
        self.bounds.get(&letter).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn has_known_position(&self) -> bool {
        self.positions.iter().any(Option::is_some)
    }

    #[must_use]
    pub fn has_misplaced(&self) -> bool {
        !self.misplaced.is_empty()
    }

    /// The secret word, once every position is known
    #[must_use]
    pub fn solution(&self) -> Option<Word> {
        let letters: Option<String> = self.positions.iter().copied().collect();
        letters.map(Word::new)
    }

    /// Absorb one guess worth of feedback
    ///
    /// `None` entries are unknown results and are skipped; the indices of the
    /// remaining entries still line up with the guess. A letter with an
    /// unknown entry is never ruled out or capped by this guess, since the
    /// missing block may have been green or yellow. Callers check that the
    /// lengths agree.
    pub(crate) fn absorb(&mut self, guess: &Word, feedback: &[Option<Feedback>]) {
        let mut confirmed: FxHashMap<char, usize> = FxHashMap::default();
        let mut grayed: FxHashSet<char> = FxHashSet::default();
        let mut unknown: FxHashSet<char> = FxHashSet::default();

        for (&letter, entry) in guess.chars().iter().zip(feedback) {
            match entry {
                Some(f) if f.is_present() => *confirmed.entry(letter).or_insert(0) += 1,
                Some(_) => {
                    grayed.insert(letter);
                }
                None => {
                    unknown.insert(letter);
                }
            }
        }
        grayed.retain(|letter| !unknown.contains(letter));

        for (i, (&letter, entry)) in guess.chars().iter().zip(feedback).enumerate() {
            match entry {
                Some(Feedback::CorrectPlace) => self.fix_position(i, letter),
                Some(Feedback::PresentWrongPlace) => {
                    self.misplaced.entry(letter).or_insert(i);
                }
                Some(Feedback::Absent) if grayed.contains(&letter) => {
                    let seen_here = confirmed.get(&letter).copied().unwrap_or(0);
                    if seen_here == 0 && self.bounds(letter).min == 0 && self.invalid.insert(letter) {
                        log::debug!("{letter} ruled out by {guess}");
                    }
                }
                Some(Feedback::Absent) | None => {}
            }
        }

        for (&letter, &count) in &confirmed {
            if self.invalid.remove(&letter) {
                log::warn!("{letter} was ruled out earlier but {guess} shows it in the word");
            }
            let bounds = self.bounds.entry(letter).or_default();
            bounds.min = bounds.min.max(count);
            if bounds.max.is_some_and(|max| max < bounds.min) {
                bounds.max = None;
            }
        }

        for letter in grayed {
            let count = confirmed.get(&letter).copied().unwrap_or(0);
            let bounds = self.bounds.entry(letter).or_default();
            let count = count.max(bounds.min);
            bounds.max = Some(bounds.max.map_or(count, |max| max.min(count)));
        }
    }

    fn fix_position(&mut self, index: usize, letter: char) {
        let Some(slot) = self.positions.get_mut(index) else {
            log::warn!("ignoring green {letter} at index {index}, past the board width");
            return;
        };
        match *slot {
            None => {
                *slot = Some(letter);
                log::debug!("position {index} fixed to {letter}");
            }
            Some(known) if known != letter => {
                log::warn!("position {index} is already {known}; ignoring conflicting {letter}");
            }
            Some(_) => {}
        }
    }

    /// Number of positions where `word` agrees with a known slot
    #[must_use]
    pub fn position_score(&self, word: &Word) -> usize {
        self.positions
            .iter()
            .enumerate()
            .filter(|&(i, known)| known.is_some() && word.char_at(i) == *known)
            .count()
    }

    /// Every known slot holds the same letter in `word`
    #[must_use]
    pub fn matches_positions(&self, word: &Word) -> bool {
        self.positions
            .iter()
            .enumerate()
            .all(|(i, known)| known.is_none_or(|letter| word.char_at(i) == Some(letter)))
    }

    /// `word` uses no invalid letter and no letter more often than its cap
    #[must_use]
    pub fn respects_exclusions(&self, word: &Word) -> bool {
        if word.chars().iter().any(|c| self.invalid.contains(c)) {
            return false;
        }
        self.bounds
            .iter()
            .all(|(&letter, bounds)| bounds.allows(word.count_of(letter)))
    }

    /// `word` contains every misplaced letter somewhere
    #[must_use]
    pub fn contains_misplaced(&self, word: &Word) -> bool {
        self.misplaced.keys().all(|&letter| word.has_letter(letter))
    }
}
