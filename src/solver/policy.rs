//! Guess selection policy
//!
//! Tiers are tried in priority order:
//! 1. Some position known: rank the pool by known-position matches and take
//!    the best word that fits every known slot and avoids excluded letters.
//! 2. Some letter misplaced: random word containing every misplaced letter
//!    and avoiding excluded letters.
//! 3. Nothing known: random word avoiding excluded letters.
//!
//! When a tier finds nothing, selection falls back to a random word avoiding
//! excluded letters, then to a random word from the whole pool.

use super::Knowledge;
use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;

/// Which rule produced a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    RankedByPosition,
    Misplaced,
    Open,
    ExcludeInvalidFallback,
    WholePoolFallback,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RankedByPosition => "ranked by known positions",
            Self::Misplaced => "contains misplaced letters",
            Self::Open => "open pick",
            Self::ExcludeInvalidFallback => "fallback: excluding invalid letters",
            Self::WholePoolFallback => "fallback: whole pool",
        };
        f.write_str(name)
    }
}

/// A chosen pool index and the tier that chose it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub index: usize,
    pub tier: Tier,
}

/// Pool indices ordered by known-position score, best first
///
/// Scores are computed fresh from the current knowledge. The sort is stable,
/// so ties keep pool order.
#[must_use]
pub fn rank_by_known_positions(pool: &[Word], knowledge: &Knowledge) -> Vec<(usize, usize)> {
    let mut ranked: Vec<(usize, usize)> = pool
        .iter()
        .enumerate()
        .map(|(i, word)| (i, knowledge.position_score(word)))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Pick a word from `pool` given what is known
///
/// Returns `None` only for an empty pool.
pub fn select<R: Rng + ?Sized>(pool: &[Word], knowledge: &Knowledge, rng: &mut R) -> Option<Selection> {
    if pool.is_empty() {
        return None;
    }

    let preferred = if knowledge.has_known_position() {
        rank_by_known_positions(pool, knowledge)
            .into_iter()
            .map(|(i, _)| i)
            .find(|&i| knowledge.respects_exclusions(&pool[i]) && knowledge.matches_positions(&pool[i]))
            .map(|index| Selection {
                index,
                tier: Tier::RankedByPosition,
            })
    } else if knowledge.has_misplaced() {
        pick_where(pool, rng, |word| {
            knowledge.respects_exclusions(word) && knowledge.contains_misplaced(word)
        })
        .map(|index| Selection {
            index,
            tier: Tier::Misplaced,
        })
    } else {
        pick_where(pool, rng, |word| knowledge.respects_exclusions(word)).map(|index| Selection {
            index,
            tier: Tier::Open,
        })
    };

    preferred
        .or_else(|| {
            pick_where(pool, rng, |word| knowledge.respects_exclusions(word)).map(|index| Selection {
                index,
                tier: Tier::ExcludeInvalidFallback,
            })
        })
        .or_else(|| {
            pick_where(pool, rng, |_| true).map(|index| Selection {
                index,
                tier: Tier::WholePoolFallback,
            })
        })
}

/// Uniform random index among words passing `keep`
fn pick_where<R, F>(pool: &[Word], rng: &mut R, keep: F) -> Option<usize>
where
    R: Rng + ?Sized,
    F: Fn(&Word) -> bool,
{
    let eligible: Vec<usize> = pool
        .iter()
        .enumerate()
        .filter(|&(_, word)| keep(word))
        .map(|(i, _)| i)
        .collect();
    eligible.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback::{self, Absent, CorrectPlace, PresentWrongPlace};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pool(words: &[&str]) -> Vec<Word> {
        words.iter().map(|&w| Word::new(w)).collect()
    }

    fn knowledge_from(guess: &str, feedback: &[Feedback]) -> Knowledge {
        let mut knowledge = Knowledge::new();
        let entries: Vec<Option<Feedback>> = feedback.iter().copied().map(Some).collect();
        knowledge.absorb(&Word::new(guess), &entries);
        knowledge
    }

    #[test]
    fn empty_pool_selects_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(select(&[], &Knowledge::new(), &mut rng), None);
    }

    #[test]
    fn open_pick_avoids_invalid_letters() {
        let words = pool(&["CRANE", "MOULD", "CRATE"]);
        let knowledge = knowledge_from("TREAT", &[Absent; 5]);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let selection = select(&words, &knowledge, &mut rng).unwrap();
            assert_eq!(words[selection.index].text(), "MOULD");
            assert_eq!(selection.tier, Tier::Open);
        }
    }

    #[test]
    fn ranking_prefers_more_known_positions_and_keeps_ties_in_order() {
        let words = pool(&["SLATE", "CRANE", "CRATE", "BRAKE"]);
        let knowledge = knowledge_from("CRANK", &[CorrectPlace, CorrectPlace, CorrectPlace, Absent, Absent]);

        let ranked = rank_by_known_positions(&words, &knowledge);
        let order: Vec<usize> = ranked.iter().map(|&(i, _)| i).collect();
        assert_eq!(order, vec![1, 2, 3, 0]);
        assert_eq!(ranked[0].1, 3);
        assert_eq!(ranked[2].1, 2);
    }

    #[test]
    fn ranked_tier_takes_best_consistent_word() {
        let words = pool(&["SLATE", "CRANE", "CRATE", "GRACE"]);
        let knowledge = knowledge_from("CRAMP", &[CorrectPlace, CorrectPlace, CorrectPlace, Absent, Absent]);
        let mut rng = StdRng::seed_from_u64(3);

        let selection = select(&words, &knowledge, &mut rng).unwrap();
        assert_eq!(words[selection.index].text(), "CRANE");
        assert_eq!(selection.tier, Tier::RankedByPosition);
    }

    #[test]
    fn misplaced_tier_requires_letter_presence() {
        let words = pool(&["CRANE", "ABBOT", "MOULD", "BASIC"]);
        let knowledge = knowledge_from("BERRY", &[PresentWrongPlace, Absent, Absent, Absent, Absent]);
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..20 {
            let selection = select(&words, &knowledge, &mut rng).unwrap();
            assert!(words[selection.index].has_letter('B'));
            assert_eq!(selection.tier, Tier::Misplaced);
        }
    }

    #[test]
    fn falls_back_to_excluding_invalid_letters() {
        // Nothing in the pool has the known A in the middle
        let words = pool(&["MOULD", "CHOIR"]);
        let knowledge = knowledge_from("PLANT", &[Absent, Absent, CorrectPlace, Absent, Absent]);
        let mut rng = StdRng::seed_from_u64(5);

        let selection = select(&words, &knowledge, &mut rng).unwrap();
        assert_eq!(selection.tier, Tier::ExcludeInvalidFallback);
        assert_eq!(words[selection.index].text(), "CHOIR");
    }

    #[test]
    fn misplaced_tier_falls_back_when_no_word_has_the_letter() {
        let knowledge = knowledge_from("BERRY", &[PresentWrongPlace, Absent, Absent, Absent, Absent]);
        let mut rng = StdRng::seed_from_u64(13);

        let words = pool(&["MOULD", "CHAIN"]);
        let selection = select(&words, &knowledge, &mut rng).unwrap();
        assert_eq!(selection.tier, Tier::ExcludeInvalidFallback);
        assert!(!words[selection.index].has_letter('B'));

        // Every word also uses a ruled-out letter
        let words = pool(&["CRANE", "TREAT"]);
        let selection = select(&words, &knowledge, &mut rng).unwrap();
        assert_eq!(selection.tier, Tier::WholePoolFallback);
        assert!(selection.index < words.len());
    }

    #[test]
    fn falls_back_to_whole_pool_as_last_resort() {
        let words = pool(&["CRANE", "CRATE"]);
        let knowledge = knowledge_from("CHEST", &[Absent, Absent, Absent, Absent, Absent]);
        let mut rng = StdRng::seed_from_u64(5);

        let selection = select(&words, &knowledge, &mut rng).unwrap();
        assert_eq!(selection.tier, Tier::WholePoolFallback);
        assert!(selection.index < words.len());
    }

    #[test]
    fn same_seed_same_choice() {
        let words = pool(&["APPLE", "BERRY", "CRANE", "SLATE", "MOULD", "GRACE"]);
        let knowledge = Knowledge::new();

        let first = select(&words, &knowledge, &mut StdRng::seed_from_u64(42));
        let second = select(&words, &knowledge, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }
}
