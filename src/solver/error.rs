//! Errors raised by the guess engine

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// No word is left to guess. With the fallback tiers in place this only
    /// happens once the pool itself is exhausted.
    #[error("no candidate words remain in the pool")]
    EmptyCandidates,

    #[error("feedback has {actual} entries but the guess has {expected} letters")]
    InvalidInput { expected: usize, actual: usize },
}
