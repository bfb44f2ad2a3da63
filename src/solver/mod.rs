//! Guess selection
//!
//! [`GuessEngine`] owns the candidate pool and the accumulated
//! [`Knowledge`]. Each turn it ranks or filters the pool with the rules in
//! [`policy`], draws one word at random from the winning tier, and removes
//! it so it is never offered twice.

mod engine;
mod error;
mod knowledge;
pub mod policy;

pub use engine::GuessEngine;
pub use error::EngineError;
pub use knowledge::{Knowledge, LetterBounds};
pub use policy::{Selection, Tier};
