//! Core domain types for the word game
//!
//! Root words, candidate normalization, and the letter-pool feasibility check.
//! Everything here is pure and has no knowledge of rounds or dictionaries.

mod letters;
mod word;

pub use letters::{LetterPool, is_feasible};
pub use word::{RootWord, RootWordError, normalize_candidate};
