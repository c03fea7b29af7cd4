//! Word Scramble
//!
//! Game engine for a single-player word game: a root word is presented and the
//! player spells new words from its letters.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::RootWord;
//! use word_scramble::dictionary::WordListDictionary;
//! use word_scramble::session::{GameSession, RejectionKind, SessionConfig};
//! use word_scramble::wordbank::WordBank;
//!
//! let dictionary = WordListDictionary::from_words(["dean", "range"], "en");
//! let mut session = GameSession::new(WordBank::embedded(), dictionary, SessionConfig::default());
//! session.start_round_with(RootWord::new("garden").unwrap());
//!
//! assert!(session.submit("dean").unwrap().is_accepted());
//! let again = session.submit("dean").unwrap();
//! assert_eq!(again.rejection_kind(), Some(RejectionKind::DuplicateWord));
//! assert_eq!(session.score(), 4);
//! ```

// Core domain types
pub mod core;

// Root word pool
pub mod wordbank;

// Real-word lookups
pub mod dictionary;

// Rounds and the validation pipeline
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
