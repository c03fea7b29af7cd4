//! Root word bank
//!
//! Owns the pool of root words and picks one uniformly at random per round.

mod embedded;
pub mod loader;

pub use embedded::{START_WORDS, START_WORDS_COUNT};
pub use loader::WordBankError;

use crate::core::RootWord;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::path::Path;

/// Root word used when the bank has nothing to offer
pub const FALLBACK_ROOT: &str = "fallback";

/// Pool of candidate root words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordBank {
    words: Vec<String>,
}

impl WordBank {
    /// Bank backed by the word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        let words = loader::words_from_slice(START_WORDS);
        log::info!("Loaded {} embedded root words", words.len());
        Self { words }
    }

    /// Load a newline-delimited word list from disk
    ///
    /// # Errors
    ///
    /// Returns `WordBankError::ResourceUnavailable` if the file cannot be
    /// located or read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, WordBankError> {
        let path = path.as_ref();
        let words = loader::load_from_file(path)?;
        log::info!("Loaded {} root words from {}", words.len(), path.display());
        Ok(Self { words })
    }

    /// Bank from in-memory newline-delimited text
    #[must_use]
    pub fn from_lines(content: &str) -> Self {
        Self {
            words: loader::parse_lines(content),
        }
    }

    /// Pick a root word uniformly at random
    ///
    /// Falls back to [`FALLBACK_ROOT`] when the bank is empty, so a round can
    /// always start.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::wordbank::{FALLBACK_ROOT, WordBank};
    ///
    /// let empty = WordBank::from_lines("");
    /// assert_eq!(empty.pick_root(&mut rand::rng()).text(), FALLBACK_ROOT);
    /// ```
    pub fn pick_root<R: Rng + ?Sized>(&self, rng: &mut R) -> RootWord {
        self.words
            .choose(rng)
            .and_then(|word| RootWord::new(word.as_str()).ok())
            .unwrap_or_else(|| {
                log::warn!("Word bank is empty, using fallback root '{FALLBACK_ROOT}'");
                fallback_root()
            })
    }

    /// All words in the bank, in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn fallback_root() -> RootWord {
    RootWord::new(FALLBACK_ROOT).expect("fallback root is a valid word")
}
