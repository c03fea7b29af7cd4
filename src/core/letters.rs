//! Letter pool feasibility checks
//!
//! Treats the root word as a multiset of characters: each letter may be used
//! at most as many times as it occurs in the root.

use super::RootWord;
use rustc_hash::FxHashMap;

/// Character counts of a root word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
    counts: FxHashMap<char, usize>,
}

impl LetterPool {
    /// Build a pool from any string
    #[must_use]
    pub fn new(letters: &str) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for ch in letters.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// How many times `letter` is available
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Whether `candidate` can be spelled from this pool
    ///
    /// Consumes one occurrence per candidate character, in order, from a
    /// working copy. The pool itself is left untouched.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::new("aabb");
    /// assert!(pool.can_spell("ab"));
    /// assert!(pool.can_spell("aabb"));
    /// assert!(!pool.can_spell("aaabb"));
    /// ```
    #[must_use]
    pub fn can_spell(&self, candidate: &str) -> bool {
        let mut remaining = self.counts.clone();
        for ch in candidate.chars() {
            match remaining.get_mut(&ch) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return false,
            }
        }
        true
    }
}

impl From<&RootWord> for LetterPool {
    fn from(root: &RootWord) -> Self {
        Self::new(root.text())
    }
}

/// Whether `candidate` can be spelled using only the letters of `root`
#[must_use]
pub fn is_feasible(candidate: &str, root: &RootWord) -> bool {
    LetterPool::from(root).can_spell(candidate)
}
