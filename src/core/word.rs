//! Root word and candidate representation
//!
//! A `RootWord` is the validated word whose letters form a round's pool.
//! Candidates are plain strings normalized with [`normalize_candidate`].

use std::fmt;

/// The word a round is played against
///
/// Always lowercase, non-empty, and free of whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RootWord {
    text: String,
}

/// Error type for invalid root words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootWordError {
    Empty,
    ContainsWhitespace,
}

impl fmt::Display for RootWordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Root word must not be empty"),
            Self::ContainsWhitespace => write!(f, "Root word must not contain whitespace"),
        }
    }
}

impl std::error::Error for RootWordError {}

impl RootWord {
    /// Create a new root word from a string
    ///
    /// # Errors
    /// Returns `RootWordError` if the word is empty or contains whitespace.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::RootWord;
    ///
    /// let root = RootWord::new("Garden").unwrap();
    /// assert_eq!(root.text(), "garden");
    ///
    /// assert!(RootWord::new("").is_err());
    /// assert!(RootWord::new("two words").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, RootWordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(RootWordError::Empty);
        }

        if text.chars().any(char::is_whitespace) {
            return Err(RootWordError::ContainsWhitespace);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters (characters, not bytes)
    #[inline]
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.text.chars().count()
    }
}

impl fmt::Display for RootWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for RootWord {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Normalize a raw submission: lowercase, surrounding whitespace trimmed
///
/// Returns `None` when nothing is left after normalization.
///
/// # Examples
/// ```
/// use word_scramble::core::normalize_candidate;
///
/// assert_eq!(normalize_candidate(" Cat \n").as_deref(), Some("cat"));
/// assert_eq!(normalize_candidate("   "), None);
/// ```
#[must_use]
pub fn normalize_candidate(raw: &str) -> Option<String> {
    let normalized = raw.to_lowercase().trim().to_string();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_word_creation_valid() {
        let root = RootWord::new("garden").unwrap();
        assert_eq!(root.text(), "garden");
        assert_eq!(root.letter_count(), 6);
    }

    #[test]
    fn root_word_uppercase_normalized() {
        let root = RootWord::new("GaRdEn").unwrap();
        assert_eq!(root.text(), "garden");
    }

    #[test]
    fn root_word_rejects_empty() {
        assert_eq!(RootWord::new(""), Err(RootWordError::Empty));
    }

    #[test]
    fn root_word_rejects_whitespace() {
        assert_eq!(
            RootWord::new("gar den"),
            Err(RootWordError::ContainsWhitespace)
        );
        assert_eq!(
            RootWord::new(" garden"),
            Err(RootWordError::ContainsWhitespace)
        );
        assert_eq!(
            RootWord::new("garden\n"),
            Err(RootWordError::ContainsWhitespace)
        );
    }

    #[test]
    fn root_word_letter_count_is_chars() {
        let root = RootWord::new("café").unwrap();
        assert_eq!(root.letter_count(), 4);
    }

    #[test]
    fn root_word_display() {
        let root = RootWord::new("listen").unwrap();
        assert_eq!(format!("{root}"), "listen");
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_candidate("  LIT  ").as_deref(), Some("lit"));
        assert_eq!(normalize_candidate("\tDean\r\n").as_deref(), Some("dean"));
    }

    #[test]
    fn normalize_keeps_inner_whitespace() {
        assert_eq!(normalize_candidate(" a b ").as_deref(), Some("a b"));
    }

    #[test]
    fn normalize_empty_is_none() {
        assert_eq!(normalize_candidate(""), None);
        assert_eq!(normalize_candidate(" \t\n "), None);
    }
}
