//! Word-list backed dictionary

use super::DictionaryChecker;
use rustc_hash::FxHashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error raised when a dictionary file cannot be read
#[derive(Debug)]
pub enum DictionaryError {
    Unreadable { path: PathBuf, source: io::Error },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable { path, source } => {
                write!(f, "Dictionary '{}' could not be read: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unreadable { source, .. } => Some(source),
        }
    }
}

/// Dictionary for a single language, backed by a set of known words
///
/// Entries are stored lowercased. Lookups for any other language answer
/// `false`.
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Build a dictionary from an iterator of words
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{DictionaryChecker, WordListDictionary};
    ///
    /// let dictionary = WordListDictionary::from_words(["Dean", "range"], "en");
    /// assert!(dictionary.is_real("dean", "en"));
    /// assert!(!dictionary.is_real("dean", "fr"));
    /// assert!(!dictionary.is_real("gx", "en"));
    /// ```
    pub fn from_words<I, S>(words: I, language: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        Self {
            language: language.into(),
            words,
        }
    }

    /// Build a dictionary from newline-delimited text
    #[must_use]
    pub fn from_lines(content: &str, language: impl Into<String>) -> Self {
        Self::from_words(content.lines(), language)
    }

    /// Load a newline-delimited dictionary file, such as `/usr/share/dict/words`
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Unreadable` if the file cannot be read.
    pub fn load<P: AsRef<Path>>(
        path: P,
        language: impl Into<String>,
    ) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| DictionaryError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let dictionary = Self::from_lines(&content, language);
        log::info!(
            "Loaded {} dictionary words ({}) from {}",
            dictionary.len(),
            dictionary.language,
            path.display()
        );
        Ok(dictionary)
    }

    /// Language code this dictionary answers for
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl DictionaryChecker for WordListDictionary {
    fn is_real(&self, word: &str, language: &str) -> bool {
        language == self.language && self.words.contains(word)
    }
}
