//! Word list loading utilities
//!
//! Parses newline-delimited word lists from files or in-memory text.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error raised when a word list resource cannot be used
///
/// This is a packaging defect rather than a player error: callers are
/// expected to abort startup when they see it.
#[derive(Debug)]
pub enum WordBankError {
    ResourceUnavailable { path: PathBuf, source: io::Error },
}

impl fmt::Display for WordBankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResourceUnavailable { path, source } => {
                write!(f, "Word list '{}' is unavailable: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for WordBankError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ResourceUnavailable { source, .. } => Some(source),
        }
    }
}

/// Load words from a file
///
/// # Errors
///
/// Returns `WordBankError::ResourceUnavailable` if the file cannot be opened
/// or read.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordBankError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordBankError::ResourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_lines(&content))
}

/// Parse a newline-delimited list into usable root words
///
/// Lines are trimmed and lowercased. Blank lines, lines with inner
/// whitespace and single-letter entries are skipped.
///
/// # Examples
/// ```
/// use word_scramble::wordbank::loader::parse_lines;
///
/// let words = parse_lines("Garden\n\nlisten\r\na\nnot one\n");
/// assert_eq!(words, vec!["garden", "listen"]);
/// ```
#[must_use]
pub fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if is_usable(trimmed) {
                Some(trimmed.to_lowercase())
            } else {
                None
            }
        })
        .collect()
}

/// Convert an embedded string slice to owned words, applying the same filter
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice
        .iter()
        .map(|s| s.trim())
        .filter(|s| is_usable(s))
        .map(str::to_lowercase)
        .collect()
}

fn is_usable(word: &str) -> bool {
    word.chars().count() > 1 && !word.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_lines_skips_blank_lines() {
        let words = parse_lines("garden\n\n\nlisten\n");
        assert_eq!(words, vec!["garden", "listen"]);
    }

    #[test]
    fn parse_lines_trims_and_lowercases() {
        let words = parse_lines("  GARDEN  \r\nListen\t\n");
        assert_eq!(words, vec!["garden", "listen"]);
    }

    #[test]
    fn parse_lines_skips_degenerate_entries() {
        let words = parse_lines("a\nice cream\nok\n");
        assert_eq!(words, vec!["ok"]);
    }

    #[test]
    fn parse_lines_empty_input() {
        assert!(parse_lines("").is_empty());
        assert!(parse_lines("\n\n").is_empty());
    }

    #[test]
    fn words_from_slice_filters() {
        let words = words_from_slice(&["garden", "x", "Listen", ""]);
        assert_eq!(words, vec!["garden", "listen"]);
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join("word_scramble_loader_test.txt");
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "absolute").unwrap();
            writeln!(file, "abstract").unwrap();
            writeln!(file).unwrap();
        }

        let words = load_from_file(&path).unwrap();
        assert_eq!(words, vec!["absolute", "abstract"]);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn load_from_missing_file_is_unavailable() {
        let path = std::env::temp_dir().join("word_scramble_does_not_exist.txt");
        let _ = fs::remove_file(&path);

        let err = load_from_file(&path).unwrap_err();
        assert!(matches!(
            err,
            WordBankError::ResourceUnavailable { ref path, .. } if path.ends_with("word_scramble_does_not_exist.txt")
        ));
        assert!(err.to_string().contains("unavailable"));
    }
}
