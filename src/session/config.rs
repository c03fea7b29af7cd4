//! Session configuration

/// Language code used when none is configured
pub const DEFAULT_LANGUAGE: &str = "en";

/// Settings fixed for the lifetime of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Language code passed to the dictionary on every lookup
    pub language: String,
}

impl SessionConfig {
    #[must_use]
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_language_is_english() {
        assert_eq!(SessionConfig::default().language, "en");
    }

    #[test]
    fn custom_language() {
        assert_eq!(SessionConfig::new("fr").language, "fr");
    }
}
