//! Dictionary lookups
//!
//! Defines the `DictionaryChecker` trait and a word-list backed implementation.

mod word_list;

pub use word_list::{DictionaryError, WordListDictionary};

/// Answers whether a word is real in a given language
///
/// The game treats this as an opaque predicate: it is called with the
/// normalized candidate and the configured language code, and its answer is
/// honored exactly.
pub trait DictionaryChecker {
    /// Whether `word` is a recognized word of `language`
    fn is_real(&self, word: &str, language: &str) -> bool;
}

impl DictionaryChecker for Box<dyn DictionaryChecker> {
    fn is_real(&self, word: &str, language: &str) -> bool {
        self.as_ref().is_real(word, language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EverythingIsReal;

    impl DictionaryChecker for EverythingIsReal {
        fn is_real(&self, _word: &str, _language: &str) -> bool {
            true
        }
    }

    #[test]
    fn boxed_checker_delegates() {
        let boxed: Box<dyn DictionaryChecker> = Box::new(EverythingIsReal);
        assert!(boxed.is_real("qwxz", "en"));

        let list: Box<dyn DictionaryChecker> =
            Box::new(WordListDictionary::from_words(["dean"], "en"));
        assert!(list.is_real("dean", "en"));
        assert!(!list.is_real("qwxz", "en"));
    }
}
