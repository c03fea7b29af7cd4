//! Game session state and the candidate validation pipeline

use super::config::SessionConfig;
use super::outcome::{Rejection, SubmitOutcome};
use crate::core::{LetterPool, RootWord, normalize_candidate};
use crate::dictionary::DictionaryChecker;
use crate::wordbank::WordBank;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;

/// Whether a round is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Active,
}

/// Error for calls that need an active round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    NoActiveRound,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoActiveRound => write!(f, "No round is active; start a round first"),
        }
    }
}

impl std::error::Error for SessionError {}

/// State of one round: the root word, accepted words and the running score
///
/// Replaced as a whole when a new round starts.
#[derive(Debug, Clone)]
struct Round {
    root: RootWord,
    pool: LetterPool,
    /// Most recent first
    used_words: Vec<String>,
    score: usize,
}

impl Round {
    fn new(root: RootWord) -> Self {
        let pool = LetterPool::from(&root);
        Self {
            root,
            pool,
            used_words: Vec::new(),
            score: 0,
        }
    }

    fn is_used(&self, word: &str) -> bool {
        self.used_words.iter().any(|used| used == word)
    }

    /// Record an accepted word and return the new score
    fn accept(&mut self, word: String) -> usize {
        self.score += word.chars().count();
        self.used_words.insert(0, word);
        self.score
    }
}

/// Owned copy of the visible round state, for renderers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSnapshot {
    pub root_word: String,
    pub used_words: Vec<String>,
    pub score: usize,
}

/// A single-player game session
///
/// Owns the word bank, the dictionary and at most one active round.
/// Starts `Idle`; [`GameSession::start_round`] makes it `Active`.
pub struct GameSession<D: DictionaryChecker> {
    word_bank: WordBank,
    dictionary: D,
    config: SessionConfig,
    rng: StdRng,
    round: Option<Round>,
}

impl<D: DictionaryChecker> GameSession<D> {
    /// Create an idle session with an OS-seeded random source
    pub fn new(word_bank: WordBank, dictionary: D, config: SessionConfig) -> Self {
        Self::with_rng(word_bank, dictionary, config, StdRng::from_os_rng())
    }

    /// Create an idle session whose root word picks are reproducible
    pub fn with_seed(word_bank: WordBank, dictionary: D, config: SessionConfig, seed: u64) -> Self {
        Self::with_rng(word_bank, dictionary, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(word_bank: WordBank, dictionary: D, config: SessionConfig, rng: StdRng) -> Self {
        Self {
            word_bank,
            dictionary,
            config,
            rng,
            round: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        if self.round.is_some() {
            SessionState::Active
        } else {
            SessionState::Idle
        }
    }

    /// Start a new round with a root word picked from the bank
    ///
    /// Any previous round is discarded: used words are cleared and the score
    /// goes back to 0.
    pub fn start_round(&mut self) -> &RootWord {
        let root = self.word_bank.pick_root(&mut self.rng);
        self.start_round_with(root)
    }

    /// Start a new round with a specific root word
    pub fn start_round_with(&mut self, root: RootWord) -> &RootWord {
        log::debug!("Starting round with root '{root}'");
        &self.round.insert(Round::new(root)).root
    }

    /// Validate a raw candidate and record it if it passes every check
    ///
    /// Checks run in a fixed order and stop at the first failure:
    /// 1. normalization (empty input is a [`SubmitOutcome::NoOp`])
    /// 2. originality
    /// 3. spelling from the root word's letters
    /// 4. dictionary lookup
    ///
    /// Only an accepted word changes the round.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoActiveRound` if no round has been started.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::RootWord;
    /// use word_scramble::dictionary::WordListDictionary;
    /// use word_scramble::session::{GameSession, SessionConfig, SubmitOutcome};
    /// use word_scramble::wordbank::WordBank;
    ///
    /// let dictionary = WordListDictionary::from_words(["dean"], "en");
    /// let mut session = GameSession::new(WordBank::default(), dictionary, SessionConfig::default());
    /// session.start_round_with(RootWord::new("garden").unwrap());
    ///
    /// let outcome = session.submit(" Dean ").unwrap();
    /// assert_eq!(outcome, SubmitOutcome::Accepted { word: "dean".into(), score: 4 });
    /// ```
    pub fn submit(&mut self, raw: &str) -> Result<SubmitOutcome, SessionError> {
        let round = self.round.as_mut().ok_or(SessionError::NoActiveRound)?;

        let Some(word) = normalize_candidate(raw) else {
            return Ok(SubmitOutcome::NoOp);
        };

        if round.is_used(&word) {
            return Ok(SubmitOutcome::Rejected(Rejection::DuplicateWord { word }));
        }

        if !round.pool.can_spell(&word) {
            let root = round.root.text().to_string();
            return Ok(SubmitOutcome::Rejected(Rejection::InfeasibleSpelling {
                word,
                root,
            }));
        }

        if !self.dictionary.is_real(&word, &self.config.language) {
            return Ok(SubmitOutcome::Rejected(Rejection::UnknownWord { word }));
        }

        let score = round.accept(word.clone());
        log::debug!("Accepted '{word}', score now {score}");
        Ok(SubmitOutcome::Accepted { word, score })
    }

    /// Current root word, if a round is active
    #[must_use]
    pub fn root_word(&self) -> Option<&RootWord> {
        self.round.as_ref().map(|round| &round.root)
    }

    /// Accepted words of the current round, most recent first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        self.round
            .as_ref()
            .map_or(&[], |round| round.used_words.as_slice())
    }

    /// Score of the current round (0 when idle)
    #[must_use]
    pub fn score(&self) -> usize {
        self.round.as_ref().map_or(0, |round| round.score)
    }

    /// Owned copy of the current round, if one is active
    #[must_use]
    pub fn snapshot(&self) -> Option<RoundSnapshot> {
        self.round.as_ref().map(|round| RoundSnapshot {
            root_word: round.root.text().to_string(),
            used_words: round.used_words.clone(),
            score: round.score,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub const fn word_bank(&self) -> &WordBank {
        &self.word_bank
    }

    #[must_use]
    pub const fn dictionary(&self) -> &D {
        &self.dictionary
    }
}
