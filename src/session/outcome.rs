//! Results of submitting a candidate

use std::fmt;

/// Which validation stage turned a candidate down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionKind {
    DuplicateWord,
    InfeasibleSpelling,
    UnknownWord,
}

/// A candidate the round refused, with enough context to explain why
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Already accepted earlier in this round
    DuplicateWord { word: String },
    /// Needs letters the root word does not have (or not enough of them)
    InfeasibleSpelling { word: String, root: String },
    /// Not recognized by the dictionary
    UnknownWord { word: String },
}

impl Rejection {
    #[must_use]
    pub const fn kind(&self) -> RejectionKind {
        match self {
            Self::DuplicateWord { .. } => RejectionKind::DuplicateWord,
            Self::InfeasibleSpelling { .. } => RejectionKind::InfeasibleSpelling,
            Self::UnknownWord { .. } => RejectionKind::UnknownWord,
        }
    }

    /// The word that was attempted
    #[must_use]
    pub fn word(&self) -> &str {
        match self {
            Self::DuplicateWord { word }
            | Self::InfeasibleSpelling { word, .. }
            | Self::UnknownWord { word } => word.as_str(),
        }
    }

    /// The root word, for rejections that refer to it
    #[must_use]
    pub fn root(&self) -> Option<&str> {
        match self {
            Self::InfeasibleSpelling { root, .. } => Some(root.as_str()),
            Self::DuplicateWord { .. } | Self::UnknownWord { .. } => None,
        }
    }

    /// Short heading for an alert
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::DuplicateWord { .. } => "Word used already",
            Self::InfeasibleSpelling { .. } => "Word not possible",
            Self::UnknownWord { .. } => "Word not recognized",
        }
    }

    /// Player-facing explanation
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::DuplicateWord { .. } => "Be more original!".to_string(),
            Self::InfeasibleSpelling { root, .. } => {
                format!("You can't spell that word from '{root}'!")
            }
            Self::UnknownWord { .. } => "Made up words are not accepted!".to_string(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}

/// Outcome of a single submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The word was recorded; `score` is the round total after adding it
    Accepted { word: String, score: usize },
    /// The word failed a check; round state is unchanged
    Rejected(Rejection),
    /// Nothing left after normalization; round state is unchanged
    NoOp,
}

impl SubmitOutcome {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    #[must_use]
    pub fn rejection_kind(&self) -> Option<RejectionKind> {
        match self {
            Self::Rejected(rejection) => Some(rejection.kind()),
            Self::Accepted { .. } | Self::NoOp => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_match_variants() {
        let duplicate = Rejection::DuplicateWord {
            word: "dean".into(),
        };
        let infeasible = Rejection::InfeasibleSpelling {
            word: "zzz".into(),
            root: "garden".into(),
        };
        let unknown = Rejection::UnknownWord { word: "nerd".into() };

        assert_eq!(duplicate.kind(), RejectionKind::DuplicateWord);
        assert_eq!(infeasible.kind(), RejectionKind::InfeasibleSpelling);
        assert_eq!(unknown.kind(), RejectionKind::UnknownWord);
    }

    #[test]
    fn context_is_carried() {
        let infeasible = Rejection::InfeasibleSpelling {
            word: "zzz".into(),
            root: "garden".into(),
        };
        assert_eq!(infeasible.word(), "zzz");
        assert_eq!(infeasible.root(), Some("garden"));

        let duplicate = Rejection::DuplicateWord {
            word: "dean".into(),
        };
        assert_eq!(duplicate.word(), "dean");
        assert_eq!(duplicate.root(), None);
    }

    #[test]
    fn messages() {
        let infeasible = Rejection::InfeasibleSpelling {
            word: "zzz".into(),
            root: "garden".into(),
        };
        assert_eq!(infeasible.title(), "Word not possible");
        assert_eq!(
            infeasible.message(),
            "You can't spell that word from 'garden'!"
        );

        let duplicate = Rejection::DuplicateWord {
            word: "dean".into(),
        };
        assert_eq!(
            duplicate.to_string(),
            "Word used already: Be more original!"
        );

        let unknown = Rejection::UnknownWord { word: "gx".into() };
        assert_eq!(unknown.title(), "Word not recognized");
    }

    #[test]
    fn outcome_helpers() {
        let accepted = SubmitOutcome::Accepted {
            word: "dean".into(),
            score: 4,
        };
        assert!(accepted.is_accepted());
        assert_eq!(accepted.rejection_kind(), None);

        let rejected = SubmitOutcome::Rejected(Rejection::UnknownWord { word: "gx".into() });
        assert!(!rejected.is_accepted());
        assert_eq!(rejected.rejection_kind(), Some(RejectionKind::UnknownWord));

        assert!(!SubmitOutcome::NoOp.is_accepted());
        assert_eq!(SubmitOutcome::NoOp.rejection_kind(), None);
    }
}
