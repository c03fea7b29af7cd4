//! Game sessions
//!
//! A session owns the current round and runs each submission through the
//! originality, spelling and dictionary checks.

mod config;
mod engine;
mod outcome;

pub use config::{DEFAULT_LANGUAGE, SessionConfig};
pub use engine::{GameSession, RoundSnapshot, SessionError, SessionState};
pub use outcome::{Rejection, RejectionKind, SubmitOutcome};
