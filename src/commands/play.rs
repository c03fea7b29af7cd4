//! Interactive play mode
//!
//! Text-based shell around a `GameSession`: each line is either a command or a
//! word to submit.

use crate::dictionary::DictionaryChecker;
use crate::output::{print_outcome, print_round_start};
use crate::session::GameSession;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// A line typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    NewRound,
    Quit,
    Word(String),
}

/// Commands are slash-prefixed so they never shadow a playable word
fn parse_input(line: &str) -> Input {
    match line.trim().to_lowercase().as_str() {
        "/new" | "/n" => Input::NewRound,
        "/quit" | "/q" | "/exit" => Input::Quit,
        _ => Input::Word(line.to_string()),
    }
}

/// Run the interactive shell until `/quit` or end of input
///
/// Starts a round immediately if the session is idle.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<D, R, W>(session: &mut GameSession<D>, mut input: R, out: &mut W) -> Result<()>
where
    D: DictionaryChecker,
    R: BufRead,
    W: Write,
{
    if session.root_word().is_none() {
        session.start_round();
    }
    if let Some(root) = session.root_word() {
        print_round_start(out, root.text())?;
    }

    loop {
        write!(out, "Enter your word: ")?;
        out.flush().context("failed to flush prompt")?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            writeln!(out)?;
            break;
        }

        match parse_input(&line) {
            Input::Quit => break,
            Input::NewRound => {
                let root = session.start_round().text().to_string();
                print_round_start(out, &root)?;
            }
            Input::Word(raw) => {
                let outcome = session.submit(&raw)?;
                print_outcome(out, &outcome, session.snapshot().as_ref())?;
            }
        }
    }

    writeln!(out, "👋 Final score: {}", session.score())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RootWord;
    use crate::dictionary::WordListDictionary;
    use crate::session::SessionConfig;
    use crate::wordbank::WordBank;
    use std::io::Cursor;

    fn garden_session() -> GameSession<WordListDictionary> {
        let dictionary = WordListDictionary::from_words(["dean", "range", "danger"], "en");
        let mut session = GameSession::with_seed(
            WordBank::from_lines("listen\n"),
            dictionary,
            SessionConfig::default(),
            5,
        );
        session.start_round_with(RootWord::new("garden").unwrap());
        session
    }

    fn play(session: &mut GameSession<WordListDictionary>, input: &str) -> String {
        let mut out = Vec::new();
        run_play(session, Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!(parse_input("/new\n"), Input::NewRound);
        assert_eq!(parse_input(" /QUIT "), Input::Quit);
        assert_eq!(parse_input("/q"), Input::Quit);
        assert_eq!(parse_input("new\n"), Input::Word("new\n".into()));
    }

    #[test]
    fn plays_until_quit() {
        let mut session = garden_session();
        let text = play(&mut session, "dean\nrange\n/quit\ndanger\n");

        assert_eq!(session.used_words(), ["range", "dean"]);
        assert_eq!(session.score(), 9);
        assert!(text.contains("Final score: 9"));
    }

    #[test]
    fn stops_at_end_of_input() {
        let mut session = garden_session();
        play(&mut session, "dean\n");
        assert_eq!(session.score(), 4);
    }

    #[test]
    fn shows_rejections() {
        let mut session = garden_session();
        let text = play(&mut session, "dean\ndean\nzzz\nnerd\n\n");

        assert!(text.contains("Word used already"));
        assert!(text.contains("Word not possible"));
        assert!(text.contains("Word not recognized"));
        assert_eq!(session.score(), 4);
    }

    #[test]
    fn new_round_resets_score() {
        let mut session = garden_session();
        let text = play(&mut session, "dean\n/new\n");

        assert_eq!(session.root_word().unwrap().text(), "listen");
        assert_eq!(session.score(), 0);
        assert!(text.contains("L I S T E N"));
    }

    #[test]
    fn idle_session_starts_a_round() {
        let mut session = GameSession::with_seed(
            WordBank::from_lines("garden\n"),
            WordListDictionary::from_words(["dean"], "en"),
            SessionConfig::default(),
            5,
        );

        let text = play(&mut session, "dean\n");
        assert!(text.contains("G A R D E N"));
        assert_eq!(session.score(), 4);
    }
}
