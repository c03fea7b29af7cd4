//! Display functions for session state and submission outcomes

use super::formatters::{length_badge, points_label, spaced_title};
use crate::session::{Rejection, RoundSnapshot, SubmitOutcome};
use colored::Colorize;
use std::io::{self, Write};

/// Print the banner for a freshly started round
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_round_start<W: Write>(out: &mut W, root: &str) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "  Root word: {}",
        spaced_title(root).bright_yellow().bold()
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Spell words using its letters. Type /new for a new word, /quit to exit.\n"
    )
}

/// Print the used words (most recent first) and the score
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_round<W: Write>(out: &mut W, snapshot: &RoundSnapshot) -> io::Result<()> {
    writeln!(
        out,
        "\n{} {} {}",
        "Score:".bold(),
        snapshot.score.to_string().bright_cyan().bold(),
        points_label(snapshot.score)
    )?;

    for word in &snapshot.used_words {
        writeln!(
            out,
            "  {} {}",
            length_badge(word.chars().count()).bright_green(),
            word
        )?;
    }
    writeln!(out)
}

/// Print an alert for a rejected word
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_rejection<W: Write>(out: &mut W, rejection: &Rejection) -> io::Result<()> {
    writeln!(out, "\n❌ {}", rejection.title().red().bold())?;
    writeln!(out, "   {}\n", rejection.message())
}

/// Print whatever a submission produced
///
/// Accepted words re-render the round; no-ops print nothing.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_outcome<W: Write>(
    out: &mut W,
    outcome: &SubmitOutcome,
    snapshot: Option<&RoundSnapshot>,
) -> io::Result<()> {
    match outcome {
        SubmitOutcome::Accepted { word, .. } => {
            writeln!(out, "✅ {}", word.green().bold())?;
            match snapshot {
                Some(snapshot) => print_round(out, snapshot),
                None => Ok(()),
            }
        }
        SubmitOutcome::Rejected(rejection) => print_rejection(out, rejection),
        SubmitOutcome::NoOp => Ok(()),
    }
}
