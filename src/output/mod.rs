//! Terminal output formatting
//!
//! Display utilities for the interactive shell.

pub mod display;
pub mod formatters;

pub use display::{print_outcome, print_rejection, print_round, print_round_start};
