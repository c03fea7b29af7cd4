//! Word Scramble - CLI
//!
//! Spell as many words as you can from the letters of a root word.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};
use word_scramble::{
    commands::run_play,
    dictionary::WordListDictionary,
    session::{DEFAULT_LANGUAGE, GameSession, SessionConfig},
    wordbank::WordBank,
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Spell words from the letters of a random root word",
    version,
    author
)]
struct Cli {
    /// Root word list (one word per line); defaults to the built-in list
    #[arg(short = 'w', long)]
    wordlist: Option<PathBuf>,

    /// Dictionary used to decide whether a word is real
    #[arg(short, long, default_value = "/usr/share/dict/words")]
    dictionary: PathBuf,

    /// Language code of the dictionary
    #[arg(short, long, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Seed for reproducible root word picks
    #[arg(short, long)]
    seed: Option<u64>,
}

fn load_word_bank(path: Option<&Path>) -> Result<WordBank> {
    match path {
        Some(path) => WordBank::load(path)
            .with_context(|| format!("could not load root words from {}", path.display())),
        None => Ok(WordBank::embedded()),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let word_bank = load_word_bank(cli.wordlist.as_deref())?;
    let dictionary = WordListDictionary::load(&cli.dictionary, cli.language.as_str())
        .with_context(|| {
            format!(
                "could not load dictionary from {} (use --dictionary to choose another file)",
                cli.dictionary.display()
            )
        })?;
    let config = SessionConfig::new(cli.language);

    let mut session = match cli.seed {
        Some(seed) => GameSession::with_seed(word_bank, dictionary, config, seed),
        None => GameSession::new(word_bank, dictionary, config),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_play(&mut session, stdin.lock(), &mut stdout)
}
