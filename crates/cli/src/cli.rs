use clap::{Args, Parser, Subcommand};
use iplusone::AcceptanceRule;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about)]
pub struct Cli {
    /// The path to the TOML file with the language configurations.
    #[arg(short, long, env = "IPLUSONE_CONFIG", default_value = "iplusone.toml")]
    pub config: PathBuf,
    /// The name of the language configuration to use. Optional if the file only has one.
    #[arg(long)]
    pub name: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

/// `notesInfo` results for the learned and new decks.
#[derive(Args)]
pub struct Decks {
    /// The path to the notes of the learned deck.
    #[arg(long)]
    pub learned: PathBuf,
    /// The path to the notes of the deck being learned.
    #[arg(long)]
    pub new: PathBuf,
}

#[derive(Subcommand)]
pub enum Command {
    /// Prints the known and new vocabulary of the session.
    Vocab {
        #[command(flatten)]
        decks: Decks,
    },
    /// Prints the prompt for generating sentences.
    Prompt {
        #[command(flatten)]
        decks: Decks,
        /// The number of sentences to ask for.
        #[arg(short, long, default_value_t = 10)]
        sentences: usize,
        /// Asks for sentences built around this new word.
        #[arg(short, long)]
        focus: Option<String>,
    },
    /// Judges a generated CSV batch and writes the annotated table to stdout.
    Evaluate {
        #[command(flatten)]
        decks: Decks,
        /// The path to the generated CSV.
        #[arg(short, long)]
        payload: PathBuf,
        /// Overrides the configured acceptance rule.
        #[arg(short, long)]
        rule: Option<AcceptanceRule>,
        /// Puts the sentences that meet the criteria first.
        #[arg(long)]
        sort: bool,
    },
}
