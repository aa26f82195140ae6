//! Builds session vocabularies from exported Anki notes and judges generated sentences against them.

mod cli;
mod config;

use clap::Parser;
use cli::{Cli, Command, Decks};
use config::{ConfigFile, LanguageConfiguration};
use eyre::WrapErr;
use iplusone::{
    anki, batch,
    prompt::{GenerationPrompt, SYSTEM_MESSAGE},
    vocabulary::SessionVocabulary,
    Configuration, VocabularySet,
};
use itertools::Itertools;
use std::{fs, io, path::Path};
use tracing_subscriber::EnvFilter;

fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
    let cli = Cli::parse();

    let config_file = ConfigFile::load(&cli.config)?;
    let language = config_file.find(cli.name.as_deref())?;
    tracing::info!("Using configuration '{}'", language.name);

    match cli.command {
        Command::Vocab { decks } => {
            let configuration = language.configuration(None);
            let session = load_session(language, &decks, &configuration)?;
            println!(
                "known ({}): {}",
                session.known().len(),
                session.known().iter().join(" ")
            );
            println!(
                "new ({}): {}",
                session.candidate_new().len(),
                session.candidate_new().iter().join(" ")
            );
        }
        Command::Prompt {
            decks,
            sentences,
            focus,
        } => {
            let configuration = language.configuration(None);
            let session = load_session(language, &decks, &configuration)?;
            if let Some(focus) = &focus {
                if !session.candidate_new().contains(focus) {
                    tracing::warn!("'{focus}' is not in the new vocabulary");
                }
            }
            let prompt = GenerationPrompt {
                alphabet: configuration.alphabet,
                known: session.known(),
                candidate_new: session.candidate_new(),
                sentences,
                focus: focus.as_deref(),
            };
            println!("{SYSTEM_MESSAGE}\n");
            println!("{}", prompt.render());
        }
        Command::Evaluate {
            decks,
            payload,
            rule,
            sort,
        } => {
            let configuration = language.configuration(rule);
            let session = load_session(language, &decks, &configuration)?;
            let raw_payload = fs::read_to_string(&payload)
                .wrap_err_with(|| format!("Failed to read payload at {}", payload.display()))?;
            let mut rows = batch::evaluate_batch(
                &raw_payload,
                session.known(),
                session.candidate_new(),
                configuration.rule,
            )
            .wrap_err("Failed to evaluate payload")?;
            tracing::info!(
                "{} of {} sentences meet {}",
                rows.iter().filter(|r| r.meets_criteria).count(),
                rows.len(),
                configuration.rule
            );
            if sort {
                batch::sort_passing_first(&mut rows);
            }
            batch::write_csv(&rows, io::stdout().lock()).wrap_err("Failed to write results")?;
        }
    }

    Ok(())
}

fn load_session(
    language: &LanguageConfiguration,
    decks: &Decks,
    configuration: &Configuration,
) -> eyre::Result<SessionVocabulary> {
    tracing::info!("Scanning fields {:?}", configuration.fields_to_scan);
    let known = load_deck(&language.learned_deck, &decks.learned, configuration)?;
    let candidate_new = load_deck(&language.new_deck, &decks.new, configuration)?;
    let session = SessionVocabulary::new(known, candidate_new);
    tracing::info!(
        "Loaded {} known and {} new tokens",
        session.known().len(),
        session.candidate_new().len()
    );
    Ok(session)
}

fn load_deck(
    deck: &str,
    path: &Path,
    configuration: &Configuration,
) -> eyre::Result<VocabularySet> {
    tracing::info!("Loading deck '{deck}' from {}", path.display());
    let json = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read notes at {}", path.display()))?;
    let notes = anki::parse_notes_info(&json)
        .wrap_err_with(|| format!("Failed to parse notes at {}", path.display()))?;
    let vocabulary = anki::load_deck_vocabulary(deck, &notes, configuration)?;
    Ok(vocabulary)
}
