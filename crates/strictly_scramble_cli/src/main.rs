//! Strictly Scramble - Unified CLI
//!
//! Word scramble game with terminal play and one-shot word checks.

#![warn(missing_docs)]

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use strictly_scramble::{GameSession, RandomRootWords, RootWord, WordList};
use strictly_scramble_cli::{
    Cli, Command, ScrambleConfig, check_candidates, pick_root_words, run_tui,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            word_list,
            dictionary,
            no_dictionary,
            rounds,
            seed,
        } => {
            let config = ScrambleConfig::load_or_default(&cli.config)?
                .with_word_list(word_list)
                .with_dictionary(dictionary)
                .with_round_limit(rounds);
            let config = if no_dictionary {
                config.without_dictionary()
            } else {
                config
            };
            initialize_file_tracing(config.log_file())?;
            run_play(config, seed)
        }
        Command::Check {
            root,
            dictionary,
            no_dictionary,
            dictionary_language,
            language,
            candidates,
        } => {
            initialize_stderr_tracing();
            let config = ScrambleConfig::load_or_default(&cli.config)?
                .with_dictionary(dictionary)
                .with_dictionary_language(dictionary_language)
                .with_language(language);
            let config = if no_dictionary {
                config.without_dictionary()
            } else {
                config
            };
            run_check(config, &root, &candidates)
        }
        Command::Pick {
            word_list,
            count,
            seed,
        } => {
            initialize_stderr_tracing();
            let config = ScrambleConfig::load_or_default(&cli.config)?.with_word_list(word_list);
            run_pick(config, count, seed)
        }
    }
}

/// Play the game in the terminal
#[instrument(skip(config))]
fn run_play(config: ScrambleConfig, seed: Option<u64>) -> Result<()> {
    let words = config.load_word_list();
    let source = root_word_source(words, seed);
    let dictionary = config.load_dictionary();

    let session = GameSession::new(dictionary, source, config.session().clone());
    let session = run_tui(session)?;

    println!(
        "Played {} of {} rounds, {} points.",
        session.round(),
        session.round_limit(),
        session.game_score()
    );
    Ok(())
}

/// Validate candidates and print one verdict per line
#[instrument(skip(config, candidates))]
fn run_check(config: ScrambleConfig, root: &str, candidates: &[String]) -> Result<()> {
    let root = RootWord::parse(root).context("Root word must not be blank")?;
    let dictionary = config.load_dictionary();

    for outcome in check_candidates(&root, candidates, dictionary, config.session().clone()) {
        println!("{outcome}");
    }
    Ok(())
}

/// Print random root words
#[instrument(skip(config))]
fn run_pick(config: ScrambleConfig, count: usize, seed: Option<u64>) -> Result<()> {
    let mut source = root_word_source(config.load_word_list(), seed);
    for word in pick_root_words(&mut source, count)? {
        println!("{word}");
    }
    Ok(())
}

fn root_word_source(words: WordList, seed: Option<u64>) -> RandomRootWords {
    match seed {
        Some(seed) => {
            info!(seed, "Using seeded root word selection");
            RandomRootWords::seeded(words, seed)
        }
        None => RandomRootWords::from_entropy(words),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,strictly_scramble=debug"))
}

/// Log to a file so the terminal UI is not disturbed.
fn initialize_file_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();

    info!(log_file = %log_file.display(), "Tracing initialized");
    Ok(())
}

fn initialize_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
