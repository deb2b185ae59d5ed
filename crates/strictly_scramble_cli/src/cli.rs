//! Command-line interface for strictly_scramble.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Strictly Scramble - spell words from the letters of a root word
#[derive(Parser, Debug)]
#[command(name = "strictly_scramble")]
#[command(about = "Word scramble game for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (defaults apply if it is missing)
    #[arg(short, long, global = true, default_value = "strictly_scramble.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the game in the terminal
    Play {
        /// Newline-delimited list of root words
        #[arg(long)]
        word_list: Option<PathBuf>,

        /// Newline-delimited dictionary of real words
        #[arg(long)]
        dictionary: Option<PathBuf>,

        /// Accept every word instead of consulting a dictionary
        #[arg(long, conflicts_with = "dictionary")]
        no_dictionary: bool,

        /// Rounds per game
        #[arg(long)]
        rounds: Option<u32>,

        /// Seed for root word selection (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Validate candidate words against a root word and print the verdicts
    Check {
        /// Root word to spell from
        #[arg(short, long)]
        root: String,

        /// Newline-delimited dictionary of real words
        #[arg(long)]
        dictionary: Option<PathBuf>,

        /// Accept every word instead of consulting a dictionary
        #[arg(long, conflicts_with = "dictionary")]
        no_dictionary: bool,

        /// Language of the words in the dictionary file
        #[arg(long)]
        dictionary_language: Option<String>,

        /// Language candidates are checked in
        #[arg(long)]
        language: Option<String>,

        /// Candidates, checked in order
        #[arg(required = true)]
        candidates: Vec<String>,
    },

    /// Print randomly chosen root words
    Pick {
        /// Newline-delimited list of root words
        #[arg(long)]
        word_list: Option<PathBuf>,

        /// How many words to print
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Seed for root word selection (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
}
