//! Strictly Scramble - terminal host for the word scramble game
//!
//! Wires the pure game logic from `strictly_scramble` to a clap CLI, TOML
//! configuration, tracing, and a ratatui front end.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config;
mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Commands
pub use commands::{CheckOutcome, check_candidates, pick_root_words};

// Crate-level exports - Configuration
pub use config::{ConfigError, ScrambleConfig};

// Crate-level exports - Terminal UI
pub use tui::{Alert, App, run_tui};
