//! Session settings: the tunable rules of a game.

use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

#[instrument]
fn default_round_limit() -> u32 {
    8
}

#[instrument]
fn default_min_word_length() -> usize {
    3
}

#[instrument]
fn default_language() -> String {
    "en".to_string()
}

/// Rules that stay fixed for the whole game.
///
/// Deserializes from a partial table; missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[setters(prefix = "with_")]
pub struct SessionSettings {
    /// Rounds per game before the game ends.
    #[serde(default = "default_round_limit")]
    round_limit: u32,

    /// Shortest word the validator accepts.
    #[serde(default = "default_min_word_length")]
    min_word_length: usize,

    /// Language passed to the dictionary.
    #[serde(default = "default_language")]
    #[setters(into)]
    language: String,
}

impl SessionSettings {
    /// Creates settings with the defaults: 8 rounds, 3 letters, English.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds per game.
    pub fn round_limit(&self) -> u32 {
        self.round_limit
    }

    /// Shortest accepted word.
    pub fn min_word_length(&self) -> usize {
        self.min_word_length
    }

    /// Dictionary language.
    pub fn language(&self) -> &str {
        &self.language
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            round_limit: default_round_limit(),
            min_word_length: default_min_word_length(),
            language: default_language(),
        }
    }
}
