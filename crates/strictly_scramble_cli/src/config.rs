//! Configuration for the terminal game.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use strictly_scramble::{
    Dictionary, PermissiveDictionary, SessionSettings, WordList, WordSetDictionary,
};
use tracing::{debug, info, instrument, warn};

/// Configuration for a word scramble game, usually read from TOML.
///
/// ```toml
/// word_list = "start.txt"
/// dictionary = "/usr/share/dict/words"
/// dictionary_language = "en"
/// log_file = "strictly_scramble.log"
///
/// [session]
/// round_limit = 8
/// min_word_length = 3
/// language = "en"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ScrambleConfig {
    /// Newline-delimited root words; the built-in list when absent.
    #[serde(default)]
    word_list: Option<PathBuf>,

    /// Newline-delimited dictionary for the real-word check.
    ///
    /// An empty path turns the check off: every word counts as real.
    #[serde(default = "default_dictionary")]
    dictionary: Option<PathBuf>,

    /// Language of the words in the dictionary file.
    #[serde(default = "default_dictionary_language")]
    dictionary_language: String,

    /// Where `play` writes its logs (the terminal belongs to the UI).
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Game rules.
    #[serde(default)]
    session: SessionSettings,
}

#[instrument]
fn default_dictionary() -> Option<PathBuf> {
    Some(PathBuf::from("/usr/share/dict/words"))
}

#[instrument]
fn default_dictionary_language() -> String {
    "en".to_string()
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_scramble.log")
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self {
            word_list: None,
            dictionary: default_dictionary(),
            dictionary_language: default_dictionary_language(),
            log_file: default_log_file(),
            session: SessionSettings::default(),
        }
    }
}

impl ScrambleConfig {
    /// Creates a configuration with every default.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(round_limit = config.session.round_limit(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the word list path when `path` is given.
    pub fn with_word_list(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.word_list = Some(path);
        }
        self
    }

    /// Replaces the dictionary path when `path` is given.
    pub fn with_dictionary(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.dictionary = Some(path);
        }
        self
    }

    /// Drops the dictionary so every word counts as real.
    pub fn without_dictionary(mut self) -> Self {
        self.dictionary = None;
        self
    }

    /// Replaces the dictionary file's language when `language` is given.
    pub fn with_dictionary_language(mut self, language: Option<String>) -> Self {
        if let Some(language) = language {
            self.dictionary_language = language;
        }
        self
    }

    /// Replaces the round limit when `rounds` is given.
    pub fn with_round_limit(mut self, rounds: Option<u32>) -> Self {
        if let Some(rounds) = rounds {
            self.session = self.session.with_round_limit(rounds);
        }
        self
    }

    /// Replaces the language words are checked in when `language` is given.
    pub fn with_language(mut self, language: Option<String>) -> Self {
        if let Some(language) = language {
            self.session = self.session.with_language(language);
        }
        self
    }

    /// Reads the configured word list, or the built-in one.
    ///
    /// A list that cannot be read is logged and replaced by the built-in
    /// list rather than aborting.
    #[instrument(skip(self))]
    pub fn load_word_list(&self) -> WordList {
        let Some(path) = &self.word_list else {
            debug!("No word list configured, using built-in list");
            return WordList::builtin();
        };

        WordList::load(path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "Word list unavailable, using built-in list");
            WordList::builtin()
        })
    }

    /// Reads the configured dictionary, tagged with `dictionary_language`.
    ///
    /// Words are then only known when the session language matches.
    /// Without a usable dictionary every word counts as real, so the game
    /// stays playable; the fallback is logged.
    #[instrument(skip(self))]
    pub fn load_dictionary(&self) -> Box<dyn Dictionary> {
        let Some(path) = self.dictionary.as_ref().filter(|p| !p.as_os_str().is_empty()) else {
            warn!("No dictionary configured, accepting every word");
            return Box::new(PermissiveDictionary);
        };

        match WordSetDictionary::load(&self.dictionary_language, path) {
            Ok(dictionary) if !dictionary.is_empty() => Box::new(dictionary),
            Ok(_) => {
                warn!(path = %path.display(), "Dictionary is empty, accepting every word");
                Box::new(PermissiveDictionary)
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Dictionary unavailable, accepting every word"
                );
                Box::new(PermissiveDictionary)
            }
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
