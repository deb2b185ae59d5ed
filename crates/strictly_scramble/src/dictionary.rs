//! Dictionary lookup for the real-word check.
//!
//! The validator only needs a yes/no answer, so any backend (a word file,
//! an OS spell checker, a remote service) fits behind [`Dictionary`].

use std::collections::HashSet;
use std::path::Path;

use derive_getters::Getters;
use tracing::{debug, info, instrument};

use crate::error::WordListError;
use crate::rules::normalize;

/// Answers whether a word exists in a language.
pub trait Dictionary {
    /// Returns true if `word` is a known word in `language`.
    fn is_known_word(&self, word: &str, language: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_known_word(&self, word: &str, language: &str) -> bool {
        (**self).is_known_word(word, language)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn is_known_word(&self, word: &str, language: &str) -> bool {
        (**self).is_known_word(word, language)
    }
}

/// Returns the primary subtag of a language tag, lowercased: `"en_US"` → `"en"`.
fn primary_subtag(language: &str) -> String {
    language
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase()
}

/// A fixed set of words in a single language.
#[derive(Debug, Clone, Getters)]
pub struct WordSetDictionary {
    /// Primary language subtag, e.g. `"en"`.
    language: String,
    /// Known words, normalized.
    #[getter(skip)]
    words: HashSet<String>,
}

impl WordSetDictionary {
    /// Builds a dictionary from any collection of words.
    #[instrument(skip(words))]
    pub fn new<I, S>(language: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: HashSet<String> = words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        debug!(count = words.len(), "Built word set dictionary");
        Self {
            language: primary_subtag(language),
            words,
        }
    }

    /// Builds a dictionary from newline-delimited text.
    pub fn from_text(language: &str, text: &str) -> Self {
        Self::new(language, text.lines())
    }

    /// Loads a newline-delimited dictionary file such as `/usr/share/dict/words`.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(language: &str, path: impl AsRef<Path>) -> Result<Self, WordListError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let dictionary = Self::from_text(language, &text);
        info!(count = dictionary.len(), "Dictionary loaded");
        Ok(dictionary)
    }

    /// Number of known words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the dictionary knows no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordSetDictionary {
    fn is_known_word(&self, word: &str, language: &str) -> bool {
        primary_subtag(language) == self.language && self.words.contains(word)
    }
}

/// Knows every word in every language.
///
/// Stands in when no dictionary is available; the real-word check then
/// never rejects.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveDictionary;

impl Dictionary for PermissiveDictionary {
    fn is_known_word(&self, _word: &str, _language: &str) -> bool {
        true
    }
}
