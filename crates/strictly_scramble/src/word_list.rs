//! Root word selection.
//!
//! A [`WordList`] is parsed from newline-delimited text; a
//! [`RootWordSource`] hands out one root word per round.

use std::collections::VecDeque;
use std::path::Path;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

use crate::error::{WordListError, WordListErrorKind};
use crate::types::RootWord;

/// Root word used whenever no other word can be produced.
pub const DEFAULT_ROOT_WORD: &str = "silkworm";

const BUILTIN_WORDS: &str = include_str!("../assets/start.txt");

/// A non-empty list of candidate root words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<RootWord>,
}

impl WordList {
    /// Parses newline-delimited text, one word per line.
    ///
    /// Lines are trimmed and lowercased; blank lines are skipped.
    #[instrument(skip(text), fields(bytes = text.len()))]
    pub fn parse(text: &str) -> Result<Self, WordListError> {
        let words: Vec<RootWord> = text.lines().filter_map(RootWord::parse).collect();
        if words.is_empty() {
            return Err(WordListError::new(WordListErrorKind::Empty));
        }
        debug!(count = words.len(), "Parsed word list");
        Ok(Self { words })
    }

    /// Reads and parses a word list file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WordListError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let list = Self::parse(&text)?;
        info!(count = list.len(), "Word list loaded");
        Ok(list)
    }

    /// The start words shipped with the crate.
    #[instrument]
    pub fn builtin() -> Self {
        Self::parse(BUILTIN_WORDS).unwrap_or_else(|_| Self::fallback())
    }

    /// A list holding only [`DEFAULT_ROOT_WORD`].
    pub fn fallback() -> Self {
        Self {
            words: vec![RootWord::fallback()],
        }
    }

    /// All words in file order.
    pub fn words(&self) -> &[RootWord] {
        &self.words
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Never true for a parsed list.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Picks a word uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&RootWord> {
        self.words.choose(rng)
    }
}

/// Supplies the root word for each new round.
pub trait RootWordSource {
    /// Produces the next root word.
    fn pick_root_word(&mut self) -> Result<RootWord, WordListError>;
}

impl<W: RootWordSource + ?Sized> RootWordSource for &mut W {
    fn pick_root_word(&mut self) -> Result<RootWord, WordListError> {
        (**self).pick_root_word()
    }
}

impl<W: RootWordSource + ?Sized> RootWordSource for Box<W> {
    fn pick_root_word(&mut self) -> Result<RootWord, WordListError> {
        (**self).pick_root_word()
    }
}

/// Picks root words at random from a [`WordList`].
///
/// The same word may come up in consecutive rounds.
#[derive(Debug, Clone)]
pub struct RandomRootWords<R = StdRng> {
    words: WordList,
    rng: R,
}

impl RandomRootWords<StdRng> {
    /// Seeds from the operating system.
    pub fn from_entropy(words: WordList) -> Self {
        Self::with_rng(words, StdRng::from_entropy())
    }

    /// Seeds deterministically, for replays and tests.
    pub fn seeded(words: WordList, seed: u64) -> Self {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomRootWords<R> {
    /// Uses the given generator.
    pub fn with_rng(words: WordList, rng: R) -> Self {
        Self { words, rng }
    }

    /// The list being drawn from.
    pub fn words(&self) -> &WordList {
        &self.words
    }
}

impl<R: Rng> RootWordSource for RandomRootWords<R> {
    #[instrument(skip(self), fields(count = self.words.len()))]
    fn pick_root_word(&mut self) -> Result<RootWord, WordListError> {
        let word = self
            .words
            .choose(&mut self.rng)
            .cloned()
            .ok_or_else(|| WordListError::new(WordListErrorKind::Empty))?;
        debug!(root_word = %word, "Picked root word");
        Ok(word)
    }
}

/// Hands out a fixed sequence of root words, then fails.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRootWords {
    queue: VecDeque<RootWord>,
}

impl ScriptedRootWords {
    /// Queues `words` in order; blank entries are dropped.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            queue: words
                .into_iter()
                .filter_map(|w| RootWord::parse(w.as_ref()))
                .collect(),
        }
    }

    /// Words not yet handed out.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl RootWordSource for ScriptedRootWords {
    fn pick_root_word(&mut self) -> Result<RootWord, WordListError> {
        self.queue
            .pop_front()
            .ok_or_else(|| WordListError::new(WordListErrorKind::Exhausted))
    }
}
