//! Core domain types for word scramble.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};
use tracing::instrument;

use crate::rules::normalize;

/// The word whose letters bound what candidates may use.
///
/// Always non-empty and lowercase; the only way to build one is through
/// [`RootWord::parse`], which normalizes its input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(try_from = "String", into = "String")]
pub struct RootWord(String);

impl RootWord {
    /// Normalizes `raw` and wraps it, or returns `None` if nothing is left.
    #[instrument]
    pub fn parse(raw: &str) -> Option<Self> {
        let word = normalize(raw);
        if word.is_empty() { None } else { Some(Self(word)) }
    }

    /// The built-in [`DEFAULT_ROOT_WORD`](crate::DEFAULT_ROOT_WORD).
    pub fn fallback() -> Self {
        Self(crate::DEFAULT_ROOT_WORD.to_string())
    }

    /// Returns the word as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of letters in the word.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Never true for a parsed word.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for RootWord {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for RootWord {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RootWord {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl TryFrom<String> for RootWord {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| "root word must not be empty".to_string())
    }
}

impl From<RootWord> for String {
    fn from(word: RootWord) -> Self {
        word.0
    }
}

/// A candidate that passed every check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, new)]
pub struct Accepted {
    /// The normalized word.
    word: String,
    /// Points earned: one per letter.
    score_delta: usize,
}

impl std::fmt::Display for Accepted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (+{})", self.word, self.score_delta)
    }
}

/// Why a candidate was turned down.
///
/// Variants are listed in the order the validator checks them.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    IntoStaticStr,
    derive_more::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RejectionReason {
    /// Nothing left after trimming.
    #[display("Word is empty")]
    Empty,
    /// The candidate is the root word itself.
    #[display("Word is the root word")]
    SelfCopy,
    /// Fewer letters than the minimum.
    #[display("Word is too short")]
    TooShort,
    /// Already accepted this round.
    #[display("Word already used")]
    Duplicate,
    /// Needs letters the root word does not have.
    #[display("Word cannot be spelled from the root word")]
    NotDerivable,
    /// Dictionary does not know it.
    #[display("Word is not recognized")]
    NotAWord,
}

impl RejectionReason {
    /// Stable machine-readable code, e.g. `"SELF_COPY"`.
    pub fn code(self) -> &'static str {
        self.into()
    }

    /// Whether the caller should swallow this rejection without telling the player.
    ///
    /// Blank submissions are ignored rather than reported.
    pub fn is_silent(self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl std::error::Error for RejectionReason {}
