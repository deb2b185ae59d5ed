//! Word list error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong while loading or drawing from a word list.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum WordListErrorKind {
    /// The word list could not be read.
    #[display("could not read word list: {}", _0)]
    Io(String),
    /// The word list contained no usable words.
    #[display("word list contains no words")]
    Empty,
    /// A word source has nothing left to hand out.
    #[display("word source is exhausted")]
    Exhausted,
}

/// Word list error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Word list error: {} at {}:{}", kind, file, line)]
pub struct WordListError {
    /// What went wrong.
    pub kind: WordListErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl WordListError {
    /// Creates a new word list error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: WordListErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for WordListError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(WordListErrorKind::Io(err.to_string()))
    }
}
