//! Strictly Scramble - word-scramble game logic
//!
//! Players are given a root word and spell new words from its letters.
//! This crate decides which submissions count and tracks the rounds of a
//! game. Rendering, input and alert wording belong to the caller.
//!
//! # Architecture
//!
//! - **Rules**: normalization and the letter-multiset derivability test
//! - **Validator**: six ordered checks, first failure wins
//! - **Dictionary**: injected yes/no word lookup
//! - **Word list**: root word selection with a safe fallback
//! - **Session**: round state, scoring and the round/game lifecycle
//!
//! # Example
//!
//! ```
//! use strictly_scramble::{
//!     GameSession, RejectionReason, ScriptedRootWords, SessionSettings, SubmitError,
//!     WordSetDictionary,
//! };
//!
//! let dictionary = WordSetDictionary::new("en", ["silk", "worm"]);
//! let roots = ScriptedRootWords::new(["silkworm"]);
//! let mut session = GameSession::new(dictionary, roots, SessionSettings::default());
//!
//! let accepted = session.submit_candidate("Silk").unwrap();
//! assert_eq!(*accepted.score_delta(), 4);
//!
//! assert_eq!(
//!     session.submit_candidate("silk"),
//!     Err(SubmitError::Rejected(RejectionReason::Duplicate))
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod dictionary;
mod error;
mod invariants;
mod rules;
mod session;
mod settings;
mod types;
mod validator;
mod word_list;

// Crate-level exports - Domain types
pub use types::{Accepted, RejectionReason, RootWord};

// Crate-level exports - Rules
pub use rules::{is_derivable, letter_count, normalize};

// Crate-level exports - Validation
pub use validator::{
    Derivable, LongEnough, NotEmpty, NotRootWord, Original, RealWord, WordValidator, validate,
};

// Crate-level exports - Dictionary
pub use dictionary::{Dictionary, PermissiveDictionary, WordSetDictionary};

// Crate-level exports - Root words
pub use error::{WordListError, WordListErrorKind};
pub use word_list::{
    DEFAULT_ROOT_WORD, RandomRootWords, RootWordSource, ScriptedRootWords, WordList,
};

// Crate-level exports - Session
pub use invariants::{
    DerivableHistory, Invariant, InvariantSet, InvariantViolation, RoundInvariants, RoundView,
    ScoreMatchesHistory, UniqueHistory,
};
pub use session::{GameSession, RoundSummary, SessionPhase, SubmitError};
pub use settings::SessionSettings;
