//! First-class invariants for word scramble sessions.
//!
//! Invariants are logical properties of a round that must hold after every
//! accepted word. They are checked in debug builds and can be tested
//! independently.

use std::collections::HashSet;

use tracing::warn;

use crate::rules::{is_derivable, letter_count};
use crate::types::RootWord;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<InvariantViolation> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Borrowed view of the state a round's invariants talk about.
#[derive(Debug, Clone, Copy)]
pub struct RoundView<'a> {
    /// Root word of the round.
    pub root_word: &'a RootWord,
    /// Accepted words, most recent first.
    pub history: &'a [String],
    /// Round score.
    pub score: usize,
}

/// No word appears twice in the history.
pub struct UniqueHistory;

impl Invariant<RoundView<'_>> for UniqueHistory {
    fn holds(state: &RoundView<'_>) -> bool {
        let mut seen = HashSet::new();
        let valid = state.history.iter().all(|word| seen.insert(word.as_str()));
        if !valid {
            warn!("Duplicate word in history");
        }
        valid
    }

    fn description() -> &'static str {
        "accepted words are unique within a round"
    }
}

/// Every history entry is spelled from the root word and is not the root word.
pub struct DerivableHistory;

impl Invariant<RoundView<'_>> for DerivableHistory {
    fn holds(state: &RoundView<'_>) -> bool {
        let root = state.root_word.as_str();
        let valid = state
            .history
            .iter()
            .all(|word| word != root && is_derivable(word, root));
        if !valid {
            warn!(root, "History holds a word not derivable from the root word");
        }
        valid
    }

    fn description() -> &'static str {
        "accepted words are derivable from, and differ from, the root word"
    }
}

/// The score is the sum of the accepted words' lengths.
pub struct ScoreMatchesHistory;

impl Invariant<RoundView<'_>> for ScoreMatchesHistory {
    fn holds(state: &RoundView<'_>) -> bool {
        let expected: usize = state.history.iter().map(|w| letter_count(w)).sum();
        let valid = expected == state.score;
        if !valid {
            warn!(expected, score = state.score, "Score out of step with history");
        }
        valid
    }

    fn description() -> &'static str {
        "score equals the total length of accepted words"
    }
}

/// The invariants every round maintains.
pub type RoundInvariants = (UniqueHistory, DerivableHistory, ScoreMatchesHistory);
