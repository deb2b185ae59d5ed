//! One-shot commands that do not need the terminal UI.

use strictly_scramble::{
    Accepted, Dictionary, RejectionReason, RootWord, RootWordSource, SessionSettings,
    WordValidator,
};
use tracing::{info, instrument};

/// Outcome of checking one candidate from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The candidate was accepted and joins the history.
    Accepted(Accepted),
    /// The candidate was rejected.
    Rejected {
        /// The input as typed.
        raw: String,
        /// Why it was rejected.
        reason: RejectionReason,
    },
}

impl std::fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Accepted(accepted) => {
                write!(f, "accepted {} +{}", accepted.word(), accepted.score_delta())
            }
            Self::Rejected { raw, reason } => {
                write!(f, "rejected {:?} {}: {}", raw, reason.code(), reason)
            }
        }
    }
}

/// Validates `candidates` in order against `root`.
///
/// Accepted words become history for the candidates after them, exactly as
/// in a game round.
#[instrument(skip(dictionary, candidates), fields(count = candidates.len()))]
pub fn check_candidates<D: Dictionary>(
    root: &RootWord,
    candidates: &[String],
    dictionary: D,
    settings: SessionSettings,
) -> Vec<CheckOutcome> {
    let validator = WordValidator::new(dictionary, settings);
    let mut history: Vec<String> = Vec::new();

    let outcomes: Vec<CheckOutcome> = candidates
        .iter()
        .map(|raw| match validator.validate(raw, root, &history) {
            Ok(accepted) => {
                history.insert(0, accepted.word().clone());
                CheckOutcome::Accepted(accepted)
            }
            Err(reason) => CheckOutcome::Rejected {
                raw: raw.clone(),
                reason,
            },
        })
        .collect();

    let score: usize = history.iter().map(|w| strictly_scramble::letter_count(w)).sum();
    info!(accepted = history.len(), score, "Check complete");
    outcomes
}

/// Draws `count` root words from `source`.
#[instrument(skip(source))]
pub fn pick_root_words<W: RootWordSource>(
    source: &mut W,
    count: usize,
) -> Result<Vec<RootWord>, strictly_scramble::WordListError> {
    (0..count).map(|_| source.pick_root_word()).collect()
}
