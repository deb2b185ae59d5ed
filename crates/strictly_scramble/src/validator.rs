//! Candidate validation for word scramble.
//!
//! Each check is its own type with a `check` function. [`WordValidator`]
//! runs them in a fixed order and the first failure wins, so the same
//! input always produces the same reason.

use tracing::{debug, info, instrument};

use crate::dictionary::Dictionary;
use crate::rules::{is_derivable, letter_count, normalize};
use crate::settings::SessionSettings;
use crate::types::{Accepted, RejectionReason, RootWord};

// ─────────────────────────────────────────────────────────────
//  Individual checks
// ─────────────────────────────────────────────────────────────

/// The normalized candidate must contain something.
pub struct NotEmpty;

impl NotEmpty {
    /// Rejects with [`RejectionReason::Empty`].
    pub fn check(word: &str) -> Result<(), RejectionReason> {
        if word.is_empty() {
            Err(RejectionReason::Empty)
        } else {
            Ok(())
        }
    }
}

/// The candidate must not be the root word itself.
pub struct NotRootWord;

impl NotRootWord {
    /// Rejects with [`RejectionReason::SelfCopy`].
    pub fn check(word: &str, root: &RootWord) -> Result<(), RejectionReason> {
        if root == word {
            Err(RejectionReason::SelfCopy)
        } else {
            Ok(())
        }
    }
}

/// The candidate must have at least `min_len` letters.
pub struct LongEnough;

impl LongEnough {
    /// Rejects with [`RejectionReason::TooShort`].
    pub fn check(word: &str, min_len: usize) -> Result<(), RejectionReason> {
        if letter_count(word) < min_len {
            Err(RejectionReason::TooShort)
        } else {
            Ok(())
        }
    }
}

/// The candidate must not already be in this round's history.
pub struct Original;

impl Original {
    /// Rejects with [`RejectionReason::Duplicate`].
    pub fn check(word: &str, history: &[String]) -> Result<(), RejectionReason> {
        if history.iter().any(|used| used == word) {
            Err(RejectionReason::Duplicate)
        } else {
            Ok(())
        }
    }
}

/// The candidate must be spelled from the root word's letters.
pub struct Derivable;

impl Derivable {
    /// Rejects with [`RejectionReason::NotDerivable`].
    pub fn check(word: &str, root: &RootWord) -> Result<(), RejectionReason> {
        if is_derivable(word, root.as_str()) {
            Ok(())
        } else {
            Err(RejectionReason::NotDerivable)
        }
    }
}

/// The dictionary must know the candidate.
pub struct RealWord;

impl RealWord {
    /// Rejects with [`RejectionReason::NotAWord`].
    pub fn check<D: Dictionary + ?Sized>(
        word: &str,
        dictionary: &D,
        language: &str,
    ) -> Result<(), RejectionReason> {
        if dictionary.is_known_word(word, language) {
            Ok(())
        } else {
            Err(RejectionReason::NotAWord)
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Composite validator
// ─────────────────────────────────────────────────────────────

/// Decides whether a candidate is accepted for a root word.
///
/// Holds the dictionary and the rules; the root word and history are passed
/// per call so the validator itself carries no round state.
#[derive(Debug, Clone)]
pub struct WordValidator<D> {
    dictionary: D,
    settings: SessionSettings,
}

impl<D> WordValidator<D> {
    /// The dictionary used for the real-word check.
    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// The rules in force.
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }
}

impl<D: Dictionary> WordValidator<D> {
    /// Creates a validator.
    pub fn new(dictionary: D, settings: SessionSettings) -> Self {
        Self {
            dictionary,
            settings,
        }
    }

    /// Validates `candidate` against `root` and the words already accepted.
    ///
    /// Checks run in order: empty, root word, length, duplicate,
    /// derivability, dictionary. On success the score delta is the word's
    /// letter count.
    #[instrument(skip(self, history), fields(root = %root, used = history.len()))]
    pub fn validate(
        &self,
        candidate: &str,
        root: &RootWord,
        history: &[String],
    ) -> Result<Accepted, RejectionReason> {
        let word = normalize(candidate);

        let verdict = NotEmpty::check(&word)
            .and_then(|()| NotRootWord::check(&word, root))
            .and_then(|()| LongEnough::check(&word, self.settings.min_word_length()))
            .and_then(|()| Original::check(&word, history))
            .and_then(|()| Derivable::check(&word, root))
            .and_then(|()| RealWord::check(&word, &self.dictionary, self.settings.language()));

        if let Err(reason) = verdict {
            debug!(word = %word, reason = reason.code(), "Candidate rejected");
            return Err(reason);
        }

        let score_delta = letter_count(&word);
        info!(word = %word, score_delta, "Candidate accepted");
        Ok(Accepted::new(word, score_delta))
    }
}

/// Validates with default settings; see [`WordValidator::validate`].
pub fn validate<D: Dictionary>(
    candidate: &str,
    root: &RootWord,
    history: &[String],
    dictionary: D,
) -> Result<Accepted, RejectionReason> {
    WordValidator::new(dictionary, SessionSettings::default()).validate(candidate, root, history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{PermissiveDictionary, WordSetDictionary};

    fn root(word: &str) -> RootWord {
        RootWord::parse(word).expect("non-empty root")
    }

    fn validator() -> WordValidator<WordSetDictionary> {
        WordValidator::new(
            WordSetDictionary::new("en", ["silk", "worm", "milk", "cats", "owl", "so"]),
            SessionSettings::default(),
        )
    }

    #[test]
    fn test_accepts_silk_from_silkworm() {
        let accepted = validator()
            .validate("silk", &root("silkworm"), &[])
            .expect("silk is valid");
        assert_eq!(accepted.word(), "silk");
        assert_eq!(*accepted.score_delta(), 4);
    }

    #[test]
    fn test_normalizes_before_checking() {
        let accepted = validator()
            .validate("  MILK \n", &root("silkworm"), &[])
            .expect("milk is valid");
        assert_eq!(accepted.word(), "milk");
    }

    #[test]
    fn test_blank_is_empty() {
        let result = validator().validate(" \t", &root("silkworm"), &[]);
        assert_eq!(result, Err(RejectionReason::Empty));
    }

    #[test]
    fn test_self_copy_checked_before_derivability() {
        let result = validator().validate("SilkWorm", &root("silkworm"), &[]);
        assert_eq!(result, Err(RejectionReason::SelfCopy));
    }

    #[test]
    fn test_too_short_beats_dictionary() {
        let result = validator().validate("so", &root("silkworm"), &[]);
        assert_eq!(result, Err(RejectionReason::TooShort));
    }

    #[test]
    fn test_duplicate() {
        let history = vec!["silk".to_string()];
        let result = validator().validate("silk", &root("silkworm"), &history);
        assert_eq!(result, Err(RejectionReason::Duplicate));
    }

    #[test]
    fn test_duplicate_beats_not_derivable() {
        let history = vec!["zzz".to_string()];
        let result = validator().validate("zzz", &root("silkworm"), &history);
        assert_eq!(result, Err(RejectionReason::Duplicate));
    }

    #[test]
    fn test_not_derivable_regardless_of_dictionary() {
        let result = validator().validate("cats", &root("cat"), &[]);
        assert_eq!(result, Err(RejectionReason::NotDerivable));
    }

    #[test]
    fn test_not_a_word() {
        let result = validator().validate("rows", &root("silkworm"), &[]);
        assert_eq!(result, Err(RejectionReason::NotAWord));
    }

    #[test]
    fn test_language_mismatch_is_not_a_word() {
        let validator = WordValidator::new(
            WordSetDictionary::new("en", ["silk"]),
            SessionSettings::default().with_language("de"),
        );
        let result = validator.validate("silk", &root("silkworm"), &[]);
        assert_eq!(result, Err(RejectionReason::NotAWord));
    }

    #[test]
    fn test_min_length_is_configurable() {
        let validator = WordValidator::new(
            PermissiveDictionary,
            SessionSettings::default().with_min_word_length(5),
        );
        let result = validator.validate("silk", &root("silkworm"), &[]);
        assert_eq!(result, Err(RejectionReason::TooShort));
        assert!(validator.validate("worms", &root("silkworm"), &[]).is_ok());
    }

    #[test]
    fn test_free_function_uses_defaults() {
        let result = validate("owl", &root("slowly"), &[], WordSetDictionary::new("en", ["owl"]));
        assert_eq!(result.map(|a| *a.score_delta()), Ok(3));
    }
}
