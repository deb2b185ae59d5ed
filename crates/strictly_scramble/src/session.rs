//! Game session: one player working through a fixed number of rounds.
//!
//! The session owns the mutable round state and runs every submission
//! through [`WordValidator`]. It knows nothing about rendering; callers
//! redraw after each call.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::dictionary::Dictionary;
use crate::invariants::{InvariantSet, InvariantViolation, RoundInvariants, RoundView};
use crate::settings::SessionSettings;
use crate::types::{Accepted, RejectionReason, RootWord};
use crate::validator::WordValidator;
use crate::word_list::{DEFAULT_ROOT_WORD, RootWordSource};

/// Where the session is in its lifecycle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum SessionPhase {
    /// Accepting submissions for the current root word.
    #[display("in round")]
    InRound,
    /// The round was closed; waiting for the next one to start.
    #[display("round ended")]
    RoundEndedNeedsAdvance,
    /// All rounds played; only a restart leaves this phase.
    #[display("game ended")]
    GameEnded,
}

/// Why a submission did not produce an accepted word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SubmitError {
    /// The validator turned the candidate down.
    #[display("{}", _0)]
    Rejected(RejectionReason),
    /// Submissions are only taken while a round is open.
    #[display("No round is open ({})", _0)]
    RoundClosed(SessionPhase),
}

impl SubmitError {
    /// The rejection reason, if the validator produced one.
    pub fn reason(&self) -> Option<RejectionReason> {
        match self {
            Self::Rejected(reason) => Some(*reason),
            Self::RoundClosed(_) => None,
        }
    }

    /// Whether the caller should ignore this without telling the player.
    pub fn is_silent(&self) -> bool {
        self.reason().is_some_and(RejectionReason::is_silent)
    }
}

impl From<RejectionReason> for SubmitError {
    fn from(reason: RejectionReason) -> Self {
        Self::Rejected(reason)
    }
}

impl std::error::Error for SubmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rejected(reason) => Some(reason),
            Self::RoundClosed(_) => None,
        }
    }
}

/// Record of a closed round.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Round number, starting at 1.
    round: u32,
    /// The round's root word.
    root_word: RootWord,
    /// Accepted words, most recent first.
    words: Vec<String>,
    /// Points scored in the round.
    score: usize,
}

/// Mutable state of one game.
///
/// Generic over the dictionary and the root word source so tests can swap
/// in fixed word sets and scripted roots.
#[derive(Debug)]
pub struct GameSession<D, W> {
    validator: WordValidator<D>,
    source: W,
    root_word: RootWord,
    history: Vec<String>,
    score: usize,
    round: u32,
    phase: SessionPhase,
    summaries: Vec<RoundSummary>,
}

impl<D: Dictionary, W: RootWordSource> GameSession<D, W> {
    /// Creates a session and opens round 1.
    #[instrument(skip_all, fields(round_limit = settings.round_limit()))]
    pub fn new(dictionary: D, source: W, settings: SessionSettings) -> Self {
        let mut session = Self {
            validator: WordValidator::new(dictionary, settings),
            source,
            root_word: RootWord::fallback(),
            history: Vec::new(),
            score: 0,
            round: 0,
            phase: SessionPhase::InRound,
            summaries: Vec::new(),
        };
        session.open_round();
        session
    }

    /// Submits raw player input.
    ///
    /// Rejections leave the session untouched. A blank submission comes back
    /// as [`RejectionReason::Empty`], which callers treat as a silent no-op.
    /// Accepted words go to the front of the history and add their length
    /// to the score.
    #[instrument(skip(self), fields(round = self.round, root = %self.root_word))]
    pub fn submit_candidate(&mut self, raw: &str) -> Result<Accepted, SubmitError> {
        if self.phase != SessionPhase::InRound {
            debug!(phase = %self.phase, "Submission outside an open round");
            return Err(SubmitError::RoundClosed(self.phase));
        }

        let accepted = self
            .validator
            .validate(raw, &self.root_word, &self.history)?;

        self.history.insert(0, accepted.word().clone());
        self.score += *accepted.score_delta();
        debug!(score = self.score, words = self.history.len(), "Round updated");

        debug_assert!(
            self.check_invariants().is_ok(),
            "Round invariants violated after accepting {accepted}"
        );
        Ok(accepted)
    }

    /// Moves on to the next round, or ends the game once the limit is reached.
    ///
    /// A new root word is drawn from the source; if the source fails, the
    /// round uses [`DEFAULT_ROOT_WORD`]. Does nothing once the game has ended.
    #[instrument(skip(self), fields(round = self.round, phase = %self.phase))]
    pub fn start_new_round(&mut self) -> SessionPhase {
        if self.phase == SessionPhase::GameEnded {
            debug!("Game already ended; restart required");
            return self.phase;
        }

        if self.phase == SessionPhase::InRound {
            self.record_summary();
        }

        if self.round >= self.validator.settings().round_limit() {
            info!(
                rounds = self.round,
                game_score = self.game_score(),
                "Round limit reached, game over"
            );
            self.phase = SessionPhase::GameEnded;
            return self.phase;
        }

        self.open_round();
        self.phase
    }

    /// Closes the current round without starting the next one.
    ///
    /// The round's words and score stay visible until
    /// [`start_new_round`](Self::start_new_round).
    #[instrument(skip(self), fields(round = self.round))]
    pub fn finish_round(&mut self) -> SessionPhase {
        if self.phase == SessionPhase::InRound {
            self.record_summary();
            self.phase = SessionPhase::RoundEndedNeedsAdvance;
            info!(score = self.score, "Round finished");
        }
        self.phase
    }

    /// Starts the game over from round 1, from any phase.
    #[instrument(skip(self), fields(round = self.round, phase = %self.phase))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.round = 0;
        self.summaries.clear();
        self.open_round();
    }

    /// Checks the round invariants against the current state.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        RoundInvariants::check_all(&RoundView {
            root_word: &self.root_word,
            history: &self.history,
            score: self.score,
        })
    }

    fn open_round(&mut self) {
        self.root_word = self.draw_root_word();
        self.history.clear();
        self.score = 0;
        self.round += 1;
        self.phase = SessionPhase::InRound;
        info!(round = self.round, root = %self.root_word, "Round started");
    }

    fn draw_root_word(&mut self) -> RootWord {
        match self.source.pick_root_word() {
            Ok(word) => word,
            Err(e) => {
                warn!(
                    error = %e,
                    fallback = DEFAULT_ROOT_WORD,
                    "Root word unavailable, using fallback"
                );
                RootWord::fallback()
            }
        }
    }

    fn record_summary(&mut self) {
        self.summaries.push(RoundSummary {
            round: self.round,
            root_word: self.root_word.clone(),
            words: self.history.clone(),
            score: self.score,
        });
    }
}

impl<D, W> GameSession<D, W> {
    /// The current root word.
    pub fn root_word(&self) -> &RootWord {
        &self.root_word
    }

    /// Words accepted this round, most recent first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Points scored this round.
    pub fn score(&self) -> usize {
        self.score
    }

    /// Points scored across every round of this game so far.
    pub fn game_score(&self) -> usize {
        let closed: usize = self.summaries.iter().map(|s| s.score).sum();
        match self.phase {
            SessionPhase::InRound => closed + self.score,
            SessionPhase::RoundEndedNeedsAdvance | SessionPhase::GameEnded => closed,
        }
    }

    /// Current round number, starting at 1.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Rounds per game.
    pub fn round_limit(&self) -> u32 {
        self.validator.settings().round_limit()
    }

    /// Where the session is in its lifecycle.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// True once every round has been played.
    pub fn is_game_over(&self) -> bool {
        self.phase == SessionPhase::GameEnded
    }

    /// Closed rounds, oldest first.
    pub fn summaries(&self) -> &[RoundSummary] {
        &self.summaries
    }

    /// The rules in force.
    pub fn settings(&self) -> &SessionSettings {
        self.validator.settings()
    }

    /// The validator, for checking words without touching the session.
    pub fn validator(&self) -> &WordValidator<D> {
        &self.validator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::PermissiveDictionary;
    use crate::word_list::ScriptedRootWords;

    fn session(roots: &[&str]) -> GameSession<PermissiveDictionary, ScriptedRootWords> {
        GameSession::new(
            PermissiveDictionary,
            ScriptedRootWords::new(roots.iter().copied()),
            SessionSettings::default(),
        )
    }

    fn describe<D, W>(s: &GameSession<D, W>) -> (u32, u32, usize) {
        (s.round(), s.round_limit(), s.settings().min_word_length())
    }

    #[test]
    fn test_accessors_need_no_dictionary_bound() {
        let s = session(&["silkworm"]);
        assert_eq!(describe(&s), (1, 8, 3));
        assert_eq!(s.validator().settings(), s.settings());
    }

    #[test]
    fn test_starts_in_round_one() {
        let s = session(&["silkworm"]);
        assert_eq!(s.phase(), SessionPhase::InRound);
        assert_eq!(s.round(), 1);
        assert_eq!(s.root_word(), &"silkworm");
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn test_accepted_word_goes_to_front() {
        let mut s = session(&["silkworm"]);
        s.submit_candidate("silk").unwrap();
        s.submit_candidate("worm").unwrap();
        assert_eq!(s.history(), ["worm", "silk"]);
        assert_eq!(s.score(), 8);
    }

    #[test]
    fn test_finish_round_freezes_submissions() {
        let mut s = session(&["silkworm", "abductor"]);
        s.submit_candidate("silk").unwrap();
        assert_eq!(s.finish_round(), SessionPhase::RoundEndedNeedsAdvance);
        assert_eq!(
            s.submit_candidate("worm"),
            Err(SubmitError::RoundClosed(SessionPhase::RoundEndedNeedsAdvance))
        );
        assert_eq!(s.history(), ["silk"]);
        assert_eq!(s.summaries().len(), 1);

        assert_eq!(s.start_new_round(), SessionPhase::InRound);
        assert_eq!(s.summaries().len(), 1);
        assert_eq!(s.root_word(), &"abductor");
    }

    #[test]
    fn test_silent_error() {
        assert!(SubmitError::Rejected(RejectionReason::Empty).is_silent());
        assert!(!SubmitError::Rejected(RejectionReason::TooShort).is_silent());
        assert!(!SubmitError::RoundClosed(SessionPhase::GameEnded).is_silent());
    }
}
