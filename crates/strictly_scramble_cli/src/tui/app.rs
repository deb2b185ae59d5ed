//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use strictly_scramble::{
    Dictionary, GameSession, RejectionReason, RootWord, RootWordSource, SessionPhase, SubmitError,
};
use tracing::{debug, instrument};

/// A modal message shown over the game until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    /// Short heading.
    pub title: String,
    /// Explanation for the player.
    pub message: String,
}

impl Alert {
    /// Player-facing wording for a rejection.
    #[instrument]
    pub fn for_rejection(reason: RejectionReason, root: &RootWord, min_len: usize) -> Self {
        let (title, message) = match reason {
            RejectionReason::Empty => ("Nothing to check", "Type a word first.".to_string()),
            RejectionReason::SelfCopy => ("Word is the root word", "Be original!".to_string()),
            RejectionReason::TooShort => (
                "Word too short",
                format!("Words need at least {min_len} letters."),
            ),
            RejectionReason::Duplicate => ("Word used already", "Be more original!".to_string()),
            RejectionReason::NotDerivable => (
                "Word not possible",
                format!("You can't spell that word from '{root}'. Each letter can be used once."),
            ),
            RejectionReason::NotAWord => (
                "Word not recognized",
                "You can't just make them up, you know!".to_string(),
            ),
        };
        Self {
            title: title.to_string(),
            message,
        }
    }
}

/// Main application state.
pub struct App<D, W> {
    session: GameSession<D, W>,
    input: String,
    alert: Option<Alert>,
    status_message: String,
    should_quit: bool,
}

impl<D: Dictionary, W: RootWordSource> App<D, W> {
    /// Creates a new application around a running session.
    pub fn new(session: GameSession<D, W>) -> Self {
        Self {
            session,
            input: String::new(),
            alert: None,
            status_message: "Spell words using the letters above. Enter submits.".to_string(),
            should_quit: false,
        }
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(phase = %self.session.phase()))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                debug!("Alert dismissed");
                self.alert = None;
            }
            return;
        }

        if ctrl {
            match key.code {
                KeyCode::Char('n') => self.new_round(),
                KeyCode::Char('e') => self.finish_round(),
                KeyCode::Char('r') => self.restart(),
                _ => {}
            }
            return;
        }

        match self.session.phase() {
            SessionPhase::GameEnded => match key.code {
                KeyCode::Char('r') => self.restart(),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            SessionPhase::RoundEndedNeedsAdvance => match key.code {
                KeyCode::Enter => self.new_round(),
                KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            SessionPhase::InRound => match key.code {
                KeyCode::Enter => self.submit(),
                KeyCode::Backspace => {
                    self.input.pop();
                }
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) if !c.is_control() => self.input.push(c),
                _ => {}
            },
        }
    }

    /// Submits the current input.
    ///
    /// The input is cleared only when the word is accepted, so a rejected
    /// word can be corrected in place. Blank input is ignored.
    fn submit(&mut self) {
        match self.session.submit_candidate(&self.input) {
            Ok(accepted) => {
                self.status_message =
                    format!("+{} for \"{}\"", accepted.score_delta(), accepted.word());
                self.input.clear();
            }
            Err(e) if e.is_silent() => {
                self.input.clear();
            }
            Err(SubmitError::Rejected(reason)) => {
                self.alert = Some(Alert::for_rejection(
                    reason,
                    self.session.root_word(),
                    self.session.settings().min_word_length(),
                ));
            }
            Err(e @ SubmitError::RoundClosed(_)) => {
                self.status_message = e.to_string();
            }
        }
    }

    fn new_round(&mut self) {
        self.input.clear();
        self.status_message = match self.session.start_new_round() {
            SessionPhase::GameEnded => {
                "Game over! Press 'r' to play again or 'q' to quit.".to_string()
            }
            _ => format!("New root word: {}", self.session.root_word()),
        };
    }

    fn finish_round(&mut self) {
        if self.session.finish_round() == SessionPhase::RoundEndedNeedsAdvance {
            self.input.clear();
            self.status_message = format!(
                "Round {} over with {} points. Enter for the next word.",
                self.session.round(),
                self.session.score()
            );
        }
    }

    /// Restarts the game from round 1.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.session.restart();
        self.input.clear();
        self.alert = None;
        self.status_message = format!("New game! Root word: {}", self.session.root_word());
    }
}

impl<D, W> App<D, W> {
    /// The game session.
    pub fn session(&self) -> &GameSession<D, W> {
        &self.session
    }

    /// Text typed so far.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The alert being shown, if any.
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    /// The status line.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Gives back the session, e.g. to report on it after the UI closes.
    pub fn into_session(self) -> GameSession<D, W> {
        self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_scramble::{ScriptedRootWords, SessionSettings, WordSetDictionary};

    type TestApp = App<WordSetDictionary, ScriptedRootWords>;

    fn app(round_limit: u32) -> TestApp {
        let session = GameSession::new(
            WordSetDictionary::new("en", ["silk", "worm", "milk"]),
            ScriptedRootWords::new(["silkworm"; 8]),
            SessionSettings::default().with_round_limit(round_limit),
        );
        App::new(session)
    }

    fn press(app: &mut TestApp, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut TestApp, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_word(app: &mut TestApp, word: &str) {
        word.chars().for_each(|c| press(app, KeyCode::Char(c)));
    }

    #[test]
    fn test_typing_and_submitting() {
        let mut app = app(8);
        type_word(&mut app, "silk");
        assert_eq!(app.input(), "silk");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input(), "");
        assert_eq!(app.session().score(), 4);
        assert!(app.alert().is_none());
    }

    #[test]
    fn test_backspace() {
        let mut app = app(8);
        type_word(&mut app, "silkk");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input(), "silk");
    }

    #[test]
    fn test_rejection_shows_alert_and_keeps_input() {
        let mut app = app(8);
        type_word(&mut app, "cats");
        press(&mut app, KeyCode::Enter);

        let alert = app.alert().expect("alert shown");
        assert_eq!(alert.title, "Word not possible");
        assert!(alert.message.contains("'silkworm'"));
        assert_eq!(app.input(), "cats");

        // Keys other than Enter/Esc are swallowed while the alert is up.
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.input(), "cats");

        press(&mut app, KeyCode::Esc);
        assert!(app.alert().is_none());
        assert!(!app.should_quit());
    }

    #[test]
    fn test_blank_submit_is_silent() {
        let mut app = app(8);
        type_word(&mut app, "   ");
        press(&mut app, KeyCode::Enter);
        assert!(app.alert().is_none());
        assert_eq!(app.input(), "");
        assert_eq!(app.session().round(), 1);
    }

    #[test]
    fn test_finish_then_advance() {
        let mut app = app(8);
        ctrl(&mut app, 'e');
        assert_eq!(app.session().phase(), SessionPhase::RoundEndedNeedsAdvance);

        type_word(&mut app, "silk");
        assert_eq!(app.input(), "");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session().phase(), SessionPhase::InRound);
        assert_eq!(app.session().round(), 2);
    }

    #[test]
    fn test_game_over_and_restart() {
        let mut app = app(1);
        ctrl(&mut app, 'n');
        assert!(app.session().is_game_over());

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.session().phase(), SessionPhase::InRound);
        assert_eq!(app.session().round(), 1);

        ctrl(&mut app, 'n');
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_ctrl_c_quits_from_alert() {
        let mut app = app(8);
        type_word(&mut app, "so");
        press(&mut app, KeyCode::Enter);
        assert!(app.alert().is_some());
        ctrl(&mut app, 'c');
        assert!(app.should_quit());
    }

    #[test]
    fn test_alert_wording_mentions_min_length() {
        let root = RootWord::parse("silkworm").unwrap();
        let alert = Alert::for_rejection(RejectionReason::TooShort, &root, 4);
        assert_eq!(alert.message, "Words need at least 4 letters.");
    }
}
