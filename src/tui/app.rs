//! Application state and logic for the game screen.

use super::input::InputEvent;
use crate::controller::{GuessReport, GuessResolution, Suggestion};
use crate::error::GameError;
use dexdle_core::{CreatureRecord, Outcome, SessionPhase, SessionSnapshot, VerdictSet};
use tracing::debug;

/// One evaluated guess shown in the feedback table.
#[derive(Debug, Clone)]
pub struct FeedbackRow {
    /// Guessed record.
    pub guess: CreatureRecord,
    /// Its verdicts.
    pub verdict: VerdictSet,
}

/// What the event loop must do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Nothing beyond redrawing.
    None,
    /// The input text changed; suggestions need refreshing.
    InputChanged,
    /// Submit this name as a guess.
    Submit(String),
    /// Start a new session.
    Reset,
    /// Leave the game.
    Quit,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    input: String,
    suggestions: Vec<Suggestion>,
    selected: Option<usize>,
    rows: Vec<FeedbackRow>,
    status_message: String,
    snapshot: Option<SessionSnapshot>,
    busy: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates a new application waiting for its first session.
    pub fn new() -> Self {
        Self {
            input: String::new(),
            suggestions: Vec::new(),
            selected: None,
            rows: Vec::new(),
            status_message: String::new(),
            snapshot: None,
            busy: false,
        }
    }

    /// Current guess text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Suggestions for the current input.
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    /// Highlighted suggestion index.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Feedback rows, newest first.
    pub fn rows(&self) -> &[FeedbackRow] {
        &self.rows
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Latest session snapshot, if a session has been attempted.
    pub fn snapshot(&self) -> Option<&SessionSnapshot> {
        self.snapshot.as_ref()
    }

    /// Returns true if typing and submitting are enabled.
    pub fn input_enabled(&self) -> bool {
        !self.busy && self.snapshot.as_ref().is_some_and(SessionSnapshot::accepts_guesses)
    }

    /// Returns true if a reset is allowed: the game ended or never started.
    pub fn can_reset(&self) -> bool {
        !self.busy
            && self
                .snapshot
                .as_ref()
                .is_none_or(|s| s.phase != SessionPhase::AwaitingGuess)
    }

    /// Handles one input event.
    pub fn handle_input(&mut self, event: InputEvent) -> Action {
        match event {
            InputEvent::Quit => Action::Quit,
            InputEvent::Reset if self.can_reset() => Action::Reset,
            InputEvent::Reset => Action::None,
            _ if !self.input_enabled() => Action::None,
            InputEvent::Insert(c) => {
                self.input.push(c);
                Action::InputChanged
            }
            InputEvent::Backspace => {
                self.input.pop();
                Action::InputChanged
            }
            InputEvent::SelectNext => {
                if !self.suggestions.is_empty() {
                    let last = self.suggestions.len() - 1;
                    self.selected = Some(self.selected.map_or(0, |i| (i + 1).min(last)));
                }
                Action::None
            }
            InputEvent::SelectPrevious => {
                self.selected = match self.selected {
                    Some(0) | None => None,
                    Some(i) => Some(i - 1),
                };
                Action::None
            }
            InputEvent::Complete => {
                let pick = self.selected.unwrap_or(0);
                match self.suggestions.get(pick) {
                    Some(suggestion) => {
                        self.input = suggestion.name.clone();
                        Action::InputChanged
                    }
                    None => Action::None,
                }
            }
            InputEvent::Submit => {
                let name = match self.selected.and_then(|i| self.suggestions.get(i)) {
                    Some(suggestion) => suggestion.name.clone(),
                    None => self.input.trim().to_lowercase(),
                };
                self.input.clear();
                self.set_suggestions(Vec::new());
                Action::Submit(name)
            }
            InputEvent::Ignored => Action::None,
        }
    }

    /// Replaces the suggestion list and clears the highlight.
    pub fn set_suggestions(&mut self, suggestions: Vec<Suggestion>) {
        self.suggestions = suggestions;
        self.selected = None;
    }

    /// A session start is in flight.
    pub fn begin_loading(&mut self) {
        debug!("Loading session");
        self.busy = true;
        self.rows.clear();
        self.input.clear();
        self.set_suggestions(Vec::new());
        self.status_message = "Loading Pokémon...".to_string();
    }

    /// A session start finished.
    pub fn session_started(&mut self, result: Result<SessionSnapshot, GameError>) {
        self.busy = false;
        match result {
            Ok(snapshot) => {
                self.status_message = format!(
                    "Guess the Pokémon! You have {} attempts.",
                    snapshot.attempt_limit
                );
                self.snapshot = Some(snapshot);
            }
            Err(e) => {
                debug!(error = %e, "Session start failed");
                self.snapshot = None;
                self.status_message =
                    "Error loading Pokémon. Please try again. (Ctrl-R)".to_string();
            }
        }
    }

    /// A guess is in flight; input stays disabled until [`App::apply_report`].
    pub fn begin_guess(&mut self, name: &str) {
        self.busy = true;
        if let Some(snapshot) = &self.snapshot {
            self.status_message = format!(
                "Searching {}'s details... (attempt {}/{})",
                name,
                snapshot.attempt_count + 1,
                snapshot.attempt_limit
            );
        }
    }

    /// Applies the result of a submitted guess.
    pub fn apply_report(&mut self, name: &str, report: GuessReport) {
        self.busy = false;
        let snapshot = report.snapshot;
        self.status_message = match report.resolution {
            GuessResolution::Evaluated { guess, verdict } => {
                self.rows.insert(0, FeedbackRow { guess, verdict });
                progress_message(&snapshot)
            }
            GuessResolution::Rejected(GameError::UnknownGuessName(_)) => {
                format!("\"{}\" is not a valid Pokemon.", name)
            }
            GuessResolution::Rejected(_) => progress_message(&snapshot),
            GuessResolution::FetchFailed(_) => {
                format!("Error processing {}. Please try again.", name)
            }
        };
        self.snapshot = Some(snapshot);
    }
}

fn progress_message(snapshot: &SessionSnapshot) -> String {
    match (&snapshot.outcome, &snapshot.revealed) {
        (Some(Outcome::Victory), Some(secret)) => format!(
            "Correct! You guessed {} in {} attempts. (Ctrl-R for a new game)",
            secret.name(),
            snapshot.attempt_count
        ),
        (Some(Outcome::Exhausted), Some(secret)) => format!(
            "Game over! The secret Pokemon was {}. (Ctrl-R for a new game)",
            secret.name()
        ),
        _ => format!(
            "Try again, you have {} attempts left.",
            snapshot.attempts_remaining
        ),
    }
}
