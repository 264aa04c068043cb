//! Serializable session wrapper and snapshots for presentation.

use super::phases::{Outcome, SessionPhase};
use super::typestate::{AwaitingGuess, Evaluating, GuessTransition, SessionLoading, Terminated};
use crate::creature::CreatureRecord;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use tracing::debug;

/// A session in any phase.
///
/// The typestate structs cannot be stored in one slot directly, so owners
/// keep this enum and unwrap the phase they need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum AnySession {
    /// Fetching roster and secret.
    Loading(SessionLoading),
    /// Ready for a guess.
    AwaitingGuess(AwaitingGuess),
    /// Guess in flight.
    Evaluating(Evaluating),
    /// Finished.
    Terminated(Terminated),
}

impl From<SessionLoading> for AnySession {
    fn from(session: SessionLoading) -> Self {
        AnySession::Loading(session)
    }
}

impl From<AwaitingGuess> for AnySession {
    fn from(session: AwaitingGuess) -> Self {
        AnySession::AwaitingGuess(session)
    }
}

impl From<Evaluating> for AnySession {
    fn from(session: Evaluating) -> Self {
        AnySession::Evaluating(session)
    }
}

impl From<Terminated> for AnySession {
    fn from(session: Terminated) -> Self {
        AnySession::Terminated(session)
    }
}

impl From<GuessTransition> for AnySession {
    fn from(transition: GuessTransition) -> Self {
        match transition {
            GuessTransition::AwaitingGuess(s) => s.into(),
            GuessTransition::Terminated(s) => s.into(),
        }
    }
}

impl AnySession {
    /// Current phase label.
    pub fn phase(&self) -> SessionPhase {
        match self {
            AnySession::Loading(_) => SessionPhase::Loading,
            AnySession::AwaitingGuess(_) => SessionPhase::AwaitingGuess,
            AnySession::Evaluating(_) => SessionPhase::Evaluating,
            AnySession::Terminated(_) => SessionPhase::Terminated,
        }
    }

    /// Attempts charged so far.
    pub fn attempt_count(&self) -> u32 {
        match self {
            AnySession::Loading(_) => 0,
            AnySession::AwaitingGuess(s) => s.attempt_count(),
            AnySession::Evaluating(s) => s.attempt_count(),
            AnySession::Terminated(s) => s.attempt_count(),
        }
    }

    /// Maximum attempts.
    pub fn attempt_limit(&self) -> NonZeroU32 {
        match self {
            AnySession::Loading(s) => s.attempt_limit(),
            AnySession::AwaitingGuess(s) => s.attempt_limit(),
            AnySession::Evaluating(s) => s.attempt_limit(),
            AnySession::Terminated(s) => s.attempt_limit(),
        }
    }

    /// Returns true once won or exhausted.
    pub fn is_terminated(&self) -> bool {
        matches!(self, AnySession::Terminated(_))
    }

    /// Outcome, once terminated.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            AnySession::Terminated(s) => Some(s.outcome()),
            _ => None,
        }
    }

    /// Takes the `AwaitingGuess` phase out, or hands the session back unchanged.
    pub fn into_awaiting(self) -> Result<AwaitingGuess, Self> {
        match self {
            AnySession::AwaitingGuess(s) => Ok(s),
            other => {
                debug!(phase = %other.phase(), "Session not awaiting a guess");
                Err(other)
            }
        }
    }

    /// Presentation view; the secret is only included once terminated.
    pub fn snapshot(&self) -> SessionSnapshot {
        let attempt_limit = self.attempt_limit().get();
        let attempt_count = self.attempt_count();
        SessionSnapshot {
            phase: self.phase(),
            attempt_count,
            attempt_limit,
            attempts_remaining: attempt_limit.saturating_sub(attempt_count),
            outcome: self.outcome(),
            revealed: match self {
                AnySession::Terminated(s) => Some(s.secret().clone()),
                _ => None,
            },
        }
    }

    /// Status line for display.
    pub fn status_string(&self) -> String {
        match self {
            AnySession::Loading(_) => "Loading...".to_string(),
            AnySession::AwaitingGuess(s) => {
                format!("{} of {} attempts left", s.attempts_remaining(), s.attempt_limit())
            }
            AnySession::Evaluating(s) => format!(
                "Evaluating {} (attempt {}/{})",
                s.pending().name(),
                s.attempt_count(),
                s.attempt_limit()
            ),
            AnySession::Terminated(s) => match s.outcome() {
                Outcome::Victory => format!(
                    "Game over. {} found in {} attempts.",
                    s.secret().name(),
                    s.attempt_count()
                ),
                Outcome::Exhausted => {
                    format!("Game over. The secret was {}.", s.secret().name())
                }
            },
        }
    }
}

/// Read-only view of a session handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Current phase.
    pub phase: SessionPhase,
    /// Attempts charged so far.
    pub attempt_count: u32,
    /// Maximum attempts.
    pub attempt_limit: u32,
    /// Attempts left before exhaustion.
    pub attempts_remaining: u32,
    /// Present once terminated.
    pub outcome: Option<Outcome>,
    /// The secret, present once terminated.
    pub revealed: Option<CreatureRecord>,
}

impl SessionSnapshot {
    /// Returns true if a guess would be accepted.
    pub fn accepts_guesses(&self) -> bool {
        self.phase == SessionPhase::AwaitingGuess
    }
}
