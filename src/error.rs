//! Errors surfaced to the presentation layer.

use crate::roster::RosterError;
use derive_more::Display;
use dexdle_core::SessionPhase;

/// Distinguishable failures of session operations.
///
/// None of these are retried automatically; the player retries by guessing
/// again or resetting the session.
#[derive(Debug, Clone, Display)]
pub enum GameError {
    /// The roster listing could not be fetched, or came back empty.
    /// Fatal to session start.
    #[display("Roster unavailable: {}", _0)]
    RosterUnavailable(RosterError),

    /// A detail record could not be fetched. Fatal for the secret, but for
    /// a guess the attempt stays charged and the session carries on.
    #[display("Detail fetch failed: {}", _0)]
    DetailFetchFailed(RosterError),

    /// The guess names no roster entry. No attempt is charged.
    #[display("\"{}\" is not a known creature", _0)]
    UnknownGuessName(String),

    /// The session is loading or terminated.
    #[display("Session is {} and not accepting guesses", _0)]
    NotAcceptingGuesses(SessionPhase),
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::RosterUnavailable(e) | GameError::DetailFetchFailed(e) => Some(e),
            GameError::UnknownGuessName(_) | GameError::NotAcceptingGuesses(_) => None,
        }
    }
}

impl GameError {
    /// Short machine-readable code for API clients.
    pub fn code(&self) -> &'static str {
        match self {
            GameError::RosterUnavailable(_) => "roster_unavailable",
            GameError::DetailFetchFailed(_) => "detail_fetch_failed",
            GameError::UnknownGuessName(_) => "unknown_guess_name",
            GameError::NotAcceptingGuesses(_) => "not_accepting_guesses",
        }
    }
}
