//! Phase labels and outcomes for the session state machine.

use serde::{Deserialize, Serialize};

/// Runtime label of the phase a session is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SessionPhase {
    /// Roster and secret are being fetched; guesses rejected.
    Loading,
    /// Ready for exactly one guess.
    AwaitingGuess,
    /// A guess is being fetched and compared.
    Evaluating,
    /// Won or out of attempts; absorbing until reset.
    Terminated,
}

/// How a terminated session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The player named the secret.
    Victory,
    /// The attempt limit was reached without naming the secret.
    Exhausted,
}

impl Outcome {
    /// Returns true for [`Outcome::Victory`].
    pub fn is_victory(&self) -> bool {
        matches!(self, Outcome::Victory)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Victory => write!(f, "Victory"),
            Outcome::Exhausted => write!(f, "Out of attempts"),
        }
    }
}
