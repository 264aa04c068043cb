//! Phase-specific typestate structs for a guessing session.
//!
//! Each phase is its own type with phase-specific fields, and transitions
//! consume the previous phase. A `Terminated` session ALWAYS has an outcome
//! and a revealed secret; only `AwaitingGuess` can start a guess.

use super::phases::Outcome;
use crate::compare::compare;
use crate::creature::{CreatureRecord, RosterEntry};
use crate::verdict::VerdictSet;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use tracing::{info, instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Loading Phase
// ─────────────────────────────────────────────────────────────

/// Session waiting for its roster and secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionLoading {
    attempt_limit: NonZeroU32,
}

impl SessionLoading {
    /// Creates a loading session with the given attempt limit.
    #[instrument]
    pub fn new(attempt_limit: NonZeroU32) -> Self {
        Self { attempt_limit }
    }

    /// Attempt limit the session will run with.
    pub fn attempt_limit(&self) -> NonZeroU32 {
        self.attempt_limit
    }

    /// Secret fetched: the session starts accepting guesses.
    #[instrument(skip_all, fields(attempt_limit = self.attempt_limit.get()))]
    pub fn ready(self, secret: CreatureRecord) -> AwaitingGuess {
        info!("Session ready for guesses");
        AwaitingGuess {
            secret,
            attempt_count: 0,
            attempt_limit: self.attempt_limit,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  AwaitingGuess Phase
// ─────────────────────────────────────────────────────────────

/// Session ready for the next guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwaitingGuess {
    secret: CreatureRecord,
    attempt_count: u32,
    attempt_limit: NonZeroU32,
}

impl AwaitingGuess {
    /// Charges one attempt and starts evaluating the resolved roster entry.
    ///
    /// Name resolution happens before this call: an unknown name never
    /// reaches the session and costs nothing.
    #[instrument(skip_all, fields(guess = entry.name(), attempt = self.attempt_count + 1))]
    pub fn begin_guess(self, entry: RosterEntry) -> Evaluating {
        Evaluating {
            secret: self.secret,
            attempt_count: self.attempt_count + 1,
            attempt_limit: self.attempt_limit,
            pending: entry,
        }
    }

    /// Attempts charged so far.
    pub fn attempt_count(&self) -> u32 {
        self.attempt_count
    }

    /// Maximum attempts.
    pub fn attempt_limit(&self) -> NonZeroU32 {
        self.attempt_limit
    }

    /// Attempts left before exhaustion.
    pub fn attempts_remaining(&self) -> u32 {
        self.attempt_limit.get().saturating_sub(self.attempt_count)
    }
}

// ─────────────────────────────────────────────────────────────
//  Evaluating Phase
// ─────────────────────────────────────────────────────────────

/// Session with one guess in flight. The attempt is already charged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluating {
    secret: CreatureRecord,
    attempt_count: u32,
    attempt_limit: NonZeroU32,
    pending: RosterEntry,
}

impl Evaluating {
    /// Roster entry being evaluated.
    pub fn pending(&self) -> &RosterEntry {
        &self.pending
    }

    /// Attempts charged so far, including this one.
    pub fn attempt_count(&self) -> u32 {
        self.attempt_count
    }

    /// Maximum attempts.
    pub fn attempt_limit(&self) -> NonZeroU32 {
        self.attempt_limit
    }

    /// Compares the fetched guess to the secret and decides the next phase.
    #[instrument(skip_all, fields(guess = guess.name(), attempt = self.attempt_count))]
    pub fn resolve(self, guess: &CreatureRecord) -> (VerdictSet, GuessTransition) {
        let verdict = compare(guess, &self.secret);

        let outcome = if verdict.is_victory() {
            Some(Outcome::Victory)
        } else if self.attempt_count >= self.attempt_limit.get() {
            Some(Outcome::Exhausted)
        } else {
            None
        };

        let transition = match outcome {
            Some(outcome) => {
                info!(%outcome, attempts = self.attempt_count, "Session terminated");
                GuessTransition::Terminated(Terminated {
                    secret: self.secret,
                    attempt_count: self.attempt_count,
                    attempt_limit: self.attempt_limit,
                    outcome,
                })
            }
            None => GuessTransition::AwaitingGuess(AwaitingGuess {
                secret: self.secret,
                attempt_count: self.attempt_count,
                attempt_limit: self.attempt_limit,
            }),
        };

        (verdict, transition)
    }

    /// The guess record could not be fetched. The attempt stays charged.
    #[instrument(skip_all, fields(guess = self.pending.name(), attempt = self.attempt_count))]
    pub fn fetch_failed(self) -> AwaitingGuess {
        warn!("Guess detail unavailable; attempt remains charged");
        AwaitingGuess {
            secret: self.secret,
            attempt_count: self.attempt_count,
            attempt_limit: self.attempt_limit,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Terminated Phase
// ─────────────────────────────────────────────────────────────

/// Finished session. Outcome and secret are always available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Terminated {
    secret: CreatureRecord,
    attempt_count: u32,
    attempt_limit: NonZeroU32,
    outcome: Outcome,
}

impl Terminated {
    /// How the session ended.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The revealed secret.
    pub fn secret(&self) -> &CreatureRecord {
        &self.secret
    }

    /// Attempts used.
    pub fn attempt_count(&self) -> u32 {
        self.attempt_count
    }

    /// Maximum attempts.
    pub fn attempt_limit(&self) -> NonZeroU32 {
        self.attempt_limit
    }

    /// Discards the session; a new one starts loading with the same limit.
    #[instrument(skip(self))]
    pub fn reset(self) -> SessionLoading {
        SessionLoading::new(self.attempt_limit)
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Phase reached after a guess is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessTransition {
    /// More attempts remain.
    AwaitingGuess(AwaitingGuess),
    /// Won or out of attempts.
    Terminated(Terminated),
}
