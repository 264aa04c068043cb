//! Session controller: drives the core state machine against a roster provider.

use crate::config::GameConfig;
use crate::error::GameError;
use crate::roster::{RosterError, RosterErrorKind, RosterProvider};
use dexdle_core::{
    AnySession, CreatureRecord, Evaluating, Roster, SessionLoading, SessionSnapshot, VerdictSet,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// What happened to one submitted guess.
#[derive(Debug, Clone)]
pub enum GuessResolution {
    /// The guess was fetched and compared. One attempt charged.
    Evaluated {
        /// The guessed creature's record.
        guess: CreatureRecord,
        /// Per-attribute feedback.
        verdict: VerdictSet,
    },
    /// The guess never reached the session. Nothing charged.
    Rejected(GameError),
    /// The guess resolved but its record could not be fetched.
    /// The attempt stays charged.
    FetchFailed(GameError),
}

/// Outcome of [`GameController::submit_guess`] plus the session state after it.
#[derive(Debug, Clone)]
pub struct GuessReport {
    /// What happened to the guess.
    pub resolution: GuessResolution,
    /// Session state after the guess.
    pub snapshot: SessionSnapshot,
}

impl GuessReport {
    /// Returns true if the guess was taken and charged an attempt.
    pub fn accepted(&self) -> bool {
        !matches!(self.resolution, GuessResolution::Rejected(_))
    }

    /// Verdict, when the guess was compared.
    pub fn verdict(&self) -> Option<&VerdictSet> {
        match &self.resolution {
            GuessResolution::Evaluated { verdict, .. } => Some(verdict),
            _ => None,
        }
    }

    /// Guessed record, when it was fetched.
    pub fn guess(&self) -> Option<&CreatureRecord> {
        match &self.resolution {
            GuessResolution::Evaluated { guess, .. } => Some(guess),
            _ => None,
        }
    }

    /// Error, when the guess was rejected or its fetch failed.
    pub fn error(&self) -> Option<&GameError> {
        match &self.resolution {
            GuessResolution::Rejected(e) | GuessResolution::FetchFailed(e) => Some(e),
            GuessResolution::Evaluated { .. } => None,
        }
    }
}

/// A prefix suggestion for the guess input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Creature name.
    pub name: String,
    /// Sprite image URL, when the entry carries a numeric id.
    pub sprite_url: Option<String>,
}

/// Owns the single live session and everything needed to advance it.
pub struct GameController<P> {
    provider: P,
    config: GameConfig,
    roster: Roster,
    session: AnySession,
    rng: StdRng,
}

impl<P: RosterProvider> GameController<P> {
    /// Creates a controller with an entropy-seeded RNG. No session is started.
    #[instrument(skip_all)]
    pub fn new(provider: P, config: GameConfig) -> Self {
        Self::with_rng(provider, config, StdRng::from_entropy())
    }

    /// Creates a controller with the given RNG, for reproducible secrets.
    #[instrument(skip_all)]
    pub fn with_rng(provider: P, config: GameConfig, rng: StdRng) -> Self {
        let session = SessionLoading::new(*config.attempt_limit()).into();
        Self {
            provider,
            config,
            roster: Roster::default(),
            session,
            rng,
        }
    }

    /// Current session.
    pub fn session(&self) -> &AnySession {
        &self.session
    }

    /// Presentation view of the current session.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    /// Roster loaded by the last session start.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Active configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Loads the roster, picks a secret uniformly at random and fetches it.
    ///
    /// On failure the session stays in `Loading` and no guess is accepted.
    #[instrument(skip(self))]
    pub async fn start_session(&mut self) -> Result<SessionSnapshot, GameError> {
        let loading = SessionLoading::new(*self.config.attempt_limit());
        self.session = loading.clone().into();
        info!("Starting session");

        let entries = self.provider.list_roster().await.map_err(|e| {
            warn!(error = %e, "Roster listing failed");
            GameError::RosterUnavailable(e)
        })?;
        self.roster = Roster::new(entries);

        let secret_entry = self.roster.choose(&mut self.rng).cloned().ok_or_else(|| {
            warn!("Roster is empty");
            GameError::RosterUnavailable(RosterError::new(
                RosterErrorKind::NotFound,
                "Roster listing is empty",
            ))
        })?;
        debug!(reference = secret_entry.reference(), "Secret chosen");

        let secret = self
            .provider
            .fetch_detail(secret_entry.reference())
            .await
            .map_err(|e| {
                warn!(error = %e, "Secret detail fetch failed");
                GameError::DetailFetchFailed(e)
            })?;

        self.session = loading.ready(secret).into();
        Ok(self.snapshot())
    }

    /// Discards the current session and starts a new one.
    #[instrument(skip(self), fields(phase = %self.session.phase()))]
    pub async fn reset_session(&mut self) -> Result<SessionSnapshot, GameError> {
        info!("Resetting session");
        self.start_session().await
    }

    /// Submits one guess by name.
    #[instrument(skip(self), fields(phase = %self.session.phase()))]
    pub async fn submit_guess(&mut self, name: &str) -> GuessReport {
        let placeholder = SessionLoading::new(*self.config.attempt_limit()).into();
        let awaiting = match std::mem::replace(&mut self.session, placeholder).into_awaiting() {
            Ok(awaiting) => awaiting,
            Err(other) => {
                let phase = other.phase();
                self.session = other;
                return self.report(GuessResolution::Rejected(GameError::NotAcceptingGuesses(
                    phase,
                )));
            }
        };

        let Some(entry) = self.roster.resolve(name).cloned() else {
            self.session = awaiting.into();
            let wanted = name.trim().to_lowercase();
            debug!(guess = %wanted, "Unknown guess name");
            return self.report(GuessResolution::Rejected(GameError::UnknownGuessName(wanted)));
        };

        let evaluating = awaiting.begin_guess(entry);
        info!(
            guess = evaluating.pending().name(),
            attempt = evaluating.attempt_count(),
            "Evaluating guess"
        );
        let reference = evaluating.pending().reference().to_string();
        let pending = PendingGuess::new(&mut self.session, evaluating);

        let fetched = self.provider.fetch_detail(&reference).await;
        let resolution = pending.finish(fetched);
        self.report(resolution)
    }

    /// Up to the configured number of roster names starting with `prefix`.
    #[instrument(skip(self))]
    pub fn suggestions(&self, prefix: &str) -> Vec<Suggestion> {
        self.roster
            .suggestions(prefix, *self.config.suggestion_limit())
            .into_iter()
            .map(|entry| Suggestion {
                name: entry.name().to_string(),
                sprite_url: entry.sprite_url(self.config.sprite_base_url()),
            })
            .collect()
    }

    fn report(&self, resolution: GuessResolution) -> GuessReport {
        GuessReport {
            resolution,
            snapshot: self.snapshot(),
        }
    }
}

/// Holds the session slot while a guess fetch is in flight.
///
/// The slot shows `Evaluating` until [`finish`](Self::finish) settles it. If the
/// fetch is abandoned first, dropping the guard settles it as a failed fetch,
/// so the session never stays in `Evaluating`.
struct PendingGuess<'a> {
    slot: &'a mut AnySession,
    evaluating: Evaluating,
    settled: bool,
}

impl<'a> PendingGuess<'a> {
    fn new(slot: &'a mut AnySession, evaluating: Evaluating) -> Self {
        *slot = evaluating.clone().into();
        Self {
            slot,
            evaluating,
            settled: false,
        }
    }

    fn finish(mut self, fetched: Result<CreatureRecord, RosterError>) -> GuessResolution {
        let resolution = match fetched {
            Ok(guess) => {
                let (verdict, transition) = self.evaluating.clone().resolve(&guess);
                *self.slot = transition.into();
                info!(%verdict, "Guess evaluated");
                GuessResolution::Evaluated { guess, verdict }
            }
            Err(e) => {
                *self.slot = self.evaluating.clone().fetch_failed().into();
                GuessResolution::FetchFailed(GameError::DetailFetchFailed(e))
            }
        };
        self.settled = true;
        resolution
    }
}

impl Drop for PendingGuess<'_> {
    fn drop(&mut self) {
        if !self.settled {
            warn!(
                guess = self.evaluating.pending().name(),
                "Guess fetch abandoned, attempt stays charged"
            );
            *self.slot = self.evaluating.clone().fetch_failed().into();
        }
    }
}
