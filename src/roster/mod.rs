//! Roster providers: where creature listings and detail records come from.

mod pokeapi;
mod static_roster;

pub use pokeapi::PokeApiRoster;
pub use static_roster::StaticRoster;

use async_trait::async_trait;
use derive_more::Display;
use dexdle_core::{CreatureRecord, RosterEntry};
use tracing::instrument;

/// Source of roster listings and creature detail records.
///
/// Implementations must be shareable across tasks; the HTTP server holds one
/// behind a mutex for the lifetime of the process.
#[async_trait]
pub trait RosterProvider: Send + Sync {
    /// Lists every candidate creature. Order and duplicates are not significant.
    async fn list_roster(&self) -> Result<Vec<RosterEntry>, RosterError>;

    /// Fetches the full record behind a roster entry's reference.
    async fn fetch_detail(&self, reference: &str) -> Result<CreatureRecord, RosterError>;
}

#[async_trait]
impl<T: RosterProvider + ?Sized> RosterProvider for Box<T> {
    async fn list_roster(&self) -> Result<Vec<RosterEntry>, RosterError> {
        (**self).list_roster().await
    }

    async fn fetch_detail(&self, reference: &str) -> Result<CreatureRecord, RosterError> {
        (**self).fetch_detail(reference).await
    }
}

/// What went wrong talking to a roster source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RosterErrorKind {
    /// The source could not be reached at all.
    #[display("unreachable")]
    Unreachable,
    /// The source answered with a non-success status.
    #[display("status {}", _0)]
    Status(u16),
    /// The source answered with something that is not a valid record.
    #[display("malformed")]
    Malformed,
    /// The reference names no known creature.
    #[display("not found")]
    NotFound,
}

/// Roster error with location tracking.
#[derive(Debug, Clone, Display)]
#[display("Roster error ({}): {} at {}:{}", kind, message, file, line)]
pub struct RosterError {
    /// Error category.
    pub kind: RosterErrorKind,
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl std::error::Error for RosterError {}

impl RosterError {
    /// Creates a new roster error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(kind: RosterErrorKind, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<reqwest::Error> for RosterError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        let kind = match err.status() {
            Some(status) => RosterErrorKind::Status(status.as_u16()),
            None if err.is_decode() => RosterErrorKind::Malformed,
            None => RosterErrorKind::Unreachable,
        };
        Self::new(kind, format!("HTTP error: {}", err))
    }
}
