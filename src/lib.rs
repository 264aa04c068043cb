//! Dexdle - guess the creature from attribute feedback.
//!
//! # Architecture
//!
//! - **Core** (`dexdle_core`): comparator and session state machine, no I/O
//! - **Roster**: providers for creature listings and detail records (PokeAPI or a TOML file)
//! - **Controller**: the single live session, driven against a provider
//! - **Server**: JSON HTTP API around the controller
//! - **TUI**: terminal front end around the controller
//!
//! # Example
//!
//! ```no_run
//! use dexdle::{GameConfig, GameController, PokeApiRoster};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = GameConfig::default();
//! let provider = PokeApiRoster::new(config.api_base_url(), *config.roster_limit());
//! let mut controller = GameController::new(provider, config);
//!
//! controller.start_session().await?;
//! let report = controller.submit_guess("pikachu").await;
//! println!("accepted: {}", report.accepted());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod controller;
mod error;
mod roster;
mod server;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Session control
pub use controller::{GameController, GuessReport, GuessResolution, Suggestion};
pub use error::GameError;

// Crate-level exports - Roster providers
pub use roster::{PokeApiRoster, RosterError, RosterErrorKind, RosterProvider, StaticRoster};

// Crate-level exports - HTTP API
pub use server::{
    ErrorBody, GuessRequest, GuessResponse, SharedController, SuggestionQuery, router, serve,
};

// Crate-level exports - Terminal UI
pub use tui::run_tui;

// Crate-level exports - Core game types
pub use dexdle_core::{
    AnySession, Attribute, CreatureRecord, Generation, Outcome, RosterEntry, SessionPhase,
    SessionSnapshot, TypeSlots, Verdict, VerdictSet, compare,
};
