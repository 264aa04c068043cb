//! Game session state machine.
//!
//! `Loading → AwaitingGuess ⇄ Evaluating → (AwaitingGuess | Terminated)`,
//! with `Terminated` absorbing until reset.

mod phases;
mod typestate;
mod wrapper;

pub use phases::{Outcome, SessionPhase};
pub use typestate::{AwaitingGuess, Evaluating, GuessTransition, SessionLoading, Terminated};
pub use wrapper::{AnySession, SessionSnapshot};
