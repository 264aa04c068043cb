//! Dexdle core - pure guessing-game logic.
//!
//! # Architecture
//!
//! - **Creature**: immutable detail records and lightweight roster entries
//! - **Roster**: sorted, unique candidate index with resolution and suggestions
//! - **Compare**: the attribute comparator producing one verdict per attribute
//! - **Session**: typestate state machine counting attempts toward a limit
//!
//! Nothing here performs I/O; fetching records is the caller's job.
//!
//! # Example
//!
//! ```
//! use dexdle_core::{compare, CreatureRecord, Generation, TypeSlots, Verdict};
//!
//! let guess = CreatureRecord::new("charmander", Generation::I, TypeSlots::single("fire"), 6, 85)?;
//! let secret = CreatureRecord::new("torchic", Generation::III, TypeSlots::single("fire"), 4, 25)?;
//!
//! let verdict = compare(&guess, &secret);
//! assert_eq!(verdict.generation, Verdict::Lower);
//! assert_eq!(verdict.type1, Verdict::Correct);
//! # Ok::<(), dexdle_core::RecordError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod compare;
mod creature;
mod roster;
mod session;
mod verdict;

pub use compare::{
    compare, compare_generation, compare_magnitude, compare_name, compare_type1, compare_type2,
};
pub use creature::{CreatureRecord, Generation, RecordError, RosterEntry, TypeSlots};
pub use roster::Roster;
pub use session::{
    AnySession, AwaitingGuess, Evaluating, GuessTransition, Outcome, SessionLoading,
    SessionPhase, SessionSnapshot, Terminated,
};
pub use verdict::{Attribute, Verdict, VerdictSet};
