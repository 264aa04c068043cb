//! Attribute comparator.
//!
//! Pure functions turning a guess and the secret into a [`VerdictSet`].
//! Comparison is deliberately asymmetric for the type slots: swapping guess
//! and secret can change the `type1`/`type2` verdicts.

use crate::creature::{CreatureRecord, Generation, TypeSlots};
use crate::verdict::{Verdict, VerdictSet};
use std::cmp::Ordering;
use tracing::{debug, instrument, trace};

/// Compares a guess against the secret on all six attributes.
#[instrument(skip_all, fields(guess = guess.name(), secret = secret.name()))]
pub fn compare(guess: &CreatureRecord, secret: &CreatureRecord) -> VerdictSet {
    let verdict = VerdictSet {
        name: compare_name(guess.name(), secret.name()),
        generation: compare_generation(guess.generation(), secret.generation()),
        type1: compare_type1(guess.types(), secret.types()),
        type2: compare_type2(guess.types(), secret.types()),
        height: compare_magnitude(guess.height(), secret.height()),
        weight: compare_magnitude(guess.weight(), secret.weight()),
    };
    debug!(%verdict, "Compared guess");
    verdict
}

/// `correct` iff the names are equal ignoring case.
pub fn compare_name(guess: &str, secret: &str) -> Verdict {
    if guess.to_lowercase() == secret.to_lowercase() {
        Verdict::Correct
    } else {
        Verdict::Incorrect
    }
}

/// Directional comparison of generation ranks.
///
/// An unknown generation on either side yields `incorrect`, never a direction.
pub fn compare_generation(guess: Generation, secret: Generation) -> Verdict {
    if guess.is_unknown() || secret.is_unknown() {
        trace!(?guess, ?secret, "Unknown generation, no directional hint");
        return Verdict::Incorrect;
    }
    directional(guess.rank().cmp(&secret.rank()))
}

/// First slot: exact match, else `partial` if it matches the secret's second slot.
pub fn compare_type1(guess: &TypeSlots, secret: &TypeSlots) -> Verdict {
    let guess_primary = guess.primary();
    if guess_primary == secret.primary() {
        Verdict::Correct
    } else if secret.secondary() == Some(guess_primary) {
        Verdict::Partial
    } else {
        Verdict::Incorrect
    }
}

/// Second slot.
///
/// A missing second slot matches a missing second slot. A present one is
/// `correct` on a same-slot match and `partial` if it equals the secret's
/// first slot instead.
pub fn compare_type2(guess: &TypeSlots, secret: &TypeSlots) -> Verdict {
    match (guess.secondary(), secret.secondary()) {
        (None, None) => Verdict::Correct,
        (None, Some(_)) => Verdict::Incorrect,
        (Some(guess_secondary), Some(secret_secondary)) if guess_secondary == secret_secondary => {
            Verdict::Correct
        }
        (Some(guess_secondary), _) if guess_secondary == secret.primary() => Verdict::Partial,
        (Some(_), _) => Verdict::Incorrect,
    }
}

/// Exact numeric comparison used for height and weight.
pub fn compare_magnitude(guess: u32, secret: u32) -> Verdict {
    directional(guess.cmp(&secret))
}

fn directional(ordering: Ordering) -> Verdict {
    match ordering {
        Ordering::Equal => Verdict::Correct,
        Ordering::Greater => Verdict::Higher,
        Ordering::Less => Verdict::Lower,
    }
}
