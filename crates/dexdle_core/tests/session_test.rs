//! Tests for the session typestate machine.

use std::num::NonZeroU32;

use dexdle_core::{
    AnySession, AwaitingGuess, CreatureRecord, Generation, GuessTransition, Outcome, RosterEntry,
    SessionLoading, SessionPhase, TypeSlots, Verdict,
};

fn creature(name: &str, types: &[&str], height: u32) -> CreatureRecord {
    CreatureRecord::new(
        name,
        Generation::I,
        TypeSlots::from_labels(types).expect("valid type slots"),
        height,
        100,
    )
    .expect("valid record")
}

fn entry(record: &CreatureRecord) -> RosterEntry {
    RosterEntry::new(record.name(), record.name())
}

fn started(limit: u32) -> AwaitingGuess {
    let limit = NonZeroU32::new(limit).expect("non-zero limit");
    SessionLoading::new(limit).ready(creature("psyduck", &["water"], 8))
}

fn guess_once(session: AwaitingGuess, guess: &CreatureRecord) -> GuessTransition {
    let (_, transition) = session.begin_guess(entry(guess)).resolve(guess);
    transition
}

#[test]
fn test_lifecycle_victory() {
    let session = started(10);
    assert_eq!(session.attempt_count(), 0);

    let wrong = creature("golduck", &["water"], 17);
    let session = match guess_once(session, &wrong) {
        GuessTransition::AwaitingGuess(s) => s,
        GuessTransition::Terminated(_) => panic!("Wrong guess shouldn't end the game"),
    };
    assert_eq!(session.attempt_count(), 1);
    assert_eq!(session.attempts_remaining(), 9);

    let right = creature("PSYDUCK", &["water"], 8);
    let evaluating = session.begin_guess(entry(&right));
    assert_eq!(evaluating.attempt_count(), 2);
    let (verdict, transition) = evaluating.resolve(&right);
    assert!(verdict.all_correct());

    match transition {
        GuessTransition::Terminated(done) => {
            assert_eq!(done.outcome(), Outcome::Victory);
            assert_eq!(done.attempt_count(), 2);
            assert_eq!(done.secret().name(), "psyduck");
        }
        GuessTransition::AwaitingGuess(_) => panic!("Correct guess should end the game"),
    }
}

#[test]
fn test_exhaustion_after_limit() {
    let wrong = creature("golduck", &["water"], 17);
    let mut session = started(10);

    for attempt in 1..=10 {
        match guess_once(session, &wrong) {
            GuessTransition::AwaitingGuess(s) => {
                assert!(attempt < 10, "Session should end on attempt 10");
                session = s;
            }
            GuessTransition::Terminated(done) => {
                assert_eq!(attempt, 10);
                assert_eq!(done.outcome(), Outcome::Exhausted);

                // An eleventh submission is rejected without touching the count.
                let any: AnySession = done.into();
                let any = any.into_awaiting().expect_err("Terminated rejects guesses");
                assert_eq!(any.phase(), SessionPhase::Terminated);
                assert_eq!(any.attempt_count(), 10);
                return;
            }
        }
    }
    panic!("Session never terminated");
}

#[test]
fn test_victory_on_last_attempt_is_victory() {
    let wrong = creature("golduck", &["water"], 17);
    let right = creature("psyduck", &["water"], 8);
    let session = match guess_once(started(2), &wrong) {
        GuessTransition::AwaitingGuess(s) => s,
        GuessTransition::Terminated(_) => panic!("One of two attempts used"),
    };
    match guess_once(session, &right) {
        GuessTransition::Terminated(done) => assert_eq!(done.outcome(), Outcome::Victory),
        GuessTransition::AwaitingGuess(_) => panic!("Should have terminated"),
    }
}

#[test]
fn test_fetch_failure_keeps_attempt_charged() {
    let wrong = creature("golduck", &["water"], 17);
    let session = started(3).begin_guess(entry(&wrong)).fetch_failed();
    assert_eq!(session.attempt_count(), 1);
    assert_eq!(AnySession::from(session).phase(), SessionPhase::AwaitingGuess);
}

#[test]
fn test_fetch_failure_on_final_attempt_still_ends_next_guess() {
    let wrong = creature("golduck", &["water"], 17);
    let session = started(1).begin_guess(entry(&wrong)).fetch_failed();
    assert_eq!(session.attempts_remaining(), 0);

    match guess_once(session, &wrong) {
        GuessTransition::Terminated(done) => {
            assert_eq!(done.outcome(), Outcome::Exhausted);
            assert_eq!(done.attempt_count(), 2);
        }
        GuessTransition::AwaitingGuess(_) => panic!("Exhausted session must terminate"),
    }
}

#[test]
fn test_verdict_reported_with_transition() {
    let guess = creature("horsea", &["water"], 4);
    let (verdict, _) = started(10).begin_guess(entry(&guess)).resolve(&guess);
    assert_eq!(verdict.name, Verdict::Incorrect);
    assert_eq!(verdict.type1, Verdict::Correct);
    assert_eq!(verdict.type2, Verdict::Correct);
    assert_eq!(verdict.height, Verdict::Lower);
}

#[test]
fn test_snapshot_reveals_secret_only_when_terminated() {
    let session = started(1);
    let snapshot = AnySession::from(session.clone()).snapshot();
    assert!(snapshot.accepts_guesses());
    assert!(snapshot.revealed.is_none());
    assert_eq!(snapshot.attempts_remaining, 1);

    let wrong = creature("golduck", &["water"], 17);
    let any = AnySession::from(guess_once(session, &wrong));
    let snapshot = any.snapshot();
    assert_eq!(snapshot.phase, SessionPhase::Terminated);
    assert_eq!(snapshot.outcome, Some(Outcome::Exhausted));
    assert_eq!(
        snapshot.revealed.as_ref().map(|r| r.name()),
        Some("psyduck")
    );
    assert!(any.status_string().contains("psyduck"));
}

#[test]
fn test_reset_keeps_limit() {
    let right = creature("psyduck", &["water"], 8);
    let done = match guess_once(started(4), &right) {
        GuessTransition::Terminated(done) => done,
        GuessTransition::AwaitingGuess(_) => panic!("Correct guess should end the game"),
    };
    let loading = done.reset();
    assert_eq!(loading.attempt_limit().get(), 4);
    let any = AnySession::from(loading);
    assert_eq!(any.phase(), SessionPhase::Loading);
    assert_eq!(any.attempt_count(), 0);
}

#[test]
fn test_session_round_trips_through_json() {
    let wrong = creature("golduck", &["water"], 17);
    let any = AnySession::from(started(5).begin_guess(entry(&wrong)));
    let json = serde_json::to_string(&any).expect("serialize");
    assert!(json.contains("\"phase\":\"evaluating\""));
    let back: AnySession = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, any);
}
