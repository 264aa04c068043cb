//! Tests for the attribute comparator.

use dexdle_core::{Attribute, CreatureRecord, Generation, TypeSlots, Verdict, compare};

fn creature(name: &str, generation: &str, types: &[&str], height: u32, weight: u32) -> CreatureRecord {
    CreatureRecord::new(
        name,
        Generation::from_label(generation),
        TypeSlots::from_labels(types).expect("valid type slots"),
        height,
        weight,
    )
    .expect("valid record")
}

fn sample() -> Vec<CreatureRecord> {
    vec![
        creature("bulbasaur", "generation-i", &["grass", "poison"], 7, 69),
        creature("charizard", "generation-i", &["fire", "flying"], 17, 905),
        creature("wingull", "generation-iii", &["water", "flying"], 6, 95),
        creature("torchic", "generation-iii", &["fire"], 4, 25),
        creature("pidgey", "generation-i", &["normal", "flying"], 3, 18),
        creature("togepi", "generation-ii", &["fairy"], 3, 15),
        creature("porygon-z", "generation-vii", &["normal"], 9, 340),
    ]
}

#[test]
fn test_self_comparison_is_correct_everywhere() {
    for record in sample() {
        let verdict = compare(&record, &record);
        for (attribute, value) in verdict.iter() {
            if attribute == Attribute::Generation && record.generation().is_unknown() {
                // Unknown generation never matches, not even itself.
                assert_eq!(value, Verdict::Incorrect);
            } else {
                assert_eq!(value, Verdict::Correct, "{} on {}", attribute, record.name());
            }
        }
    }
}

#[test]
fn test_same_name_implies_type1_correct() {
    for record in sample() {
        let renamed = creature(
            &record.name().to_uppercase(),
            &record.generation().to_string(),
            &record.types().labels(),
            record.height(),
            record.weight(),
        );
        let verdict = compare(&renamed, &record);
        assert_eq!(verdict.name, Verdict::Correct);
        assert_eq!(verdict.type1, Verdict::Correct);
    }
}

#[test]
fn test_height_and_weight_are_always_directional() {
    let records = sample();
    for guess in &records {
        for secret in &records {
            let verdict = compare(guess, secret);
            for value in [verdict.height, verdict.weight] {
                assert!(matches!(
                    value,
                    Verdict::Correct | Verdict::Higher | Verdict::Lower
                ));
            }
        }
    }
}

#[test]
fn test_unknown_generation_forces_incorrect() {
    let records = sample();
    let unknown = records
        .iter()
        .find(|r| r.generation().is_unknown())
        .expect("fixture has an unknown generation");
    for other in &records {
        assert_eq!(compare(unknown, other).generation, Verdict::Incorrect);
        assert_eq!(compare(other, unknown).generation, Verdict::Incorrect);
    }
}

#[test]
fn test_type_comparison_is_not_commutative() {
    let ponyta = creature("ponyta", "generation-i", &["fire"], 10, 300);
    let volcanion = creature("volcanion", "generation-vi", &["fire", "water"], 17, 1950);
    let steamy = creature("steamy", "generation-vi", &["water", "fire"], 17, 1950);

    let forward = compare(&ponyta, &steamy);
    assert_eq!(forward.type1, Verdict::Partial);
    assert_eq!(forward.type2, Verdict::Incorrect);

    let backward = compare(&steamy, &ponyta);
    assert_eq!(backward.type1, Verdict::Incorrect);
    assert_eq!(backward.type2, Verdict::Partial);
    assert_ne!(forward, backward);

    let same_slots = compare(&ponyta, &volcanion);
    assert_eq!(same_slots.type1, Verdict::Correct);
    assert_eq!(same_slots.type2, Verdict::Incorrect);
}

#[test]
fn test_generation_lower_example() {
    let guess = creature("pidgey", "generation-i", &["normal", "flying"], 3, 18);
    let secret = creature("torchic", "generation-iii", &["fire"], 4, 25);
    let verdict = compare(&guess, &secret);
    assert_eq!(verdict.generation, Verdict::Lower);
    assert_eq!(verdict.height, Verdict::Lower);
    assert_eq!(verdict.weight, Verdict::Lower);
}

#[test]
fn test_single_type_guess_against_dual_secret() {
    let secret = creature("wingull", "generation-iii", &["water", "flying"], 6, 95);
    let guess = creature("tornadus", "generation-v", &["flying"], 15, 630);
    let verdict = compare(&guess, &secret);
    assert_eq!(verdict.type1, Verdict::Partial);
    assert_eq!(verdict.type2, Verdict::Incorrect);
    assert_eq!(verdict.generation, Verdict::Higher);
}

#[test]
fn test_dual_type_guess_against_single_secret() {
    let secret = creature("torchic", "generation-iii", &["fire"], 4, 25);
    let guess = creature("charizard", "generation-i", &["fire", "flying"], 17, 905);
    let verdict = compare(&guess, &secret);
    assert_eq!(verdict.type1, Verdict::Correct);
    assert_eq!(verdict.type2, Verdict::Incorrect);
    assert_eq!(verdict.name, Verdict::Incorrect);
    assert!(!verdict.is_victory());
}

#[test]
fn test_swapped_slots_are_partial() {
    let secret = creature("bulbasaur", "generation-i", &["grass", "poison"], 7, 69);
    let guess = creature("mirror", "generation-i", &["poison", "grass"], 7, 69);
    let verdict = compare(&guess, &secret);
    assert_eq!(verdict.type1, Verdict::Partial);
    assert_eq!(verdict.type2, Verdict::Partial);
    assert_eq!(verdict.generation, Verdict::Correct);
    assert_eq!(verdict.height, Verdict::Correct);
}
