//! Tests for the static TOML roster provider.

use std::io::Write;

use dexdle::{Generation, RosterErrorKind, RosterProvider, StaticRoster};
use tempfile::NamedTempFile;

const ROSTER: &str = r#"
[[creature]]
id = 25
name = "Pikachu"
generation = "generation-i"
types = ["electric"]
height = 4
weight = 60
sprite = "https://example.test/25.png"

[[creature]]
id = 6
name = "charizard"
generation = "generation-i"
types = ["fire", "flying"]
height = 17
weight = 905

[[creature]]
name = "sprigatito"
generation = "generation-ix"
types = ["grass"]
height = 4
weight = 41
"#;

fn write_roster(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Failed to write roster");
    file
}

#[tokio::test]
async fn test_load_from_file() {
    let file = write_roster(ROSTER);
    let roster = StaticRoster::from_file(file.path()).expect("Roster loads");
    assert_eq!(roster.len(), 3);

    let entries = roster.list_roster().await.expect("Listing succeeds");
    let pikachu = entries
        .iter()
        .find(|e| e.name() == "pikachu")
        .expect("pikachu listed");
    assert_eq!(pikachu.id(), Some(25));
    assert_eq!(
        pikachu.sprite_url("https://sprites.test/").as_deref(),
        Some("https://sprites.test/25.png")
    );
}

#[tokio::test]
async fn test_fetch_by_reference_or_name() {
    let roster = StaticRoster::from_toml(ROSTER).expect("Roster parses");

    let by_id = roster.fetch_detail("6").await.expect("Found by id");
    assert_eq!(by_id.name(), "charizard");
    assert_eq!(by_id.types().secondary(), Some("flying"));

    let by_name = roster.fetch_detail("Pikachu").await.expect("Found by name");
    assert_eq!(by_name.sprite(), Some("https://example.test/25.png"));
}

#[tokio::test]
async fn test_unlisted_generation_is_unknown() {
    let roster = StaticRoster::from_toml(ROSTER).expect("Roster parses");
    let record = roster.fetch_detail("sprigatito").await.expect("Found");
    assert_eq!(record.generation(), Generation::Unknown);
}

#[tokio::test]
async fn test_missing_creature_is_not_found() {
    let roster = StaticRoster::from_toml(ROSTER).expect("Roster parses");
    let err = roster.fetch_detail("agumon").await.expect_err("Not present");
    assert_eq!(err.kind, RosterErrorKind::NotFound);
}

#[test]
fn test_three_types_is_malformed() {
    let content = r#"
[[creature]]
name = "chimera"
types = ["fire", "water", "grass"]
height = 1
weight = 1
"#;
    let err = StaticRoster::from_toml(content).expect_err("Too many types");
    assert_eq!(err.kind, RosterErrorKind::Malformed);
}

#[test]
fn test_missing_file_is_unreachable() {
    let err = StaticRoster::from_file("/definitely/not/here.toml").expect_err("No file");
    assert_eq!(err.kind, RosterErrorKind::Unreachable);
}

#[tokio::test]
async fn test_bundled_starters_load() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/starters.toml");
    let roster = StaticRoster::from_file(path).expect("Bundled roster loads");
    assert_eq!(roster.len(), 18);

    let torchic = roster.fetch_detail("255").await.expect("torchic by id");
    assert_eq!(torchic.generation(), Generation::III);
    assert_eq!(torchic.types().primary(), "fire");
}
