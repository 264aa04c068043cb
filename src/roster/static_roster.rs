//! In-memory roster for offline play, loadable from a TOML file.
//!
//! ```toml
//! [[creature]]
//! id = 25
//! name = "pikachu"
//! generation = "generation-i"
//! types = ["electric"]
//! height = 4
//! weight = 60
//! ```

use super::{RosterError, RosterErrorKind, RosterProvider};
use async_trait::async_trait;
use dexdle_core::{CreatureRecord, Generation, RosterEntry, TypeSlots};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, instrument};

#[derive(Debug, Deserialize)]
struct RosterFile {
    #[serde(default, rename = "creature")]
    creatures: Vec<StaticCreature>,
}

#[derive(Debug, Deserialize)]
struct StaticCreature {
    id: Option<u32>,
    name: String,
    #[serde(default)]
    generation: Generation,
    types: Vec<String>,
    height: u32,
    weight: u32,
    sprite: Option<String>,
}

/// Provider serving a fixed set of records.
#[derive(Debug, Clone, Default)]
pub struct StaticRoster {
    entries: Vec<RosterEntry>,
    records: HashMap<String, CreatureRecord>,
}

impl StaticRoster {
    /// Builds a roster from records; each record is referenced by its name.
    #[instrument(skip(records), fields(count = records.len()))]
    pub fn new(records: Vec<CreatureRecord>) -> Self {
        let mut roster = Self::default();
        for record in records {
            let reference = record.name().to_string();
            roster.insert(reference, record);
        }
        roster
    }

    /// Loads `[[creature]]` tables from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            RosterError::new(
                RosterErrorKind::Unreachable,
                format!("Failed to read roster file: {}", e),
            )
        })?;
        let roster = Self::from_toml(&content)?;
        info!(count = roster.entries.len(), "Static roster loaded");
        Ok(roster)
    }

    /// Parses `[[creature]]` tables from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, RosterError> {
        let file: RosterFile = toml::from_str(content).map_err(|e| {
            RosterError::new(
                RosterErrorKind::Malformed,
                format!("Failed to parse roster file: {}", e),
            )
        })?;

        let mut roster = Self::default();
        for creature in file.creatures {
            let types = TypeSlots::from_labels(&creature.types).map_err(|e| {
                RosterError::new(RosterErrorKind::Malformed, format!("{}: {}", creature.name, e))
            })?;
            let record = CreatureRecord::new(
                &creature.name,
                creature.generation,
                types,
                creature.height,
                creature.weight,
            )
            .map_err(|e| RosterError::new(RosterErrorKind::Malformed, e.to_string()))?
            .with_sprite(creature.sprite);

            let reference = creature
                .id
                .map(|id| id.to_string())
                .unwrap_or_else(|| record.name().to_string());
            roster.insert(reference, record);
        }
        Ok(roster)
    }

    fn insert(&mut self, reference: String, record: CreatureRecord) {
        self.entries.push(RosterEntry::new(record.name(), &reference));
        self.records.insert(reference, record);
    }

    /// Number of records served.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no records are served.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl RosterProvider for StaticRoster {
    #[instrument(skip(self))]
    async fn list_roster(&self) -> Result<Vec<RosterEntry>, RosterError> {
        Ok(self.entries.clone())
    }

    #[instrument(skip(self))]
    async fn fetch_detail(&self, reference: &str) -> Result<CreatureRecord, RosterError> {
        let wanted = reference.trim().to_lowercase();
        let found = self.records.get(reference).or_else(|| {
            self.records
                .values()
                .find(|record| record.name() == wanted.as_str())
        });
        match found {
            Some(record) => {
                debug!(name = record.name(), "Served static record");
                Ok(record.clone())
            }
            None => Err(RosterError::new(
                RosterErrorKind::NotFound,
                format!("No creature for reference {}", reference),
            )),
        }
    }
}
