//! Immutable roster index: name resolution, prefix suggestions, secret selection.

use crate::creature::RosterEntry;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};

/// The candidate list for one session, sorted by name with unique names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    /// Builds a roster, sorting alphabetically and dropping repeated names.
    #[instrument(skip(entries), fields(count = entries.len()))]
    pub fn new(mut entries: Vec<RosterEntry>) -> Self {
        entries.sort_by(|a, b| a.name().cmp(b.name()));

        let mut seen = HashSet::new();
        entries.retain(|entry| {
            let fresh = seen.insert(entry.name().to_string());
            if !fresh {
                warn!(name = entry.name(), "Dropping duplicate roster entry");
            }
            fresh
        });

        info!(count = entries.len(), "Roster loaded");
        Self { entries }
    }

    /// Entries in alphabetical order.
    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the roster has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds the entry whose name equals the trimmed, lowercased input.
    #[instrument(skip(self))]
    pub fn resolve(&self, name: &str) -> Option<&RosterEntry> {
        let wanted = name.trim().to_lowercase();
        let found = self
            .entries
            .binary_search_by(|entry| entry.name().cmp(wanted.as_str()))
            .ok()
            .map(|idx| &self.entries[idx]);
        debug!(wanted = %wanted, found = found.is_some(), "Resolved guess name");
        found
    }

    /// Up to `limit` entries whose names start with `prefix`, case-insensitively.
    pub fn suggestions(&self, prefix: &str, limit: usize) -> Vec<&RosterEntry> {
        let prefix = prefix.trim().to_lowercase();
        if prefix.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|entry| entry.name().starts_with(prefix.as_str()))
            .take(limit)
            .collect()
    }

    /// Picks one entry uniformly at random.
    #[instrument(skip_all, fields(count = self.entries.len()))]
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&RosterEntry> {
        self.entries.choose(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn roster() -> Roster {
        Roster::new(vec![
            RosterEntry::new("pikachu", "ref/25"),
            RosterEntry::new("Bulbasaur", "ref/1"),
            RosterEntry::new("pidgey", "ref/16"),
            RosterEntry::new("pidgeotto", "ref/17"),
            RosterEntry::new("pichu", "ref/172"),
            RosterEntry::new("pineco", "ref/204"),
            RosterEntry::new("piloswine", "ref/221"),
        ])
    }

    #[test]
    fn test_entries_sorted_by_name() {
        let roster = roster();
        let names: Vec<&str> = roster.entries().iter().map(|e| e.name()).collect();
        assert_eq!(
            names,
            [
                "bulbasaur",
                "pichu",
                "pidgeotto",
                "pidgey",
                "pikachu",
                "piloswine",
                "pineco"
            ]
        );
    }

    #[test]
    fn test_duplicates_dropped() {
        let roster = Roster::new(vec![
            RosterEntry::new("eevee", "ref/133"),
            RosterEntry::new("EEVEE", "ref/9999"),
        ]);
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_resolve_is_case_insensitive_and_trimmed() {
        let roster = roster();
        assert_eq!(roster.resolve("  PikaChu ").map(|e| e.id()), Some(Some(25)));
        assert!(roster.resolve("pika").is_none());
    }

    #[test]
    fn test_suggestions_limited_prefix_matches() {
        let roster = roster();
        let names: Vec<&str> = roster
            .suggestions("Pi", 5)
            .into_iter()
            .map(|e| e.name())
            .collect();
        assert_eq!(names, ["pichu", "pidgeotto", "pidgey", "pikachu", "piloswine"]);
        assert!(roster.suggestions("   ", 5).is_empty());
        assert!(roster.suggestions("zz", 5).is_empty());
    }

    #[test]
    fn test_choose_on_empty_roster() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(Roster::default().choose(&mut rng).is_none());
        assert!(roster().choose(&mut rng).is_some());
    }
}
