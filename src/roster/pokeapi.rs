//! Roster provider backed by the public PokeAPI REST service.

use super::{RosterError, RosterErrorKind, RosterProvider};
use async_trait::async_trait;
use dexdle_core::{CreatureRecord, Generation, RosterEntry, TypeSlots};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

/// HTTP roster provider.
#[derive(Debug, Clone)]
pub struct PokeApiRoster {
    base_url: String,
    roster_limit: u32,
    client: reqwest::Client,
}

impl PokeApiRoster {
    /// Creates a provider for `base_url` (e.g. `https://pokeapi.co/api/v2/`).
    #[instrument]
    pub fn new(base_url: &str, roster_limit: u32) -> Self {
        let base_url = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        Self {
            base_url,
            roster_limit,
            client: reqwest::Client::new(),
        }
    }

    /// Base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolves a reference to a full URL; bare names go under `pokemon/`.
    fn detail_url(&self, reference: &str) -> String {
        if reference.starts_with("http://") || reference.starts_with("https://") {
            reference.to_string()
        } else {
            format!("{}pokemon/{}", self.base_url, reference.trim().to_lowercase())
        }
    }

    #[instrument(skip(self))]
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, RosterError> {
        debug!("Sending GET");
        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(error = %e, "Request failed");
            RosterError::new(RosterErrorKind::Unreachable, format!("GET {} failed: {}", url, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Non-success status");
            let kind = if status.as_u16() == 404 {
                RosterErrorKind::NotFound
            } else {
                RosterErrorKind::Status(status.as_u16())
            };
            return Err(RosterError::new(kind, format!("GET {} returned {}", url, status)));
        }

        let body = response.text().await?;
        decode(&body)
    }
}

#[async_trait]
impl RosterProvider for PokeApiRoster {
    #[instrument(skip(self), fields(limit = self.roster_limit))]
    async fn list_roster(&self) -> Result<Vec<RosterEntry>, RosterError> {
        let url = format!("{}pokemon?limit={}", self.base_url, self.roster_limit);
        let listing: ListPayload = self.get_json(&url).await?;
        let entries = listing.into_entries();
        info!(count = entries.len(), "Fetched roster listing");
        Ok(entries)
    }

    #[instrument(skip(self))]
    async fn fetch_detail(&self, reference: &str) -> Result<CreatureRecord, RosterError> {
        let creature: CreaturePayload = self.get_json(&self.detail_url(reference)).await?;
        let species: SpeciesPayload = self.get_json(&creature.species.url).await?;
        let record = creature.into_record(species)?;
        debug!(name = record.name(), generation = %record.generation(), "Fetched creature detail");
        Ok(record)
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, RosterError> {
    serde_json::from_str(body).map_err(|e| {
        RosterError::new(
            RosterErrorKind::Malformed,
            format!("Unexpected response body: {}", e),
        )
    })
}

// ─────────────────────────────────────────────────────────────
//  Wire payloads
// ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
    url: String,
}

#[derive(Debug, Deserialize)]
struct ListPayload {
    results: Vec<NamedResource>,
}

impl ListPayload {
    fn into_entries(self) -> Vec<RosterEntry> {
        self.results
            .iter()
            .map(|item| RosterEntry::new(&item.name, &item.url))
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct TypeSlotPayload {
    slot: u8,
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Debug, Default, Deserialize)]
struct SpritesPayload {
    front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CreaturePayload {
    name: String,
    height: u32,
    weight: u32,
    types: Vec<TypeSlotPayload>,
    #[serde(default)]
    sprites: SpritesPayload,
    species: NamedResource,
}

#[derive(Debug, Deserialize)]
struct SpeciesPayload {
    generation: Option<NamedResource>,
}

impl CreaturePayload {
    fn into_record(mut self, species: SpeciesPayload) -> Result<CreatureRecord, RosterError> {
        self.types.sort_by_key(|t| t.slot);
        let labels: Vec<&str> = self.types.iter().map(|t| t.kind.name.as_str()).collect();
        let types = TypeSlots::from_labels(&labels).map_err(|e| {
            RosterError::new(RosterErrorKind::Malformed, format!("{}: {}", self.name, e))
        })?;

        let generation = species
            .generation
            .map(|g| Generation::from_label(&g.name))
            .unwrap_or_default();

        CreatureRecord::new(&self.name, generation, types, self.height, self.weight)
            .map(|record| record.with_sprite(self.sprites.front_default))
            .map_err(|e| RosterError::new(RosterErrorKind::Malformed, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"{
        "count": 1302,
        "next": "https://pokeapi.co/api/v2/pokemon?offset=3&limit=3",
        "previous": null,
        "results": [
            {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
            {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"},
            {"name": "venusaur", "url": "https://pokeapi.co/api/v2/pokemon/3/"}
        ]
    }"#;

    const BULBASAUR: &str = r#"{
        "id": 1,
        "name": "bulbasaur",
        "height": 7,
        "weight": 69,
        "types": [
            {"slot": 2, "type": {"name": "poison", "url": "https://pokeapi.co/api/v2/type/4/"}},
            {"slot": 1, "type": {"name": "grass", "url": "https://pokeapi.co/api/v2/type/12/"}}
        ],
        "sprites": {"front_default": "https://example.test/1.png", "back_default": null},
        "species": {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon-species/1/"}
    }"#;

    const SPECIES: &str = r#"{
        "name": "bulbasaur",
        "generation": {"name": "generation-i", "url": "https://pokeapi.co/api/v2/generation/1/"}
    }"#;

    #[test]
    fn test_listing_decodes_entries_with_ids() {
        let listing: ListPayload = decode(LISTING).expect("listing decodes");
        let entries = listing.into_entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].name(), "ivysaur");
        assert_eq!(entries[1].id(), Some(2));
    }

    #[test]
    fn test_detail_orders_types_by_slot() {
        let creature: CreaturePayload = decode(BULBASAUR).expect("creature decodes");
        let species: SpeciesPayload = decode(SPECIES).expect("species decodes");
        let record = creature.into_record(species).expect("valid record");

        assert_eq!(record.name(), "bulbasaur");
        assert_eq!(record.generation(), Generation::I);
        assert_eq!(record.types().primary(), "grass");
        assert_eq!(record.types().secondary(), Some("poison"));
        assert_eq!(record.height(), 7);
        assert_eq!(record.weight(), 69);
        assert_eq!(record.sprite(), Some("https://example.test/1.png"));
    }

    #[test]
    fn test_unlisted_generation_is_unknown() {
        let creature: CreaturePayload = decode(BULBASAUR).expect("creature decodes");
        let species: SpeciesPayload =
            decode(r#"{"generation": {"name": "generation-ix", "url": "x"}}"#).expect("decodes");
        let record = creature.into_record(species).expect("valid record");
        assert_eq!(record.generation(), Generation::Unknown);
    }

    #[test]
    fn test_missing_types_is_malformed() {
        let creature: CreaturePayload = decode(
            r#"{"name": "missingno", "height": 1, "weight": 1, "types": [],
                "species": {"name": "missingno", "url": "x"}}"#,
        )
        .expect("decodes");
        let err = creature
            .into_record(SpeciesPayload { generation: None })
            .expect_err("no types");
        assert_eq!(err.kind, RosterErrorKind::Malformed);
    }

    #[test]
    fn test_garbage_body_is_malformed() {
        let err = decode::<ListPayload>("<html>oops</html>").expect_err("not json");
        assert_eq!(err.kind, RosterErrorKind::Malformed);
    }

    #[test]
    fn test_detail_url_accepts_names() {
        let roster = PokeApiRoster::new("https://pokeapi.co/api/v2", 251);
        assert_eq!(roster.base_url(), "https://pokeapi.co/api/v2/");
        assert_eq!(
            roster.detail_url("Pikachu"),
            "https://pokeapi.co/api/v2/pokemon/pikachu"
        );
        assert_eq!(
            roster.detail_url("https://pokeapi.co/api/v2/pokemon/25/"),
            "https://pokeapi.co/api/v2/pokemon/25/"
        );
    }
}
