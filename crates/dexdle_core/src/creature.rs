//! Creature records and the lightweight roster entries that point at them.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{instrument, warn};

/// Classification generation of a creature.
///
/// A closed enumeration: six known generations plus [`Generation::Unknown`]
/// for any label outside the table (or a missing label). Unknown is rank 0
/// and never takes part in directional comparison.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
)]
#[serde(from = "String", into = "String")]
#[strum(ascii_case_insensitive)]
pub enum Generation {
    /// `generation-i`
    #[strum(serialize = "generation-i")]
    I,
    /// `generation-ii`
    #[strum(serialize = "generation-ii")]
    II,
    /// `generation-iii`
    #[strum(serialize = "generation-iii")]
    III,
    /// `generation-iv`
    #[strum(serialize = "generation-iv")]
    IV,
    /// `generation-v`
    #[strum(serialize = "generation-v")]
    V,
    /// `generation-vi`
    #[strum(serialize = "generation-vi")]
    VI,
    /// Label missing or not in the table.
    #[default]
    #[strum(serialize = "unknown")]
    Unknown,
}

impl Generation {
    /// Parses a source label, falling back to [`Generation::Unknown`].
    pub fn from_label(label: &str) -> Self {
        Self::from_str(label.trim()).unwrap_or(Self::Unknown)
    }

    /// Ordinal rank, 1 through 6 for known generations and 0 for unknown.
    pub fn rank(self) -> u8 {
        match self {
            Generation::I => 1,
            Generation::II => 2,
            Generation::III => 3,
            Generation::IV => 4,
            Generation::V => 5,
            Generation::VI => 6,
            Generation::Unknown => 0,
        }
    }

    /// Returns true for [`Generation::Unknown`].
    pub fn is_unknown(self) -> bool {
        matches!(self, Generation::Unknown)
    }

    /// Roman numeral shown in feedback rows.
    pub fn numeral(self) -> &'static str {
        match self {
            Generation::I => "I",
            Generation::II => "II",
            Generation::III => "III",
            Generation::IV => "IV",
            Generation::V => "V",
            Generation::VI => "VI",
            Generation::Unknown => "N/A",
        }
    }
}

impl From<String> for Generation {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<Generation> for String {
    fn from(generation: Generation) -> Self {
        generation.to_string()
    }
}

/// Error raised when a record cannot be built from its parts.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RecordError {
    /// A record must carry one or two type labels.
    #[display("Expected 1 or 2 type labels, got {}", _0)]
    InvalidTypeCount(usize),

    /// Names must be non-blank.
    #[display("Creature name is empty")]
    EmptyName,
}

impl std::error::Error for RecordError {}

fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}

/// The one or two ordered type slots of a creature.
///
/// Slot order matters: the first and second slot are compared separately.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct TypeSlots {
    primary: String,
    secondary: Option<String>,
}

impl TypeSlots {
    /// A creature with a single type.
    pub fn single(primary: &str) -> Self {
        Self {
            primary: normalize(primary),
            secondary: None,
        }
    }

    /// A creature with two types, in slot order.
    pub fn dual(primary: &str, secondary: &str) -> Self {
        Self {
            primary: normalize(primary),
            secondary: Some(normalize(secondary)),
        }
    }

    /// Builds slots from an ordered list of labels.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::InvalidTypeCount`] unless there are one or two labels.
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Result<Self, RecordError> {
        match labels {
            [primary] => Ok(Self::single(primary.as_ref())),
            [primary, secondary] => Ok(Self::dual(primary.as_ref(), secondary.as_ref())),
            other => Err(RecordError::InvalidTypeCount(other.len())),
        }
    }

    /// First type slot.
    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// Second type slot, if any.
    pub fn secondary(&self) -> Option<&str> {
        self.secondary.as_deref()
    }

    /// Slot labels in order.
    pub fn labels(&self) -> Vec<&str> {
        std::iter::once(self.primary.as_str())
            .chain(self.secondary.as_deref())
            .collect()
    }
}

impl TryFrom<Vec<String>> for TypeSlots {
    type Error = RecordError;

    fn try_from(labels: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_labels(&labels)
    }
}

impl From<TypeSlots> for Vec<String> {
    fn from(slots: TypeSlots) -> Self {
        std::iter::once(slots.primary).chain(slots.secondary).collect()
    }
}

/// Full detail record of one creature.
///
/// Height is in decimetres and weight in hectograms, the units of the
/// upstream data source. Records are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCreatureRecord")]
pub struct CreatureRecord {
    name: String,
    generation: Generation,
    types: TypeSlots,
    height: u32,
    weight: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sprite: Option<String>,
}

#[derive(Deserialize)]
struct RawCreatureRecord {
    name: String,
    #[serde(default)]
    generation: Generation,
    types: TypeSlots,
    height: u32,
    weight: u32,
    #[serde(default)]
    sprite: Option<String>,
}

impl TryFrom<RawCreatureRecord> for CreatureRecord {
    type Error = RecordError;

    fn try_from(raw: RawCreatureRecord) -> Result<Self, Self::Error> {
        CreatureRecord::new(&raw.name, raw.generation, raw.types, raw.height, raw.weight)
            .map(|record| record.with_sprite(raw.sprite))
    }
}

impl CreatureRecord {
    /// Creates a record; the name is trimmed and lowercased.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::EmptyName`] for a blank name.
    #[instrument(skip(types), fields(types = ?types.labels()))]
    pub fn new(
        name: &str,
        generation: Generation,
        types: TypeSlots,
        height: u32,
        weight: u32,
    ) -> Result<Self, RecordError> {
        let name = normalize(name);
        if name.is_empty() {
            return Err(RecordError::EmptyName);
        }
        Ok(Self {
            name,
            generation,
            types,
            height,
            weight,
            sprite: None,
        })
    }

    /// Attaches a display sprite handle.
    pub fn with_sprite(mut self, sprite: Option<String>) -> Self {
        self.sprite = sprite;
        self
    }

    /// Normalized name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Classification generation.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Ordered type slots.
    pub fn types(&self) -> &TypeSlots {
        &self.types
    }

    /// Height in decimetres.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Weight in hectograms.
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Sprite handle, opaque to comparison.
    pub fn sprite(&self) -> Option<&str> {
        self.sprite.as_deref()
    }

    /// Height formatted in metres, e.g. `"1.7 m"`.
    pub fn height_display(&self) -> String {
        format!("{:.1} m", f64::from(self.height) / 10.0)
    }

    /// Weight formatted in kilograms, e.g. `"90.5 kg"`.
    pub fn weight_display(&self) -> String {
        format!("{:.1} kg", f64::from(self.weight) / 10.0)
    }
}

/// Index entry used for lookup and suggestions before the full record is fetched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RosterEntry {
    name: String,
    reference: String,
    id: Option<u32>,
}

impl RosterEntry {
    /// Creates an entry; the numeric id is taken from the reference's last path segment.
    #[instrument(skip_all, fields(name = %name))]
    pub fn new(name: &str, reference: &str) -> Self {
        let id = reference
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .and_then(|segment| segment.parse().ok());
        if id.is_none() {
            warn!(reference, "No numeric id in roster reference");
        }
        Self {
            name: normalize(name),
            reference: reference.to_string(),
            id,
        }
    }

    /// Normalized name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Opaque handle passed back to the provider to fetch the full record.
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Numeric id, when the reference carried one.
    pub fn id(&self) -> Option<u32> {
        self.id
    }

    /// Sprite image URL under `base` (`<base><id>.png`), when the id is known.
    pub fn sprite_url(&self, base: &str) -> Option<String> {
        self.id.map(|id| format!("{}{}.png", base, id))
    }
}
