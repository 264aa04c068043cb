//! Verdict vocabulary produced by the attribute comparator.

use serde::{Deserialize, Serialize};

/// Feedback tag for one attribute of a guess.
///
/// `Higher` and `Lower` describe the guess relative to the secret.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Verdict {
    /// Exact match.
    Correct,
    /// No match.
    Incorrect,
    /// Type label present in the secret, but in the other slot.
    Partial,
    /// Guess value is above the secret's.
    Higher,
    /// Guess value is below the secret's.
    Lower,
}

impl Verdict {
    /// Returns true for [`Verdict::Correct`].
    pub fn is_correct(self) -> bool {
        matches!(self, Verdict::Correct)
    }

    /// Arrow pointing from the guess toward the secret.
    pub fn arrow(self) -> Option<char> {
        match self {
            Verdict::Higher => Some('↓'),
            Verdict::Lower => Some('↑'),
            _ => None,
        }
    }
}

/// The six compared attributes, in display order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Attribute {
    /// Creature name.
    Name,
    /// Classification generation.
    Generation,
    /// First type slot.
    #[strum(serialize = "type1")]
    #[serde(rename = "type1")]
    Type1,
    /// Second type slot.
    #[strum(serialize = "type2")]
    #[serde(rename = "type2")]
    Type2,
    /// Height.
    Height,
    /// Weight.
    Weight,
}

/// One verdict per attribute for a single guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerdictSet {
    /// Name verdict.
    pub name: Verdict,
    /// Generation verdict.
    pub generation: Verdict,
    /// First type slot verdict.
    pub type1: Verdict,
    /// Second type slot verdict.
    pub type2: Verdict,
    /// Height verdict.
    pub height: Verdict,
    /// Weight verdict.
    pub weight: Verdict,
}

impl VerdictSet {
    /// Verdict for one attribute.
    pub fn get(&self, attribute: Attribute) -> Verdict {
        match attribute {
            Attribute::Name => self.name,
            Attribute::Generation => self.generation,
            Attribute::Type1 => self.type1,
            Attribute::Type2 => self.type2,
            Attribute::Height => self.height,
            Attribute::Weight => self.weight,
        }
    }

    /// All six `(attribute, verdict)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, Verdict)> + '_ {
        use strum::IntoEnumIterator;
        Attribute::iter().map(move |attribute| (attribute, self.get(attribute)))
    }

    /// The guess named the secret.
    pub fn is_victory(&self) -> bool {
        self.name.is_correct()
    }

    /// Every attribute matched.
    pub fn all_correct(&self) -> bool {
        self.iter().all(|(_, verdict)| verdict.is_correct())
    }
}

impl std::fmt::Display for VerdictSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(attribute, verdict)| format!("{}={}", attribute, verdict))
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}
