//! Attributes and ability scores.
//!
//! Every score a character or item modifier can carry is named by the closed
//! [`Attribute`] enum. [`AbilityScores`] maps those names to integer values
//! with a total accessor: an attribute that was never set reads as 0.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

/// Every attribute a player has or an item can modify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Attribute {
    Strength,
    Dexterity,
    Intelligence,
    Wisdom,
    Charisma,
    Constitution,
    Attack,
    Defense,
    Health,
    HitPoints,
    Gold,
}

impl Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Attribute::Strength => write!(f, "Strength"),
            Attribute::Dexterity => write!(f, "Dexterity"),
            Attribute::Intelligence => write!(f, "Intelligence"),
            Attribute::Wisdom => write!(f, "Wisdom"),
            Attribute::Charisma => write!(f, "Charisma"),
            Attribute::Constitution => write!(f, "Constitution"),
            Attribute::Attack => write!(f, "Attack"),
            Attribute::Defense => write!(f, "Defense"),
            Attribute::Health => write!(f, "Health"),
            Attribute::HitPoints => write!(f, "HitPoints"),
            Attribute::Gold => write!(f, "Gold"),
        }
    }
}

/// A set of attribute scores keyed by [`Attribute`].
///
/// Serializes as a flat JSON object (`{"Attack": 3, "Health": 20, ...}`),
/// which is also the wire form for item modifier sets. Reading an attribute
/// that was never set returns 0 rather than failing, so callers never need
/// to special-case sparse score sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbilityScores(BTreeMap<Attribute, i32>);

impl AbilityScores {
    /// Create an empty score set. All attributes read as 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read an attribute's value; unset attributes read as 0.
    pub fn get(&self, attr: Attribute) -> i32 {
        self.0.get(&attr).copied().unwrap_or(0)
    }

    /// Set an attribute's value.
    pub fn set(&mut self, attr: Attribute, value: i32) {
        self.0.insert(attr, value);
    }

    /// Add a (possibly negative) delta to an attribute.
    pub fn adjust(&mut self, attr: Attribute, delta: i32) {
        let current = self.get(attr);
        self.0.insert(attr, current + delta);
    }

    /// Builder-style setter for constructing score sets inline.
    #[must_use]
    pub fn with(mut self, attr: Attribute, value: i32) -> Self {
        self.set(attr, value);
        self
    }

    /// Iterate over the attributes that have been explicitly set.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        self.0.iter().map(|(attr, value)| (*attr, *value))
    }

    /// Returns true when no attribute has been set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_attribute_reads_as_zero() {
        let scores = AbilityScores::new();
        assert_eq!(scores.get(Attribute::Strength), 0);
        assert_eq!(scores.get(Attribute::Gold), 0);
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut scores = AbilityScores::new();
        scores.set(Attribute::Attack, 7);
        assert_eq!(scores.get(Attribute::Attack), 7);

        scores.set(Attribute::Attack, 3);
        assert_eq!(scores.get(Attribute::Attack), 3);
    }

    #[test]
    fn adjust_applies_delta_from_zero() {
        let mut scores = AbilityScores::new();
        scores.adjust(Attribute::HitPoints, 5);
        scores.adjust(Attribute::HitPoints, 5);
        assert_eq!(scores.get(Attribute::HitPoints), 10);

        scores.adjust(Attribute::HitPoints, -3);
        assert_eq!(scores.get(Attribute::HitPoints), 7);
    }

    #[test]
    fn serializes_as_flat_object_keyed_by_attribute_name() {
        let scores = AbilityScores::new()
            .with(Attribute::Attack, 3)
            .with(Attribute::Health, 20);
        let json = serde_json::to_value(&scores).unwrap();
        assert_eq!(json["Attack"], 3);
        assert_eq!(json["Health"], 20);

        let back: AbilityScores = serde_json::from_value(json).unwrap();
        assert_eq!(back, scores);
    }

    #[test]
    fn attribute_display_matches_wire_names() {
        assert_eq!(Attribute::HitPoints.to_string(), "HitPoints");
        assert_eq!(Attribute::Strength.to_string(), "Strength");
    }
}
