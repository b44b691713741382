//! Player characters and their flat wire records.
//!
//! A runtime [`Player`] holds shared references into the master item table.
//! On disk it is stored as a [`PlayerRecord`], where the inventory is a list
//! of bare item names -- a back-reference, not an ownership edge -- so the
//! master item data is never duplicated into player rows.

use crate::attributes::{AbilityScores, Attribute};
use crate::item::Item;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A player character.
#[derive(Debug, Clone, Default)]
pub struct Player {
    pub name: String,
    pub profession: String,
    /// Character level, >= 1 in any consistent roster.
    pub level: i32,
    pub scores: AbilityScores,
    /// Shared, read-only references into the master item table.
    pub items: Vec<Arc<Item>>,
}

impl Player {
    pub fn new(name: &str, profession: &str, level: i32, scores: AbilityScores) -> Player {
        Player {
            name: name.to_string(),
            profession: profession.to_string(),
            level,
            scores,
            items: Vec::new(),
        }
    }

    /// Sum of `Attack` modifiers from currently equipped items.
    pub fn attack_bonus(&self) -> i32 {
        self.equipped_modifier_total(Attribute::Attack)
    }

    /// Sum of `Defense` modifiers from currently equipped items.
    pub fn defense_bonus(&self) -> i32 {
        self.equipped_modifier_total(Attribute::Defense)
    }

    /// Total attack used in combat: base attack, plus level, plus any
    /// equipped-item bonuses.
    pub fn total_attack(&self) -> i32 {
        self.scores.get(Attribute::Attack) + self.level + self.attack_bonus()
    }

    /// Total defense used in combat: base defense plus equipped-item bonuses.
    pub fn total_defense(&self) -> i32 {
        self.scores.get(Attribute::Defense) + self.defense_bonus()
    }

    fn equipped_modifier_total(&self, attr: Attribute) -> i32 {
        self.items
            .iter()
            .filter(|item| item.is_equipped)
            .map(|item| item.attribute_modifiers.get(attr))
            .sum()
    }
}

/// Flat persisted form of a [`Player`]: inventory reduced to item names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerRecord {
    pub name: String,
    #[serde(default)]
    pub profession: String,
    pub level: i32,
    #[serde(default)]
    pub ability_scores: AbilityScores,
    #[serde(default)]
    pub items: Vec<String>,
}

impl From<&Player> for PlayerRecord {
    fn from(player: &Player) -> PlayerRecord {
        PlayerRecord {
            name: player.name.clone(),
            profession: player.profession.clone(),
            level: player.level,
            ability_scores: player.scores.clone(),
            items: player.items.iter().map(|item| item.name.clone()).collect(),
        }
    }
}
