//! Monster variants.
//!
//! Monsters are a closed polymorphic set discriminated by the persisted
//! `Type` field. Each variant fixes its own damage output; none of it is
//! random, so battle outcomes are reproducible. Monsters are ephemeral per
//! encounter -- combat never writes health changes back to the bestiary.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A goblin. Deals a fixed 5 damage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Goblin {
    pub name: String,
    pub level: i32,
    pub health: i32,
    #[serde(default)]
    pub treasure: Option<String>,
}

/// A dragon. Deals damage derived from its fire power.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Dragon {
    pub name: String,
    pub level: i32,
    pub health: i32,
    pub fire_power: i32,
    #[serde(default)]
    pub element: String,
}

/// A troll. Deals a fixed 12 damage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Troll {
    pub name: String,
    pub level: i32,
    pub health: i32,
    #[serde(default)]
    pub treasure: Option<String>,
}

/// The closed set of monster variants, tagged by the persisted `Type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "Type")]
pub enum Monster {
    Goblin(Goblin),
    Dragon(Dragon),
    Troll(Troll),
}

impl Monster {
    pub fn name(&self) -> &str {
        match self {
            Monster::Goblin(m) => &m.name,
            Monster::Dragon(m) => &m.name,
            Monster::Troll(m) => &m.name,
        }
    }

    pub fn level(&self) -> i32 {
        match self {
            Monster::Goblin(m) => m.level,
            Monster::Dragon(m) => m.level,
            Monster::Troll(m) => m.level,
        }
    }

    pub fn health(&self) -> i32 {
        match self {
            Monster::Goblin(m) => m.health,
            Monster::Dragon(m) => m.health,
            Monster::Troll(m) => m.health,
        }
    }

    /// The discriminator label this variant persists under.
    pub fn kind(&self) -> &'static str {
        match self {
            Monster::Goblin(_) => "Goblin",
            Monster::Dragon(_) => "Dragon",
            Monster::Troll(_) => "Troll",
        }
    }

    /// Damage dealt per attack. Fixed per variant: goblins hit for 5,
    /// trolls for 12, dragons for twice their fire power.
    pub fn deal_damage(&self) -> i32 {
        match self {
            Monster::Goblin(_) => 5,
            Monster::Dragon(m) => m.fire_power * 2,
            Monster::Troll(_) => 12,
        }
    }

    /// Reduce health by `amount`, clamped at a floor of 0.
    pub fn take_damage(&mut self, amount: i32) {
        let health = match self {
            Monster::Goblin(m) => &mut m.health,
            Monster::Dragon(m) => &mut m.health,
            Monster::Troll(m) => &mut m.health,
        };
        *health = (*health - amount).max(0);
    }
}

impl Display for Monster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, Level {}, Health {})",
            self.name(),
            self.kind(),
            self.level(),
            self.health()
        )
    }
}
