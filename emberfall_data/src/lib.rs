//! Shared entity model for Emberfall.

pub mod attributes;
pub mod item;
pub mod monster;
pub mod player;

pub use attributes::{AbilityScores, Attribute};
pub use item::Item;
pub use monster::{Dragon, Goblin, Monster, Troll};
pub use player::{Player, PlayerRecord};
