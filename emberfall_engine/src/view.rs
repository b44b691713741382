//! View module.
//!
//! Engine code never prints mid-computation. Handlers push [`ViewItem`]s
//! describing what happened, and [`View::flush`] renders and clears the
//! buffer once per menu pass. This keeps combat and progression logic free
//! of console side effects and makes their outputs directly testable.

use crate::style::GameStyle;
use emberfall_data::{AbilityScores, Attribute, Item, Monster, Player};
use std::sync::Arc;

/// Display summary of one roster member.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerCard {
    pub name: String,
    pub profession: String,
    pub level: i32,
    pub scores: AbilityScores,
    pub item_names: Vec<String>,
}

impl From<&Player> for PlayerCard {
    fn from(player: &Player) -> PlayerCard {
        PlayerCard {
            name: player.name.clone(),
            profession: player.profession.clone(),
            level: player.level,
            scores: player.scores.clone(),
            item_names: player.items.iter().map(|item| item.name.clone()).collect(),
        }
    }
}

/// Display summary of one bestiary entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonsterCard {
    pub name: String,
    pub kind: &'static str,
    pub level: i32,
    pub health: i32,
}

impl From<&Monster> for MonsterCard {
    fn from(monster: &Monster) -> MonsterCard {
        MonsterCard {
            name: monster.name().to_string(),
            kind: monster.kind(),
            level: monster.level(),
            health: monster.health(),
        }
    }
}

/// Everything a menu pass can ask the view to display.
#[derive(Debug, Clone)]
pub enum ViewItem {
    Message(String),
    Error(String),
    BattleEvents(Vec<String>),
    PlayerRoster(Vec<PlayerCard>),
    MonsterList(Vec<MonsterCard>),
    ItemList { owner: String, items: Vec<Arc<Item>> },
}

/// Buffer of view items collected during one pass through the menu loop.
#[derive(Debug, Clone, Default)]
pub struct View {
    items: Vec<ViewItem>,
}

impl View {
    pub fn new() -> View {
        View::default()
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Render and clear everything collected this pass.
    pub fn flush(&mut self) {
        for item in self.items.drain(..) {
            match item {
                ViewItem::Message(msg) => println!("{}", msg.message_style()),
                ViewItem::Error(msg) => println!("{}", msg.error_style()),
                ViewItem::BattleEvents(events) => render_battle(&events),
                ViewItem::PlayerRoster(cards) => render_roster(&cards),
                ViewItem::MonsterList(cards) => render_monsters(&cards),
                ViewItem::ItemList { owner, items } => render_items(&owner, &items),
            }
        }
    }
}

fn render_battle(events: &[String]) {
    for event in events {
        if event.ends_with("is defeated!") {
            println!("{}", event.defeat_style());
        } else {
            println!("{}", event.battle_style());
        }
    }
}

fn render_roster(cards: &[PlayerCard]) {
    if cards.is_empty() {
        println!("{}", "No players found.".message_style());
        return;
    }
    println!("\n{}", "=== All Players ===".heading_style());
    for (i, card) in cards.iter().enumerate() {
        let items = if card.item_names.is_empty() {
            "None".to_string()
        } else {
            card.item_names.join(", ")
        };
        println!(
            "{}. {} | {} | Level: {} | HP: {} | Gold: {}",
            i + 1,
            card.name.player_style(),
            card.profession,
            card.level,
            card.scores.get(Attribute::HitPoints),
            card.scores.get(Attribute::Gold),
        );
        println!(
            "    Health: {} | Items: {}",
            card.scores.get(Attribute::Health),
            items.item_style(),
        );
        println!(
            "    Scores: Str:{} Dex:{} Int:{} Wis:{} Cha:{} Con:{} Atk:{} Def:{}",
            card.scores.get(Attribute::Strength),
            card.scores.get(Attribute::Dexterity),
            card.scores.get(Attribute::Intelligence),
            card.scores.get(Attribute::Wisdom),
            card.scores.get(Attribute::Charisma),
            card.scores.get(Attribute::Constitution),
            card.scores.get(Attribute::Attack),
            card.scores.get(Attribute::Defense),
        );
    }
}

fn render_monsters(cards: &[MonsterCard]) {
    if cards.is_empty() {
        println!("{}", "No monsters found.".message_style());
        return;
    }
    println!("\n{}", "=== Available Monsters ===".heading_style());
    for (i, card) in cards.iter().enumerate() {
        println!(
            "{}. {} | {} | Level: {} | HP: {}",
            i + 1,
            card.name.monster_style(),
            card.kind,
            card.level,
            card.health,
        );
    }
}

fn render_items(owner: &str, items: &[Arc<Item>]) {
    if items.is_empty() {
        println!("{}", format!("{owner} has no items.").message_style());
        return;
    }
    println!("\n{}", format!("=== {owner}'s Items ===").heading_style());
    for item in items {
        println!("- {} ({})", item.name.item_style(), item.kind);
        if !item.description.is_empty() {
            println!("  Description: {}", item.description);
        }
        println!("  Equipped: {}", if item.is_equipped { "Yes" } else { "No" });
        if item.attribute_modifiers.is_empty() {
            println!("  Modifiers: None");
        } else {
            println!("  Modifiers:");
            for (attr, value) in item.attribute_modifiers.iter() {
                println!("    {attr}: {value}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emberfall_data::Goblin;

    #[test]
    fn player_card_captures_roster_fields() {
        let mut player = Player::new(
            "Brann",
            "Fighter",
            3,
            AbilityScores::new().with(Attribute::HitPoints, 15),
        );
        player.items.push(Arc::new(Item {
            name: "Sword".into(),
            kind: "Weapon".into(),
            ..Item::default()
        }));

        let card = PlayerCard::from(&player);
        assert_eq!(card.name, "Brann");
        assert_eq!(card.level, 3);
        assert_eq!(card.item_names, vec!["Sword".to_string()]);
    }

    #[test]
    fn monster_card_carries_the_kind_label() {
        let monster = Monster::Goblin(Goblin {
            name: "Snag".into(),
            level: 1,
            health: 10,
            treasure: None,
        });
        let card = MonsterCard::from(&monster);
        assert_eq!(card.kind, "Goblin");
        assert_eq!(card.health, 10);
    }

    #[test]
    fn flush_clears_the_buffer() {
        let mut view = View::new();
        view.push(ViewItem::Message("hello".into()));
        assert!(!view.is_empty());
        view.flush();
        assert!(view.is_empty());
    }
}
