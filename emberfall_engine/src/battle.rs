//! Deterministic turn-based battle resolution.
//!
//! A battle strictly alternates player and monster attacks until one side's
//! pool reaches zero. Nothing here rolls dice: given the same combatants the
//! same log comes out, which is what makes the event log the primary
//! observable contract for testing. The simulation runs on local copies of
//! both hit-point pools -- the stored player and monster records are never
//! mutated, so monsters are always fresh on the next encounter.

use anyhow::{Result, bail};
use emberfall_data::{Attribute, Monster, Player};

/// Battle progression states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleState {
    InProgress,
    PlayerWon,
    MonsterWon,
}

/// The ordered event log of a finished battle plus its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleResult {
    pub events: Vec<String>,
    pub player_won: bool,
}

/// Resolve a battle between `player` and `monster`.
///
/// Each completed exchange appends exactly two attack-result lines; the
/// terminal round also appends a defeat line. Damage on both sides has a
/// floor of 1, which guarantees termination no matter how lopsided the
/// defense values are.
///
/// # Errors
/// Rejects the battle before the first round if either combatant is already
/// at zero: a defeated combatant must never produce a zero-round result.
pub fn run_battle(player: &Player, monster: &Monster) -> Result<BattleResult> {
    let mut player_hp = player.scores.get(Attribute::HitPoints);
    let mut monster_hp = monster.health();
    if player_hp <= 0 {
        bail!("{} has no hit points left to fight", player.name);
    }
    if monster_hp <= 0 {
        bail!("{} is already defeated", monster.name());
    }

    let mut events = Vec::new();
    let mut state = BattleState::InProgress;

    // Monsters carry no equipment; their defense bonus stays 0 until the
    // bestiary grows item support.
    let monster_defense_bonus = 0;

    while state == BattleState::InProgress {
        let player_damage = (player.total_attack() - monster_defense_bonus).max(1);
        monster_hp = (monster_hp - player_damage).max(0);
        events.push(format!(
            "{} attacks {} for {} damage! Monster HP: {}",
            player.name,
            monster.name(),
            player_damage,
            monster_hp
        ));
        if monster_hp == 0 {
            events.push(format!("{} is defeated!", monster.name()));
            state = BattleState::PlayerWon;
            continue;
        }

        let monster_damage = (monster.deal_damage() - player.total_defense()).max(1);
        player_hp = (player_hp - monster_damage).max(0);
        events.push(format!(
            "{} attacks {} for {} damage! Player HP: {}",
            monster.name(),
            player.name,
            monster_damage,
            player_hp
        ));
        if player_hp == 0 {
            events.push(format!("{} is defeated!", player.name));
            state = BattleState::MonsterWon;
        }
    }

    Ok(BattleResult {
        events,
        player_won: state == BattleState::PlayerWon,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use emberfall_data::{AbilityScores, Goblin, Item, Troll};
    use std::sync::Arc;

    fn player(attack: i32, level: i32, hit_points: i32) -> Player {
        Player::new(
            "Brann",
            "Fighter",
            level,
            AbilityScores::new()
                .with(Attribute::Attack, attack)
                .with(Attribute::HitPoints, hit_points),
        )
    }

    fn goblin(health: i32) -> Monster {
        Monster::Goblin(Goblin {
            name: "Snag".into(),
            level: 1,
            health,
            treasure: None,
        })
    }

    #[test]
    fn fixed_scenario_player_beats_goblin_in_two_rounds() {
        // Attack 3 + level 2 = 5 effective; goblin deals a fixed 5
        let player = player(3, 2, 30);
        let result = run_battle(&player, &goblin(10)).unwrap();

        assert!(result.player_won);
        assert_eq!(result.events.len(), 4);
        assert_eq!(
            result.events[0],
            "Brann attacks Snag for 5 damage! Monster HP: 5"
        );
        assert_eq!(
            result.events[1],
            "Snag attacks Brann for 5 damage! Player HP: 25"
        );
        assert_eq!(
            result.events[2],
            "Brann attacks Snag for 5 damage! Monster HP: 0"
        );
        assert_eq!(result.events[3], "Snag is defeated!");
    }

    #[test]
    fn battles_are_deterministic() {
        let player = player(3, 2, 30);
        let first = run_battle(&player, &goblin(10)).unwrap();
        let second = run_battle(&player, &goblin(10)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn damage_floor_guarantees_termination_against_huge_defense() {
        // Troll hits for 12, but the player's defense towers over it; both
        // sides still land at least 1 per exchange, so the fight is bounded.
        let mut sturdy = player(0, 1, 200);
        sturdy.scores.set(Attribute::Defense, 1000);
        let troll = Monster::Troll(Troll {
            name: "Bergelmir".into(),
            level: 4,
            health: 50,
            treasure: None,
        });

        let result = run_battle(&sturdy, &troll).unwrap();
        // player deals max(0 + 1 - 0, 1) = 1 per round; troll deals 1 through
        // the huge defense; 50 player attacks, 49 troll replies, one defeat line
        assert!(result.player_won);
        assert_eq!(result.events.len(), 50 * 2);
    }

    #[test]
    fn equipped_item_bonuses_feed_the_attack_total() {
        let mut armed = player(3, 2, 30);
        armed.items.push(Arc::new(Item {
            name: "Longsword".into(),
            kind: "Weapon".into(),
            is_equipped: true,
            attribute_modifiers: AbilityScores::new().with(Attribute::Attack, 5),
            ..Item::default()
        }));

        // 3 + 2 + 5 = 10 finishes the goblin in one exchange
        let result = run_battle(&armed, &goblin(10)).unwrap();
        assert!(result.player_won);
        assert_eq!(result.events.len(), 2);
        assert_eq!(
            result.events[0],
            "Brann attacks Snag for 10 damage! Monster HP: 0"
        );
    }

    #[test]
    fn monster_can_win_and_player_hp_reports_clamped() {
        // Goblin with a big pool against a 4 hp player: player loses round one
        let weakling = player(1, 1, 4);
        let result = run_battle(&weakling, &goblin(100)).unwrap();

        assert!(!result.player_won);
        assert_eq!(result.events.len(), 3);
        assert_eq!(
            result.events[1],
            "Snag attacks Brann for 5 damage! Player HP: 0"
        );
        assert_eq!(result.events[2], "Brann is defeated!");
    }

    #[test]
    fn battle_with_defeated_combatant_is_rejected() {
        let fresh = player(3, 2, 30);
        assert!(run_battle(&fresh, &goblin(0)).is_err());

        let downed = player(3, 2, 0);
        assert!(run_battle(&downed, &goblin(10)).is_err());
    }

    #[test]
    fn simulation_does_not_mutate_combatants() {
        let player = player(3, 2, 30);
        let monster = goblin(10);
        let _ = run_battle(&player, &monster).unwrap();

        assert_eq!(player.scores.get(Attribute::HitPoints), 30);
        assert_eq!(monster.health(), 10);
    }
}
