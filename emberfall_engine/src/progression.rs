//! Roster progression: leveling, adding players, and the auto-save wrapper.
//!
//! Mutation rules and persistence timing are kept separable: [`GameStore`]
//! implements the bare mutations, and [`AutoSave`] wraps any
//! `PlayerService + Persist` to re-persist the whole store after every
//! mutating call. A batched-persistence strategy could replace [`AutoSave`]
//! without touching the mutation logic.

use crate::store::GameStore;
use anyhow::{Context, Result};
use emberfall_data::{Attribute, Player};
use log::info;

/// Hit points gained on each level-up.
pub const LEVEL_UP_HP_GAIN: i32 = 5;

/// Mutation and read operations over the player roster.
pub trait PlayerService {
    /// Level up the roster member at `idx`.
    ///
    /// # Errors
    /// Fails when `idx` is out of bounds for the roster.
    fn level_up(&mut self, idx: usize) -> Result<()>;

    /// Append a new player to the roster.
    ///
    /// # Errors
    /// Propagates persistence failures from decorated implementations.
    fn add_player(&mut self, player: Player) -> Result<()>;

    /// Read-only view of the roster, in stable order.
    fn players(&self) -> &[Player];
}

/// Anything that can persist its full state.
pub trait Persist {
    /// Write all state to storage.
    ///
    /// # Errors
    /// Surfaces I/O and serialization failures.
    fn save(&self) -> Result<()>;
}

impl PlayerService for GameStore {
    fn level_up(&mut self, idx: usize) -> Result<()> {
        let player = self
            .players
            .get_mut(idx)
            .with_context(|| format!("no player at roster position {idx}"))?;
        player.level += 1;
        // Note: hit points are not clamped to Health here, matching the
        // long-standing behavior; see DESIGN.md.
        player.scores.adjust(Attribute::HitPoints, LEVEL_UP_HP_GAIN);
        info!(
            "player {} leveled up to {} ({} hit points)",
            player.name,
            player.level,
            player.scores.get(Attribute::HitPoints)
        );
        Ok(())
    }

    fn add_player(&mut self, player: Player) -> Result<()> {
        if self.find_player(&player.name).is_some() {
            log::warn!("roster already has a player named '{}'", player.name);
        }
        info!("player {} added to roster", player.name);
        self.players.push(player);
        Ok(())
    }

    fn players(&self) -> &[Player] {
        &self.players
    }
}

impl Persist for GameStore {
    fn save(&self) -> Result<()> {
        GameStore::save(self)
    }
}

/// Decorator that persists the wrapped service after every mutating call.
///
/// Reads pass straight through and never trigger a save.
#[derive(Debug)]
pub struct AutoSave<S> {
    inner: S,
}

impl<S: PlayerService + Persist> AutoSave<S> {
    pub fn new(inner: S) -> AutoSave<S> {
        AutoSave { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: PlayerService + Persist> PlayerService for AutoSave<S> {
    fn level_up(&mut self, idx: usize) -> Result<()> {
        self.inner.level_up(idx)?;
        self.inner.save()
    }

    fn add_player(&mut self, player: Player) -> Result<()> {
        self.inner.add_player(player)?;
        self.inner.save()
    }

    fn players(&self) -> &[Player] {
        self.inner.players()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TablePaths;
    use emberfall_data::AbilityScores;
    use tempfile::tempdir;

    fn roster_store(dir: &std::path::Path) -> GameStore {
        let mut store = GameStore::empty(TablePaths::in_dir(dir));
        store.players.push(Player::new(
            "Brann",
            "Fighter",
            1,
            AbilityScores::new()
                .with(Attribute::Health, 20)
                .with(Attribute::HitPoints, 12),
        ));
        store
    }

    #[test]
    fn level_up_bumps_level_and_hit_points() -> Result<()> {
        let dir = tempdir()?;
        let mut store = roster_store(dir.path());
        store.level_up(0)?;

        let player = &store.players[0];
        assert_eq!(player.level, 2);
        assert_eq!(player.scores.get(Attribute::HitPoints), 17);
        Ok(())
    }

    #[test]
    fn level_up_rejects_bad_index() {
        let dir = tempdir().unwrap();
        let mut store = roster_store(dir.path());
        assert!(store.level_up(7).is_err());
    }

    // Documents a known gap: repeated level-ups can push HitPoints past
    // Health, violating the HitPoints <= Health save invariant.
    #[test]
    fn level_up_can_raise_hit_points_above_max_health() -> Result<()> {
        let dir = tempdir()?;
        let mut store = roster_store(dir.path());
        store.level_up(0)?;
        store.level_up(0)?;

        let player = &store.players[0];
        assert_eq!(player.scores.get(Attribute::Health), 20);
        assert_eq!(player.scores.get(Attribute::HitPoints), 22);
        Ok(())
    }

    #[test]
    fn auto_save_persists_after_each_mutation() -> Result<()> {
        let dir = tempdir()?;
        let paths = TablePaths::in_dir(dir.path());
        let mut service = AutoSave::new(roster_store(dir.path()));

        service.level_up(0)?;
        let reloaded = GameStore::load(paths.clone())?;
        assert_eq!(reloaded.players[0].level, 2);

        service.add_player(Player::new("Mira", "Mage", 3, AbilityScores::new()))?;
        let reloaded = GameStore::load(paths)?;
        assert_eq!(reloaded.players.len(), 2);
        assert_eq!(reloaded.players[1].name, "Mira");
        Ok(())
    }

    #[test]
    fn reads_do_not_trigger_a_save() -> Result<()> {
        let dir = tempdir()?;
        let paths = TablePaths::in_dir(dir.path());
        let service = AutoSave::new(roster_store(dir.path()));

        assert_eq!(service.players().len(), 1);
        // nothing mutated, nothing written
        assert!(!paths.players.exists());
        Ok(())
    }
}
