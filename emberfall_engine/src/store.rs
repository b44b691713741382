//! JSON table storage for the three persisted entity tables.
//!
//! The store translates between the in-memory entity graph and three flat
//! JSON files: `items.json`, `players.json`, and `monsters.json`. Items load
//! first as the master table; player rows carry item *names* which are
//! resolved to shared [`Item`] records; monster rows are heterogeneous and
//! dispatched on their `Type` discriminator. A missing table file is treated
//! as an empty table so a fresh environment can bootstrap from nothing.

use crate::data_paths::data_path;
use anyhow::{Context, Result};
use emberfall_data::{Dragon, Goblin, Item, Monster, Player, PlayerRecord, Troll};
use log::{info, warn};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

pub const ITEMS_FILE: &str = "items.json";
pub const PLAYERS_FILE: &str = "players.json";
pub const MONSTERS_FILE: &str = "monsters.json";

/// Decode failures for recognized records. Unknown discriminators and
/// unresolved references are *not* errors; they are skipped with a warning.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to parse {table} table")]
    Table {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("malformed {kind} record in monsters table")]
    MonsterRecord {
        kind: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Locations of the three table files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePaths {
    pub items: PathBuf,
    pub players: PathBuf,
    pub monsters: PathBuf,
}

impl TablePaths {
    /// Table paths under the resolved runtime data directory.
    pub fn default_locations() -> TablePaths {
        TablePaths {
            items: data_path(ITEMS_FILE),
            players: data_path(PLAYERS_FILE),
            monsters: data_path(MONSTERS_FILE),
        }
    }

    /// Table paths under an explicit directory. Used by tests and tools.
    pub fn in_dir(dir: &Path) -> TablePaths {
        TablePaths {
            items: dir.join(ITEMS_FILE),
            players: dir.join(PLAYERS_FILE),
            monsters: dir.join(MONSTERS_FILE),
        }
    }
}

/// The in-memory entity tables plus the file locations they persist to.
///
/// Single writer, single reader: the store assumes one active session and
/// performs whole-table synchronous reads and writes with no locking.
#[derive(Debug)]
pub struct GameStore {
    paths: TablePaths,
    pub items: Vec<Arc<Item>>,
    pub players: Vec<Player>,
    pub monsters: Vec<Monster>,
}

impl GameStore {
    /// Load all three tables, resolving player item references against the
    /// already-loaded item table.
    ///
    /// # Errors
    /// Fails on unreadable files or malformed records for recognized
    /// discriminators. Missing files load as empty tables.
    pub fn load(paths: TablePaths) -> Result<GameStore> {
        let items = load_items(&paths.items)?;
        let players = load_players(&paths.players, &items)?;
        let monsters = load_monsters(&paths.monsters)?;
        info!(
            "loaded {} items, {} players, {} monsters",
            items.len(),
            players.len(),
            monsters.len()
        );
        Ok(GameStore {
            paths,
            items,
            players,
            monsters,
        })
    }

    /// An empty store that persists to `paths`.
    pub fn empty(paths: TablePaths) -> GameStore {
        GameStore {
            paths,
            items: Vec::new(),
            players: Vec::new(),
            monsters: Vec::new(),
        }
    }

    /// Persist all three tables, overwriting whole files.
    ///
    /// The three writes are independent failure domains: a failed write to
    /// one table never prevents attempting the others. The first failure is
    /// surfaced to the caller once all writes have been attempted.
    ///
    /// # Errors
    /// Returns the first write failure, with the table path in its context.
    pub fn save(&self) -> Result<()> {
        let outcomes = [
            self.write_items(),
            self.write_players(),
            self.write_monsters(),
        ];

        let mut first_failure = None;
        for outcome in outcomes {
            if let Err(err) = outcome {
                warn!("table write failed: {err:#}");
                if first_failure.is_none() {
                    first_failure = Some(err);
                }
            }
        }
        match first_failure {
            Some(err) => Err(err),
            None => {
                info!(
                    "saved {} items, {} players, {} monsters",
                    self.items.len(),
                    self.players.len(),
                    self.monsters.len()
                );
                Ok(())
            },
        }
    }

    /// Resolve a list of item names against the master item table.
    ///
    /// Matching is case-insensitive and exact. Names with no match are
    /// dropped from the result; each drop is logged rather than silently
    /// masked.
    pub fn resolve_item_refs(&self, names: &[String]) -> Vec<Arc<Item>> {
        resolve_item_refs(names, &self.items)
    }

    /// Find a player by exact name.
    pub fn find_player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|player| player.name == name)
    }

    /// Find a monster by exact name.
    pub fn find_monster(&self, name: &str) -> Option<&Monster> {
        self.monsters.iter().find(|monster| monster.name() == name)
    }

    fn write_items(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.items)?;
        fs::write(&self.paths.items, json)
            .with_context(|| format!("writing {}", self.paths.items.display()))
    }

    fn write_players(&self) -> Result<()> {
        let records: Vec<PlayerRecord> = self.players.iter().map(PlayerRecord::from).collect();
        let json = serde_json::to_string_pretty(&records)?;
        fs::write(&self.paths.players, json)
            .with_context(|| format!("writing {}", self.paths.players.display()))
    }

    fn write_monsters(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.monsters)?;
        fs::write(&self.paths.monsters, json)
            .with_context(|| format!("writing {}", self.paths.monsters.display()))
    }
}

/// Read a table file's text, treating a missing file as an empty table.
fn read_table(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        info!("table {} not found, starting empty", path.display());
        return Ok(None);
    }
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(Some(raw))
}

fn load_items(path: &Path) -> Result<Vec<Arc<Item>>> {
    let Some(raw) = read_table(path)? else {
        return Ok(Vec::new());
    };
    let items: Vec<Item> = serde_json::from_str(&raw)
        .map_err(|source| StoreError::Table {
            table: "items",
            source,
        })
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(items.into_iter().map(Arc::new).collect())
}

fn load_players(path: &Path, items: &[Arc<Item>]) -> Result<Vec<Player>> {
    let Some(raw) = read_table(path)? else {
        return Ok(Vec::new());
    };
    let records: Vec<PlayerRecord> = serde_json::from_str(&raw)
        .map_err(|source| StoreError::Table {
            table: "players",
            source,
        })
        .with_context(|| format!("parsing {}", path.display()))?;

    Ok(records
        .into_iter()
        .map(|record| Player {
            name: record.name,
            profession: record.profession,
            level: record.level,
            scores: record.ability_scores,
            items: resolve_item_refs(&record.items, items),
        })
        .collect())
}

fn load_monsters(path: &Path) -> Result<Vec<Monster>> {
    let Some(raw) = read_table(path)? else {
        return Ok(Vec::new());
    };
    let rows: Vec<Value> = serde_json::from_str(&raw)
        .map_err(|source| StoreError::Table {
            table: "monsters",
            source,
        })
        .with_context(|| format!("parsing {}", path.display()))?;

    let mut monsters = Vec::new();
    for row in rows {
        if let Some(monster) = decode_monster(row)? {
            monsters.push(monster);
        }
    }
    Ok(monsters)
}

/// Decode one monster row by its `Type` discriminator.
///
/// A row with an unknown discriminator, or none at all, yields `Ok(None)`
/// and a warning; the rest of the table still loads. A malformed row for a
/// *recognized* discriminator is a hard error.
fn decode_monster(row: Value) -> Result<Option<Monster>, StoreError> {
    let Some(kind) = row.get("Type").and_then(Value::as_str) else {
        warn!("skipping monster record with no Type discriminator");
        return Ok(None);
    };

    let decode_err = |source| StoreError::MonsterRecord {
        kind: kind.to_string(),
        source,
    };
    let monster = match kind {
        "Goblin" => Monster::Goblin(serde_json::from_value::<Goblin>(row.clone()).map_err(decode_err)?),
        "Dragon" => Monster::Dragon(serde_json::from_value::<Dragon>(row.clone()).map_err(decode_err)?),
        "Troll" => Monster::Troll(serde_json::from_value::<Troll>(row.clone()).map_err(decode_err)?),
        other => {
            warn!("skipping monster record with unknown Type '{other}'");
            return Ok(None);
        },
    };
    Ok(Some(monster))
}

fn resolve_item_refs(names: &[String], table: &[Arc<Item>]) -> Vec<Arc<Item>> {
    names
        .iter()
        .filter_map(|name| {
            let found = table.iter().find(|item| item.name.eq_ignore_ascii_case(name));
            if found.is_none() {
                warn!("dropping unresolved item reference '{name}'");
            }
            found.map(Arc::clone)
        })
        .collect()
}
