#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const EMBERFALL_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod battle;
pub mod data_paths;
pub mod menu;
pub mod progression;
pub mod store;
pub mod style;
pub mod view;

// Re-exports for convenience
pub use battle::{BattleResult, BattleState, run_battle};
pub use menu::run_menu;
pub use progression::{AutoSave, Persist, PlayerService};
pub use store::{GameStore, TablePaths};
pub use view::{View, ViewItem};
