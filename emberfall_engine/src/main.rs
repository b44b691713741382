#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Emberfall **
//! Turn-based console RPG

use emberfall_engine::{GameStore, TablePaths, run_menu};

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: loading Emberfall tables...");
    let store = GameStore::load(TablePaths::default_locations()).context("while loading game tables")?;
    info!("tables loaded successfully");

    println!(
        "{:^60}",
        "EMBERFALL: A TURN-BASED TALE OF POOR DECISIONS"
            .bright_yellow()
            .underline()
    );
    println!();

    run_menu(store)
}
