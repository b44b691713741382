//! Menu loop and console prompts.
//!
//! The game runs as a numbered main menu. Handlers push results into the
//! [`View`] and the loop flushes once per pass; the only direct printing
//! here is for the menu itself and re-prompts during input validation.

use crate::battle::run_battle;
use crate::progression::{AutoSave, PlayerService};
use crate::store::GameStore;
use crate::style::GameStyle;
use crate::view::{MonsterCard, PlayerCard, View, ViewItem};
use anyhow::Result;
use emberfall_data::{AbilityScores, Attribute, Player};
use log::info;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// One line of console input, or the reason there wasn't one.
enum Input {
    Line(String),
    Eof,
    Interrupted,
}

/// The actions reachable from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    LevelUp,
    AddPlayer,
    ListPlayers,
    Battle,
    ShowItems,
    Quit,
    Unknown,
}

/// Map a line of input to a menu action.
pub fn parse_choice(input: &str) -> MenuChoice {
    match input.trim() {
        "1" => MenuChoice::LevelUp,
        "2" => MenuChoice::AddPlayer,
        "3" => MenuChoice::ListPlayers,
        "4" => MenuChoice::Battle,
        "5" => MenuChoice::ShowItems,
        "0" => MenuChoice::Quit,
        _ => MenuChoice::Unknown,
    }
}

/// Run the main menu loop until the user quits.
///
/// Selects the active player first, then dispatches menu actions. All
/// mutating actions go through the auto-saving service, so every level-up
/// or roster addition lands on disk before the next prompt.
///
/// # Errors
/// Propagates input failures and persistence failures from mutations.
pub fn run_menu(store: GameStore) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    let mut view = View::new();
    let mut service = AutoSave::new(store);

    let Some(current) = select_player(&mut editor, &mut view, &service)? else {
        view.push(ViewItem::Message("No player selected. Exiting game setup.".into()));
        view.flush();
        return Ok(());
    };
    info!("active player: {}", service.players()[current].name);
    view.push(ViewItem::Message(format!(
        "{} has entered the game.",
        service.players()[current].name
    )));
    view.flush();

    loop {
        show_menu();
        let line = match read_line(&mut editor, &"Choose an action: ".prompt_style().to_string())? {
            Input::Line(line) => line,
            Input::Eof => break,
            Input::Interrupted => continue,
        };

        match parse_choice(&line) {
            MenuChoice::LevelUp => {
                view.push(ViewItem::Message("Leveling up player...".into()));
                service.level_up(current)?;
                let player = &service.players()[current];
                view.push(ViewItem::Message(format!(
                    "Player {} leveled up to level {} with {} hit points.",
                    player.name,
                    player.level,
                    player.scores.get(Attribute::HitPoints)
                )));
            },
            MenuChoice::AddPlayer => {
                if let Some(player) = prompt_for_new_player(&mut editor, service.inner())? {
                    let name = player.name.clone();
                    service.add_player(player)?;
                    view.push(ViewItem::Message(format!("Player {name} was added.")));
                }
            },
            MenuChoice::ListPlayers => {
                view.push(ViewItem::PlayerRoster(
                    service.players().iter().map(PlayerCard::from).collect(),
                ));
            },
            MenuChoice::Battle => battle_monster(&mut editor, &mut view, &service, current)?,
            MenuChoice::ShowItems => {
                let player = &service.players()[current];
                view.push(ViewItem::ItemList {
                    owner: player.name.clone(),
                    items: player.items.clone(),
                });
            },
            MenuChoice::Quit => {
                view.push(ViewItem::Message("Goodbye!".into()));
                view.flush();
                break;
            },
            MenuChoice::Unknown => {
                view.push(ViewItem::Error(
                    "Invalid selection. Please choose 1, 2, 3, 4, 5, or 0.".into(),
                ));
            },
        }
        view.flush();
    }
    Ok(())
}

fn show_menu() {
    println!();
    println!("{}", "=== Main Menu ===".heading_style());
    println!("{}", "1. Level Up Player".menu_style());
    println!("{}", "2. Add Player".menu_style());
    println!("{}", "3. List All Players".menu_style());
    println!("{}", "4. Battle a Monster".menu_style());
    println!("{}", "5. Show Player Items".menu_style());
    println!("{}", "0. Quit".menu_style());
}

/// Choose the active player for this session.
fn select_player(
    editor: &mut DefaultEditor,
    view: &mut View,
    service: &AutoSave<GameStore>,
) -> Result<Option<usize>> {
    if service.players().is_empty() {
        view.push(ViewItem::Message(
            "No players found. Please add a player first.".into(),
        ));
        return Ok(None);
    }
    view.push(ViewItem::PlayerRoster(
        service.players().iter().map(PlayerCard::from).collect(),
    ));
    view.flush();
    prompt_for_selection(editor, "Select a player by number: ", service.players().len())
}

/// List the bestiary, prompt for a pick, and run the battle.
fn battle_monster(
    editor: &mut DefaultEditor,
    view: &mut View,
    service: &AutoSave<GameStore>,
    current: usize,
) -> Result<()> {
    let store = service.inner();
    if store.monsters.is_empty() {
        view.push(ViewItem::Message("No monsters found.".into()));
        return Ok(());
    }
    view.push(ViewItem::MonsterList(
        store.monsters.iter().map(MonsterCard::from).collect(),
    ));
    view.flush();

    let Some(idx) =
        prompt_for_selection(editor, "Select a monster by number: ", store.monsters.len())?
    else {
        return Ok(());
    };

    let player = &service.players()[current];
    match run_battle(player, &store.monsters[idx]) {
        Ok(result) => view.push(ViewItem::BattleEvents(result.events)),
        Err(err) => view.push(ViewItem::Error(err.to_string())),
    }
    Ok(())
}

/// Collect all fields for a new roster member.
///
/// Returns `Ok(None)` if the user backs out (EOF/interrupt) at any prompt.
fn prompt_for_new_player(editor: &mut DefaultEditor, store: &GameStore) -> Result<Option<Player>> {
    let Some(name) = read_nonempty(editor, "Enter player name: ", 2, 20)? else {
        return Ok(None);
    };
    let Some(profession) = read_nonempty(editor, "Enter profession: ", 2, 20)? else {
        return Ok(None);
    };
    let Some(level) = read_int_in_range(editor, "Enter level (1-99): ", 1, 99)? else {
        return Ok(None);
    };
    let Some(health) = read_int_in_range(editor, "Enter max health (1-999): ", 1, 999)? else {
        return Ok(None);
    };
    let prompt = format!("Enter current hit points (1-{health}): ");
    let Some(hit_points) = read_int_in_range(editor, &prompt, 1, health)? else {
        return Ok(None);
    };
    let Some(gold) = read_int_in_range(editor, "Enter starting gold (0-10000): ", 0, 10_000)?
    else {
        return Ok(None);
    };

    let mut scores = AbilityScores::new()
        .with(Attribute::Health, health)
        .with(Attribute::HitPoints, hit_points)
        .with(Attribute::Gold, gold);
    let core = [
        (Attribute::Strength, "Strength (1-20): ", 1, 20),
        (Attribute::Dexterity, "Dexterity (1-20): ", 1, 20),
        (Attribute::Intelligence, "Intelligence (1-20): ", 1, 20),
        (Attribute::Wisdom, "Wisdom (1-20): ", 1, 20),
        (Attribute::Charisma, "Charisma (1-20): ", 1, 20),
        (Attribute::Constitution, "Constitution (1-20): ", 1, 20),
        (Attribute::Attack, "Attack (0-10): ", 0, 10),
        (Attribute::Defense, "Defense (0-10): ", 0, 10),
    ];
    for (attr, prompt, min, max) in core {
        let Some(value) = read_int_in_range(editor, prompt, min, max)? else {
            return Ok(None);
        };
        scores.set(attr, value);
    }

    let items = match read_line(
        editor,
        "Enter item names (comma or | separated, must match the item table): ",
    )? {
        Input::Line(raw) => {
            let names: Vec<String> = raw
                .split(['|', ','])
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect();
            store.resolve_item_refs(&names)
        },
        Input::Eof | Input::Interrupted => return Ok(None),
    };

    let mut player = Player::new(&name, &profession, level, scores);
    player.items = items;
    Ok(Some(player))
}

/// Prompt until the user picks a number in `1..=max`; `None` on EOF.
fn prompt_for_selection(
    editor: &mut DefaultEditor,
    prompt: &str,
    max: usize,
) -> Result<Option<usize>> {
    loop {
        match read_line(editor, &prompt.prompt_style().to_string())? {
            Input::Line(line) => match line.parse::<usize>() {
                Ok(n) if n >= 1 && n <= max => return Ok(Some(n - 1)),
                _ => println!(
                    "{}",
                    "Invalid selection. Please enter a valid number.".error_style()
                ),
            },
            Input::Eof | Input::Interrupted => return Ok(None),
        }
    }
}

fn read_nonempty(
    editor: &mut DefaultEditor,
    prompt: &str,
    min_len: usize,
    max_len: usize,
) -> Result<Option<String>> {
    loop {
        match read_line(editor, prompt)? {
            Input::Line(line) => {
                if line.len() >= min_len && line.len() <= max_len {
                    return Ok(Some(line));
                }
                println!(
                    "{}",
                    format!("Input must be {min_len}-{max_len} characters and not empty.")
                        .error_style()
                );
            },
            Input::Eof | Input::Interrupted => return Ok(None),
        }
    }
}

fn read_int_in_range(
    editor: &mut DefaultEditor,
    prompt: &str,
    min: i32,
    max: i32,
) -> Result<Option<i32>> {
    loop {
        match read_line(editor, prompt)? {
            Input::Line(line) => match line.parse::<i32>() {
                Ok(value) if value >= min && value <= max => return Ok(Some(value)),
                _ => println!(
                    "{}",
                    format!("Please enter a number between {min} and {max}.").error_style()
                ),
            },
            Input::Eof | Input::Interrupted => return Ok(None),
        }
    }
}

fn read_line(editor: &mut DefaultEditor, prompt: &str) -> Result<Input> {
    match editor.readline(prompt) {
        Ok(line) => Ok(Input::Line(line.trim().to_string())),
        Err(ReadlineError::Eof) => Ok(Input::Eof),
        Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
        Err(err) => Err(err.into()),
    }
}
