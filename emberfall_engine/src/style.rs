//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides convenience methods for applying ANSI
//! styling via the `colored` crate. Implementations for `&str` and `String`
//! are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn heading_style(&self) -> ColoredString;
    fn menu_style(&self) -> ColoredString;
    fn message_style(&self) -> ColoredString;
    fn player_style(&self) -> ColoredString;
    fn monster_style(&self) -> ColoredString;
    fn item_style(&self) -> ColoredString;
    fn battle_style(&self) -> ColoredString;
    fn defeat_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn heading_style(&self) -> ColoredString {
        self.bold().underline()
    }
    fn menu_style(&self) -> ColoredString {
        self.truecolor(200, 200, 160)
    }
    fn message_style(&self) -> ColoredString {
        self.cyan()
    }
    fn player_style(&self) -> ColoredString {
        self.bold().truecolor(80, 160, 255)
    }
    fn monster_style(&self) -> ColoredString {
        self.truecolor(200, 80, 60)
    }
    fn item_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn battle_style(&self) -> ColoredString {
        self.truecolor(230, 230, 200)
    }
    fn defeat_style(&self) -> ColoredString {
        self.bold().truecolor(230, 60, 60)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn prompt_style(&self) -> ColoredString {
        self.bold().green()
    }
}

impl GameStyle for String {
    fn heading_style(&self) -> ColoredString {
        self.as_str().heading_style()
    }
    fn menu_style(&self) -> ColoredString {
        self.as_str().menu_style()
    }
    fn message_style(&self) -> ColoredString {
        self.as_str().message_style()
    }
    fn player_style(&self) -> ColoredString {
        self.as_str().player_style()
    }
    fn monster_style(&self) -> ColoredString {
        self.as_str().monster_style()
    }
    fn item_style(&self) -> ColoredString {
        self.as_str().item_style()
    }
    fn battle_style(&self) -> ColoredString {
        self.as_str().battle_style()
    }
    fn defeat_style(&self) -> ColoredString {
        self.as_str().defeat_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
}
