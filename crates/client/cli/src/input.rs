//! Keyboard-to-command mapping.
//!
//! The rest of the client never looks at `crossterm` key codes; it only sees
//! the [`Command`]s produced here.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use hex_core::{HexDirection, HexLayout};

use crate::session::Command;

/// Translates `KeyEvent`s into session commands.
#[derive(Clone, Copy, Debug)]
pub struct InputHandler {
    /// Scroll distances for one hex step, in cells.
    row_step: i64,
    column_step: i64,
}

impl InputHandler {
    pub fn new(layout: &HexLayout) -> Self {
        Self {
            row_step: layout.row_step(),
            column_step: layout.column_step(),
        }
    }

    /// Converts a raw key event into a command, or `None` for unbound keys.
    pub fn handle_key(&self, key: KeyEvent) -> Option<Command> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Command::Quit),
                _ => None,
            };
        }

        let command = match key.code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => {
                Command::Move(HexDirection::Up)
            }
            KeyCode::Char('e') | KeyCode::Char('u') => Command::Move(HexDirection::UpRight),
            KeyCode::Char('d') | KeyCode::Char('n') => Command::Move(HexDirection::DownRight),
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => {
                Command::Move(HexDirection::Down)
            }
            KeyCode::Char('a') | KeyCode::Char('b') => Command::Move(HexDirection::DownLeft),
            KeyCode::Char('q') | KeyCode::Char('y') => Command::Move(HexDirection::UpLeft),
            KeyCode::Right | KeyCode::Char('l') => Command::Move(HexDirection::Right),
            KeyCode::Left | KeyCode::Char('h') => Command::Move(HexDirection::Left),

            KeyCode::Enter | KeyCode::Char(' ') => Command::SelectCenter,
            KeyCode::Esc | KeyCode::Char('x') => Command::Unselect,

            // Shifted vi keys pan the view without touching the selection
            KeyCode::Char('H') => self.scroll(0, -1),
            KeyCode::Char('J') => self.scroll(1, 0),
            KeyCode::Char('K') => self.scroll(-1, 0),
            KeyCode::Char('L') => self.scroll(0, 1),

            KeyCode::Char('r') => Command::Regenerate,
            KeyCode::Char('Q') => Command::Quit,
            _ => return None,
        };

        Some(command)
    }

    fn scroll(&self, rows: i64, columns: i64) -> Command {
        Command::Scroll {
            rows: rows * self.row_step,
            columns: columns * self.column_step,
        }
    }
}
