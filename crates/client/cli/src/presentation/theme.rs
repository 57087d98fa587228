//! Colors and glyphs for the terminal UI.
use hex_core::Terrain;
use ratatui::style::{Color, Modifier, Style};

use crate::message::MessageLevel;

/// Styling rules shared by every widget.
///
/// Built once at startup and passed by reference into each render call.
#[derive(Clone, Debug)]
pub struct Theme {
    pub border: Style,
    pub label: Style,
    pub selection: Style,
    pub neighbor: Style,
    pub settlement: Style,
    pub heading: Style,
    pub muted: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::White),
            label: Style::default().fg(Color::Blue),
            selection: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            neighbor: Style::default().fg(Color::Cyan).bg(Color::Blue),
            settlement: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            heading: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            muted: Style::default().fg(Color::DarkGray),
        }
    }
}

impl Theme {
    pub fn terrain(&self, terrain: Terrain) -> Style {
        let color = match terrain {
            Terrain::Forest => Color::Green,
            Terrain::Plains => Color::Yellow,
            Terrain::Water => Color::Cyan,
        };
        Style::default().fg(color)
    }

    pub fn terrain_glyph(terrain: Terrain) -> char {
        match terrain {
            Terrain::Forest => 'F',
            Terrain::Plains => '.',
            Terrain::Water => '~',
        }
    }

    pub fn message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        }
    }
}
