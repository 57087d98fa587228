//! Screen layout and the main render entry point.
//!
//! ```text
//! +-------------------------------+--------+
//! | map (viewport)                | legend |
//! +-------------------------------+--------+
//! | messages                               |
//! +----------------------------------------+
//!  footer
//! ```
use anyhow::Result;
use hex_core::Extent;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::config::UiConfig;
use crate::presentation::{terminal::Tui, theme::Theme, widgets};
use crate::session::Session;

pub const MIN_TERMINAL_ROWS: u16 = 12;
pub const MIN_TERMINAL_COLUMNS: u16 = 40;
pub const MESSAGE_PANEL_HEIGHT: u16 = 4;
pub const FOOTER_HEIGHT: u16 = 1;

/// Areas of a screen large enough to show the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenAreas {
    pub map: Rect,
    pub legend: Rect,
    pub messages: Rect,
    pub footer: Rect,
}

impl ScreenAreas {
    /// Splits `area`, or returns `None` when the terminal is below the minimum.
    pub fn split(area: Rect, ui: &UiConfig) -> Option<Self> {
        if area.height < MIN_TERMINAL_ROWS || area.width < MIN_TERMINAL_COLUMNS {
            return None;
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(MESSAGE_PANEL_HEIGHT),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        let legend_width = ui.legend_width.min(area.width / 2);
        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(legend_width)])
            .split(rows[0]);

        Some(Self {
            map: top[0],
            legend: top[1],
            messages: rows[1],
            footer: rows[2],
        })
    }

    /// Cells available to the viewport inside the map panel border.
    pub fn viewport_size(&self) -> Extent {
        let inner = Block::default().borders(Borders::ALL).inner(self.map);
        Extent::new(u32::from(inner.height), u32::from(inner.width))
    }
}

/// Viewport size for a terminal of `area`; zero when the screen is too small.
pub fn viewport_size(area: Rect, ui: &UiConfig) -> Extent {
    ScreenAreas::split(area, ui)
        .map(|areas| areas.viewport_size())
        .unwrap_or(Extent::ZERO)
}

pub fn render(terminal: &mut Tui, session: &Session, theme: &Theme) -> Result<()> {
    terminal.draw(|frame| render_frame(frame, session, theme))?;
    Ok(())
}

/// Draw one full frame.
pub fn render_frame(frame: &mut Frame, session: &Session, theme: &Theme) {
    let area = frame.area();
    let Some(areas) = ScreenAreas::split(area, &session.config().ui) else {
        render_too_small(frame, area, theme);
        return;
    };

    match session.world() {
        Some(world) => {
            widgets::map::render(frame, areas.map, world, theme);
            widgets::legend::render(frame, areas.legend, world, theme);
        }
        None => {
            let placeholder = Paragraph::new("Generating map...")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title(" Map "));
            frame.render_widget(placeholder, areas.map);
        }
    }
    widgets::messages::render(frame, areas.messages, session.messages(), theme);
    widgets::footer::render(frame, areas.footer, theme);
}

fn render_too_small(frame: &mut Frame, area: Rect, theme: &Theme) {
    let text = vec![
        Line::from("Terminal too small"),
        Line::from(format!(
            "need {MIN_TERMINAL_COLUMNS}x{MIN_TERMINAL_ROWS}, have {}x{}",
            area.width, area.height
        )),
    ];
    let panel = Paragraph::new(text)
        .style(theme.selection)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(panel, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use crate::session::Command;
    use hex_core::HexIndex;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn screen_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        let symbols: Vec<&str> = buffer.content().iter().map(|cell| cell.symbol()).collect();
        symbols
            .chunks(width)
            .map(|line| line.concat())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn session(rows: u32, columns: u32, area: Rect) -> Session {
        let mut config = CliConfig::default();
        config.map.rows = rows;
        config.map.columns = columns;
        config.map.seed = Some(3);
        let size = viewport_size(area, &config.ui);
        let mut session = Session::new(config);
        session.initialize(size).unwrap();
        session
    }

    #[test]
    fn split_reserves_legend_and_panels() {
        let areas = ScreenAreas::split(Rect::new(0, 0, 100, 30), &UiConfig::default()).unwrap();
        assert_eq!(areas.legend.width, 24);
        assert_eq!(areas.map.width, 76);
        assert_eq!(areas.messages.height, MESSAGE_PANEL_HEIGHT);
        assert_eq!(areas.viewport_size(), Extent::new(23, 74));
    }

    #[test]
    fn small_terminal_has_no_viewport() {
        let ui = UiConfig::default();
        assert_eq!(viewport_size(Rect::new(0, 0, 39, 30), &ui), Extent::ZERO);
        assert_eq!(viewport_size(Rect::new(0, 0, 80, 11), &ui), Extent::ZERO);
    }

    #[test]
    fn too_small_panel_replaces_the_map() {
        let area = Rect::new(0, 0, 30, 10);
        let session = session(3, 3, Rect::new(0, 0, 80, 24));
        let mut terminal = Terminal::new(TestBackend::new(area.width, area.height)).unwrap();

        terminal
            .draw(|frame| render_frame(frame, &session, &Theme::default()))
            .unwrap();

        let text = screen_text(terminal.backend().buffer());
        assert!(text.contains("Terminal too small"));
        assert!(!text.contains("Legend"));
    }

    #[test]
    fn map_shows_labels_and_selection_details() {
        let area = Rect::new(0, 0, 80, 30);
        let mut session = session(3, 3, area);
        session.apply(Command::Select(HexIndex::new(1, 2))).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(area.width, area.height)).unwrap();

        terminal
            .draw(|frame| render_frame(frame, &session, &Theme::default()))
            .unwrap();

        let text = screen_text(terminal.backend().buffer());
        assert!(text.contains("1,1"));
        assert!(text.contains("3,3"));
        assert!(text.contains("+-----+"));
        assert!(text.contains("Hex    3,2"));
        assert!(text.contains("Seed   3"));
    }
}
