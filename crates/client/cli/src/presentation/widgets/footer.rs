//! Key help line.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::presentation::theme::Theme;

const BINDINGS: [(&str, &str); 7] = [
    ("q w e a s d", "move"),
    ("h l", "left/right"),
    ("enter", "select"),
    ("esc", "clear"),
    ("H J K L", "scroll"),
    ("r", "new map"),
    ("Q", "quit"),
];

pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
    let mut spans = Vec::with_capacity(BINDINGS.len() * 2);
    for (keys, action) in BINDINGS {
        spans.push(Span::styled(format!(" {keys} "), theme.heading));
        spans.push(Span::styled(format!("{action} "), theme.muted));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
