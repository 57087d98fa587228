//! Status panel showing the most recent messages, newest first.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::message::MessageLog;
use crate::presentation::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, messages: &MessageLog, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.muted)
        .title(" Messages ");
    let visible = block.inner(area).height as usize;

    let lines: Vec<Line> = messages
        .recent(visible)
        .map(|entry| {
            Line::from(vec![
                Span::styled(format!("[{}] ", entry.turn), theme.muted),
                Span::styled(entry.text.clone(), theme.message(entry.level)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
