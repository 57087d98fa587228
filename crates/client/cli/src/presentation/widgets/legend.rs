//! Legend panel: terrain key, selection details and viewport state.

use hex_core::Terrain;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::Theme;
use crate::session::World;

pub fn render(frame: &mut Frame, area: Rect, world: &World, theme: &Theme) {
    let mut lines = vec![Line::from(Span::styled("Terrain", theme.heading))];
    for (terrain, name) in [
        (Terrain::Forest, "Forest"),
        (Terrain::Plains, "Plains"),
        (Terrain::Water, "Water"),
    ] {
        lines.push(Line::from(vec![
            Span::styled(Theme::terrain_glyph(terrain).to_string(), theme.terrain(terrain)),
            Span::raw(format!(" {name}")),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled("#", theme.settlement),
        Span::raw(" Settlement"),
    ]));

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Selection", theme.heading)));
    lines.extend(selection_lines(world, theme));

    let viewport = world.viewport();
    let origin = viewport.origin();
    let size = viewport.size();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("View", theme.heading)));
    lines.push(Line::from(format!("Origin {},{}", origin.row, origin.column)));
    lines.push(Line::from(format!("Size   {}x{}", size.rows, size.columns)));
    lines.push(Line::from(format!("Seed   {}", world.seed())));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.muted)
            .title(" Legend "),
    );
    frame.render_widget(paragraph, area);
}

fn selection_lines(world: &World, theme: &Theme) -> Vec<Line<'static>> {
    let Some(index) = world.selection().selected() else {
        return vec![Line::from(Span::styled("none", theme.muted))];
    };

    let mut lines = vec![Line::from(vec![
        Span::raw("Hex    "),
        Span::styled(
            format!("{},{}", index.column + 1, index.row + 1),
            theme.selection,
        ),
    ])];

    if let Ok(cell) = world.grid().get(index) {
        let terrain = cell.terrain();
        lines.push(Line::from(vec![
            Span::raw("Land   "),
            Span::styled(terrain.to_string(), theme.terrain(terrain)),
        ]));
        if cell.has_settlement() {
            lines.push(Line::from(vec![
                Span::raw("Town   "),
                Span::styled("#", theme.settlement),
            ]));
        }
    }

    let center = world.engine().layout.center_position(index);
    let relative = world.viewport().relative_position(center);
    lines.push(Line::from(format!(
        "Pos    {}%,{}%",
        relative.row, relative.column
    )));

    lines
}
