//! Map widget painting hex glyphs through the viewport.
//!
//! Only hexes whose boxes can reach the viewport window are visited, and of
//! those only the cells inside the window reach the frame buffer. Hexes share
//! border cells with their neighbors, so highlighted hexes are painted last.

use hex_core::{HexCell, HexIndex, HexLayout, HexRange, Viewport};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders},
};

use crate::presentation::theme::Theme;
use crate::session::World;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Part {
    Border,
    Fill,
    Label,
    Marker,
}

/// One character of a hex glyph, relative to the hex's surface position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct GlyphCell {
    row: i64,
    column: i64,
    ch: char,
    part: Part,
}

/// Render the bordered map panel. The panel's inner area is the viewport.
pub fn render(frame: &mut Frame, area: Rect, world: &World, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.muted)
        .title(" Map ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    paint(frame.buffer_mut(), inner, world, theme);
}

/// Paint the hexes visible through the viewport into `area`.
pub fn paint(buf: &mut Buffer, area: Rect, world: &World, theme: &Theme) {
    let layout = world.engine().layout;
    let grid = world.grid();
    let painter = Painter {
        area,
        viewport: world.viewport(),
        layout: &layout,
        theme,
    };

    for index in visible_hexes(world).iter() {
        if let Ok(cell) = grid.get(index) {
            painter.hex(buf, index, cell, theme.border);
        }
    }

    let Some(selected) = world.selection().selected() else {
        return;
    };
    for (index, cell) in grid.neighbors(selected) {
        painter.hex(buf, index, cell, theme.neighbor);
    }
    if let Ok(cell) = grid.get(selected) {
        painter.hex(buf, selected, cell, theme.selection);
    }
}

/// Hexes that can show up in the current viewport window.
pub fn visible_hexes(world: &World) -> HexRange {
    let viewport = world.viewport();
    world.engine().layout.hexes_overlapping(
        world.grid().bounds(),
        viewport.origin(),
        viewport.size(),
    )
}

struct Painter<'a> {
    area: Rect,
    viewport: &'a Viewport,
    layout: &'a HexLayout,
    theme: &'a Theme,
}

impl Painter<'_> {
    fn hex(&self, buf: &mut Buffer, index: HexIndex, cell: &HexCell, border: Style) {
        let origin = self.layout.position(index);
        let fill = self.theme.terrain(cell.terrain());

        for glyph in hex_glyph(self.layout, index, cell) {
            let surface = origin.offset(glyph.row, glyph.column);
            if !self.viewport.contains(surface) {
                continue;
            }
            let local = self.viewport.to_local(surface);
            if local.row >= i64::from(self.area.height) || local.column >= i64::from(self.area.width)
            {
                continue;
            }

            let style = match glyph.part {
                Part::Border => border,
                Part::Fill => fill,
                Part::Label => self.theme.label,
                Part::Marker => self.theme.settlement,
            };
            let x = self.area.x + local.column as u16;
            let y = self.area.y + local.row as u16;
            if let Some(target) = buf.cell_mut((x, y)) {
                target.set_char(glyph.ch).set_style(style);
            }
        }
    }
}

/// Box-drawing glyph of one hex.
///
/// Standard 5x9 layout, offsets relative to the hex position:
///
/// ```text
///   +-1,1-+
///  /FFFFFFF\
/// +FFFFFFFFF+
///  \FFFFFFF/
///   +-----+
/// ```
fn hex_glyph(layout: &HexLayout, index: HexIndex, cell: &HexCell) -> Vec<GlyphCell> {
    let height = i64::from(layout.hex_height());
    let width = i64::from(layout.hex_width());
    let half = (height - 1) / 2;
    let fill = Theme::terrain_glyph(cell.terrain());
    let mut glyph = Vec::with_capacity((height * (width + 2)) as usize);

    for row in 0..height {
        let depth = (row - half).abs();
        let left = depth - 1;
        let right = width - depth;

        let (left_ch, right_ch, inner_ch, inner_part) = if depth == half {
            ('+', '+', '-', Part::Border)
        } else if row < half {
            ('/', '\\', fill, Part::Fill)
        } else if row > half {
            ('\\', '/', fill, Part::Fill)
        } else {
            ('+', '+', fill, Part::Fill)
        };

        glyph.push(GlyphCell {
            row,
            column: left,
            ch: left_ch,
            part: Part::Border,
        });
        glyph.extend((left + 1..right).map(|column| GlyphCell {
            row,
            column,
            ch: inner_ch,
            part: inner_part,
        }));
        glyph.push(GlyphCell {
            row,
            column: right,
            ch: right_ch,
            part: Part::Border,
        });
    }

    // "col,row" label on the top edge, comma in the middle
    let middle = (width - 1) / 2;
    let column_text = (index.column + 1).to_string();
    let row_text = (index.row + 1).to_string();
    let start = middle - column_text.len() as i64;
    let label = column_text.chars().chain([',']).chain(row_text.chars());
    glyph.extend(label.enumerate().map(|(offset, ch)| GlyphCell {
        row: 0,
        column: start + offset as i64,
        ch,
        part: Part::Label,
    }));

    if cell.has_settlement() {
        let center = layout.center_position(index);
        let origin = layout.position(index);
        glyph.push(GlyphCell {
            row: center.row - origin.row,
            column: center.column - origin.column,
            ch: '#',
            part: Part::Marker,
        });
    }

    glyph
}
