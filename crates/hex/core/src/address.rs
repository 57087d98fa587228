//! Hex addressing under the odd-column offset layout.
//!
//! Hexes are arranged in columns. Odd columns sit half a hex lower than even
//! columns, so the row delta of a diagonal step depends on the parity of the
//! column it starts from. Everything in this module is pure arithmetic.

use core::fmt;
use core::ops::Range;
use core::str::FromStr;

use crate::error::HexError;

/// Logical address of a hex: `row` counts down, `column` counts right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HexIndex {
    pub row: u32,
    pub column: u32,
}

impl HexIndex {
    pub const ORIGIN: Self = Self { row: 0, column: 0 };

    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Converts signed coordinates, rejecting negative or oversized values.
    pub fn from_signed(row: i64, column: i64) -> Option<Self> {
        Some(Self {
            row: u32::try_from(row).ok()?,
            column: u32::try_from(column).ok()?,
        })
    }

    #[inline]
    pub const fn is_odd_column(self) -> bool {
        self.column % 2 == 1
    }

    /// Index one step away in `direction`, or `None` if it leaves `bounds`.
    pub fn neighbor(self, direction: HexDirection, bounds: GridBounds) -> Option<Self> {
        let (d_row, d_column) = direction.delta(self.column);
        let row = i64::from(self.row) + d_row;
        let column = i64::from(self.column) + d_column;
        bounds.resolve(row, column)
    }
}

impl fmt::Display for HexIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Rectangular extent of a grid, in hexes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct GridBounds {
    pub rows: u32,
    pub columns: u32,
}

impl GridBounds {
    pub const fn new(rows: u32, columns: u32) -> Self {
        Self { rows, columns }
    }

    pub const fn contains(&self, index: HexIndex) -> bool {
        index.row < self.rows && index.column < self.columns
    }

    /// Resolves signed coordinates to an in-bounds index.
    pub fn resolve(&self, row: i64, column: i64) -> Option<HexIndex> {
        HexIndex::from_signed(row, column).filter(|index| self.contains(*index))
    }

    pub const fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns == 0
    }

    /// Number of hexes covered by these bounds.
    pub const fn len(&self) -> usize {
        self.rows as usize * self.columns as usize
    }
}

/// Rectangular block of hex indices, half-open on both axes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HexRange {
    pub rows: Range<u32>,
    pub columns: Range<u32>,
}

impl HexRange {
    pub const EMPTY: Self = Self {
        rows: 0..0,
        columns: 0..0,
    };

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len() * self.columns.len()
    }

    pub fn contains(&self, index: HexIndex) -> bool {
        self.rows.contains(&index.row) && self.columns.contains(&index.column)
    }

    /// Indices in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = HexIndex> + '_ {
        self.rows.clone().flat_map(move |row| {
            self.columns
                .clone()
                .map(move |column| HexIndex::new(row, column))
        })
    }
}

/// Position in character cells on the full, unclipped surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ScreenPosition {
    pub row: i64,
    pub column: i64,
}

impl ScreenPosition {
    pub const ORIGIN: Self = Self { row: 0, column: 0 };

    pub const fn new(row: i64, column: i64) -> Self {
        Self { row, column }
    }

    pub const fn offset(self, d_row: i64, d_column: i64) -> Self {
        Self {
            row: self.row + d_row,
            column: self.column + d_column,
        }
    }
}

/// Size of a character-cell area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Extent {
    pub rows: u32,
    pub columns: u32,
}

impl Extent {
    pub const ZERO: Self = Self {
        rows: 0,
        columns: 0,
    };

    pub const fn new(rows: u32, columns: u32) -> Self {
        Self { rows, columns }
    }
}

/// The eight direction tokens understood by the engine.
///
/// `Right` and `Left` are straight moves kept as aliases: on an even column
/// `Right` lands on the same hex as `DownRight`, on an odd column on the same
/// hex as `UpRight` (mirrored for `Left`). [`HexDirection::HEX`] lists the six
/// true hex directions.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum HexDirection {
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
}

impl HexDirection {
    /// All tokens, in canonical table order.
    pub const ALL: [HexDirection; 8] = [
        HexDirection::Up,
        HexDirection::UpRight,
        HexDirection::Right,
        HexDirection::DownRight,
        HexDirection::Down,
        HexDirection::DownLeft,
        HexDirection::Left,
        HexDirection::UpLeft,
    ];

    /// The six geometric hex directions, clockwise from `Up`.
    pub const HEX: [HexDirection; 6] = [
        HexDirection::Up,
        HexDirection::UpRight,
        HexDirection::DownRight,
        HexDirection::Down,
        HexDirection::DownLeft,
        HexDirection::UpLeft,
    ];

    /// Row/column delta of one step from a hex in `column`.
    ///
    /// Diagonal row deltas differ by column parity: from an even column the
    /// upper diagonals go one row up, from an odd column they stay on the row.
    pub const fn delta(self, column: u32) -> (i64, i64) {
        let side = if column % 2 == 1 { 0 } else { -1 };
        match self {
            HexDirection::Up => (-1, 0),
            HexDirection::UpRight => (side, 1),
            HexDirection::Right => (0, 1),
            HexDirection::DownRight => (side + 1, 1),
            HexDirection::Down => (1, 0),
            HexDirection::DownLeft => (side + 1, -1),
            HexDirection::Left => (0, -1),
            HexDirection::UpLeft => (side, -1),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            HexDirection::Up => HexDirection::Down,
            HexDirection::UpRight => HexDirection::DownLeft,
            HexDirection::Right => HexDirection::Left,
            HexDirection::DownRight => HexDirection::UpLeft,
            HexDirection::Down => HexDirection::Up,
            HexDirection::DownLeft => HexDirection::UpRight,
            HexDirection::Left => HexDirection::Right,
            HexDirection::UpLeft => HexDirection::DownRight,
        }
    }

    /// True for the straight `Right`/`Left` aliases.
    pub const fn is_straight(self) -> bool {
        matches!(self, HexDirection::Right | HexDirection::Left)
    }

    /// Parses a direction token such as `"up_right"`.
    pub fn parse(token: &str) -> Result<Self, HexError> {
        Self::from_str(token.trim()).map_err(|_| HexError::InvalidDirection(token.to_owned()))
    }
}

/// Screen geometry of a single hex and how hexes tile.
///
/// Adjacent hexes share one row or column of border, so the per-row and
/// per-column steps are one less than the hex height and width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HexLayout {
    hex_height: u32,
    hex_width: u32,
}

impl HexLayout {
    pub const DEFAULT_HEX_HEIGHT: u32 = 5;
    pub const DEFAULT_HEX_WIDTH: u32 = 9;
    pub const MIN_HEX_HEIGHT: u32 = 3;
    pub const MIN_HEX_WIDTH: u32 = 5;

    pub const STANDARD: Self = Self {
        hex_height: Self::DEFAULT_HEX_HEIGHT,
        hex_width: Self::DEFAULT_HEX_WIDTH,
    };

    /// Creates a layout; the height must be odd so the middle row exists.
    pub const fn new(hex_height: u32, hex_width: u32) -> Option<Self> {
        if hex_height < Self::MIN_HEX_HEIGHT
            || hex_width < Self::MIN_HEX_WIDTH
            || hex_height % 2 == 0
        {
            return None;
        }
        Some(Self {
            hex_height,
            hex_width,
        })
    }

    pub const fn hex_height(&self) -> u32 {
        self.hex_height
    }

    pub const fn hex_width(&self) -> u32 {
        self.hex_width
    }

    pub const fn row_step(&self) -> i64 {
        self.hex_height as i64 - 1
    }

    pub const fn column_step(&self) -> i64 {
        self.hex_width as i64 - 1
    }

    /// Downward shift applied to odd columns.
    pub const fn odd_column_shift(&self) -> i64 {
        self.row_step() / 2
    }

    /// Top-left cell of the hex at `index`.
    pub const fn position(&self, index: HexIndex) -> ScreenPosition {
        let shift = if index.is_odd_column() {
            self.odd_column_shift()
        } else {
            0
        };
        ScreenPosition {
            row: index.row as i64 * self.row_step() + shift,
            column: index.column as i64 * self.column_step() + 1,
        }
    }

    /// Interior cell used as the scroll target for the hex at `index`.
    pub const fn center_position(&self, index: HexIndex) -> ScreenPosition {
        self.position(index).offset(
            (self.hex_height / 2) as i64,
            (self.hex_width / 3) as i64,
        )
    }

    /// Size of the full surface needed to draw every hex in `bounds`.
    ///
    /// The middle row of a hex reaches one cell left of its position and
    /// `hex_width` cells right of it.
    pub const fn surface_extent(&self, bounds: GridBounds) -> Extent {
        if bounds.is_empty() {
            return Extent::ZERO;
        }
        let shift = if bounds.columns > 1 {
            self.odd_column_shift() as u32
        } else {
            0
        };
        Extent {
            rows: bounds.rows * (self.hex_height - 1) + shift + 1,
            columns: bounds.columns * (self.hex_width - 1) + 3,
        }
    }
}

impl HexLayout {
    /// Hexes in `bounds` whose glyphs can reach a window of `size` cells at
    /// `origin`.
    ///
    /// Padded by one hex on each side for shared borders, the odd-column
    /// shift and the middle row reaching past the column step. May include a
    /// few hexes that end up fully clipped, never misses a visible one.
    pub fn hexes_overlapping(
        &self,
        bounds: GridBounds,
        origin: ScreenPosition,
        size: Extent,
    ) -> HexRange {
        if bounds.is_empty() || size.rows == 0 || size.columns == 0 {
            return HexRange::EMPTY;
        }
        HexRange {
            rows: covering_span(origin.row, size.rows, self.row_step(), bounds.rows),
            columns: covering_span(
                origin.column,
                size.columns,
                self.column_step(),
                bounds.columns,
            ),
        }
    }
}

/// Hex numbers along one axis touching cells `start..start + len`.
fn covering_span(start: i64, len: u32, step: i64, count: u32) -> Range<u32> {
    let last_cell = start.saturating_add(i64::from(len) - 1);
    let first = start.div_euclid(step) - 1;
    let end = last_cell.div_euclid(step) + 2;
    let count = i64::from(count);
    let first = first.clamp(0, count) as u32;
    let end = end.clamp(0, count) as u32;
    first..end.max(first)
}

impl Default for HexLayout {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: GridBounds = GridBounds::new(10, 10);

    #[test]
    fn position_offsets_odd_columns() {
        let layout = HexLayout::STANDARD;
        assert_eq!(layout.position(HexIndex::new(0, 0)), ScreenPosition::new(0, 1));
        assert_eq!(layout.position(HexIndex::new(0, 1)), ScreenPosition::new(2, 9));
        assert_eq!(layout.position(HexIndex::new(3, 2)), ScreenPosition::new(12, 17));
        assert_eq!(layout.position(HexIndex::new(3, 3)), ScreenPosition::new(14, 25));
    }

    #[test]
    fn center_is_inside_the_hex() {
        let layout = HexLayout::STANDARD;
        assert_eq!(
            layout.center_position(HexIndex::new(1, 1)),
            ScreenPosition::new(8, 12)
        );
    }

    #[test]
    fn diagonal_deltas_depend_on_column_parity() {
        let even = HexIndex::new(4, 2);
        let odd = HexIndex::new(4, 3);

        assert_eq!(even.neighbor(HexDirection::UpRight, BOUNDS), Some(HexIndex::new(3, 3)));
        assert_eq!(even.neighbor(HexDirection::DownRight, BOUNDS), Some(HexIndex::new(4, 3)));
        assert_eq!(odd.neighbor(HexDirection::UpRight, BOUNDS), Some(HexIndex::new(4, 4)));
        assert_eq!(odd.neighbor(HexDirection::DownRight, BOUNDS), Some(HexIndex::new(5, 4)));
        assert_eq!(even.neighbor(HexDirection::UpLeft, BOUNDS), Some(HexIndex::new(3, 1)));
        assert_eq!(odd.neighbor(HexDirection::DownLeft, BOUNDS), Some(HexIndex::new(5, 2)));
    }

    #[test]
    fn straight_moves_alias_a_diagonal() {
        let even = HexIndex::new(4, 2);
        let odd = HexIndex::new(4, 3);
        assert_eq!(
            even.neighbor(HexDirection::Right, BOUNDS),
            even.neighbor(HexDirection::DownRight, BOUNDS)
        );
        assert_eq!(
            odd.neighbor(HexDirection::Right, BOUNDS),
            odd.neighbor(HexDirection::UpRight, BOUNDS)
        );
        assert_eq!(
            even.neighbor(HexDirection::Left, BOUNDS),
            even.neighbor(HexDirection::DownLeft, BOUNDS)
        );
        assert_eq!(
            odd.neighbor(HexDirection::Left, BOUNDS),
            odd.neighbor(HexDirection::UpLeft, BOUNDS)
        );
    }

    #[test]
    fn neighbor_outside_bounds_is_none() {
        let corner = HexIndex::ORIGIN;
        assert_eq!(corner.neighbor(HexDirection::Up, BOUNDS), None);
        assert_eq!(corner.neighbor(HexDirection::UpLeft, BOUNDS), None);
        assert_eq!(corner.neighbor(HexDirection::UpRight, BOUNDS), None);
        assert_eq!(corner.neighbor(HexDirection::Left, BOUNDS), None);

        let far = HexIndex::new(9, 9);
        assert_eq!(far.neighbor(HexDirection::Down, BOUNDS), None);
        assert_eq!(far.neighbor(HexDirection::DownRight, BOUNDS), None);
    }

    #[test]
    fn parse_accepts_snake_case_tokens() {
        assert_eq!(HexDirection::parse("up_right"), Ok(HexDirection::UpRight));
        assert_eq!(HexDirection::parse("DOWN_LEFT"), Ok(HexDirection::DownLeft));
        assert_eq!(
            HexDirection::parse("north"),
            Err(HexError::InvalidDirection("north".into()))
        );
    }

    #[test]
    fn layout_rejects_even_heights() {
        assert_eq!(HexLayout::new(4, 9), None);
        assert_eq!(HexLayout::new(1, 9), None);
        assert!(HexLayout::new(7, 13).is_some());
    }

    /// Cells a hex glyph occupies: `h` rows, one column left of its position
    /// through `w` columns right.
    fn glyph_touches(layout: &HexLayout, index: HexIndex, origin: ScreenPosition, size: Extent) -> bool {
        let top = layout.position(index);
        let rows = top.row..top.row + i64::from(layout.hex_height());
        let columns = top.column - 1..top.column + i64::from(layout.hex_width()) + 1;
        let window_rows = origin.row..origin.row + i64::from(size.rows);
        let window_columns = origin.column..origin.column + i64::from(size.columns);
        rows.start < window_rows.end
            && window_rows.start < rows.end
            && columns.start < window_columns.end
            && window_columns.start < columns.end
    }

    #[test]
    fn overlapping_range_covers_every_touched_hex() {
        let bounds = GridBounds::new(12, 12);
        for layout in [HexLayout::STANDARD, HexLayout::new(3, 5).unwrap(), HexLayout::new(7, 13).unwrap()] {
            for size in [Extent::new(1, 1), Extent::new(5, 9), Extent::new(13, 31)] {
                for row in [0, 1, 3, 7, 10, 22] {
                    for column in [0, 1, 5, 8, 9, 17, 40] {
                        let origin = ScreenPosition::new(row, column);
                        let range = layout.hexes_overlapping(bounds, origin, size);
                        for r in 0..bounds.rows {
                            for c in 0..bounds.columns {
                                let index = HexIndex::new(r, c);
                                if glyph_touches(&layout, index, origin, size) {
                                    assert!(range.contains(index), "{index} at {origin:?} {size:?}");
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn overlapping_range_stays_small_on_large_grids() {
        let layout = HexLayout::STANDARD;
        let bounds = GridBounds::new(512, 512);
        let range = layout.hexes_overlapping(bounds, ScreenPosition::new(1_000, 2_000), Extent::new(28, 98));

        assert!(range.len() <= 11 * 16, "{range:?}");
        assert!(range.contains(HexIndex::new(250, 250)));
        assert!(!range.contains(HexIndex::ORIGIN));
        assert_eq!(range.iter().count(), range.len());
    }

    #[test]
    fn empty_window_or_grid_covers_nothing() {
        let layout = HexLayout::STANDARD;
        assert!(layout
            .hexes_overlapping(GridBounds::new(4, 4), ScreenPosition::ORIGIN, Extent::ZERO)
            .is_empty());
        assert!(layout
            .hexes_overlapping(GridBounds::new(0, 4), ScreenPosition::ORIGIN, Extent::new(10, 10))
            .is_empty());
    }

    #[test]
    fn surface_extent_covers_last_hex() {
        let layout = HexLayout::STANDARD;
        let bounds = GridBounds::new(10, 21);
        let extent = layout.surface_extent(bounds);
        assert_eq!(extent, Extent::new(43, 171));

        let last = layout.position(HexIndex::new(9, 19));
        assert!(last.row + 4 < i64::from(extent.rows));
        assert_eq!(layout.surface_extent(GridBounds::new(3, 1)), Extent::new(13, 11));
        assert_eq!(layout.surface_extent(GridBounds::new(0, 4)), Extent::ZERO);
    }
}
