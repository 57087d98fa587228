//! Fixed-size rectangular grid of hex cells.
//!
//! The grid is filled once at construction by a caller-supplied generator and
//! never resized; a different map size means a new grid.

use arrayvec::ArrayVec;

use crate::address::{Extent, GridBounds, HexDirection, HexIndex, HexLayout};
use crate::error::HexError;

/// Terrain categories a hex can carry.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Terrain {
    Forest,
    #[default]
    Plains,
    Water,
}

impl Terrain {
    pub const ALL: [Terrain; 3] = [Terrain::Forest, Terrain::Plains, Terrain::Water];
}

/// Immutable per-hex data handed through to the renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct HexCell {
    terrain: Terrain,
    has_settlement: bool,
}

impl HexCell {
    pub const fn new(terrain: Terrain, has_settlement: bool) -> Self {
        Self {
            terrain,
            has_settlement,
        }
    }

    pub const fn terrain(&self) -> Terrain {
        self.terrain
    }

    pub const fn has_settlement(&self) -> bool {
        self.has_settlement
    }
}

/// Up to six in-bounds neighbors of a hex, in direction-table order.
pub type Neighbors<'a> = ArrayVec<(HexIndex, &'a HexCell), 6>;

/// Row-major table of [`HexCell`]s with fixed dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HexGrid {
    bounds: GridBounds,
    cells: Vec<HexCell>,
}

impl HexGrid {
    /// Builds a grid by calling `generator` once per index, in row-major order.
    pub fn generate<F>(rows: u32, columns: u32, mut generator: F) -> Self
    where
        F: FnMut(HexIndex) -> HexCell,
    {
        let bounds = GridBounds::new(rows, columns);
        let mut cells = Vec::with_capacity(bounds.len());
        for row in 0..rows {
            for column in 0..columns {
                cells.push(generator(HexIndex::new(row, column)));
            }
        }
        Self { bounds, cells }
    }

    /// Grid where every hex holds the same cell.
    pub fn filled(rows: u32, columns: u32, cell: HexCell) -> Self {
        Self::generate(rows, columns, |_| cell)
    }

    pub const fn rows(&self) -> u32 {
        self.bounds.rows
    }

    pub const fn columns(&self) -> u32 {
        self.bounds.columns
    }

    pub const fn bounds(&self) -> GridBounds {
        self.bounds
    }

    pub const fn contains(&self, index: HexIndex) -> bool {
        self.bounds.contains(index)
    }

    pub fn get(&self, index: HexIndex) -> Result<&HexCell, HexError> {
        self.slot(index)
            .map(|slot| &self.cells[slot])
            .ok_or_else(|| HexError::out_of_bounds(index))
    }

    /// Lookup with signed coordinates so positions left of or above the grid
    /// can be expressed.
    pub fn get_signed(&self, row: i64, column: i64) -> Result<&HexCell, HexError> {
        let index = self
            .bounds
            .resolve(row, column)
            .ok_or(HexError::OutOfBounds { row, column })?;
        self.get(index)
    }

    pub fn neighbor(&self, index: HexIndex, direction: HexDirection) -> Option<HexIndex> {
        if !self.contains(index) {
            return None;
        }
        index.neighbor(direction, self.bounds)
    }

    /// In-bounds neighbors of `index`.
    ///
    /// Walks all eight direction tokens in table order and skips indices
    /// already produced, so the straight aliases never add a duplicate. An
    /// out-of-bounds `index` has no neighbors.
    pub fn neighbors(&self, index: HexIndex) -> Neighbors<'_> {
        let mut found = Neighbors::new();
        for direction in HexDirection::ALL {
            let Some(next) = self.neighbor(index, direction) else {
                continue;
            };
            if found.iter().any(|(seen, _)| *seen == next) {
                continue;
            }
            found.push((next, &self.cells[self.offset_of(next)]));
        }
        found
    }

    /// All indices in row-major order.
    pub fn indices(&self) -> impl Iterator<Item = HexIndex> + '_ {
        let columns = self.bounds.columns;
        (0..self.bounds.rows)
            .flat_map(move |row| (0..columns).map(move |column| HexIndex::new(row, column)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (HexIndex, &HexCell)> + '_ {
        self.indices().zip(self.cells.iter())
    }

    /// Size of the surface needed to draw the whole grid with `layout`.
    pub const fn surface_extent(&self, layout: &HexLayout) -> Extent {
        layout.surface_extent(self.bounds)
    }

    fn slot(&self, index: HexIndex) -> Option<usize> {
        self.contains(index).then(|| self.offset_of(index))
    }

    fn offset_of(&self, index: HexIndex) -> usize {
        index.row as usize * self.bounds.columns as usize + index.column as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_grid(rows: u32, columns: u32) -> HexGrid {
        HexGrid::generate(rows, columns, |index| {
            let terrain = Terrain::ALL[((index.row + index.column) % 3) as usize];
            HexCell::new(terrain, index.row == index.column)
        })
    }

    #[test]
    fn generator_visits_each_index_once_in_row_major_order() {
        let mut visited = Vec::new();
        let grid = HexGrid::generate(3, 4, |index| {
            visited.push(index);
            HexCell::default()
        });

        assert_eq!(visited.len(), 12);
        assert_eq!(visited, grid.indices().collect::<Vec<_>>());
        assert_eq!(visited[0], HexIndex::new(0, 0));
        assert_eq!(visited[4], HexIndex::new(1, 0));
        assert_eq!(visited[11], HexIndex::new(2, 3));
    }

    #[test]
    fn get_returns_the_generated_cell() {
        let grid = numbered_grid(4, 4);
        let cell = grid.get(HexIndex::new(2, 2)).unwrap();
        assert!(cell.has_settlement());
        assert_eq!(cell.terrain(), Terrain::Plains);
        assert!(!grid.get(HexIndex::new(2, 1)).unwrap().has_settlement());
    }

    #[test]
    fn get_rejects_indices_outside_grid() {
        let grid = numbered_grid(3, 5);
        assert_eq!(
            grid.get(HexIndex::new(3, 0)),
            Err(HexError::OutOfBounds { row: 3, column: 0 })
        );
        assert_eq!(
            grid.get_signed(0, -1),
            Err(HexError::OutOfBounds { row: 0, column: -1 })
        );
    }

    #[test]
    fn interior_hex_has_six_neighbors_in_table_order() {
        let grid = numbered_grid(5, 5);
        let indices: Vec<HexIndex> = grid
            .neighbors(HexIndex::new(2, 2))
            .iter()
            .map(|(index, _)| *index)
            .collect();

        assert_eq!(
            indices,
            vec![
                HexIndex::new(1, 2),
                HexIndex::new(1, 3),
                HexIndex::new(2, 3),
                HexIndex::new(3, 2),
                HexIndex::new(2, 1),
                HexIndex::new(1, 1),
            ]
        );
    }

    #[test]
    fn odd_column_neighbors_keep_table_order() {
        let grid = numbered_grid(5, 5);
        let indices: Vec<HexIndex> = grid
            .neighbors(HexIndex::new(2, 3))
            .iter()
            .map(|(index, _)| *index)
            .collect();

        // Right collapses into UpRight, UpLeft into Left
        assert_eq!(
            indices,
            vec![
                HexIndex::new(1, 3),
                HexIndex::new(2, 4),
                HexIndex::new(3, 4),
                HexIndex::new(3, 3),
                HexIndex::new(3, 2),
                HexIndex::new(2, 2),
            ]
        );
    }

    #[test]
    fn single_row_edge_keeps_only_the_straight_step() {
        let grid = numbered_grid(1, 3);

        let even: Vec<HexIndex> = grid
            .neighbors(HexIndex::ORIGIN)
            .iter()
            .map(|(index, _)| *index)
            .collect();
        assert_eq!(even, vec![HexIndex::new(0, 1)]);

        let odd: Vec<HexIndex> = grid
            .neighbors(HexIndex::new(0, 1))
            .iter()
            .map(|(index, _)| *index)
            .collect();
        assert_eq!(odd, vec![HexIndex::new(0, 2), HexIndex::new(0, 0)]);
    }

    #[test]
    fn corner_hex_has_fewer_neighbors() {
        let grid = numbered_grid(3, 3);
        let indices: Vec<HexIndex> = grid
            .neighbors(HexIndex::ORIGIN)
            .iter()
            .map(|(index, _)| *index)
            .collect();
        assert_eq!(indices, vec![HexIndex::new(0, 1), HexIndex::new(1, 0)]);
    }

    #[test]
    fn neighbors_of_missing_hex_is_empty() {
        let grid = numbered_grid(3, 3);
        assert!(grid.neighbors(HexIndex::new(7, 7)).is_empty());
    }

    #[test]
    fn empty_grid_has_no_cells() {
        let grid = HexGrid::filled(0, 4, HexCell::default());
        assert_eq!(grid.indices().count(), 0);
        assert_eq!(grid.surface_extent(&HexLayout::STANDARD), Extent::ZERO);
    }
}
