//! Single-hex selection state machine.
//!
//! ```text
//! Unselected --select--> Selected(i) --move/select--> Selected(j)
//!      ^                      |
//!      +------unselect--------+
//! ```

use crate::address::{GridBounds, HexDirection, HexIndex, HexLayout, ScreenPosition};
use crate::error::HexError;
use crate::grid::HexGrid;

/// Current selection state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Selection {
    #[default]
    Unselected,
    Selected(HexIndex),
}

impl Selection {
    pub const fn index(self) -> Option<HexIndex> {
        match self {
            Selection::Unselected => None,
            Selection::Selected(index) => Some(index),
        }
    }
}

/// What a successful selection change replaced.
///
/// The renderer reverts `previous` (and its neighbors) to the default style
/// and marks `current`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SelectionChange {
    pub previous: Option<HexIndex>,
    pub current: HexIndex,
}

/// Owns the one selected hex, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionController {
    state: Selection,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn state(&self) -> Selection {
        self.state
    }

    pub const fn selected(&self) -> Option<HexIndex> {
        self.state.index()
    }

    pub fn is_selected(&self, index: HexIndex) -> bool {
        self.selected() == Some(index)
    }

    /// Selects `index`, replacing any previous selection.
    ///
    /// An index outside `grid` leaves the state untouched.
    pub fn select(&mut self, index: HexIndex, grid: &HexGrid) -> Result<SelectionChange, HexError> {
        if !grid.contains(index) {
            return Err(HexError::out_of_bounds(index));
        }
        Ok(self.replace(index))
    }

    /// Clears the selection and returns what was selected. Idempotent.
    pub fn unselect(&mut self) -> Option<HexIndex> {
        let previous = self.selected();
        self.state = Selection::Unselected;
        previous
    }

    /// Moves the selection one step in `direction`.
    ///
    /// Fails with `NoSelection` when nothing is selected and with
    /// `BlockedMove` when the step would leave the grid; the selection is
    /// unchanged in both cases.
    pub fn move_selected(
        &mut self,
        direction: HexDirection,
        grid: &HexGrid,
    ) -> Result<SelectionChange, HexError> {
        let from = self.selected().ok_or(HexError::NoSelection)?;
        let to = grid
            .neighbor(from, direction)
            .ok_or(HexError::BlockedMove { from, direction })?;
        Ok(self.replace(to))
    }

    /// Drops the selection if it no longer fits in `bounds`.
    pub fn retain_within(&mut self, bounds: GridBounds) -> Option<HexIndex> {
        match self.selected() {
            Some(index) if !bounds.contains(index) => self.unselect(),
            _ => None,
        }
    }

    pub fn selected_position(&self, layout: &HexLayout) -> Result<ScreenPosition, HexError> {
        self.selected()
            .map(|index| layout.position(index))
            .ok_or(HexError::NoSelection)
    }

    pub fn selected_center_position(&self, layout: &HexLayout) -> Result<ScreenPosition, HexError> {
        self.selected()
            .map(|index| layout.center_position(index))
            .ok_or(HexError::NoSelection)
    }

    fn replace(&mut self, index: HexIndex) -> SelectionChange {
        let previous = self.selected();
        self.state = Selection::Selected(index);
        SelectionChange {
            previous,
            current: index,
        }
    }
}
