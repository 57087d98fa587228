//! Hex-grid addressing, viewport and selection engine.
//!
//! `hex-core` turns logical hex indices into character-cell positions under
//! the odd-column offset layout, resolves neighbors, keeps a scrollable window
//! clamped over the rendered surface, and tracks the single selected hex.
//! It draws nothing and performs no I/O: a frontend paints the cells and
//! reports the errors returned here.
pub mod address;
pub mod config;
pub mod error;
pub mod grid;
pub mod selection;
pub mod viewport;

pub use address::{
    Extent, GridBounds, HexDirection, HexIndex, HexLayout, HexRange, ScreenPosition,
};
pub use config::{FollowBand, HexConfig};
pub use error::{CoreError, ErrorSeverity, HexError};
pub use grid::{HexCell, HexGrid, Neighbors, Terrain};
pub use selection::{Selection, SelectionChange, SelectionController};
pub use viewport::{AxisStatus, RelativePosition, ScrollReport, Step, Viewport};
