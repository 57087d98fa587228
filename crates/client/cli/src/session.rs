//! Session state driving the hex engine from decoded input.
//!
//! The session owns the grid, viewport and selection exclusively. One command
//! produces at most one state mutation; the caller redraws when the returned
//! [`Outcome`] asks for it.
//!
//! Lifecycle:
//!
//! ```text
//! Uninitialized --initialize(size)--> Ready(World)
//!                                      |  ^
//!                                      +--+ apply(Resize | Move | ...)
//! ```

use hex_core::{
    CoreError, Extent, HexConfig, HexDirection, HexError, HexGrid, HexIndex, ScreenPosition,
    SelectionChange, SelectionController, Viewport,
};

use crate::config::CliConfig;
use crate::message::MessageLog;
use crate::terrain::TerrainGenerator;

/// Seed increment applied when the map is regenerated.
const SEED_STRIDE: u64 = 0x9e3779b97f4a7c15;

/// Engine operations decoded from user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Move the selection one hex.
    Move(HexDirection),
    /// Select a specific hex.
    Select(HexIndex),
    /// Select the hex closest to the middle of the visible window.
    SelectCenter,
    /// Clear the selection.
    Unselect,
    /// Pan the viewport by a number of cells.
    Scroll { rows: i64, columns: i64 },
    /// The visible map area changed size.
    Resize(Extent),
    /// Roll a new map with the next seed.
    Regenerate,
    /// Leave the application.
    Quit,
}

/// What the caller should do after a command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    pub redraw: bool,
    pub quit: bool,
}

impl Outcome {
    pub const NONE: Self = Self {
        redraw: false,
        quit: false,
    };
    pub const REDRAW: Self = Self {
        redraw: true,
        quit: false,
    };
    pub const QUIT: Self = Self {
        redraw: false,
        quit: true,
    };
}

/// Session lifecycle errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session is not initialized")]
    NotInitialized,

    #[error("session is already initialized")]
    AlreadyInitialized,
}

/// Engine state owned by a ready session.
#[derive(Clone, Debug)]
pub struct World {
    grid: HexGrid,
    viewport: Viewport,
    selection: SelectionController,
    generator: TerrainGenerator,
    engine: HexConfig,
}

impl World {
    fn build(config: &CliConfig, seed: u64, size: Extent) -> Self {
        let generator = TerrainGenerator::new(seed, config.map.settlement_chance);
        let grid = HexGrid::generate(config.map.rows, config.map.columns, |index| {
            generator.cell(index)
        });
        let viewport = Viewport::new(size, grid.surface_extent(&config.engine.layout));

        Self {
            grid,
            viewport,
            selection: SelectionController::new(),
            generator,
            engine: config.engine,
        }
    }

    pub fn grid(&self) -> &HexGrid {
        &self.grid
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn engine(&self) -> &HexConfig {
        &self.engine
    }

    pub fn seed(&self) -> u64 {
        self.generator.seed()
    }

    /// Hex whose center is closest to the middle of the visible window.
    pub fn hex_near_view_center(&self) -> Option<HexIndex> {
        let origin = self.viewport.origin();
        let size = self.viewport.size();
        let middle = origin.offset(i64::from(size.rows / 2), i64::from(size.columns / 2));
        let layout = self.engine.layout;

        // cells are roughly twice as tall as they are wide
        let window = layout.hexes_overlapping(self.grid.bounds(), origin, size);
        window.iter().min_by_key(|index| {
            let center = layout.center_position(*index);
            2 * (center.row - middle.row).abs() + (center.column - middle.column).abs()
        })
    }

    /// Scrolls until the selected hex is inside the comfort band.
    fn follow_selection(&mut self) {
        let Ok(target) = self.selection.selected_center_position(&self.engine.layout) else {
            return;
        };
        let report = self.viewport.scroll_toward(target, self.engine.follow);
        if report.moved() {
            tracing::debug!(
                steps = report.steps,
                rows = ?report.rows,
                columns = ?report.columns,
                "viewport followed selection"
            );
        }
    }

    fn regenerate(&mut self, settlement_chance: u32) {
        let seed = self.generator.seed().wrapping_add(SEED_STRIDE);
        self.generator = TerrainGenerator::new(seed, settlement_chance);
        let generator = self.generator;
        self.grid = HexGrid::generate(self.grid.rows(), self.grid.columns(), |index| {
            generator.cell(index)
        });
        self.viewport
            .set_surface(self.grid.surface_extent(&self.engine.layout));
        self.selection.retain_within(self.grid.bounds());
        self.follow_selection();
    }
}

/// Two-state session lifecycle.
#[derive(Clone, Debug, Default)]
pub enum SessionState {
    #[default]
    Uninitialized,
    Ready(World),
}

/// Single-threaded owner of all engine state for one run of the client.
#[derive(Debug)]
pub struct Session {
    config: CliConfig,
    state: SessionState,
    messages: MessageLog,
}

impl Session {
    pub fn new(config: CliConfig) -> Self {
        let messages = MessageLog::new(config.ui.message_capacity);
        Self {
            config,
            state: SessionState::Uninitialized,
            messages,
        }
    }

    pub fn config(&self) -> &CliConfig {
        &self.config
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn world(&self) -> Option<&World> {
        match &self.state {
            SessionState::Ready(world) => Some(world),
            SessionState::Uninitialized => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, SessionState::Ready(_))
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    /// Builds the map and a viewport of `size` cells.
    pub fn initialize(&mut self, size: Extent) -> Result<(), SessionError> {
        if self.is_ready() {
            return Err(SessionError::AlreadyInitialized);
        }

        let seed = self.config.map.initial_seed();
        let world = World::build(&self.config, seed, size);
        tracing::info!(
            rows = world.grid().rows(),
            columns = world.grid().columns(),
            seed,
            "map generated"
        );

        self.messages.push_text(format!(
            "Generated {}x{} map (seed {seed})",
            world.grid().rows(),
            world.grid().columns()
        ));
        self.state = SessionState::Ready(world);
        Ok(())
    }

    /// Re-sizes the viewport only; the map is untouched.
    pub fn resize(&mut self, size: Extent) -> Result<Outcome, SessionError> {
        self.apply(Command::Resize(size))
    }

    /// Rebuilds the map with the next seed, keeping a still-valid selection.
    pub fn regenerate(&mut self) -> Result<Outcome, SessionError> {
        self.apply(Command::Regenerate)
    }

    /// Applies one decoded command.
    ///
    /// Engine failures (no selection, blocked move, out of range) are not
    /// errors here: they are logged, recorded in the message log, and the
    /// screen is redrawn to show them.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, SessionError> {
        if command == Command::Quit {
            tracing::info!("quit requested");
            return Ok(Outcome::QUIT);
        }

        let SessionState::Ready(world) = &mut self.state else {
            return Err(SessionError::NotInitialized);
        };

        self.messages.next_turn();
        tracing::debug!(?command, "applying command");

        let outcome = match command {
            Command::Move(direction) => {
                let result = world.selection.move_selected(direction, &world.grid);
                settle_selection(world, &mut self.messages, result)
            }
            Command::Select(index) => {
                let result = world.selection.select(index, &world.grid);
                settle_selection(world, &mut self.messages, result)
            }
            Command::SelectCenter => match world.hex_near_view_center() {
                Some(index) => {
                    let result = world.selection.select(index, &world.grid);
                    settle_selection(world, &mut self.messages, result)
                }
                None => Outcome::NONE,
            },
            Command::Unselect => match world.selection.unselect() {
                Some(index) => {
                    tracing::debug!(%index, "selection cleared");
                    Outcome::REDRAW
                }
                None => Outcome::NONE,
            },
            Command::Scroll { rows, columns } => {
                let before = world.viewport.origin();
                world.viewport.scroll_by(rows, columns);
                redraw_if_moved(before, world.viewport.origin())
            }
            Command::Resize(size) => {
                tracing::info!(rows = size.rows, columns = size.columns, "viewport resized");
                world.viewport.resize(size);
                world.follow_selection();
                Outcome::REDRAW
            }
            Command::Regenerate => {
                world.regenerate(self.config.map.settlement_chance);
                let seed = world.seed();
                tracing::info!(seed, "map regenerated");
                self.messages
                    .push_text(format!("Regenerated map (seed {seed})"));
                Outcome::REDRAW
            }
            Command::Quit => Outcome::QUIT,
        };

        Ok(outcome)
    }
}

fn settle_selection(
    world: &mut World,
    messages: &mut MessageLog,
    result: Result<SelectionChange, HexError>,
) -> Outcome {
    match result {
        Ok(change) => {
            tracing::debug!(
                previous = ?change.previous,
                current = %change.current,
                "selection changed"
            );
            world.follow_selection();
            Outcome::REDRAW
        }
        Err(error) => {
            tracing::warn!(
                code = error.error_code(),
                severity = error.severity().as_str(),
                %error,
                "selection command rejected"
            );
            messages.push_error(&error);
            Outcome::REDRAW
        }
    }
}

fn redraw_if_moved(before: ScreenPosition, after: ScreenPosition) -> Outcome {
    if before == after {
        Outcome::NONE
    } else {
        Outcome::REDRAW
    }
}
