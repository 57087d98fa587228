//! Visible window onto the full rendered surface.
//!
//! The viewport keeps its origin clamped so the window never leaves the
//! surface, and implements the soft-follow camera: a followed point may drift
//! anywhere inside the comfort band before the window starts to pan.

use crate::address::{Extent, ScreenPosition};
use crate::config::FollowBand;

/// Position of a point relative to the visible window, in percent.
///
/// Values below 0 or above 100 mean the point is off-screen on that side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RelativePosition {
    pub row: i64,
    pub column: i64,
}

/// How a single axis ended up after following a target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisStatus {
    /// The target sits inside the comfort band.
    InBand,
    /// The band was not reached because the origin hit a clamp boundary.
    Pinned,
    /// One more unit would jump past the whole band (windows narrower than
    /// the band resolution).
    Unreachable,
}

/// Outcome of a single [`Viewport::step_toward`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// At least one axis moved by one unit.
    Moved,
    /// Nothing left to do on either axis.
    Done { rows: AxisStatus, columns: AxisStatus },
}

/// Summary of a completed [`Viewport::scroll_toward`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollReport {
    pub steps: u32,
    pub rows: AxisStatus,
    pub columns: AxisStatus,
}

impl ScrollReport {
    pub const fn moved(&self) -> bool {
        self.steps > 0
    }

    /// True when the target ended inside the band on both axes.
    pub fn settled(&self) -> bool {
        self.rows == AxisStatus::InBand && self.columns == AxisStatus::InBand
    }
}

/// Scrollable window of `size` cells over a surface of `surface` cells.
///
/// Invariant: `0 <= origin <= surface - size` on each axis, with the origin
/// pinned to 0 on any axis where the surface is smaller than the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    origin: ScreenPosition,
    size: Extent,
    surface: Extent,
}

impl Viewport {
    pub fn new(size: Extent, surface: Extent) -> Self {
        Self {
            origin: ScreenPosition::ORIGIN,
            size,
            surface,
        }
    }

    pub const fn origin(&self) -> ScreenPosition {
        self.origin
    }

    pub const fn size(&self) -> Extent {
        self.size
    }

    pub const fn surface(&self) -> Extent {
        self.surface
    }

    /// Largest origin the clamp allows.
    pub fn max_origin(&self) -> ScreenPosition {
        ScreenPosition::new(
            max_offset(self.surface.rows, self.size.rows),
            max_offset(self.surface.columns, self.size.columns),
        )
    }

    /// Upper bound on the number of steps a single follow can take.
    pub fn step_limit(&self) -> u32 {
        self.surface.rows.max(self.surface.columns)
    }

    /// Changes the window size and re-clamps the origin.
    pub fn resize(&mut self, size: Extent) {
        self.size = size;
        self.clamp();
    }

    /// Replaces the surface (after a grid rebuild) and re-clamps the origin.
    pub fn set_surface(&mut self, surface: Extent) {
        self.surface = surface;
        self.clamp();
    }

    pub fn set_origin(&mut self, row: i64, column: i64) {
        self.origin = ScreenPosition::new(row, column);
        self.clamp();
    }

    pub fn scroll_by(&mut self, d_row: i64, d_column: i64) {
        self.set_origin(
            self.origin.row.saturating_add(d_row),
            self.origin.column.saturating_add(d_column),
        );
    }

    /// True if `position` falls inside the visible window.
    pub fn contains(&self, position: ScreenPosition) -> bool {
        let local = self.to_local(position);
        (0..i64::from(self.size.rows)).contains(&local.row)
            && (0..i64::from(self.size.columns)).contains(&local.column)
    }

    /// Translates a surface position into window coordinates.
    pub const fn to_local(&self, position: ScreenPosition) -> ScreenPosition {
        ScreenPosition::new(
            position.row - self.origin.row,
            position.column - self.origin.column,
        )
    }

    pub fn relative_position(&self, position: ScreenPosition) -> RelativePosition {
        let local = self.to_local(position);
        RelativePosition {
            row: percent(local.row, self.size.rows),
            column: percent(local.column, self.size.columns),
        }
    }

    /// Nudges the origin one unit per out-of-band axis toward `target`.
    pub fn step_toward(&mut self, target: ScreenPosition, band: FollowBand) -> Step {
        let max = self.max_origin();
        let rows = axis_nudge(target.row, self.origin.row, self.size.rows, max.row, band);
        let columns = axis_nudge(
            target.column,
            self.origin.column,
            self.size.columns,
            max.column,
            band,
        );

        match (rows, columns) {
            (Err(rows), Err(columns)) => Step::Done { rows, columns },
            (rows, columns) => {
                self.scroll_by(rows.unwrap_or(0), columns.unwrap_or(0));
                Step::Moved
            }
        }
    }

    /// Pans until `target` is inside the band on both axes or cannot get
    /// closer. Takes at most [`Viewport::step_limit`] steps.
    ///
    /// Each axis ends in one of three states. `InBand` and `Pinned` (origin
    /// at 0 or at the clamp limit) are the usual outcomes. On windows too
    /// narrow for the band, where a single cell of scroll moves the target
    /// from below `band.low()` to above `band.high()` (a 1-cell axis, for
    /// instance), the axis stops as `Unreachable`: the target is left
    /// outside the band without the origin being pinned.
    pub fn scroll_toward(&mut self, target: ScreenPosition, band: FollowBand) -> ScrollReport {
        let mut steps = 0;
        loop {
            match self.step_toward(target, band) {
                Step::Moved => {
                    steps += 1;
                    debug_assert!(steps <= self.step_limit(), "follow exceeded step bound");
                }
                Step::Done { rows, columns } => {
                    return ScrollReport {
                        steps,
                        rows,
                        columns,
                    };
                }
            }
        }
    }

    fn clamp(&mut self) {
        let max = self.max_origin();
        self.origin = ScreenPosition::new(
            self.origin.row.clamp(0, max.row),
            self.origin.column.clamp(0, max.column),
        );
    }
}

fn max_offset(surface: u32, size: u32) -> i64 {
    i64::from(surface.saturating_sub(size))
}

/// Percent of `offset` within `size`; an empty axis reports the midpoint so
/// it never asks for a scroll.
fn percent(offset: i64, size: u32) -> i64 {
    if size == 0 {
        return 50;
    }
    offset.saturating_mul(100).div_euclid(i64::from(size))
}

/// One-unit origin delta that brings `target` toward the band, or the reason
/// the axis should not move.
fn axis_nudge(
    target: i64,
    origin: i64,
    size: u32,
    max_origin: i64,
    band: FollowBand,
) -> Result<i64, AxisStatus> {
    let current = percent(target - origin, size);
    if band.contains(current) {
        return Err(AxisStatus::InBand);
    }

    let delta = if current < band.low() { -1 } else { 1 };
    let next = origin + delta;
    if !(0..=max_origin).contains(&next) {
        return Err(AxisStatus::Pinned);
    }

    let after = percent(target - next, size);
    let overshoots = if delta < 0 {
        after > band.high()
    } else {
        after < band.low()
    };
    if overshoots {
        Err(AxisStatus::Unreachable)
    } else {
        Ok(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(Extent::new(20, 40), Extent::new(100, 200))
    }

    #[test]
    fn set_origin_clamps_extreme_values() {
        let mut view = viewport();
        view.set_origin(-1_000_000, 1_000_000);
        assert_eq!(view.origin(), ScreenPosition::new(0, 160));

        view.set_origin(1_000_000, -1_000_000);
        assert_eq!(view.origin(), ScreenPosition::new(80, 0));
    }

    #[test]
    fn origin_pinned_when_surface_is_smaller_than_window() {
        let mut view = Viewport::new(Extent::new(50, 50), Extent::new(10, 80));
        view.set_origin(5, 100);
        assert_eq!(view.origin(), ScreenPosition::new(0, 30));
    }

    #[test]
    fn resize_reclamps_origin() {
        let mut view = viewport();
        view.set_origin(80, 160);
        view.resize(Extent::new(30, 60));
        assert_eq!(view.origin(), ScreenPosition::new(70, 140));
    }

    #[test]
    fn set_surface_reclamps_origin() {
        let mut view = viewport();
        view.set_origin(80, 160);
        view.set_surface(Extent::new(30, 30));
        assert_eq!(view.origin(), ScreenPosition::new(10, 0));
    }

    #[test]
    fn scroll_by_saturates() {
        let mut view = viewport();
        view.scroll_by(i64::MAX, i64::MIN);
        assert_eq!(view.origin(), ScreenPosition::new(80, 0));
    }

    #[test]
    fn relative_position_is_percent_of_window() {
        let mut view = viewport();
        view.set_origin(10, 20);
        assert_eq!(
            view.relative_position(ScreenPosition::new(15, 30)),
            RelativePosition { row: 25, column: 25 }
        );
        assert_eq!(
            view.relative_position(ScreenPosition::new(0, 0)),
            RelativePosition {
                row: -50,
                column: -50
            }
        );
        assert!(view.contains(ScreenPosition::new(29, 59)));
        assert!(!view.contains(ScreenPosition::new(30, 59)));
    }

    #[test]
    fn target_inside_band_does_not_scroll() {
        let mut view = viewport();
        let report = view.scroll_toward(ScreenPosition::new(10, 20), FollowBand::STANDARD);
        assert_eq!(report.steps, 0);
        assert!(report.settled());
        assert_eq!(view.origin(), ScreenPosition::ORIGIN);
    }

    #[test]
    fn scroll_toward_stops_at_band_edge() {
        let mut view = viewport();
        let target = ScreenPosition::new(90, 180);
        let report = view.scroll_toward(target, FollowBand::STANDARD);

        assert_eq!(view.origin(), ScreenPosition::new(75, 150));
        assert_eq!(report.steps, 150);
        assert!(report.settled());
        assert_eq!(
            view.relative_position(target),
            RelativePosition { row: 75, column: 75 }
        );
    }

    #[test]
    fn scroll_toward_reports_pinned_axes() {
        let mut view = viewport();
        let report = view.scroll_toward(ScreenPosition::new(99, 10), FollowBand::STANDARD);

        assert_eq!(view.origin(), ScreenPosition::new(80, 0));
        assert_eq!(report.rows, AxisStatus::Pinned);
        assert_eq!(report.columns, AxisStatus::InBand);
    }

    #[test]
    fn scroll_toward_pans_back_up() {
        let mut view = viewport();
        view.set_origin(80, 160);
        let report = view.scroll_toward(ScreenPosition::new(40, 100), FollowBand::STANDARD);

        // the target lands on the low edge of the band on both axes
        assert_eq!(view.origin(), ScreenPosition::new(35, 90));
        assert_eq!(
            view.relative_position(ScreenPosition::new(40, 100)),
            RelativePosition { row: 25, column: 25 }
        );
        assert!(report.settled());
    }

    #[test]
    fn single_cell_window_is_unreachable_not_endless() {
        let mut view = Viewport::new(Extent::new(1, 1), Extent::new(10, 10));
        let report = view.scroll_toward(ScreenPosition::new(5, 5), FollowBand::STANDARD);
        assert_eq!(report.rows, AxisStatus::Unreachable);
        assert_eq!(report.columns, AxisStatus::Unreachable);
        assert!(report.steps <= view.step_limit());

        // stopped one cell short: outside the band, yet not at a clamp edge
        assert_eq!(view.origin(), ScreenPosition::new(4, 4));
        assert_ne!(view.origin(), view.max_origin());
        let relative = view.relative_position(ScreenPosition::new(5, 5));
        assert!(!FollowBand::STANDARD.contains(relative.row));
        assert!(!report.settled());
    }

    #[test]
    fn step_toward_moves_one_unit_per_axis() {
        let mut view = viewport();
        assert_eq!(
            view.step_toward(ScreenPosition::new(90, 180), FollowBand::STANDARD),
            Step::Moved
        );
        assert_eq!(view.origin(), ScreenPosition::new(1, 1));
    }
}
