//! 2D vector helpers
//!
//! Positions and velocities are `glam::DVec2` (f64, matching the tick-rate
//! derived constants). Only the normalization used by spawn logic lives here.

use glam::DVec2;

pub type Vector = DVec2;

/// Unit vector pointing from `from` to `to`, or `None` if the points coincide
#[inline]
pub fn direction_to(from: Vector, to: Vector) -> Option<Vector> {
    (to - from).try_normalize()
}
