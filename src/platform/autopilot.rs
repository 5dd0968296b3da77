//! Demo autopilot
//!
//! Turns the ship toward the nearest meteor and fires once roughly on target.
//! Used by the headless runner; stands in for a human at the keyboard.

use glam::DVec2;

use crate::normalize_angle;
use crate::sim::{Entity, TickInput, World};

/// Heading error (radians) below which the autopilot holds fire
const AIM_TOLERANCE: f64 = 0.05;

/// Rotation that points the ship's nose at `target` from `origin`
pub fn aim_rotation(origin: DVec2, target: DVec2) -> f64 {
    let d = target - origin;
    d.x.atan2(-d.y)
}

/// Input the autopilot would give for the current world state
pub fn autopilot_input(world: &World) -> TickInput {
    let ship = world.player.position() + world.player.size() / 2.0;
    let nearest = world
        .meteors
        .iter()
        .map(|m| m.position() + m.size() / 2.0)
        .min_by(|a, b| {
            a.distance_squared(ship)
                .partial_cmp(&b.distance_squared(ship))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let Some(target) = nearest else {
        return TickInput::default();
    };

    let error = normalize_angle(aim_rotation(ship, target) - world.player.rotation);
    let step = world.settings.rotation_speed_per_tick();
    TickInput {
        rotate_left: error < -step / 2.0,
        rotate_right: error > step / 2.0,
        fire: error.abs() < AIM_TOLERANCE.max(step),
    }
}
