//! Meteor Rush - A single-screen arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, world tick)
//! - `assets`: Sprite registry built once at startup
//! - `renderer`: Render surface contract and sprite instance lists
//! - `platform`: Input polling and fixed timestep scheduling
//! - `settings`: Data-driven configuration

pub mod assets;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use assets::{Assets, SpriteId, SpriteInfo};
pub use error::{Error, Result};
pub use settings::Settings;

use glam::DVec2;

/// Game configuration constants
pub mod consts {
    /// Play field dimensions
    pub const SCREEN_WIDTH: f64 = 800.0;
    pub const SCREEN_HEIGHT: f64 = 600.0;

    /// Fixed simulation rate
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Bullet speed in world units per second (divided by the tick rate)
    pub const BULLET_SPEED: f64 = 350.0;
    /// Player rotation speed in radians per second
    pub const PLAYER_ROTATION_SPEED: f64 = std::f64::consts::PI;
    /// Multiplier applied to the player's rotation when placing a new bullet
    pub const BULLET_SPAWN_OFFSET: f64 = 50.0;

    /// Meteor speed range, world units per tick
    pub const METEOR_MIN_SPEED: f64 = 0.25;
    pub const METEOR_SPEED_SPREAD: f64 = 1.5;
    /// Meteor spin range, radians per tick
    pub const METEOR_MIN_SPIN: f64 = -0.02;
    pub const METEOR_SPIN_SPREAD: f64 = 0.04;

    /// Timer defaults
    pub const SHOOT_COOLDOWN_MS: u64 = 1000;
    pub const METEOR_SPAWN_INTERVAL_MS: u64 = 1000;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f64) -> f64 {
    use std::f64::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}

/// Unit heading for a sprite rotation in screen space (0 = up, clockwise positive)
#[inline]
pub fn heading(rotation: f64) -> DVec2 {
    DVec2::new(rotation.sin(), -rotation.cos())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_heading_zero_is_up() {
        let h = heading(0.0);
        assert!(h.x.abs() < 1e-12);
        assert!((h.y + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_heading_quarter_turn_is_right() {
        let h = heading(FRAC_PI_2);
        assert!((h.x - 1.0).abs() < 1e-12);
        assert!(h.y.abs() < 1e-12);
    }

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(3.0 * PI + 0.5) - (0.5 - PI)).abs() < 1e-9);
        assert!((normalize_angle(-FRAC_PI_2) + FRAC_PI_2).abs() < 1e-12);
        assert!((normalize_angle(4.0 * PI + 0.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_polar_to_cartesian() {
        let p = polar_to_cartesian(10.0, PI);
        assert!((p.x + 10.0).abs() < 1e-9);
        assert!(p.y.abs() < 1e-9);
    }
}
