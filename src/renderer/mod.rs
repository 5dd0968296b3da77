//! Rendering contract
//!
//! The simulation never touches pixels. Each frame it hands every entity to a
//! `RenderSurface` as a sprite handle plus a transform; whatever sits behind
//! the surface (GPU, terminal, test recorder) decides how to draw it.

pub mod instance;

pub use instance::{DrawList, SpriteInstance};

use glam::{DAffine2, DVec2};

use crate::assets::SpriteId;

/// Something that can draw sprites
pub trait RenderSurface {
    /// `transform` maps sprite-local pixel coordinates to world coordinates
    fn draw_sprite(&mut self, sprite: SpriteId, transform: DAffine2);
}

/// Rotate a sprite about its centre, then move its top-left corner to `position`
pub fn sprite_transform(position: DVec2, size: DVec2, rotation: f64) -> DAffine2 {
    let half = size / 2.0;
    DAffine2::from_translation(position + half)
        * DAffine2::from_angle(rotation)
        * DAffine2::from_translation(-half)
}
