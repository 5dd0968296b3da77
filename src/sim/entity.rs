//! Player, meteor and bullet entities
//!
//! Every entity is a sprite-sized box with a top-left position and a visual
//! rotation. Motion is expressed per tick; the world supplies tick-rate
//! derived speeds.

use glam::DVec2;
use rand::Rng;

use super::collision::Aabb;
use super::tick::TickInput;
use super::timer::Timer;
use super::vector::{Vector, direction_to};
use crate::assets::{Assets, SpriteId};
use crate::consts::*;
use crate::renderer::{RenderSurface, sprite_transform};
use crate::settings::Settings;
use crate::{heading, polar_to_cartesian};

/// Shared capabilities of everything living in the world
pub trait Entity {
    /// Top-left corner in world coordinates
    fn position(&self) -> Vector;
    /// Visual rotation in radians (0 = up)
    fn rotation(&self) -> f64;
    fn sprite(&self) -> SpriteId;
    /// Sprite size in world units
    fn size(&self) -> DVec2;

    /// Upright bounding box; rotation is not applied
    fn collider(&self) -> Aabb {
        let pos = self.position();
        let size = self.size();
        Aabb::new(pos.x, pos.y, size.x, size.y)
    }

    fn draw(&self, surface: &mut dyn RenderSurface) {
        surface.draw_sprite(
            self.sprite(),
            sprite_transform(self.position(), self.size(), self.rotation()),
        );
    }
}

/// The player's ship
#[derive(Debug, Clone)]
pub struct Player {
    pub position: Vector,
    pub rotation: f64,
    size: DVec2,
    shoot_cooldown: Timer,
}

impl Player {
    /// Fresh ship centred in the play field, pointing up, cooldown not ready
    pub fn new(assets: &Assets, settings: &Settings) -> Self {
        let sprite = assets.player();
        let centre = DVec2::new(settings.field_width, settings.field_height) / 2.0;
        Self {
            position: centre - sprite.half_size(),
            rotation: 0.0,
            size: sprite.size(),
            shoot_cooldown: Timer::new(settings.shoot_cooldown(), settings.ticks_per_second),
        }
    }

    pub fn shoot_cooldown(&self) -> &Timer {
        &self.shoot_cooldown
    }

    /// Apply one tick of input; returns the bullet fired this tick, if any
    ///
    /// Both rotate inputs may be held at once and cancel out.
    pub fn update(&mut self, input: &TickInput, settings: &Settings, assets: &Assets) -> Option<Bullet> {
        let speed = settings.rotation_speed_per_tick();
        if input.rotate_left {
            self.rotation -= speed;
        }
        if input.rotate_right {
            self.rotation += speed;
        }

        self.shoot_cooldown.update();
        if !(self.shoot_cooldown.is_ready() && input.fire) {
            return None;
        }
        self.shoot_cooldown.reset();

        let bullet = Bullet::new(assets, self.bullet_spawn_point(), self.rotation);
        log::debug!(
            "Fired bullet at ({:.1}, {:.1}) rotation {:.3}",
            bullet.position.x,
            bullet.position.y,
            bullet.rotation
        );
        Some(bullet)
    }

    /// Where a new bullet appears
    ///
    /// The offset constant scales the rotation inside sin/cos rather than the
    /// heading, so the bullet lands within one unit of the sprite centre.
    pub fn bullet_spawn_point(&self) -> Vector {
        let half = self.size / 2.0;
        DVec2::new(
            self.position.x + half.x + (self.rotation * BULLET_SPAWN_OFFSET).sin(),
            self.position.y + half.y + (self.rotation * -BULLET_SPAWN_OFFSET).cos(),
        )
    }
}

impl Entity for Player {
    fn position(&self) -> Vector {
        self.position
    }

    fn rotation(&self) -> f64 {
        self.rotation
    }

    fn sprite(&self) -> SpriteId {
        SpriteId::Player
    }

    fn size(&self) -> DVec2 {
        self.size
    }
}

/// An inbound meteor
#[derive(Debug, Clone)]
pub struct Meteor {
    pub position: Vector,
    pub rotation: f64,
    /// Radians per tick
    pub rotation_speed: f64,
    /// World units per tick
    pub movement: Vector,
    variant: usize,
    size: DVec2,
}

impl Meteor {
    /// An out-of-range variant gets a zero-sized box
    pub fn new(assets: &Assets, variant: usize, position: Vector, movement: Vector, rotation_speed: f64) -> Self {
        let size = assets.meteor(variant).map(|s| s.size()).unwrap_or(DVec2::ZERO);
        Self {
            position,
            rotation: 0.0,
            rotation_speed,
            movement,
            variant,
            size,
        }
    }

    /// Random meteor on the spawn ring, heading for the field centre
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, assets: &Assets, field: DVec2) -> Self {
        let variant = rng.random_range(0..assets.meteor_variants());
        let angle = rng.random::<f64>() * std::f64::consts::TAU;
        let speed = METEOR_MIN_SPEED + rng.random::<f64>() * METEOR_SPEED_SPREAD;
        let spin = METEOR_MIN_SPIN + rng.random::<f64>() * METEOR_SPIN_SPREAD;
        Self::spawn_at_angle(assets, variant, field, angle, speed, spin)
    }

    /// Meteor on the spawn ring at `angle`, moving `speed` units per tick toward the centre
    pub fn spawn_at_angle(assets: &Assets, variant: usize, field: DVec2, angle: f64, speed: f64, spin: f64) -> Self {
        let target = field / 2.0;
        let ring_radius = field.x / 2.0;
        let position = target + polar_to_cartesian(ring_radius, angle);
        // The ring radius is positive, so the spawn point never sits on the target
        let movement = direction_to(position, target).unwrap_or(DVec2::ZERO) * speed;
        Self::new(assets, variant, position, movement, spin)
    }

    pub fn variant(&self) -> usize {
        self.variant
    }

    pub fn update(&mut self) {
        self.position += self.movement;
        self.rotation += self.rotation_speed;
    }
}

impl Entity for Meteor {
    fn position(&self) -> Vector {
        self.position
    }

    fn rotation(&self) -> f64 {
        self.rotation
    }

    fn sprite(&self) -> SpriteId {
        SpriteId::Meteor(self.variant)
    }

    fn size(&self) -> DVec2 {
        self.size
    }
}

/// A projectile fired by the player
///
/// Bullets have no lifetime: one that misses flies on forever.
#[derive(Debug, Clone)]
pub struct Bullet {
    pub position: Vector,
    /// Fixed at spawn
    pub rotation: f64,
    size: DVec2,
}

impl Bullet {
    pub fn new(assets: &Assets, position: Vector, rotation: f64) -> Self {
        Self {
            position,
            rotation,
            size: assets.bullet().size(),
        }
    }

    /// Move `speed` units along the heading
    pub fn update(&mut self, speed: f64) {
        self.position += heading(self.rotation) * speed;
    }
}

impl Entity for Bullet {
    fn position(&self) -> Vector {
        self.position
    }

    fn rotation(&self) -> f64 {
        self.rotation
    }

    fn sprite(&self) -> SpriteId {
        SpriteId::Bullet
    }

    fn size(&self) -> DVec2 {
        self.size
    }
}
