//! World state
//!
//! The world exclusively owns every entity and timer. Nothing outside
//! `tick` mutates it during a frame.

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entity::{Bullet, Entity, Meteor, Player};
use super::timer::Timer;
use crate::assets::Assets;
use crate::error::Result;
use crate::renderer::RenderSurface;
use crate::settings::Settings;

/// Something that happened during a tick (for logging, audio cues, HUD)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    BulletFired,
    MeteorSpawned,
    /// Meteors and bullets removed by the collision pass
    MeteorsDestroyed { meteors: usize, bullets: usize },
    /// A meteor reached the ship; the world was reset
    PlayerDestroyed,
}

/// Complete game world
#[derive(Debug, Clone)]
pub struct World {
    pub settings: Settings,
    pub(crate) assets: Assets,
    /// Exactly one ship; replaced wholesale on reset
    pub player: Player,
    /// Active meteors in spawn order
    pub meteors: Vec<Meteor>,
    /// Active bullets in fire order
    pub bullets: Vec<Bullet>,
    pub(crate) meteor_spawn_timer: Timer,
    pub(crate) rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Number of resets since the world was created
    pub resets: u32,
}

impl World {
    /// Create a world from settings and a loaded sprite registry
    ///
    /// Settings are validated here, so a zero tick rate or an empty play
    /// field never reaches the per-tick arithmetic.
    pub fn new(settings: Settings, assets: Assets) -> Result<Self> {
        settings.validate()?;
        let player = Player::new(&assets, &settings);
        let meteor_spawn_timer = Timer::new(settings.meteor_spawn_interval(), settings.ticks_per_second);
        let rng = Pcg32::seed_from_u64(settings.seed);
        log::info!(
            "World created: {}x{} field, {} Hz, seed {}",
            settings.field_width,
            settings.field_height,
            settings.ticks_per_second,
            settings.seed
        );
        Ok(Self {
            settings,
            assets,
            player,
            meteors: Vec::new(),
            bullets: Vec::new(),
            meteor_spawn_timer,
            rng,
            time_ticks: 0,
            resets: 0,
        })
    }

    pub fn assets(&self) -> &Assets {
        &self.assets
    }

    pub fn meteor_spawn_timer(&self) -> &Timer {
        &self.meteor_spawn_timer
    }

    pub fn field_size(&self) -> DVec2 {
        DVec2::new(self.settings.field_width, self.settings.field_height)
    }

    pub fn add_bullet(&mut self, bullet: Bullet) {
        self.bullets.push(bullet);
    }

    /// Append one random meteor on the spawn ring
    pub fn spawn_meteor(&mut self) {
        let field = self.field_size();
        let meteor = Meteor::spawn(&mut self.rng, &self.assets, field);
        log::debug!(
            "Meteor spawned at ({:.1}, {:.1}) variant {}",
            meteor.position.x,
            meteor.position.y,
            meteor.variant()
        );
        self.meteors.push(meteor);
    }

    /// Clear every meteor and bullet and put a brand-new ship at the start
    ///
    /// The meteor spawn timer keeps running from wherever it was.
    pub fn reset(&mut self) {
        self.player = Player::new(&self.assets, &self.settings);
        self.meteors.clear();
        self.bullets.clear();
        self.resets += 1;
        log::info!("World reset at tick {} (reset #{})", self.time_ticks, self.resets);
    }

    /// Draw the player, then meteors, then bullets
    pub fn draw(&self, surface: &mut dyn RenderSurface) {
        self.player.draw(surface);
        for meteor in &self.meteors {
            meteor.draw(surface);
        }
        for bullet in &self.bullets {
            bullet.draw(surface);
        }
    }
}
