//! Fixed timestep simulation tick
//!
//! Order within a tick is fixed: player, meteor spawn, meteor motion, bullet
//! motion, bullet/meteor collisions, player/meteor check.

use super::collision::remove_colliding;
use super::entity::Entity;
use super::state::{GameEvent, World};

/// Input sampled for a single tick
///
/// Held inputs are observed on every tick they are held; nothing is queued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub fire: bool,
}

/// Advance the world by one tick and report what happened
pub fn tick(state: &mut World, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    if let Some(bullet) = state.player.update(input, &state.settings, &state.assets) {
        state.add_bullet(bullet);
        events.push(GameEvent::BulletFired);
    }

    state.meteor_spawn_timer.update();
    if state.meteor_spawn_timer.is_ready() {
        state.meteor_spawn_timer.reset();
        state.spawn_meteor();
        events.push(GameEvent::MeteorSpawned);
    }

    for meteor in &mut state.meteors {
        meteor.update();
    }

    let bullet_speed = state.settings.bullet_speed_per_tick();
    for bullet in &mut state.bullets {
        bullet.update(bullet_speed);
    }

    let meteors_before = state.meteors.len();
    let bullets_before = state.bullets.len();
    if remove_colliding(&mut state.meteors, &mut state.bullets) > 0 {
        let meteors = meteors_before - state.meteors.len();
        let bullets = bullets_before - state.bullets.len();
        log::debug!("Collision pass destroyed {meteors} meteors and {bullets} bullets");
        events.push(GameEvent::MeteorsDestroyed { meteors, bullets });
    }

    let player_box = state.player.collider();
    if state.meteors.iter().any(|m| m.collider().intersects(&player_box)) {
        state.reset();
        events.push(GameEvent::PlayerDestroyed);
    }

    events
}

impl World {
    /// Advance one tick; see [`tick`]
    pub fn update(&mut self, input: &TickInput) -> Vec<GameEvent> {
        tick(self, input)
    }
}
