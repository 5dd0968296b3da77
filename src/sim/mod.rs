//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod state;
pub mod tick;
pub mod timer;
pub mod vector;

pub use collision::{Aabb, remove_colliding};
pub use entity::{Bullet, Entity, Meteor, Player};
pub use state::{GameEvent, World};
pub use tick::{TickInput, tick};
pub use timer::Timer;
pub use vector::{Vector, direction_to};
