//! Platform abstraction layer
//!
//! Handles the pieces the simulation needs from its host:
//! - Input polling (`input`, `autopilot`)
//! - Fixed timestep scheduling (`timestep`)

pub mod autopilot;
pub mod input;
pub mod timestep;

pub use autopilot::autopilot_input;
pub use input::{Action, InputSource, ScriptedInput};
pub use timestep::FixedTimestep;
