//! Input polling

use std::collections::HashSet;

use crate::sim::TickInput;

/// Logical inputs the game reads each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    RotateLeft,
    RotateRight,
    Fire,
}

/// Host keyboard/gamepad state, queried synchronously once per tick
pub trait InputSource {
    fn is_pressed(&self, action: Action) -> bool;
}

impl TickInput {
    /// Sample every action from the input source
    pub fn poll(source: &dyn InputSource) -> Self {
        Self {
            rotate_left: source.is_pressed(Action::RotateLeft),
            rotate_right: source.is_pressed(Action::RotateRight),
            fire: source.is_pressed(Action::Fire),
        }
    }
}

/// Input source with a fixed set of held actions (headless runs, tests)
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    held: HashSet<Action>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, action: Action) {
        self.held.insert(action);
    }

    pub fn release(&mut self, action: Action) {
        self.held.remove(&action);
    }
}

impl InputSource for ScriptedInput {
    fn is_pressed(&self, action: Action) -> bool {
        self.held.contains(&action)
    }
}
