//! Tick-counting countdown timer
//!
//! Durations are converted to whole ticks up front so readiness never depends
//! on floating point accumulation.

use std::time::Duration;

/// Cooldown / countdown driven by the simulation tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer {
    target_ticks: u32,
    current_ticks: u32,
}

impl Timer {
    /// Timer for `duration` at the given tick rate (starts not ready)
    pub fn new(duration: Duration, ticks_per_second: u32) -> Self {
        let ticks = duration.as_millis() * ticks_per_second as u128 / 1000;
        Self::from_ticks(u32::try_from(ticks).unwrap_or(u32::MAX))
    }

    pub fn from_ticks(target_ticks: u32) -> Self {
        Self {
            target_ticks,
            current_ticks: 0,
        }
    }

    /// Advance by one tick; elapsed time stops growing once the timer is ready
    #[inline]
    pub fn update(&mut self) {
        if self.current_ticks < self.target_ticks {
            self.current_ticks += 1;
        }
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.current_ticks >= self.target_ticks
    }

    #[inline]
    pub fn reset(&mut self) {
        self.current_ticks = 0;
    }

    pub fn target_ticks(&self) -> u32 {
        self.target_ticks
    }

    pub fn elapsed_ticks(&self) -> u32 {
        self.current_ticks
    }
}
