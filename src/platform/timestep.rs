//! Fixed timestep accumulator
//!
//! Converts variable frame times into a whole number of simulation ticks.

use crate::consts::MAX_SUBSTEPS;

#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step: f64,
    accumulator: f64,
}

impl FixedTimestep {
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            step: 1.0 / ticks_per_second.max(1) as f64,
            accumulator: 0.0,
        }
    }

    /// Add a frame's elapsed seconds; returns how many ticks to run now
    ///
    /// At most `MAX_SUBSTEPS` ticks run per frame. Time beyond that is dropped
    /// so a long stall cannot snowball into ever longer frames.
    pub fn advance(&mut self, frame_dt: f64) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, 0.1);

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < MAX_SUBSTEPS {
            self.accumulator -= self.step;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS && self.accumulator >= self.step {
            log::debug!("Dropping {:.3}s of simulation backlog", self.accumulator);
            self.accumulator = 0.0;
        }
        substeps
    }
}
