//! Fixed-timestep frame clock

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

/// Turns variable frame times into a count of fixed `SIM_DT` ticks
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    accumulator: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one frame's elapsed time and return how many ticks are due.
    ///
    /// At most `MAX_SUBSTEPS` ticks run per frame; time beyond that is
    /// dropped so a slow stretch never replays at high speed afterwards.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut ticks = 0;
        while self.accumulator >= SIM_DT && ticks < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            ticks += 1;
        }

        if self.accumulator >= SIM_DT {
            log::debug!("Dropping {:.3}s of simulation backlog", self.accumulator);
            self.accumulator = 0.0;
        }

        ticks
    }

    /// Unspent time carried into the next frame
    pub fn backlog(&self) -> f32 {
        self.accumulator
    }
}
