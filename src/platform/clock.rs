//! Host timestamps to simulation steps
//!
//! The display callback fires at whatever rate the browser picks. In fixed
//! mode the clock hands out whole reference frames from an accumulator; in
//! variable mode it hands out one step sized to the measured frame time.

use crate::consts::{MAX_FRAME_DELTA, MAX_SUBSTEPS, SIM_DT};

/// Steps to run for one host frame: `count` ticks of `dt` frames each
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Steps {
    pub count: u32,
    pub dt: f32,
}

impl Steps {
    pub const NONE: Steps = Steps { count: 0, dt: 0.0 };
}

#[derive(Debug, Clone)]
pub struct FrameClock {
    fixed_step: bool,
    last_ms: Option<f64>,
    accumulator: f32,
}

impl FrameClock {
    pub fn new(fixed_step: bool) -> Self {
        Self {
            fixed_step,
            last_ms: None,
            accumulator: 0.0,
        }
    }

    /// Feed the host's frame timestamp (milliseconds)
    pub fn advance(&mut self, now_ms: f64) -> Steps {
        if !now_ms.is_finite() {
            return Steps::NONE;
        }
        let Some(last) = self.last_ms.replace(now_ms) else {
            return Steps::NONE;
        };

        let elapsed = ((now_ms - last) / 1000.0) as f32;
        if !elapsed.is_finite() || elapsed <= 0.0 {
            return Steps::NONE;
        }
        let elapsed = elapsed.min(MAX_FRAME_DELTA);

        if !self.fixed_step {
            return Steps {
                count: 1,
                dt: elapsed / SIM_DT,
            };
        }

        self.accumulator += elapsed;
        let mut count = 0;
        while self.accumulator >= SIM_DT && count < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            count += 1;
        }
        Steps { count, dt: 1.0 }
    }
}
