//! Platform abstraction layer
//!
//! Handles the host side of the game:
//! - Input events to flap intent
//! - Frame timestamps to simulation steps
//! - Browser bindings (wasm32 only)

pub mod clock;
pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use clock::{FrameClock, Steps};
pub use input::{FlapLatch, InputEvent};

use crate::sim::{GameState, flap, tick};

/// Run one host frame: apply the latched flap, then the clock's ticks
pub fn run_frame(state: &mut GameState, latch: &mut FlapLatch, clock: &mut FrameClock, now_ms: f64) {
    if latch.take() {
        flap(state);
    }

    let steps = clock.advance(now_ms);
    for _ in 0..steps.count {
        tick(state, steps.dt);
    }
}
