//! Flappy Sim - a single-screen flap-through-the-pipes arcade game
//!
//! Core modules:
//! - `sim`: Simulation (bird physics, obstacles, collisions, game phases)
//! - `renderer`: Draw-list builder consumed by the host's renderer
//! - `platform`: Input adapter, frame clock and the browser host
//! - `config`: Data-driven game tuning

pub mod config;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;

/// Game configuration constants
pub mod consts {
    /// Duration of one reference frame in seconds (60 Hz display refresh)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest wall-clock gap fed into the clock at once (tab switches etc.)
    pub const MAX_FRAME_DELTA: f32 = 0.1;

    /// Downward acceleration per frame²
    pub const GRAVITY: f32 = 0.6;
    /// Velocity set by a flap (negative = up)
    pub const LIFT: f32 = -12.0;

    /// Bird defaults - x is the sprite's left edge and never changes
    pub const BIRD_X: f32 = 100.0;
    pub const BIRD_RADIUS: f32 = 24.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 200.0;
    pub const GAP_SIZE: f32 = 180.0;
    pub const OBSTACLE_SPEED: f32 = 3.0;
    /// Distance from the right edge the newest obstacle must clear before the next spawns
    pub const SPAWN_THRESHOLD: f32 = 300.0;
    /// Smallest top-pipe height
    pub const MIN_MARGIN: f32 = 50.0;
}
