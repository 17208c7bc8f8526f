//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Time only advances through `tick`
//! - Seeded RNG only
//! - Obstacles kept in spawn order
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod kinematics;
pub mod obstacles;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{boundary_hit, is_colliding};
pub use snapshot::{ObstacleView, Snapshot, snapshot};
pub use state::{Bird, CrashCause, GameEvent, GamePhase, GameState, Obstacle, Viewport};
pub use tick::{flap, resize, tick};
