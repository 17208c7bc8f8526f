//! Read-only projection of the game for rendering

use glam::Vec2;
use serde::Serialize;

use super::state::{GamePhase, GameState, Viewport};

/// Where an obstacle's gap is
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObstacleView {
    pub x: f32,
    pub top_height: f32,
    pub bottom_y: f32,
}

/// Everything a renderer needs for one frame. Owns its data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    /// Top-left corner of the bird sprite
    pub bird_position: Vec2,
    pub bird_radius: f32,
    pub score: u32,
    pub obstacles: Vec<ObstacleView>,
    pub obstacle_width: f32,
    pub viewport: Viewport,
}

/// Capture the current frame
pub fn snapshot(state: &GameState) -> Snapshot {
    Snapshot {
        phase: state.phase,
        bird_position: state.bird.pos,
        bird_radius: state.bird.radius,
        score: state.score,
        obstacles: state
            .obstacles
            .iter()
            .map(|o| ObstacleView {
                x: o.x,
                top_height: o.top_height,
                bottom_y: o.bottom_y,
            })
            .collect(),
        obstacle_width: state.config.obstacle_width,
        viewport: state.viewport,
    }
}
