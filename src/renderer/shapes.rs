//! Draw lists for a frame: rectangles plus HUD text

use glam::Vec2;
use serde::Serialize;

use super::vertex::{Instance, Palette};
use crate::sim::{GamePhase, Snapshot};

/// A line of HUD text. `pos` is the left end of the baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextItem {
    pub text: String,
    pub pos: Vec2,
    /// Font size in pixels
    pub size: f32,
    pub color: [f32; 4],
}

impl TextItem {
    fn new(text: impl Into<String>, x: f32, y: f32, size: f32, color: [f32; 4]) -> Self {
        Self {
            text: text.into(),
            pos: Vec2::new(x, y),
            size,
            color,
        }
    }
}

/// Rectangles for the whole scene, back to front
pub fn scene_instances(snapshot: &Snapshot, palette: &Palette) -> Vec<Instance> {
    let viewport = Vec2::new(snapshot.viewport.width, snapshot.viewport.height);
    let mut instances = Vec::with_capacity(2 + snapshot.obstacles.len() * 2);

    instances.push(Instance::new(Vec2::ZERO, viewport, palette.background));

    let width = snapshot.obstacle_width;
    for obstacle in &snapshot.obstacles {
        instances.push(Instance::new(
            Vec2::new(obstacle.x, 0.0),
            Vec2::new(width, obstacle.top_height),
            palette.pipe_top,
        ));
        instances.push(Instance::new(
            Vec2::new(obstacle.x, obstacle.bottom_y),
            Vec2::new(width, viewport.y - obstacle.bottom_y),
            palette.pipe_bottom,
        ));
    }

    instances.push(Instance::new(
        snapshot.bird_position,
        Vec2::splat(snapshot.bird_radius * 2.0),
        palette.bird,
    ));

    instances
}

/// Score line plus the phase banner
pub fn hud_text(snapshot: &Snapshot, palette: &Palette) -> Vec<TextItem> {
    let cx = snapshot.viewport.width / 2.0;
    let cy = snapshot.viewport.height / 2.0;

    let mut items = Vec::with_capacity(3);
    match snapshot.phase {
        GamePhase::Idle => {
            items.push(TextItem::new(
                "Tap or Press Space to Start",
                cx - 140.0,
                cy,
                30.0,
                palette.text,
            ));
        }
        GamePhase::Playing => {}
        GamePhase::GameOver => {
            items.push(TextItem::new("Game Over!", cx - 100.0, cy, 40.0, palette.game_over_text));
            items.push(TextItem::new(
                "Tap to Restart",
                cx - 100.0,
                cy + 50.0,
                40.0,
                palette.game_over_text,
            ));
        }
    }
    items.push(TextItem::new(
        format!("Score: {}", snapshot.score),
        20.0,
        50.0,
        25.0,
        palette.text,
    ));

    items
}
