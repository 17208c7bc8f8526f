//! Instance types for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// One axis-aligned coloured rectangle (screen space, top-left origin)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Instance {
    pub pos: [f32; 2],
    pub size: [f32; 2],
    pub color: [f32; 4],
}

impl Instance {
    /// Floats per instance in a packed buffer
    pub const STRIDE: usize = 8;

    pub fn new(pos: Vec2, size: Vec2, color: [f32; 4]) -> Self {
        Self {
            pos: pos.to_array(),
            size: size.max(Vec2::ZERO).to_array(),
            color,
        }
    }

    /// View a list of instances as the flat float buffer a GPU upload wants
    pub fn as_floats(instances: &[Instance]) -> &[f32] {
        bytemuck::cast_slice(instances)
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.53, 0.81, 0.92, 1.0]; // Sky blue
    pub const PIPE_TOP: [f32; 4] = [0.18, 0.77, 0.25, 1.0];
    pub const PIPE_BOTTOM: [f32; 4] = [0.11, 0.54, 0.17, 1.0];
    pub const BIRD: [f32; 4] = [0.98, 0.80, 0.16, 1.0];
    pub const TEXT: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const GAME_OVER_TEXT: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
}

/// Colour scheme handed to the draw-list builder
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: [f32; 4],
    pub pipe_top: [f32; 4],
    pub pipe_bottom: [f32; 4],
    pub bird: [f32; 4],
    pub text: [f32; 4],
    pub game_over_text: [f32; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: colors::BACKGROUND,
            pipe_top: colors::PIPE_TOP,
            pipe_bottom: colors::PIPE_BOTTOM,
            bird: colors::BIRD,
            text: colors::TEXT,
            game_over_text: colors::GAME_OVER_TEXT,
        }
    }
}
