//! Collision detection
//!
//! The bird is a circle whose bounding box starts at `bird.pos`. Pipes are
//! tested as a single vertical gap check while the bird's centre is between
//! the pipe's left and right edges, so corners can give false positives.

use super::state::{Bird, CrashCause, Obstacle};

/// Check if the bird hits the top or bottom pipe of `obstacle`
pub fn is_colliding(bird: &Bird, obstacle: &Obstacle, obstacle_width: f32) -> bool {
    let center = bird.center();

    let within_x = center.x > obstacle.x && center.x < obstacle.x + obstacle_width;
    if !within_x {
        return false;
    }

    let hits_top = center.y - bird.radius < obstacle.top_height;
    let hits_bottom = center.y + bird.radius > obstacle.bottom_y;
    hits_top || hits_bottom
}

/// Check if the bird has left the playfield vertically
pub fn boundary_hit(bird: &Bird, viewport_height: f32) -> Option<CrashCause> {
    if bird.pos.y + bird.radius >= viewport_height {
        Some(CrashCause::Floor)
    } else if bird.pos.y - bird.radius <= 0.0 {
        Some(CrashCause::Ceiling)
    } else {
        None
    }
}
