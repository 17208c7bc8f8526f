//! Obstacle spawning, scrolling and recycling
//!
//! Operates on the obstacle list owned by `GameState`. Pipes are kept in
//! spawn order; since all of them move at the same speed this is also
//! right-to-left order of their `x` (newest last, rightmost).

use rand::Rng;

use super::state::Obstacle;

/// Create a pipe pair at the right edge of the viewport.
///
/// The top pipe's height is drawn uniformly from
/// `[min_margin, viewport_height / 2 + min_margin)`, whole units only.
pub fn spawn<R: Rng + ?Sized>(
    rng: &mut R,
    viewport_width: f32,
    viewport_height: f32,
    gap_size: f32,
    min_margin: f32,
) -> Obstacle {
    let span = viewport_height / 2.0;
    let offset = if span > 0.0 {
        rng.random_range(0.0..span).floor()
    } else {
        0.0
    };
    let top_height = offset + min_margin;

    Obstacle {
        x: viewport_width,
        top_height,
        bottom_y: top_height + gap_size,
        scored: false,
    }
}

/// Scroll every obstacle left by `distance`
pub fn advance(obstacles: &mut [Obstacle], distance: f32) {
    for obstacle in obstacles.iter_mut() {
        obstacle.x -= distance;
    }
}

/// Drop obstacles whose trailing edge has left the screen. Order is preserved.
pub fn prune(obstacles: &mut Vec<Obstacle>, obstacle_width: f32) {
    obstacles.retain(|o| o.x + obstacle_width > 0.0);
}

/// True when the list is empty or the newest pipe has moved far enough in
pub fn should_spawn_next(obstacles: &[Obstacle], viewport_width: f32, spawn_threshold: f32) -> bool {
    obstacles
        .last()
        .is_none_or(|newest| newest.x < viewport_width - spawn_threshold)
}
