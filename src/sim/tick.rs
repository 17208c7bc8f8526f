//! Per-frame simulation step and player input
//!
//! `flap` and `tick` are the only mutators a host needs; `resize` follows the
//! drawing surface.

use super::state::{CrashCause, GameEvent, GamePhase, GameState, Viewport};
use super::{collision, kinematics, obstacles};

/// The player's single button.
///
/// Idle: start the run and flap in the same call.
/// Playing: flap.
/// GameOver: reset to Idle (the next flap starts a new run).
pub fn flap(state: &mut GameState) {
    match state.phase {
        GamePhase::Idle => {
            state.phase = GamePhase::Playing;
            log::info!("Run started (seed {})", state.seed);
            state.push_event(GameEvent::Started);
            kinematics::apply_impulse(&mut state.bird, state.config.lift);
            state.push_event(GameEvent::Flapped);
        }
        GamePhase::Playing => {
            kinematics::apply_impulse(&mut state.bird, state.config.lift);
            state.push_event(GameEvent::Flapped);
        }
        GamePhase::GameOver => {
            state.reset();
            log::info!("Reset to idle");
            state.push_event(GameEvent::Reset);
        }
    }
}

/// Advance the game by `dt` reference frames (1.0 = one 60 Hz frame)
pub fn tick(state: &mut GameState, dt: f32) {
    if !dt.is_finite() || dt <= 0.0 {
        log::debug!("Ignoring tick with dt = {}", dt);
        return;
    }

    // Idle holds the bird, GameOver is frozen
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;
    let config = state.config;
    let viewport = state.viewport;

    // Bird
    kinematics::integrate(&mut state.bird, config.gravity, dt);
    let mut crash = collision::boundary_hit(&state.bird, viewport.height);

    // Move, then test every pipe, including ones about to be pruned
    obstacles::advance(&mut state.obstacles, config.obstacle_speed * dt);
    let bird = state.bird;
    let hit_pipe = state
        .obstacles
        .iter()
        .any(|o| collision::is_colliding(&bird, o, config.obstacle_width));
    if hit_pipe && crash.is_none() {
        crash = Some(CrashCause::Obstacle);
    }

    // One point per pipe, ever
    let mut passed = 0;
    for obstacle in state.obstacles.iter_mut() {
        if !obstacle.scored && obstacle.x + config.obstacle_width < bird.pos.x {
            obstacle.scored = true;
            passed += 1;
        }
    }
    for _ in 0..passed {
        state.score += 1;
        log::debug!("Scored: {}", state.score);
        let score = state.score;
        state.push_event(GameEvent::Scored { score });
    }

    obstacles::prune(&mut state.obstacles, config.obstacle_width);

    if obstacles::should_spawn_next(&state.obstacles, viewport.width, config.spawn_threshold) {
        let obstacle = obstacles::spawn(
            state.rng(),
            viewport.width,
            viewport.height,
            config.gap_size,
            config.min_margin,
        );
        log::debug!(
            "Spawned obstacle: gap {}..{}",
            obstacle.top_height,
            obstacle.bottom_y
        );
        state.obstacles.push(obstacle);
    }

    if let Some(cause) = crash {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over ({:?}) after {} ticks, score {}",
            cause,
            state.time_ticks,
            state.score
        );
        state.push_event(GameEvent::Crashed { cause });
    }
}

/// Follow a new drawing surface size. Existing pipes keep their coordinates.
pub fn resize(state: &mut GameState, width: f32, height: f32) {
    let Some(viewport) = Viewport::new(width, height) else {
        log::warn!("Ignoring resize to {}x{}", width, height);
        return;
    };

    state.viewport = viewport;
    if state.phase == GamePhase::Idle {
        state.bird.pos.y = viewport.height / 2.0;
    }
    log::debug!("Viewport resized to {}x{}", width, height);
}
