//! Game state and core simulation types
//!
//! The whole session lives in one `GameState` value owned by the host.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Bird held at mid-screen, waiting for the first flap
    Idle,
    /// Active gameplay
    Playing,
    /// Run ended, simulation frozen until the next flap
    GameOver,
}

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    /// Bird reached the bottom of the viewport
    Floor,
    /// Bird reached the top of the viewport
    Ceiling,
    /// Bird hit a pipe
    Obstacle,
}

/// Something the host may want to react to (logging, sound hooks)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// First flap from Idle began a run
    Started,
    /// Lift was applied to the bird
    Flapped,
    /// A pipe was passed; `score` is the new running total
    Scored { score: u32 },
    /// The run ended this tick
    Crashed { cause: CrashCause },
    /// Flap after game over returned to Idle
    Reset,
}

/// The player's bird
///
/// `pos` is the top-left corner of its 2r × 2r sprite. `pos.x` never changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    pub pos: Vec2,
    pub radius: f32,
    /// Vertical velocity (positive = down)
    pub velocity: f32,
}

impl Bird {
    pub fn new(x: f32, viewport_height: f32, radius: f32) -> Self {
        Self {
            pos: Vec2::new(x, viewport_height / 2.0),
            radius,
            velocity: 0.0,
        }
    }

    /// Centre of the bird's hit circle
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.radius)
    }
}

/// A pipe pair with a gap between `top_height` and `bottom_y`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Bottom edge of the top pipe
    pub top_height: f32,
    /// Top edge of the bottom pipe (`top_height + gap_size`)
    pub bottom_y: f32,
    /// Set once the bird has passed this pipe
    pub scored: bool,
}

/// Drawing surface size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Returns `None` for sizes the simulation can't use
    pub fn new(width: f32, height: f32) -> Option<Self> {
        let usable = |v: f32| v.is_finite() && v > 0.0;
        (usable(width) && usable(height)).then_some(Self { width, height })
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Tuning the session was created with
    pub config: GameConfig,
    /// Current viewport
    pub viewport: Viewport,
    /// Current phase
    pub phase: GamePhase,
    /// Pipes passed this run
    pub score: u32,
    /// Playing ticks since the last reset
    pub time_ticks: u64,
    /// The player
    pub bird: Bird,
    /// Live obstacles in spawn order (left to right)
    pub obstacles: Vec<Obstacle>,
    /// Seed the RNG started from
    pub seed: u64,
    rng: Pcg32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create an Idle session sized to the viewport
    pub fn new(width: f32, height: f32, config: GameConfig, seed: u64) -> Self {
        let viewport = Viewport::new(width, height).unwrap_or_else(|| {
            log::warn!("Unusable viewport {}x{}, starting at 1x1", width, height);
            Viewport::default()
        });
        let config = config.sanitized();

        Self {
            config,
            viewport,
            phase: GamePhase::Idle,
            score: 0,
            time_ticks: 0,
            bird: Bird::new(config.bird_x, viewport.height, config.bird_radius),
            obstacles: Vec::new(),
            seed,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    /// Back to Idle: bird re-centred, no pipes, score cleared.
    /// The RNG keeps its stream so the next run gets fresh pipes.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Idle;
        self.score = 0;
        self.time_ticks = 0;
        self.bird = Bird::new(self.config.bird_x, self.viewport.height, self.config.bird_radius);
        self.obstacles.clear();
    }

    pub fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle_and_centered() {
        let state = GameState::new(800.0, 600.0, GameConfig::default(), 1);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.bird.pos, Vec2::new(100.0, 300.0));
        assert_eq!(state.bird.velocity, 0.0);
        assert_eq!(state.bird.radius, 24.0);
    }

    #[test]
    fn test_degenerate_viewport_falls_back() {
        let state = GameState::new(0.0, f32::NAN, GameConfig::default(), 1);
        assert_eq!(state.viewport, Viewport::default());
    }

    #[test]
    fn test_bird_center_uses_top_left_corner() {
        let bird = Bird::new(100.0, 600.0, 24.0);
        assert_eq!(bird.center(), Vec2::new(124.0, 324.0));
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let mut state = GameState::new(800.0, 600.0, GameConfig::default(), 1);
        state.push_event(GameEvent::Started);
        state.push_event(GameEvent::Flapped);
        assert_eq!(state.drain_events(), vec![GameEvent::Started, GameEvent::Flapped]);
        assert!(state.drain_events().is_empty());
    }
}
