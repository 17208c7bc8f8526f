//! Attract/demo mode - the game plays itself
//!
//! Aims for the centre of the next gap the bird hasn't cleared yet and flaps
//! whenever it is falling below that line.

use super::state::{GamePhase, GameState};

/// How far below the target line the bird may sink before flapping
pub const FLAP_MARGIN: f32 = 40.0;

/// Vertical line the autopilot steers toward
pub fn target_y(state: &GameState) -> f32 {
    let bird_x = state.bird.pos.x;
    let width = state.config.obstacle_width;
    state
        .obstacles
        .iter()
        .find(|o| o.x + width >= bird_x)
        .map(|o| (o.top_height + o.bottom_y) / 2.0)
        .unwrap_or(state.viewport.height / 2.0)
}

/// Whether to press the button this frame
pub fn should_flap(state: &GameState) -> bool {
    match state.phase {
        GamePhase::Idle => true,
        GamePhase::GameOver => false,
        GamePhase::Playing => {
            let bird = &state.bird;
            bird.velocity >= 0.0 && bird.center().y > target_y(state) + FLAP_MARGIN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::state::Obstacle;
    use crate::sim::tick::flap;

    fn playing() -> GameState {
        let mut state = GameState::new(800.0, 600.0, GameConfig::default(), 5);
        flap(&mut state);
        state
    }

    #[test]
    fn test_starts_from_idle_not_after_crash() {
        let mut state = GameState::new(800.0, 600.0, GameConfig::default(), 5);
        assert!(should_flap(&state));
        state.phase = GamePhase::GameOver;
        assert!(!should_flap(&state));
    }

    #[test]
    fn test_targets_viewport_center_without_pipes() {
        let state = playing();
        assert_eq!(target_y(&state), 300.0);
    }

    #[test]
    fn test_targets_next_unpassed_gap() {
        let mut state = playing();
        state.obstacles.push(Obstacle {
            x: -150.0, // trailing edge 50, already behind the bird
            top_height: 50.0,
            bottom_y: 230.0,
            scored: true,
        });
        state.obstacles.push(Obstacle {
            x: 400.0,
            top_height: 200.0,
            bottom_y: 380.0,
            scored: false,
        });
        assert_eq!(target_y(&state), 290.0);
    }

    #[test]
    fn test_flaps_only_when_falling_below_target() {
        let mut state = playing();

        // Centre at 324, target 300: inside the margin
        state.bird.velocity = 2.0;
        assert!(!should_flap(&state));

        state.bird.pos.y = 400.0;
        assert!(should_flap(&state));

        // Still rising from the last flap
        state.bird.velocity = -3.0;
        assert!(!should_flap(&state));
    }
}
