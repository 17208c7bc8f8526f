//! Game tuning
//!
//! Physics and obstacle constants, loadable from JSON. Missing fields take
//! their defaults so partial files are fine.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable game parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Bird ===
    /// Added to the bird's velocity every frame
    pub gravity: f32,
    /// Velocity a flap sets (absolute, not additive)
    pub lift: f32,
    /// Left edge of the bird sprite
    pub bird_x: f32,
    /// Bird radius (sprite is 2r × 2r)
    pub bird_radius: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    /// Vertical opening between top and bottom pipe
    pub gap_size: f32,
    /// Horizontal distance per frame
    pub obstacle_speed: f32,
    pub spawn_threshold: f32,
    pub min_margin: f32,

    // === Timing ===
    /// Step the simulation in whole reference frames (true) or by the
    /// measured frame time (false)
    pub fixed_step: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            lift: LIFT,
            bird_x: BIRD_X,
            bird_radius: BIRD_RADIUS,

            obstacle_width: OBSTACLE_WIDTH,
            gap_size: GAP_SIZE,
            obstacle_speed: OBSTACLE_SPEED,
            spawn_threshold: SPAWN_THRESHOLD,
            min_margin: MIN_MARGIN,

            fixed_step: true,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse `json` if present, falling back to defaults on any error
    pub fn load_or_default(json: Option<&str>) -> Self {
        match json.map(Self::from_json) {
            Some(Ok(config)) => {
                log::info!("Loaded game config");
                config.sanitized()
            }
            Some(Err(e)) => {
                log::warn!("Invalid game config ({}), using defaults", e);
                Self::default()
            }
            None => {
                log::info!("Using default game config");
                Self::default()
            }
        }
    }

    /// Replace values the simulation can't run with by their defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        fn fix(name: &str, value: &mut f32, fallback: f32, valid: fn(f32) -> bool) {
            if !value.is_finite() || !valid(*value) {
                log::warn!("Config {} = {} is out of range, using {}", name, value, fallback);
                *value = fallback;
            }
        }
        let any = |_: f32| true;
        let positive = |v: f32| v > 0.0;

        fix("gravity", &mut self.gravity, defaults.gravity, any);
        fix("lift", &mut self.lift, defaults.lift, any);
        fix("bird_x", &mut self.bird_x, defaults.bird_x, any);
        fix("bird_radius", &mut self.bird_radius, defaults.bird_radius, positive);
        fix("obstacle_width", &mut self.obstacle_width, defaults.obstacle_width, positive);
        fix("gap_size", &mut self.gap_size, defaults.gap_size, positive);
        fix("obstacle_speed", &mut self.obstacle_speed, defaults.obstacle_speed, positive);
        fix("spawn_threshold", &mut self.spawn_threshold, defaults.spawn_threshold, positive);
        fix("min_margin", &mut self.min_margin, defaults.min_margin, |v| v >= 0.0);

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning() {
        let config = GameConfig::default();
        assert_eq!(config.gravity, 0.6);
        assert_eq!(config.lift, -12.0);
        assert_eq!(config.gap_size, 180.0);
        assert_eq!(config.obstacle_width, 200.0);
        assert_eq!(config.spawn_threshold, 300.0);
        assert!(config.fixed_step);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = GameConfig::from_json(r#"{ "gravity": 0.4, "fixed_step": false }"#).unwrap();
        assert_eq!(config.gravity, 0.4);
        assert!(!config.fixed_step);
        assert_eq!(config.lift, LIFT);
        assert_eq!(config.bird_radius, BIRD_RADIUS);
    }

    #[test]
    fn test_invalid_json_falls_back() {
        let config = GameConfig::load_or_default(Some("{ not json"));
        assert_eq!(config, GameConfig::default());

        let config = GameConfig::load_or_default(None);
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_sanitized_replaces_degenerate_values() {
        let config = GameConfig {
            bird_radius: 0.0,
            gap_size: -5.0,
            obstacle_speed: f32::NAN,
            min_margin: 0.0,
            ..Default::default()
        }
        .sanitized();

        assert_eq!(config.bird_radius, BIRD_RADIUS);
        assert_eq!(config.gap_size, GAP_SIZE);
        assert_eq!(config.obstacle_speed, OBSTACLE_SPEED);
        // Zero margin is allowed
        assert_eq!(config.min_margin, 0.0);
    }

    #[test]
    fn test_load_sanitizes() {
        let config = GameConfig::load_or_default(Some(r#"{ "bird_radius": -1 }"#));
        assert_eq!(config.bird_radius, BIRD_RADIUS);
    }
}
