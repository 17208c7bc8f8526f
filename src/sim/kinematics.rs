//! Bird motion: constant gravity plus flap impulses

use super::state::Bird;

/// Advance the bird by `dt` frames. Velocity updates before position.
#[inline]
pub fn integrate(bird: &mut Bird, gravity: f32, dt: f32) {
    bird.velocity += gravity * dt;
    bird.pos.y += bird.velocity * dt;
}

/// Flap: velocity is set, not added to
#[inline]
pub fn apply_impulse(bird: &mut Bird, lift: f32) {
    bird.velocity = lift;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrate_velocity_then_position() {
        let mut bird = Bird::new(100.0, 600.0, 24.0);
        integrate(&mut bird, 0.6, 1.0);
        assert_eq!(bird.velocity, 0.6);
        assert!((bird.pos.y - 300.6).abs() < 1e-4);

        integrate(&mut bird, 0.6, 1.0);
        assert_eq!(bird.velocity, 1.2);
        assert!((bird.pos.y - 301.8).abs() < 1e-4);
        assert_eq!(bird.pos.x, 100.0);
    }

    #[test]
    fn test_impulse_is_absolute() {
        let mut bird = Bird::new(100.0, 600.0, 24.0);
        bird.velocity = 7.5;
        apply_impulse(&mut bird, -12.0);
        assert_eq!(bird.velocity, -12.0);
        apply_impulse(&mut bird, -12.0);
        assert_eq!(bird.velocity, -12.0);
    }

    #[test]
    fn test_integrate_scales_with_dt() {
        let mut bird = Bird::new(100.0, 600.0, 24.0);
        integrate(&mut bird, 0.6, 0.5);
        assert_eq!(bird.velocity, 0.3);
        assert!((bird.pos.y - 300.15).abs() < 1e-4);
    }
}
