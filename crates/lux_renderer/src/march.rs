//! Sphere tracing against the light's distance field.

use lux_math::Ray2;

use crate::RenderConfig;

/// Radiance carried by a ray that reaches the light.
pub const LIGHT_EMISSION: f32 = 2.0;

/// Radiance carried by a ray that escapes to the background.
pub const BACKGROUND: f32 = 0.0;

/// Compute the light received along a ray.
///
/// The ray advances by the distance field value at each step: that value is
/// a lower bound on the free space around the current point, so the step can
/// never tunnel through the light. Returns [`LIGHT_EMISSION`] once the
/// distance drops below `config.epsilon`, and [`BACKGROUND`] when the ray runs
/// out of steps or passes `config.max_distance`.
pub fn march(ray: &Ray2, config: &RenderConfig) -> f32 {
    let mut t = 0.0;

    for _ in 0..config.max_steps {
        if t >= config.max_distance {
            break;
        }

        let sd = config.light.distance(ray.at(t));
        if sd < config.epsilon {
            return LIGHT_EMISSION;
        }
        t += sd;
    }

    BACKGROUND
}

#[cfg(test)]
mod tests {
    use super::*;
    use lux_math::{Disc, Vec2};

    #[test]
    fn test_march_from_surface_hits() {
        let config = RenderConfig::default();
        let surface = Vec2::new(0.5, 0.4);
        let ray = Ray2::new(surface, Vec2::new(0.0, -1.0));
        assert_eq!(march(&ray, &config), LIGHT_EMISSION);
    }

    #[test]
    fn test_march_from_inside_hits_in_any_direction() {
        let config = RenderConfig::default();
        let ray = Ray2::from_angle(Vec2::new(0.52, 0.49), 2.0);
        assert_eq!(march(&ray, &config), LIGHT_EMISSION);
    }

    #[test]
    fn test_march_toward_light_hits() {
        let config = RenderConfig::default();
        let ray = Ray2::new(Vec2::new(0.0, 0.5), Vec2::X);
        assert_eq!(march(&ray, &config), LIGHT_EMISSION);
    }

    #[test]
    fn test_march_away_from_light_misses() {
        let config = RenderConfig::default();
        let ray = Ray2::new(Vec2::new(0.1, 0.5), Vec2::new(-1.0, 0.0));
        assert_eq!(march(&ray, &config), BACKGROUND);
    }

    #[test]
    fn test_march_beyond_max_distance_misses() {
        let config = RenderConfig::default();
        // Aimed at the light, but the first step already overshoots max_distance.
        let ray = Ray2::new(Vec2::new(5.0, 0.5), Vec2::new(-1.0, 0.0));
        assert_eq!(march(&ray, &config), BACKGROUND);
    }

    #[test]
    fn test_march_respects_step_budget() {
        // Head-on ray from x = 0 needs two steps to reach the surface.
        let config = RenderConfig::default()
            .with_light(Disc::new(Vec2::new(0.5, 0.5), 0.1))
            .with_march_limits(1, 2.0, 1e-6);
        let ray = Ray2::new(Vec2::new(0.0, 0.5), Vec2::X);
        assert_eq!(march(&ray, &config), BACKGROUND);

        let config = config.with_march_limits(10, 2.0, 1e-6);
        assert_eq!(march(&ray, &config), LIGHT_EMISSION);
    }
}
