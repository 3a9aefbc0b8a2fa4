//! Per-pixel Monte Carlo sampling.
//!
//! Each pixel fires `samples_per_pixel` rays around the full circle and
//! averages what they receive. The default strategy splits the circle into
//! equal angular strata and jitters one ray inside each, which trades the
//! banding of evenly spaced rays for much less noise than purely random ones.

use std::f32::consts::TAU;

use lux_math::{Ray2, Vec2};
use rand::{Rng, RngCore};

use crate::march::march;
use crate::{RenderConfig, SamplingStrategy};

/// Uniform random value in [0, 1).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Angle of sub-sample `i` out of `n`.
///
/// `Uniform` never touches `rng`, so it renders identically for any seed.
pub fn sample_angle(i: u32, n: u32, strategy: SamplingStrategy, rng: &mut dyn RngCore) -> f32 {
    let n = n as f32;
    match strategy {
        SamplingStrategy::Jittered => TAU * (i as f32 + gen_f32(rng)) / n,
        SamplingStrategy::Uniform => TAU * i as f32 / n,
        SamplingStrategy::Random => TAU * gen_f32(rng),
    }
}

/// Average radiance arriving at `point` from all directions.
///
/// Returns a value in `[0, LIGHT_EMISSION]`.
pub fn sample(point: Vec2, config: &RenderConfig, rng: &mut dyn RngCore) -> f32 {
    let n = config.samples_per_pixel;
    if n == 0 {
        return 0.0;
    }

    let mut sum = 0.0;
    for i in 0..n {
        let angle = sample_angle(i, n, config.strategy, rng);
        let ray = Ray2::from_angle(point, angle);
        sum += march(&ray, config);
    }

    sum / n as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::march::LIGHT_EMISSION;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_at_light_center() {
        let config = RenderConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        let value = sample(Vec2::new(0.5, 0.5), &config, &mut rng);
        assert!(value >= 1.9, "center sample was {value}");
        assert!(value <= LIGHT_EMISSION);
    }

    #[test]
    fn test_sample_far_away_is_dark() {
        let config = RenderConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(sample(Vec2::new(10.0, 10.0), &config, &mut rng), 0.0);
        assert_eq!(sample(Vec2::new(-5.0, 0.5), &config, &mut rng), 0.0);
    }

    #[test]
    fn test_sample_near_light_is_partial() {
        // Just outside the disc roughly half the directions see the light.
        let config = RenderConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        let value = sample(Vec2::new(0.62, 0.5), &config, &mut rng);
        assert!(value > 0.0 && value < LIGHT_EMISSION, "near sample was {value}");
    }

    #[test]
    fn test_sample_is_seed_deterministic() {
        let config = RenderConfig::default();
        let point = Vec2::new(0.3, 0.7);

        let a = sample(point, &config, &mut StdRng::seed_from_u64(7));
        let b = sample(point, &config, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_jittered_angles_stay_in_their_stratum() {
        let mut rng = StdRng::seed_from_u64(42);
        let n = 8;
        let width = TAU / n as f32;
        for i in 0..n {
            let angle = sample_angle(i, n, SamplingStrategy::Jittered, &mut rng);
            assert!(angle >= width * i as f32 - 1e-5);
            assert!(angle <= width * (i + 1) as f32 + 1e-5);
        }
    }

    #[test]
    fn test_uniform_angles_ignore_rng() {
        let mut a = StdRng::seed_from_u64(1);
        let mut b = StdRng::seed_from_u64(2);
        for i in 0..4 {
            assert_eq!(
                sample_angle(i, 4, SamplingStrategy::Uniform, &mut a),
                sample_angle(i, 4, SamplingStrategy::Uniform, &mut b)
            );
        }
        assert_eq!(sample_angle(0, 4, SamplingStrategy::Uniform, &mut a), 0.0);
    }

    #[test]
    fn test_random_angles_cover_circle() {
        let mut rng = StdRng::seed_from_u64(42);
        for i in 0..32 {
            let angle = sample_angle(i, 32, SamplingStrategy::Random, &mut rng);
            assert!((0.0..TAU).contains(&angle));
        }
    }
}
