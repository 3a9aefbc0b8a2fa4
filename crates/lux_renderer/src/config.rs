//! Render configuration.
//!
//! Every tunable of the renderer lives here. Defaults reproduce the
//! reference scene: a 0.1 radius light at the center of the unit square,
//! 64 jittered samples per pixel and four workers.

use lux_math::{Disc, Vec2};
use serde::{Deserialize, Serialize};

use crate::error::{RenderError, RenderResult};

/// The fixed light: center (0.5, 0.5), radius 0.1.
pub const DEFAULT_LIGHT: Disc = Disc::new(Vec2::new(0.5, 0.5), 0.1);

/// How ray angles are chosen for each pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplingStrategy {
    /// One random angle inside each of N equal angular strata.
    #[default]
    Jittered,
    /// N evenly spaced angles starting at 0. Uses no randomness.
    Uniform,
    /// N independent uniformly random angles.
    Random,
}

/// What to do when `radiance * 255` leaves the 8-bit range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityOverflow {
    /// Saturate at 255.
    #[default]
    Clamp,
    /// Keep the low 8 bits of the truncated value (510 becomes 254).
    Wrap,
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Rays fired per pixel
    pub samples_per_pixel: u32,
    /// Maximum sphere-tracing iterations per ray
    pub max_steps: u32,
    /// Distance after which a ray counts as escaped
    pub max_distance: f32,
    /// Distance below which a ray counts as hitting the light
    pub epsilon: f32,
    /// Worker count for the parallel path
    pub workers: usize,
    /// The light source
    pub light: Disc,
    /// Base seed for the jitter random number generators
    pub seed: u64,
    /// Angle generation strategy
    pub strategy: SamplingStrategy,
    /// Quantization overflow policy
    pub overflow: IntensityOverflow,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 64,
            max_steps: 10,
            max_distance: 2.0,
            epsilon: 1e-6,
            workers: 4,
            light: DEFAULT_LIGHT,
            seed: 0,
            strategy: SamplingStrategy::Jittered,
            overflow: IntensityOverflow::Clamp,
        }
    }
}

impl RenderConfig {
    /// Set the sample count per pixel.
    pub fn with_samples(mut self, samples_per_pixel: u32) -> Self {
        self.samples_per_pixel = samples_per_pixel;
        self
    }

    /// Set marching limits.
    pub fn with_march_limits(mut self, max_steps: u32, max_distance: f32, epsilon: f32) -> Self {
        self.max_steps = max_steps;
        self.max_distance = max_distance;
        self.epsilon = epsilon;
        self
    }

    /// Set the worker count for the parallel path.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Set the light disc.
    pub fn with_light(mut self, light: Disc) -> Self {
        self.light = light;
        self
    }

    /// Set the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the sampling strategy.
    pub fn with_strategy(mut self, strategy: SamplingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the overflow policy.
    pub fn with_overflow(mut self, overflow: IntensityOverflow) -> Self {
        self.overflow = overflow;
        self
    }

    /// Check that the configuration can drive a render.
    pub fn validate(&self) -> RenderResult<()> {
        if self.samples_per_pixel == 0 {
            return Err(invalid("samples_per_pixel must be at least 1"));
        }
        if self.workers == 0 {
            return Err(invalid("workers must be at least 1"));
        }
        if !(self.max_distance.is_finite() && self.max_distance > 0.0) {
            return Err(invalid("max_distance must be positive and finite"));
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(invalid("epsilon must be positive and finite"));
        }
        if !(self.light.radius.is_finite() && self.light.radius > 0.0) {
            return Err(invalid("light radius must be positive and finite"));
        }
        if !self.light.center.is_finite() {
            return Err(invalid("light center must be finite"));
        }
        Ok(())
    }
}

fn invalid(reason: &str) -> RenderError {
    RenderError::InvalidConfig(reason.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_scene() {
        let config = RenderConfig::default();
        assert_eq!(config.samples_per_pixel, 64);
        assert_eq!(config.max_steps, 10);
        assert_eq!(config.max_distance, 2.0);
        assert_eq!(config.epsilon, 1e-6);
        assert_eq!(config.workers, 4);
        assert_eq!(config.light.center, Vec2::new(0.5, 0.5));
        assert_eq!(config.light.radius, 0.1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_samples() {
        let config = RenderConfig::default().with_samples(0);
        assert!(matches!(config.validate(), Err(RenderError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_zero_workers() {
        let config = RenderConfig::default().with_workers(0);
        assert!(matches!(config.validate(), Err(RenderError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_bad_march_limits() {
        let config = RenderConfig::default().with_march_limits(10, f32::NAN, 1e-6);
        assert!(config.validate().is_err());

        let config = RenderConfig::default().with_march_limits(10, 2.0, 0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_light() {
        let config = RenderConfig::default().with_light(Disc::new(Vec2::new(0.5, 0.5), -1.0));
        assert!(config.validate().is_err());

        let config = RenderConfig::default().with_light(Disc::new(Vec2::new(f32::INFINITY, 0.5), 0.1));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "samples_per_pixel": 16, "strategy": "uniform", "overflow": "wrap" }"#;
        let config: RenderConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.samples_per_pixel, 16);
        assert_eq!(config.strategy, SamplingStrategy::Uniform);
        assert_eq!(config.overflow, IntensityOverflow::Wrap);
        assert_eq!(config.workers, 4);
        assert_eq!(config.light, DEFAULT_LIGHT);
    }
}
