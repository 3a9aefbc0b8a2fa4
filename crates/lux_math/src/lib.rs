// Re-export glam for convenience
pub use glam::*;

// Lux scene-space types
mod disc;
mod ray;
pub use disc::Disc;
pub use ray::{direction_from_angle, Ray2};
