//! Disc primitive and its signed distance field.

use crate::Vec2;
use serde::{Deserialize, Serialize};

/// A filled circle in the scene plane.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disc {
    pub center: Vec2,
    pub radius: f32,
}

impl Disc {
    /// Create a new disc.
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Signed distance from `point` to the disc boundary.
    ///
    /// Negative inside, zero on the boundary, positive outside.
    #[inline]
    pub fn distance(&self, point: Vec2) -> f32 {
        (point - self.center).length() - self.radius
    }
}
