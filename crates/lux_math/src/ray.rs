use crate::Vec2;

/// A ray in the 2D scene plane.
///
/// Rays start at `origin` and travel along `direction`, which is expected to
/// be unit length so that the parameter `t` is a distance in scene units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray2 {
    pub origin: Vec2,
    pub direction: Vec2,
}

impl Ray2 {
    /// Create a new ray.
    pub fn new(origin: Vec2, direction: Vec2) -> Self {
        Self { origin, direction }
    }

    /// Create a ray leaving `origin` at `angle` radians from the +X axis.
    pub fn from_angle(origin: Vec2, angle: f32) -> Self {
        Self::new(origin, direction_from_angle(angle))
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec2 {
        self.origin + self.direction * t
    }
}

/// Unit direction `(cos a, sin a)`.
#[inline]
pub fn direction_from_angle(angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(cos, sin)
}
