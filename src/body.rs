//! The single dynamic body driven by the physics engine.

use glam::Vec3;

use crate::geometry::Aabb;

/// The controllable sphere.
///
/// Only [`crate::physics`] mutates a body during a tick; everything else
/// reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Centre of the sphere.
    pub position: Vec3,
    /// Per-tick displacement. X and Z are rewritten from input every tick,
    /// Y accumulates gravity.
    pub velocity: Vec3,
    /// Collision radius. Positive and constant for the body's lifetime.
    radius: f32,
    /// Whether the body is supported by a floor or an obstacle's top face.
    pub grounded: bool,
}

impl Body {
    /// Creates a body at rest at `position`.
    ///
    /// The body starts grounded, so a jump on the first tick is honoured.
    #[must_use]
    pub const fn new(position: Vec3, radius: f32) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            radius,
            grounded: true,
        }
    }

    /// Collision radius of the body.
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Cube enclosing the sphere at its current position.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::around_sphere(self.position, self.radius)
    }

    /// Height of the lowest point of the sphere.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.position.y - self.radius
    }
}
