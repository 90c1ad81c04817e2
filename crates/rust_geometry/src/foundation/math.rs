//! Math utilities and types
//!
//! Provides the vector types every shape is built from, plus the handful of
//! helpers the predicate code leans on (axis constants, horizontal projection,
//! clamping).

use std::fmt;

pub use nalgebra::{Vector2, Vector3};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Axis-aligned unit directions
pub mod directions {
    use super::Vec3;

    /// Positive X
    pub const RIGHT: Vec3 = Vec3::new(1.0, 0.0, 0.0);

    /// Negative X
    pub const LEFT: Vec3 = Vec3::new(-1.0, 0.0, 0.0);

    /// Positive Y
    pub const UP: Vec3 = Vec3::new(0.0, 1.0, 0.0);

    /// Negative Y
    pub const DOWN: Vec3 = Vec3::new(0.0, -1.0, 0.0);

    /// Positive Z
    pub const FORWARD: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    /// Negative Z
    pub const BACKWARD: Vec3 = Vec3::new(0.0, 0.0, -1.0);

    /// The zero vector
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;
}

/// Math utility functions
pub mod utils {
    use super::{Vec2, Vec3};

    /// Clamp a value between min and max
    ///
    /// Unlike `f32::clamp` this does not panic when `min > max`; `min` wins.
    pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
        if value < min { min } else if value > max { max } else { value }
    }

    /// Linear interpolation
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }

    /// The horizontal (XZ-plane) components of a point
    pub fn xz(v: &Vec3) -> Vec2 {
        Vec2::new(v.x, v.z)
    }

    /// Distance between two points measured in the XZ plane only
    pub fn xz_distance(a: &Vec3, b: &Vec3) -> f32 {
        (xz(a) - xz(b)).norm()
    }

    /// Returns `v` rescaled to `length`, or the zero vector if `v` has no direction
    pub fn with_length(v: &Vec3, length: f32) -> Vec3 {
        v.try_normalize(0.0).map_or_else(Vec3::zeros, |unit| unit * length)
    }
}

/// `Display` adapter printing a vector as `(x, y[, z])` with three decimals
pub struct Fmt<'a, V>(pub &'a V);

impl fmt::Display for Fmt<'_, Vec3> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.0.x, self.0.y, self.0.z)
    }
}

impl fmt::Display for Fmt<'_, Vec2> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.0.x, self.0.y)
    }
}
