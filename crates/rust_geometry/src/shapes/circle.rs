//! Circle primitive

use std::fmt;

use crate::foundation::math::{constants, Fmt, Vec2};
use crate::tolerance::{assert_tolerance, epsilon, ToleranceEq};

use super::predicates::{forward_symmetric, Contains, DistanceFrom, Intersects};
use super::rectangle::Rectangle;

/// A filled circle in the XY plane
#[derive(Debug, Clone, Copy)]
pub struct Circle {
    center: Vec2,
    radius: f32,
}

impl Circle {
    /// Create a circle; a negative radius is stored as its absolute value
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self {
            center,
            radius: radius.abs(),
        }
    }

    /// Centre point
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Radius (never negative)
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Enclosed area
    pub fn area(&self) -> f32 {
        constants::PI * self.radius * self.radius
    }

    /// Perimeter length
    pub fn circumference(&self) -> f32 {
        constants::TAU * self.radius
    }

    /// Twice the radius
    pub fn diameter(&self) -> f32 {
        2.0 * self.radius
    }
}

impl Contains<Vec2> for Circle {
    fn contains(&self, point: &Vec2) -> bool {
        let margin = epsilon();
        (self.center - point).norm_squared() <= self.radius * self.radius + margin * margin
    }
}

impl Contains<Self> for Circle {
    fn contains(&self, other: &Self) -> bool {
        (self.center - other.center).norm() + other.radius <= self.radius + epsilon()
    }
}

impl Contains<Rectangle> for Circle {
    fn contains(&self, other: &Rectangle) -> bool {
        other.corners().iter().all(|corner| self.contains(corner))
    }
}

impl DistanceFrom<Vec2> for Circle {
    fn distance_from(&self, point: &Vec2) -> f32 {
        if self.contains(point) {
            return 0.0;
        }
        ((self.center - point).norm() - self.radius).max(0.0)
    }
}

impl DistanceFrom<Self> for Circle {
    fn distance_from(&self, other: &Self) -> f32 {
        if self.intersects(other) {
            return 0.0;
        }
        (self.center - other.center).norm() - (self.radius + other.radius)
    }
}

impl DistanceFrom<Rectangle> for Circle {
    fn distance_from(&self, other: &Rectangle) -> f32 {
        if self.intersects(other) {
            return 0.0;
        }
        (other.distance_from(&self.center) - self.radius).max(0.0)
    }
}

impl Intersects<Self> for Circle {
    fn intersects(&self, other: &Self) -> bool {
        (self.center - other.center).norm() <= self.radius + other.radius + epsilon()
    }
}

forward_symmetric!(Intersects: Circle => Rectangle);

impl ToleranceEq for Circle {
    fn equals_exactly(&self, other: &Self) -> bool {
        self.center.equals_exactly(&other.center) && self.radius.equals_exactly(&other.radius)
    }

    fn equals_with_tolerance(&self, other: &Self, tolerance: f32) -> bool {
        assert_tolerance(tolerance);
        self.center.equals_with_tolerance(&other.center, tolerance)
            && self.radius.equals_with_tolerance(&other.radius, tolerance)
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(Circle Centre:{} Radius:{:.3})", Fmt(&self.center), self.radius)
    }
}
