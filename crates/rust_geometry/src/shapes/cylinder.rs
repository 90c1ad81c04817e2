//! Upright circular cylinder

use std::fmt;

use crate::foundation::math::{constants, utils, Fmt, Vec3};
use crate::tolerance::{assert_tolerance, epsilon, ToleranceEq};

use super::cone::Cone;
use super::cuboid::Cuboid;
use super::predicates::{forward_symmetric, Contains, Intersects};
use super::ray::Ray;
use super::sphere::Sphere;

/// A cylinder with a vertical axis, positioned by the middle of that axis
#[derive(Debug, Clone, Copy)]
pub struct Cylinder {
    center: Vec3,
    radius: f32,
    height: f32,
}

impl Cylinder {
    /// Create a cylinder; negative radius and height are stored as absolute values
    pub fn new(center: Vec3, radius: f32, height: f32) -> Self {
        Self {
            center,
            radius: radius.abs(),
            height: height.abs(),
        }
    }

    /// Midpoint of the axis
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Radius of both caps
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Vertical extent
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Lateral area plus both caps
    pub fn surface_area(&self) -> f32 {
        constants::TAU * self.radius * self.height + constants::TAU * self.radius * self.radius
    }

    /// Enclosed volume
    pub fn volume(&self) -> f32 {
        constants::PI * self.radius * self.radius * self.height
    }

    /// The same solid expressed as a frustum with equal radii
    pub fn to_symmetrical_conical_frustum(&self) -> Cone {
        let top = Vec3::new(self.center.x, self.center.y + self.height / 2.0, self.center.z);
        Cone::frustum(top, self.radius, self.height, self.radius)
    }

    // True if `y` lies within the vertical band, shrunk by `inset` on both ends.
    fn spans_height(&self, y: f32, inset: f32) -> bool {
        (y - self.center.y).abs() + inset <= self.height / 2.0 + epsilon()
    }
}

impl From<Cylinder> for Cone {
    fn from(cylinder: Cylinder) -> Self {
        cylinder.to_symmetrical_conical_frustum()
    }
}

impl Contains<Vec3> for Cylinder {
    fn contains(&self, point: &Vec3) -> bool {
        let margin = epsilon();
        let horizontal = (utils::xz(point) - utils::xz(&self.center)).norm_squared();
        horizontal <= self.radius * self.radius + margin * margin && self.spans_height(point.y, 0.0)
    }
}

impl Contains<Ray> for Cylinder {
    fn contains(&self, ray: &Ray) -> bool {
        ray.end_point()
            .is_some_and(|end| self.contains(&ray.start_point()) && self.contains(&end))
    }
}

impl Contains<Self> for Cylinder {
    fn contains(&self, other: &Self) -> bool {
        utils::xz_distance(&self.center, &other.center) + other.radius <= self.radius + epsilon()
            && self.spans_height(other.center.y, other.height / 2.0)
    }
}

impl Contains<Cone> for Cylinder {
    fn contains(&self, other: &Cone) -> bool {
        let top = other.top_center();
        let widest = other.top_radius().max(other.bottom_radius());
        utils::xz_distance(&self.center, &top) + widest <= self.radius + epsilon()
            && self.spans_height(top.y, 0.0)
            && self.spans_height(other.bottom_center().y, 0.0)
    }
}

impl Contains<Cuboid> for Cylinder {
    fn contains(&self, other: &Cuboid) -> bool {
        other.corners().iter().all(|corner| self.contains(corner))
    }
}

impl Contains<Sphere> for Cylinder {
    fn contains(&self, other: &Sphere) -> bool {
        utils::xz_distance(&self.center, &other.center()) + other.radius() <= self.radius + epsilon()
            && self.spans_height(other.center().y, other.radius())
    }
}

impl Intersects<Self> for Cylinder {
    fn intersects(&self, other: &Self) -> bool {
        let margin = epsilon();
        utils::xz_distance(&self.center, &other.center) <= self.radius + other.radius + margin
            && (self.center.y - other.center.y).abs() <= (self.height + other.height) / 2.0 + margin
    }
}

forward_symmetric!(Intersects: Cylinder => Cone);
forward_symmetric!(Intersects: Cylinder => Cuboid);
forward_symmetric!(Intersects: Cylinder => Sphere);

impl ToleranceEq for Cylinder {
    fn equals_exactly(&self, other: &Self) -> bool {
        self.center.equals_exactly(&other.center)
            && self.radius.equals_exactly(&other.radius)
            && self.height.equals_exactly(&other.height)
    }

    fn equals_with_tolerance(&self, other: &Self, tolerance: f32) -> bool {
        assert_tolerance(tolerance);
        self.center.equals_with_tolerance(&other.center, tolerance)
            && self.radius.equals_with_tolerance(&other.radius, tolerance)
            && self.height.equals_with_tolerance(&other.height, tolerance)
    }
}

impl fmt::Display for Cylinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(Cylinder Center:{} Radius:{:.3} Height:{:.3})",
            Fmt(&self.center),
            self.radius,
            self.height
        )
    }
}
