//! Sphere primitive

use std::fmt;

use crate::foundation::math::{constants, utils, Fmt, Vec3};
use crate::tolerance::{assert_tolerance, epsilon, ToleranceEq};

use super::circle::Circle;
use super::cone::Cone;
use super::cuboid::Cuboid;
use super::cylinder::Cylinder;
use super::plane::Plane;
use super::predicates::{forward_symmetric, Contains, DistanceFrom, Intersects};
use super::ray::Ray;

/// A solid ball
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
}

impl Sphere {
    /// Create a sphere; a negative radius is stored as its absolute value
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            radius: radius.abs(),
        }
    }

    /// The sphere whose great circle in the plane `z` is `great_circle`
    pub fn from_circle(great_circle: &Circle, z: f32) -> Self {
        let c = great_circle.center();
        Self::new(Vec3::new(c.x, c.y, z), great_circle.radius())
    }

    /// Centre point
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Radius (never negative)
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Enclosed volume
    pub fn volume(&self) -> f32 {
        (4.0 / 3.0) * constants::PI * self.radius * self.radius * self.radius
    }

    /// Surface area
    pub fn surface_area(&self) -> f32 {
        4.0 * constants::PI * self.radius * self.radius
    }

    /// Length of a great circle
    pub fn circumference(&self) -> f32 {
        constants::TAU * self.radius
    }

    /// Twice the radius
    pub fn diameter(&self) -> f32 {
        2.0 * self.radius
    }

    /// Radius of the circular cross-section `distance_from_centre` away from the centre
    ///
    /// # Panics
    ///
    /// Panics if `|distance_from_centre|` exceeds the radius by more than epsilon.
    pub fn get_radius(&self, distance_from_centre: f32) -> f32 {
        assert!(
            distance_from_centre.abs() <= self.radius + epsilon(),
            "Distance from centre ({distance_from_centre}) must not exceed the sphere radius ({})",
            self.radius
        );
        (self.radius * self.radius - distance_from_centre * distance_from_centre).max(0.0).sqrt()
    }

    /// The point on the surface closest to `point`
    ///
    /// A point at the exact centre has no direction and projects onto the centre.
    pub fn point_projection(&self, point: &Vec3) -> Vec3 {
        self.center + utils::with_length(&(point - self.center), self.radius)
    }

    // Cross-section radius at height `y`, or `None` when `y` misses the sphere.
    fn slice_radius_at(&self, y: f32) -> Option<f32> {
        let offset = (y - self.center.y).abs();
        if offset > self.radius + epsilon() {
            None
        } else {
            Some((self.radius * self.radius - offset * offset).max(0.0).sqrt())
        }
    }
}

impl Contains<Vec3> for Sphere {
    fn contains(&self, point: &Vec3) -> bool {
        let margin = epsilon();
        (self.center - point).norm_squared() <= self.radius * self.radius + margin * margin
    }
}

impl Contains<Ray> for Sphere {
    fn contains(&self, ray: &Ray) -> bool {
        ray.end_point()
            .is_some_and(|end| self.contains(&ray.start_point()) && self.contains(&end))
    }
}

impl Contains<Self> for Sphere {
    fn contains(&self, other: &Self) -> bool {
        (self.center - other.center).norm() + other.radius <= self.radius + epsilon()
    }
}

impl Contains<Cone> for Sphere {
    fn contains(&self, other: &Cone) -> bool {
        // A cone is the convex hull of its two rims, so both rims fitting is enough.
        let top = other.top_center();
        let (Some(radius_at_top), Some(radius_at_bottom)) = (
            self.slice_radius_at(top.y),
            self.slice_radius_at(other.bottom_center().y),
        ) else {
            return false;
        };
        let margin = epsilon();
        let xz_distance = utils::xz_distance(&top, &self.center);
        xz_distance + other.top_radius() <= radius_at_top + margin
            && xz_distance + other.bottom_radius() <= radius_at_bottom + margin
    }
}

impl Contains<Cuboid> for Sphere {
    fn contains(&self, other: &Cuboid) -> bool {
        other.corners().iter().all(|corner| self.contains(corner))
    }
}

impl Contains<Cylinder> for Sphere {
    fn contains(&self, other: &Cylinder) -> bool {
        self.contains(&other.to_symmetrical_conical_frustum())
    }
}

impl DistanceFrom<Vec3> for Sphere {
    fn distance_from(&self, point: &Vec3) -> f32 {
        if self.contains(point) {
            return 0.0;
        }
        ((point - self.center).norm() - self.radius).max(0.0)
    }
}

impl DistanceFrom<Self> for Sphere {
    fn distance_from(&self, other: &Self) -> f32 {
        if self.intersects(other) {
            return 0.0;
        }
        (self.center - other.center).norm() - (self.radius + other.radius)
    }
}

impl DistanceFrom<Cuboid> for Sphere {
    fn distance_from(&self, other: &Cuboid) -> f32 {
        if self.intersects(other) {
            return 0.0;
        }
        (other.distance_from(&self.center) - self.radius).max(0.0)
    }
}

forward_symmetric!(DistanceFrom: Sphere => Plane);
forward_symmetric!(DistanceFrom: Sphere => Ray);

impl Intersects<Self> for Sphere {
    fn intersects(&self, other: &Self) -> bool {
        (self.center - other.center).norm() <= self.radius + other.radius + epsilon()
    }
}

impl Intersects<Cylinder> for Sphere {
    fn intersects(&self, other: &Cylinder) -> bool {
        // Widest slice of the sphere that still lies within the cylinder's height band.
        let half_height = other.height() / 2.0;
        let cylinder_y = other.center().y;
        let nearest_y = utils::clamp(self.center.y, cylinder_y - half_height, cylinder_y + half_height);
        self.slice_radius_at(nearest_y).is_some_and(|slice_radius| {
            utils::xz_distance(&self.center, &other.center()) <= slice_radius + other.radius() + epsilon()
        })
    }
}

impl Intersects<Cuboid> for Sphere {
    fn intersects(&self, other: &Cuboid) -> bool {
        other.distance_from(&self.center) <= self.radius + epsilon()
    }
}

forward_symmetric!(Intersects: Sphere => Plane);
forward_symmetric!(Intersects: Sphere => Ray);
forward_symmetric!(IntersectionWith: Sphere => Ray);

impl ToleranceEq for Sphere {
    fn equals_exactly(&self, other: &Self) -> bool {
        self.center.equals_exactly(&other.center) && self.radius.equals_exactly(&other.radius)
    }

    fn equals_with_tolerance(&self, other: &Self, tolerance: f32) -> bool {
        assert_tolerance(tolerance);
        self.center.equals_with_tolerance(&other.center, tolerance)
            && self.radius.equals_with_tolerance(&other.radius, tolerance)
    }
}

impl fmt::Display for Sphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(Sphere Center:{} Radius:{:.3})", Fmt(&self.center), self.radius)
    }
}
