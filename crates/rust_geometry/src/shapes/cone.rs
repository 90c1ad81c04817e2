//! Upright cone and conical frustum
//!
//! A cone hangs down from its top centre: the axis is parallel to Y, the top
//! rim sits at `top_center.y` and the bottom rim `height` units below it.
//! Nearly every predicate reduces to [`Cone::get_radius`] at some height,
//! compared against a horizontal (XZ) distance.

use std::fmt;

use crate::foundation::math::{constants, utils, Fmt, Vec3};
use crate::tolerance::{assert_tolerance, epsilon, ToleranceEq};

use super::cuboid::Cuboid;
use super::cylinder::Cylinder;
use super::predicates::{Contains, Intersects};
use super::ray::Ray;

/// A cone or conical frustum with a vertical axis
#[derive(Debug, Clone, Copy)]
pub struct Cone {
    top_center: Vec3,
    top_radius: f32,
    bottom_radius: f32,
    height: f32,
}

impl Cone {
    /// Pointed cone with its apex at `top_center`
    ///
    /// A negative height flips the cone so it stands on `top_center` instead.
    pub fn new(top_center: Vec3, bottom_radius: f32, height: f32) -> Self {
        Self::frustum(top_center, bottom_radius, height, 0.0)
    }

    /// Frustum with a `top_radius` rim at `top_center` and a `bottom_radius` rim `height` below
    ///
    /// A negative height turns the shape upside down: the radii swap and the
    /// top centre moves up by `|height|`.
    pub fn frustum(top_center: Vec3, bottom_radius: f32, height: f32, top_radius: f32) -> Self {
        if height < 0.0 {
            Self {
                top_center: Vec3::new(top_center.x, top_center.y - height, top_center.z),
                top_radius: bottom_radius.abs(),
                bottom_radius: top_radius.abs(),
                height: -height,
            }
        } else {
            Self {
                top_center,
                top_radius: top_radius.abs(),
                bottom_radius: bottom_radius.abs(),
                height,
            }
        }
    }

    /// Centre of the top rim
    pub fn top_center(&self) -> Vec3 {
        self.top_center
    }

    /// Centre of the bottom rim
    pub fn bottom_center(&self) -> Vec3 {
        Vec3::new(self.top_center.x, self.top_center.y - self.height, self.top_center.z)
    }

    /// Radius of the top rim; zero for a pointed cone
    pub fn top_radius(&self) -> f32 {
        self.top_radius
    }

    /// Radius of the bottom rim
    pub fn bottom_radius(&self) -> f32 {
        self.bottom_radius
    }

    /// Vertical extent
    pub fn height(&self) -> f32 {
        self.height
    }

    /// True if both rims have a nonzero radius
    pub fn is_conical_frustum(&self) -> bool {
        self.top_radius != 0.0 && self.bottom_radius != 0.0
    }

    /// Lateral area plus both caps; zero for a flat cone
    pub fn surface_area(&self) -> f32 {
        if self.height == 0.0 {
            return 0.0;
        }
        let (big, small) = (self.bottom_radius, self.top_radius);
        let slant = ((big - small) * (big - small) + self.height * self.height).sqrt();
        constants::PI * (big + small) * slant + constants::PI * small * small + constants::PI * big * big
    }

    /// Enclosed volume
    pub fn volume(&self) -> f32 {
        let (big, small) = (self.bottom_radius, self.top_radius);
        constants::PI * (self.height / 3.0) * (big * big + big * small + small * small)
    }

    /// Same top centre and height with the two radii swapped
    pub fn inverse(&self) -> Self {
        Self::frustum(self.top_center, self.top_radius, self.height, self.bottom_radius)
    }

    /// Radius of the horizontal cross-section `distance_from_top` below the top rim
    ///
    /// # Panics
    ///
    /// Panics if `distance_from_top` lies outside `[0, height]` by more than epsilon.
    pub fn get_radius(&self, distance_from_top: f32) -> f32 {
        let margin = epsilon();
        assert!(
            distance_from_top + margin >= 0.0 && distance_from_top <= self.height + margin,
            "Distance from top ({distance_from_top}) must lie within the cone height ({})",
            self.height
        );
        self.radius_at_depth(distance_from_top)
    }

    // Interpolated radius, with the depth clamped onto the cone.
    fn radius_at_depth(&self, distance_from_top: f32) -> f32 {
        if self.height == 0.0 {
            return 0.0;
        }
        let depth = utils::clamp(distance_from_top, 0.0, self.height);
        let along = depth / self.height;
        (1.0 - along) * self.top_radius + along * self.bottom_radius
    }

    fn radius_at_height(&self, y: f32) -> f32 {
        self.radius_at_depth(self.top_center.y - y)
    }

    fn spans_height(&self, y: f32) -> bool {
        let margin = epsilon();
        y <= self.top_center.y + margin && y + margin >= self.top_center.y - self.height
    }

    // True if a disc of `radius` around the axis point `center` at its own height fits.
    fn contains_disc(&self, center: &Vec3, radius: f32) -> bool {
        utils::xz_distance(center, &self.top_center) + radius <= self.radius_at_height(center.y) + epsilon()
    }
}

impl Contains<Vec3> for Cone {
    fn contains(&self, point: &Vec3) -> bool {
        if !self.spans_height(point.y) {
            return false;
        }
        let margin = epsilon();
        let radius = self.radius_at_height(point.y);
        (utils::xz(point) - utils::xz(&self.top_center)).norm_squared() <= radius * radius + margin * margin
    }
}

impl Contains<Ray> for Cone {
    fn contains(&self, ray: &Ray) -> bool {
        ray.end_point()
            .is_some_and(|end| self.contains(&ray.start_point()) && self.contains(&end))
    }
}

impl Contains<Self> for Cone {
    fn contains(&self, other: &Self) -> bool {
        let other_bottom = other.bottom_center();
        self.spans_height(other.top_center.y)
            && self.spans_height(other_bottom.y)
            && self.contains_disc(&other.top_center, other.top_radius)
            && self.contains_disc(&other_bottom, other.bottom_radius)
    }
}

impl Contains<Cylinder> for Cone {
    fn contains(&self, other: &Cylinder) -> bool {
        self.contains(&other.to_symmetrical_conical_frustum())
    }
}

impl Contains<Cuboid> for Cone {
    fn contains(&self, other: &Cuboid) -> bool {
        other.corners().iter().all(|corner| self.contains(corner))
    }
}

impl Intersects<Self> for Cone {
    fn intersects(&self, other: &Self) -> bool {
        let margin = epsilon();
        let low = self.bottom_center().y.max(other.bottom_center().y);
        let high = self.top_center.y.min(other.top_center.y);
        if high + margin < low {
            return false;
        }
        // The summed radii are linear in y over the overlap, so the ends decide.
        let axis_distance = utils::xz_distance(&self.top_center, &other.top_center);
        [low, high].iter().any(|&y| {
            axis_distance <= self.radius_at_height(y) + other.radius_at_height(y) + margin
        })
    }
}

impl Intersects<Cylinder> for Cone {
    fn intersects(&self, other: &Cylinder) -> bool {
        self.intersects(&other.to_symmetrical_conical_frustum())
    }
}

impl ToleranceEq for Cone {
    fn equals_exactly(&self, other: &Self) -> bool {
        self.top_center.equals_exactly(&other.top_center)
            && self.top_radius.equals_exactly(&other.top_radius)
            && self.bottom_radius.equals_exactly(&other.bottom_radius)
            && self.height.equals_exactly(&other.height)
    }

    fn equals_with_tolerance(&self, other: &Self, tolerance: f32) -> bool {
        assert_tolerance(tolerance);
        self.top_center.equals_with_tolerance(&other.top_center, tolerance)
            && self.top_radius.equals_with_tolerance(&other.top_radius, tolerance)
            && self.bottom_radius.equals_with_tolerance(&other.bottom_radius, tolerance)
            && self.height.equals_with_tolerance(&other.height, tolerance)
    }
}

impl fmt::Display for Cone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(Cone TopCenter:{} TopRadius:{:.3} BottomRadius:{:.3} Height:{:.3})",
            Fmt(&self.top_center),
            self.top_radius,
            self.bottom_radius,
            self.height
        )
    }
}
