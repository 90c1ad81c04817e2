//! Infinite planes
//!
//! A plane is stored as a unit normal `n` and a signed offset `d` such that
//! every point `p` on it satisfies `n·p + d = 0`. The offset is how far you
//! travel along the normal from the plane to reach the world origin.

use std::fmt;
use std::ops::Neg;

use crate::error::GeometryError;
use crate::foundation::math::{utils, Fmt, Vec3};
use crate::tolerance::{assert_tolerance, epsilon, ToleranceEq};

use super::cuboid::Cuboid;
use super::predicates::{forward_symmetric, Contains, DistanceFrom, IntersectionWith, Intersects};
use super::ray::Ray;
use super::sphere::Sphere;

/// Which side of a plane a point lies on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointPlaneRelation {
    /// Negative signed distance
    BehindPlane,
    /// Positive signed distance
    InFrontOfPlane,
    /// Within epsilon of the plane
    OnPlane,
}

/// The line shared by two non-parallel planes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneIntersection {
    /// Unit direction of the line (`n1 × n2`, normalized)
    pub direction: Vec3,
    /// A point on the line with one coordinate fixed at zero
    pub point: Vec3,
}

/// An infinite plane
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    normal: Vec3,
    distance_to_origin: f32,
}

impl Plane {
    /// Create a plane from a normal (normalized here) and a signed offset
    ///
    /// # Panics
    ///
    /// Panics if `normal` is the zero vector.
    pub fn new(normal: Vec3, distance_to_origin: f32) -> Self {
        let Some(unit) = normal.try_normalize(0.0) else {
            panic!("Plane normal must not be the zero vector");
        };
        Self {
            normal: unit,
            distance_to_origin,
        }
    }

    /// The plane with the given normal passing through `point`
    ///
    /// # Panics
    ///
    /// Panics if `normal` is the zero vector.
    pub fn from_point(normal: Vec3, point: Vec3) -> Self {
        let plane = Self::new(normal, 0.0);
        Self {
            distance_to_origin: plane.normal.dot(&-point),
            ..plane
        }
    }

    /// The plane through three points, facing along `(b - a) × (c - a)`
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ColinearPoints`] if the points lie on one line.
    pub fn from_points(a: Vec3, b: Vec3, c: Vec3) -> Result<Self, GeometryError> {
        let normal = (b - a).cross(&(c - a));
        if normal == Vec3::zeros() {
            log::debug!("No plane through colinear points {} {} {}", Fmt(&a), Fmt(&b), Fmt(&c));
            return Err(GeometryError::ColinearPoints);
        }
        Ok(Self::from_point(normal, a))
    }

    /// Unit normal
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Signed offset `d` in `n·p + d = 0`
    pub fn distance_to_origin(&self) -> f32 {
        self.distance_to_origin
    }

    /// The point on the plane closest to the world origin
    pub fn centre_point(&self) -> Vec3 {
        self.normal * -self.distance_to_origin
    }

    /// Same plane facing the other way
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            distance_to_origin: -self.distance_to_origin,
        }
    }

    /// Distance along the normal from the plane to `point`; negative behind the plane
    pub fn signed_distance_from(&self, point: &Vec3) -> f32 {
        self.normal.dot(point) + self.distance_to_origin
    }

    /// Classify `point` against the plane
    pub fn location_of(&self, point: &Vec3) -> PointPlaneRelation {
        let signed = self.signed_distance_from(point);
        if signed.abs() < epsilon() {
            PointPlaneRelation::OnPlane
        } else if signed > 0.0 {
            PointPlaneRelation::InFrontOfPlane
        } else {
            PointPlaneRelation::BehindPlane
        }
    }

    /// Move `point` onto the plane along the normal
    pub fn point_projection(&self, point: &Vec3) -> Vec3 {
        point - self.normal * self.normal.dot(&(point - self.centre_point()))
    }

    /// Flatten a direction against the plane, without any translation
    pub fn orientation_projection(&self, orientation: &Vec3) -> Vec3 {
        orientation - self.normal * orientation.dot(&self.normal)
    }

    /// Shadow of `ray` on the plane
    ///
    /// A finite ray maps to the segment between its projected endpoints. An
    /// infinite ray stays infinite, except when it runs along the normal: then
    /// only its start survives, as a zero-length ray.
    pub fn ray_projection(&self, ray: &Ray) -> Ray {
        let start = self.point_projection(&ray.start_point());
        if let Some(end) = ray.end_point() {
            return Ray::from_start_and_end(start, self.point_projection(&end));
        }
        match self.orientation_projection(&ray.orientation()).try_normalize(epsilon()) {
            Some(direction) => Ray::infinite(start, direction),
            None => {
                log::trace!("Ray {} is perpendicular to {}; projecting to a point", ray, self);
                Ray::from_start_and_end(start, start)
            }
        }
    }

    /// Angle in radians between `ray` and this plane's normal
    pub fn incident_angle_with(&self, ray: &Ray) -> f32 {
        ray.incident_angle_with(self)
    }

    /// `ray` bounced off this plane, if it reaches it
    pub fn reflect(&self, ray: &Ray) -> Option<Ray> {
        ray.reflect(self)
    }

    fn is_parallel_to(&self, other: &Self) -> bool {
        (self.normal.dot(&other.normal).abs() - 1.0).abs() < epsilon()
    }
}

impl Neg for Plane {
    type Output = Self;

    fn neg(self) -> Self {
        self.flipped()
    }
}

impl Contains<Vec3> for Plane {
    fn contains(&self, point: &Vec3) -> bool {
        self.location_of(point) == PointPlaneRelation::OnPlane
    }
}

impl Contains<Ray> for Plane {
    fn contains(&self, ray: &Ray) -> bool {
        let start = ray.start_point();
        self.contains(&start) && self.contains(&(start + ray.orientation() * 2.0))
    }
}

impl DistanceFrom<Vec3> for Plane {
    fn distance_from(&self, point: &Vec3) -> f32 {
        let distance = self.signed_distance_from(point).abs();
        if distance < epsilon() {
            0.0
        } else {
            distance
        }
    }
}

impl DistanceFrom<Self> for Plane {
    fn distance_from(&self, other: &Self) -> f32 {
        if self.is_parallel_to(other) {
            self.distance_from(&other.centre_point())
        } else {
            0.0
        }
    }
}

impl DistanceFrom<Sphere> for Plane {
    fn distance_from(&self, other: &Sphere) -> f32 {
        let gap = self.signed_distance_from(&other.center()).abs() - other.radius();
        if gap <= epsilon() {
            0.0
        } else {
            gap
        }
    }
}

impl DistanceFrom<Cuboid> for Plane {
    fn distance_from(&self, other: &Cuboid) -> f32 {
        if self.intersects(other) {
            return 0.0;
        }
        other
            .corners()
            .iter()
            .map(|corner| self.signed_distance_from(corner).abs())
            .fold(f32::MAX, f32::min)
    }
}

impl DistanceFrom<Ray> for Plane {
    fn distance_from(&self, other: &Ray) -> f32 {
        if other.intersects(self) {
            return 0.0;
        }
        // A ray that misses is parallel or heading away, so its start is closest unless it ends nearer.
        let start = self.signed_distance_from(&other.start_point()).abs();
        other
            .end_point()
            .map_or(start, |end| start.min(self.signed_distance_from(&end).abs()))
    }
}

impl Intersects<Self> for Plane {
    fn intersects(&self, other: &Self) -> bool {
        self.distance_from(other) <= epsilon()
    }
}

impl Intersects<Sphere> for Plane {
    fn intersects(&self, other: &Sphere) -> bool {
        self.distance_from(other) == 0.0
    }
}

impl Intersects<Cuboid> for Plane {
    fn intersects(&self, other: &Cuboid) -> bool {
        let mut in_front = false;
        let mut behind = false;
        for corner in &other.corners() {
            match self.location_of(corner) {
                PointPlaneRelation::OnPlane => return true,
                PointPlaneRelation::InFrontOfPlane => in_front = true,
                PointPlaneRelation::BehindPlane => behind = true,
            }
        }
        in_front && behind
    }
}

forward_symmetric!(Intersects: Plane => Ray);

impl IntersectionWith<Self> for Plane {
    type Output = PlaneIntersection;

    /// The line where two planes meet; `None` for parallel planes
    fn intersection_with(&self, other: &Self) -> Option<PlaneIntersection> {
        if self.is_parallel_to(other) {
            return None;
        }
        let (n1, d1) = (self.normal, self.distance_to_origin);
        let (n2, d2) = (other.normal, other.distance_to_origin);
        let line = n1.cross(&n2);

        // Zero the coordinate along which the line moves fastest and solve the 2x2 system for the rest.
        let dominant = line.iamax();
        let denominator = line[dominant];
        let point = match dominant {
            0 => Vec3::new(
                0.0,
                (n1.z * d2 - n2.z * d1) / denominator,
                (n2.y * d1 - n1.y * d2) / denominator,
            ),
            1 => Vec3::new(
                (n2.z * d1 - n1.z * d2) / denominator,
                0.0,
                (n1.x * d2 - n2.x * d1) / denominator,
            ),
            _ => Vec3::new(
                (n1.y * d2 - n2.y * d1) / denominator,
                (n2.x * d1 - n1.x * d2) / denominator,
                0.0,
            ),
        };
        Some(PlaneIntersection {
            direction: utils::with_length(&line, 1.0),
            point,
        })
    }
}

forward_symmetric!(IntersectionWith: Plane => Ray);

impl ToleranceEq for Plane {
    fn equals_exactly(&self, other: &Self) -> bool {
        self.normal.equals_exactly(&other.normal)
            && self.distance_to_origin.equals_exactly(&other.distance_to_origin)
    }

    fn equals_with_tolerance(&self, other: &Self, tolerance: f32) -> bool {
        assert_tolerance(tolerance);
        self.normal.equals_with_tolerance(&other.normal, tolerance)
            && self.distance_to_origin.equals_with_tolerance(&other.distance_to_origin, tolerance)
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(Plane Normal:{} DistanceToOrigin:{:.3})",
            Fmt(&self.normal),
            self.distance_to_origin
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::directions;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn skewed_normal() -> Vec3 {
        Vec3::new(-13515.0, 135.0, 0.135)
    }

    fn fixtures() -> [Plane; 4] {
        [
            Plane::new(directions::UP, -10.0),
            Plane::new(directions::UP, 10.0),
            Plane::new(directions::DOWN, 10.0),
            Plane::new(skewed_normal(), 45.0),
        ]
    }

    fn cuboids() -> [Cuboid; 5] {
        [
            Cuboid::new(Vec3::zeros(), 5.0, 5.0, 5.0),
            Cuboid::new(Vec3::repeat(-10.0), -20.0, -20.0, -20.0),
            Cuboid::new(Vec3::new(4.0, 5.0, 6.0), 7.0, 8.0, 9.0),
            Cuboid::new(Vec3::new(10.0, -20.0, 30.0), -40.0, 50.0, -10.0),
            Cuboid::new(Vec3::new(3.0, -3.0, 1.0), 9.0, 2.5, 2.0),
        ]
    }

    #[test]
    fn test_construction() {
        let [a, b, _, d] = fixtures();
        assert_relative_eq!(d.normal(), skewed_normal().normalize());
        assert!(a.equals(&Plane::from_point(directions::UP, Vec3::new(5.0, 10.0, 100.0))));
        assert!(b.equals(&Plane::from_point(directions::UP * 3.0, Vec3::new(-5.0, -10.0, 0.0))));
    }

    #[test]
    #[should_panic(expected = "must not be the zero vector")]
    fn test_zero_normal_panics() {
        Plane::new(Vec3::zeros(), 1.0);
    }

    #[test]
    fn test_from_points() {
        let [a, b, c, _] = fixtures();
        let upper = Plane::from_points(Vec3::new(0.0, 10.0, 0.0), Vec3::new(0.0, 10.0, 20.0), Vec3::new(20.0, 10.0, -20.0));
        assert!(upper.as_ref().is_ok_and(|plane| plane.equals(&a)));
        assert!(upper.is_ok_and(|plane| plane.equals(&-c)));
        let lower =
            Plane::from_points(Vec3::new(0.0, -10.0, 0.0), Vec3::new(0.0, -10.0, 20.0), Vec3::new(20.0, -10.0, -20.0));
        assert!(lower.is_ok_and(|plane| plane.equals(&b)));
        assert_eq!(
            Plane::from_points(Vec3::repeat(1.0), Vec3::repeat(2.0), Vec3::repeat(4.0)).err(),
            Some(GeometryError::ColinearPoints)
        );
    }

    #[test]
    fn test_flipped() {
        let [a, b, c, d] = fixtures();
        assert!(a.equals(&-c));
        assert!(b.flipped().equals(&Plane::new(directions::DOWN, -10.0)));
        assert!((-d).equals(&Plane::new(-d.normal(), -45.0)));
        assert!(a.flipped().flipped().equals_exactly(&a));
    }

    #[test]
    fn test_centre_point() {
        let [a, b, c, d] = fixtures();
        assert_eq!(a.centre_point(), Vec3::new(0.0, 10.0, 0.0));
        assert_eq!(b.centre_point(), Vec3::new(0.0, -10.0, 0.0));
        assert_eq!(c.centre_point(), Vec3::new(0.0, 10.0, 0.0));
        assert_relative_eq!(d.centre_point(), utils::with_length(&skewed_normal(), -45.0), epsilon = 1e-4);
    }

    #[test]
    fn test_location_of() {
        let [a, b, c, d] = fixtures();
        let probe = Vec3::new(0.0, 11.0, 0.0);
        assert_eq!(a.location_of(&probe), PointPlaneRelation::InFrontOfPlane);
        assert_eq!(b.location_of(&probe), PointPlaneRelation::InFrontOfPlane);
        assert_eq!(c.location_of(&probe), PointPlaneRelation::BehindPlane);
        assert_eq!(d.location_of(&d.centre_point()), PointPlaneRelation::OnPlane);
        assert_abs_diff_eq!(a.signed_distance_from(&Vec3::new(0.0, 5.0, 0.0)), -5.0);
    }

    #[test]
    fn test_contains() {
        let [a, b, c, d] = fixtures();
        assert!(a.contains(&Ray::infinite(Vec3::new(0.0, 10.0, 0.0), directions::RIGHT)));
        assert!(b.contains(&Ray::new(Vec3::new(0.0, -10.0, 0.0), directions::BACKWARD, 10.0)));
        assert!(!c.contains(&Ray::infinite(Vec3::new(0.0, 11.0, 0.0), directions::FORWARD)));
        assert!(!d.contains(&Ray::infinite(d.centre_point(), directions::UP)));
        assert!(c.contains(&Vec3::new(-100_000.0, 10.0, 413_135.0)));
    }

    #[test]
    fn test_distance_from_point() {
        let [a, b, c, d] = fixtures();
        assert_abs_diff_eq!(a.distance_from(&Vec3::new(0.0, 11.0, 0.0)), 1.0);
        assert_abs_diff_eq!(b.distance_from(&Vec3::new(0.0, 11.0, 0.0)), 21.0);
        assert_eq!(c.distance_from(&Vec3::new(-100_000.0, 10.0, 413_135.0)), 0.0);
        let off_plane = d.centre_point() + utils::with_length(&skewed_normal(), -33.0);
        assert_abs_diff_eq!(d.distance_from(&off_plane), 33.0, epsilon = 0.01);
    }

    #[test]
    fn test_distance_from_plane() {
        let [a, b, c, d] = fixtures();
        assert_abs_diff_eq!(a.distance_from(&b), 20.0);
        assert_eq!(a.distance_from(&c), 0.0);
        assert_eq!(a.distance_from(&d), 0.0);
        for first in &fixtures() {
            for second in &fixtures() {
                assert_abs_diff_eq!(first.distance_from(second), second.distance_from(first), epsilon = 1e-3);
            }
        }
    }

    #[test]
    fn test_distance_from_and_intersects_sphere() {
        let [a, b, c, d] = fixtures();
        let far = Sphere::new(Vec3::repeat(30.0), 5.0);
        let distant = Sphere::new(Vec3::new(12_501_051.0, 30.0, -0.135_135), 5.0);
        let straddling = Sphere::new(Vec3::new(0.0, 30.0, 0.0), 20.0);
        let near_skewed = Sphere::new(utils::with_length(&skewed_normal(), -42.0), 4.0);
        assert_abs_diff_eq!(a.distance_from(&far), 15.0);
        assert_abs_diff_eq!(b.distance_from(&distant), 35.0);
        assert_eq!(c.distance_from(&straddling), 0.0);
        assert_eq!(d.distance_from(&near_skewed), 0.0);
        assert!(!a.intersects(&far));
        assert!(!b.intersects(&distant));
        assert!(c.intersects(&straddling));
        assert!(d.intersects(&near_skewed));
        assert!(straddling.intersects(&c));
        assert_abs_diff_eq!(far.distance_from(&a), 15.0);
    }

    #[test]
    fn test_cuboid_queries() {
        let [a, b, c, d, e] = cuboids();
        let planes = [
            Plane::new(directions::RIGHT, 10.0),
            Plane::new(directions::LEFT + directions::DOWN, 0.0),
            Plane::new(directions::DOWN, -100.0),
            Plane::new(directions::FORWARD, -20.0),
            Plane::new(directions::LEFT, 12.0),
        ];
        assert_abs_diff_eq!(a.distance_from(&planes[0]), 10.0);
        assert_abs_diff_eq!(b.distance_from(&planes[1]), 200.0_f32.sqrt(), epsilon = 1e-4);
        assert_abs_diff_eq!(c.distance_from(&planes[2]), 105.0);
        assert_eq!(d.distance_from(&planes[3]), 0.0);
        assert_eq!(e.distance_from(&planes[4]), 0.0);

        assert!(!a.intersects(&planes[0]));
        assert!(!b.intersects(&planes[1]));
        assert!(!c.intersects(&planes[2]));
        assert!(d.intersects(&planes[3]));
        assert!(e.intersects(&planes[4]));
        // Corners on both sides, none on the plane.
        assert!(planes[0].intersects(&Cuboid::new(Vec3::new(-12.0, 0.0, 0.0), 5.0, 1.0, 1.0)));
    }

    #[test]
    fn test_intersects_plane() {
        let [a, b, c, d] = fixtures();
        assert!(a.intersects(&Plane::new(directions::RIGHT, 1.0)));
        assert!(b.intersects(&Plane::new(directions::RIGHT, 1.0)));
        assert!(!c.intersects(&Plane::new(directions::UP, 1.0)));
        assert!(!d.intersects(&Plane::new(utils::with_length(&skewed_normal(), 135_135_135.0), -15161.0)));
        assert!(a.intersects(&c));
    }

    #[test]
    fn test_point_projection() {
        let [a, b, c, d] = fixtures();
        let probe = Vec3::new(5.0, -300.0, -45.0);
        assert_relative_eq!(a.point_projection(&probe), Vec3::new(5.0, 10.0, -45.0));
        assert_relative_eq!(b.point_projection(&probe), Vec3::new(5.0, -10.0, -45.0));
        assert_relative_eq!(c.point_projection(&probe), Vec3::new(5.0, 10.0, -45.0));
        let projected = d.point_projection(&utils::with_length(&skewed_normal(), -99_999.0));
        assert!(projected.equals_with_tolerance(&Vec3::new(45.016, -0.450, 0.000), 0.1));

        assert_relative_eq!(a.orientation_projection(&Vec3::new(1.0, 1.0, 0.0)), Vec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(c.orientation_projection(&Vec3::new(0.0, -4.0, 3.0)), Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn test_ray_projection() {
        let [a, b, c, d] = fixtures();
        let slanted = Ray::from_start_and_end(Vec3::new(5.0, 450.0, -45.0), Vec3::new(100.0, -200.0, -90.0));
        let on_a = Ray::from_start_and_end(Vec3::new(5.0, 10.0, -45.0), Vec3::new(100.0, 10.0, -90.0));
        let on_b = Ray::from_start_and_end(Vec3::new(5.0, -10.0, -45.0), Vec3::new(100.0, -10.0, -90.0));
        assert!(a.ray_projection(&slanted).equals(&on_a));
        assert!(b.ray_projection(&slanted).equals(&on_b));
        assert!(c.ray_projection(&slanted).equals(&on_a));

        let along = d.ray_projection(&Ray::infinite(d.centre_point(), directions::RIGHT));
        assert!(along.is_infinite_length());
        assert_abs_diff_eq!(d.normal().dot(&along.orientation()), 0.0, epsilon = 1e-3);

        let straight_down = a.ray_projection(&Ray::infinite(Vec3::new(1.0, 50.0, 1.0), directions::DOWN));
        assert_eq!(straight_down.length(), 0.0);
        assert_relative_eq!(straight_down.start_point(), Vec3::new(1.0, 10.0, 1.0));
    }

    #[test]
    fn test_intersection_with_plane() {
        let [a, b, ..] = fixtures();
        let line = a.intersection_with(&Plane::new(directions::RIGHT, -10.0)).expect("planes cross");
        assert_relative_eq!(line.direction.z.abs(), 1.0);
        assert_relative_eq!(line.point, Vec3::new(10.0, 10.0, 0.0));

        let line = b.intersection_with(&Plane::new(directions::FORWARD, 10.0)).expect("planes cross");
        assert_relative_eq!(line.direction.x.abs(), 1.0);
        assert_relative_eq!(line.point, Vec3::new(0.0, -10.0, -10.0));

        let line = Plane::new(directions::RIGHT, 0.0)
            .intersection_with(&Plane::new(directions::FORWARD, 10.0))
            .expect("planes cross");
        assert_relative_eq!(line.direction.y.abs(), 1.0);
        assert_relative_eq!(line.point, Vec3::new(0.0, 0.0, -10.0));

        assert!(a.intersection_with(&b).is_none());
    }

    #[test]
    fn test_ray_delegates() {
        let [a, ..] = fixtures();
        let falling = Ray::infinite(Vec3::new(0.0, 20.0, 0.0), Vec3::new(1.0, -1.0, 0.0));
        let hit = a.intersection_with(&falling).expect("ray reaches the plane");
        assert_relative_eq!(hit, Vec3::new(10.0, 10.0, 0.0), epsilon = 1e-4);
        assert!(a.intersects(&falling));
        assert_abs_diff_eq!(a.incident_angle_with(&falling), std::f32::consts::FRAC_PI_4, epsilon = 1e-5);
        let bounced = a.reflect(&falling).expect("ray reaches the plane");
        assert!(bounced.equals(&Ray::infinite(Vec3::new(10.0, 10.0, 0.0), Vec3::new(1.0, 1.0, 0.0))));
        assert_abs_diff_eq!(a.distance_from(&Ray::infinite(Vec3::new(0.0, 15.0, 0.0), directions::UP)), 5.0);
        assert_eq!(a.distance_from(&falling), 0.0);
    }

    #[test]
    fn test_equality_and_display() {
        let [a, b, ..] = fixtures();
        assert!(a.equals(&a));
        assert!(!a.equals(&b));
        assert_eq!(a.to_string(), "(Plane Normal:(0.000, 1.000, 0.000) DistanceToOrigin:-10.000)");
    }
}
