//! Rays and line segments
//!
//! A [`Ray`] is a start point, a unit orientation and a length. An infinite
//! length turns it into a half-line; a finite one into a segment. Most other
//! shapes answer ray queries by forwarding here.

use std::fmt;

use crate::foundation::math::{directions, utils, Fmt, Vec3};
use crate::tolerance::{assert_tolerance, epsilon, ToleranceEq};

use super::cuboid::{Cuboid, CuboidCorner};
use super::plane::{Plane, PointPlaneRelation};
use super::predicates::{forward_symmetric, Contains, DistanceFrom, IntersectionWith, Intersects};
use super::sphere::Sphere;

// Corner pairs bounding each box edge: four along X, four along Y, four along Z.
const CUBOID_EDGES: [(CuboidCorner, CuboidCorner); 12] = [
    (CuboidCorner::FrontBottomLeft, CuboidCorner::FrontBottomRight),
    (CuboidCorner::FrontTopLeft, CuboidCorner::FrontTopRight),
    (CuboidCorner::BackBottomLeft, CuboidCorner::BackBottomRight),
    (CuboidCorner::BackTopLeft, CuboidCorner::BackTopRight),
    (CuboidCorner::FrontBottomLeft, CuboidCorner::FrontTopLeft),
    (CuboidCorner::FrontBottomRight, CuboidCorner::FrontTopRight),
    (CuboidCorner::BackBottomLeft, CuboidCorner::BackTopLeft),
    (CuboidCorner::BackBottomRight, CuboidCorner::BackTopRight),
    (CuboidCorner::FrontBottomLeft, CuboidCorner::BackBottomLeft),
    (CuboidCorner::FrontBottomRight, CuboidCorner::BackBottomRight),
    (CuboidCorner::FrontTopLeft, CuboidCorner::BackTopLeft),
    (CuboidCorner::FrontTopRight, CuboidCorner::BackTopRight),
];

/// A directed half-line or segment
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    start: Vec3,
    orientation: Vec3,
    length: f32,
}

impl Ray {
    /// Create a ray of the given length
    ///
    /// The orientation is normalized. A negative length reverses it.
    ///
    /// # Panics
    ///
    /// Panics if `orientation` is the zero vector.
    pub fn new(start: Vec3, orientation: Vec3, length: f32) -> Self {
        let Some(unit) = orientation.try_normalize(0.0) else {
            panic!("Ray orientation must not be the zero vector");
        };
        if length < 0.0 {
            Self {
                start,
                orientation: -unit,
                length: -length,
            }
        } else {
            Self {
                start,
                orientation: unit,
                length,
            }
        }
    }

    /// Create a ray of infinite length
    ///
    /// # Panics
    ///
    /// Panics if `orientation` is the zero vector.
    pub fn infinite(start: Vec3, orientation: Vec3) -> Self {
        Self::new(start, orientation, f32::INFINITY)
    }

    /// Segment from `start` to `end`
    ///
    /// Identical points give a zero-length ray facing [`directions::FORWARD`].
    pub fn from_start_and_end(start: Vec3, end: Vec3) -> Self {
        if start == end {
            return Self {
                start,
                orientation: directions::FORWARD,
                length: 0.0,
            };
        }
        let span = end - start;
        Self::new(start, span, span.norm())
    }

    /// Origin of the ray
    pub fn start_point(&self) -> Vec3 {
        self.start
    }

    /// Unit direction
    pub fn orientation(&self) -> Vec3 {
        self.orientation
    }

    /// Length; `f32::INFINITY` for a half-line
    pub fn length(&self) -> f32 {
        self.length
    }

    /// True for a half-line
    pub fn is_infinite_length(&self) -> bool {
        self.length.is_infinite()
    }

    /// Far end of a finite ray
    pub fn end_point(&self) -> Option<Vec3> {
        if self.is_infinite_length() {
            None
        } else {
            Some(self.start + self.orientation * self.length)
        }
    }

    /// Same start and orientation with a new length
    pub fn with_length(&self, length: f32) -> Self {
        Self::new(self.start, self.orientation, length)
    }

    /// The point on the ray closest to `point`
    pub fn point_projection(&self, point: &Vec3) -> Vec3 {
        if self.length == 0.0 {
            return self.start;
        }
        let along = (point - self.start).dot(&self.orientation);
        self.start + self.orientation * utils::clamp(along, 0.0, self.length)
    }

    /// Orthogonal projection of `point`, or `None` if it falls before the start or past the end
    pub fn strict_point_projection(&self, point: &Vec3) -> Option<Vec3> {
        let margin = epsilon();
        let along = (point - self.start).dot(&self.orientation);
        if along < -margin || along > self.length + margin {
            return None;
        }
        Some(self.start + self.orientation * utils::clamp(along, 0.0, self.length))
    }

    /// The point on this ray closest to `other`
    pub fn closest_point_to(&self, other: &Self) -> Vec3 {
        let alignment = self.orientation.dot(&other.orientation);
        if (alignment.abs() - 1.0).abs() < epsilon() {
            return self.closest_point_to_parallel(other);
        }

        let offset = self.start - other.start;
        let own_offset = self.orientation.dot(&offset);
        let other_offset = other.orientation.dot(&offset);
        let denominator = 1.0 - alignment * alignment;

        // Closest points of the infinite lines, then clamped onto each ray in turn.
        let along_self = utils::clamp((alignment * other_offset - own_offset) / denominator, 0.0, self.length);
        let along_other = utils::clamp(alignment * along_self + other_offset, 0.0, other.length);
        let along_self = utils::clamp(alignment * along_other - own_offset, 0.0, self.length);
        self.start + self.orientation * along_self
    }

    // Parallel lines have no unique closest pair; try each endpoint against the other ray.
    fn closest_point_to_parallel(&self, other: &Self) -> Vec3 {
        let candidates = [
            Some(self.start),
            self.end_point(),
            Some(self.point_projection(&other.start)),
            other.end_point().map(|end| self.point_projection(&end)),
        ];
        candidates
            .into_iter()
            .flatten()
            .fold((self.start, f32::MAX), |best, candidate| {
                let distance = other.distance_from(&candidate);
                if distance < best.1 {
                    (candidate, distance)
                } else {
                    best
                }
            })
            .0
    }

    /// Angle in radians between the ray and the plane normal, ignoring which side it faces
    pub fn incident_angle_with(&self, plane: &Plane) -> f32 {
        utils::clamp(plane.normal().dot(&self.orientation).abs(), 0.0, 1.0).acos()
    }

    /// Bounce off `plane`: an infinite ray from the hit point with the mirrored orientation
    pub fn reflect(&self, plane: &Plane) -> Option<Self> {
        let hit = self.intersection_with(plane)?;
        let normal = plane.normal();
        let mirrored = self.orientation - normal * (2.0 * self.orientation.dot(&normal));
        Some(Self::infinite(hit, mirrored))
    }
}

impl Contains<Vec3> for Ray {
    fn contains(&self, point: &Vec3) -> bool {
        self.distance_from(point) < epsilon()
    }
}

impl Contains<Self> for Ray {
    fn contains(&self, other: &Self) -> bool {
        match other.end_point() {
            Some(end) => self.contains(&other.start) && self.contains(&end),
            None => {
                self.is_infinite_length()
                    && self.contains(&other.start)
                    && self.orientation.equals(&other.orientation)
            }
        }
    }
}

impl DistanceFrom<Vec3> for Ray {
    fn distance_from(&self, point: &Vec3) -> f32 {
        let distance = (point - self.point_projection(point)).norm();
        if distance < epsilon() {
            0.0
        } else {
            distance
        }
    }
}

impl DistanceFrom<Self> for Ray {
    fn distance_from(&self, other: &Self) -> f32 {
        let towards_other = other.distance_from(&self.closest_point_to(other));
        let towards_self = self.distance_from(&other.closest_point_to(self));
        towards_other.min(towards_self)
    }
}

impl DistanceFrom<Cuboid> for Ray {
    fn distance_from(&self, other: &Cuboid) -> f32 {
        if self.intersects(other) {
            return 0.0;
        }
        // A disjoint segment is closest to the box at one of its ends or at a box edge.
        let end_distance = self.end_point().map_or(f32::MAX, |end| other.distance_from(&end));
        let corners = other.corners();
        CUBOID_EDGES
            .iter()
            .map(|&(from, to)| {
                let edge = Self::from_start_and_end(corners[from.ordinal()], corners[to.ordinal()]);
                self.distance_from(&edge)
            })
            .fold(other.distance_from(&self.start).min(end_distance), f32::min)
    }
}

impl DistanceFrom<Sphere> for Ray {
    fn distance_from(&self, other: &Sphere) -> f32 {
        if self.intersects(other) {
            return 0.0;
        }
        (self.distance_from(&other.center()) - other.radius()).max(0.0)
    }
}

forward_symmetric!(DistanceFrom: Ray => Plane);

impl IntersectionWith<Self> for Ray {
    type Output = Vec3;

    fn intersection_with(&self, other: &Self) -> Option<Vec3> {
        let candidate = self.closest_point_to(other);
        other.contains(&candidate).then_some(candidate)
    }
}

impl IntersectionWith<Cuboid> for Ray {
    type Output = Vec3;

    /// First point where the ray enters the box (slab method)
    fn intersection_with(&self, other: &Cuboid) -> Option<Vec3> {
        let min = other.front_bottom_left();
        let max = other.back_top_right();

        let mut candidate = self.start;
        let mut outside = [false; 3];
        for axis in 0..3 {
            if self.start[axis] < min[axis] {
                candidate[axis] = min[axis];
                outside[axis] = true;
            } else if self.start[axis] > max[axis] {
                candidate[axis] = max[axis];
                outside[axis] = true;
            }
        }
        if !outside.contains(&true) {
            return Some(self.start);
        }

        // The slab boundary crossed last is where the ray enters the box.
        let (entry_axis, distance) = (0..3)
            .filter(|&axis| outside[axis] && self.orientation[axis] != 0.0)
            .map(|axis| (axis, (candidate[axis] - self.start[axis]) / self.orientation[axis]))
            .fold(None, |best: Option<(usize, f32)>, (axis, distance)| match best {
                Some((_, best_distance)) if best_distance >= distance => best,
                _ => Some((axis, distance)),
            })?;
        let margin = epsilon();
        if distance < 0.0 || distance > self.length + margin {
            return None;
        }

        let mut hit = candidate;
        for axis in (0..3).filter(|&axis| axis != entry_axis) {
            hit[axis] = self.start[axis] + distance * self.orientation[axis];
            if hit[axis] < min[axis] - margin || hit[axis] > max[axis] + margin {
                return None;
            }
        }
        Some(hit)
    }
}

impl IntersectionWith<Sphere> for Ray {
    type Output = Vec3;

    /// First point where the ray touches the sphere
    fn intersection_with(&self, other: &Sphere) -> Option<Vec3> {
        if other.contains(&self.start) {
            return Some(self.start);
        }
        let center = other.center();
        if self.orientation.dot(&(center - self.start)) <= -epsilon() {
            return None;
        }

        // A segment ending inside the sphere enters it exactly where its half-line does.
        let reach = match self.end_point() {
            Some(end) if other.contains(&end) => self.with_length(f32::INFINITY),
            _ => *self,
        };
        let projection = reach.point_projection(&center);
        let offset_squared = (center - projection).norm_squared();
        let radius_squared = other.radius() * other.radius();
        let margin = epsilon();
        if offset_squared > radius_squared + margin * margin {
            return None;
        }
        if offset_squared < radius_squared {
            Some(projection - self.orientation * (radius_squared - offset_squared).sqrt())
        } else {
            Some(projection)
        }
    }
}

impl IntersectionWith<Plane> for Ray {
    type Output = Vec3;

    fn intersection_with(&self, other: &Plane) -> Option<Vec3> {
        if other.location_of(&self.start) == PointPlaneRelation::OnPlane {
            return Some(self.start);
        }
        let normal = other.normal();
        let facing = normal.dot(&self.orientation);
        if facing == 0.0 {
            return None;
        }
        let distance = normal.dot(&(other.centre_point() - self.start)) / facing;
        let margin = epsilon();
        if distance < -margin || distance > self.length + margin {
            return None;
        }
        Some(self.start + self.orientation * distance)
    }
}

impl Intersects<Self> for Ray {
    fn intersects(&self, other: &Self) -> bool {
        self.intersection_with(other).is_some()
    }
}

impl Intersects<Cuboid> for Ray {
    fn intersects(&self, other: &Cuboid) -> bool {
        self.intersection_with(other).is_some()
    }
}

impl Intersects<Sphere> for Ray {
    fn intersects(&self, other: &Sphere) -> bool {
        self.intersection_with(other).is_some()
    }
}

impl Intersects<Plane> for Ray {
    fn intersects(&self, other: &Plane) -> bool {
        self.intersection_with(other).is_some()
    }
}

impl ToleranceEq for Ray {
    fn equals_exactly(&self, other: &Self) -> bool {
        self.start.equals_exactly(&other.start)
            && self.orientation.equals_exactly(&other.orientation)
            && self.length.equals_exactly(&other.length)
    }

    fn equals_with_tolerance(&self, other: &Self, tolerance: f32) -> bool {
        assert_tolerance(tolerance);
        self.start.equals_with_tolerance(&other.start, tolerance)
            && self.orientation.equals_with_tolerance(&other.orientation, tolerance)
            && self.length.equals_with_tolerance(&other.length, tolerance)
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(Ray Start:{} Orientation:{} Length:", Fmt(&self.start), Fmt(&self.orientation))?;
        if self.is_infinite_length() {
            write!(f, "Inf)")
        } else {
            write!(f, "{:.3})", self.length)
        }
    }
}
