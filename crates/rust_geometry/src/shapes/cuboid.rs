//! Axis-aligned box primitive

use std::fmt;

use crate::foundation::math::{utils, Fmt, Vec2, Vec3};
use crate::tolerance::{assert_tolerance, epsilon, ToleranceEq};

use super::cone::Cone;
use super::cylinder::Cylinder;
use super::plane::Plane;
use super::predicates::{forward_symmetric, Contains, DistanceFrom, IntersectionWith, Intersects};
use super::ray::Ray;
use super::rectangle::Rectangle;
use super::sphere::Sphere;

/// Corner selector with a stable ordinal (see [`CuboidCorner::ALL`])
///
/// "Front" is minimum Z, "Bottom" is minimum Y and "Left" is minimum X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CuboidCorner {
    /// Min X, max Y, min Z
    FrontTopLeft = 0,
    /// Max X, max Y, min Z
    FrontTopRight = 1,
    /// Min X, min Y, min Z
    FrontBottomLeft = 2,
    /// Max X, min Y, min Z
    FrontBottomRight = 3,
    /// Min X, max Y, max Z
    BackTopLeft = 4,
    /// Max X, max Y, max Z
    BackTopRight = 5,
    /// Min X, min Y, max Z
    BackBottomLeft = 6,
    /// Max X, min Y, max Z
    BackBottomRight = 7,
}

impl CuboidCorner {
    /// Every corner, in ordinal order
    pub const ALL: [Self; 8] = [
        Self::FrontTopLeft,
        Self::FrontTopRight,
        Self::FrontBottomLeft,
        Self::FrontBottomRight,
        Self::BackTopLeft,
        Self::BackTopRight,
        Self::BackBottomLeft,
        Self::BackBottomRight,
    ];

    /// Position of this corner in [`Self::ALL`]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    const fn is_right(self) -> bool {
        matches!(
            self,
            Self::FrontTopRight | Self::FrontBottomRight | Self::BackTopRight | Self::BackBottomRight
        )
    }

    const fn is_top(self) -> bool {
        matches!(
            self,
            Self::FrontTopLeft | Self::FrontTopRight | Self::BackTopLeft | Self::BackTopRight
        )
    }

    const fn is_back(self) -> bool {
        matches!(
            self,
            Self::BackTopLeft | Self::BackTopRight | Self::BackBottomLeft | Self::BackBottomRight
        )
    }
}

/// Face selector for [`Cuboid::side`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CuboidSide {
    /// Min Z face
    Front,
    /// Max Y face
    Top,
    /// Max Z face
    Back,
    /// Min Y face
    Bottom,
    /// Min X face
    Left,
    /// Max X face
    Right,
}

/// An axis-aligned box anchored at its front-bottom-left (minimum) corner
#[derive(Debug, Clone, Copy)]
pub struct Cuboid {
    front_bottom_left: Vec3,
    width: f32,
    height: f32,
    depth: f32,
}

impl Cuboid {
    /// Create a cuboid
    ///
    /// Negative extents move the anchor and are stored as absolute values, so
    /// the covered region is unchanged.
    pub fn new(front_bottom_left: Vec3, width: f32, height: f32, depth: f32) -> Self {
        let mut anchor = front_bottom_left;
        if width < 0.0 {
            anchor.x += width;
        }
        if height < 0.0 {
            anchor.y += height;
        }
        if depth < 0.0 {
            anchor.z += depth;
        }
        Self {
            front_bottom_left: anchor,
            width: width.abs(),
            height: height.abs(),
            depth: depth.abs(),
        }
    }

    /// Extrude a front face (in the XY plane at `z`) backwards by `depth`
    pub fn from_rectangle(front_face: &Rectangle, z: f32, depth: f32) -> Self {
        let corner = front_face.bottom_left();
        Self::new(Vec3::new(corner.x, corner.y, z), front_face.width(), front_face.height(), depth)
    }

    /// Minimum corner
    pub fn front_bottom_left(&self) -> Vec3 {
        self.front_bottom_left
    }

    /// Maximum corner
    pub fn back_top_right(&self) -> Vec3 {
        self.front_bottom_left + Vec3::new(self.width, self.height, self.depth)
    }

    /// Extent along X
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Extent along Y
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Extent along Z
    pub fn depth(&self) -> f32 {
        self.depth
    }

    /// Enclosed volume
    pub fn volume(&self) -> f32 {
        self.width * self.height * self.depth
    }

    /// Total area of all six faces
    pub fn surface_area(&self) -> f32 {
        2.0 * (self.width * self.height + self.height * self.depth + self.depth * self.width)
    }

    /// Geometric centre
    pub fn center_point(&self) -> Vec3 {
        self.front_bottom_left + Vec3::new(self.width, self.height, self.depth) / 2.0
    }

    /// Position of a single corner
    pub fn corner(&self, corner: CuboidCorner) -> Vec3 {
        let min = self.front_bottom_left;
        Vec3::new(
            if corner.is_right() { min.x + self.width } else { min.x },
            if corner.is_top() { min.y + self.height } else { min.y },
            if corner.is_back() { min.z + self.depth } else { min.z },
        )
    }

    /// All eight corners, indexed by [`CuboidCorner::ordinal`]
    pub fn corners(&self) -> [Vec3; 8] {
        CuboidCorner::ALL.map(|corner| self.corner(corner))
    }

    /// A face flattened onto the plane it is parallel to
    ///
    /// Front/back faces map to (x, y), top/bottom to (x, z) and left/right to (z, y).
    pub fn side(&self, side: CuboidSide) -> Rectangle {
        let min = self.front_bottom_left;
        match side {
            CuboidSide::Top | CuboidSide::Bottom => Rectangle::new(Vec2::new(min.x, min.z), self.width, self.depth),
            CuboidSide::Left | CuboidSide::Right => Rectangle::new(Vec2::new(min.z, min.y), self.depth, self.height),
            CuboidSide::Front | CuboidSide::Back => Rectangle::new(Vec2::new(min.x, min.y), self.width, self.height),
        }
    }

    fn distance_squared_from(&self, point: &Vec3) -> f32 {
        if self.contains(point) {
            return 0.0;
        }
        let min = self.front_bottom_left;
        let max = self.back_top_right();
        let nearest = Vec3::new(
            utils::clamp(point.x, min.x, max.x),
            utils::clamp(point.y, min.y, max.y),
            utils::clamp(point.z, min.z, max.z),
        );
        (point - nearest).norm_squared()
    }

    // True if [min, max] lies within this box on X and Z (within epsilon).
    fn contains_xz(&self, min: Vec2, max: Vec2) -> bool {
        let margin = epsilon();
        let own_min = self.front_bottom_left;
        let own_max = self.back_top_right();
        min.x + margin >= own_min.x
            && max.x <= own_max.x + margin
            && min.y + margin >= own_min.z
            && max.y <= own_max.z + margin
    }

    // True if the vertical band [bottom, top] lies within this box (within epsilon).
    fn contains_y_band(&self, bottom: f32, top: f32) -> bool {
        let margin = epsilon();
        bottom + margin >= self.front_bottom_left.y && top <= self.front_bottom_left.y + self.height + margin
    }

    // One-directional overlap test; `intersects` runs it both ways.
    fn overlaps(&self, other: &Self) -> bool {
        let margin = epsilon();
        let max = self.back_top_right();
        let other_max = other.back_top_right();
        (0..3).all(|axis| {
            other.front_bottom_left[axis] <= max[axis] + margin
                && other_max[axis] + margin >= self.front_bottom_left[axis]
        })
    }
}

impl Contains<Vec3> for Cuboid {
    fn contains(&self, point: &Vec3) -> bool {
        let margin = epsilon();
        let max = self.back_top_right();
        (0..3).all(|axis| {
            point[axis] <= max[axis] + margin && point[axis] + margin >= self.front_bottom_left[axis]
        })
    }
}

impl Contains<Ray> for Cuboid {
    fn contains(&self, ray: &Ray) -> bool {
        ray.end_point()
            .is_some_and(|end| self.contains(&ray.start_point()) && self.contains(&end))
    }
}

impl Contains<Self> for Cuboid {
    fn contains(&self, other: &Self) -> bool {
        let margin = epsilon();
        let max = self.back_top_right();
        let other_max = other.back_top_right();
        (0..3).all(|axis| {
            other.front_bottom_left[axis] + margin >= self.front_bottom_left[axis]
                && other_max[axis] <= max[axis] + margin
        })
    }
}

impl Contains<Cone> for Cuboid {
    fn contains(&self, other: &Cone) -> bool {
        let top = other.top_center();
        let widest = other.top_radius().max(other.bottom_radius());
        let reach = Vec2::new(widest, widest);
        self.contains_y_band(other.bottom_center().y, top.y)
            && self.contains_xz(utils::xz(&top) - reach, utils::xz(&top) + reach)
    }
}

impl Contains<Cylinder> for Cuboid {
    fn contains(&self, other: &Cylinder) -> bool {
        let center = other.center();
        let half_height = other.height() / 2.0;
        let reach = Vec2::new(other.radius(), other.radius());
        self.contains_y_band(center.y - half_height, center.y + half_height)
            && self.contains_xz(utils::xz(&center) - reach, utils::xz(&center) + reach)
    }
}

impl Contains<Sphere> for Cuboid {
    fn contains(&self, other: &Sphere) -> bool {
        let margin = epsilon();
        let max = self.back_top_right();
        let (center, radius) = (other.center(), other.radius());
        (0..3).all(|axis| {
            center[axis] + radius <= max[axis] + margin
                && center[axis] - radius + margin >= self.front_bottom_left[axis]
        })
    }
}

impl DistanceFrom<Vec3> for Cuboid {
    fn distance_from(&self, point: &Vec3) -> f32 {
        self.distance_squared_from(point).sqrt()
    }
}

impl DistanceFrom<Self> for Cuboid {
    fn distance_from(&self, other: &Self) -> f32 {
        if self.intersects(other) {
            return 0.0;
        }
        // Per-axis gaps; edges of crossed boxes can be closer than any corner.
        let max = self.back_top_right();
        let other_max = other.back_top_right();
        let gap = Vec3::from_fn(|axis, _| {
            (other.front_bottom_left[axis] - max[axis])
                .max(self.front_bottom_left[axis] - other_max[axis])
                .max(0.0)
        });
        gap.norm()
    }
}

forward_symmetric!(DistanceFrom: Cuboid => Sphere);
forward_symmetric!(DistanceFrom: Cuboid => Plane);
forward_symmetric!(DistanceFrom: Cuboid => Ray);

impl Intersects<Self> for Cuboid {
    fn intersects(&self, other: &Self) -> bool {
        self.overlaps(other) || other.overlaps(self)
    }
}

impl Intersects<Cylinder> for Cuboid {
    fn intersects(&self, other: &Cylinder) -> bool {
        let margin = epsilon();
        let min = self.front_bottom_left;
        let max = self.back_top_right();
        let center = other.center();
        let half_height = other.height() / 2.0;
        if center.y - half_height > max.y + margin || center.y + half_height + margin < min.y {
            return false;
        }
        let nearest = Vec2::new(utils::clamp(center.x, min.x, max.x), utils::clamp(center.z, min.z, max.z));
        (nearest - utils::xz(&center)).norm() <= other.radius() + margin
    }
}

forward_symmetric!(Intersects: Cuboid => Sphere);
forward_symmetric!(Intersects: Cuboid => Plane);
forward_symmetric!(Intersects: Cuboid => Ray);

impl IntersectionWith<Self> for Cuboid {
    type Output = Self;

    /// The overlapping region of the two boxes
    fn intersection_with(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }
        let min = self.front_bottom_left.sup(&other.front_bottom_left);
        let max = self.back_top_right().inf(&other.back_top_right());
        let extent = (max - min).sup(&Vec3::zeros());
        Some(Self::new(min, extent.x, extent.y, extent.z))
    }
}

forward_symmetric!(IntersectionWith: Cuboid => Ray);

impl ToleranceEq for Cuboid {
    fn equals_exactly(&self, other: &Self) -> bool {
        self.front_bottom_left.equals_exactly(&other.front_bottom_left)
            && self.width.equals_exactly(&other.width)
            && self.height.equals_exactly(&other.height)
            && self.depth.equals_exactly(&other.depth)
    }

    fn equals_with_tolerance(&self, other: &Self, tolerance: f32) -> bool {
        assert_tolerance(tolerance);
        self.front_bottom_left.equals_with_tolerance(&other.front_bottom_left, tolerance)
            && self.width.equals_with_tolerance(&other.width, tolerance)
            && self.height.equals_with_tolerance(&other.height, tolerance)
            && self.depth.equals_with_tolerance(&other.depth, tolerance)
    }
}

impl fmt::Display for Cuboid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(Cuboid FrontBottomLeft:{} Width:{:.3} Height:{:.3} Depth:{:.3})",
            Fmt(&self.front_bottom_left),
            self.width,
            self.height,
            self.depth
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::directions;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn cuboid(x: f32, y: f32, z: f32, width: f32, height: f32, depth: f32) -> Cuboid {
        Cuboid::new(Vec3::new(x, y, z), width, height, depth)
    }

    fn fixtures() -> [Cuboid; 5] {
        [
            cuboid(0.0, 0.0, 0.0, 5.0, 5.0, 5.0),
            cuboid(-10.0, -10.0, -10.0, -20.0, -20.0, -20.0),
            cuboid(4.0, 5.0, 6.0, 7.0, 8.0, 9.0),
            cuboid(10.0, -20.0, 30.0, -40.0, 50.0, -10.0),
            cuboid(3.0, -3.0, 1.0, 9.0, 2.5, 2.0),
        ]
    }

    #[test]
    fn test_measurements() {
        let [a, b, c, d, e] = fixtures();
        assert_eq!(a.center_point(), Vec3::new(2.5, 2.5, 2.5));
        assert_eq!(b.center_point(), Vec3::new(-20.0, -20.0, -20.0));
        assert_eq!(c.center_point(), Vec3::new(7.5, 9.0, 10.5));
        assert_eq!(d.center_point(), Vec3::new(-10.0, 5.0, 25.0));
        assert_eq!(e.center_point(), Vec3::new(7.5, -1.75, 2.0));

        let volumes: Vec<f32> = fixtures().iter().map(Cuboid::volume).collect();
        assert_eq!(volumes, vec![125.0, 8000.0, 504.0, 20000.0, 45.0]);
        let areas: Vec<f32> = fixtures().iter().map(Cuboid::surface_area).collect();
        assert_eq!(areas, vec![150.0, 2400.0, 382.0, 5800.0, 91.0]);
    }

    #[test]
    fn test_from_rectangle() {
        let [a, b, c, d, _] = fixtures();
        let extrude = |x, y, w, h, z, depth| Cuboid::from_rectangle(&Rectangle::new(Vec2::new(x, y), w, h), z, depth);
        assert!(extrude(0.0, 0.0, 5.0, 5.0, 0.0, 5.0).equals(&a));
        assert!(extrude(-30.0, -30.0, 20.0, 20.0, -30.0, 20.0).equals(&b));
        assert!(extrude(4.0, 5.0, 7.0, 8.0, 6.0, 9.0).equals(&c));
        assert!(extrude(-30.0, -20.0, 40.0, 50.0, 20.0, 10.0).equals(&d));
    }

    #[test]
    fn test_corners_follow_ordinals() {
        for shape in &fixtures() {
            let min = shape.front_bottom_left();
            let max = shape.back_top_right();
            let corners = shape.corners();
            assert_eq!(corners[CuboidCorner::FrontBottomLeft.ordinal()], min);
            assert_eq!(corners[CuboidCorner::BackTopRight.ordinal()], max);
            assert_eq!(corners[CuboidCorner::FrontTopLeft.ordinal()], Vec3::new(min.x, max.y, min.z));
            assert_eq!(corners[CuboidCorner::FrontTopRight.ordinal()], Vec3::new(max.x, max.y, min.z));
            assert_eq!(corners[CuboidCorner::FrontBottomRight.ordinal()], Vec3::new(max.x, min.y, min.z));
            assert_eq!(corners[CuboidCorner::BackTopLeft.ordinal()], Vec3::new(min.x, max.y, max.z));
            assert_eq!(corners[CuboidCorner::BackBottomLeft.ordinal()], Vec3::new(min.x, min.y, max.z));
            assert_eq!(corners[CuboidCorner::BackBottomRight.ordinal()], Vec3::new(max.x, min.y, max.z));
        }
    }

    #[test]
    fn test_sides() {
        for shape in &fixtures() {
            let min = shape.front_bottom_left();
            let front = Rectangle::new(Vec2::new(min.x, min.y), shape.width(), shape.height());
            let flank = Rectangle::new(Vec2::new(min.z, min.y), shape.depth(), shape.height());
            let cap = Rectangle::new(Vec2::new(min.x, min.z), shape.width(), shape.depth());
            assert!(shape.side(CuboidSide::Front).equals_exactly(&front));
            assert!(shape.side(CuboidSide::Back).equals_exactly(&front));
            assert!(shape.side(CuboidSide::Left).equals_exactly(&flank));
            assert!(shape.side(CuboidSide::Right).equals_exactly(&flank));
            assert!(shape.side(CuboidSide::Top).equals_exactly(&cap));
            assert!(shape.side(CuboidSide::Bottom).equals_exactly(&cap));
        }
    }

    #[test]
    fn test_intersects_cuboid() {
        let [a, b, c, d, e] = fixtures();
        assert!(a.intersects(&a));
        assert!(!a.intersects(&b));
        assert!(!a.intersects(&c));
        assert!(!a.intersects(&d));
        assert!(!a.intersects(&e));
        assert!(!b.intersects(&c));
        assert!(!c.intersects(&d));
        assert!(!d.intersects(&e));
        assert!(a.intersects(&cuboid(2.0, 2.0, 2.0, 5.0, 5.0, 5.0)));
        assert!(b.intersects(&cuboid(-20.0, -10.0, 30.0, 1.0, 1.0, -100.0)));
        assert!(c.intersects(&cuboid(5.0, 6.0, 7.0, 8.0, 9.0, 10.0)));
        assert!(d.intersects(&cuboid(0.0, 0.0, 25.0, 0.0, 0.0, 0.0)));
        assert!(e.intersects(&cuboid(12.0, -0.5, 3.0, -1.0, -1.0, -1.0)));

        for first in &fixtures() {
            for second in &fixtures() {
                assert_eq!(first.intersects(second), second.intersects(first));
                assert_abs_diff_eq!(first.distance_from(second), second.distance_from(first));
            }
        }
    }

    #[test]
    fn test_contains_point() {
        let [a, b, c, d, e] = fixtures();
        let point_b = Vec3::new(-10.0, 10.0, 25.0);
        let point_c = Vec3::new(5.0, 5.0, 5.0);
        assert!(a.contains(&Vec3::zeros()));
        assert!(!b.contains(&Vec3::zeros()));
        assert!(e.contains(&Vec3::new(5.0, -1.0, 2.0)));
        assert!(d.contains(&point_b));
        assert!(!c.contains(&point_b));
        assert!(a.contains(&point_c));
        assert!(b.contains(&(point_c * -3.0)));
        assert!(c.contains(&(point_c + Vec3::new(0.0, 0.0, 3.0))));
        assert!(!d.contains(&point_c));
    }

    #[test]
    fn test_contains_ray() {
        let [a, b, c, d, e] = fixtures();
        assert!(a.contains(&Ray::new(Vec3::zeros(), Vec3::repeat(1.0), 5.0)));
        assert!(b.contains(&Ray::from_start_and_end(Vec3::repeat(-10.0), Vec3::repeat(-30.0))));
        assert!(c.contains(&Ray::from_start_and_end(Vec3::new(4.0, 5.0, 6.0), Vec3::new(7.0, 8.0, 9.0))));
        assert!(!d.contains(&Ray::new(Vec3::new(10.0, -20.0, 30.0), directions::UP, 51.0)));
        assert!(!e.contains(&Ray::infinite(Vec3::new(3.0, -3.0, 1.0), directions::UP)));
    }

    #[test]
    fn test_contains_shapes() {
        let [a, b, c, d, e] = fixtures();
        assert!(a.contains(&cuboid(0.0, 0.0, 0.0, 5.0, 5.0, 5.0)));
        assert!(b.contains(&cuboid(-20.0, -10.0, -30.0, 0.0, -10.0, 10.0)));
        assert!(c.contains(&cuboid(5.0, 6.0, 7.0, 5.0, 6.0, 7.0)));
        assert!(!d.contains(&cuboid(100.0, 100.0, 100.0, 100.0, 100.0, 100.0)));
        assert!(!e.contains(&cuboid(4.0, -2.0, 2.0, 1.0, 1.0, 2.0)));

        assert!(a.contains(&Cylinder::new(Vec3::repeat(2.5), 2.5, 5.0)));
        assert!(b.contains(&Cylinder::new(Vec3::new(-20.0, -25.0, -15.0), 4.0, 8.0)));
        assert!(c.contains(&Cylinder::new(Vec3::new(7.5, 9.0, 10.5), 3.5, 4.0)));
        assert!(!d.contains(&Cylinder::new(Vec3::new(-20.0, 0.0, 25.0), 25.0, 1.0)));
        assert!(!e.contains(&Cylinder::new(Vec3::new(3.0, 0.0, 1.0), 1.0, 1.0)));

        assert!(a.contains(&Sphere::new(Vec3::repeat(2.5), 2.5)));
        assert!(b.contains(&Sphere::new(Vec3::new(-20.0, -15.0, -25.0), 5.0)));
        assert!(c.contains(&Sphere::new(Vec3::new(4.0, 5.0, 6.0), 0.0)));
        assert!(!d.contains(&Sphere::new(Vec3::new(-10.0, 5.0, 25.0), 5.2)));
        assert!(!e.contains(&Sphere::new(Vec3::repeat(100.0), 0.0)));
    }

    #[test]
    fn test_contains_cone_uses_downward_extent() {
        let [a, b, c, d, _] = fixtures();
        assert!(a.contains(&Cone::new(Vec3::repeat(2.5), 2.0, 2.0)));
        assert!(b.contains(&Cone::new(Vec3::new(-20.0, -15.0, -25.0), 2.0, 5.0)));
        assert!(!d.contains(&Cone::frustum(Vec3::new(-20.0, -20.0, 25.0), 3.0, 30.0, 10.0)));
        // Top at the floor of `c`: the body hangs below the box.
        assert!(!c.contains(&Cone::frustum(Vec3::new(7.5, 5.0, 10.5), 3.5, 8.0, 2.5)));
        assert!(c.contains(&Cone::frustum(Vec3::new(7.5, 13.0, 10.5), 3.5, 8.0, 2.5)));
        // Wider top rim than bottom rim.
        assert!(!c.contains(&Cone::frustum(Vec3::new(7.5, 13.0, 10.5), 1.0, 8.0, 4.0)));
    }

    #[test]
    fn test_intersects_sphere() {
        let [a, b, c, d, e] = fixtures();
        let big = Sphere::new(Vec3::new(12.0, 10.0, 11.0), 35.0);
        let small = Sphere::new(Vec3::repeat(-3.0), 9.0);
        let tiny = Sphere::new(Vec3::repeat(10.0), 2.0);
        assert!(a.intersects(&big));
        assert!(!b.intersects(&big));
        assert!(c.intersects(&big));
        assert!(d.intersects(&big));
        assert!(e.intersects(&big));
        assert!(a.intersects(&small));
        assert!(cuboid(-7.0, -7.0, -7.0, -20.0, -20.0, -20.0).intersects(&small));
        assert!(!c.intersects(&small));
        assert!(!d.intersects(&small));
        assert!(e.intersects(&small));
        assert!(!a.intersects(&tiny));
        assert!(c.intersects(&tiny));
        assert!(tiny.intersects(&c));
    }

    #[test]
    fn test_distance_from_point_and_cuboid() {
        let [a, b, c, d, e] = fixtures();
        assert_abs_diff_eq!(a.distance_from(&Vec3::new(4.0, 3.0, 10.0)), 5.0);
        assert_eq!(b.distance_from(&Vec3::new(-20.0, -25.0, -15.0)), 0.0);
        assert_abs_diff_eq!(c.distance_from(&Vec3::new(3.0, 4.0, 5.0)), 3.0_f32.sqrt());
        assert_abs_diff_eq!(d.distance_from(&Vec3::new(-40.0, 40.0, 10.0)), 300.0_f32.sqrt());
        assert_abs_diff_eq!(e.distance_from(&Vec3::new(15.0, -7.0, 1.5)), 5.0);

        assert_abs_diff_eq!(a.distance_from(&cuboid(2.5, 4.0, 55.0, 1.0, 1.0, 1.0)), 50.0);
        assert_abs_diff_eq!(b.distance_from(&cuboid(-5.0, 0.0, 5.0, 100.0, 30.0, 0.0)), 350.0_f32.sqrt());
        assert_abs_diff_eq!(c.distance_from(&cuboid(3.0, 4.0, 5.0, -1.0, -10.0, -100.0)), 3.0_f32.sqrt());
        assert_eq!(d.distance_from(&cuboid(-40.0, -30.0, 10.0, 10.0, 10.0, 10.0)), 0.0);
        assert_eq!(e.distance_from(&cuboid(2.0, -4.0, 0.0, 1.4, 1.3, 1.2)), 0.0);

        // Crossed bars: the closest points lie on edges, not corners.
        let bar = cuboid(0.0, 4.0, 0.0, 10.0, 2.0, 1.0);
        let post = cuboid(4.0, 0.0, 3.0, 2.0, 10.0, 1.0);
        assert_abs_diff_eq!(bar.distance_from(&post), 2.0);
    }

    #[test]
    fn test_intersects_cylinder() {
        let [a, b, c, d, e] = fixtures();
        assert!(a.intersects(&Cylinder::new(Vec3::repeat(2.0), 2.0, 4.0)));
        assert!(b.intersects(&Cylinder::new(Vec3::new(-20.0, -25.0, -15.0), 5.0, 5.0)));
        assert!(c.intersects(&Cylinder::new(Vec3::new(3.0, 4.0, 5.0), 3.0, 3.0)));
        assert!(!d.intersects(&Cylinder::new(Vec3::repeat(-100.0), 10.0, 10.0)));
        assert!(!e.intersects(&Cylinder::new(Vec3::new(6.0, -1.5, 4.5), 1.0, 1.0)));
        // Near a box corner: inside the bounding square of the cylinder but not the cylinder.
        let post = Cylinder::new(Vec3::new(-0.8, 2.5, -0.8), 1.0, 1.0);
        assert!(!a.intersects(&post));
        assert!(!post.intersects(&a));
    }

    #[test]
    fn test_intersection_with_cuboid() {
        let [a, b, c, d, e] = fixtures();
        let clipped = a.intersection_with(&cuboid(-5.0, -5.0, -5.0, 15.0, 15.0, 15.0));
        assert!(clipped.is_some_and(|region| region.equals(&a)));
        let inner = cuboid(-20.0, -15.0, -25.0, 5.0, 5.0, 5.0);
        assert!(b.intersection_with(&inner).is_some_and(|region| region.equals(&inner)));
        let overlap = c.intersection_with(&cuboid(6.0, 5.0, 4.0, 6.0, 5.0, 4.0));
        assert!(overlap.is_some_and(|region| region.equals(&cuboid(6.0, 5.0, 6.0, 5.0, 5.0, 2.0))));
        assert!(d.intersection_with(&cuboid(100.0, 100.0, 100.0, 1.0, 1.0, 1.0)).is_none());
        assert!(e.intersection_with(&cuboid(3.0, -3.0, 4.0, 1.0, 1.0, 1.0)).is_none());
    }

    #[test]
    fn test_intersection_with_ray_forwards() {
        let [a, ..] = fixtures();
        let ray = Ray::infinite(Vec3::new(-10.0, 2.5, 2.5), directions::RIGHT);
        let hit = a.intersection_with(&ray).expect("ray crosses the box");
        assert_relative_eq!(hit, Vec3::new(0.0, 2.5, 2.5), epsilon = 1e-5);
        assert!(a.intersects(&ray));
    }

    #[test]
    fn test_equality_and_display() {
        let [a, _, c, d, e] = fixtures();
        assert!(a.equals(&a));
        assert!(c.equals_with_tolerance(&cuboid(3.5, 5.5, 5.5, 7.5, 7.5, 9.5), 1.0));
        assert!(!c.equals_exactly(&cuboid(4.0, 5.0, 6.0, 7.0, 8.0, 9.001)));
        assert!(!d.equals(&e));
        assert_eq!(
            a.to_string(),
            "(Cuboid FrontBottomLeft:(0.000, 0.000, 0.000) Width:5.000 Height:5.000 Depth:5.000)"
        );
    }
}
