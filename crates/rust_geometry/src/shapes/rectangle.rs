//! Axis-aligned rectangle primitive

use std::fmt;

use crate::foundation::math::{utils, Fmt, Vec2};
use crate::tolerance::{assert_tolerance, epsilon, ToleranceEq};

use super::circle::Circle;
use super::predicates::{forward_symmetric, Contains, DistanceFrom, IntersectionWith, Intersects};

/// Corner selector with a stable ordinal (see [`RectangleCorner::ALL`])
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RectangleCorner {
    /// Minimum X, maximum Y
    TopLeft = 0,
    /// Maximum X, maximum Y
    TopRight = 1,
    /// Minimum X, minimum Y
    BottomLeft = 2,
    /// Maximum X, minimum Y
    BottomRight = 3,
}

impl RectangleCorner {
    /// Every corner, in ordinal order
    pub const ALL: [Self; 4] = [Self::TopLeft, Self::TopRight, Self::BottomLeft, Self::BottomRight];

    /// Position of this corner in [`Self::ALL`]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    const fn is_right(self) -> bool {
        matches!(self, Self::TopRight | Self::BottomRight)
    }

    const fn is_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }
}

/// An axis-aligned rectangle anchored at its bottom-left corner
#[derive(Debug, Clone, Copy)]
pub struct Rectangle {
    bottom_left: Vec2,
    width: f32,
    height: f32,
}

impl Rectangle {
    /// Create a rectangle
    ///
    /// Negative extents are normalised: the anchor moves by the extent and the
    /// stored extent becomes its absolute value, so the covered region is the
    /// same.
    pub fn new(bottom_left: Vec2, width: f32, height: f32) -> Self {
        let mut bottom_left = bottom_left;
        if width < 0.0 {
            bottom_left.x += width;
        }
        if height < 0.0 {
            bottom_left.y += height;
        }
        Self {
            bottom_left,
            width: width.abs(),
            height: height.abs(),
        }
    }

    /// Bottom-left anchor
    pub fn bottom_left(&self) -> Vec2 {
        self.bottom_left
    }

    /// Extent along X
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Extent along Y
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Enclosed area
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Top-right corner
    pub fn top_right(&self) -> Vec2 {
        self.bottom_left + Vec2::new(self.width, self.height)
    }

    /// Geometric centre
    pub fn center_point(&self) -> Vec2 {
        self.bottom_left + Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Position of a single corner
    pub fn corner(&self, corner: RectangleCorner) -> Vec2 {
        Vec2::new(
            if corner.is_right() { self.bottom_left.x + self.width } else { self.bottom_left.x },
            if corner.is_top() { self.bottom_left.y + self.height } else { self.bottom_left.y },
        )
    }

    /// All four corners, indexed by [`RectangleCorner::ordinal`]
    pub fn corners(&self) -> [Vec2; 4] {
        RectangleCorner::ALL.map(|corner| self.corner(corner))
    }

    fn distance_squared_from(&self, point: &Vec2) -> f32 {
        if self.contains(point) {
            return 0.0;
        }
        let top_right = self.top_right();
        let dx = point.x - utils::clamp(point.x, self.bottom_left.x, top_right.x);
        let dy = point.y - utils::clamp(point.y, self.bottom_left.y, top_right.y);
        dx * dx + dy * dy
    }

    // One-directional overlap test; `intersects` runs it both ways.
    fn overlaps(&self, other: &Self) -> bool {
        let margin = epsilon();
        let top_right = self.top_right();
        let other_top_right = other.top_right();
        other.bottom_left.x <= top_right.x + margin
            && other.bottom_left.y <= top_right.y + margin
            && other_top_right.x + margin >= self.bottom_left.x
            && other_top_right.y + margin >= self.bottom_left.y
    }
}

impl Contains<Vec2> for Rectangle {
    fn contains(&self, point: &Vec2) -> bool {
        let margin = epsilon();
        let top_right = self.top_right();
        point.x <= top_right.x + margin
            && point.x + margin >= self.bottom_left.x
            && point.y <= top_right.y + margin
            && point.y + margin >= self.bottom_left.y
    }
}

impl Contains<Self> for Rectangle {
    fn contains(&self, other: &Self) -> bool {
        let margin = epsilon();
        let top_right = self.top_right();
        let other_top_right = other.top_right();
        other.bottom_left.x + margin >= self.bottom_left.x
            && other_top_right.x <= top_right.x + margin
            && other.bottom_left.y + margin >= self.bottom_left.y
            && other_top_right.y <= top_right.y + margin
    }
}

impl Contains<Circle> for Rectangle {
    fn contains(&self, other: &Circle) -> bool {
        let margin = epsilon();
        let top_right = self.top_right();
        let (center, radius) = (other.center(), other.radius());
        center.x + radius <= top_right.x + margin
            && center.y + radius <= top_right.y + margin
            && center.x - radius + margin >= self.bottom_left.x
            && center.y - radius + margin >= self.bottom_left.y
    }
}

impl DistanceFrom<Vec2> for Rectangle {
    fn distance_from(&self, point: &Vec2) -> f32 {
        self.distance_squared_from(point).sqrt()
    }
}

impl DistanceFrom<Self> for Rectangle {
    fn distance_from(&self, other: &Self) -> f32 {
        if self.intersects(other) {
            return 0.0;
        }
        RectangleCorner::ALL
            .iter()
            .flat_map(|&corner| {
                [
                    self.distance_squared_from(&other.corner(corner)),
                    other.distance_squared_from(&self.corner(corner)),
                ]
            })
            .fold(f32::MAX, f32::min)
            .sqrt()
    }
}

forward_symmetric!(DistanceFrom: Rectangle => Circle);

impl Intersects<Self> for Rectangle {
    fn intersects(&self, other: &Self) -> bool {
        self.overlaps(other) || other.overlaps(self)
    }
}

impl Intersects<Circle> for Rectangle {
    fn intersects(&self, other: &Circle) -> bool {
        self.distance_from(&other.center()) <= other.radius() + epsilon()
    }
}

impl IntersectionWith<Self> for Rectangle {
    type Output = Self;

    /// The overlapping region of the two rectangles
    fn intersection_with(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }
        let top_right = self.top_right();
        let other_top_right = other.top_right();
        let x = self.bottom_left.x.max(other.bottom_left.x);
        let y = self.bottom_left.y.max(other.bottom_left.y);
        // Rectangles that only touch within the margin yield a zero-sized overlap.
        Some(Self::new(
            Vec2::new(x, y),
            (top_right.x.min(other_top_right.x) - x).max(0.0),
            (top_right.y.min(other_top_right.y) - y).max(0.0),
        ))
    }
}

impl ToleranceEq for Rectangle {
    fn equals_exactly(&self, other: &Self) -> bool {
        self.bottom_left.equals_exactly(&other.bottom_left)
            && self.width.equals_exactly(&other.width)
            && self.height.equals_exactly(&other.height)
    }

    fn equals_with_tolerance(&self, other: &Self, tolerance: f32) -> bool {
        assert_tolerance(tolerance);
        self.bottom_left.equals_with_tolerance(&other.bottom_left, tolerance)
            && self.width.equals_with_tolerance(&other.width, tolerance)
            && self.height.equals_with_tolerance(&other.height, tolerance)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(Rectangle BottomLeft:{} Width:{:.3} Height:{:.3})",
            Fmt(&self.bottom_left),
            self.width,
            self.height
        )
    }
}
