//! Cross-shape predicate traits
//!
//! Each supported `(shape, other)` pair is one impl of one of these traits.
//! When only one direction of a pair has a native algorithm, the reverse impl
//! forwards to it, so `a.intersects(&b) == b.intersects(&a)` holds by
//! construction.

/// Full containment: no part of `other` lies outside `self`
pub trait Contains<T: ?Sized> {
    /// True if `other` lies entirely within this shape (within epsilon)
    fn contains(&self, other: &T) -> bool;
}

/// Overlap test
pub trait Intersects<T: ?Sized> {
    /// True if this shape and `other` share at least one point (within epsilon)
    fn intersects(&self, other: &T) -> bool;
}

/// Shortest separation
pub trait DistanceFrom<T: ?Sized> {
    /// Shortest distance between this shape and `other`; `0.0` when they touch
    fn distance_from(&self, other: &T) -> f32;
}

/// Construct the meeting point or region of two shapes
pub trait IntersectionWith<T: ?Sized> {
    /// What the meeting of the two shapes looks like
    type Output;

    /// The intersection, or `None` when the shapes do not meet
    fn intersection_with(&self, other: &T) -> Option<Self::Output>;
}

/// Implements the reverse direction of a symmetric predicate by forwarding
macro_rules! forward_symmetric {
    (Intersects: $a:ty => $b:ty) => {
        impl $crate::shapes::predicates::Intersects<$b> for $a {
            fn intersects(&self, other: &$b) -> bool {
                $crate::shapes::predicates::Intersects::intersects(other, self)
            }
        }
    };
    (DistanceFrom: $a:ty => $b:ty) => {
        impl $crate::shapes::predicates::DistanceFrom<$b> for $a {
            fn distance_from(&self, other: &$b) -> f32 {
                $crate::shapes::predicates::DistanceFrom::distance_from(other, self)
            }
        }
    };
    (IntersectionWith: $a:ty => $b:ty) => {
        impl $crate::shapes::predicates::IntersectionWith<$b> for $a {
            type Output = <$b as $crate::shapes::predicates::IntersectionWith<$a>>::Output;

            fn intersection_with(&self, other: &$b) -> Option<Self::Output> {
                $crate::shapes::predicates::IntersectionWith::intersection_with(other, self)
            }
        }
    };
}

pub(crate) use forward_symmetric;
