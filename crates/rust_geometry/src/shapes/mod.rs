//! Shape primitives and the predicate matrix between them
//!
//! Two planar shapes ([`Circle`], [`Rectangle`]) and six spatial ones
//! ([`Sphere`], [`Cuboid`], [`Cone`], [`Cylinder`], [`Plane`], [`Ray`]). All
//! shapes are immutable `Copy` values; "modifiers" return new instances.
//!
//! Cones and cylinders are upright (axis parallel to Y) and boxes are axis
//! aligned. Rays and planes may point anywhere.
//!
//! Cross-shape queries go through the traits in [`predicates`]; a shape pair
//! that is not implemented simply does not compile.

pub mod predicates;

pub mod circle;
pub mod rectangle;

pub mod cone;
pub mod cuboid;
pub mod cylinder;
pub mod plane;
pub mod ray;
pub mod sphere;

pub use circle::Circle;
pub use cone::Cone;
pub use cuboid::{Cuboid, CuboidCorner, CuboidSide};
pub use cylinder::Cylinder;
pub use plane::{Plane, PlaneIntersection, PointPlaneRelation};
pub use predicates::{Contains, DistanceFrom, IntersectionWith, Intersects};
pub use ray::Ray;
pub use rectangle::{Rectangle, RectangleCorner};
pub use sphere::Sphere;
