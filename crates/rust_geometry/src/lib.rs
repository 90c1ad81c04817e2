//! # Rust Geometry
//!
//! Immutable 2D and 3D shape value types and the pairwise predicates between
//! them, evaluated under a configurable floating-point tolerance.
//!
//! ## Features
//!
//! - **Planar shapes**: circles and axis-aligned rectangles
//! - **Spatial shapes**: spheres, axis-aligned cuboids, upright cones and
//!   cylinders, planes and rays
//! - **Predicate matrix**: containment, intersection, shortest distance and
//!   intersection construction through generic traits
//! - **Tolerance**: one process-wide comparison margin, loaded from TOML or RON
//!
//! ## Quick Start
//!
//! ```rust
//! use rust_geometry::prelude::*;
//!
//! let ball = Sphere::new(Vec3::new(0.0, 5.0, 0.0), 2.0);
//! let crate_box = Cuboid::new(Vec3::new(-1.0, 0.0, -1.0), 2.0, 2.0, 2.0);
//! let floor = Plane::new(Vec3::new(0.0, 1.0, 0.0), 0.0);
//!
//! assert!(!ball.intersects(&crate_box));
//! assert!((ball.distance_from(&crate_box) - 1.0).abs() < 1e-5);
//! assert!(crate_box.intersects(&floor));
//!
//! let drop = Ray::infinite(ball.center(), Vec3::new(0.0, -1.0, 0.0));
//! assert_eq!(drop.intersection_with(&crate_box), Some(Vec3::new(0.0, 2.0, 0.0)));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod foundation;
pub mod shapes;
pub mod tolerance;

pub use config::{Config, ConfigError, GeometryConfig};
pub use error::GeometryError;

/// Common imports for geometry users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, GeometryConfig},
        error::GeometryError,
        foundation::math::{directions, Vec2, Vec3},
        shapes::{
            Circle, Cone, Contains, Cuboid, CuboidCorner, CuboidSide, Cylinder, DistanceFrom,
            IntersectionWith, Intersects, Plane, PlaneIntersection, PointPlaneRelation, Ray,
            Rectangle, RectangleCorner, Sphere,
        },
        tolerance::{epsilon, ToleranceEq},
    };
}
