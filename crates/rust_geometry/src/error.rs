//! Recoverable geometry errors
//!
//! Programmer errors (negative tolerances, zero normals, out-of-extent radius
//! queries) are not represented here: they panic at the call site.

/// Errors returned by fallible geometry constructors and configuration hooks
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Three points that lie on a single line do not define a plane
    #[error("Three colinear points are not enough to specify a plane")]
    ColinearPoints,

    /// Tolerance margins must be finite and non-negative
    #[error("Invalid epsilon {0}: must be finite and non-negative")]
    InvalidEpsilon(f32),
}
