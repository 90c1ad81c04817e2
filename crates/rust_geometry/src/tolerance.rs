//! Floating-point tolerance
//!
//! Every comparison in the predicate matrix is widened by a single process-wide
//! margin, [`epsilon`]. The margin is configuration: install it once at startup
//! with [`set_epsilon`] (usually through `GeometryConfig::install`) and treat it
//! as read-only afterwards. Changing it while other threads are evaluating
//! predicates is memory-safe, but each in-flight comparison may observe either
//! the old or the new value.
//!
//! Tolerance equality is not transitive: `a ≈ b` and `b ≈ c` do not imply
//! `a ≈ c`.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::error::GeometryError;
use crate::foundation::math::{Vec2, Vec3};

/// Margin used when nothing else has been configured
pub const DEFAULT_EPSILON: f32 = 0.001;

// Bit pattern of DEFAULT_EPSILON.
static EPSILON_BITS: AtomicU32 = AtomicU32::new(0x3A83_126F);

/// Current process-wide comparison margin
#[inline]
pub fn epsilon() -> f32 {
    f32::from_bits(EPSILON_BITS.load(Ordering::Acquire))
}

/// Install a new process-wide comparison margin
///
/// # Errors
///
/// Returns [`GeometryError::InvalidEpsilon`] if `value` is negative, NaN or
/// infinite. The current margin is left untouched in that case.
pub fn set_epsilon(value: f32) -> Result<(), GeometryError> {
    if !value.is_finite() || value < 0.0 {
        log::warn!("Rejected epsilon {}", value);
        return Err(GeometryError::InvalidEpsilon(value));
    }

    let previous = f32::from_bits(EPSILON_BITS.swap(value.to_bits(), Ordering::AcqRel));
    if previous.to_bits() != value.to_bits() {
        log::info!("Geometry epsilon changed from {} to {}", previous, value);
    }
    Ok(())
}

/// Panics unless `tolerance` is a usable margin
#[inline]
#[track_caller]
pub(crate) fn assert_tolerance(tolerance: f32) {
    assert!(tolerance >= 0.0, "Tolerance must not be negative (got {tolerance})");
}

/// Exact and tolerance-aware equality
///
/// Kept separate from `PartialEq` so that bitwise comparison is always an
/// explicit choice.
pub trait ToleranceEq {
    /// True iff every field is bitwise identical
    fn equals_exactly(&self, other: &Self) -> bool;

    /// True iff every scalar field differs by less than `tolerance`
    ///
    /// # Panics
    ///
    /// Panics if `tolerance` is negative.
    fn equals_with_tolerance(&self, other: &Self, tolerance: f32) -> bool;

    /// Tolerance equality using the process-wide [`epsilon`]
    fn equals(&self, other: &Self) -> bool {
        self.equals_with_tolerance(other, epsilon())
    }
}

impl ToleranceEq for f32 {
    fn equals_exactly(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }

    fn equals_with_tolerance(&self, other: &Self, tolerance: f32) -> bool {
        assert_tolerance(tolerance);
        // Matching infinities compare equal even though their difference is NaN.
        self == other || (self - other).abs() < tolerance
    }
}

impl ToleranceEq for Vec2 {
    fn equals_exactly(&self, other: &Self) -> bool {
        self.iter().zip(other.iter()).all(|(a, b)| a.equals_exactly(b))
    }

    fn equals_with_tolerance(&self, other: &Self, tolerance: f32) -> bool {
        assert_tolerance(tolerance);
        self.iter().zip(other.iter()).all(|(a, b)| a.equals_with_tolerance(b, tolerance))
    }
}

impl ToleranceEq for Vec3 {
    fn equals_exactly(&self, other: &Self) -> bool {
        self.iter().zip(other.iter()).all(|(a, b)| a.equals_exactly(b))
    }

    fn equals_with_tolerance(&self, other: &Self, tolerance: f32) -> bool {
        assert_tolerance(tolerance);
        self.iter().zip(other.iter()).all(|(a, b)| a.equals_with_tolerance(b, tolerance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_epsilon_bits() {
        assert_eq!(DEFAULT_EPSILON.to_bits(), 0x3A83_126F);
    }

    #[test]
    fn test_set_epsilon_rejects_invalid_values() {
        assert_eq!(set_epsilon(-0.5), Err(GeometryError::InvalidEpsilon(-0.5)));
        assert!(set_epsilon(f32::NAN).is_err());
        assert!(set_epsilon(f32::INFINITY).is_err());
    }

    #[test]
    fn test_set_epsilon_accepts_default() {
        assert!(set_epsilon(DEFAULT_EPSILON).is_ok());
        assert_eq!(epsilon(), DEFAULT_EPSILON);
    }

    #[test]
    fn test_scalar_equality() {
        assert!(1.0_f32.equals_with_tolerance(&1.05, 0.1));
        assert!(!1.0_f32.equals_with_tolerance(&1.2, 0.1));
        assert!(!1.0_f32.equals_with_tolerance(&1.0001, 0.0));
        assert!(f32::INFINITY.equals_with_tolerance(&f32::INFINITY, 0.1));
        assert!(0.0_f32.equals_exactly(&0.0));
        assert!(!0.0_f32.equals_exactly(&-0.0));
    }

    #[test]
    fn test_vector_equality() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(1.0004, 2.0, 2.9996);
        assert!(a.equals(&b));
        assert!(!a.equals_exactly(&b));
        assert!(!a.equals_with_tolerance(&b, 0.0001));
        assert!(Vec2::new(1.0, 1.0).equals_with_tolerance(&Vec2::new(1.5, 1.5), 1.0));
    }

    #[test]
    fn test_equality_is_not_transitive() {
        let a = 0.0_f32;
        let b = 0.6_f32;
        let c = 1.2_f32;
        assert!(a.equals_with_tolerance(&b, 1.0));
        assert!(b.equals_with_tolerance(&c, 1.0));
        assert!(!a.equals_with_tolerance(&c, 1.0));
    }

    #[test]
    #[should_panic(expected = "Tolerance must not be negative")]
    fn test_negative_tolerance_panics() {
        Vec3::zeros().equals_with_tolerance(&Vec3::zeros(), -1.0);
    }
}
