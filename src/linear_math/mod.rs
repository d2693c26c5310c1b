//! Deterministic fixed-point math for the broadphase core.
//!
//! All spatial comparisons inside the crate run on a fixed-point scalar so
//! that every participant in a lockstep simulation computes bit-identical
//! results regardless of platform or compiler flags. Floating point only
//! appears at the host boundary, through the conversions below.

mod aabb_util;
mod fixed_vec3;

pub use aabb_util::Aabb;
pub use fixed_vec3::FixedVec3;

/// Fixed-point scalar used throughout the simulation.
///
/// I48F16 format: 48 integer bits, 16 fractional bits. Total-ordered with
/// no NaN and no rounding-mode dependence, which is what makes the sweep
/// comparator reproducible bit-for-bit across platforms.
pub type Scalar = fixed::types::I48F16;

/// Deterministically converts an `f32` into the fixed-point scalar.
///
/// `NaN` maps to zero (fixed point has no NaN representation) and
/// `+inf`/`-inf` saturate to `Scalar::MAX`/`Scalar::MIN`.
#[must_use]
pub fn from_f32(value: f32) -> Scalar {
    if value.is_nan() {
        return Scalar::ZERO;
    }

    Scalar::saturating_from_num(value)
}

/// Converts a fixed-point scalar back to `f32`, rounding to nearest.
#[must_use]
pub fn to_f32(value: Scalar) -> f32 {
    value.to_num::<f32>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_f32_nan_maps_to_zero() {
        assert_eq!(from_f32(f32::NAN), Scalar::ZERO);
    }

    #[test]
    fn test_from_f32_saturates_infinities() {
        assert_eq!(from_f32(f32::INFINITY), Scalar::MAX);
        assert_eq!(from_f32(f32::NEG_INFINITY), Scalar::MIN);
    }

    #[test]
    fn test_round_trip_exact_for_representable_values() {
        for value in [-3.5, -0.25, 0.0, 0.5, 1.0, 1024.75] {
            assert_eq!(to_f32(from_f32(value)), value);
        }
    }
}
