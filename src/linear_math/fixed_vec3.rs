use std::ops::{Add, Sub};

use glam::Vec3A;

use super::{Scalar, from_f32, to_f32};

/// 3-component fixed-point vector.
///
/// Deliberately minimal: the broadphase only compares, unions, and offsets
/// bounds. Shape-level geometry lives with the narrow-phase collaborators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FixedVec3 {
    pub x: Scalar,
    pub y: Scalar,
    pub z: Scalar,
}

impl FixedVec3 {
    pub const ZERO: Self = Self {
        x: Scalar::ZERO,
        y: Scalar::ZERO,
        z: Scalar::ZERO,
    };

    #[inline]
    #[must_use]
    pub const fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self { x, y, z }
    }

    #[inline]
    #[must_use]
    pub const fn splat(v: Scalar) -> Self {
        Self { x: v, y: v, z: v }
    }

    /// Component-wise minimum.
    #[inline]
    #[must_use]
    pub fn min(self, rhs: Self) -> Self {
        Self {
            x: self.x.min(rhs.x),
            y: self.y.min(rhs.y),
            z: self.z.min(rhs.z),
        }
    }

    /// Component-wise maximum.
    #[inline]
    #[must_use]
    pub fn max(self, rhs: Self) -> Self {
        Self {
            x: self.x.max(rhs.x),
            y: self.y.max(rhs.y),
            z: self.z.max(rhs.z),
        }
    }

    /// Converts from a host-side float vector, deterministically.
    ///
    /// Per-component semantics match [`from_f32`]: NaN becomes zero and
    /// infinities saturate.
    #[must_use]
    pub fn from_vec3a(v: Vec3A) -> Self {
        Self {
            x: from_f32(v.x),
            y: from_f32(v.y),
            z: from_f32(v.z),
        }
    }

    /// Converts back to a host-side float vector.
    #[must_use]
    pub fn to_vec3a(self) -> Vec3A {
        Vec3A::new(to_f32(self.x), to_f32(self.y), to_f32(self.z))
    }
}

impl Add for FixedVec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for FixedVec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}
