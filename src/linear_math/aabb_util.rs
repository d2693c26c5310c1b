use std::ops::{Add, AddAssign};

use super::FixedVec3;

/// Axis-aligned bounding box over fixed-point coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Aabb {
    pub min: FixedVec3,
    pub max: FixedVec3,
}

impl Aabb {
    pub const ZERO: Self = Self {
        min: FixedVec3::ZERO,
        max: FixedVec3::ZERO,
    };

    #[inline]
    #[must_use]
    pub const fn new(min: FixedVec3, max: FixedVec3) -> Self {
        Self { min, max }
    }

    /// Full three-axis overlap test. Touching boxes count as overlapping.
    #[inline]
    #[must_use]
    pub fn intersects(&self, rhs: &Self) -> bool {
        self.overlaps_x(rhs) && self.overlaps_y(rhs) && self.overlaps_z(rhs)
    }

    #[inline]
    #[must_use]
    pub fn overlaps_x(&self, rhs: &Self) -> bool {
        self.max.x >= rhs.min.x && self.min.x <= rhs.max.x
    }

    #[inline]
    #[must_use]
    pub fn overlaps_y(&self, rhs: &Self) -> bool {
        self.max.y >= rhs.min.y && self.min.y <= rhs.max.y
    }

    #[inline]
    #[must_use]
    pub fn overlaps_z(&self, rhs: &Self) -> bool {
        self.max.z >= rhs.min.z && self.min.z <= rhs.max.z
    }

    /// `min <= max` on every axis. Checked at registration time only; the
    /// sweep and ray loops assume it.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
    }
}

impl Add for Aabb {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            min: self.min.min(rhs.min),
            max: self.max.max(rhs.max),
        }
    }
}

impl AddAssign for Aabb {
    fn add_assign(&mut self, rhs: Self) {
        self.min = self.min.min(rhs.min);
        self.max = self.max.max(rhs.max);
    }
}
