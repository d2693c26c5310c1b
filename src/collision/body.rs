use std::{cell::RefCell, rc::Rc};

use crate::linear_math::Aabb;

/// Capability surface a body exposes to the broadphase.
///
/// Bodies are owned by the outer simulation; the broadphase re-reads the
/// bounding box once per sweep or query and never caches it across ticks.
pub trait BroadphaseBody {
    fn bounding_box(&self) -> Aabb;

    /// Static and inactive bodies are interchangeable here: no pair of two
    /// non-moving bodies is worth narrow-phase work.
    fn is_static_or_inactive(&self) -> bool;

    /// Compound bodies decompose into an ordered sequence of parts that ray
    /// queries test as if each were independently registered. Simple bodies
    /// return `None`.
    fn sub_bodies(&self) -> Option<Vec<BodyHandle>> {
        None
    }
}

/// Shared non-owning handle to a body.
pub type BodyHandle = Rc<RefCell<dyn BroadphaseBody>>;

/// Stable identity of a body for the lifetime of its allocation.
pub type BodyKey = usize;

/// Two handles refer to the same body iff their keys are equal.
#[inline]
#[must_use]
pub fn body_key(body: &BodyHandle) -> BodyKey {
    Rc::as_ptr(body).cast::<()>() as usize
}

/// Bitmask over collision layers, for restricting ray queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const NONE: Self = Self(0);
    pub const ALL: Self = Self(u32::MAX);

    /// Single-bit mask for a layer index. Indices past the mask width yield
    /// an empty mask, which no query mask can match.
    #[inline]
    #[must_use]
    pub const fn from_layer(layer: u32) -> Self {
        if layer < u32::BITS {
            Self(1 << layer)
        } else {
            Self::NONE
        }
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, rhs: Self) -> bool {
        self.0 & rhs.0 != 0
    }
}

impl std::ops::BitOr for LayerMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_layer_builds_single_bit() {
        assert_eq!(LayerMask::from_layer(0), LayerMask(1));
        assert_eq!(LayerMask::from_layer(5), LayerMask(1 << 5));
    }

    #[test]
    fn test_out_of_range_layer_is_empty() {
        assert_eq!(LayerMask::from_layer(32), LayerMask::NONE);
        assert!(!LayerMask::ALL.contains(LayerMask::from_layer(40)));
    }

    #[test]
    fn test_contains_is_bit_intersection() {
        let mask = LayerMask::from_layer(3) | LayerMask::from_layer(7);
        assert!(mask.contains(LayerMask::from_layer(3)));
        assert!(!mask.contains(LayerMask::from_layer(5)));
        assert!(!mask.contains(LayerMask::NONE));
    }
}
