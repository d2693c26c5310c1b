use super::body::{BodyHandle, LayerMask};
use crate::linear_math::{FixedVec3, Scalar};

/// Result of an exact per-body intersection test.
#[derive(Clone, Copy, Debug)]
pub struct RayIntersection {
    pub normal: FixedVec3,
    /// Hit position along the segment `[origin, origin + direction]`,
    /// as a fraction of the direction vector.
    pub fraction: Scalar,
}

/// An accepted closest hit.
#[derive(Clone)]
pub struct RayHit {
    pub body: BodyHandle,
    pub normal: FixedVec3,
    pub fraction: Scalar,
}

/// Exact ray-vs-shape routine, supplied by the narrow-phase collaborator.
///
/// The ray is logically infinite for simple shapes, but `direction` bounds
/// the tested segment for shapes whose intersection routine only supports
/// bounded segments (meshes, terrain).
pub trait BodyRayCaster {
    fn cast_ray(
        &self,
        body: &BodyHandle,
        origin: FixedVec3,
        direction: FixedVec3,
    ) -> Option<RayIntersection>;
}

/// Accept predicate for ray hits.
///
/// Acceptance is independent of distance ordering: a rejected hit never
/// updates the best-so-far fraction, so a nearer rejected hit cannot shadow
/// a farther accepted one.
pub trait RayAcceptCallback {
    fn accept(&mut self, body: &BodyHandle, normal: FixedVec3, fraction: Scalar) -> bool;
}

/// Maps a body to its collision layer index.
///
/// A `None` lookup means "no bit set": the body is excluded from every
/// mask-restricted query.
pub trait LayerLookup {
    fn layer_of(&self, body: &BodyHandle) -> Option<u32>;
}

/// Per-cast options. The default tests every registered body and accepts
/// the closest hit.
#[derive(Default)]
pub struct RayOptions<'a> {
    pub accept: Option<&'a mut dyn RayAcceptCallback>,
    pub layers: Option<(&'a dyn LayerLookup, LayerMask)>,
}
