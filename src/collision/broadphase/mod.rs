//! Candidate-pair discovery over the body registry.

mod sweep;

pub use sweep::{SweepBroadphase, SweepStats};

use super::body::BodyHandle;

/// Broadphase-accept predicate, run once per AABB-overlapping,
/// non-static-static pair.
///
/// Pair arguments arrive as `(active-window member, incoming body)`, i.e.
/// the body that entered the sweep earlier comes first; consumers must
/// treat the pair as unordered.
pub trait PairAcceptCallback {
    fn accept(&mut self, a: &BodyHandle, b: &BodyHandle) -> bool;
}

/// The "no predicate" case: every candidate pair goes to narrow phase.
pub struct AcceptAll;

impl PairAcceptCallback for AcceptAll {
    fn accept(&mut self, _a: &BodyHandle, _b: &BodyHandle) -> bool {
        true
    }
}

/// Narrow-phase entry point, invoked once per accepted pair. Contact
/// generation is entirely the collaborator's concern.
pub trait NarrowphaseCallback {
    fn process_pair(&mut self, a: &BodyHandle, b: &BodyHandle);
}

/// The "no narrow phase" case, for callers that only want the accept
/// predicate to observe candidate pairs.
pub struct NullNarrowphase;

impl NarrowphaseCallback for NullNarrowphase {
    fn process_pair(&mut self, _a: &BodyHandle, _b: &BodyHandle) {}
}
