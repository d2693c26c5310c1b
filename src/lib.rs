//! Deterministic broadphase for lockstep rigid-body simulation.
//!
//! Two engines over one body registry: a stateless sweep-and-prune pass
//! that discovers candidate collision pairs for narrow phase, and a
//! brute-force closest-hit ray query. Both run on fixed-point math so that
//! every participant in a networked simulation computes bit-identical
//! results from identical inputs.

pub mod collision;
pub mod linear_math;
pub mod logging;

pub use collision::{
    body::{BodyHandle, BodyKey, BroadphaseBody, LayerMask, body_key},
    broadphase::{
        AcceptAll, NarrowphaseCallback, NullNarrowphase, PairAcceptCallback, SweepBroadphase,
        SweepStats,
    },
    ray_callbacks::{
        BodyRayCaster, LayerLookup, RayAcceptCallback, RayHit, RayIntersection, RayOptions,
    },
    ray_query::RayQuery,
    registry::{BodyRegistry, DuplicateBodyError},
};
pub use linear_math::{Aabb, FixedVec3, Scalar, from_f32, to_f32};
