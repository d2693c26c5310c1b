use super::{
    body::{BodyHandle, LayerMask},
    ray_callbacks::{BodyRayCaster, RayHit, RayOptions},
    registry::BodyRegistry,
};
use crate::linear_math::{FixedVec3, Scalar};

/// Closest-hit ray queries over the body registry.
///
/// Intentionally a brute-force linear scan: query cost is traded for
/// simplicity and for results that are independent of any spatial
/// structure's insertion history. Scan order is registry insertion order,
/// so equal-fraction ties resolve deterministically. Queries are read-only
/// and idempotent.
pub struct RayQuery<'a, C: BodyRayCaster> {
    registry: &'a BodyRegistry,
    caster: &'a C,
}

impl<'a, C: BodyRayCaster> RayQuery<'a, C> {
    #[must_use]
    pub const fn new(registry: &'a BodyRegistry, caster: &'a C) -> Self {
        Self { registry, caster }
    }

    /// Finds the closest accepted hit along `[origin, origin + direction]`.
    ///
    /// Compound bodies are expanded into their parts, each tested (and
    /// layer-filtered) as if independently registered; the returned hit
    /// names the part. A candidate becomes the best hit only when its
    /// fraction is strictly below the best so far and the accept callback
    /// (if any) approves it; rejected candidates leave the best fraction
    /// untouched, so a nearer rejected hit does not block a farther
    /// accepted one. That asymmetry is long-standing observable behavior
    /// and is pinned by tests; do not "fix" it here.
    #[must_use]
    pub fn cast(
        &self,
        origin: FixedVec3,
        direction: FixedVec3,
        opts: &mut RayOptions<'_>,
    ) -> Option<RayHit> {
        let mut best = None;
        // No-hit sentinel: any real fraction compares below it.
        let mut best_fraction = Scalar::MAX;

        for body in self.registry.bodies() {
            let parts = body.borrow().sub_bodies();
            match parts {
                Some(parts) => {
                    for part in &parts {
                        self.test_one(part, origin, direction, opts, &mut best, &mut best_fraction);
                    }
                }
                None => {
                    self.test_one(body, origin, direction, opts, &mut best, &mut best_fraction);
                }
            }
        }

        best
    }

    fn test_one(
        &self,
        body: &BodyHandle,
        origin: FixedVec3,
        direction: FixedVec3,
        opts: &mut RayOptions<'_>,
        best: &mut Option<RayHit>,
        best_fraction: &mut Scalar,
    ) {
        if let Some((lookup, mask)) = opts.layers {
            let bit = lookup
                .layer_of(body)
                .map_or(LayerMask::NONE, LayerMask::from_layer);
            if !mask.contains(bit) {
                return;
            }
        }

        let Some(hit) = self.caster.cast_ray(body, origin, direction) else {
            return;
        };
        if hit.fraction >= *best_fraction {
            return;
        }

        if let Some(accept) = opts.accept.as_deref_mut()
            && !accept.accept(body, hit.normal, hit.fraction)
        {
            return;
        }

        *best_fraction = hit.fraction;
        *best = Some(RayHit {
            body: body.clone(),
            normal: hit.normal,
            fraction: hit.fraction,
        });
    }
}
