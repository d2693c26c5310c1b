use log::trace;

use super::{AcceptAll, NarrowphaseCallback, PairAcceptCallback};
use crate::{
    collision::{body::BodyHandle, registry::BodyRegistry},
    linear_math::Aabb,
};

/// Per-body snapshot taken at the start of a sweep. Geometry is read once
/// per pass so callback-side mutation cannot skew the sweep mid-flight.
struct SweepEntry {
    aabb: Aabb,
    is_static: bool,
    idx: usize,
}

/// Summary counters for one detection pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepStats {
    pub bodies: usize,
    /// Non-static-static pairs that reached the y/z overlap test.
    pub pairs_tested: usize,
    /// Pairs that overlapped on all three axes and passed the accept
    /// predicate.
    pub pairs_accepted: usize,
}

/// Stateless sweep-and-prune pair finder.
///
/// The sorted order and active window are rebuilt from scratch on every
/// [`detect`](Self::detect) call; the two vectors held here are scratch
/// space kept only to avoid reallocation. No detection state survives
/// between calls.
#[derive(Default)]
pub struct SweepBroadphase {
    entries: Vec<SweepEntry>,
    active: Vec<usize>,
}

impl SweepBroadphase {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(32),
            active: Vec::with_capacity(32),
        }
    }

    /// Runs one sweep over the registry.
    ///
    /// Every pair of bodies whose bounding boxes overlap on all three axes,
    /// except static-static pairs, is offered to `filter`; accepted pairs
    /// are handed to `narrow`. Each such pair is offered exactly once per
    /// call. Passing [`AcceptAll`] as the filter degenerates to "test all
    /// AABB-overlapping pairs".
    ///
    /// Bodies may have moved since the previous tick, so the total order
    /// along x is recomputed on every call: ascending bounding-box min-x,
    /// ties broken by registration order. The comparison is a three-way
    /// compare on the fixed-point scalar, which is what keeps the order
    /// reproducible bit-for-bit across platforms.
    pub fn detect<F, N>(
        &mut self,
        registry: &BodyRegistry,
        filter: &mut F,
        narrow: &mut N,
    ) -> SweepStats
    where
        F: PairAcceptCallback + ?Sized,
        N: NarrowphaseCallback + ?Sized,
    {
        let bodies = registry.bodies();

        self.entries.clear();
        self.entries.reserve(bodies.len());
        self.active.clear();

        for (idx, body) in bodies.iter().enumerate() {
            let body = body.borrow();
            self.entries.push(SweepEntry {
                aabb: body.bounding_box(),
                is_static: body.is_static_or_inactive(),
                idx,
            });
        }

        self.entries
            .sort_by(|a, b| a.aabb.min.x.cmp(&b.aabb.min.x).then(a.idx.cmp(&b.idx)));

        let mut stats = SweepStats {
            bodies: bodies.len(),
            ..Default::default()
        };

        for i in 0..self.entries.len() {
            let entries = &self.entries;
            let incoming = &entries[i];

            // Members ending strictly left of the incoming body cannot
            // overlap it or anything later in the sort; eviction is
            // permanent for this pass.
            let min_x = incoming.aabb.min.x;
            self.active.retain(|&j| entries[j].aabb.max.x >= min_x);

            for &j in &self.active {
                let member = &entries[j];
                if member.is_static && incoming.is_static {
                    continue;
                }

                stats.pairs_tested += 1;
                // x-overlap is implied by the active window.
                if !incoming.aabb.overlaps_y(&member.aabb)
                    || !incoming.aabb.overlaps_z(&member.aabb)
                {
                    continue;
                }

                let a = &bodies[member.idx];
                let b = &bodies[incoming.idx];
                if filter.accept(a, b) {
                    stats.pairs_accepted += 1;
                    narrow.process_pair(a, b);
                }
            }

            self.active.push(i);
        }

        trace!(
            "sweep over {} bodies: {} pairs tested, {} accepted",
            stats.bodies, stats.pairs_tested, stats.pairs_accepted
        );

        stats
    }

    /// Collects every candidate pair with no accept predicate. Convenience
    /// for tests and offline tooling; the hot path is [`detect`](Self::detect).
    #[must_use]
    pub fn collect_pairs(&mut self, registry: &BodyRegistry) -> Vec<(BodyHandle, BodyHandle)> {
        struct PairCollector {
            pairs: Vec<(BodyHandle, BodyHandle)>,
        }

        impl NarrowphaseCallback for PairCollector {
            fn process_pair(&mut self, a: &BodyHandle, b: &BodyHandle) {
                self.pairs.push((a.clone(), b.clone()));
            }
        }

        let mut collector = PairCollector { pairs: Vec::new() };
        self.detect(registry, &mut AcceptAll, &mut collector);
        collector.pairs
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use glam::Vec3A;

    use super::*;
    use crate::{
        collision::{
            body::{BroadphaseBody, body_key},
            broadphase::NullNarrowphase,
        },
        linear_math::FixedVec3,
    };

    struct Box3 {
        aabb: Aabb,
    }

    impl BroadphaseBody for Box3 {
        fn bounding_box(&self) -> Aabb {
            self.aabb
        }

        fn is_static_or_inactive(&self) -> bool {
            false
        }
    }

    fn add_box(registry: &mut BodyRegistry, min: [f32; 3], max: [f32; 3]) -> BodyHandle {
        let body: BodyHandle = Rc::new(RefCell::new(Box3 {
            aabb: Aabb::new(
                FixedVec3::from_vec3a(Vec3A::from_array(min)),
                FixedVec3::from_vec3a(Vec3A::from_array(max)),
            ),
        }));
        registry.add(body.clone()).unwrap();
        body
    }

    #[test]
    fn test_equal_min_x_ties_break_by_registration_order() {
        // Two coincident boxes sort by insertion order, so the earlier
        // registration is always the active-window member of the pair.
        let mut registry = BodyRegistry::new();
        let first = add_box(&mut registry, [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        let second = add_box(&mut registry, [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);

        let pairs = SweepBroadphase::new().collect_pairs(&registry);
        assert_eq!(pairs.len(), 1);
        assert_eq!(body_key(&pairs[0].0), body_key(&first));
        assert_eq!(body_key(&pairs[0].1), body_key(&second));
    }

    #[test]
    fn test_eviction_is_strict() {
        // Boxes touching exactly at x = 1 still overlap; the member is only
        // evicted once its max-x falls strictly below the incoming min-x.
        let mut registry = BodyRegistry::new();
        add_box(&mut registry, [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        add_box(&mut registry, [1.0, 0.0, 0.0], [2.0, 1.0, 1.0]);

        let pairs = SweepBroadphase::new().collect_pairs(&registry);
        assert_eq!(pairs.len(), 1);
    }

    #[test]
    fn test_x_disjoint_boxes_never_pair() {
        let mut registry = BodyRegistry::new();
        add_box(&mut registry, [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        add_box(&mut registry, [3.0, 0.0, 0.0], [4.0, 1.0, 1.0]);

        let stats = SweepBroadphase::new().detect(
            &registry,
            &mut AcceptAll,
            &mut NullNarrowphase,
        );
        assert_eq!(stats.pairs_tested, 0);
        assert_eq!(stats.pairs_accepted, 0);
    }
}
