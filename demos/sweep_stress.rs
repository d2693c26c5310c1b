//! Randomized sweep stress: scatter boxes, jitter them every tick, and
//! report pair counts against the O(n^2) expectation.
//!
//! Run with `cargo run --example sweep_stress --release`.

use std::{cell::RefCell, rc::Rc, time::Instant};

use glam::Vec3A;
use locksweep::{
    Aabb, AcceptAll, BodyHandle, BodyRegistry, BroadphaseBody, FixedVec3, NarrowphaseCallback,
    SweepBroadphase, logging,
};

const NUM_BODIES: usize = 2000;
const NUM_TICKS: u32 = 60;

struct StressBody {
    aabb: Aabb,
    is_static: bool,
}

impl BroadphaseBody for StressBody {
    fn bounding_box(&self) -> Aabb {
        self.aabb
    }

    fn is_static_or_inactive(&self) -> bool {
        self.is_static
    }
}

struct CountingNarrowphase {
    pairs: usize,
}

impl NarrowphaseCallback for CountingNarrowphase {
    fn process_pair(&mut self, _a: &BodyHandle, _b: &BodyHandle) {
        self.pairs += 1;
    }
}

fn random_aabb(rng: &mut fastrand::Rng) -> Aabb {
    let min = Vec3A::new(
        rng.i32(-500..500) as f32,
        rng.i32(-500..500) as f32,
        rng.i32(-500..500) as f32,
    );
    let extent = Vec3A::new(
        rng.i32(2..16) as f32,
        rng.i32(2..16) as f32,
        rng.i32(2..16) as f32,
    );
    Aabb::new(
        FixedVec3::from_vec3a(min),
        FixedVec3::from_vec3a(min + extent),
    )
}

fn main() {
    logging::try_init().unwrap();

    let mut rng = fastrand::Rng::with_seed(0xC0FFEE);
    let mut registry = BodyRegistry::new();
    let mut bodies = Vec::with_capacity(NUM_BODIES);

    for _ in 0..NUM_BODIES {
        let body = Rc::new(RefCell::new(StressBody {
            aabb: random_aabb(&mut rng),
            is_static: rng.u8(..4) == 0,
        }));
        let handle: BodyHandle = body.clone();
        registry.add(handle).unwrap();
        bodies.push(body);
    }

    let mut sweep = SweepBroadphase::new();
    let mut total_pairs = 0;
    let start = Instant::now();

    for tick in 0..NUM_TICKS {
        // Stand-in for the integrator: nudge every dynamic body.
        for body in &bodies {
            let mut body = body.borrow_mut();
            if body.is_static {
                continue;
            }
            let jitter = Vec3A::new(
                rng.i32(-3..=3) as f32,
                rng.i32(-3..=3) as f32,
                rng.i32(-3..=3) as f32,
            );
            let aabb = body.aabb;
            body.aabb = Aabb::new(
                FixedVec3::from_vec3a(aabb.min.to_vec3a() + jitter),
                FixedVec3::from_vec3a(aabb.max.to_vec3a() + jitter),
            );
        }

        let mut narrow = CountingNarrowphase { pairs: 0 };
        let stats = sweep.detect(&registry, &mut AcceptAll, &mut narrow);
        total_pairs += narrow.pairs;

        if tick % 10 == 0 {
            log::info!(
                "tick {tick}: {} bodies, {} window pairs tested, {} overlapping",
                stats.bodies,
                stats.pairs_tested,
                stats.pairs_accepted
            );
        }
    }

    let elapsed = start.elapsed();
    log::info!(
        "{NUM_TICKS} ticks over {NUM_BODIES} bodies in {:.1} ms ({:.3} ms/tick), {total_pairs} pairs total",
        elapsed.as_secs_f64() * 1000.0,
        elapsed.as_secs_f64() * 1000.0 / f64::from(NUM_TICKS)
    );
}
