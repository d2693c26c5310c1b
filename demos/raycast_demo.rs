//! Ray query walk-through: a few boxes on different layers, one compound
//! body, and a fixed-point slab test as the exact-intersection collaborator.
//!
//! Run with `cargo run --example raycast_demo`.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use glam::Vec3A;
use locksweep::{
    Aabb, BodyHandle, BodyKey, BodyRayCaster, BodyRegistry, BroadphaseBody, FixedVec3,
    LayerLookup, LayerMask, RayIntersection, RayOptions, RayQuery, Scalar, body_key, logging,
};

struct DemoBox {
    aabb: Aabb,
    parts: Vec<BodyHandle>,
}

impl BroadphaseBody for DemoBox {
    fn bounding_box(&self) -> Aabb {
        self.aabb
    }

    fn is_static_or_inactive(&self) -> bool {
        true
    }

    fn sub_bodies(&self) -> Option<Vec<BodyHandle>> {
        if self.parts.is_empty() {
            None
        } else {
            Some(self.parts.clone())
        }
    }
}

/// Slab test against the body's own bounding box, entirely in fixed point.
/// A stand-in for the per-shape narrow-phase routine a real engine plugs in.
struct AabbSlabCaster;

impl AabbSlabCaster {
    fn axis_interval(
        origin: Scalar,
        dir: Scalar,
        min: Scalar,
        max: Scalar,
    ) -> Option<(Scalar, Scalar)> {
        if dir == Scalar::ZERO {
            // Parallel to the slab: inside or never.
            if origin < min || origin > max {
                return None;
            }
            return Some((Scalar::MIN, Scalar::MAX));
        }

        let t0 = (min - origin) / dir;
        let t1 = (max - origin) / dir;
        if t0 <= t1 { Some((t0, t1)) } else { Some((t1, t0)) }
    }
}

impl BodyRayCaster for AabbSlabCaster {
    fn cast_ray(
        &self,
        body: &BodyHandle,
        origin: FixedVec3,
        direction: FixedVec3,
    ) -> Option<RayIntersection> {
        let aabb = body.borrow().bounding_box();

        let (x0, x1) = Self::axis_interval(origin.x, direction.x, aabb.min.x, aabb.max.x)?;
        let (y0, y1) = Self::axis_interval(origin.y, direction.y, aabb.min.y, aabb.max.y)?;
        let (z0, z1) = Self::axis_interval(origin.z, direction.z, aabb.min.z, aabb.max.z)?;

        let enter = x0.max(y0).max(z0);
        let exit = x1.min(y1).min(z1);
        if enter > exit || exit < Scalar::ZERO || enter > Scalar::ONE {
            return None;
        }

        let axis = if enter == x0 {
            FixedVec3::new(
                if direction.x > Scalar::ZERO {
                    -Scalar::ONE
                } else {
                    Scalar::ONE
                },
                Scalar::ZERO,
                Scalar::ZERO,
            )
        } else if enter == y0 {
            FixedVec3::new(
                Scalar::ZERO,
                if direction.y > Scalar::ZERO {
                    -Scalar::ONE
                } else {
                    Scalar::ONE
                },
                Scalar::ZERO,
            )
        } else {
            FixedVec3::new(
                Scalar::ZERO,
                Scalar::ZERO,
                if direction.z > Scalar::ZERO {
                    -Scalar::ONE
                } else {
                    Scalar::ONE
                },
            )
        };

        Some(RayIntersection {
            normal: axis,
            fraction: enter.max(Scalar::ZERO),
        })
    }
}

#[derive(Default)]
struct DemoLayers {
    layers: HashMap<BodyKey, u32>,
}

impl LayerLookup for DemoLayers {
    fn layer_of(&self, body: &BodyHandle) -> Option<u32> {
        self.layers.get(&body_key(body)).copied()
    }
}

fn demo_box(min: [f32; 3], max: [f32; 3]) -> BodyHandle {
    Rc::new(RefCell::new(DemoBox {
        aabb: Aabb::new(
            FixedVec3::from_vec3a(Vec3A::from_array(min)),
            FixedVec3::from_vec3a(Vec3A::from_array(max)),
        ),
        parts: Vec::new(),
    }))
}

fn name_of(body: &BodyHandle, named: &[(&'static str, BodyHandle)]) -> &'static str {
    named
        .iter()
        .find(|(_, b)| body_key(b) == body_key(body))
        .map_or("<unknown>", |(name, _)| *name)
}

fn main() {
    logging::try_init().unwrap();

    let mut registry = BodyRegistry::new();
    let mut layers = DemoLayers::default();

    let wall = demo_box([4.0, -2.0, -2.0], [5.0, 2.0, 2.0]);
    let crate_near = demo_box([1.5, -0.5, -0.5], [2.5, 0.5, 0.5]);
    let debris_a = demo_box([6.5, -0.5, -0.5], [7.0, 0.5, 0.5]);
    let debris_b = demo_box([8.0, -0.5, -0.5], [8.5, 0.5, 0.5]);
    let debris = Rc::new(RefCell::new(DemoBox {
        aabb: Aabb::new(
            FixedVec3::from_vec3a(Vec3A::new(6.5, -0.5, -0.5)),
            FixedVec3::from_vec3a(Vec3A::new(8.5, 0.5, 0.5)),
        ),
        parts: vec![debris_a.clone(), debris_b.clone()],
    }));

    layers.layers.insert(body_key(&wall), 0);
    layers.layers.insert(body_key(&crate_near), 1);
    layers.layers.insert(body_key(&debris_a), 2);
    layers.layers.insert(body_key(&debris_b), 2);

    registry.add(wall.clone()).unwrap();
    registry.add(crate_near.clone()).unwrap();
    registry.add(debris.clone()).unwrap();

    let named: Vec<(&'static str, BodyHandle)> = vec![
        ("wall", wall),
        ("crate-near", crate_near),
        ("debris-a", debris_a),
        ("debris-b", debris_b),
    ];

    let caster = AabbSlabCaster;
    let query = RayQuery::new(&registry, &caster);
    let origin = FixedVec3::ZERO;
    let direction = FixedVec3::from_vec3a(Vec3A::new(10.0, 0.0, 0.0));

    let hit = query
        .cast(origin, direction, &mut RayOptions::default())
        .expect("the ray crosses three bodies");
    log::info!(
        "unrestricted: hit {} at fraction {}",
        name_of(&hit.body, &named),
        hit.fraction
    );

    let masked = query
        .cast(
            origin,
            direction,
            &mut RayOptions {
                accept: None,
                layers: Some((&layers, LayerMask::from_layer(2))),
            },
        )
        .expect("debris sits on layer 2");
    log::info!(
        "layer-2 only: hit {} at fraction {} (compound expanded to its parts)",
        name_of(&masked.body, &named),
        masked.fraction
    );

    let miss = query.cast(
        origin,
        direction,
        &mut RayOptions {
            accept: None,
            layers: Some((&layers, LayerMask::from_layer(7))),
        },
    );
    log::info!("layer-7 only: {}", if miss.is_none() { "no hit" } else { "hit" });
}
