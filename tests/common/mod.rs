#![allow(dead_code)]

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use glam::Vec3A;
use locksweep::{
    Aabb, BodyHandle, BodyKey, BodyRayCaster, BroadphaseBody, FixedVec3, LayerLookup,
    RayIntersection, Scalar, body_key, from_f32,
};

pub fn fx(value: f32) -> Scalar {
    from_f32(value)
}

pub fn vec3(x: f32, y: f32, z: f32) -> FixedVec3 {
    FixedVec3::from_vec3a(Vec3A::new(x, y, z))
}

pub fn aabb(min: [f32; 3], max: [f32; 3]) -> Aabb {
    Aabb::new(
        FixedVec3::from_vec3a(Vec3A::from_array(min)),
        FixedVec3::from_vec3a(Vec3A::from_array(max)),
    )
}

pub struct TestBody {
    pub aabb: Aabb,
    pub is_static: bool,
    pub parts: Vec<BodyHandle>,
}

impl BroadphaseBody for TestBody {
    fn bounding_box(&self) -> Aabb {
        self.aabb
    }

    fn is_static_or_inactive(&self) -> bool {
        self.is_static
    }

    fn sub_bodies(&self) -> Option<Vec<BodyHandle>> {
        if self.parts.is_empty() {
            None
        } else {
            Some(self.parts.clone())
        }
    }
}

pub fn body(min: [f32; 3], max: [f32; 3]) -> BodyHandle {
    Rc::new(RefCell::new(TestBody {
        aabb: aabb(min, max),
        is_static: false,
        parts: Vec::new(),
    }))
}

pub fn static_body(min: [f32; 3], max: [f32; 3]) -> BodyHandle {
    Rc::new(RefCell::new(TestBody {
        aabb: aabb(min, max),
        is_static: true,
        parts: Vec::new(),
    }))
}

/// Compound body whose bounds are the union of its parts.
pub fn compound(parts: Vec<BodyHandle>) -> BodyHandle {
    let mut bounds = parts[0].borrow().bounding_box();
    for part in &parts[1..] {
        bounds += part.borrow().bounding_box();
    }
    Rc::new(RefCell::new(TestBody {
        aabb: bounds,
        is_static: false,
        parts,
    }))
}

pub fn norm_pair(a: BodyKey, b: BodyKey) -> (BodyKey, BodyKey) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Exact-intersection stand-in: each body either hits at a scripted
/// fraction or misses. Lets the tests pin the engine's selection semantics
/// without real shape geometry.
#[derive(Default)]
pub struct ScriptedCaster {
    hits: HashMap<BodyKey, RayIntersection>,
}

impl ScriptedCaster {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_hit(mut self, body: &BodyHandle, fraction: f32) -> Self {
        self.hits.insert(
            body_key(body),
            RayIntersection {
                normal: vec3(0.0, 1.0, 0.0),
                fraction: fx(fraction),
            },
        );
        self
    }
}

impl BodyRayCaster for ScriptedCaster {
    fn cast_ray(
        &self,
        body: &BodyHandle,
        _origin: FixedVec3,
        _direction: FixedVec3,
    ) -> Option<RayIntersection> {
        self.hits.get(&body_key(body)).copied()
    }
}

/// Layer collaborator keyed by body identity; bodies missing from the table
/// have no layer.
#[derive(Default)]
pub struct LayerTable {
    layers: HashMap<BodyKey, u32>,
}

impl LayerTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_layer(mut self, body: &BodyHandle, layer: u32) -> Self {
        self.layers.insert(body_key(body), layer);
        self
    }
}

impl LayerLookup for LayerTable {
    fn layer_of(&self, body: &BodyHandle) -> Option<u32> {
        self.layers.get(&body_key(body)).copied()
    }
}
