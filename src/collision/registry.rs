use ahash::AHashSet;
use log::debug;
use thiserror::Error;

use super::body::{BodyHandle, BodyKey, body_key};

/// Registering a body that is already a member.
///
/// Recoverable: the registry is left exactly as it was before the call.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("body is already registered with this broadphase")]
pub struct DuplicateBodyError;

/// The set of bodies participating in broadphase detection and ray queries.
///
/// Bodies are kept in insertion order; removal preserves the relative order
/// of the remaining members so that query iteration (and therefore
/// equal-distance tie-breaking) never depends on unrelated removals. The
/// registry imposes no spatial ordering of its own; the sweep re-sorts per
/// call.
///
/// Mutation is exclusive-access between simulation ticks. Neither `add` nor
/// `remove` may run concurrently with an in-flight sweep or ray query.
#[derive(Default)]
pub struct BodyRegistry {
    bodies: Vec<BodyHandle>,
    members: AHashSet<BodyKey>,
}

impl BodyRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            bodies: Vec::with_capacity(32),
            members: AHashSet::with_capacity(32),
        }
    }

    /// Registers a body. Fails if the same body (by handle identity) is
    /// already a member.
    pub fn add(&mut self, body: BodyHandle) -> Result<(), DuplicateBodyError> {
        let key = body_key(&body);
        if !self.members.insert(key) {
            return Err(DuplicateBodyError);
        }

        debug_assert!(body.borrow().bounding_box().is_well_formed());

        self.bodies.push(body);
        debug!("registered body {key:#x}, {} total", self.bodies.len());
        Ok(())
    }

    /// Removes a body, returning whether it was a member.
    ///
    /// Safe to call for bodies referenced by a previous sweep; sweep state is
    /// rebuilt from scratch every detection pass.
    pub fn remove(&mut self, body: &BodyHandle) -> bool {
        let key = body_key(body);
        if !self.members.remove(&key) {
            return false;
        }

        let pos = self
            .bodies
            .iter()
            .position(|b| body_key(b) == key)
            .expect("membership index out of sync with body list");
        self.bodies.remove(pos);
        debug!("removed body {key:#x}, {} remain", self.bodies.len());
        true
    }

    #[must_use]
    pub fn contains(&self, body: &BodyHandle) -> bool {
        self.members.contains(&body_key(body))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// All members in insertion order.
    #[must_use]
    pub fn bodies(&self) -> &[BodyHandle] {
        &self.bodies
    }
}
