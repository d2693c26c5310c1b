//! Broadphase collision detection: body registry, sweep-and-prune pair
//! discovery, and closest-hit ray queries.

pub mod body;
pub mod broadphase;
pub mod ray_callbacks;
pub mod ray_query;
pub mod registry;
