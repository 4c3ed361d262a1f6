//! Pointer → part resolution by ray intersection.
//!
//! A screen position is unprojected into a world ray, intersected with the
//! pick shapes of every candidate part, and the nearest hit mesh is
//! resolved to its owning part through the registry's ownership table.

mod picker;
mod ray;

pub use picker::{PickHit, Picker};
pub use ray::{intersect_aabb, intersect_shape, intersect_sphere, Ray};
