//! Canonical set of assembly parts.
//!
//! The [`PartRegistry`] owns every [`Part`] for the engine's lifetime. Only
//! the choreography writes to it; pickers, marker projection, and the host
//! renderer read the latest committed values.

mod mesh;
mod part;
mod registry;

pub use mesh::{Aabb, MeshEntry, MeshId, MeshMaterial, MeshNode, MeshShape, PartSubtree};
pub use part::{Part, PartId, PartInfo, PartKind, PartPose, PartTransform};
pub use registry::{PartRegistry, PartSpec};

#[cfg(test)]
pub(crate) use registry::tests;
