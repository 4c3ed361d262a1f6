//! Leaf meshes that make up a part, and their pick geometry.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::part::{PartId, PartInfo};
use crate::util::color::Rgb;

/// Registry-assigned identifier of one leaf mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshId(pub u32);

impl MeshId {
    /// Index into the registry's mesh table.
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Box spanning two corners given in any order.
    #[must_use]
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Smallest box containing both.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Box moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}

/// Pick geometry of a leaf mesh, in part-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MeshShape {
    /// Bounding sphere.
    Sphere {
        /// Sphere center.
        center: Vec3,
        /// Sphere radius.
        radius: f32,
    },
    /// Axis-aligned box.
    Box {
        /// Minimum corner.
        min: Vec3,
        /// Maximum corner.
        max: Vec3,
    },
}

impl MeshShape {
    /// Shape moved by `offset` (part-local to world).
    #[must_use]
    pub fn translated(&self, offset: Vec3) -> Self {
        match *self {
            Self::Sphere { center, radius } => Self::Sphere {
                center: center + offset,
                radius,
            },
            Self::Box { min, max } => Self::Box {
                min: min + offset,
                max: max + offset,
            },
        }
    }

    /// Axis-aligned bounds of the shape.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        match *self {
            Self::Sphere { center, radius } => {
                Aabb::new(center - Vec3::splat(radius), center + Vec3::splat(radius))
            }
            Self::Box { min, max } => Aabb::new(min, max),
        }
    }
}

/// A leaf mesh as delivered by the asset loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshNode {
    /// Node name inside the model file.
    pub name: String,
    /// Pick geometry.
    pub shape: MeshShape,
}

/// A loaded part: its metadata plus every leaf mesh it is built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartSubtree {
    /// Display metadata for the info panel.
    #[serde(flatten)]
    pub info: PartInfo,
    /// Leaf meshes.
    #[serde(default)]
    pub meshes: Vec<MeshNode>,
}

/// Render-facing material state of one mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshMaterial {
    /// Diffuse color.
    pub color: Rgb,
    /// Opacity in [0, 1].
    pub opacity: f32,
    /// Whether the host must render the mesh with blending.
    pub transparent: bool,
}

impl MeshMaterial {
    pub(crate) fn new(color: Rgb, opacity: f32) -> Self {
        Self {
            color,
            opacity,
            transparent: opacity < 1.0,
        }
    }
}

/// A leaf mesh after registration.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshEntry {
    /// Registry-assigned id.
    pub id: MeshId,
    /// Owning part.
    pub owner: PartId,
    /// Node name inside the model file.
    pub name: String,
    /// Pick geometry in part-local coordinates.
    pub shape: MeshShape,
    /// Current material, mirrored from the owning part.
    pub material: MeshMaterial,
}
