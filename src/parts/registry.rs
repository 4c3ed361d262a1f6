use glam::Vec3;

use super::mesh::{Aabb, MeshEntry, MeshId, MeshMaterial, MeshShape, PartSubtree};
use super::part::{Part, PartId, PartKind, PartPose, PartTransform};
use crate::error::ReactorError;
use crate::util::color::Rgb;

/// Everything needed to register one part.
#[derive(Debug, Clone)]
pub struct PartSpec {
    /// Role in the assembly.
    pub kind: PartKind,
    /// Loaded metadata and leaf meshes.
    pub subtree: PartSubtree,
    /// Precomputed target positions.
    pub pose: PartPose,
    /// Neutral assembled color.
    pub base_color: Rgb,
    /// Vibrant exploded color.
    pub highlight_color: Rgb,
    /// Whether picks resolving to this part select it.
    pub interactive: bool,
}

/// Owns all parts and the leaf-mesh → part ownership table.
///
/// Mesh ids are assigned contiguously at registration, so resolving a
/// picked mesh to its owner is a table lookup rather than a walk up a
/// scene graph.
#[derive(Debug, Clone)]
pub struct PartRegistry {
    parts: Vec<Part>,
    meshes: Vec<MeshEntry>,
    housing: PartId,
    lid: PartId,
    fuel_units: Vec<PartId>,
}

impl PartRegistry {
    /// Register parts in order. Requires exactly one housing and one lid.
    ///
    /// Every part starts at its assembled pose, fully opaque, in its base
    /// color.
    pub fn from_specs(specs: Vec<PartSpec>) -> Result<Self, ReactorError> {
        let mut parts = Vec::with_capacity(specs.len());
        let mut meshes = Vec::new();
        let mut housing = None;
        let mut lid = None;
        let mut fuel_units = Vec::new();

        for (i, spec) in specs.into_iter().enumerate() {
            let id = PartId(i as u32);
            match spec.kind {
                PartKind::Housing if housing.is_some() => {
                    return Err(ReactorError::InvalidAssembly(
                        "more than one housing".to_owned(),
                    ));
                }
                PartKind::Lid if lid.is_some() => {
                    return Err(ReactorError::InvalidAssembly(
                        "more than one lid".to_owned(),
                    ));
                }
                PartKind::Housing => housing = Some(id),
                PartKind::Lid => lid = Some(id),
                PartKind::FuelUnit { .. } => fuel_units.push(id),
            }

            let material = MeshMaterial::new(spec.base_color, 1.0);
            let mut member_meshes = Vec::with_capacity(spec.subtree.meshes.len());
            for node in spec.subtree.meshes {
                let mesh_id = MeshId(meshes.len() as u32);
                member_meshes.push(mesh_id);
                meshes.push(MeshEntry {
                    id: mesh_id,
                    owner: id,
                    name: node.name,
                    shape: node.shape,
                    material,
                });
            }

            parts.push(Part {
                id,
                kind: spec.kind,
                transform: PartTransform {
                    position: spec.pose.assembled,
                    opacity: 1.0,
                },
                color: spec.base_color,
                base_color: spec.base_color,
                highlight_color: spec.highlight_color,
                interactive: spec.interactive,
                info: spec.subtree.info,
                pose: spec.pose,
                meshes: member_meshes,
            });
        }

        let housing = housing.ok_or_else(|| {
            ReactorError::InvalidAssembly("no housing registered".to_owned())
        })?;
        let lid = lid.ok_or_else(|| {
            ReactorError::InvalidAssembly("no lid registered".to_owned())
        })?;

        log::debug!(
            "registered {} parts ({} fuel units), {} meshes",
            parts.len(),
            fuel_units.len(),
            meshes.len()
        );

        Ok(Self {
            parts,
            meshes,
            housing,
            lid,
            fuel_units,
        })
    }

    /// Look up a part.
    #[must_use]
    pub fn get(&self, id: PartId) -> Option<&Part> {
        self.parts.get(id.index())
    }

    /// All parts in registration order.
    pub fn all(&self) -> impl Iterator<Item = &Part> + '_ {
        self.parts.iter()
    }

    /// Number of registered parts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether no parts are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// The housing.
    #[must_use]
    pub fn housing(&self) -> &Part {
        &self.parts[self.housing.index()]
    }

    /// The lid.
    #[must_use]
    pub fn lid(&self) -> &Part {
        &self.parts[self.lid.index()]
    }

    /// Fuel units in slot order.
    pub fn fuel_units(&self) -> impl Iterator<Item = &Part> + '_ {
        self.fuel_units.iter().map(|id| &self.parts[id.index()])
    }

    /// Set a part's color and push it to its meshes. `false` if unknown.
    pub fn set_color(&mut self, id: PartId, color: Rgb) -> bool {
        let Some(part) = self.parts.get_mut(id.index()) else {
            return false;
        };
        part.color = color;
        self.apply_material(id);
        true
    }

    /// Move a part. `false` if unknown.
    pub fn set_position(&mut self, id: PartId, position: Vec3) -> bool {
        let Some(part) = self.parts.get_mut(id.index()) else {
            return false;
        };
        part.transform.position = position;
        true
    }

    /// Set a part's opacity (clamped to [0, 1]) and push it to its meshes.
    /// `false` if unknown.
    pub fn set_opacity(&mut self, id: PartId, opacity: f32) -> bool {
        let Some(part) = self.parts.get_mut(id.index()) else {
            return false;
        };
        part.transform.opacity = opacity.clamp(0.0, 1.0);
        self.apply_material(id);
        true
    }

    /// Mirror a part's color and opacity onto every member mesh.
    fn apply_material(&mut self, id: PartId) {
        let Some(part) = self.parts.get(id.index()) else {
            return;
        };
        let material = MeshMaterial::new(part.color, part.transform.opacity);
        for mesh_id in &part.meshes {
            if let Some(entry) = self.meshes.get_mut(mesh_id.index()) {
                entry.material = material;
            }
        }
    }

    /// Owning part of a leaf mesh.
    #[must_use]
    pub fn owner_of(&self, mesh: MeshId) -> Option<PartId> {
        self.meshes.get(mesh.index()).map(|entry| entry.owner)
    }

    /// Look up a leaf mesh.
    #[must_use]
    pub fn mesh(&self, mesh: MeshId) -> Option<&MeshEntry> {
        self.meshes.get(mesh.index())
    }

    /// All leaf meshes, for the host renderer.
    pub fn meshes(&self) -> impl Iterator<Item = &MeshEntry> + '_ {
        self.meshes.iter()
    }

    /// A part's mesh shapes moved to its current world position.
    pub fn world_shapes(
        &self,
        id: PartId,
    ) -> impl Iterator<Item = (MeshId, MeshShape)> + '_ {
        let part = self.get(id);
        let offset = part.map_or(Vec3::ZERO, |p| p.transform.position);
        part.map(Part::meshes)
            .unwrap_or_default()
            .iter()
            .filter_map(move |&mesh_id| {
                self.mesh(mesh_id)
                    .map(|entry| (mesh_id, entry.shape.translated(offset)))
            })
    }

    /// World-space bounds of a part. `None` for unknown or mesh-less parts.
    #[must_use]
    pub fn world_bounds(&self, id: PartId) -> Option<Aabb> {
        self.world_shapes(id)
            .map(|(_, shape)| shape.bounds())
            .reduce(|acc, b| acc.union(&b))
    }
}
