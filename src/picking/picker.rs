use glam::{UVec2, Vec2};

use super::ray::{intersect_shape, Ray};
use crate::camera::Camera;
use crate::parts::{MeshId, Part, PartId, PartRegistry};

/// Nearest intersection found by [`Picker::pick_ray`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    /// Owner of the hit mesh.
    pub part: PartId,
    /// Leaf mesh that was hit.
    pub mesh: MeshId,
    /// Distance along the ray.
    pub distance: f32,
}

/// Resolves pointer positions to parts.
///
/// Starts disabled; the engine enables it only while the assembly is
/// opened up.
#[derive(Debug, Clone, Default)]
pub struct Picker {
    enabled: bool,
}

impl Picker {
    /// Disabled picker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable picking.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether picks can succeed.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Part under the pixel `screen`, among `candidates`.
    ///
    /// `None` when disabled, when nothing is hit, or when the nearest hit
    /// belongs to a non-interactive part.
    #[must_use]
    pub fn pick_at(
        &self,
        screen: Vec2,
        viewport: UVec2,
        camera: &Camera,
        registry: &PartRegistry,
        candidates: &[PartId],
    ) -> Option<PartId> {
        if !self.enabled {
            return None;
        }
        let ray = Ray::from_screen(screen, viewport, camera.build_matrix())?;
        let hit = self.pick_ray(&ray, registry, candidates)?;
        let owner = registry.get(hit.part)?;
        if !owner.interactive {
            log::debug!("pick hit non-interactive {}", owner.id);
            return None;
        }
        Some(owner.id)
    }

    /// Nearest hit of `ray` against every mesh of the visible candidates,
    /// resolved to its owner through the registry.
    #[must_use]
    pub fn pick_ray(
        &self,
        ray: &Ray,
        registry: &PartRegistry,
        candidates: &[PartId],
    ) -> Option<PickHit> {
        if !self.enabled {
            return None;
        }
        candidates
            .iter()
            .filter(|&&id| registry.get(id).is_some_and(Part::is_visible))
            .flat_map(|&id| registry.world_shapes(id))
            .filter_map(|(mesh, shape)| {
                let distance = intersect_shape(ray, &shape)?;
                let part = registry.owner_of(mesh)?;
                Some(PickHit {
                    part,
                    mesh,
                    distance,
                })
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}
