//! Read-only query methods for [`AssemblyEngine`].

use glam::UVec2;

use super::{AssemblyEngine, AssemblyState, Status};
use crate::animation::{PhaseKind, Sequence};
use crate::camera::Camera;
use crate::markers::MarkerSet;
use crate::options::Options;
use crate::parts::{PartId, PartInfo, PartRegistry};

// ── State ──

impl AssemblyEngine {
    /// Coarse assembly state.
    #[must_use]
    pub fn state(&self) -> AssemblyState {
        self.state
    }

    /// Status line for the UI.
    #[must_use]
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Whether a transition is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.sequence.is_some()
    }

    /// Phase currently animating, if any.
    #[must_use]
    pub fn active_phase(&self) -> Option<PhaseKind> {
        self.sequence.as_ref().and_then(Sequence::active_kind)
    }

    /// Whether pointer picks can currently select parts.
    #[must_use]
    pub fn picking_enabled(&self) -> bool {
        self.picker.is_enabled()
    }
}

// ── Scene access ──

impl AssemblyEngine {
    /// Every part with its current transform, color and meshes.
    #[must_use]
    pub fn registry(&self) -> &PartRegistry {
        &self.registry
    }

    /// Current camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        self.camera.camera()
    }

    /// Overlay markers, refreshed every tick.
    #[must_use]
    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    /// Viewport size in physical pixels.
    #[must_use]
    pub fn viewport(&self) -> UVec2 {
        self.viewport
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}

// ── Selection ──

impl AssemblyEngine {
    /// Selected part.
    #[must_use]
    pub fn selected_part(&self) -> Option<PartId> {
        self.selected
    }

    /// Info-panel metadata of the selected part.
    #[must_use]
    pub fn selected_info(&self) -> Option<&PartInfo> {
        self.selected
            .and_then(|id| self.registry.get(id))
            .map(|part| &part.info)
    }
}
