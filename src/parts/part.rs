use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::mesh::MeshId;
use crate::util::color::Rgb;

/// Stable identity of a part inside the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartId(pub u32);

impl PartId {
    /// Index into the registry's part table.
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "part#{}", self.0)
    }
}

/// What role a part plays in the assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    /// The outer vessel. Drops down when exploded.
    Housing,
    /// The top closure. Lifts up when exploded.
    Lid,
    /// One member of the repeated fuel group.
    FuelUnit {
        /// Slot index within the group, `0..N`.
        index: usize,
    },
}

impl PartKind {
    /// Name the asset loader resolves for this kind. All fuel units share
    /// one model.
    #[must_use]
    pub fn asset_name(self) -> &'static str {
        match self {
            Self::Housing => "housing",
            Self::Lid => "lid",
            Self::FuelUnit { .. } => "fuel_unit",
        }
    }

    /// Slot index for fuel units.
    #[must_use]
    pub fn group_index(self) -> Option<usize> {
        match self {
            Self::FuelUnit { index } => Some(index),
            _ => None,
        }
    }
}

/// Textual metadata shown by the UI's info panel.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PartInfo {
    /// Short display title.
    pub title: String,
    /// One-paragraph description.
    #[serde(default)]
    pub description: String,
    /// Additional key facts, one line each.
    #[serde(default)]
    pub facts: Vec<String>,
}

/// Animatable transform state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartTransform {
    /// World-space translation of the part's local origin.
    pub position: Vec3,
    /// Opacity in [0, 1].
    pub opacity: f32,
}

/// Precomputed target positions, fixed at load time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartPose {
    /// Position in the assembled arrangement.
    pub assembled: Vec3,
    /// Position in the fully exploded arrangement (housing down, lid up,
    /// fuel units in the wide layout).
    pub exploded: Vec3,
}

/// One addressable sub-component of the assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    /// Registry identity.
    pub id: PartId,
    /// Role in the assembly.
    pub kind: PartKind,
    /// Current transform.
    pub transform: PartTransform,
    /// Current color.
    pub color: Rgb,
    /// Neutral color of the assembled state.
    pub base_color: Rgb,
    /// Vibrant color of the exploded state.
    pub highlight_color: Rgb,
    /// Whether a pick that resolves to this part counts as a selection.
    pub interactive: bool,
    /// Info-panel metadata.
    pub info: PartInfo,
    /// Target positions.
    pub pose: PartPose,
    pub(crate) meshes: Vec<MeshId>,
}

impl Part {
    /// Group slot for fuel units.
    #[must_use]
    pub fn group_index(&self) -> Option<usize> {
        self.kind.group_index()
    }

    /// Leaf meshes owned by this part.
    #[must_use]
    pub fn meshes(&self) -> &[MeshId] {
        &self.meshes
    }

    /// Whether the part is drawn at all.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.transform.opacity > 0.0
    }
}
