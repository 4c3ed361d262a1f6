//! Screen-space markers that follow parts.
//!
//! Projection is recomputed from the current camera and part positions on
//! every refresh; nothing is cached between frames.

mod project;

use glam::UVec2;
pub use project::{project, ScreenPoint};

use crate::camera::Camera;
use crate::parts::{PartId, PartRegistry};

/// Overlay label anchored to one part.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Part the marker follows.
    pub part: PartId,
    /// Text shown by the UI shell.
    pub label: String,
    /// Last projected position.
    pub screen: ScreenPoint,
}

/// The live set of markers.
#[derive(Debug, Clone, Default)]
pub struct MarkerSet {
    markers: Vec<Marker>,
}

impl MarkerSet {
    /// Empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the set with one marker per visible interactive part.
    /// Positions are filled in by the next [`update`](Self::update).
    pub fn populate(&mut self, registry: &PartRegistry) {
        self.markers = registry
            .all()
            .filter(|part| part.interactive && part.is_visible())
            .map(|part| Marker {
                part: part.id,
                label: part.info.title.clone(),
                screen: ScreenPoint::HIDDEN,
            })
            .collect();
        log::debug!("created {} markers", self.markers.len());
    }

    /// Remove every marker.
    pub fn clear(&mut self) {
        self.markers.clear();
    }

    /// Re-project every marker at its part's current world bounds center.
    pub fn update(&mut self, registry: &PartRegistry, camera: &Camera, viewport: UVec2) {
        for marker in &mut self.markers {
            let anchor = registry
                .world_bounds(marker.part)
                .map(|b| b.center())
                .or_else(|| registry.get(marker.part).map(|p| p.transform.position));
            marker.screen = anchor.map_or(ScreenPoint::HIDDEN, |pos| {
                project(pos, camera, viewport)
            });
        }
    }

    /// Markers in part order.
    pub fn iter(&self) -> impl Iterator<Item = &Marker> + '_ {
        self.markers.iter()
    }

    /// Number of markers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
