//! Selection and viewport handling for [`AssemblyEngine`].

use glam::{UVec2, Vec2};

use super::AssemblyEngine;
use crate::parts::PartId;

impl AssemblyEngine {
    /// Pick at a pointer position and update the selection.
    ///
    /// Returns `false` without touching the selection while picking is
    /// disabled. Otherwise a hit selects the part and a miss clears the
    /// selection.
    pub fn select_at(&mut self, x: i32, y: i32) -> bool {
        if !self.picker.is_enabled() {
            log::debug!("select at ({x}, {y}) ignored while {}", self.state);
            return false;
        }
        let candidates: Vec<PartId> = self
            .registry
            .all()
            .filter(|part| part.is_visible())
            .map(|part| part.id)
            .collect();
        let hit = self.picker.pick_at(
            Vec2::new(x as f32, y as f32),
            self.viewport,
            self.camera.camera(),
            &self.registry,
            &candidates,
        );

        match hit {
            Some(id) => {
                let title = self
                    .registry
                    .get(id)
                    .map_or("", |part| part.info.title.as_str());
                log::info!("selected {id} ({title})");
            }
            None if self.selected.is_some() => log::debug!("pick missed, selection cleared"),
            None => {}
        }
        self.selected = hit;
        true
    }

    /// Drop the current selection. Returns whether one existed.
    pub fn clear_selection(&mut self) -> bool {
        self.selected.take().is_some()
    }

    /// Return the camera to its home pose.
    pub fn reset_view(&mut self) {
        self.camera.reset_view();
    }

    /// Frame every part currently drawn.
    pub fn fit_camera_to_parts(&mut self) {
        let positions: Vec<_> = self
            .registry
            .all()
            .filter(|part| part.is_visible())
            .filter_map(|part| self.registry.world_bounds(part.id))
            .flat_map(|b| [b.min, b.max])
            .collect();
        self.camera.fit_to_positions(&positions);
    }

    /// Track a new viewport size. Zero-sized viewports (minimized
    /// windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        self.viewport = UVec2::new(width, height);
        self.camera.resize(width, height);
        true
    }
}
