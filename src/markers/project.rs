use glam::{UVec2, Vec3};

use crate::camera::Camera;

/// A world point mapped to viewport pixels (origin top-left, y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    /// Horizontal pixel.
    pub x: f32,
    /// Vertical pixel.
    pub y: f32,
    /// `false` when the point is behind the camera, outside the depth
    /// range, or off-screen. `x`/`y` are meaningless then.
    pub visible: bool,
}

impl ScreenPoint {
    /// A culled point.
    pub const HIDDEN: Self = Self {
        x: 0.0,
        y: 0.0,
        visible: false,
    };
}

/// Project `position` into `viewport` pixels through `camera`.
#[must_use]
pub fn project(position: Vec3, camera: &Camera, viewport: UVec2) -> ScreenPoint {
    // Right-handed view space looks down -Z.
    let depth = -camera.view_matrix().transform_point3(position).z;
    if !(camera.znear..=camera.zfar).contains(&depth) {
        return ScreenPoint::HIDDEN;
    }

    let ndc = camera.build_matrix().project_point3(position);
    if !ndc.is_finite() || ndc.x.abs() > 1.0 || ndc.y.abs() > 1.0 {
        return ScreenPoint::HIDDEN;
    }

    let size = viewport.as_vec2();
    ScreenPoint {
        x: (ndc.x + 1.0) * 0.5 * size.x,
        y: (1.0 - ndc.y) * 0.5 * size.y,
        visible: true,
    }
}
