use glam::{Mat3, Quat, UVec2, Vec2, Vec3};

use crate::camera::core::Camera;
use crate::options::CameraOptions;

const MIN_DISTANCE: f32 = 0.5;

/// Orbit camera: an orientation and distance around a focus point.
pub struct CameraController {
    orientation: Quat,
    distance: f32,
    focus_point: Vec3,

    /// Camera derived from the orbit state.
    pub camera: Camera,

    home_eye: Vec3,
    home_target: Vec3,
    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,
}

impl CameraController {
    /// Controller at the home pose from `options`, sized for `viewport`.
    #[must_use]
    pub fn new(options: &CameraOptions, viewport: UVec2) -> Self {
        let home_eye = Vec3::from(options.home_eye);
        let home_target = Vec3::from(options.home_target);
        let camera = Camera {
            eye: home_eye,
            target: home_target,
            up: Vec3::Y,
            aspect: aspect_ratio(viewport),
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };

        let mut controller = Self {
            orientation: Quat::IDENTITY,
            distance: 1.0,
            focus_point: home_target,
            camera,
            home_eye,
            home_target,
            rotate_speed: 0.0,
            pan_speed: 0.0,
            zoom_speed: 0.0,
        };
        controller.apply_options(options);
        controller.reset_view();
        controller
    }

    /// Push projection, speed and home-pose options into the controller.
    /// The current view is kept.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.camera.fovy = options.fovy;
        self.camera.znear = options.znear;
        self.camera.zfar = options.zfar;
        self.home_eye = Vec3::from(options.home_eye);
        self.home_target = Vec3::from(options.home_target);
        self.rotate_speed = options.rotate_speed * 0.02;
        self.pan_speed = options.pan_speed * 0.2;
        self.zoom_speed = options.zoom_speed * 0.5;
    }

    fn update_camera_pos(&mut self) {
        let dir = self.orientation * Vec3::Z;

        self.camera.eye = self.focus_point + (dir * self.distance);
        self.camera.target = self.focus_point;
        self.camera.up = self.orientation * Vec3::Y;
    }

    /// Update the aspect ratio. Zero-sized viewports are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.camera.aspect = aspect_ratio(UVec2::new(width, height));
    }

    /// Orbit around the focus point by a pointer delta in pixels.
    pub fn rotate(&mut self, delta: Vec2) {
        let up = self.orientation * Vec3::Y;
        let horizontal_rotation =
            Quat::from_axis_angle(up, -delta.x * self.rotate_speed);
        self.orientation = horizontal_rotation * self.orientation;

        let right = self.orientation * Vec3::X;
        let vertical_rotation =
            Quat::from_axis_angle(right, -delta.y * self.rotate_speed);
        self.orientation = (vertical_rotation * self.orientation).normalize();

        self.update_camera_pos();
    }

    /// Slide the focus point in the view plane by a pointer delta in pixels.
    pub fn pan(&mut self, delta: Vec2) {
        let right = self.orientation * Vec3::X;
        let up = self.orientation * Vec3::Y;
        // Scale with distance so a drag tracks the cursor at any zoom.
        let speed = self.pan_speed * self.distance * 0.01;

        let translation = right * (-delta.x * speed) + up * (delta.y * speed);

        self.focus_point += translation;
        self.update_camera_pos();
    }

    /// Dolly toward (positive) or away from (negative) the focus point.
    pub fn zoom(&mut self, delta: f32) {
        self.distance *= 1.0 - delta * self.zoom_speed;
        self.distance = self
            .distance
            .clamp(MIN_DISTANCE, (self.camera.zfar * 0.9).max(MIN_DISTANCE));
        self.update_camera_pos();
    }

    /// Return to the configured home eye and target.
    pub fn reset_view(&mut self) {
        let offset = self.home_eye - self.home_target;
        let distance = offset.length();
        if distance <= f32::EPSILON {
            log::warn!("camera home eye coincides with target; keeping view");
            return;
        }
        let dir = offset / distance;
        let right = Vec3::Y.cross(dir).try_normalize().unwrap_or(Vec3::X);
        let up = dir.cross(right);

        self.orientation = Quat::from_mat3(&Mat3::from_cols(right, up, dir));
        self.distance = distance;
        self.focus_point = self.home_target;
        self.update_camera_pos();
    }

    /// Adjust camera to fit the given positions, centering on their centroid
    /// and setting distance so all points are visible.
    pub fn fit_to_positions(&mut self, positions: &[Vec3]) {
        if positions.is_empty() {
            return;
        }

        let centroid: Vec3 =
            positions.iter().copied().sum::<Vec3>() / positions.len() as f32;
        let radius = positions
            .iter()
            .map(|p| (*p - centroid).length())
            .fold(0.0f32, f32::max);

        self.focus_point = centroid;

        let fovy_rad = self.camera.fovy.to_radians();
        let fit_distance = radius / (fovy_rad / 2.0).tan();
        self.distance = (fit_distance * 1.5).max(MIN_DISTANCE);

        self.update_camera_pos();
    }

    /// Current camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Orbit center.
    #[must_use]
    pub fn focus_point(&self) -> Vec3 {
        self.focus_point
    }

    /// Eye-to-focus distance.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }
}

fn aspect_ratio(viewport: UVec2) -> f32 {
    if viewport.y == 0 {
        1.0
    } else {
        viewport.x as f32 / viewport.y as f32
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn controller() -> CameraController {
        CameraController::new(&CameraOptions::default(), UVec2::new(1280, 720))
    }

    #[test]
    fn starts_at_home_pose() {
        let ctrl = controller();
        let opts = CameraOptions::default();
        let eye = ctrl.camera().eye;
        assert_relative_eq!(eye.x, opts.home_eye[0], epsilon = 1e-4);
        assert_relative_eq!(eye.y, opts.home_eye[1], epsilon = 1e-4);
        assert_relative_eq!(eye.z, opts.home_eye[2], epsilon = 1e-4);
        assert_eq!(ctrl.camera().target, Vec3::from(opts.home_target));
        assert!(ctrl.camera().up.y > 0.0);
    }

    #[test]
    fn reset_view_undoes_orbit_pan_and_zoom() {
        let mut ctrl = controller();
        let home = ctrl.camera().eye;
        ctrl.rotate(Vec2::new(120.0, -40.0));
        ctrl.pan(Vec2::new(30.0, 10.0));
        ctrl.zoom(3.0);
        assert!(ctrl.camera().eye.distance(home) > 0.1);

        ctrl.reset_view();
        assert!(ctrl.camera().eye.distance(home) < 1e-4);
    }

    #[test]
    fn rotation_keeps_distance() {
        let mut ctrl = controller();
        let before = ctrl.distance();
        ctrl.rotate(Vec2::new(50.0, 25.0));
        let eye_to_focus = ctrl.camera().eye.distance(ctrl.focus_point());
        assert_relative_eq!(eye_to_focus, before, epsilon = 1e-3);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut ctrl = controller();
        for _ in 0..200 {
            ctrl.zoom(1.5);
        }
        assert!(ctrl.distance() >= MIN_DISTANCE);
    }

    #[test]
    fn fit_to_positions_centers_on_centroid() {
        let mut ctrl = controller();
        ctrl.fit_to_positions(&[Vec3::new(-2.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0)]);
        assert_eq!(ctrl.focus_point(), Vec3::ZERO);
        assert!(ctrl.distance() > 2.0);
    }

    #[test]
    fn zero_sized_resize_is_ignored() {
        let mut ctrl = controller();
        let aspect = ctrl.camera().aspect;
        ctrl.resize(0, 600);
        assert_eq!(ctrl.camera().aspect, aspect);
        ctrl.resize(800, 800);
        assert_eq!(ctrl.camera().aspect, 1.0);
    }
}
