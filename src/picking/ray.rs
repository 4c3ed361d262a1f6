//! World-space rays and their intersection with pick shapes.

use glam::{Mat4, UVec2, Vec2, Vec3, Vec4};

use crate::parts::{Aabb, MeshShape};

/// Half-line `origin + t * dir` for `t >= 0`. `dir` is unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point on the near plane.
    pub origin: Vec3,
    /// Unit direction.
    pub dir: Vec3,
}

impl Ray {
    /// Ray under a pixel (origin top-left, y down), unprojected through the
    /// inverse of `view_proj`.
    ///
    /// `None` for an empty viewport or a singular matrix.
    #[must_use]
    pub fn from_screen(screen: Vec2, viewport: UVec2, view_proj: Mat4) -> Option<Self> {
        if viewport.x == 0 || viewport.y == 0 {
            return None;
        }
        let size = viewport.as_vec2();

        // Convert to NDC (-1 to 1), y flipped for screen coordinates
        let ndc_x = (screen.x / size.x) * 2.0 - 1.0;
        let ndc_y = 1.0 - (screen.y / size.y) * 2.0;

        let inv_view_proj = view_proj.inverse();

        // Near and far planes in a 0..1 depth range
        let world_near = inv_view_proj * Vec4::new(ndc_x, ndc_y, 0.0, 1.0);
        let world_far = inv_view_proj * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        if world_near.w.abs() <= f32::EPSILON || world_far.w.abs() <= f32::EPSILON {
            return None;
        }

        let origin = world_near.truncate() / world_near.w;
        let far = world_far.truncate() / world_far.w;
        let dir = (far - origin).try_normalize()?;
        origin.is_finite().then_some(Self { origin, dir })
    }

    /// Point at parameter `t`.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Nearest non-negative hit distance against a sphere. A ray starting
/// inside the sphere hits its far side.
#[must_use]
pub fn intersect_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let a = ray.dir.dot(ray.dir);
    let b = 2.0 * oc.dot(ray.dir);
    let c = oc.dot(oc) - radius * radius;
    let discriminant = b * b - 4.0 * a * c;

    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let near = (-b - sqrt_d) / (2.0 * a);
    if near >= 0.0 {
        return Some(near);
    }
    let far = (-b + sqrt_d) / (2.0 * a);
    (far >= 0.0).then_some(far)
}

/// Nearest non-negative hit distance against an axis-aligned box (slab
/// method).
#[must_use]
pub fn intersect_aabb(ray: &Ray, aabb: &Aabb) -> Option<f32> {
    let inv = ray.dir.recip();
    let t0 = (aabb.min - ray.origin) * inv;
    let t1 = (aabb.max - ray.origin) * inv;

    // NaN from 0 * inf (ray on a slab plane) is dropped by min/max.
    let t_enter = t0.min(t1).max_element();
    let t_exit = t0.max(t1).min_element();

    if t_exit < 0.0 || t_enter > t_exit {
        return None;
    }
    Some(t_enter.max(0.0))
}

/// Hit distance against either pick shape.
#[must_use]
pub fn intersect_shape(ray: &Ray, shape: &MeshShape) -> Option<f32> {
    match *shape {
        MeshShape::Sphere { center, radius } => intersect_sphere(ray, center, radius),
        MeshShape::Box { min, max } => intersect_aabb(ray, &Aabb::new(min, max)),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::camera::Camera;

    fn down_z() -> Ray {
        Ray {
            origin: Vec3::new(0.0, 0.0, 10.0),
            dir: -Vec3::Z,
        }
    }

    #[test]
    fn sphere_hit_front_and_inside() {
        let t = intersect_sphere(&down_z(), Vec3::ZERO, 1.0).unwrap();
        assert_relative_eq!(t, 9.0, epsilon = 1e-4);

        let inside = Ray {
            origin: Vec3::ZERO,
            dir: Vec3::X,
        };
        let t = intersect_sphere(&inside, Vec3::ZERO, 2.0).unwrap();
        assert_relative_eq!(t, 2.0, epsilon = 1e-4);
    }

    #[test]
    fn sphere_behind_ray_misses() {
        let away = Ray {
            origin: Vec3::new(0.0, 0.0, 10.0),
            dir: Vec3::Z,
        };
        assert!(intersect_sphere(&away, Vec3::ZERO, 1.0).is_none());
        assert!(intersect_sphere(&down_z(), Vec3::new(5.0, 0.0, 0.0), 1.0).is_none());
    }

    #[test]
    fn aabb_slab_hit_and_miss() {
        let aabb = Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        let t = intersect_aabb(&down_z(), &aabb).unwrap();
        assert_relative_eq!(t, 9.0, epsilon = 1e-4);

        let offset = Ray {
            origin: Vec3::new(3.0, 0.0, 10.0),
            dir: -Vec3::Z,
        };
        assert!(intersect_aabb(&offset, &aabb).is_none());

        let inside = Ray {
            origin: Vec3::ZERO,
            dir: Vec3::Y,
        };
        assert_eq!(intersect_aabb(&inside, &aabb), Some(0.0));
    }

    #[test]
    fn screen_center_ray_points_at_target() {
        let camera = Camera {
            eye: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy: 60.0,
            znear: 0.1,
            zfar: 100.0,
        };
        let viewport = UVec2::new(800, 800);
        let ray = Ray::from_screen(Vec2::new(400.0, 400.0), viewport, camera.build_matrix())
            .unwrap();
        assert_relative_eq!(ray.dir.z, -1.0, epsilon = 1e-4);
        assert_relative_eq!(ray.at(9.9).z, 0.0, epsilon = 1e-2);

        assert!(Ray::from_screen(Vec2::ZERO, UVec2::ZERO, camera.build_matrix()).is_none());
    }
}
