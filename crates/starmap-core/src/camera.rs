//! Camera rig and screen/world conversions.
//!
//! These types avoid platform APIs; the web frontend feeds them the canvas'
//! CSS size and pointer coordinates relative to the canvas bounding rect.

use glam::{Mat4, Vec2, Vec3, Vec4};

/// Size of the render surface in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }

    /// Convert a position relative to the surface's top-left corner to NDC.
    pub fn to_ndc(&self, px: Vec2) -> Vec2 {
        let w = self.width.max(1.0);
        let h = self.height.max(1.0);
        Vec2::new((2.0 * px.x / w) - 1.0, 1.0 - (2.0 * px.y / h))
    }

    pub fn from_ndc(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.width,
            (1.0 - ndc.y) * 0.5 * self.height,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

/// Camera looking straight down -Z; scrolling moves it along Y.
#[derive(Clone, Debug)]
pub struct CameraRig {
    pub y: f32,
    pub z: f32,
    pub fovy_radians: f32,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl CameraRig {
    pub fn eye(&self) -> Vec3 {
        Vec3::new(0.0, self.y, self.z)
    }

    pub fn target(&self) -> Vec3 {
        Vec3::new(0.0, self.y, self.z - 1.0)
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target(), Vec3::Y)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space ray from the eye through a point given in NDC.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_projection().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        let origin = self.eye();
        Ray {
            origin,
            dir: (p1 - origin).normalize(),
        }
    }

    /// NDC of a world point, or `None` when it sits behind the camera.
    pub fn project(&self, world: Vec3) -> Option<Vec2> {
        let clip = self.view_projection() * world.extend(1.0);
        if clip.w <= f32::EPSILON {
            return None;
        }
        Some(Vec2::new(clip.x / clip.w, clip.y / clip.w))
    }

    /// Half the visible world height on the plane `z = plane_z`.
    pub fn half_visible_height(&self, plane_z: f32) -> f32 {
        let dist = (self.z - plane_z).max(0.0);
        dist * (self.fovy_radians * 0.5).tan()
    }

    /// World units covered by one CSS pixel on the plane `z = plane_z`.
    pub fn world_per_pixel(&self, plane_z: f32, viewport: &Viewport) -> f32 {
        if viewport.height <= 0.0 {
            return 0.0;
        }
        2.0 * self.half_visible_height(plane_z) / viewport.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rig() -> CameraRig {
        CameraRig {
            y: 10.0,
            z: 50.0,
            fovy_radians: 60f32.to_radians(),
            aspect: 1.5,
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    #[test]
    fn centre_ray_points_down_negative_z() {
        let r = rig().ray_from_ndc(Vec2::ZERO);
        assert_eq!(r.origin, Vec3::new(0.0, 10.0, 50.0));
        assert!((r.dir - Vec3::NEG_Z).length() < 1e-4);
    }

    #[test]
    fn projection_round_trips_through_ray() {
        let cam = rig();
        let world = Vec3::new(5.0, 14.0, 0.0);
        let ndc = cam.project(world).unwrap();
        let ray = cam.ray_from_ndc(ndc);
        let t = (world.z - ray.origin.z) / ray.dir.z;
        let hit = ray.origin + ray.dir * t;
        assert!((hit - world).length() < 1e-2);
    }

    #[test]
    fn points_behind_camera_do_not_project() {
        assert!(rig().project(Vec3::new(0.0, 10.0, 80.0)).is_none());
    }

    #[test]
    fn world_per_pixel_matches_visible_height() {
        let cam = rig();
        let vp = Viewport::new(900.0, 600.0);
        let wpp = cam.world_per_pixel(0.0, &vp);
        let expected = 2.0 * 50.0 * (30f32.to_radians()).tan() / 600.0;
        assert!((wpp - expected).abs() < 1e-6);
        assert_eq!(cam.world_per_pixel(0.0, &Viewport::new(10.0, 0.0)), 0.0);
    }

    #[test]
    fn ndc_conversion_is_centred() {
        let vp = Viewport::new(800.0, 400.0);
        assert_eq!(vp.to_ndc(Vec2::new(400.0, 200.0)), Vec2::ZERO);
        assert_eq!(vp.to_ndc(Vec2::new(0.0, 0.0)), Vec2::new(-1.0, 1.0));
        assert_eq!(vp.from_ndc(Vec2::new(1.0, -1.0)), Vec2::new(800.0, 400.0));
    }
}
