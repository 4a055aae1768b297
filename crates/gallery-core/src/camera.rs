use crate::config::CameraParams;
use crate::picking::Ray;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Right-handed perspective camera looking down -Z with no rotation; only its
/// vertical position changes while the gallery runs.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(params: &CameraParams, aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, params.eye_z),
            aspect,
            fovy_radians: params.fov_y_deg.to_radians(),
            znear: params.znear,
            zfar: params.zfar,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.eye, Vec3::NEG_Z, Vec3::Y)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space ray through a normalized device coordinate.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        Ray {
            origin: self.eye,
            dir: (p1 - self.eye).normalize(),
        }
    }

    /// Project a world-space point to normalized device coordinates.
    pub fn project(&self, world: Vec3) -> Vec2 {
        let clip = self.view_proj() * world.extend(1.0);
        Vec2::new(clip.x / clip.w, clip.y / clip.w)
    }
}
