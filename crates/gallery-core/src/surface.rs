use crate::pose::{Pose, SurfaceState};
use glam::{Mat4, Quat, Vec2, Vec3};

/// One photo plane in the gallery.
#[derive(Clone, Debug)]
pub struct Surface {
    pub index: usize,
    /// Fixed x/y; the z coordinate is the pose depth.
    pub base: Vec2,
    pub pose: Pose,
    pub state: SurfaceState,
}

impl Surface {
    pub fn new(index: usize, base: Vec2) -> Self {
        Self {
            index,
            base,
            pose: Pose::RESTING,
            state: SurfaceState::Resting,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.base.extend(self.pose.depth)
    }

    pub fn is_active(&self) -> bool {
        self.state == SurfaceState::Active
    }

    /// Maps the unit quad to world space: plane size and pose scale, then the
    /// y rotation, then translation.
    pub fn model_matrix(&self, plane_size: Vec2) -> Mat4 {
        let size = plane_size * self.pose.scale;
        Mat4::from_scale_rotation_translation(
            Vec3::new(size.x, size.y, 1.0),
            Quat::from_rotation_y(self.pose.rotation),
            self.position(),
        )
    }
}
