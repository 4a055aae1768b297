//! Hover pose of a photo and the easing that moves it between targets.
//!
//! A pose is the animated part of a surface transform: scale in the image
//! plane, rotation about the vertical axis and a depth offset. Surfaces never
//! jump between poses; [`step_pose`] moves every property a fraction of the way
//! toward its target each frame.

use crate::config::PoseParams;
use crate::constants::POSE_SNAP_EPSILON;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub scale: Vec2,
    pub rotation: f32,
    pub depth: f32,
}

impl Pose {
    pub const RESTING: Pose = Pose {
        scale: Vec2::ONE,
        rotation: 0.0,
        depth: 0.0,
    };

    pub fn active(params: &PoseParams) -> Self {
        Self {
            scale: params.active_scale,
            rotation: params.active_rotation,
            depth: params.active_depth,
        }
    }

    /// Largest per-property distance to `other`.
    pub fn max_delta(&self, other: &Pose) -> f32 {
        (self.scale - other.scale)
            .abs()
            .max_element()
            .max((self.rotation - other.rotation).abs())
            .max((self.depth - other.depth).abs())
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::RESTING
    }
}

/// Which pose a surface is heading for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SurfaceState {
    #[default]
    Resting,
    Active,
}

impl SurfaceState {
    pub fn from_hit(hit: bool) -> Self {
        if hit {
            Self::Active
        } else {
            Self::Resting
        }
    }

    pub fn target(self, params: &PoseParams) -> Pose {
        match self {
            Self::Resting => Pose::RESTING,
            Self::Active => Pose::active(params),
        }
    }
}

#[inline]
fn approach(current: f32, target: f32, alpha: f32) -> f32 {
    let next = current + (target - current) * alpha;
    if (target - next).abs() <= POSE_SNAP_EPSILON {
        target
    } else {
        next
    }
}

/// Ease `current` toward `target` over `dt_sec`.
///
/// Exponential approach with time constant `params.tau_sec`: never overshoots,
/// independent of how often the same target is requested, and lands exactly on
/// the target once within [`POSE_SNAP_EPSILON`].
pub fn step_pose(current: Pose, target: Pose, dt_sec: f32, params: &PoseParams) -> Pose {
    let alpha = 1.0 - (-dt_sec.max(0.0) / params.tau_sec).exp();
    Pose {
        scale: Vec2::new(
            approach(current.scale.x, target.scale.x, alpha),
            approach(current.scale.y, target.scale.y, alpha),
        ),
        rotation: approach(current.rotation, target.rotation, alpha),
        depth: approach(current.depth, target.depth, alpha),
    }
}
