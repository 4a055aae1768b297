use crate::constants::*;
use crate::error::ConfigError;
use glam::Vec2;

/// How scroll velocity decay relates to wall-clock time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DecayMode {
    /// One decay multiply per frame callback; pan speed follows the refresh rate.
    PerFrame,
    /// Decay by `d^(dt / frame_interval_sec)` and scale accumulation by the same
    /// ratio, so a gesture pans the same distance at any refresh rate.
    TimeScaled { frame_interval_sec: f32 },
}

#[derive(Clone, Debug)]
pub struct ScrollParams {
    pub damping: f32,
    pub decay: f32,
    pub decay_mode: DecayMode,
}

impl Default for ScrollParams {
    fn default() -> Self {
        Self {
            damping: SCROLL_DAMPING,
            decay: SCROLL_DECAY,
            decay_mode: DecayMode::PerFrame,
        }
    }
}

/// Target values for the ACTIVE pose plus the easing time constant.
#[derive(Clone, Debug)]
pub struct PoseParams {
    pub active_scale: Vec2,
    pub active_rotation: f32,
    pub active_depth: f32,
    pub tau_sec: f32,
}

impl Default for PoseParams {
    fn default() -> Self {
        Self {
            active_scale: Vec2::from_array(ACTIVE_SCALE),
            active_rotation: ACTIVE_ROTATION_Y,
            active_depth: ACTIVE_DEPTH,
            tau_sec: POSE_TAU_SEC,
        }
    }
}

#[derive(Clone, Debug)]
pub struct CameraParams {
    pub fov_y_deg: f32,
    pub eye_z: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            fov_y_deg: CAMERA_FOV_Y_DEG,
            eye_z: CAMERA_Z,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

#[derive(Clone, Debug)]
pub struct LayoutParams {
    pub count: usize,
    pub spacing_y: f32,
    pub x_base: f32,
    pub x_jitter: f32,
    pub plane_size: Vec2,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            count: SURFACE_COUNT,
            spacing_y: SURFACE_SPACING_Y,
            x_base: SURFACE_X_BASE,
            x_jitter: SURFACE_X_JITTER,
            plane_size: Vec2::new(PLANE_WIDTH, PLANE_HEIGHT),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct GalleryConfig {
    pub layout: LayoutParams,
    pub scroll: ScrollParams,
    pub pose: PoseParams,
    pub camera: CameraParams,
}

impl GalleryConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let decay = self.scroll.decay;
        if !(decay > 0.0 && decay < 1.0) {
            return Err(ConfigError::DecayOutOfRange(decay));
        }
        if let DecayMode::TimeScaled { frame_interval_sec } = self.scroll.decay_mode {
            if !(frame_interval_sec > 0.0) {
                return Err(ConfigError::FrameInterval(frame_interval_sec));
            }
        }
        if self.layout.count == 0 {
            return Err(ConfigError::NoSurfaces);
        }
        let size = self.layout.plane_size;
        if !(size.x > 0.0 && size.y > 0.0) {
            return Err(ConfigError::PlaneSize {
                width: size.x,
                height: size.y,
            });
        }
        if !(self.pose.tau_sec > 0.0) {
            return Err(ConfigError::PoseTau(self.pose.tau_sec));
        }
        let cam = &self.camera;
        if !(cam.fov_y_deg > 0.0 && cam.fov_y_deg < 180.0 && cam.znear > 0.0 && cam.zfar > cam.znear)
        {
            return Err(ConfigError::Frustum {
                fov_y_deg: cam.fov_y_deg,
                znear: cam.znear,
                zfar: cam.zfar,
            });
        }
        Ok(())
    }
}
