use thiserror::Error;

/// Reasons a [`GalleryConfig`](crate::GalleryConfig) is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("scroll decay must be in (0, 1), got {0}")]
    DecayOutOfRange(f32),
    #[error("frame interval must be positive, got {0}")]
    FrameInterval(f32),
    #[error("gallery needs at least one surface")]
    NoSurfaces,
    #[error("plane dimensions must be positive, got {width}x{height}")]
    PlaneSize { width: f32, height: f32 },
    #[error("pose time constant must be positive, got {0}")]
    PoseTau(f32),
    #[error("camera frustum is degenerate (fov {fov_y_deg} deg, near {znear}, far {zfar})")]
    Frustum {
        fov_y_deg: f32,
        znear: f32,
        zfar: f32,
    },
}
