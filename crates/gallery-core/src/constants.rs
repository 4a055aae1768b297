// Reference tuning for the gallery; the parameter structs in `config.rs` default to these.

// Scene layout
pub const SURFACE_COUNT: usize = 4;
pub const SURFACE_SPACING_Y: f32 = 1.8; // vertical distance between consecutive photos
pub const SURFACE_X_BASE: f32 = 0.3; // x = base + random [0, 1)
pub const SURFACE_X_JITTER: f32 = 1.0;
pub const PLANE_WIDTH: f32 = 1.0;
pub const PLANE_HEIGHT: f32 = 1.3;

// Scroll integrator
pub const SCROLL_DAMPING: f32 = -0.0009; // velocity gained per wheel pixel (negated)
pub const SCROLL_DECAY: f32 = 0.9; // velocity multiplier per frame
pub const NOMINAL_FRAME_INTERVAL_SEC: f32 = 1.0 / 60.0;

// Hover pose targets
pub const ACTIVE_SCALE: [f32; 2] = [1.3, 1.5];
pub const ACTIVE_ROTATION_Y: f32 = -0.5; // radians
pub const ACTIVE_DEPTH: f32 = -0.9;

// Pose easing
pub const POSE_TAU_SEC: f32 = 0.10; // ~99% settled after 0.46s
pub const POSE_SNAP_EPSILON: f32 = 1e-4;

// Camera
pub const CAMERA_FOV_Y_DEG: f32 = 75.0;
pub const CAMERA_Z: f32 = 2.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
