// Web front-end tuning constants.

// DOM
pub const CANVAS_ID: &str = "gallery-canvas";
pub const PHOTO_DIR: &str = "photographs";
pub const PHOTO_EXT: &str = "avif";

// Canvas backing store never exceeds this device pixel ratio
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Wheel deltas reported in lines are converted at this many pixels per line
pub const WHEEL_LINE_PX: f32 = 16.0;

// Frame timing
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp after tab switches / stalls

// Renderer
pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 0.0]; // transparent, page shows through
pub const PLACEHOLDER_RGBA: [u8; 4] = [0, 0, 0, 255];
pub const MAX_PHOTO_EDGE_PX: u32 = 2048; // larger photos are downscaled on decode

#[inline]
pub fn photo_url(index: usize) -> String {
    format!("{PHOTO_DIR}/{index}.{PHOTO_EXT}")
}
