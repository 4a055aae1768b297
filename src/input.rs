use glam::Vec2;
use web_sys as web;

// WheelEvent.deltaMode values
pub const DELTA_MODE_PIXEL: u32 = 0;
pub const DELTA_MODE_LINE: u32 = 1;
pub const DELTA_MODE_PAGE: u32 = 2;

/// Convert a wheel delta to pixels regardless of the reporting mode.
#[inline]
pub fn wheel_delta_px(delta: f64, delta_mode: u32, line_px: f32, page_px: f32) -> f32 {
    let delta = delta as f32;
    match delta_mode {
        DELTA_MODE_LINE => delta * line_px,
        DELTA_MODE_PAGE => delta * page_px,
        _ => delta,
    }
}

// ---------------- DOM helpers ----------------
#[inline]
pub fn pointer_canvas_css(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

#[inline]
pub fn canvas_css_size(canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(rect.width() as f32, rect.height() as f32)
}
