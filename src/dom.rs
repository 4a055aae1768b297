use crate::constants::MAX_PIXEL_RATIO;
use web_sys as web;

/// Device pixel ratio, capped so high-density screens don't quadruple fill cost.
#[inline]
pub fn pixel_ratio() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0)
        .min(MAX_PIXEL_RATIO)
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    let dpr = pixel_ratio();
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() * dpr) as u32;
    let h_px = (rect.height() * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
}
