// Photo loading.
//
// The browser does the decoding: each photo is loaded into an
// `HtmlImageElement`, awaited with `decode()`, then rasterized through a
// scratch 2D canvas to get RGBA8 pixels for the GPU upload. Loads run as
// independent futures; finished images are queued for the frame driver.

use crate::constants::{photo_url, MAX_PHOTO_EDGE_PX};
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("{url}: decode failed: {reason}")]
    Decode { url: String, reason: String },
    #[error("{url}: image has zero size")]
    Empty { url: String },
    #[error("scratch canvas: {0}")]
    Canvas(String),
}

pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Images waiting to be uploaded, keyed by surface index.
pub type PendingUploads = Rc<RefCell<Vec<(usize, DecodedImage)>>>;

fn canvas_err(e: impl std::fmt::Debug) -> AssetError {
    AssetError::Canvas(format!("{:?}", e))
}

/// Fit `(w, h)` inside `max_edge` keeping the aspect ratio.
#[inline]
pub fn fit_within(w: u32, h: u32, max_edge: u32) -> (u32, u32) {
    let longest = w.max(h);
    if longest <= max_edge {
        return (w, h);
    }
    let s = max_edge as f64 / longest as f64;
    (
        ((w as f64 * s).round() as u32).max(1),
        ((h as f64 * s).round() as u32).max(1),
    )
}

pub async fn load_photo(document: &web::Document, url: &str) -> Result<DecodedImage, AssetError> {
    let img = web::HtmlImageElement::new().map_err(canvas_err)?;
    img.set_src(url);
    let decoded: js_sys::Promise = img.decode();
    JsFuture::from(decoded)
        .await
        .map_err(|e| AssetError::Decode {
            url: url.to_string(),
            reason: format!("{:?}", e),
        })?;
    let (nw, nh) = (img.natural_width(), img.natural_height());
    if nw == 0 || nh == 0 {
        return Err(AssetError::Empty {
            url: url.to_string(),
        });
    }
    let (w, h) = fit_within(nw, nh, MAX_PHOTO_EDGE_PX);

    let scratch: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(canvas_err)?
        .dyn_into()
        .map_err(canvas_err)?;
    scratch.set_width(w);
    scratch.set_height(h);
    let ctx: web::CanvasRenderingContext2d = scratch
        .get_context("2d")
        .map_err(canvas_err)?
        .ok_or_else(|| AssetError::Canvas("no 2d context".into()))?
        .dyn_into()
        .map_err(canvas_err)?;
    ctx.draw_image_with_html_image_element_and_dw_and_dh(&img, 0.0, 0.0, w as f64, h as f64)
        .map_err(canvas_err)?;
    let data = ctx
        .get_image_data(0.0, 0.0, w as f64, h as f64)
        .map_err(canvas_err)?;

    Ok(DecodedImage {
        width: w,
        height: h,
        rgba: data.data().0,
    })
}

/// Start loading `photographs/0..count`. Failures are logged and the surface
/// keeps its placeholder texture.
pub fn spawn_photo_loads(document: &web::Document, count: usize, pending: PendingUploads) {
    for index in 0..count {
        let document = document.clone();
        let pending = pending.clone();
        spawn_local(async move {
            let url = photo_url(index);
            match load_photo(&document, &url).await {
                Ok(image) => {
                    log::info!("[assets] {} loaded ({}x{})", url, image.width, image.height);
                    pending.borrow_mut().push((index, image));
                }
                Err(e) => log::warn!("[assets] {}", e),
            }
        });
    }
}
