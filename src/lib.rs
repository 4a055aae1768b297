#![cfg(target_arch = "wasm32")]
use gallery_core::{build_surfaces, GalleryConfig, InteractionState, Viewport};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gallery-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);
    let css = input::canvas_css_size(&canvas);

    // Scene: the builder hands the surfaces straight to the interaction state
    let config = GalleryConfig::default();
    let mut rng = StdRng::from_entropy();
    let surfaces = build_surfaces(&config.layout, &mut rng);
    let photo_count = surfaces.len();
    let state = InteractionState::new(
        config,
        surfaces,
        Viewport {
            width: css.x,
            height: css.y,
        },
    )?;
    let state = Rc::new(RefCell::new(state));

    events::wire_resize(&canvas, state.clone());
    events::wire_wheel(state.clone());
    events::wire_pointermove(&canvas, state.clone());

    let pending: assets::PendingUploads = Rc::new(RefCell::new(Vec::new()));
    assets::spawn_photo_loads(&document, photo_count, pending.clone());

    // Without WebGPU the interaction loop still runs; nothing is drawn
    let gpu = frame::init_gpu(&canvas, photo_count).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        state,
        canvas,
        gpu,
        pending,
        last_instant: Instant::now(),
        hovered: None,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
