use crate::assets::PendingUploads;
use crate::constants::MAX_FRAME_DT_SEC;
use crate::render;
use gallery_core::InteractionState;
use glam::Mat4;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub state: Rc<RefCell<InteractionState>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub pending: PendingUploads,
    pub last_instant: Instant,
    pub hovered: Option<usize>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant)
            .as_secs_f32()
            .min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        // scroll -> ray query -> poses, then snapshot what the renderer needs
        let (view_proj, models, nearest) = {
            let mut st = self.state.borrow_mut();
            let report = st.frame(dt_sec);
            let plane = st.config.layout.plane_size;
            let models: Vec<Mat4> = st.surfaces.iter().map(|s| s.model_matrix(plane)).collect();
            (
                st.camera.view_proj(),
                models,
                report.hits.first().map(|h| h.index),
            )
        };
        self.update_cursor(nearest);

        if let Some(g) = &mut self.gpu {
            for (index, image) in self.pending.borrow_mut().drain(..) {
                g.upload_photo(index, &image);
            }
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            match g.render(view_proj, &models) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::warn!("surface lost; reconfiguring");
                    g.reconfigure();
                }
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }

    fn update_cursor(&mut self, nearest: Option<usize>) {
        if nearest == self.hovered {
            return;
        }
        self.hovered = nearest;
        let cursor = if nearest.is_some() { "pointer" } else { "" };
        _ = self.canvas.style().set_property("cursor", cursor);
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    photo_count: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, photo_count).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
