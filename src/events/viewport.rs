use crate::dom;
use crate::input;
use gallery_core::{InputEvent, InteractionState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the canvas backing store and the camera aspect in step with the window.
/// The renderer picks up the new backing size on its next frame.
pub fn wire_resize(canvas: &web::HtmlCanvasElement, state: Rc<RefCell<InteractionState>>) {
    let canvas = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas);
        let size = input::canvas_css_size(&canvas);
        state.borrow_mut().apply(InputEvent::Resize {
            width: size.x,
            height: size.y,
        });
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
