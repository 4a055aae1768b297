use crate::input;
use gallery_core::{InputEvent, InteractionState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer over the whole window; positions are taken relative to the
/// canvas so NDC stays consistent with what is drawn.
pub fn wire_pointermove(canvas: &web::HtmlCanvasElement, state: Rc<RefCell<InteractionState>>) {
    let canvas = canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_css(&ev, &canvas);
        state
            .borrow_mut()
            .apply(InputEvent::PointerMove { x: pos.x, y: pos.y });
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
