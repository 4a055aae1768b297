use crate::constants::WHEEL_LINE_PX;
use crate::input;
use gallery_core::{InputEvent, InteractionState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_wheel(state: Rc<RefCell<InteractionState>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let mut st = state.borrow_mut();
        let page_px = st.viewport.height;
        let delta_y = input::wheel_delta_px(ev.delta_y(), ev.delta_mode(), WHEEL_LINE_PX, page_px);
        if delta_y.is_finite() {
            st.apply(InputEvent::Wheel { delta_y });
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
