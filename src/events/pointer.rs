use crate::background::Background;
use crate::dom::{EventListener, ListenerOptions};
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer position feeds the parallax target; smoothing is left to the frame.
pub fn wire_pointermove(
    window: &web::Window,
    bg: Weak<RefCell<Background>>,
) -> Result<EventListener, JsValue> {
    EventListener::new(window, "pointermove", ListenerOptions::PASSIVE, move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let Some(bg) = bg.upgrade() else {
            return;
        };
        bg.borrow_mut()
            .frame
            .on_pointer_move(ev.client_x() as f64, ev.client_y() as f64);
    })
}
