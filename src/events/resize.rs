use crate::background::Background;
use crate::dom::{self, EventListener, ListenerOptions};
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::prelude::*;
use web_sys as web;

pub fn wire_resize(
    window: &web::Window,
    bg: Weak<RefCell<Background>>,
) -> Result<EventListener, JsValue> {
    let window_for_size = window.clone();
    EventListener::new(window, "resize", ListenerOptions::PASSIVE, move |_| {
        let Some(bg) = bg.upgrade() else {
            return;
        };
        let viewport = dom::current_viewport(&window_for_size);
        log::debug!(
            "[resize] {}x{} @{}",
            viewport.css_width,
            viewport.css_height,
            viewport.pixel_ratio
        );
        bg.borrow_mut().frame.resize(viewport);
    })
}
