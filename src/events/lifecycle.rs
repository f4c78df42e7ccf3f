use crate::background::Background;
use crate::core::LifecycleEvent;
use crate::dom::{EventListener, ListenerOptions};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use web_sys as web;

pub fn wire_visibility(
    document: &web::Document,
    bg: Weak<RefCell<Background>>,
) -> Result<EventListener, JsValue> {
    let doc = document.clone();
    EventListener::new(document, "visibilitychange", ListenerOptions::default(), move |_| {
        let event = if doc.hidden() {
            LifecycleEvent::Hidden
        } else {
            LifecycleEvent::Visible
        };
        Background::dispatch(&bg, event);
    })
}

pub fn wire_focus_blur(
    window: &web::Window,
    bg: Weak<RefCell<Background>>,
) -> Result<[EventListener; 2], JsValue> {
    let bg_blur = bg.clone();
    let blur = EventListener::new(window, "blur", ListenerOptions::default(), move |_| {
        Background::dispatch(&bg_blur, LifecycleEvent::Blur);
    })?;
    let focus = EventListener::new(window, "focus", ListenerOptions::default(), move |_| {
        Background::dispatch(&bg, LifecycleEvent::Focus);
    })?;
    Ok([blur, focus])
}

fn persisted(ev: &web::Event) -> bool {
    ev.dyn_ref::<web::PageTransitionEvent>()
        .map(|ev| ev.persisted())
        .unwrap_or(false)
}

/// `pagehide` handler holding the only strong reference to the runtime. A
/// hide into the back/forward cache pauses; a final hide tears down and gives
/// the reference up.
pub fn wire_teardown(
    window: &web::Window,
    bg: Rc<RefCell<Background>>,
) -> Result<EventListener, JsValue> {
    let mut owner = Some(bg);
    EventListener::new(window, "pagehide", ListenerOptions::default(), move |ev| {
        match LifecycleEvent::page_hide(persisted(&ev)) {
            LifecycleEvent::Teardown => {
                if let Some(bg) = owner.take() {
                    Background::teardown(&bg);
                }
            }
            event => {
                if let Some(bg) = owner.as_ref() {
                    Background::dispatch(&Rc::downgrade(bg), event);
                }
            }
        }
    })
}

/// `pageshow` after a back/forward cache restore resumes the loop.
pub fn wire_pageshow(
    window: &web::Window,
    bg: Weak<RefCell<Background>>,
) -> Result<EventListener, JsValue> {
    EventListener::new(window, "pageshow", ListenerOptions::default(), move |ev| {
        if let Some(event) = LifecycleEvent::page_show(persisted(&ev)) {
            Background::dispatch(&bg, event);
        }
    })
}
