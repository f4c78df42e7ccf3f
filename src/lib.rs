#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, SEED_ATTRIBUTE};
use crate::core::{Scene, SceneConfig};
use crate::error::StartupError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod background;
mod constants;
mod core;
mod dom;
mod error;
mod events;
mod frame;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web starting");

    spawn_local(async move {
        // Missing capabilities leave the page untouched; nothing is surfaced.
        if let Err(e) = init().await {
            log::debug!("background inactive: {}", e);
        }
    });
    Ok(())
}

async fn init() -> Result<(), StartupError> {
    let window = web::window().ok_or(StartupError::NoWindow)?;
    let document = window.document().ok_or(StartupError::NoDocument)?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or(StartupError::MissingCanvas(CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| StartupError::NotACanvas(CANVAS_ID))?;
    if !dom::has_webgpu(&window) {
        return Err(StartupError::NoWebGpu);
    }

    let config =
        SceneConfig::default().with_seed_attr(canvas.get_attribute(SEED_ATTRIBUTE).as_deref());
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let scene = Scene::generate(&config, &mut rng);

    // Size the backing store before the surface is created from it
    let viewport = dom::current_viewport(&window);
    dom::sync_canvas_backing_size(&canvas, &viewport);

    let gpu = render::GpuState::new(&canvas, &scene)
        .await
        .map_err(StartupError::Gpu)?;

    background::Background::mount(&window, &document, canvas, scene, viewport, gpu)?;
    Ok(())
}
