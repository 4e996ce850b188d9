#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, LOGICAL_HEIGHT, LOGICAL_WIDTH, LOG_LEVEL};
use instant::Instant;
use sketch_core::{Scene, SketchConfig, TitleTemplate};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod capture;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod layout;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(LOG_LEVEL).ok();
    log::info!("sea-sketch starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    dom::apply_title_when_ready(&document, TitleTemplate::default());

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::wire_canvas_resize(&canvas);
    let renderer = render::CanvasRenderer::new(&canvas, LOGICAL_WIDTH, LOGICAL_HEIGHT)?;

    let config = SketchConfig::with_canvas(LOGICAL_WIDTH as f32, LOGICAL_HEIGHT as f32)?;
    let seed: u64 = rand::random();
    let scene = Rc::new(RefCell::new(Scene::new(config, seed)?));
    let mouse_state = Rc::new(RefCell::new(input::MouseState::default()));

    // Camera permission may take a while; frames are skipped until it opens
    let capture = Rc::new(RefCell::new(None::<capture::WebcamCapture>));
    {
        let capture = capture.clone();
        let document = document.clone();
        spawn_local(async move {
            match capture::WebcamCapture::open(&document).await {
                Ok(c) => *capture.borrow_mut() = Some(c),
                Err(e) => log::error!("webcam unavailable: {:?}", e),
            }
        });
    }

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        mouse_state: mouse_state.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        mouse: mouse_state,
        capture,
        renderer,
        last_instant: Instant::now(),
        frame_time_accum: 0.0,
        skipped_frames: 0,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
