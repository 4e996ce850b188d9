use crate::capture::WebcamCapture;
use crate::constants::STATS_EVERY_FRAMES;
use crate::input;
use crate::render::CanvasRenderer;
use instant::Instant;
use sketch_core::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub mouse: Rc<RefCell<input::MouseState>>,
    /// Filled in once the webcam stream opens; stays `None` if it never does.
    pub capture: Rc<RefCell<Option<WebcamCapture>>>,
    pub renderer: CanvasRenderer,

    pub last_instant: Instant,
    pub frame_time_accum: f32,
    pub skipped_frames: u64,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        self.frame_time_accum += (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let snapshot = self.capture.borrow().as_ref().and_then(|c| c.snapshot());
        let frame_input = self.mouse.borrow().frame_input();
        let frame = self
            .scene
            .borrow_mut()
            .advance(&frame_input, snapshot.as_ref());
        if frame.skipped {
            self.skipped_frames += 1;
        }
        self.renderer.render(&frame);

        if frame.index % STATS_EVERY_FRAMES == 0 {
            let avg_ms = self.frame_time_accum / STATS_EVERY_FRAMES as f32 * 1000.0;
            log::debug!(
                "[frame] #{} avg={:.2}ms dots={} bursts={} skipped={}",
                frame.index,
                avg_ms,
                frame.dots,
                frame.bursts,
                self.skipped_frames
            );
            self.frame_time_accum = 0.0;
            self.skipped_frames = 0;
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
