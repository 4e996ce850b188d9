use crate::constants::{CAPTURE_HEIGHT, CAPTURE_WIDTH};
use anyhow::anyhow;
use sketch_core::CaptureFrame;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

// HTMLMediaElement.HAVE_CURRENT_DATA
const HAVE_CURRENT_DATA: u16 = 2;

/// Live webcam stream plus a small offscreen canvas used to read its pixels.
pub struct WebcamCapture {
    video: web::HtmlVideoElement,
    ctx: web::CanvasRenderingContext2d,
    width: u32,
    height: u32,
}

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

fn video_constraints(width: u32, height: u32) -> Result<web::MediaStreamConstraints, JsValue> {
    let video = js_sys::Object::new();
    js_sys::Reflect::set(&video, &"width".into(), &JsValue::from(width))?;
    js_sys::Reflect::set(&video, &"height".into(), &JsValue::from(height))?;
    let constraints = js_sys::Object::new();
    js_sys::Reflect::set(&constraints, &"video".into(), &video)?;
    js_sys::Reflect::set(&constraints, &"audio".into(), &JsValue::FALSE)?;
    Ok(constraints.unchecked_into())
}

impl WebcamCapture {
    /// Request the camera at the fixed capture resolution and start playback.
    pub async fn open(document: &web::Document) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let devices = window.navigator().media_devices().map_err(js_err)?;
        let constraints = video_constraints(CAPTURE_WIDTH, CAPTURE_HEIGHT).map_err(js_err)?;
        let promise = devices
            .get_user_media_with_constraints(&constraints)
            .map_err(js_err)?;
        let stream: web::MediaStream = JsFuture::from(promise)
            .await
            .map_err(js_err)?
            .dyn_into()
            .map_err(js_err)?;

        let video: web::HtmlVideoElement = document
            .create_element("video")
            .map_err(js_err)?
            .dyn_into()
            .map_err(|e| anyhow!("{:?}", e))?;
        video.set_muted(true);
        video.set_autoplay(true);
        _ = video.set_attribute("playsinline", "");
        _ = video.set_attribute("style", "display:none");
        video.set_src_object(Some(&stream));
        if let Some(body) = document.body() {
            _ = body.append_child(&video);
        }
        if let Ok(p) = video.play() {
            _ = JsFuture::from(p).await;
        }

        let canvas: web::HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(js_err)?
            .dyn_into()
            .map_err(|e| anyhow!("{:?}", e))?;
        canvas.set_width(CAPTURE_WIDTH);
        canvas.set_height(CAPTURE_HEIGHT);
        let ctx: web::CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or_else(|| anyhow!("no 2d context for capture canvas"))?
            .dyn_into()
            .map_err(|e| anyhow!("{:?}", e))?;

        log::info!("[capture] webcam stream open {}x{}", CAPTURE_WIDTH, CAPTURE_HEIGHT);
        Ok(Self {
            video,
            ctx,
            width: CAPTURE_WIDTH,
            height: CAPTURE_HEIGHT,
        })
    }

    pub fn is_ready(&self) -> bool {
        self.video.video_width() > 0
            && self.video.video_height() > 0
            && self.video.ready_state() >= HAVE_CURRENT_DATA
    }

    /// Copy the current video frame. `None` while the stream is warming up.
    pub fn snapshot(&self) -> Option<CaptureFrame> {
        if !self.is_ready() {
            return None;
        }
        let (w, h) = (self.width as f64, self.height as f64);
        self.ctx
            .draw_image_with_html_video_element_and_dw_and_dh(&self.video, 0.0, 0.0, w, h)
            .ok()?;
        let data = self.ctx.get_image_data(0.0, 0.0, w, h).ok()?;
        match CaptureFrame::new(data.width(), data.height(), data.data().0) {
            Ok(frame) => Some(frame),
            Err(e) => {
                log::warn!("[capture] {}", e);
                None
            }
        }
    }
}
