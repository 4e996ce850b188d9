use crate::constants::{LOGICAL_HEIGHT, LOGICAL_WIDTH};
use crate::layout;
use sketch_core::{TextTarget, TitleTemplate};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Size the backing store for the device pixel ratio and fit the canvas into
/// the viewport with the "contain" policy. Returns the device pixel ratio.
pub fn fit_canvas(canvas: &web::HtmlCanvasElement) -> f64 {
    let Some(w) = web::window() else {
        return 1.0;
    };
    let dpr = w.device_pixel_ratio();
    let (bw, bh) = layout::backing_size(LOGICAL_WIDTH, LOGICAL_HEIGHT, dpr);
    canvas.set_width(bw);
    canvas.set_height(bh);

    let vw = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(LOGICAL_WIDTH);
    let vh = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(LOGICAL_HEIGHT);
    let fit = layout::contain_fit(LOGICAL_WIDTH, LOGICAL_HEIGHT, vw, vh);
    let style = canvas.style();
    _ = style.set_property("position", "absolute");
    _ = style.set_property("width", &format!("{}px", fit.css_width));
    _ = style.set_property("height", &format!("{}px", fit.css_height));
    _ = style.set_property("left", &format!("{}px", fit.left));
    _ = style.set_property("top", &format!("{}px", fit.top));
    dpr
}

pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    fit_canvas(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        fit_canvas(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// [`TextTarget`] over a live DOM document.
pub struct DomText<'a> {
    pub document: &'a web::Document,
}

impl TextTarget for DomText<'_> {
    fn set_document_title(&mut self, title: &str) {
        self.document.set_title(title);
    }

    fn set_text_all(&mut self, selector: &str, text: &str) {
        let Ok(nodes) = self.document.query_selector_all(selector) else {
            log::warn!("[title] invalid selector {:?}", selector);
            return;
        };
        for i in 0..nodes.length() {
            if let Some(node) = nodes.get(i) {
                node.set_text_content(Some(text));
            }
        }
    }
}

/// Apply the title bindings once the document has been parsed.
pub fn apply_title_when_ready(document: &web::Document, template: TitleTemplate) {
    if !document_is_loading(document) {
        template.apply(&mut DomText { document });
        return;
    }
    let doc = document.clone();
    let closure = wasm_bindgen::closure::Closure::once(move || {
        template.apply(&mut DomText { document: &doc });
        log::info!("[title] applied {:?}", template.document_title());
    });
    _ = document
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn document_is_loading(document: &web::Document) -> bool {
    js_sys::Reflect::get(document, &"readyState".into())
        .ok()
        .and_then(|v| v.as_string())
        .map(|s| s == "loading")
        .unwrap_or(false)
}
