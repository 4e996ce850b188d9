use crate::constants::{LOGICAL_HEIGHT, LOGICAL_WIDTH};
use crate::layout;
use glam::Vec2;
use sketch_core::FrameInput;
use web_sys as web;

#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
}

impl MouseState {
    pub fn frame_input(&self) -> FrameInput {
        FrameInput {
            pointer: Vec2::new(self.x, self.y),
            pointer_down: self.down,
        }
    }
}

/// Pointer position in logical canvas units (not backing-store pixels).
#[inline]
pub fn pointer_logical(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let (x, y) = layout::client_to_logical(
        ev.client_x() as f64 - rect.left(),
        ev.client_y() as f64 - rect.top(),
        rect.width(),
        rect.height(),
        LOGICAL_WIDTH,
        LOGICAL_HEIGHT,
    );
    Vec2::new(x, y)
}
