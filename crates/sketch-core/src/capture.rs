//! Webcam frame snapshots and the canvas → capture coordinate mapping.
//!
//! A [`CaptureFrame`] is an immutable RGBA snapshot of the most recent video
//! frame. The host replaces it every tick; nothing here mutates pixels.

use crate::error::{Result, SketchError};
use glam::Vec2;

#[derive(Clone, Debug)]
pub struct CaptureFrame {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl CaptureFrame {
    /// Wrap an RGBA buffer. The buffer length must be exactly `w * h * 4`.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(SketchError::FrameSize {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Frame filled with a single opaque colour.
    pub fn uniform(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let px = [rgb[0], rgb[1], rgb[2], 255];
        let pixels = px.repeat(width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Placeholder for a device that has not delivered a frame yet.
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            pixels: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Zero-sized frames come from a video element that is still warming up.
    pub fn is_ready(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    fn texels(&self) -> &[[u8; 4]] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Inverted brightness in \[0, 1\]: black reads 1.0, white reads 0.0.
    ///
    /// Coordinates are floored and clamped into the frame, so any input is
    /// valid. A frame that is not ready reads as 0.0.
    pub fn brightness(&self, x: f32, y: f32) -> f32 {
        if !self.is_ready() {
            return 0.0;
        }
        let xi = clamp_index(x, self.width);
        let yi = clamp_index(y, self.height);
        let [r, g, b, _] = self.texels()[yi * self.width as usize + xi];
        let avg = (r as f32 + g as f32 + b as f32) / 3.0;
        1.0 - avg / 255.0
    }
}

#[inline]
fn clamp_index(v: f32, len: u32) -> usize {
    let max = len.saturating_sub(1) as f32;
    // NaN falls through `max(0.0)` to 0
    v.floor().max(0.0).min(max) as usize
}

/// Uniform-scale mapping from canvas space into capture space.
///
/// The scale ratio is the larger of the two axis ratios so the capture frame
/// always covers the canvas without non-uniform stretching.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaptureMapping {
    pub canvas: Vec2,
    pub capture: Vec2,
    pub ratio: f32,
    pub mirror: bool,
}

impl CaptureMapping {
    pub fn new(canvas: Vec2, capture_width: u32, capture_height: u32, mirror: bool) -> Self {
        let capture = Vec2::new(capture_width as f32, capture_height as f32);
        let ratio = (canvas.x / capture.x).max(canvas.y / capture.y);
        Self {
            canvas,
            capture,
            ratio,
            mirror,
        }
    }

    pub fn for_frame(canvas: Vec2, frame: &CaptureFrame, mirror: bool) -> Self {
        Self::new(canvas, frame.width(), frame.height(), mirror)
    }

    /// Map a canvas point to the capture point it samples.
    pub fn to_capture(&self, p: Vec2) -> Vec2 {
        let half_canvas = self.canvas * 0.5;
        let half_capture = self.capture * 0.5;
        let dx = (half_canvas.x - p.x) / self.ratio;
        let cx = if self.mirror {
            half_capture.x + dx
        } else {
            half_capture.x - dx
        };
        let cy = half_capture.y - (half_canvas.y - p.y) / self.ratio;
        Vec2::new(cx, cy)
    }
}
