//! Halftone grid: webcam brightness → pointillist dots.

use crate::capture::{CaptureFrame, CaptureMapping};
use crate::color::{Rgba, LINE_COLORS};
use crate::config::HalftoneParams;
use crate::constants::NOISE_TIME_DIVISOR;
use crate::draw::DrawCommand;
use crate::math::map_range;
use crate::noise::ValueNoise;
use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;

/// One grid cell's derived values. Recomputed every sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotSample {
    pub grid: Vec2,
    pub brightness: f32,
    pub contrast: f32,
    pub powered: f32,
    pub diameter: f32,
    pub center: Vec2,
    pub color: Rgba,
}

impl DotSample {
    pub fn command(&self) -> DrawCommand {
        DrawCommand::Circle {
            center: self.center,
            diameter: self.diameter,
            color: self.color,
        }
    }
}

/// Contrast in \[0, 1\] for a brightness value, before the power curve.
pub fn contrast(brightness: f32, params: &HalftoneParams) -> f32 {
    let [lo, hi] = params.contrast_window;
    map_range(brightness, lo, hi, 1.0, 0.0).clamp(0.0, 1.0)
}

/// Dot diameter before jitter, in `[min_diameter, max_ratio * line_height]`.
pub fn base_diameter(powered: f32, line_height: f32, params: &HalftoneParams) -> f32 {
    map_range(
        powered,
        1.0,
        0.0,
        line_height * params.max_diameter_ratio,
        params.min_diameter,
    )
}

pub struct HalftoneGrid<'a> {
    pub params: &'a HalftoneParams,
    pub canvas: Vec2,
    pub mapping: CaptureMapping,
}

impl<'a> HalftoneGrid<'a> {
    pub fn new(params: &'a HalftoneParams, canvas: Vec2, frame: &CaptureFrame, mirror: bool) -> Self {
        Self {
            params,
            canvas,
            mapping: CaptureMapping::for_frame(canvas, frame, mirror),
        }
    }

    pub fn line_height(&self) -> f32 {
        self.canvas.y / self.params.rows
    }

    /// Row y-coordinates: `lh, 2lh, …` while inside `canvas_h - lh`.
    pub fn rows(&self) -> Vec<f32> {
        let lh = self.line_height();
        let mut out = Vec::new();
        if !(lh.is_finite() && lh > 0.0) {
            return out;
        }
        let mut y = lh;
        while y <= self.canvas.y - lh {
            out.push(y);
            y += lh;
        }
        out
    }

    pub fn columns(&self) -> Vec<f32> {
        let step = self.params.step_px;
        let mut out = Vec::new();
        if !(step.is_finite() && step > 0.0) || !self.canvas.x.is_finite() {
            return out;
        }
        let mut x = 0.0;
        while x < self.canvas.x {
            out.push(x);
            x += step;
        }
        out
    }

    /// Evaluate one cell. `rng` picks the palette colour.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        frame: &CaptureFrame,
        x: f32,
        y: f32,
        frame_index: u64,
        noise: &ValueNoise,
        rng: &mut R,
    ) -> DotSample {
        let p = self.params;
        let lh = self.line_height();
        let t = frame_index as f32;

        let src = self.mapping.to_capture(Vec2::new(x, y));
        let brightness = frame.brightness(src.x, src.y);
        let contrast = contrast(brightness, p);
        let powered = contrast.powf(p.exponent);

        let jitter = (noise.sample(x + t / NOISE_TIME_DIVISOR, y) - 0.5) * lh * p.jitter_ratio;
        let diameter = (base_diameter(powered, lh, p) + jitter).max(0.0);

        let wave = (x * p.wave_x_freq + t * p.wave_frame_freq).sin() * p.wave_amplitude_px;
        let center = Vec2::new(x + p.step_px / 2.0, y + p.lift_px * powered + wave);
        let color = *LINE_COLORS.choose(rng).unwrap_or(&LINE_COLORS[0]);

        DotSample {
            grid: Vec2::new(x, y),
            brightness,
            contrast,
            powered,
            diameter,
            center,
            color,
        }
    }

    /// Full sweep over the grid, row by row.
    pub fn sweep<R: Rng + ?Sized>(
        &self,
        frame: &CaptureFrame,
        frame_index: u64,
        noise: &ValueNoise,
        rng: &mut R,
    ) -> Vec<DotSample> {
        let columns = self.columns();
        let rows = self.rows();
        let mut dots = Vec::with_capacity(rows.len() * columns.len());
        for y in rows {
            for &x in &columns {
                dots.push(self.sample(frame, x, y, frame_index, noise, rng));
            }
        }
        dots
    }
}
