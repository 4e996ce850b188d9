//! Scene configuration with defaults drawn from [`crate::constants`].

use crate::constants::*;
use crate::error::{Result, SketchError};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub struct HalftoneParams {
    /// Canvas height is divided into this many line spacings.
    pub rows: f32,
    pub step_px: f32,
    /// Brightness window mapped onto contrast 1 → 0.
    pub contrast_window: [f32; 2],
    pub exponent: f32,
    pub min_diameter: f32,
    pub max_diameter_ratio: f32,
    pub jitter_ratio: f32,
    pub lift_px: f32,
    pub wave_amplitude_px: f32,
    pub wave_x_freq: f32,
    pub wave_frame_freq: f32,
}

impl Default for HalftoneParams {
    fn default() -> Self {
        Self {
            rows: HALFTONE_ROWS,
            step_px: HALFTONE_STEP_PX,
            contrast_window: CONTRAST_WINDOW,
            exponent: CONTRAST_EXPONENT,
            min_diameter: DOT_MIN_DIAMETER,
            max_diameter_ratio: DOT_MAX_DIAMETER_RATIO,
            jitter_ratio: DOT_JITTER_RATIO,
            lift_px: DOT_LIFT_PX,
            wave_amplitude_px: DOT_WAVE_AMPLITUDE_PX,
            wave_x_freq: DOT_WAVE_X_FREQ,
            wave_frame_freq: DOT_WAVE_FRAME_FREQ,
        }
    }
}

impl HalftoneParams {
    /// Reject values that would stall the grid sweep or yield NaN geometry.
    pub fn validate(&self) -> Result<()> {
        let positive = [("rows", self.rows), ("step_px", self.step_px)];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SketchError::Halftone { field, value });
            }
        }
        let finite = [
            ("exponent", self.exponent),
            ("min_diameter", self.min_diameter),
            ("max_diameter_ratio", self.max_diameter_ratio),
            ("jitter_ratio", self.jitter_ratio),
            ("lift_px", self.lift_px),
            ("wave_amplitude_px", self.wave_amplitude_px),
            ("wave_x_freq", self.wave_x_freq),
            ("wave_frame_freq", self.wave_frame_freq),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(SketchError::Halftone { field, value });
            }
        }
        let [lo, hi] = self.contrast_window;
        if !(lo.is_finite() && hi.is_finite() && lo < hi) {
            return Err(SketchError::ContrastWindow { lo, hi });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SteeringParams {
    pub max_speed: f32,
    pub max_force: f32,
    pub arrive_radius: f32,
}

impl Default for SteeringParams {
    fn default() -> Self {
        Self {
            max_speed: FOLLOWER_MAX_SPEED,
            max_force: FOLLOWER_MAX_FORCE,
            arrive_radius: FOLLOWER_ARRIVE_RADIUS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SketchConfig {
    pub canvas: Vec2,
    pub halftone: HalftoneParams,
    pub steering: SteeringParams,
    pub particle_count: usize,
    pub streak_count: usize,
    /// Flip the capture horizontally (selfie view).
    pub mirror: bool,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas: Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT),
            halftone: HalftoneParams::default(),
            steering: SteeringParams::default(),
            particle_count: PARTICLE_COUNT,
            streak_count: STREAK_COUNT,
            mirror: false,
        }
    }
}

impl SketchConfig {
    pub fn with_canvas(width: f32, height: f32) -> Result<Self> {
        let config = Self {
            canvas: Vec2::new(width, height),
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let Vec2 { x: width, y: height } = self.canvas;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(SketchError::CanvasSize { width, height });
        }
        self.halftone.validate()
    }
}
