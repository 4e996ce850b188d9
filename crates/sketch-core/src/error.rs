use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SketchError {
    #[error("capture buffer holds {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    FrameSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("canvas size must be positive, got {width}x{height}")]
    CanvasSize { width: f32, height: f32 },
    #[error("halftone {field} out of range: {value}")]
    Halftone { field: &'static str, value: f32 },
    #[error("contrast window must be finite and increasing, got [{lo}, {hi}]")]
    ContrastWindow { lo: f32, hi: f32 },
}

pub type Result<T> = std::result::Result<T, SketchError>;
