/// Browser host constants: element ids, logical resolution and capture size.
///
/// Scene tuning lives in `sketch_core::constants`; these only describe how the
/// page is wired.
pub const CANVAS_ID: &str = "sketch-canvas";

// Logical drawing resolution; the backing store is this times devicePixelRatio
pub const LOGICAL_WIDTH: f64 = 800.0;
pub const LOGICAL_HEIGHT: f64 = 600.0;

// Requested webcam resolution
pub const CAPTURE_WIDTH: u32 = sketch_core::constants::CAPTURE_WIDTH;
pub const CAPTURE_HEIGHT: u32 = sketch_core::constants::CAPTURE_HEIGHT;

// Debug builds surface per-frame stats and press logs
pub const LOG_LEVEL: log::Level = if cfg!(debug_assertions) {
    log::Level::Debug
} else {
    log::Level::Info
};

// Emit frame stats every N frames at debug level
pub const STATS_EVERY_FRAMES: u64 = 300;

pub const FONT_FAMILY: &str = "sans-serif";
