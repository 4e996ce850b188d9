//! Platform-free scene logic for the sea webcam sketch.
//!
//! Nothing in this crate touches a browser API: the web front-end feeds in
//! capture frames and pointer state and replays the returned draw commands.

pub mod ambient;
pub mod burst;
pub mod capture;
pub mod color;
pub mod config;
pub mod constants;
pub mod draw;
pub mod error;
pub mod halftone;
pub mod math;
pub mod noise;
pub mod scene;
pub mod steering;
pub mod title;

pub use capture::{CaptureFrame, CaptureMapping};
pub use color::Rgba;
pub use config::{HalftoneParams, SketchConfig, SteeringParams};
pub use draw::{DrawCommand, Frame};
pub use error::{Result, SketchError};
pub use scene::{FrameInput, Scene};
pub use steering::Follower;
pub use title::{TextTarget, TitleTemplate};
