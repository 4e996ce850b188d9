//! Frame output: an ordered list of 2D drawing commands.
//!
//! The scene never touches a drawing surface. Each tick produces a [`Frame`]
//! that the host replays onto its canvas in order.

use crate::color::Rgba;
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Stroked straight segment.
    Line {
        from: Vec2,
        to: Vec2,
        color: Rgba,
        weight: f32,
    },
    /// Open stroked polyline.
    Polyline {
        points: Vec<Vec2>,
        color: Rgba,
        weight: f32,
    },
    /// Filled disc; `diameter` follows the canvas "circle" convention.
    Circle {
        center: Vec2,
        diameter: f32,
        color: Rgba,
    },
    /// Centred text glyph.
    Text {
        glyph: &'static str,
        position: Vec2,
        size: f32,
        color: Rgba,
    },
}

#[derive(Clone, Debug, Default)]
pub struct Frame {
    /// Frame counter value this frame was produced for (1-based).
    pub index: u64,
    /// True when the capture was not ready and the whole draw was skipped.
    pub skipped: bool,
    pub commands: Vec<DrawCommand>,
    pub dots: usize,
    pub bursts: usize,
}

impl Frame {
    pub fn skipped(index: u64) -> Self {
        Self {
            index,
            skipped: true,
            ..Self::default()
        }
    }

    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Rgba)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Circle {
                center,
                diameter,
                color,
            } => Some((*center, *diameter, *color)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&'static str, Vec2, f32, Rgba)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text {
                glyph,
                position,
                size,
                color,
            } => Some((*glyph, *position, *size, *color)),
            _ => None,
        })
    }
}
