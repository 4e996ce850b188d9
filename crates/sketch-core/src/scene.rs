//! Frame orchestrator owning every piece of per-frame state.
//!
//! The host calls [`Scene::press`] on pointer-down and [`Scene::advance`]
//! once per display refresh, then replays the returned [`Frame`].

use crate::ambient::{gradient_rows, DriftField, StreakPool, WaveHorizon};
use crate::burst::{random_glyph, BurstEmitter};
use crate::capture::CaptureFrame;
use crate::color::Rgba;
use crate::config::SketchConfig;
use crate::constants::{HALO_ALPHA, HALO_DIAMETER, HOLD_SPAWN_EVERY};
use crate::draw::{DrawCommand, Frame};
use crate::error::Result;
use crate::halftone::HalftoneGrid;
use crate::noise::ValueNoise;
use crate::steering::Follower;
use glam::Vec2;
use rand::prelude::*;

/// Pointer state sampled by the host for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub pointer: Vec2,
    pub pointer_down: bool,
}

pub struct Scene {
    pub config: SketchConfig,
    pub follower: Follower,
    pub particles: DriftField,
    pub streaks: StreakPool,
    pub wave: WaveHorizon,
    pub bursts: BurstEmitter,
    noise: ValueNoise,
    rng: StdRng,
    frame_count: u64,
}

impl Scene {
    /// Build a scene from a validated config and a seed for every random draw.
    pub fn new(config: SketchConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let canvas = config.canvas;
        let particles = DriftField::new(config.particle_count, canvas, &mut rng);
        let streaks = StreakPool::new(config.streak_count, canvas, &mut rng);
        let follower = Follower::new(canvas * 0.5, config.steering.clone(), random_glyph(&mut rng));
        // Separate stream so noise stays stable when pool sizes change
        let noise = ValueNoise::new(&mut StdRng::seed_from_u64(seed ^ 0x9E37_79B9_7F4A_7C15));
        log::debug!(
            "[scene] canvas={}x{} particles={} streaks={} seed={}",
            canvas.x,
            canvas.y,
            particles.particles.len(),
            streaks.streaks.len(),
            seed
        );
        Ok(Self {
            config,
            follower,
            particles,
            streaks,
            wave: WaveHorizon::default(),
            bursts: BurstEmitter::default(),
            noise,
            rng,
            frame_count: 0,
        })
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Pointer pressed: spawn a burst and give the follower a new glyph.
    pub fn press(&mut self, pointer: Vec2) {
        self.bursts.spawn(pointer, self.config.canvas, &mut self.rng);
        self.follower.glyph = random_glyph(&mut self.rng);
        log::debug!(
            "[press] at ({:.1},{:.1}) follower={}",
            pointer.x,
            pointer.y,
            self.follower.glyph
        );
    }

    /// Produce one frame.
    ///
    /// The frame counter always advances. If the capture is missing or not
    /// ready, nothing else changes and the frame is empty.
    pub fn advance(&mut self, input: &FrameInput, capture: Option<&CaptureFrame>) -> Frame {
        self.frame_count += 1;
        let index = self.frame_count;
        let capture = match capture {
            Some(c) if c.is_ready() => c,
            _ => return Frame::skipped(index),
        };

        let canvas = self.config.canvas;
        let mut out = Vec::new();

        gradient_rows(canvas, &mut out);
        self.streaks.draw_and_advance(canvas, &mut self.rng, &mut out);
        self.wave.draw_and_advance(canvas, &mut out);
        self.particles.draw_and_advance(canvas, &mut self.rng, &mut out);

        let grid = HalftoneGrid::new(&self.config.halftone, canvas, capture, self.config.mirror);
        let dots = grid.sweep(capture, index, &self.noise, &mut self.rng);
        out.extend(dots.iter().map(|d| d.command()));

        if input.pointer_down && index % HOLD_SPAWN_EVERY == 0 {
            self.bursts.spawn(input.pointer, canvas, &mut self.rng);
        }
        self.bursts.draw_and_advance(&mut out);

        self.follower.arrive(input.pointer);
        self.follower.update();
        out.push(self.follower.draw());

        out.push(DrawCommand::Circle {
            center: input.pointer,
            diameter: HALO_DIAMETER,
            color: Rgba::WHITE.with_alpha(HALO_ALPHA),
        });

        Frame {
            index,
            skipped: false,
            commands: out,
            dots: dots.len(),
            bursts: self.bursts.len(),
        }
    }
}
