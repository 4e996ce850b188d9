//! Decorative background layers: sky gradient, shooting streaks, wave
//! horizon and drifting particles.

use crate::color::{Rgba, SKY_BOTTOM, SKY_TOP};
use crate::constants::*;
use crate::draw::DrawCommand;
use crate::math::random_in;
use glam::Vec2;
use rand::Rng;

/// One horizontal line per pixel row, top colour to bottom colour.
pub fn gradient_rows(canvas: Vec2, out: &mut Vec<DrawCommand>) {
    let rows = canvas.y.max(0.0) as u32;
    out.reserve(rows as usize);
    for row in 0..rows {
        let y = row as f32;
        out.push(DrawCommand::Line {
            from: Vec2::new(0.0, y),
            to: Vec2::new(canvas.x, y),
            color: SKY_TOP.lerp(SKY_BOTTOM, y / canvas.y),
            weight: 1.0,
        });
    }
}

// ---------------- Wave horizon ----------------

#[derive(Clone, Debug, Default)]
pub struct WaveHorizon {
    pub phase: f32,
}

impl WaveHorizon {
    pub fn points(&self, canvas: Vec2) -> Vec<Vec2> {
        let baseline = canvas.y * WAVE_BASELINE_RATIO;
        let mut pts = Vec::new();
        let mut x = 0.0;
        while x <= canvas.x {
            pts.push(Vec2::new(
                x,
                baseline + (x * WAVE_FREQUENCY + self.phase).sin() * WAVE_AMPLITUDE_PX,
            ));
            x += WAVE_STEP_PX;
        }
        pts
    }

    /// Emit the polyline for the current phase, then drift the phase.
    pub fn draw_and_advance(&mut self, canvas: Vec2, out: &mut Vec<DrawCommand>) {
        out.push(DrawCommand::Polyline {
            points: self.points(canvas),
            color: Rgba::WHITE.with_alpha(WAVE_ALPHA),
            weight: 1.0,
        });
        self.phase += WAVE_PHASE_STEP;
    }
}

// ---------------- Drift particles ----------------

#[derive(Clone, Debug, PartialEq)]
pub struct DriftParticle {
    pub position: Vec2,
    pub size: f32,
    pub speed: f32,
    pub alpha: f32,
}

impl DriftParticle {
    pub fn spawn<R: Rng + ?Sized>(canvas: Vec2, rng: &mut R) -> Self {
        Self {
            position: Vec2::new(
                random_in(rng, [0.0, canvas.x]),
                random_in(rng, [0.0, canvas.y]),
            ),
            size: random_in(rng, PARTICLE_SIZE_RANGE),
            speed: random_in(rng, PARTICLE_SPEED_RANGE),
            alpha: random_in(rng, PARTICLE_ALPHA_RANGE),
        }
    }

    /// Fall by `speed`; past the bottom edge wrap to the top at a fresh x.
    pub fn update<R: Rng + ?Sized>(&mut self, canvas: Vec2, rng: &mut R) {
        self.position.y += self.speed;
        if self.position.y > canvas.y {
            self.position.y = 0.0;
            self.position.x = random_in(rng, [0.0, canvas.x]);
        }
    }

    pub fn draw(&self) -> DrawCommand {
        DrawCommand::Circle {
            center: self.position,
            diameter: self.size,
            color: Rgba::white_alpha(self.alpha),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct DriftField {
    pub particles: Vec<DriftParticle>,
}

impl DriftField {
    pub fn new<R: Rng + ?Sized>(count: usize, canvas: Vec2, rng: &mut R) -> Self {
        Self {
            particles: (0..count).map(|_| DriftParticle::spawn(canvas, rng)).collect(),
        }
    }

    pub fn draw_and_advance<R: Rng + ?Sized>(
        &mut self,
        canvas: Vec2,
        rng: &mut R,
        out: &mut Vec<DrawCommand>,
    ) {
        for p in &mut self.particles {
            out.push(p.draw());
            p.update(canvas, rng);
        }
    }
}

// ---------------- Shooting streaks ----------------

#[derive(Clone, Debug, PartialEq)]
pub struct Streak {
    pub position: Vec2,
    /// Unit direction of travel.
    pub direction: Vec2,
    pub speed: f32,
    pub length: f32,
    pub alpha: f32,
}

impl Streak {
    pub fn spawn<R: Rng + ?Sized>(canvas: Vec2, rng: &mut R) -> Self {
        let angle = random_in(rng, STREAK_ANGLE_RANGE);
        Self {
            position: Vec2::new(
                random_in(rng, [0.0, canvas.x]),
                random_in(rng, [-canvas.y / 2.0, 0.0]),
            ),
            direction: Vec2::from_angle(angle),
            speed: random_in(rng, STREAK_SPEED_RANGE),
            length: random_in(rng, STREAK_LENGTH_RANGE),
            alpha: 255.0,
        }
    }

    pub fn angle(&self) -> f32 {
        self.direction.y.atan2(self.direction.x)
    }

    pub fn draw(&self) -> DrawCommand {
        DrawCommand::Line {
            from: self.position,
            to: self.position - self.direction * self.length,
            color: Rgba::white_alpha(self.alpha),
            weight: STREAK_WEIGHT,
        }
    }

    /// Move and fade. Returns false once the streak has burnt out.
    pub fn update(&mut self) -> bool {
        self.position += self.direction * self.speed;
        self.alpha -= STREAK_FADE_PER_FRAME;
        self.alpha > 0.0
    }
}

#[derive(Clone, Debug, Default)]
pub struct StreakPool {
    pub streaks: Vec<Streak>,
}

impl StreakPool {
    pub fn new<R: Rng + ?Sized>(count: usize, canvas: Vec2, rng: &mut R) -> Self {
        Self {
            streaks: (0..count).map(|_| Streak::spawn(canvas, rng)).collect(),
        }
    }

    pub fn draw_and_advance<R: Rng + ?Sized>(
        &mut self,
        canvas: Vec2,
        rng: &mut R,
        out: &mut Vec<DrawCommand>,
    ) {
        for s in &mut self.streaks {
            out.push(s.draw());
            if !s.update() {
                *s = Streak::spawn(canvas, rng);
                log::trace!("[streak] respawn angle={:.3}", s.angle());
            }
        }
    }
}
