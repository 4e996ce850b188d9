//! Short-lived emoji text particles spawned by pointer presses.

use crate::color::{alpha_to_u8, Rgba};
use crate::constants::*;
use crate::draw::DrawCommand;
use crate::math::random_in;
use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct Burst {
    pub position: Vec2,
    pub glyph: &'static str,
    pub size: f32,
    pub tint: [u8; 3],
    pub alpha: f32,
    pub life: i32,
}

impl Burst {
    pub fn is_expired(&self) -> bool {
        self.life < 0 || self.alpha <= 0.0
    }

    pub fn draw(&self) -> DrawCommand {
        let [r, g, b] = self.tint;
        DrawCommand::Text {
            glyph: self.glyph,
            position: self.position,
            size: self.size,
            color: Rgba::rgb(r, g, b).with_alpha(alpha_to_u8(self.alpha)),
        }
    }

    pub fn update(&mut self) {
        self.position.y -= BURST_RISE_PX;
        self.alpha -= BURST_FADE_PER_FRAME;
        self.life -= 1;
    }
}

/// Uniform pick from the sea emoji set.
pub fn random_glyph<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    SEA_EMOJIS.choose(rng).copied().unwrap_or(SEA_EMOJIS[0])
}

#[derive(Clone, Debug, Default)]
pub struct BurstEmitter {
    pub bursts: Vec<Burst>,
}

impl BurstEmitter {
    pub fn spawn<R: Rng + ?Sized>(&mut self, at: Vec2, canvas: Vec2, rng: &mut R) {
        let position = at.clamp(Vec2::ZERO, canvas);
        let glyph = random_glyph(rng);
        let size = random_in(rng, BURST_SIZE_RANGE);
        let mut tint = [0u8; 3];
        for c in &mut tint {
            *c = random_in(rng, BURST_TINT_RANGE) as u8;
        }
        self.bursts.push(Burst {
            position,
            glyph,
            size,
            tint,
            alpha: 255.0,
            life: BURST_LIFE_FRAMES,
        });
    }

    /// Draw every live burst, age it, and drop the expired ones.
    ///
    /// Iterates back to front so removal never skips a neighbour.
    pub fn draw_and_advance(&mut self, out: &mut Vec<DrawCommand>) {
        for i in (0..self.bursts.len()).rev() {
            let burst = &mut self.bursts[i];
            out.push(burst.draw());
            burst.update();
            if burst.is_expired() {
                self.bursts.remove(i);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.bursts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bursts.is_empty()
    }
}
