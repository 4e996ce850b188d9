//! Cursor follower using the "arrive" steering behaviour.
//!
//! Outside the arrival radius the desired velocity points at the target at
//! full speed; inside it the desired speed falls linearly to zero at the
//! target, so the follower decelerates instead of overshooting.

use crate::color::Rgba;
use crate::config::SteeringParams;
use crate::constants::{FOLLOWER_GLYPH_LIFT_PX, FOLLOWER_GLYPH_SIZE};
use crate::draw::DrawCommand;
use crate::math::map_range;
use glam::Vec2;

#[derive(Clone, Debug)]
pub struct Follower {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub params: SteeringParams,
    pub glyph: &'static str,
}

impl Follower {
    pub fn new(position: Vec2, params: SteeringParams, glyph: &'static str) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            params,
            glyph,
        }
    }

    /// Desired speed for a given distance to the target.
    pub fn desired_speed(&self, distance: f32) -> f32 {
        let SteeringParams {
            max_speed,
            arrive_radius,
            ..
        } = self.params;
        if distance < arrive_radius {
            map_range(distance, 0.0, arrive_radius, 0.0, max_speed)
        } else {
            max_speed
        }
    }

    /// Steering force toward `target`, limited to `max_force`.
    pub fn steer(&self, target: Vec2) -> Vec2 {
        let offset = target - self.position;
        let desired = offset.normalize_or_zero() * self.desired_speed(offset.length());
        (desired - self.velocity).clamp_length_max(self.params.max_force)
    }

    pub fn arrive(&mut self, target: Vec2) {
        let force = self.steer(target);
        self.apply_force(force);
    }

    pub fn apply_force(&mut self, force: Vec2) {
        self.acceleration += force;
    }

    /// One explicit Euler step; acceleration is consumed.
    pub fn update(&mut self) {
        self.velocity = (self.velocity + self.acceleration).clamp_length_max(self.params.max_speed);
        self.position += self.velocity;
        self.acceleration = Vec2::ZERO;
    }

    pub fn draw(&self) -> DrawCommand {
        DrawCommand::Text {
            glyph: self.glyph,
            position: self.position - Vec2::new(0.0, FOLLOWER_GLYPH_LIFT_PX),
            size: FOLLOWER_GLYPH_SIZE,
            color: Rgba::WHITE,
        }
    }
}
