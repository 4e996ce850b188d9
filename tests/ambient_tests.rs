// Host-side tests for the decorative background layers.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sketch_core::ambient::{gradient_rows, DriftField, DriftParticle, Streak, StreakPool, WaveHorizon};
use sketch_core::color::{SKY_BOTTOM, SKY_TOP};
use sketch_core::constants::*;
use sketch_core::DrawCommand;

const CANVAS: Vec2 = Vec2::new(800.0, 600.0);

#[test]
fn gradient_has_one_line_per_row_from_top_to_bottom_colour() {
    let mut out = Vec::new();
    gradient_rows(CANVAS, &mut out);
    assert_eq!(out.len(), 600);
    match (&out[0], &out[599]) {
        (
            DrawCommand::Line {
                from: f0, color: c0, ..
            },
            DrawCommand::Line {
                to: t1, color: c1, ..
            },
        ) => {
            assert_eq!(*c0, SKY_TOP);
            assert_eq!(f0.y, 0.0);
            assert_eq!(t1.x, 800.0);
            // Last row is one step short of the bottom colour
            assert_eq!(*c1, SKY_TOP.lerp(SKY_BOTTOM, 599.0 / 600.0));
        }
        other => panic!("unexpected commands {other:?}"),
    }
}

#[test]
fn wave_points_step_across_width_and_phase_drifts() {
    let mut wave = WaveHorizon::default();
    let pts = wave.points(CANVAS);
    assert_eq!(pts.len(), 81);
    assert_eq!(pts[0].x, 0.0);
    assert_eq!(pts[80].x, 800.0);
    for p in &pts {
        assert!((p.y - 540.0).abs() <= WAVE_AMPLITUDE_PX + 1e-4);
    }
    let mut out = Vec::new();
    wave.draw_and_advance(CANVAS, &mut out);
    wave.draw_and_advance(CANVAS, &mut out);
    assert!((wave.phase - 2.0 * WAVE_PHASE_STEP).abs() < 1e-6);
    assert_eq!(out.len(), 2);
}

#[test]
fn particles_spawn_inside_configured_ranges() {
    let mut rng = StdRng::seed_from_u64(4);
    let field = DriftField::new(PARTICLE_COUNT, CANVAS, &mut rng);
    assert_eq!(field.particles.len(), 100);
    for p in &field.particles {
        assert!(p.position.x >= 0.0 && p.position.x < 800.0);
        assert!(p.position.y >= 0.0 && p.position.y < 600.0);
        assert!(p.size >= 1.0 && p.size < 3.0);
        assert!(p.speed >= 0.2 && p.speed < 0.5);
        assert!(p.alpha >= 80.0 && p.alpha < 180.0);
    }
}

#[test]
fn particle_past_bottom_wraps_to_top_with_new_x() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut p = DriftParticle {
        position: Vec2::new(123.0, 599.9),
        size: 2.0,
        speed: 0.4,
        alpha: 100.0,
    };
    p.update(CANVAS, &mut rng);
    assert_eq!(p.position.y, 0.0);
    assert!(p.position.x >= 0.0 && p.position.x < 800.0);
    assert_ne!(p.position.x, 123.0);
}

#[test]
fn particle_inside_canvas_only_falls() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut p = DriftParticle {
        position: Vec2::new(10.0, 100.0),
        size: 2.0,
        speed: 0.25,
        alpha: 100.0,
    };
    p.update(CANVAS, &mut rng);
    assert_eq!(p.position, Vec2::new(10.0, 100.25));
}

#[test]
fn particles_are_never_destroyed() {
    let mut rng = StdRng::seed_from_u64(12);
    let mut field = DriftField::new(50, CANVAS, &mut rng);
    let mut out = Vec::new();
    for _ in 0..5_000 {
        field.draw_and_advance(CANVAS, &mut rng, &mut out);
        out.clear();
    }
    assert_eq!(field.particles.len(), 50);
    assert!(field.particles.iter().all(|p| p.position.y <= 600.0));
}

#[test]
fn streak_spawns_in_downward_diagonal_band() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..200 {
        let s = Streak::spawn(CANVAS, &mut rng);
        let a = s.angle();
        assert!(a >= STREAK_ANGLE_RANGE[0] - 1e-5 && a < STREAK_ANGLE_RANGE[1] + 1e-5);
        assert!((s.direction.length() - 1.0).abs() < 1e-5);
        assert!(s.direction.x > 0.0 && s.direction.y > 0.0);
        assert!(s.position.y >= -300.0 && s.position.y < 0.0);
        assert!(s.speed >= 4.0 && s.speed < 7.0);
        assert!(s.length >= 80.0 && s.length < 150.0);
        assert_eq!(s.alpha, 255.0);
    }
}

#[test]
fn streak_tail_trails_behind_head() {
    let mut rng = StdRng::seed_from_u64(2);
    let s = Streak::spawn(CANVAS, &mut rng);
    match s.draw() {
        DrawCommand::Line { from, to, weight, .. } => {
            assert_eq!(from, s.position);
            assert!((from.distance(to) - s.length).abs() < 1e-3);
            assert!(to.x < from.x && to.y < from.y);
            assert_eq!(weight, STREAK_WEIGHT);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn streaks_respawn_fresh_after_fading_out() {
    let mut rng = StdRng::seed_from_u64(77);
    let mut pool = StreakPool::new(STREAK_COUNT, CANVAS, &mut rng);
    let mut out = Vec::new();
    // 255 / 3 = 85 frames to burn out
    for _ in 0..84 {
        pool.draw_and_advance(CANVAS, &mut rng, &mut out);
    }
    assert!(pool.streaks.iter().all(|s| s.alpha > 0.0 && s.alpha < 255.0));
    pool.draw_and_advance(CANVAS, &mut rng, &mut out);
    for s in &pool.streaks {
        assert_eq!(s.alpha, 255.0, "streak should have been recreated");
        assert!(s.position.y < 0.0);
    }
    assert_eq!(pool.streaks.len(), STREAK_COUNT);
    assert_eq!(out.len(), 85 * STREAK_COUNT);
}
