// Host-side tests for the halftone mapping pipeline.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sketch_core::color::LINE_COLORS;
use sketch_core::halftone::{base_diameter, contrast, HalftoneGrid};
use sketch_core::noise::ValueNoise;
use sketch_core::{CaptureFrame, HalftoneParams};

const CANVAS: Vec2 = Vec2::new(800.0, 600.0);

fn noise(seed: u64) -> ValueNoise {
    ValueNoise::new(&mut StdRng::seed_from_u64(seed))
}

#[test]
fn contrast_window_maps_and_clamps() {
    let p = HalftoneParams::default();
    assert!((contrast(0.3, &p) - 1.0).abs() < 1e-6);
    assert!(contrast(0.7, &p).abs() < 1e-6);
    assert!((contrast(0.5, &p) - 0.5).abs() < 1e-6);
    assert_eq!(contrast(0.0, &p), 1.0);
    assert_eq!(contrast(1.0, &p), 0.0);
}

#[test]
fn base_diameter_spans_configured_range() {
    let p = HalftoneParams::default();
    let lh = 20.0;
    assert!((base_diameter(1.0, lh, &p) - 12.0).abs() < 1e-5);
    assert!((base_diameter(0.0, lh, &p) - 0.1).abs() < 1e-6);
    let mid = base_diameter(0.5, lh, &p);
    assert!(mid > 0.1 && mid < 12.0);
}

#[test]
fn grid_dimensions_match_line_spacing_and_step() {
    let params = HalftoneParams::default();
    let frame = CaptureFrame::uniform(320, 240, [0, 0, 0]);
    let grid = HalftoneGrid::new(&params, CANVAS, &frame, false);
    assert!((grid.line_height() - 20.0).abs() < 1e-6);
    let rows = grid.rows();
    assert!(rows.len() >= 28 && rows.len() <= 29, "rows={}", rows.len());
    assert!((rows[0] - 20.0).abs() < 1e-4);
    assert!(rows.iter().all(|&y| y <= 580.0 + 1e-3));
    let cols = grid.columns();
    assert_eq!(cols.len(), 160);
    assert_eq!(cols[0], 0.0);
    assert_eq!(*cols.last().unwrap(), 795.0);
}

#[test]
fn uniform_gray_frame_gives_uniform_dot_sizes() {
    let params = HalftoneParams::default();
    let frame = CaptureFrame::uniform(320, 240, [128, 128, 128]);
    let grid = HalftoneGrid::new(&params, CANVAS, &frame, false);
    let mut rng = StdRng::seed_from_u64(7);
    let dots = grid.sweep(&frame, 1, &noise(1), &mut rng);
    assert!(!dots.is_empty());

    let expected_contrast = contrast(1.0 - 128.0 / 255.0, &params);
    let lh = grid.line_height();
    let base = base_diameter(expected_contrast.powf(params.exponent), lh, &params);
    let tolerance = lh * params.jitter_ratio * 0.5 + 1e-4;
    for d in &dots {
        assert!((d.contrast - expected_contrast).abs() < 1e-6);
        assert!(
            (d.diameter - base).abs() <= tolerance,
            "diameter {} strays from {} by more than jitter",
            d.diameter,
            base
        );
    }
}

#[test]
fn dark_scene_gives_small_dots_bright_scene_large() {
    let params = HalftoneParams::default();
    let dark = CaptureFrame::uniform(320, 240, [0, 0, 0]);
    let light = CaptureFrame::uniform(320, 240, [255, 255, 255]);
    let n = noise(3);
    let mut rng = StdRng::seed_from_u64(3);

    let grid = HalftoneGrid::new(&params, CANVAS, &dark, false);
    let d = grid.sample(&dark, 100.0, 100.0, 1, &n, &mut rng);
    let grid = HalftoneGrid::new(&params, CANVAS, &light, false);
    let l = grid.sample(&light, 100.0, 100.0, 1, &n, &mut rng);
    assert!(d.diameter < l.diameter);
    assert_eq!(d.powered, 0.0);
    assert_eq!(l.powered, 1.0);
}

#[test]
fn dot_centre_applies_lift_and_wave() {
    let params = HalftoneParams::default();
    let light = CaptureFrame::uniform(320, 240, [255, 255, 255]);
    let grid = HalftoneGrid::new(&params, CANVAS, &light, false);
    let mut rng = StdRng::seed_from_u64(5);
    let frame_index = 10;
    let dot = grid.sample(&light, 40.0, 60.0, frame_index, &noise(5), &mut rng);
    let wave = (40.0f32 * 0.01 + frame_index as f32 * 0.02).sin() * 10.0;
    assert!((dot.center.x - 42.5).abs() < 1e-5);
    assert!((dot.center.y - (60.0 + 30.0 + wave)).abs() < 1e-4);
}

#[test]
fn colours_come_from_palette() {
    let params = HalftoneParams::default();
    let frame = CaptureFrame::uniform(320, 240, [90, 90, 90]);
    let grid = HalftoneGrid::new(&params, CANVAS, &frame, false);
    let mut rng = StdRng::seed_from_u64(11);
    let dots = grid.sweep(&frame, 3, &noise(11), &mut rng);
    assert!(dots.iter().all(|d| LINE_COLORS.contains(&d.color)));
    // Every palette entry shows up over a full sweep
    for c in LINE_COLORS {
        assert!(dots.iter().any(|d| d.color == c));
    }
}

#[test]
fn sweep_is_reproducible_for_a_seed() {
    let params = HalftoneParams::default();
    let frame = CaptureFrame::uniform(320, 240, [60, 120, 180]);
    let grid = HalftoneGrid::new(&params, CANVAS, &frame, false);
    let n = noise(9);
    let a = grid.sweep(&frame, 4, &n, &mut StdRng::seed_from_u64(2));
    let b = grid.sweep(&frame, 4, &n, &mut StdRng::seed_from_u64(2));
    assert_eq!(a, b);
}

#[test]
fn noise_is_bounded_and_coherent() {
    let n = noise(21);
    let max = n.max_value();
    for i in 0..500 {
        let x = i as f32 * 0.37;
        let y = i as f32 * 1.91;
        let v = n.sample(x, y);
        assert!((0.0..max).contains(&v), "noise {v} outside [0,{max})");
        let near = n.sample(x + 1e-4, y);
        assert!((v - near).abs() < 0.01, "noise jumps between close inputs");
    }
}

#[test]
fn grid_with_unusable_spacing_is_empty_instead_of_endless() {
    let frame = CaptureFrame::uniform(320, 240, [0, 0, 0]);
    for step in [0.0, -5.0, f32::NAN, f32::INFINITY] {
        let params = HalftoneParams {
            step_px: step,
            ..HalftoneParams::default()
        };
        let grid = HalftoneGrid::new(&params, CANVAS, &frame, false);
        assert!(grid.columns().is_empty(), "step {step} produced columns");
    }
    for rows in [0.0, -1.0, f32::NAN] {
        let params = HalftoneParams {
            rows,
            ..HalftoneParams::default()
        };
        let grid = HalftoneGrid::new(&params, CANVAS, &frame, false);
        assert!(grid.rows().is_empty(), "rows {rows} produced rows");
    }
}
