// Host-side tests for constants and their relationships.

use sketch_core::constants::*;

// The web crate is wasm-only, so we include its constants module directly.
#[allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ranges_are_ordered_and_positive() {
    for [lo, hi] in [
        PARTICLE_SIZE_RANGE,
        PARTICLE_SPEED_RANGE,
        PARTICLE_ALPHA_RANGE,
        STREAK_SPEED_RANGE,
        STREAK_LENGTH_RANGE,
        BURST_SIZE_RANGE,
        BURST_TINT_RANGE,
    ] {
        assert!(lo > 0.0 && hi > lo, "bad range [{lo}, {hi}]");
    }
    assert!(BURST_TINT_RANGE[1] <= 255.0);
    assert!(PARTICLE_ALPHA_RANGE[1] <= 255.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn streak_angles_point_down_and_right() {
    let [lo, hi] = STREAK_ANGLE_RANGE;
    assert!(lo > 0.0 && hi > lo);
    assert!(hi < std::f32::consts::FRAC_PI_2);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn contrast_window_is_inside_unit_range() {
    let [lo, hi] = CONTRAST_WINDOW;
    assert!(lo >= 0.0 && hi <= 1.0 && lo < hi);
    assert!(CONTRAST_EXPONENT > 1.0, "curve should sharpen, not flatten");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn steering_limits_are_sane() {
    assert!(FOLLOWER_MAX_SPEED > 0.0);
    assert!(FOLLOWER_MAX_FORCE > 0.0 && FOLLOWER_MAX_FORCE < FOLLOWER_MAX_SPEED);
    assert!(FOLLOWER_ARRIVE_RADIUS > FOLLOWER_MAX_SPEED);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn bursts_fade_out_close_to_their_life_budget() {
    // alpha runs out at most a few frames after life does
    let fade_frames = (255.0 / BURST_FADE_PER_FRAME).ceil() as i32;
    assert!(fade_frames >= BURST_LIFE_FRAMES);
    assert!(fade_frames <= BURST_LIFE_FRAMES + 4);
    assert!(HOLD_SPAWN_EVERY > 0);
}

#[test]
fn emoji_set_has_no_duplicates() {
    for (i, a) in SEA_EMOJIS.iter().enumerate() {
        assert!(!SEA_EMOJIS[i + 1..].contains(a), "duplicate glyph {a}");
    }
}

#[test]
fn debug_builds_log_frame_stats() {
    if cfg!(debug_assertions) {
        assert_eq!(web_constants::LOG_LEVEL, log::Level::Debug);
    } else {
        assert_eq!(web_constants::LOG_LEVEL, log::Level::Info);
    }
    assert!(web_constants::STATS_EVERY_FRAMES > 0);
}
