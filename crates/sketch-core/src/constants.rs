// Shared tuning constants for the sea sketch scene.

// Canvas and capture
pub const CANVAS_WIDTH: f32 = 800.0;
pub const CANVAS_HEIGHT: f32 = 600.0;
pub const CAPTURE_WIDTH: u32 = 320;
pub const CAPTURE_HEIGHT: u32 = 240;

// Halftone grid
pub const HALFTONE_ROWS: f32 = 30.0; // line spacing = canvas height / rows
pub const HALFTONE_STEP_PX: f32 = 5.0;
pub const CONTRAST_WINDOW: [f32; 2] = [0.3, 0.7]; // brightness range mapped to contrast 1..0
pub const CONTRAST_EXPONENT: f32 = 1.2;
pub const DOT_MIN_DIAMETER: f32 = 0.1;
pub const DOT_MAX_DIAMETER_RATIO: f32 = 0.6; // of line spacing
pub const DOT_JITTER_RATIO: f32 = 0.05; // of line spacing
pub const DOT_LIFT_PX: f32 = 30.0; // vertical shift at full contrast
pub const DOT_WAVE_AMPLITUDE_PX: f32 = 10.0;
pub const DOT_WAVE_X_FREQ: f32 = 0.01;
pub const DOT_WAVE_FRAME_FREQ: f32 = 0.02;
pub const NOISE_TIME_DIVISOR: f32 = 10_000.0;

// Steering follower
pub const FOLLOWER_MAX_SPEED: f32 = 8.0;
pub const FOLLOWER_MAX_FORCE: f32 = 0.2;
pub const FOLLOWER_ARRIVE_RADIUS: f32 = 100.0;
pub const FOLLOWER_GLYPH_SIZE: f32 = 32.0;
pub const FOLLOWER_GLYPH_LIFT_PX: f32 = 20.0;

// Drift particles
pub const PARTICLE_COUNT: usize = 100;
pub const PARTICLE_SIZE_RANGE: [f32; 2] = [1.0, 3.0];
pub const PARTICLE_SPEED_RANGE: [f32; 2] = [0.2, 0.5];
pub const PARTICLE_ALPHA_RANGE: [f32; 2] = [80.0, 180.0];

// Shooting streaks
pub const STREAK_COUNT: usize = 5;
pub const STREAK_ANGLE_RANGE: [f32; 2] = [
    std::f32::consts::PI / 8.0,
    std::f32::consts::PI / 3.0,
];
pub const STREAK_SPEED_RANGE: [f32; 2] = [4.0, 7.0];
pub const STREAK_LENGTH_RANGE: [f32; 2] = [80.0, 150.0];
pub const STREAK_FADE_PER_FRAME: f32 = 3.0;
pub const STREAK_WEIGHT: f32 = 2.0;

// Wave horizon
pub const WAVE_STEP_PX: f32 = 10.0;
pub const WAVE_BASELINE_RATIO: f32 = 0.9; // of canvas height
pub const WAVE_AMPLITUDE_PX: f32 = 20.0;
pub const WAVE_FREQUENCY: f32 = 0.01;
pub const WAVE_PHASE_STEP: f32 = 0.02;
pub const WAVE_ALPHA: u8 = 20;

// Emoji bursts
pub const BURST_LIFE_FRAMES: i32 = 60;
pub const BURST_FADE_PER_FRAME: f32 = 4.0;
pub const BURST_RISE_PX: f32 = 1.0;
pub const BURST_SIZE_RANGE: [f32; 2] = [20.0, 40.0];
pub const BURST_TINT_RANGE: [f32; 2] = [200.0, 255.0];
pub const HOLD_SPAWN_EVERY: u64 = 4; // frames between bursts while held

// Cursor halo
pub const HALO_DIAMETER: f32 = 30.0;
pub const HALO_ALPHA: u8 = 100;

pub const SEA_EMOJIS: [&str; 10] = [
    "🌊", "🐚", "🏖️", "🛥️", "🌴", "🐳", "🌅", "🐬", "🐠", "🌞",
];
