// Shared tuning constants used by both web and native frontends.

// Outline geometry (SVG viewBox is CANVAS_SIZE x CANVAS_SIZE)
pub const CANVAS_SIZE: f64 = 200.0;
pub const BASE_POINTS: usize = 8;
pub const POINT_SPREAD: f64 = 5.0; // extra points at complexity 1.0
pub const RADIUS_FRACTION: f64 = 0.4;
pub const VARIANCE_FRACTION: f64 = 0.1;
pub const SPIKY_THRESHOLD: f64 = 0.5; // spikiness above this adds angular jitter
pub const ANGLE_JITTER_SCALE: f64 = 0.2; // of pi, applied after the centered draw

// Control point smoothing
pub const SMOOTH_PULL_THRESHOLD: f64 = 1.0;
pub const SMOOTH_PULL_GAIN: f64 = 0.3;
pub const SHARP_PUSH_THRESHOLD: f64 = 0.7;
pub const SHARP_PUSH_GAIN: f64 = 0.5;

// Park-Miller minimal standard generator
pub const LCG_MULTIPLIER: i64 = 16807;
pub const LCG_MODULUS: i64 = 2_147_483_647;

// Splash pool
pub const MAX_SPLASHES: usize = 10; // shader uniform array length
pub const SPLASH_DECAY_PER_FRAME: f64 = 0.02;
pub const SPLASH_MAX_SPEED: f64 = 2.0; // px per frame on each axis
pub const SPLASH_MIN_SIZE: f64 = 50.0; // px
pub const SPLASH_SIZE_RANGE: f64 = 50.0; // px

// Shading
pub const GLOW_FALLOFF: f32 = 20.0;
pub const FLOW_TIME_SCALE: f32 = 0.2;

// Frame pacing and backing store
pub const TARGET_FPS: f64 = 45.0;
pub const SIM_SCALE: f64 = 0.5; // simulate at half linear resolution
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 1.5;

// Input debounce before palette/outline refresh
pub const EMOTION_DEBOUNCE_MS: u64 = 300;
