// Web front-end tuning. Plain values only so host tests can `include!` this file.

// DOM element ids expected in index.html
pub const CANVAS_ID: &str = "fluid-canvas";
pub const INPUT_ID: &str = "emotion-input";
pub const ART_PATH_ID: &str = "art-path";

// Typing splashes land within +/- spread/2 of the viewport center
pub const TYPING_SPLASH_CENTER: f64 = 0.5;
pub const TYPING_SPLASH_SPREAD: f64 = 0.4;

// Outline styling
pub const ART_STROKE_WIDTH: f32 = 2.0;
pub const ART_FILL_OPACITY: f32 = 0.85;

// Seed for splash jitter and typing positions
pub const SPLASH_RNG_SEED: u64 = 0x5eed_0f1d;
