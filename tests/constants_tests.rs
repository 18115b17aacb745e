// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so the web constants are included directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

use emotion_core::constants::*;
use web_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn typing_splashes_stay_on_screen() {
    let lo = TYPING_SPLASH_CENTER - TYPING_SPLASH_SPREAD / 2.0;
    let hi = TYPING_SPLASH_CENTER + TYPING_SPLASH_SPREAD / 2.0;
    assert!(lo >= 0.0 && hi <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn splash_lifetime_is_fifty_frames() {
    let frames = (1.0 / SPLASH_DECAY_PER_FRAME).round() as u32;
    assert_eq!(frames, 50);
    assert_eq!(MAX_SPLASHES, 10);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn render_budget_constants() {
    assert!((TARGET_FPS - 45.0).abs() < f64::EPSILON);
    assert!(SIM_SCALE > 0.0 && SIM_SCALE <= 1.0);
    assert!(MAX_DEVICE_PIXEL_RATIO >= 1.0);
    assert_eq!(EMOTION_DEBOUNCE_MS, 300);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn outline_styling_is_sane() {
    // the unmodulated base radius sits inside the canvas
    assert!(RADIUS_FRACTION < 0.5);
    assert!(VARIANCE_FRACTION < RADIUS_FRACTION);
    assert!(ART_STROKE_WIDTH > 0.0);
    assert!(ART_FILL_OPACITY > 0.0 && ART_FILL_OPACITY <= 1.0);
}

#[test]
fn element_ids_are_distinct() {
    let ids = [CANVAS_ID, INPUT_ID, ART_PATH_ID];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
