use crate::constants::{TYPING_SPLASH_CENTER, TYPING_SPLASH_SPREAD};
use rand::Rng;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Normalized splash position for a keystroke: near the center, jittered.
#[inline]
pub fn typing_splash_uv<R: Rng + ?Sized>(rng: &mut R) -> [f64; 2] {
    let x = TYPING_SPLASH_CENTER + (rng.gen::<f64>() - 0.5) * TYPING_SPLASH_SPREAD;
    let y = TYPING_SPLASH_CENTER + (rng.gen::<f64>() - 0.5) * TYPING_SPLASH_SPREAD;
    [x, y]
}

/// Current text of the input that fired `ev`, or empty.
#[inline]
pub fn input_value(ev: &web::Event) -> String {
    ev.target()
        .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
        .map(|el| el.value())
        .unwrap_or_default()
}
