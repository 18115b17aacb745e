use crate::dom::{self, EventListener};
use crate::input;
use emotion_core::{Compositor, Debouncer};
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Each keystroke drops a splash near the center and restarts the emotion debounce.
pub fn wire_emotion_input(
    input_el: &web::HtmlInputElement,
    compositor: Rc<RefCell<Compositor>>,
    debouncer: Rc<RefCell<Debouncer<String>>>,
    rng: Rc<RefCell<StdRng>>,
) -> Result<EventListener, JsValue> {
    EventListener::new(input_el, "input", move |ev: web::Event| {
        let [x, y] = input::typing_splash_uv(&mut *rng.borrow_mut());
        compositor.borrow_mut().add_splash(x, y, None);
        debouncer
            .borrow_mut()
            .push(input::input_value(&ev), Instant::now());
    })
}

/// Keep the canvas backing store and the splash viewport in step with the window.
pub fn wire_canvas_resize(
    canvas: &web::HtmlCanvasElement,
    compositor: Rc<RefCell<Compositor>>,
) -> Result<EventListener, JsValue> {
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let canvas = canvas.clone();
    EventListener::new(&window, "resize", move |_ev: web::Event| {
        let viewport = dom::sync_canvas_backing_size(&canvas);
        compositor.borrow_mut().set_viewport(viewport);
    })
}
