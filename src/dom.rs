use emotion_core::{backing_size, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Logical (CSS pixel) size of the window.
pub fn window_viewport() -> Viewport {
    let (w, h) = web::window()
        .map(|w| {
            let iw = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
            let ih = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
            (iw, ih)
        })
        .unwrap_or((1.0, 1.0));
    Viewport::new(w, h)
}

/// Size the canvas backing store to the capped, half-scale simulation
/// resolution for the current window. Returns the logical viewport.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> Viewport {
    let viewport = window_viewport();
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let (w_px, h_px) = backing_size(viewport.width, viewport.height, dpr);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    viewport
}

/// Event listener that unregisters itself when dropped.
pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Result<Self, wasm_bindgen::JsValue> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
