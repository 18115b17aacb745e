use crate::art::ArtDisplay;
use crate::render;
use emotion_core::{palette_for, Compositor, Debouncer};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub compositor: Rc<RefCell<Compositor>>,
    pub debouncer: Rc<RefCell<Debouncer<String>>>,
    pub art: Rc<ArtDisplay>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self, timestamp_ms: f64) {
        let released = self.debouncer.borrow_mut().poll(Instant::now());
        if let Some(text) = released {
            apply_emotion(&self.compositor, &self.art, &text);
        }

        let (w, h) = (self.canvas.width(), self.canvas.height());
        let uniforms = self
            .compositor
            .borrow_mut()
            .tick(timestamp_ms, [w as f32, h as f32]);
        let (Some(uniforms), Some(g)) = (uniforms, self.gpu.as_mut()) else {
            return;
        };
        g.resize_if_needed(w, h);
        match g.render(&uniforms) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("surface lost; reconfiguring");
                g.reconfigure();
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

/// Switch palette and outline to `text` right away.
pub fn apply_emotion(compositor: &RefCell<Compositor>, art: &ArtDisplay, text: &str) {
    let palette = palette_for(text);
    art.show(text, &palette);
    compositor.borrow_mut().set_palette(palette);
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Owns the requestAnimationFrame chain; cancelling drops the callback.
pub struct LoopHandle {
    tick: TickClosure,
    pending: Rc<Cell<Option<i32>>>,
}

impl LoopHandle {
    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // breaks the closure -> Rc cycle
        self.tick.borrow_mut().take();
    }
}

impl Drop for LoopHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_frame(tick: &TickClosure, pending: &Cell<Option<i32>>) {
    let Some(w) = web::window() else { return };
    let id = tick
        .borrow()
        .as_ref()
        .and_then(|cb| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    pending.set(id);
}

pub fn start_loop(frame_ctx: FrameContext<'static>) -> LoopHandle {
    let tick: TickClosure = Rc::new(RefCell::new(None));
    let pending = Rc::new(Cell::new(None));
    let tick_clone = tick.clone();
    let pending_clone = pending.clone();
    let mut ctx = frame_ctx;
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
        // reschedule first so pacing never stalls the chain
        request_frame(&tick_clone, &pending_clone);
        ctx.frame(timestamp_ms);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&tick, &pending);
    LoopHandle { tick, pending }
}
