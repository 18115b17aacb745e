#![cfg(target_arch = "wasm32")]
use crate::art::ArtDisplay;
use crate::constants::*;
use emotion_core::{
    generate_layered_paths, Compositor, CompositorParams, Debouncer, Palette, Rgb,
    EMOTION_DEBOUNCE_MS,
};
use rand::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod art;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

/// Everything a mounted page holds on to. Dropping it stops the loop and
/// unregisters the listeners.
struct App {
    compositor: Rc<RefCell<Compositor>>,
    art: Rc<ArtDisplay>,
    _loop: frame::LoopHandle,
    _listeners: Vec<dom::EventListener>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn with_app(f: impl FnOnce(&App)) {
    APP.with(|app| match app.borrow().as_ref() {
        Some(a) => f(a),
        None => log::debug!("app not mounted; call ignored"),
    });
}

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!(format!("{:?}", e))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("emotion-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?
        .dyn_into()
        .map_err(|e| js_err(e.into()))?;
    let input_el: web::HtmlInputElement = document
        .get_element_by_id(INPUT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{INPUT_ID}"))?
        .dyn_into()
        .map_err(|e| js_err(e.into()))?;
    let path_el = document
        .get_element_by_id(ART_PATH_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{ART_PATH_ID}"))?;

    let viewport = dom::sync_canvas_backing_size(&canvas);
    let compositor = Rc::new(RefCell::new(Compositor::new(
        Palette::default(),
        viewport,
        CompositorParams::default(),
        SPLASH_RNG_SEED,
    )));
    let debouncer = Rc::new(RefCell::new(Debouncer::new(Duration::from_millis(
        EMOTION_DEBOUNCE_MS,
    ))));
    let rng = Rc::new(RefCell::new(StdRng::seed_from_u64(SPLASH_RNG_SEED ^ 1)));
    let art = Rc::new(ArtDisplay::new(&document, path_el));
    frame::apply_emotion(&compositor, &art, &input_el.value());

    let listeners = vec![
        events::wire_canvas_resize(&canvas, compositor.clone()).map_err(js_err)?,
        events::wire_emotion_input(&input_el, compositor.clone(), debouncer.clone(), rng)
            .map_err(js_err)?,
    ];

    // Without a GPU the page still updates the outline; only the fluid is missing
    let gpu = frame::init_gpu(&canvas).await;

    let loop_handle = frame::start_loop(frame::FrameContext {
        compositor: compositor.clone(),
        debouncer,
        art: art.clone(),
        canvas,
        gpu,
    });

    let previous = APP.with(|app| {
        app.borrow_mut().replace(App {
            compositor,
            art,
            _loop: loop_handle,
            _listeners: listeners,
        })
    });
    drop(previous);
    log::info!("emotion-web mounted");
    Ok(())
}

/// Handle for page scripts. All calls are no-ops until the app is mounted.
#[wasm_bindgen]
#[derive(Default)]
pub struct EmotionApp {
    _handle: (),
}

#[wasm_bindgen]
impl EmotionApp {
    #[wasm_bindgen(constructor)]
    pub fn new() -> EmotionApp {
        EmotionApp::default()
    }

    /// Splash at normalized viewport coordinates in the palette accent color.
    pub fn splash(&self, x: f64, y: f64) {
        with_app(|app| app.compositor.borrow_mut().add_splash(x, y, None));
    }

    pub fn splash_color(&self, x: f64, y: f64, r: u8, g: u8, b: u8) {
        with_app(|app| {
            app.compositor
                .borrow_mut()
                .add_splash(x, y, Some(Rgb::new(r, g, b)))
        });
    }

    /// Apply an emotion immediately, bypassing the typing debounce.
    pub fn set_emotion(&self, text: &str) {
        with_app(|app| frame::apply_emotion(&app.compositor, &app.art, text));
    }

    pub fn is_mounted(&self) -> bool {
        APP.with(|app| app.borrow().is_some())
    }

    /// Stop rendering and remove listeners. Safe to call twice.
    pub fn destroy(&self) {
        let app = APP.with(|app| app.borrow_mut().take());
        if app.is_some() {
            log::info!("emotion-web destroyed");
        }
    }
}

/// SVG path data for `seed`.
#[wasm_bindgen]
pub fn blob_path(seed: &str) -> String {
    emotion_core::generate_blob_path(seed)
}

/// Layered variants of the outline for `seed`, as an array of path strings.
#[wasm_bindgen]
pub fn blob_layers(seed: &str, layers: usize) -> js_sys::Array {
    generate_layered_paths(seed, layers)
        .into_iter()
        .map(JsValue::from)
        .collect()
}
