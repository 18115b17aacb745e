use crate::constants::*;
use crate::pacing::FramePacer;
use crate::palette::{Palette, Rgb};
use crate::shading::FluidUniforms;
use crate::splash::{Splash, SplashPool, Viewport};
use glam::DVec2;
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct CompositorParams {
    pub decay_per_frame: f64,
    pub target_fps: f64,
}

impl Default for CompositorParams {
    fn default() -> Self {
        Self {
            decay_per_frame: SPLASH_DECAY_PER_FRAME,
            target_fps: TARGET_FPS,
        }
    }
}

/// Splash simulation plus per-frame uniform packing for the fluid shader.
///
/// `add_splash` may be called at any time between frames; `tick` is driven by
/// the host's frame callback and only does work at the paced cadence.
pub struct Compositor {
    pub palette: Palette,
    pub viewport: Viewport,
    pub params: CompositorParams,
    pool: SplashPool,
    pacer: FramePacer,
    rng: StdRng,
}

impl Compositor {
    pub fn new(palette: Palette, viewport: Viewport, params: CompositorParams, seed: u64) -> Self {
        Self {
            pool: SplashPool::with_decay(params.decay_per_frame),
            pacer: FramePacer::new(params.target_fps),
            rng: StdRng::seed_from_u64(seed),
            palette,
            viewport,
            params,
        }
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn pool(&self) -> &SplashPool {
        &self.pool
    }

    /// Inject a splash at normalized viewport coordinates (y down).
    /// Without an override the palette accent is used.
    pub fn add_splash(&mut self, x: f64, y: f64, color: Option<Rgb>) {
        let pos = DVec2::new(x * self.viewport.width, y * self.viewport.height);
        let vel = DVec2::new(
            (self.rng.gen::<f64>() - 0.5) * SPLASH_MAX_SPEED * 2.0,
            (self.rng.gen::<f64>() - 0.5) * SPLASH_MAX_SPEED * 2.0,
        );
        let size = self.rng.gen::<f64>() * SPLASH_SIZE_RANGE + SPLASH_MIN_SIZE;
        let color = color.unwrap_or(self.palette.accent);
        self.pool.push(Splash::new(pos, vel, color, size));
    }

    /// Advance one simulated frame and pack uniforms, ignoring pacing.
    pub fn frame(&mut self, time_sec: f32, resolution: [f32; 2]) -> FluidUniforms {
        self.pool.advance();
        let packed = self.pool.pack(self.viewport);
        FluidUniforms::new(&self.palette, &packed, time_sec, resolution)
    }

    /// Paced frame: `None` when the timestamp falls inside the frame interval.
    pub fn tick(&mut self, timestamp_ms: f64, resolution: [f32; 2]) -> Option<FluidUniforms> {
        if !self.pacer.should_render(timestamp_ms) {
            return None;
        }
        Some(self.frame((timestamp_ms / 1000.0) as f32, resolution))
    }
}
