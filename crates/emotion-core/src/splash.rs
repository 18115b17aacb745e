use crate::constants::{MAX_SPLASHES, SPLASH_DECAY_PER_FRAME};
use crate::palette::Rgb;
use glam::DVec2;

/// A decaying point-light impulse in viewport pixel space (y down).
///
/// Simulated in f64 so 50 decay steps of 0.02 land at or below zero.
#[derive(Clone, Debug, PartialEq)]
pub struct Splash {
    pub pos: DVec2,
    pub vel: DVec2,
    pub color: Rgb,
    pub life: f64,
    pub size: f64,
}

impl Splash {
    pub fn new(pos: DVec2, vel: DVec2, color: Rgb, size: f64) -> Self {
        Self {
            pos,
            vel,
            color,
            life: 1.0,
            size,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

/// Logical viewport the splash positions are expressed in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }
}

/// Fixed-slot view of the pool as the shader consumes it.
///
/// `data[i] = [u, v, radius / height, life]` with v flipped to y-up;
/// `life == 0` marks an empty slot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PackedSplashes {
    pub data: [[f32; 4]; MAX_SPLASHES],
    pub colors: [[f32; 3]; MAX_SPLASHES],
}

impl PackedSplashes {
    pub fn active_slots(&self) -> usize {
        self.data.iter().filter(|d| d[3] > 0.0).count()
    }
}

/// Live splashes in creation order.
///
/// The pool itself is unbounded; only the first [`MAX_SPLASHES`] entries are
/// packed, so newer splashes stay invisible until older ones decay.
#[derive(Clone, Debug)]
pub struct SplashPool {
    splashes: Vec<Splash>,
    decay: f64,
}

impl Default for SplashPool {
    fn default() -> Self {
        Self::new()
    }
}

impl SplashPool {
    pub fn new() -> Self {
        Self::with_decay(SPLASH_DECAY_PER_FRAME)
    }

    pub fn with_decay(decay: f64) -> Self {
        Self {
            splashes: Vec::new(),
            decay,
        }
    }

    pub fn push(&mut self, splash: Splash) {
        self.splashes.push(splash);
        if self.splashes.len() > MAX_SPLASHES {
            log::debug!(
                "splash pool at {} (> {MAX_SPLASHES}); newest hidden until older ones fade",
                self.splashes.len()
            );
        }
    }

    pub fn len(&self) -> usize {
        self.splashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.splashes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Splash> {
        self.splashes.iter()
    }

    pub fn clear(&mut self) {
        self.splashes.clear();
    }

    /// One simulated frame: fade, drift, then drop the dead.
    pub fn advance(&mut self) {
        let decay = self.decay;
        for s in &mut self.splashes {
            s.life -= decay;
            s.pos += s.vel;
        }
        self.splashes.retain(Splash::is_alive);
    }

    pub fn pack(&self, viewport: Viewport) -> PackedSplashes {
        let mut packed = PackedSplashes::default();
        for (i, s) in self.splashes.iter().take(MAX_SPLASHES).enumerate() {
            packed.data[i] = [
                (s.pos.x / viewport.width) as f32,
                (1.0 - s.pos.y / viewport.height) as f32,
                (s.size / viewport.height) as f32,
                s.life as f32,
            ];
            packed.colors[i] = s.color.to_unit();
        }
        packed
    }
}
