use crate::constants::{MAX_DEVICE_PIXEL_RATIO, SIM_SCALE, TARGET_FPS};

/// Drops frames that arrive sooner than the target interval.
///
/// Fed with the host's frame timestamps (milliseconds). The remainder of the
/// elapsed time is carried over so the cadence does not drift.
#[derive(Clone, Debug)]
pub struct FramePacer {
    interval_ms: f64,
    last_ms: f64,
}

impl FramePacer {
    pub fn new(fps: f64) -> Self {
        Self {
            interval_ms: 1000.0 / fps.max(1.0),
            last_ms: 0.0,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn should_render(&mut self, timestamp_ms: f64) -> bool {
        let elapsed = timestamp_ms - self.last_ms;
        if elapsed < self.interval_ms {
            return false;
        }
        self.last_ms = timestamp_ms - (elapsed % self.interval_ms);
        true
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(TARGET_FPS)
    }
}

/// Backing-store size for a CSS-sized surface: device pixel ratio capped,
/// then scaled down to the simulation resolution.
pub fn backing_size(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> (u32, u32) {
    let dpr = if device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(MAX_DEVICE_PIXEL_RATIO)
    } else {
        1.0
    };
    let w = (css_width * dpr * SIM_SCALE) as u32;
    let h = (css_height * dpr * SIM_SCALE) as u32;
    (w.max(1), h.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backing_size_caps_dense_displays() {
        assert_eq!(backing_size(1000.0, 800.0, 1.0), (500, 400));
        assert_eq!(backing_size(1000.0, 800.0, 3.0), (750, 600));
        assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
    }
}
