//! Uniform layout shared with `fluid.wgsl`, plus a CPU copy of the fragment
//! shader used to check falloff and aspect behaviour on the host.

use crate::constants::{FLOW_TIME_SCALE, GLOW_FALLOFF, MAX_SPLASHES};
use crate::palette::Palette;
use crate::splash::PackedSplashes;
use glam::{Vec2, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FluidUniforms {
    pub resolution: [f32; 2],
    pub time: f32,
    pub _pad: f32,
    pub base_color1: [f32; 4],
    pub base_color2: [f32; 4],
    // xy = uv (y up), z = radius / height, w = life
    pub splash_data: [[f32; 4]; MAX_SPLASHES],
    pub splash_colors: [[f32; 4]; MAX_SPLASHES],
}

impl FluidUniforms {
    pub fn new(
        palette: &Palette,
        packed: &PackedSplashes,
        time_sec: f32,
        resolution: [f32; 2],
    ) -> Self {
        let rgba = |c: [f32; 3]| [c[0], c[1], c[2], 1.0];
        let mut splash_colors = [[0.0; 4]; MAX_SPLASHES];
        for (dst, src) in splash_colors.iter_mut().zip(packed.colors.iter()) {
            *dst = rgba(*src);
        }
        Self {
            resolution,
            time: time_sec,
            _pad: 0.0,
            base_color1: rgba(palette.primary.to_unit()),
            base_color2: rgba(palette.secondary.to_unit()),
            splash_data: packed.data,
            splash_colors,
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.resolution[0] / self.resolution[1].max(1.0)
    }
}

/// Background blend factor in [0, 1] at `uv` and `time`.
#[inline]
pub fn flow(uv: Vec2, time: f32) -> f32 {
    let t = time * FLOW_TIME_SCALE;
    let wave1 = (uv.x * 3.0 + t + uv.y * 2.0).sin();
    let wave2 = (uv.y * 4.0 - t * 1.5 + uv.x * 2.0).cos();
    (wave1 + wave2) * 0.25 + 0.5
}

/// Glow intensity of one splash at distance `dist` (uv units, aspect corrected).
#[inline]
pub fn glow(dist: f32, radius: f32, life: f32) -> f32 {
    (-dist * GLOW_FALLOFF / radius).exp() * life
}

/// Aspect-corrected distance between `uv` and a splash center.
#[inline]
pub fn splash_distance(uv: Vec2, center: Vec2, aspect: f32) -> f32 {
    let mut d = uv - center;
    d.x *= aspect;
    d.length()
}

/// Color at `uv` (y up); additive and unclamped like the GPU path.
pub fn shade_pixel(u: &FluidUniforms, uv: Vec2) -> Vec3 {
    let c1 = Vec3::from_slice(&u.base_color1[..3]);
    let c2 = Vec3::from_slice(&u.base_color2[..3]);
    let mut color = c1.lerp(c2, flow(uv, u.time));
    let aspect = u.aspect();
    for (s, c) in u.splash_data.iter().zip(u.splash_colors.iter()) {
        if s[3] <= 0.0 {
            continue;
        }
        let dist = splash_distance(uv, Vec2::new(s[0], s[1]), aspect);
        color += Vec3::from_slice(&c[..3]) * glow(dist, s[2], s[3]);
    }
    color
}
