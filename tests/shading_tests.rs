// Host-side tests for the CPU mirror of the fluid shader.

use emotion_core::*;
use glam::{DVec2, Vec2, Vec3};

fn uniforms_with_one_splash(resolution: [f32; 2], radius: f32) -> FluidUniforms {
    let mut packed = PackedSplashes::default();
    packed.data[0] = [0.5, 0.5, radius, 1.0];
    packed.colors[0] = [1.0, 1.0, 1.0];
    let palette = Palette {
        primary: Rgb::BLACK,
        secondary: Rgb::BLACK,
        accent: Rgb::BLACK,
        background: String::new(),
    };
    FluidUniforms::new(&palette, &packed, 0.0, resolution)
}

#[test]
fn glow_falls_off_monotonically() {
    let radius = 0.15;
    let mut prev = glow(0.0, radius, 1.0);
    assert!((prev - 1.0).abs() < 1e-6);
    for step in 1..=40 {
        let g = glow(step as f32 * 0.01, radius, 1.0);
        assert!(g < prev, "step {step}");
        prev = g;
    }
}

#[test]
fn glow_vanishes_well_outside_the_radius() {
    for radius in [0.05_f32, 0.1, 0.2] {
        assert!(glow(4.0 * radius, radius, 1.0) < 1e-6);
    }
}

#[test]
fn glow_scales_with_life() {
    let full = glow(0.02, 0.1, 1.0);
    let half = glow(0.02, 0.1, 0.5);
    assert!((half * 2.0 - full).abs() < 1e-6);
    assert_eq!(glow(0.02, 0.1, 0.0), 0.0);
}

#[test]
fn glow_is_circular_on_wide_viewports() {
    let u = uniforms_with_one_splash([1600.0, 800.0], 0.2);
    let aspect = u.aspect();
    assert!((aspect - 2.0).abs() < 1e-6);
    // equal on-screen offsets: horizontal uv offsets shrink by the aspect ratio
    let dy = 0.05;
    let horizontal = shade_pixel(&u, Vec2::new(0.5 + dy / aspect, 0.5));
    let vertical = shade_pixel(&u, Vec2::new(0.5, 0.5 + dy));
    assert!((horizontal - vertical).length() < 1e-4);
}

#[test]
fn empty_slots_contribute_nothing() {
    let palette = palette_for("calm");
    let packed = PackedSplashes::default();
    let u = FluidUniforms::new(&palette, &packed, 12.5, [640.0, 480.0]);
    let uv = Vec2::new(0.3, 0.7);
    let c1 = Vec3::from_slice(&u.base_color1[..3]);
    let c2 = Vec3::from_slice(&u.base_color2[..3]);
    let expected = c1.lerp(c2, flow(uv, 12.5));
    assert!((shade_pixel(&u, uv) - expected).length() < 1e-6);
}

#[test]
fn splashes_add_light_without_clamping() {
    let mut pool = SplashPool::new();
    for _ in 0..MAX_SPLASHES {
        pool.push(Splash::new(
            DVec2::new(50.0, 50.0),
            DVec2::ZERO,
            Rgb::new(255, 255, 255),
            100.0,
        ));
    }
    let palette = palette_for("happy");
    let u = FluidUniforms::new(&palette, &pool.pack(Viewport::new(100.0, 100.0)), 0.0, [100.0, 100.0]);
    let c = shade_pixel(&u, Vec2::new(0.5, 0.5));
    assert!(c.x > 1.0 && c.y > 1.0 && c.z > 1.0);
}

#[test]
fn uniforms_carry_palette_as_rgba() {
    let palette = palette_for("sad");
    let u = FluidUniforms::new(&palette, &PackedSplashes::default(), 1.0, [10.0, 20.0]);
    let p = palette.primary.to_unit();
    assert_eq!(u.base_color1, [p[0], p[1], p[2], 1.0]);
    assert_eq!(u.resolution, [10.0, 20.0]);
    assert_eq!(bytemuck::bytes_of(&u).len(), 368);
}
