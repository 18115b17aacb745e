// Host-side tests for frame pacing, backing-store sizing, debouncing and the
// compositor's paced tick.

use emotion_core::*;
use instant::Instant;
use std::time::Duration;

#[test]
fn pacer_skips_early_frames() {
    let mut pacer = FramePacer::default();
    let interval = pacer.interval_ms();
    assert!((interval - 1000.0 / 45.0).abs() < 1e-9);

    assert!(!pacer.should_render(10.0));
    assert!(pacer.should_render(30.0));
    // last frame recorded at 30 - (30 % interval)
    assert!(!pacer.should_render(40.0));
    assert!(pacer.should_render(45.0));
}

#[test]
fn pacer_holds_target_rate_on_fast_displays() {
    let mut pacer = FramePacer::new(45.0);
    let frame_ms = 1000.0 / 120.0;
    let rendered = (1..=1200)
        .filter(|i| pacer.should_render(*i as f64 * frame_ms))
        .count();
    // ten seconds at 120 Hz
    assert!((440..=451).contains(&rendered), "rendered {rendered}");
}

#[test]
fn backing_store_is_half_resolution_with_dpr_cap() {
    assert_eq!(backing_size(1920.0, 1080.0, 1.0), (960, 540));
    assert_eq!(backing_size(1920.0, 1080.0, 1.5), (1440, 810));
    assert_eq!(backing_size(1920.0, 1080.0, 2.0), (1440, 810));
    assert_eq!(backing_size(800.0, 600.0, 0.0), (400, 300));
    assert_eq!(backing_size(1.0, 1.0, 1.0), (1, 1));
}

#[test]
fn debouncer_releases_latest_value_once() {
    let mut d = Debouncer::new(Duration::from_millis(EMOTION_DEBOUNCE_MS));
    let t0 = Instant::now();
    d.push("h".to_string(), t0);
    d.push("ha".to_string(), t0 + Duration::from_millis(100));
    d.push("hap".to_string(), t0 + Duration::from_millis(200));
    assert!(d.is_pending());

    // quiet period restarts on every push
    assert_eq!(d.poll(t0 + Duration::from_millis(350)), None);
    assert_eq!(
        d.poll(t0 + Duration::from_millis(500)),
        Some("hap".to_string())
    );
    assert!(!d.is_pending());
    assert_eq!(d.poll(t0 + Duration::from_millis(900)), None);
}

#[test]
fn debouncer_ignores_polls_before_push_time() {
    let mut d = Debouncer::new(Duration::from_millis(10));
    let t0 = Instant::now();
    d.push(1u8, t0 + Duration::from_millis(50));
    assert_eq!(d.poll(t0), None);
    assert_eq!(d.poll(t0 + Duration::from_millis(60)), Some(1));
}

#[test]
fn compositor_tick_is_paced_and_decays_splashes() {
    let mut comp = Compositor::new(
        Palette::default(),
        Viewport::new(400.0, 300.0),
        CompositorParams::default(),
        11,
    );
    comp.add_splash(0.5, 0.5, None);

    assert!(comp.tick(5.0, [200.0, 150.0]).is_none());
    let u = comp.tick(25.0, [200.0, 150.0]).expect("paced frame");
    assert!((u.time - 0.025).abs() < 1e-6);
    assert_eq!(u.resolution, [200.0, 150.0]);
    assert!((u.splash_data[0][3] - 0.98).abs() < 1e-6);
    assert_eq!(comp.pool().len(), 1);

    // skipped frames do not age splashes
    assert!(comp.tick(26.0, [200.0, 150.0]).is_none());
    assert_eq!(comp.pool().iter().next().map(|s| s.life), Some(1.0 - 0.02));
}

#[test]
fn compositor_params_override_decay() {
    let params = CompositorParams {
        decay_per_frame: 0.25,
        ..CompositorParams::default()
    };
    let mut comp = Compositor::new(Palette::default(), Viewport::new(10.0, 10.0), params, 1);
    comp.add_splash(0.0, 0.0, None);
    for _ in 0..3 {
        comp.frame(0.0, [10.0, 10.0]);
    }
    assert_eq!(comp.pool().len(), 1);
    comp.frame(0.0, [10.0, 10.0]);
    assert!(comp.pool().is_empty());
}

#[test]
fn palette_change_reaches_uniforms() {
    let mut comp = Compositor::new(
        Palette::default(),
        Viewport::new(10.0, 10.0),
        CompositorParams::default(),
        1,
    );
    comp.set_palette(palette_for("angry"));
    let u = comp.frame(0.0, [10.0, 10.0]);
    let p = palette_for("angry").primary.to_unit();
    assert_eq!(&u.base_color1[..3], &p[..]);
}
