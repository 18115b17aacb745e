// Host-side tests for the seeded blob outline generator.

use emotion_core::*;

const SEEDS: &[&str] = &[
    "default",
    "happy",
    "I am so angry right now",
    "calm waters",
    "anxious",
    "excited!!",
    "energetic morning",
    "melancholy",
    "zzz",
    "über müde",
    "🙂 love",
];

#[test]
fn same_seed_gives_identical_path() {
    for seed in SEEDS {
        assert_eq!(generate_blob_path(seed), generate_blob_path(seed));
    }
    assert_ne!(generate_blob_path("happy"), generate_blob_path("happy "));
}

#[test]
fn empty_seed_matches_default() {
    assert_eq!(generate_blob_path(""), generate_blob_path("default"));
    // only the empty string is replaced; whitespace is a seed of its own
    assert_ne!(generate_blob_path("  "), generate_blob_path("default"));
    assert_eq!(generate_points("  ").emotion, Emotion::Default);
}

#[test]
fn outline_is_closed() {
    for seed in SEEDS {
        let outline = generate_outline(seed);
        let start = outline.start().expect("move command");
        let end = outline.end().expect("last segment");
        assert!(
            (start - end).length() < 1e-9,
            "{seed}: start {start:?} end {end:?}"
        );
    }
}

#[test]
fn point_count_stays_in_bounds() {
    for seed in SEEDS {
        let blob = generate_points(seed);
        let n = blob.points.len();
        let c = blob.params.complexity;
        assert!(n >= BASE_POINTS, "{seed}: {n}");
        assert!((n as f64) < BASE_POINTS as f64 + POINT_SPREAD * c, "{seed}: {n}");
        assert_eq!(generate_outline(seed).segment_count(), n);
    }
    assert_eq!(point_count(0.0, 2.0), 8);
    assert_eq!(point_count(0.999, 2.0), 17);
}

#[test]
fn path_string_shape() {
    let d = generate_blob_path("calm");
    assert!(d.starts_with("M "));
    let n = generate_points("calm").points.len();
    assert_eq!(d.matches('Q').count(), n);
    assert_eq!(d.matches('M').count(), 1);
    // every token after a command letter parses as a number
    for tok in d.split(' ').filter(|t| *t != "M" && *t != "Q") {
        assert!(tok.parse::<f64>().is_ok(), "bad token {tok}");
    }
}

#[test]
fn seed_picks_emotion_shape() {
    assert_eq!(generate_points("so calm today").emotion, Emotion::Calm);
    assert_eq!(generate_points("").emotion, Emotion::Default);
    assert_eq!(generate_points("ANGRY").params, Emotion::Angry.shape());
}

#[test]
fn smooth_emotions_pull_controls_inward() {
    let center = canvas_center();
    let p = center + glam::DVec2::new(50.0, 0.0);
    // calm: smoothness 1.5 pulls by 0.15
    let pulled = control_point(p, center, 1.5);
    assert!((pulled.x - (center.x + 42.5)).abs() < 1e-9);
    // angry: smoothness 0.3 pushes by 0.2
    let pushed = control_point(p, center, 0.3);
    assert!((pushed.x - (center.x + 60.0)).abs() < 1e-9);
    // neutral band leaves the point alone
    assert_eq!(control_point(p, center, 0.9), p);
}

#[test]
fn layered_paths_use_distinct_seeds() {
    let layers = generate_layered_paths("dreamy", 3);
    assert_eq!(layers.len(), 3);
    assert_eq!(layers[0], generate_blob_path("dreamy_layer_0"));
    assert_ne!(layers[0], layers[1]);
    assert!(generate_layered_paths("dreamy", 0).is_empty());
}

#[test]
fn hash_and_rng_are_stable() {
    assert_eq!(string_hash(""), 0);
    assert_eq!(string_hash("a"), 97);
    assert_eq!(string_hash("ab"), 97 * 31 + 98);
    let mut a = SeededRng::from_seed("seed");
    let mut b = SeededRng::from_seed("seed");
    for _ in 0..100 {
        let x = a.next_f64();
        assert_eq!(x, b.next_f64());
        assert!((0.0..1.0).contains(&x));
    }
}
