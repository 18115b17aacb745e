//! Deterministic blob outlines for the SVG art display.
//!
//! Same seed text, same path string. The draw order from [`SeededRng`] is
//! fixed: point count first, then per point the optional angular jitter, the
//! radial offset and (for anxious shapes) the modulation phase.

use crate::constants::*;
use crate::rng::SeededRng;
use crate::shape::{Emotion, ShapeParameters};
use glam::DVec2;
use std::f64::consts::{PI, TAU};
use std::fmt;

/// One segment of a closed outline in SVG path terms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(DVec2),
    QuadTo { ctrl: DVec2, end: DVec2 },
}

/// A closed smooth path: one `MoveTo` followed by one `QuadTo` per point.
#[derive(Clone, Debug, PartialEq)]
pub struct Outline {
    pub emotion: Emotion,
    pub commands: Vec<PathCommand>,
}

/// Raw perturbed points before smoothing.
#[derive(Clone, Debug)]
pub struct BlobPoints {
    pub emotion: Emotion,
    pub params: ShapeParameters,
    pub points: Vec<DVec2>,
}

#[inline]
pub fn canvas_center() -> DVec2 {
    DVec2::splat(CANVAS_SIZE / 2.0)
}

#[inline]
fn normalized_seed(seed: &str) -> &str {
    if seed.is_empty() {
        "default"
    } else {
        seed
    }
}

/// Number of outline points for a first draw `r` in [0, 1).
#[inline]
pub fn point_count(r: f64, complexity: f64) -> usize {
    BASE_POINTS + (r * POINT_SPREAD * complexity).floor() as usize
}

pub fn generate_points(seed: &str) -> BlobPoints {
    let seed = normalized_seed(seed);
    let mut rng = SeededRng::from_seed(seed);
    let emotion = Emotion::detect(seed);
    let params = emotion.shape();

    let center = canvas_center();
    let n = point_count(rng.next_f64(), params.complexity);
    let radius = CANVAS_SIZE * RADIUS_FRACTION * params.size;
    let variance = CANVAS_SIZE * VARIANCE_FRACTION * (1.0 + params.spikiness);

    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        let angle = (i as f64 / n as f64) * TAU;
        let angle_offset = if params.spikiness > SPIKY_THRESHOLD {
            (rng.next_f64() - 0.5) * PI * ANGLE_JITTER_SCALE
        } else {
            0.0
        };
        let r = radius + (rng.next_f64() - 0.5) * variance * 2.0;
        let modulation = match emotion {
            Emotion::Excited | Emotion::Energetic => 1.0 + (angle * 4.0).sin() * 0.3,
            Emotion::Anxious => 1.0 + (angle * 6.0 + rng.next_f64() * PI).sin() * 0.4,
            _ => 1.0,
        };
        let a = angle + angle_offset;
        points.push(center + DVec2::new(a.cos(), a.sin()) * r * modulation);
    }

    BlobPoints {
        emotion,
        params,
        points,
    }
}

/// Move `p` toward or away from `center` depending on `smoothness`.
#[inline]
pub fn control_point(p: DVec2, center: DVec2, smoothness: f64) -> DVec2 {
    if smoothness > SMOOTH_PULL_THRESHOLD {
        let pull = (smoothness - SMOOTH_PULL_THRESHOLD) * SMOOTH_PULL_GAIN;
        p + (center - p) * pull
    } else if smoothness < SHARP_PUSH_THRESHOLD {
        let push = (SHARP_PUSH_THRESHOLD - smoothness) * SHARP_PUSH_GAIN;
        p + (p - center) * push
    } else {
        p
    }
}

pub fn build_outline(blob: &BlobPoints) -> Outline {
    let pts = &blob.points;
    let mut commands = Vec::with_capacity(pts.len() + 1);
    if let (Some(first), Some(last)) = (pts.first(), pts.last()) {
        commands.push(PathCommand::MoveTo((*last + *first) / 2.0));
        let center = canvas_center();
        for (i, p1) in pts.iter().enumerate() {
            let p2 = pts[(i + 1) % pts.len()];
            commands.push(PathCommand::QuadTo {
                ctrl: control_point(*p1, center, blob.params.smoothness),
                end: (*p1 + p2) / 2.0,
            });
        }
    }
    Outline {
        emotion: blob.emotion,
        commands,
    }
}

pub fn generate_outline(seed: &str) -> Outline {
    build_outline(&generate_points(seed))
}

/// SVG `d` attribute for `seed`.
pub fn generate_blob_path(seed: &str) -> String {
    generate_outline(seed).to_string()
}

/// Stacked outlines for richer art, one per `"{seed}_layer_{i}"`.
pub fn generate_layered_paths(seed: &str, layers: usize) -> Vec<String> {
    (0..layers)
        .map(|layer| generate_blob_path(&format!("{seed}_layer_{layer}")))
        .collect()
}

impl Outline {
    pub fn start(&self) -> Option<DVec2> {
        match self.commands.first() {
            Some(PathCommand::MoveTo(p)) => Some(*p),
            _ => None,
        }
    }

    pub fn end(&self) -> Option<DVec2> {
        match self.commands.last() {
            Some(PathCommand::QuadTo { end, .. }) => Some(*end),
            Some(PathCommand::MoveTo(p)) => Some(*p),
            None => None,
        }
    }

    pub fn segment_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::QuadTo { .. }))
            .count()
    }
}

impl fmt::Display for Outline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match cmd {
                PathCommand::MoveTo(p) => write!(f, "M {} {}", p.x, p.y)?,
                PathCommand::QuadTo { ctrl, end } => {
                    write!(f, "Q {} {} {} {}", ctrl.x, ctrl.y, end.x, end.y)?
                }
            }
        }
        Ok(())
    }
}
