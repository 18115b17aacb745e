//! Emotion keyword palettes.
//!
//! Text is matched against per-category keyword lists. One hit picks that
//! category's colors, several hits blend up to three categories, and unknown
//! text gets a hue-rotated palette derived from its hash.

use crate::rng::string_hash;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("expected 6 hex digits, got {0:?}")]
    BadLength(String),
    #[error("invalid hex digit in {0:?}")]
    BadDigit(String),
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels scaled to [0, 1].
    pub fn to_unit(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parse `#rrggbb` or `rrggbb` (case-insensitive).
pub fn parse_hex(hex: &str) -> Result<Rgb, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(ColorError::BadLength(hex.to_string()));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| ColorError::BadDigit(hex.to_string()))
    };
    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Lenient parse: malformed input becomes black.
pub fn hex_to_rgb(hex: &str) -> Rgb {
    parse_hex(hex).unwrap_or_else(|e| {
        log::warn!("color fallback to black: {e}");
        Rgb::BLACK
    })
}

/// Linear mix of two colors; `ratio` 0 is all `a`, 1 is all `b`.
pub fn blend(a: Rgb, b: Rgb, ratio: f64) -> Rgb {
    let mix = |x: u8, y: u8| (x as f64 * (1.0 - ratio) + y as f64 * ratio).round() as u8;
    Rgb::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
}

/// HSL to RGB with `h` in degrees, `s` and `l` in percent.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let l = l / 100.0;
    let a = s * l.min(1.0 - l) / 100.0;
    let f = |n: f64| {
        let k = (n + h / 30.0) % 12.0;
        let c = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        (255.0 * c).round() as u8
    };
    Rgb::new(f(0.0), f(8.0), f(4.0))
}

#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub accent: Rgb,
    /// CSS background value for the page behind the canvas.
    pub background: String,
}

impl Default for Palette {
    fn default() -> Self {
        DEFAULT_ENTRY.palette()
    }
}

pub struct PaletteEntry {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub primary: Rgb,
    pub secondary: Rgb,
    pub accent: Rgb,
    pub background: &'static str,
}

impl PaletteEntry {
    pub fn palette(&self) -> Palette {
        Palette {
            primary: self.primary,
            secondary: self.secondary,
            accent: self.accent,
            background: self.background.to_string(),
        }
    }

    fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|k| normalized.contains(k))
    }
}

macro_rules! entry {
    ($name:literal, [$($kw:literal),* $(,)?], $p:expr, $s:expr, $a:expr, $bg:literal) => {
        PaletteEntry {
            name: $name,
            keywords: &[$($kw),*],
            primary: hex($p),
            secondary: hex($s),
            accent: hex($a),
            background: $bg,
        }
    };
}

const fn nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

const fn hex(v: &str) -> Rgb {
    let b = v.as_bytes();
    Rgb::new(
        nibble(b[1]) << 4 | nibble(b[2]),
        nibble(b[3]) << 4 | nibble(b[4]),
        nibble(b[5]) << 4 | nibble(b[6]),
    )
}

pub const DEFAULT_ENTRY: PaletteEntry = entry!(
    "default",
    [],
    "#ffffff",
    "#cccccc",
    "#aaaaaa",
    "linear-gradient(to top, #cfd9df 0%, #e2ebf0 100%)"
);

pub const PALETTES: &[PaletteEntry] = &[
    entry!("happy", ["happy", "joy", "joyful", "fun", "smile", "cheerful", "delighted", "elated", "blissful", "glad", "pleased", "content", "upbeat"],
        "#FFD700", "#FF69B4", "#FFFF00", "linear-gradient(120deg, #f6d365 0%, #fda085 100%)"),
    entry!("excited", ["excited", "thrilled", "enthusiastic", "pumped", "hyped", "energized", "exhilarated", "ecstatic"],
        "#FF6B35", "#F7931E", "#FFD23F", "linear-gradient(45deg, #ff9a56 0%, #ff6b35 50%, #f7931e 100%)"),
    entry!("sad", ["sad", "cry", "crying", "tear", "tears", "blue", "depress", "depressed", "down", "gloomy", "melancholy", "sorrowful", "heartbroken"],
        "#1E90FF", "#9370DB", "#00BFFF", "linear-gradient(to top, #30cfd0 0%, #330867 100%)"),
    entry!("angry", ["angry", "mad", "rage", "hate", "furious", "livid", "enraged", "irritated", "annoyed", "frustrated", "pissed"],
        "#FF4500", "#FF8C00", "#FF0000", "linear-gradient(to right, #ed213a, #93291e)"),
    entry!("calm", ["calm", "peace", "peaceful", "relax", "relaxed", "chill", "zen", "serene", "tranquil", "quiet", "still"],
        "#20B2AA", "#3CB371", "#00FA9A", "linear-gradient(to top, #96fbc4 0%, #f9f586 100%)"),
    entry!("anxious", ["anxious", "worried", "stress", "stressed", "nervous", "tense", "uneasy", "restless", "panicked", "overwhelmed"],
        "#8B5A3C", "#A0522D", "#CD853F", "linear-gradient(135deg, #d4a574 0%, #8b5a3c 100%)"),
    entry!("love", ["love", "loving", "adore", "romantic", "affection", "crush", "infatuated", "smitten", "passionate"],
        "#FF1493", "#FF69B4", "#FFB6C1", "linear-gradient(45deg, #ff9a9e 0%, #fad0c4 100%)"),
    entry!("energetic", ["energetic", "active", "dynamic", "lively", "vibrant", "spirited", "bouncy", "vivacious"],
        "#32CD32", "#00FF7F", "#ADFF2F", "linear-gradient(60deg, #96fbc4 0%, #f9f586 100%)"),
    entry!("melancholy", ["melancholy", "wistful", "pensive", "contemplative", "reflective", "longing", "yearning"],
        "#4B0082", "#663399", "#9370DB", "linear-gradient(135deg, #667eea 0%, #764ba2 100%)"),
    entry!("confident", ["confident", "bold", "brave", "strong", "powerful", "determined", "assertive", "fearless"],
        "#FF4500", "#DC143C", "#FFD700", "linear-gradient(45deg, #f093fb 0%, #f5576c 100%)"),
    entry!("dreamy", ["dreamy", "whimsical", "ethereal", "floating", "surreal", "magical", "enchanted"],
        "#DDA0DD", "#E6E6FA", "#F0E68C", "linear-gradient(135deg, #ffecd2 0%, #fcb69f 100%)"),
    entry!("mysterious", ["mysterious", "dark", "enigmatic", "shadowy", "secretive", "hidden", "unknown"],
        "#2F4F4F", "#483D8B", "#8A2BE2", "linear-gradient(225deg, #2c3e50 0%, #4a6741 100%)"),
    entry!("playful", ["playful", "silly", "funny", "giggly", "mischievous", "childlike", "carefree"],
        "#FF69B4", "#00CED1", "#FFD700", "linear-gradient(90deg, #ffecd2 0%, #fcb69f 50%, #a8edea 100%)"),
    entry!("nostalgic", ["nostalgic", "reminiscent", "sentimental", "wistful", "longing", "remembering"],
        "#D2691E", "#CD853F", "#F4A460", "linear-gradient(135deg, #ffeaa7 0%, #fab1a0 100%)"),
    entry!("grateful", ["grateful", "thankful", "appreciative", "blessed", "fortunate", "honored"],
        "#FFD700", "#FFA500", "#FF6347", "linear-gradient(45deg, #fdcb6e 0%, #e17055 100%)"),
    entry!("overwhelmed", ["overwhelmed", "confused", "chaotic", "scattered", "lost", "dizzy"],
        "#696969", "#808080", "#A9A9A9", "linear-gradient(135deg, #bdc3c7 0%, #2c3e50 100%)"),
    entry!("hopeful", ["hopeful", "optimistic", "positive", "bright", "promising", "encouraging"],
        "#7FB3D3", "#68BBE3", "#0E4B99", "linear-gradient(120deg, #89f7fe 0%, #66a6ff 100%)"),
    entry!("creative", ["creative", "inspired", "artistic", "imaginative", "innovative", "expressive"],
        "#9932CC", "#FF1493", "#00CED1", "linear-gradient(45deg, #667eea 0%, #764ba2 50%, #f093fb 100%)"),
];

/// Categories whose keywords occur in `text`, in table order.
pub fn detect_emotions(text: &str) -> Vec<&'static PaletteEntry> {
    let normalized = text.trim().to_lowercase();
    PALETTES.iter().filter(|e| e.matches(&normalized)).collect()
}

/// Blend the first category with at most two more, each weighted `1/(i+1)`.
pub fn mixed_palette(entries: &[&PaletteEntry]) -> Palette {
    let Some(first) = entries.first() else {
        return Palette::default();
    };
    let mut mixed = first.palette();
    for (i, e) in entries.iter().enumerate().take(3).skip(1) {
        let ratio = 1.0 / (i as f64 + 1.0);
        mixed.primary = blend(mixed.primary, e.primary, ratio);
        mixed.secondary = blend(mixed.secondary, e.secondary, ratio);
        mixed.accent = blend(mixed.accent, e.accent, ratio);
    }
    mixed
}

/// Three hues 120 degrees apart, seeded by the text hash.
pub fn hash_palette(text: &str) -> Palette {
    let hash = string_hash(text) as i64;
    let hue1 = (hash.abs() % 360) as f64;
    let hue2 = (hue1 + 120.0) % 360.0;
    let hue3 = (hue1 + 240.0) % 360.0;
    let primary = hsl_to_rgb(hue1, 70.0, 60.0);
    let secondary = hsl_to_rgb(hue2, 60.0, 70.0);
    let accent = hsl_to_rgb(hue3, 80.0, 50.0);
    Palette {
        primary,
        secondary,
        accent,
        background: format!(
            "linear-gradient(135deg, {}40, {}40)",
            primary.to_hex(),
            secondary.to_hex()
        ),
    }
}

pub fn palette_for(text: &str) -> Palette {
    let normalized = text.trim().to_lowercase();
    if normalized.is_empty() {
        return Palette::default();
    }
    let hits = detect_emotions(&normalized);
    if hits.is_empty() {
        log::debug!("no palette keyword in {normalized:?}, using hash palette");
        hash_palette(&normalized)
    } else {
        log::debug!(
            "palette keywords: {:?}",
            hits.iter().map(|e| e.name).collect::<Vec<_>>()
        );
        mixed_palette(&hits)
    }
}
