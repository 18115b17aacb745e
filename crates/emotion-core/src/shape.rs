//! Emotion categories and the shape knobs each one drives.

/// Numeric knobs for one emotion's outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeParameters {
    /// Scales the number of extra outline points.
    pub complexity: f64,
    /// Above 1.0 pulls control points inward, below 0.7 pushes them out.
    pub smoothness: f64,
    /// Radius multiplier.
    pub size: f64,
    /// Radial variance multiplier; above 0.5 also adds angular jitter.
    pub spikiness: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Emotion {
    Happy,
    Excited,
    Sad,
    Angry,
    Calm,
    Anxious,
    Love,
    Peaceful,
    Energetic,
    Melancholy,
    Confident,
    Dreamy,
    Mysterious,
    Playful,
    Default,
}

impl Emotion {
    /// Detection priority; the first name found in the seed wins.
    pub const ALL: [Emotion; 15] = [
        Emotion::Happy,
        Emotion::Excited,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Calm,
        Emotion::Anxious,
        Emotion::Love,
        Emotion::Peaceful,
        Emotion::Energetic,
        Emotion::Melancholy,
        Emotion::Confident,
        Emotion::Dreamy,
        Emotion::Mysterious,
        Emotion::Playful,
        Emotion::Default,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Excited => "excited",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Calm => "calm",
            Emotion::Anxious => "anxious",
            Emotion::Love => "love",
            Emotion::Peaceful => "peaceful",
            Emotion::Energetic => "energetic",
            Emotion::Melancholy => "melancholy",
            Emotion::Confident => "confident",
            Emotion::Dreamy => "dreamy",
            Emotion::Mysterious => "mysterious",
            Emotion::Playful => "playful",
            Emotion::Default => "default",
        }
    }

    pub fn shape(self) -> ShapeParameters {
        let (complexity, smoothness, size, spikiness) = match self {
            Emotion::Happy => (1.2, 0.8, 1.1, 0.2),
            Emotion::Excited => (1.5, 0.6, 1.3, 0.8),
            Emotion::Sad => (0.7, 1.2, 0.8, 0.1),
            Emotion::Angry => (1.8, 0.3, 1.2, 1.5),
            Emotion::Calm => (0.5, 1.5, 1.0, 0.0),
            Emotion::Anxious => (2.0, 0.4, 0.9, 1.2),
            Emotion::Love => (1.0, 1.3, 1.1, 0.3),
            Emotion::Peaceful => (0.6, 1.4, 1.0, 0.1),
            Emotion::Energetic => (1.6, 0.7, 1.2, 0.9),
            Emotion::Melancholy => (0.8, 1.1, 0.9, 0.2),
            Emotion::Confident => (1.1, 0.9, 1.2, 0.6),
            Emotion::Dreamy => (0.9, 1.6, 1.1, 0.0),
            Emotion::Mysterious => (1.4, 0.8, 1.0, 0.7),
            Emotion::Playful => (1.7, 0.9, 1.1, 0.5),
            Emotion::Default => (1.0, 1.0, 1.0, 0.4),
        };
        ShapeParameters {
            complexity,
            smoothness,
            size,
            spikiness,
        }
    }

    /// Case-insensitive substring match in priority order.
    pub fn detect(seed: &str) -> Emotion {
        let lowered = seed.to_lowercase();
        Emotion::ALL
            .into_iter()
            .find(|e| lowered.contains(e.name()))
            .unwrap_or(Emotion::Default)
    }
}

impl Default for ShapeParameters {
    fn default() -> Self {
        Emotion::Default.shape()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detection_respects_priority_order() {
        // "happy" is checked before "excited"
        assert_eq!(Emotion::detect("excited and HAPPY"), Emotion::Happy);
        assert_eq!(Emotion::detect("so Anxious"), Emotion::Anxious);
        assert_eq!(Emotion::detect("nothing here"), Emotion::Default);
        assert_eq!(Emotion::detect(""), Emotion::Default);
    }

    #[test]
    fn substring_match_is_not_word_bounded() {
        // "peaceful" contains no earlier name, but "lovely" contains "love"
        assert_eq!(Emotion::detect("peaceful"), Emotion::Peaceful);
        assert_eq!(Emotion::detect("lovely"), Emotion::Love);
    }
}
