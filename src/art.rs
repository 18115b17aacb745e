use crate::constants::{ART_FILL_OPACITY, ART_STROKE_WIDTH};
use emotion_core::{generate_blob_path, Palette};
use web_sys as web;

/// SVG outline plus page background, restyled whenever the emotion changes.
pub struct ArtDisplay {
    path: web::Element,
    document: web::Document,
}

impl ArtDisplay {
    pub fn new(document: &web::Document, path: web::Element) -> Self {
        Self {
            path,
            document: document.clone(),
        }
    }

    /// Regenerate the outline for `text` and paint it with `palette`.
    pub fn show(&self, text: &str, palette: &Palette) {
        // empty text falls back to the default outline inside the generator
        let d = generate_blob_path(text);
        _ = self.path.set_attribute("d", &d);
        _ = self.path.set_attribute("fill", &palette.primary.to_hex());
        _ = self
            .path
            .set_attribute("fill-opacity", &ART_FILL_OPACITY.to_string());
        _ = self.path.set_attribute("stroke", &palette.accent.to_hex());
        _ = self
            .path
            .set_attribute("stroke-width", &ART_STROKE_WIDTH.to_string());
        self.set_background(&palette.background);
    }

    #[inline]
    fn set_background(&self, background: &str) {
        if let Some(body) = self.document.body() {
            _ = body.style().set_property("background", background);
        }
    }
}
