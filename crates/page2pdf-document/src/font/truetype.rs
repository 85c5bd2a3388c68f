// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// TrueType/OpenType text-layer font. Metrics are read once with `ttf-parser`
// and cached per character; the raw bytes are kept for embedding.

use std::collections::HashMap;
use std::path::Path;

use page2pdf_core::error::{Page2PdfError, Result};
use tracing::{debug, info, instrument};
use ttf_parser::{Face, GlyphId};

use super::metrics::FontMetrics;

/// Per-glyph metrics scaled to thousandths of an em.
#[derive(Debug, Clone, Copy, Default)]
struct GlyphMetrics {
    advance: f32,
    /// Vertical extent of the outline; `None` for blank glyphs.
    extent: Option<(f32, f32)>,
}

/// A TrueType font loaded from a file.
#[derive(Debug)]
pub struct TrueTypeFont {
    name: String,
    bytes: Vec<u8>,
    glyphs: HashMap<char, GlyphMetrics>,
    /// Metrics of `.notdef`, used for unmapped characters.
    missing: GlyphMetrics,
    ascender: f32,
    descender: f32,
    bbox_height: f32,
}

impl TrueTypeFont {
    /// Load a font file from disk.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|err| {
            Page2PdfError::FontError(format!("failed to read {}: {}", path.display(), err))
        })?;
        let fallback_name = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "TrueType".to_string());
        Self::from_bytes(bytes, &fallback_name)
    }

    /// Parse a font from raw bytes; `fallback_name` is used when the font has
    /// no family name.
    pub fn from_bytes(bytes: Vec<u8>, fallback_name: &str) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Page2PdfError::FontError("font file is empty".into()));
        }

        let face = Face::parse(&bytes, 0)
            .map_err(|err| Page2PdfError::FontError(format!("failed to parse font: {err}")))?;

        let units_per_em = face.units_per_em();
        if units_per_em == 0 {
            return Err(Page2PdfError::FontError("font reports zero units per em".into()));
        }
        let scale = 1000.0 / f32::from(units_per_em);

        let glyph_metrics = |glyph: GlyphId| GlyphMetrics {
            advance: face
                .glyph_hor_advance(glyph)
                .map_or(0.0, |a| f32::from(a) * scale),
            extent: face
                .glyph_bounding_box(glyph)
                .map(|r| (f32::from(r.y_min) * scale, f32::from(r.y_max) * scale)),
        };

        // Iterate through the BMP; characters beyond it fall back to .notdef.
        let mut glyphs = HashMap::new();
        for codepoint in 0..=0xFFFF_u32 {
            if let Some(c) = char::from_u32(codepoint) {
                if let Some(glyph) = face.glyph_index(c) {
                    glyphs.insert(c, glyph_metrics(glyph));
                }
            }
        }
        let missing = glyph_metrics(GlyphId(0));

        let bbox = face.global_bounding_box();
        let bbox_height = (i32::from(bbox.y_max) - i32::from(bbox.y_min)) as f32 * scale;

        // Only Unicode-encoded records decode; Mac Roman entries are skipped.
        let name = face
            .names()
            .into_iter()
            .filter(|name| name.name_id == ttf_parser::name_id::FAMILY)
            .find_map(|name| name.to_string())
            .unwrap_or_else(|| fallback_name.to_string());

        let ascender = f32::from(face.ascender()) * scale;
        let descender = f32::from(face.descender()) * scale;

        debug!(
            mapped_chars = glyphs.len(),
            units_per_em, ascender, descender, "TrueType metrics cached"
        );
        info!(font = %name, "TrueType font loaded");

        Ok(Self {
            name,
            bytes,
            glyphs,
            missing,
            ascender,
            descender,
            bbox_height,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw font program, for embedding.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn glyph(&self, c: char) -> GlyphMetrics {
        self.glyphs.get(&c).copied().unwrap_or(self.missing)
    }

    /// Combined vertical extent of the outlines in `text`, if any has one.
    fn extent(&self, text: &str) -> Option<(f32, f32)> {
        text.chars()
            .filter_map(|c| self.glyph(c).extent)
            .reduce(|(lo, hi), (y_min, y_max)| (lo.min(y_min), hi.max(y_max)))
    }
}

impl FontMetrics for TrueTypeFont {
    fn string_width(&self, text: &str) -> f32 {
        text.chars().map(|c| self.glyph(c).advance).sum()
    }

    fn ascent(&self, text: &str) -> f32 {
        self.extent(text)
            .map_or(self.ascender, |(_, y_max)| y_max)
            .max(0.0)
    }

    fn descent(&self, text: &str) -> f32 {
        self.extent(text)
            .map_or(self.descender, |(y_min, _)| y_min)
            .min(0.0)
    }

    fn bbox_height(&self) -> f32 {
        self.bbox_height
    }
}
