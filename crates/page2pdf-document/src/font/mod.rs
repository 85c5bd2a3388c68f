// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Text-layer fonts: metrics for fitting and placement, plus what the PDF
// writer needs to reference the font.

pub mod builtin;
pub mod metrics;
pub mod truetype;

use std::path::Path;

use page2pdf_core::error::Result;
use tracing::info;

pub use builtin::BuiltinFontMetrics;
pub use metrics::FontMetrics;
pub use truetype::TrueTypeFont;

/// The font of one conversion run, loaded once and shared by every page.
#[derive(Debug)]
pub enum TextFont {
    /// Standard Helvetica, referenced by name and not embedded.
    Helvetica(BuiltinFontMetrics),
    /// A TrueType font supplied by the user, embedded in the output.
    TrueType(TrueTypeFont),
}

impl TextFont {
    /// Load the TrueType font at `path`, or fall back to built-in Helvetica.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Ok(Self::TrueType(TrueTypeFont::open(path)?)),
            None => {
                info!("Using built-in Helvetica for the text layer");
                Ok(Self::helvetica())
            }
        }
    }

    pub fn helvetica() -> Self {
        Self::Helvetica(BuiltinFontMetrics)
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Helvetica(_) => "Helvetica",
            Self::TrueType(font) => font.name(),
        }
    }

    fn metrics(&self) -> &dyn FontMetrics {
        match self {
            Self::Helvetica(m) => m,
            Self::TrueType(font) => font,
        }
    }
}

impl FontMetrics for TextFont {
    fn string_width(&self, text: &str) -> f32 {
        self.metrics().string_width(text)
    }

    fn ascent(&self, text: &str) -> f32 {
        self.metrics().ascent(text)
    }

    fn descent(&self, text: &str) -> f32 {
        self.metrics().descent(text)
    }

    fn bbox_height(&self) -> f32 {
        self.metrics().bbox_height()
    }
}
