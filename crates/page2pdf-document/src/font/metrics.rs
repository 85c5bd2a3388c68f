// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Font metrics abstraction used by the fit calculator and text layer.
//
// All raw metrics are in thousandths of an em (glyph space units, as in AFM
// files and PDF width arrays). The `*_at` helpers scale them to points for a
// given font size.

/// Horizontal and vertical metrics of the text-layer font.
pub trait FontMetrics {
    /// Sum of advance widths of `text`, in thousandths of an em.
    fn string_width(&self, text: &str) -> f32;

    /// Highest point reached by `text` above the baseline (>= 0).
    fn ascent(&self, text: &str) -> f32;

    /// Lowest point reached by `text` relative to the baseline (<= 0).
    fn descent(&self, text: &str) -> f32;

    /// Height of the font bounding box.
    fn bbox_height(&self) -> f32;

    /// Rendered width of `text` at `size` points.
    fn width_at(&self, text: &str, size: f32) -> f32 {
        self.string_width(text) * size / 1000.0
    }

    fn ascent_at(&self, text: &str, size: f32) -> f32 {
        self.ascent(text) * size / 1000.0
    }

    fn descent_at(&self, text: &str, size: f32) -> f32 {
        self.descent(text) * size / 1000.0
    }
}
