// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Font size fitting: the largest size at which a string fits the width of its
// layout box.
//
// The first estimate divides the box width by the string's unit-scale width
// times 0.865 and overshoots; the size is then walked down in half-point steps
// until the measured width fits.

use page2pdf_core::FitMode;

use crate::font::FontMetrics;

/// Correction between nominal em and the average rendered glyph advance.
pub const WIDTH_CORRECTION: f32 = 0.865;

/// Decrement applied while the text is still too wide.
pub const FONT_SIZE_STEP: f32 = 0.5;

/// Size used when a box or string has no usable width.
pub const MIN_FONT_SIZE: f32 = 1.0;

/// Computes font sizes for text boxes using one font.
pub struct FitCalculator<'a> {
    font: &'a dyn FontMetrics,
    mode: FitMode,
}

impl<'a> FitCalculator<'a> {
    pub fn new(font: &'a dyn FontMetrics, mode: FitMode) -> Self {
        Self { font, mode }
    }

    pub fn font(&self) -> &'a dyn FontMetrics {
        self.font
    }

    /// Font size for `text` in a `width` × `height` box, in points.
    pub fn font_size(&self, text: &str, width: f32, height: f32) -> f32 {
        let size = self.fit_width(text, width);
        match self.mode {
            FitMode::Width => size,
            FitMode::WidthAndHeight => match self.height_cap(height) {
                Some(cap) => size.min(cap),
                None => size,
            },
        }
    }

    /// Largest half-point step from the initial estimate whose rendered width
    /// does not exceed `width`. Always positive.
    pub fn fit_width(&self, text: &str, width: f32) -> f32 {
        let unit_width = self.font.string_width(text);
        if width <= 0.0 || unit_width <= 0.0 {
            return MIN_FONT_SIZE;
        }

        let mut size = width * 1000.0 / (unit_width * WIDTH_CORRECTION);
        while self.font.width_at(text, size) > width {
            let next = size - FONT_SIZE_STEP;
            if next <= 0.0 {
                // Box narrower than one step allows: use the exact fit.
                return width * 1000.0 / unit_width;
            }
            size = next;
        }
        size
    }

    /// Size at which the font bounding box (with the same correction) fills
    /// `height`.
    fn height_cap(&self, height: f32) -> Option<f32> {
        let bbox_height = self.font.bbox_height();
        if height <= 0.0 || bbox_height <= 0.0 {
            return None;
        }
        Some(height * 1000.0 / (bbox_height * WIDTH_CORRECTION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::BuiltinFontMetrics;
    use crate::font::metrics::test_support::FixedMetrics;

    fn assert_maximal_step(fit: &FitCalculator<'_>, text: &str, width: f32) {
        let font = fit.font();
        let size = fit.fit_width(text, width);
        let initial = width * 1000.0 / (font.string_width(text) * WIDTH_CORRECTION);
        assert!(size > 0.0);
        assert!(
            font.width_at(text, size) <= width,
            "'{text}' at {size}pt is {} wide, box is {width}",
            font.width_at(text, size)
        );
        // Below one step the exact-fit fallback applies and the grid is left.
        if size < initial && size > FONT_SIZE_STEP {
            assert!(
                font.width_at(text, size + FONT_SIZE_STEP) > width,
                "'{text}' in {width}: {size} is not the largest fitting step"
            );
            let steps = (initial - size) / FONT_SIZE_STEP;
            assert!((steps - steps.round()).abs() < 1e-3, "size is off the half-point grid");
        }
    }

    #[test]
    fn helvetica_ab_in_100pt_box() {
        let font = BuiltinFontMetrics;
        let fit = FitCalculator::new(&font, FitMode::Width);
        let size = fit.fit_width("AB", 100.0);
        // Exact fit is 100 * 1000 / 1334 = 74.96pt; the walk lands just below.
        assert!(size <= 74.97 && size > 74.4, "got {size}");
        assert_maximal_step(&fit, "AB", 100.0);
    }

    #[test]
    fn result_fits_and_is_maximal_across_inputs() {
        let font = BuiltinFontMetrics;
        let fit = FitCalculator::new(&font, FitMode::Width);
        for text in ["a", "AB", "Hello", "The quick brown fox", "iiii", "WWWW", "x y"] {
            for width in [3.0, 10.0, 37.5, 100.0, 512.0, 2000.0] {
                assert_maximal_step(&fit, text, width);
            }
        }
    }

    #[test]
    fn monospace_sizes_are_predictable() {
        let font = FixedMetrics::default();
        let fit = FitCalculator::new(&font, FitMode::Width);
        // 4 chars × 500 = 2000 units; exact fit for 40pt is 20pt.
        let size = fit.fit_width("abcd", 40.0);
        assert!(size <= 20.0 && size > 19.5, "got {size}");
    }

    #[test]
    fn zero_width_box_uses_minimum() {
        let font = BuiltinFontMetrics;
        let fit = FitCalculator::new(&font, FitMode::Width);
        assert_eq!(fit.fit_width("AB", 0.0), MIN_FONT_SIZE);
        assert_eq!(fit.fit_width("AB", -5.0), MIN_FONT_SIZE);
    }

    #[test]
    fn widthless_text_uses_minimum() {
        let font = BuiltinFontMetrics;
        let fit = FitCalculator::new(&font, FitMode::Width);
        assert_eq!(fit.fit_width("", 100.0), MIN_FONT_SIZE);
    }

    #[test]
    fn tiny_box_never_goes_non_positive() {
        let font = BuiltinFontMetrics;
        let fit = FitCalculator::new(&font, FitMode::Width);
        let size = fit.fit_width("AB", 0.5);
        assert!(size > 0.0);
        assert!(font.width_at("AB", size) <= 0.5 + 1e-5, "got {size}");
    }

    #[test]
    fn width_mode_ignores_height() {
        let font = FixedMetrics::default();
        let fit = FitCalculator::new(&font, FitMode::Width);
        assert_eq!(fit.font_size("ab", 100.0, 1.0), fit.fit_width("ab", 100.0));
    }

    #[test]
    fn height_mode_caps_by_box_height() {
        let font = FixedMetrics::default();
        let fit = FitCalculator::new(&font, FitMode::WidthAndHeight);
        // Wide box, short box: bbox height is 1000 units, cap = 10 / 0.865.
        let size = fit.font_size("ab", 1000.0, 10.0);
        assert!((size - 10.0 / WIDTH_CORRECTION).abs() < 1e-4, "got {size}");
        // Narrow box: the width still wins.
        let narrow = fit.font_size("ab", 10.0, 1000.0);
        assert_eq!(narrow, fit.fit_width("ab", 10.0));
    }
}
