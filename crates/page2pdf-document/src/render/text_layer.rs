// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Text layer: every text-bearing object at the chosen level becomes one or
// more strings sized to the object's bounding box.

use page2pdf_core::{ContentLevel, ContentType, FitMode, Rect};
use page2pdf_layout::PageLayout;
use tracing::debug;

use super::TextDraw;
use crate::fit::FitCalculator;
use crate::font::FontMetrics;
use crate::split::split_region;

/// Distance from the box bottom to the baseline, in points.
///
/// Text shorter than its box is centred vertically; otherwise the descender
/// sits on the box bottom.
pub fn baseline_offset(font: &dyn FontMetrics, text: &str, font_size: f32, box_height: f32) -> f32 {
    let ascent = font.ascent_at(text, font_size);
    let descent = font.descent_at(text, font_size);
    let text_height = descent.abs() + ascent;
    if text_height < box_height {
        descent - (box_height - text_height) / 2.0
    } else {
        descent
    }
}

pub struct TextLayerRenderer<'a> {
    font: &'a dyn FontMetrics,
    fit: FitCalculator<'a>,
}

impl<'a> TextLayerRenderer<'a> {
    pub fn new(font: &'a dyn FontMetrics, mode: FitMode) -> Self {
        Self {
            font,
            fit: FitCalculator::new(font, mode),
        }
    }

    /// Text draws for every object at `level` that has text and coordinates.
    pub fn render(&self, layout: &PageLayout, level: ContentLevel) -> Vec<TextDraw> {
        let page_height = layout.height as f32;
        let mut draws = Vec::new();

        for object in layout.content(level) {
            let Some(text) = object.text() else {
                continue;
            };
            let Some(bounds) = object.bounding_box() else {
                debug!(id = object.id, "Text object without coordinates skipped");
                continue;
            };

            if matches!(object.content_type, ContentType::Region(_)) {
                let split = split_region(&self.fit, text, bounds);
                for line in split.lines.into_iter().filter(|l| !l.text.is_empty()) {
                    draws.push(self.place(line.text, line.bounds, split.font_size, page_height));
                }
            } else {
                let size = self
                    .fit
                    .font_size(text, bounds.width() as f32, bounds.height() as f32);
                draws.push(self.place(text.to_string(), bounds, size, page_height));
            }
        }

        debug!(level = %level, draws = draws.len(), "Text layer laid out");
        draws
    }

    fn place(&self, text: String, bounds: Rect, font_size: f32, page_height: f32) -> TextDraw {
        let offset = baseline_offset(self.font, &text, font_size, bounds.height() as f32);
        TextDraw {
            x: bounds.left as f32,
            y: page_height - bounds.bottom as f32 - offset,
            font_size,
            text,
        }
    }
}

#[cfg(test)]
mod tests {
    use page2pdf_core::{Point, Polygon, RegionKind};
    use page2pdf_layout::{Region, TextLine, Word};

    use super::*;
    use crate::font::BuiltinFontMetrics;
    use crate::font::metrics::test_support::FixedMetrics;

    fn rect(left: i32, top: i32, right: i32, bottom: i32) -> Polygon {
        Polygon::new(vec![
            Point::new(left, top),
            Point::new(right, top),
            Point::new(right, bottom),
            Point::new(left, bottom),
        ])
    }

    fn text_region(id: &str, coords: Polygon, text: &str) -> Region {
        let mut region = Region::new(id, RegionKind::Text);
        region.coords = coords;
        region.text = Some(text.to_string());
        region
    }

    #[test]
    fn short_text_is_centred() {
        let font = FixedMetrics::default();
        // At 10pt: ascent 8, descent -2, text height 10; box 30 leaves 20.
        let offset = baseline_offset(&font, "x", 10.0, 30.0);
        assert!((offset - (-2.0 - 10.0)).abs() < 1e-5, "got {offset}");
    }

    #[test]
    fn tall_text_sits_on_descent() {
        let font = FixedMetrics::default();
        assert_eq!(baseline_offset(&font, "x", 10.0, 10.0), -2.0);
        assert_eq!(baseline_offset(&font, "x", 10.0, 4.0), -2.0);
    }

    #[test]
    fn single_region_is_placed_in_pdf_space() {
        let mut layout = PageLayout::new(1000, 1000);
        layout
            .regions
            .push(text_region("r1", rect(100, 100, 300, 140), "Hello"));

        let font = BuiltinFontMetrics;
        let renderer = TextLayerRenderer::new(&font, FitMode::Width);
        let draws = renderer.render(&layout, ContentLevel::Region);

        assert_eq!(draws.len(), 1);
        let draw = &draws[0];
        assert_eq!(draw.text, "Hello");
        assert_eq!(draw.x, 100.0);
        assert!(font.width_at("Hello", draw.font_size) <= 200.0);

        let offset = baseline_offset(&font, "Hello", draw.font_size, 40.0);
        assert!((draw.y - (1000.0 - 140.0 - offset)).abs() < 1e-4);
        // The baseline lies inside the box, above its bottom edge.
        assert!(draw.y > 860.0 && draw.y < 900.0, "baseline at {}", draw.y);
    }

    #[test]
    fn multi_line_region_yields_one_draw_per_line() {
        let mut layout = PageLayout::new(1000, 1000);
        layout
            .regions
            .push(text_region("r1", rect(0, 0, 200, 40), "Hello\nWorld"));

        let font = BuiltinFontMetrics;
        let renderer = TextLayerRenderer::new(&font, FitMode::Width);
        let draws = renderer.render(&layout, ContentLevel::Region);

        assert_eq!(draws.len(), 2);
        assert_eq!(draws[0].text, "Hello");
        assert_eq!(draws[1].text, "World");
        assert_eq!(draws[0].font_size, draws[1].font_size);
        assert!(draws[0].y > draws[1].y, "first line must be above the second");
    }

    #[test]
    fn non_text_regions_and_empty_text_are_skipped() {
        let mut layout = PageLayout::new(500, 500);
        let mut image = Region::new("img", RegionKind::Image);
        image.coords = rect(0, 0, 100, 100);
        layout.regions.push(image);
        layout.regions.push(text_region("empty", rect(0, 0, 100, 100), ""));
        layout
            .regions
            .push(text_region("nocoords", Polygon::default(), "orphan"));

        let font = BuiltinFontMetrics;
        let renderer = TextLayerRenderer::new(&font, FitMode::Width);
        assert!(renderer.render(&layout, ContentLevel::Region).is_empty());
    }

    #[test]
    fn word_level_draws_each_word() {
        let mut region = text_region("r1", rect(0, 0, 400, 50), "two words");
        let mut line = TextLine {
            id: "l1".into(),
            coords: rect(0, 0, 400, 50),
            text: Some("two words".into()),
            words: Vec::new(),
        };
        for (i, (text, left, right)) in [("two", 0, 150), ("words", 200, 400)].iter().enumerate() {
            line.words.push(Word {
                id: format!("w{i}"),
                coords: rect(*left, 0, *right, 50),
                text: Some((*text).to_string()),
                glyphs: Vec::new(),
            });
        }
        region.lines.push(line);
        let mut layout = PageLayout::new(400, 100);
        layout.regions.push(region);

        let font = BuiltinFontMetrics;
        let renderer = TextLayerRenderer::new(&font, FitMode::Width);
        let draws = renderer.render(&layout, ContentLevel::Word);

        assert_eq!(draws.len(), 2);
        assert_eq!(draws[0].text, "two");
        assert_eq!(draws[0].x, 0.0);
        assert_eq!(draws[1].text, "words");
        assert_eq!(draws[1].x, 200.0);
    }
}
