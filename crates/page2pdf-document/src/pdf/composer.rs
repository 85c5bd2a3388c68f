// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page composition: decides what is drawn on a page for a given conversion
// configuration, independent of how the PDF is serialised.

use page2pdf_core::ConversionConfig;
use page2pdf_layout::PageLayout;
use tracing::{debug, instrument};

use crate::font::TextFont;
use crate::render::{PagePlan, TextLayerRenderer, render_outlines};

/// Builds the drawing plan of each page.
pub struct PageComposer<'a> {
    config: &'a ConversionConfig,
    font: &'a TextFont,
}

impl<'a> PageComposer<'a> {
    pub fn new(config: &'a ConversionConfig, font: &'a TextFont) -> Self {
        Self { config, font }
    }

    /// Plan one page. The page is as large as the layout, one point per
    /// pixel; outlines are listed level by level, coarsest first.
    #[instrument(skip_all, fields(width = layout.width, height = layout.height))]
    pub fn compose(&self, layout: &PageLayout) -> PagePlan {
        let mut plan = PagePlan::new(layout.width as f32, layout.height as f32);
        plan.visible_text = self.config.visible_text;

        if let Some(level) = self.config.text_source {
            let renderer = TextLayerRenderer::new(self.font, self.config.fit_mode);
            plan.text = renderer.render(layout, level);
        }

        for level in &self.config.outlines {
            plan.outlines.extend(render_outlines(layout, *level));
        }

        debug!(
            text = plan.text.len(),
            outlines = plan.outlines.len(),
            "Page composed"
        );
        plan
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use page2pdf_core::{ContentLevel, Point, Polygon, RegionKind, Rgb8};
    use page2pdf_layout::{Region, TextLine};

    use super::*;

    fn layout() -> PageLayout {
        let coords = Polygon::new(vec![
            Point::new(100, 100),
            Point::new(300, 100),
            Point::new(300, 140),
            Point::new(100, 140),
        ]);
        let mut region = Region::new("r1", RegionKind::Text);
        region.coords = coords.clone();
        region.text = Some("Hello".into());
        region.lines.push(TextLine {
            id: "l1".into(),
            coords,
            text: Some("Hello".into()),
            words: Vec::new(),
        });
        let mut layout = PageLayout::new(1000, 1000);
        layout.regions.push(region);
        layout
    }

    #[test]
    fn image_only_by_default() {
        let config = ConversionConfig::default();
        let font = TextFont::helvetica();
        let plan = PageComposer::new(&config, &font).compose(&layout());
        assert_eq!((plan.width, plan.height), (1000.0, 1000.0));
        assert!(plan.text.is_empty());
        assert!(plan.outlines.is_empty());
        assert!(!plan.visible_text);
    }

    #[test]
    fn region_text_layer() {
        let config = ConversionConfig {
            text_source: Some(ContentLevel::Region),
            ..ConversionConfig::default()
        };
        let font = TextFont::helvetica();
        let plan = PageComposer::new(&config, &font).compose(&layout());
        assert_eq!(plan.text.len(), 1);
        assert_eq!(plan.text[0].text, "Hello");
        assert!(plan.outlines.is_empty());
    }

    #[test]
    fn outlines_follow_level_order() {
        let config = ConversionConfig {
            outlines: BTreeSet::from([ContentLevel::TextLine, ContentLevel::Region]),
            visible_text: true,
            ..ConversionConfig::default()
        };
        let font = TextFont::helvetica();
        let plan = PageComposer::new(&config, &font).compose(&layout());
        let colours: Vec<Rgb8> = plan.outlines.iter().map(|o| o.colour).collect();
        assert_eq!(colours, vec![Rgb8::new(0, 0, 255), Rgb8::new(50, 205, 50)]);
        assert!(plan.visible_text);
    }
}
