// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Flattened, per-level view of the layout tree.

use page2pdf_core::{ContentLevel, ContentType, Polygon, Rect};

use crate::model::{PageLayout, Region};

/// Borrowed view of one content object at a given level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentObject<'a> {
    pub id: &'a str,
    pub content_type: ContentType,
    pub coords: &'a Polygon,
    pub text: Option<&'a str>,
}

impl<'a> ContentObject<'a> {
    /// Non-empty text of a text-bearing object.
    pub fn text(&self) -> Option<&'a str> {
        if !self.content_type.is_text_bearing() {
            return None;
        }
        self.text.filter(|t| !t.is_empty())
    }

    pub fn bounding_box(&self) -> Option<Rect> {
        self.coords.bounding_box()
    }
}

impl PageLayout {
    /// All content objects at `level`, in document order.
    ///
    /// Regions are visited depth-first (a region before the regions nested in
    /// it), so the region level yields every region of every type. Lines,
    /// words and glyphs are collected from text regions at any depth.
    pub fn content(&self, level: ContentLevel) -> Vec<ContentObject<'_>> {
        let mut out = Vec::new();
        for region in &self.regions {
            collect(region, level, &mut out);
        }
        out
    }
}

fn collect<'a>(region: &'a Region, level: ContentLevel, out: &mut Vec<ContentObject<'a>>) {
    match level {
        ContentLevel::Region => out.push(ContentObject {
            id: &region.id,
            content_type: ContentType::Region(region.kind),
            coords: &region.coords,
            text: region.text.as_deref(),
        }),
        ContentLevel::TextLine => {
            for line in &region.lines {
                out.push(ContentObject {
                    id: &line.id,
                    content_type: ContentType::TextLine,
                    coords: &line.coords,
                    text: line.text.as_deref(),
                });
            }
        }
        ContentLevel::Word => {
            for word in region.lines.iter().flat_map(|l| &l.words) {
                out.push(ContentObject {
                    id: &word.id,
                    content_type: ContentType::Word,
                    coords: &word.coords,
                    text: word.text.as_deref(),
                });
            }
        }
        ContentLevel::Glyph => {
            let glyphs = region
                .lines
                .iter()
                .flat_map(|l| &l.words)
                .flat_map(|w| &w.glyphs);
            for glyph in glyphs {
                out.push(ContentObject {
                    id: &glyph.id,
                    content_type: ContentType::Glyph,
                    coords: &glyph.coords,
                    text: glyph.text.as_deref(),
                });
            }
        }
    }

    for child in &region.children {
        collect(child, level, out);
    }
}
