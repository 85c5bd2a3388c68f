// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Outline overlay: the polygon of every object at a level, stroked in the
// colour of its type.

use page2pdf_core::{ContentLevel, ContentType, Point, Polygon};
use page2pdf_layout::PageLayout;
use tracing::debug;

use super::OutlineStroke;

/// Stroke width of outlines, in points.
pub const OUTLINE_WIDTH: f32 = 1.0;

/// Strokes for all drawable polygons at `level`.
pub fn render_outlines(layout: &PageLayout, level: ContentLevel) -> Vec<OutlineStroke> {
    let page_height = layout.height as f32;
    let strokes: Vec<OutlineStroke> = layout
        .content(level)
        .into_iter()
        .filter_map(|object| outline_stroke(object.content_type, object.coords, page_height))
        .collect();
    debug!(level = %level, strokes = strokes.len(), "Outlines laid out");
    strokes
}

/// The path starts at the last vertex and then visits every vertex in order,
/// which closes the polygon. Polygons with fewer than three points are not
/// drawn.
pub fn outline_stroke(
    content_type: ContentType,
    coords: &Polygon,
    page_height: f32,
) -> Option<OutlineStroke> {
    if !coords.is_drawable() {
        return None;
    }
    let points = coords.points();
    let to_pdf = |p: &Point| (p.x as f32, page_height - p.y as f32);

    let mut path = Vec::with_capacity(points.len() + 1);
    path.extend(points.last().map(to_pdf));
    path.extend(points.iter().map(to_pdf));

    Some(OutlineStroke {
        colour: content_type.outline_colour(),
        line_width: OUTLINE_WIDTH,
        path,
    })
}
