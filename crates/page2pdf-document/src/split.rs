// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Multi-line region text: one horizontal band per line, one shared font size.

use page2pdf_core::Rect;

use crate::fit::{FitCalculator, MIN_FONT_SIZE};

/// One line of region text and the band of the region box it occupies.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionLine {
    pub text: String,
    pub bounds: Rect,
}

/// Result of splitting a region's text over its bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionSplit {
    /// Lines in order, top to bottom. Empty lines keep their band.
    pub lines: Vec<RegionLine>,
    /// Smallest fitted size over the non-empty lines.
    pub font_size: f32,
}

/// Split region text into lines. Any line break convention is accepted and
/// trailing empty lines are dropped, so the result is never empty.
pub fn split_lines(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines: Vec<String> = normalized.split('\n').map(str::to_string).collect();
    while lines.len() > 1 && lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines
}

/// Divide `bounds` into equal-height bands, one per line of `text`, and fit
/// every non-empty line to its band.
pub fn split_region(fit: &FitCalculator<'_>, text: &str, bounds: Rect) -> RegionSplit {
    let lines = split_lines(text);
    let count = lines.len() as i64;
    let height = i64::from(bounds.height());
    // Integer band edges so the bands tile the box exactly.
    let edge = |i: i64| bounds.top + (height * i / count) as i32;

    let mut font_size: Option<f32> = None;
    let mut out = Vec::with_capacity(lines.len());
    for (i, line) in lines.into_iter().enumerate() {
        let i = i as i64;
        let band = Rect::new(bounds.left, edge(i), bounds.right, edge(i + 1));
        if !line.is_empty() {
            let size = fit.font_size(&line, band.width() as f32, band.height() as f32);
            font_size = Some(font_size.map_or(size, |current| current.min(size)));
        }
        out.push(RegionLine {
            text: line,
            bounds: band,
        });
    }

    RegionSplit {
        lines: out,
        font_size: font_size.unwrap_or(MIN_FONT_SIZE),
    }
}
