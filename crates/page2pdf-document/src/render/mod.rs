// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page renderers. They turn a layout into drawing primitives in PDF user
// space (points, origin bottom-left); the PDF writer turns those into page
// content operations.

pub mod outline;
pub mod text_layer;

use page2pdf_core::Rgb8;

pub use outline::{OUTLINE_WIDTH, outline_stroke, render_outlines};
pub use text_layer::{TextLayerRenderer, baseline_offset};

/// One string placed at a baseline origin.
#[derive(Debug, Clone, PartialEq)]
pub struct TextDraw {
    pub text: String,
    /// Left edge of the text, in points.
    pub x: f32,
    /// Baseline, in points from the bottom of the page.
    pub y: f32,
    pub font_size: f32,
}

/// An open stroked path.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineStroke {
    pub colour: Rgb8,
    pub line_width: f32,
    /// Path vertices in drawing order.
    pub path: Vec<(f32, f32)>,
}

/// Everything drawn on one output page besides the page image.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PagePlan {
    pub width: f32,
    pub height: f32,
    pub text: Vec<TextDraw>,
    pub outlines: Vec<OutlineStroke>,
    /// Draw the text layer filled above the image instead of invisibly below it.
    pub visible_text: bool,
}

impl PagePlan {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}
