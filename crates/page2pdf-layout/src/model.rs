// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Layout tree of one page: regions (possibly nested) → text lines → words → glyphs.

use page2pdf_core::{Polygon, RegionKind};
use serde::{Deserialize, Serialize};

/// Parsed structural description of one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    /// Page width in pixels.
    pub width: u32,
    /// Page height in pixels.
    pub height: u32,
    /// Image filename recorded in the layout, if any.
    pub image_filename: Option<String>,
    /// Top-level regions in document order.
    pub regions: Vec<Region>,
}

impl PageLayout {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            image_filename: None,
            regions: Vec::new(),
        }
    }
}

/// A layout region. Only text regions carry text and lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    pub kind: RegionKind,
    pub coords: Polygon,
    pub text: Option<String>,
    pub lines: Vec<TextLine>,
    /// Regions nested inside this one (e.g. text regions in a table).
    pub children: Vec<Region>,
}

impl Region {
    pub fn new(id: impl Into<String>, kind: RegionKind) -> Self {
        Self {
            id: id.into(),
            kind,
            coords: Polygon::default(),
            text: None,
            lines: Vec::new(),
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    pub id: String,
    pub coords: Polygon,
    pub text: Option<String>,
    pub words: Vec<Word>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub id: String,
    pub coords: Polygon,
    pub text: Option<String>,
    pub glyphs: Vec<Glyph>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    pub id: String,
    pub coords: Polygon,
    pub text: Option<String>,
}
