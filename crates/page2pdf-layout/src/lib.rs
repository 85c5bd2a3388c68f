// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// page2pdf-layout — PAGE XML layout documents.
//
// Provides the immutable page layout tree (regions, text lines, words, glyphs),
// a flattened per-level traversal used by the renderers, and the XML reader.

pub mod content;
pub mod model;
pub mod reader;

pub use content::ContentObject;
pub use model::{Glyph, PageLayout, Region, TextLine, Word};
pub use reader::PageXmlReader;
