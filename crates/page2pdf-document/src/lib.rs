// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// page2pdf-document — Searchable PDF output for page2pdf.
//
// Provides text-layer fonts and metrics, font size fitting, the text layer
// and outline renderers, page image loading, and PDF composition and output.

pub mod convert;
pub mod fit;
pub mod font;
pub mod image;
pub mod pdf;
pub mod render;
pub mod split;

// Re-export the primary structs so callers can use `page2pdf_document::PdfWriter` etc.
pub use convert::{ConversionReport, PageFailure, PageSource, PageToPdfConverter};
pub use fit::FitCalculator;
pub use font::{FontMetrics, TextFont};
pub use image::loader::PageImage;
pub use pdf::composer::PageComposer;
pub use pdf::writer::PdfWriter;
pub use render::PagePlan;
