// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// page2pdf — Core types, geometry, and error definitions shared across all crates.

pub mod config;
pub mod error;
pub mod geometry;
pub mod types;

pub use config::{ConversionConfig, FitMode};
pub use error::Page2PdfError;
pub use geometry::{Point, Polygon, Rect};
pub use types::*;
