// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF module: page composition and document output.

pub mod composer;
pub mod writer;

pub use composer::PageComposer;
pub use writer::PdfWriter;
