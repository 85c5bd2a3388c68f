// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for page2pdf.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for all page2pdf operations.
#[derive(Debug, Error)]
pub enum Page2PdfError {
    // -- Run setup --
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("source not found: {}", .0.display())]
    MissingSource(PathBuf),

    #[error("configuration error: {0}")]
    Config(String),

    // -- Per-page inputs --
    #[error("layout parse failed for {source_name}: {detail}")]
    LayoutParse { source_name: String, detail: String },

    #[error("image processing failed: {0}")]
    ImageError(String),

    #[error("font loading failed: {0}")]
    FontError(String),

    // -- Output --
    #[error("PDF operation failed: {0}")]
    PdfError(String),

    #[error("no pages could be composed ({failed} failed)")]
    NoPages { failed: usize },

    // -- Storage --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Page2PdfError {
    /// Shorthand for a [`Page2PdfError::LayoutParse`] error.
    pub fn layout(source_name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::LayoutParse {
            source_name: source_name.into(),
            detail: detail.into(),
        }
    }

    /// Whether the error stems from how the tool was invoked rather than from
    /// the content being converted.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument(_) | Self::MissingSource(_) | Self::Config(_)
        )
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, Page2PdfError>;
