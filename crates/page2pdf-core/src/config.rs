// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Conversion configuration.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Page2PdfError, Result};
use crate::types::ContentLevel;

/// How font sizes are fitted to a text box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FitMode {
    /// Fit the box width only; the text may overflow vertically.
    #[default]
    Width,
    /// Fit the box width and cap the size by the box height.
    WidthAndHeight,
}

/// Settings for one conversion run, shared by every page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Level whose text forms the hidden text layer; `None` disables it.
    pub text_source: Option<ContentLevel>,
    /// Levels whose outlines are drawn on top of the page.
    pub outlines: BTreeSet<ContentLevel>,
    /// TrueType font for the text layer; built-in Helvetica when unset.
    pub font_path: Option<PathBuf>,
    pub fit_mode: FitMode,
    /// Draw the text layer with visible ink above the image.
    pub visible_text: bool,
    /// Title written to the PDF metadata.
    pub title: Option<String>,
}

impl ConversionConfig {
    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|err| {
            Page2PdfError::Config(format!("failed to read {}: {}", path.display(), err))
        })?;
        Self::from_json_str(&raw)
            .map_err(|err| Page2PdfError::Config(format!("{}: {}", path.display(), err)))
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Whether the run produces anything beyond the page images.
    pub fn has_overlays(&self) -> bool {
        self.text_source.is_some() || !self.outlines.is_empty()
    }
}
