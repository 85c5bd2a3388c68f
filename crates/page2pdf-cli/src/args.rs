// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line arguments and their mapping onto a `ConversionConfig`.

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use page2pdf_core::error::Result;
use page2pdf_core::{ContentLevel, ConversionConfig, FitMode};

/// Long options that older scripts spell with a single dash (`-xml`).
const LEGACY_FLAGS: &[&str] = &[
    "xml",
    "image",
    "pdf",
    "text-source",
    "outlines",
    "font",
    "config",
    "fit-height",
    "visible-text",
    "title",
];

#[derive(Debug, Parser)]
#[command(name = "page2pdf")]
#[command(version)]
#[command(
    about = "Convert PAGE XML layouts and page images to searchable PDF",
    long_about = None,
    arg_required_else_help = true
)]
pub struct Cli {
    /// PAGE XML file, or a folder of them
    #[arg(long, value_name = "FILE|DIR")]
    pub xml: PathBuf,

    /// Page image, or the folder holding the images
    #[arg(long, value_name = "FILE|DIR")]
    pub image: PathBuf,

    /// Output PDF file
    #[arg(long, value_name = "FILE")]
    pub pdf: PathBuf,

    /// Level of the hidden text layer: R(egion), L(ine) or T, W(ord), G(lyph)
    #[arg(long, value_name = "LEVEL", value_parser = parse_level)]
    pub text_source: Option<ContentLevel>,

    /// Outline overlays to draw, any combination of R, L, W, G (e.g. "RW")
    #[arg(long, value_name = "LEVELS", value_parser = parse_levels)]
    pub outlines: Option<OutlineLevels>,

    /// TrueType font for the text layer (default: built-in Helvetica)
    #[arg(long, value_name = "TTF")]
    pub font: Option<PathBuf>,

    /// JSON conversion config; flags given on the command line override it
    #[arg(long, value_name = "JSON")]
    pub config: Option<PathBuf>,

    /// Also cap font sizes by the box height
    #[arg(long)]
    pub fit_height: bool,

    /// Draw the text layer visibly, over the image
    #[arg(long)]
    pub visible_text: bool,

    /// PDF document title (default: output file name)
    #[arg(long)]
    pub title: Option<String>,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Set of outline levels given as one argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineLevels(pub BTreeSet<ContentLevel>);

fn parse_level(value: &str) -> std::result::Result<ContentLevel, String> {
    ContentLevel::parse(value).map_err(|err| err.to_string())
}

fn parse_levels(value: &str) -> std::result::Result<OutlineLevels, String> {
    ContentLevel::parse_set(value)
        .map(OutlineLevels)
        .map_err(|err| err.to_string())
}

impl Cli {
    /// Parse process arguments, accepting the single-dash legacy spellings.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_legacy_args(std::env::args_os()))
    }

    /// The run configuration: the `--config` file (or defaults) with the
    /// command-line flags applied on top.
    pub fn conversion_config(&self) -> Result<ConversionConfig> {
        let mut config = match &self.config {
            Some(path) => ConversionConfig::from_json_file(path)?,
            None => ConversionConfig::default(),
        };

        if let Some(level) = self.text_source {
            config.text_source = Some(level);
        }
        if let Some(OutlineLevels(levels)) = &self.outlines {
            config.outlines = levels.clone();
        }
        if let Some(font) = &self.font {
            config.font_path = Some(font.clone());
        }
        if self.fit_height {
            config.fit_mode = FitMode::WidthAndHeight;
        }
        if self.visible_text {
            config.visible_text = true;
        }
        if let Some(title) = &self.title {
            config.title = Some(title.clone());
        }
        Ok(config)
    }
}

/// Rewrite `-xml`-style options to `--xml` so clap accepts them.
pub fn normalize_legacy_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some(s)
                if s.len() > 2
                    && s.starts_with('-')
                    && !s.starts_with("--")
                    && LEGACY_FLAGS.contains(&&s[1..]) =>
            {
                OsString::from(format!("-{s}"))
            }
            _ => arg,
        })
        .collect()
}
