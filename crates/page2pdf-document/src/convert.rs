// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Layout + image → PDF conversion of one or more pages into one document.
//
// A page whose layout or image cannot be read is skipped and reported; the
// document is written as long as at least one page succeeded.

use std::path::{Path, PathBuf};

use page2pdf_core::ConversionConfig;
use page2pdf_core::error::{Page2PdfError, Result};
use page2pdf_layout::PageXmlReader;
use tracing::{error, info, instrument, warn};

use crate::font::TextFont;
use crate::image::PageImage;
use crate::pdf::{PageComposer, PdfWriter};

/// Input files of one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSource {
    pub layout: PathBuf,
    pub image: PathBuf,
}

impl PageSource {
    pub fn new(layout: impl Into<PathBuf>, image: impl Into<PathBuf>) -> Self {
        Self {
            layout: layout.into(),
            image: image.into(),
        }
    }
}

/// A page that was left out of the output.
#[derive(Debug)]
pub struct PageFailure {
    pub layout: PathBuf,
    pub error: Page2PdfError,
}

/// Outcome of a conversion that produced a document.
#[derive(Debug, Default)]
pub struct ConversionReport {
    pub pages_written: usize,
    pub failures: Vec<PageFailure>,
}

impl ConversionReport {
    /// Whether every requested page made it into the document.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Converts pages with one configuration and one font.
pub struct PageToPdfConverter {
    config: ConversionConfig,
    font: TextFont,
}

impl PageToPdfConverter {
    /// Create a converter, loading the configured text font.
    pub fn new(config: ConversionConfig) -> Result<Self> {
        let font = TextFont::load(config.font_path.as_deref())?;
        Ok(Self { config, font })
    }

    pub fn font(&self) -> &TextFont {
        &self.font
    }

    /// Convert `sources` in order into a single PDF at `output`.
    ///
    /// Fails with [`Page2PdfError::NoPages`] (writing nothing) when no page
    /// could be converted.
    #[instrument(skip_all, fields(pages = sources.len(), output = %output.as_ref().display()))]
    pub fn convert(
        &self,
        sources: &[PageSource],
        output: impl AsRef<Path>,
    ) -> Result<ConversionReport> {
        let output = output.as_ref();
        let title = self
            .config
            .title
            .clone()
            .or_else(|| output.file_stem().map(|s| s.to_string_lossy().to_string()))
            .unwrap_or_else(|| "page2pdf".to_string());

        if !self.config.has_overlays() {
            info!("No text layer or outlines configured; pages hold the images only");
        }

        let (writer, report) = self.render(&title, sources)?;
        writer.write_to_file(output)?;
        info!(
            written = report.pages_written,
            failed = report.failures.len(),
            "Conversion complete"
        );
        Ok(report)
    }

    /// Convert a single page.
    pub fn convert_page(
        &self,
        layout: impl Into<PathBuf>,
        image: impl Into<PathBuf>,
        output: impl AsRef<Path>,
    ) -> Result<ConversionReport> {
        self.convert(&[PageSource::new(layout, image)], output)
    }

    /// Compose every page into a writer without touching the output file.
    pub fn render(
        &self,
        title: &str,
        sources: &[PageSource],
    ) -> Result<(PdfWriter, ConversionReport)> {
        let mut writer = PdfWriter::new(title, &self.font)?;
        let mut report = ConversionReport::default();

        for source in sources {
            match self.add_page(&mut writer, source) {
                Ok(()) => report.pages_written += 1,
                Err(err) => {
                    error!(
                        layout = %source.layout.display(),
                        image = %source.image.display(),
                        error = %err,
                        "Page skipped"
                    );
                    report.failures.push(PageFailure {
                        layout: source.layout.clone(),
                        error: err,
                    });
                }
            }
        }

        if report.pages_written == 0 {
            warn!(failed = report.failures.len(), "No page could be converted");
            return Err(Page2PdfError::NoPages {
                failed: report.failures.len(),
            });
        }
        Ok((writer, report))
    }

    fn add_page(&self, writer: &mut PdfWriter, source: &PageSource) -> Result<()> {
        let layout = PageXmlReader::read_file(&source.layout)?;
        let image = PageImage::open(&source.image)?;
        let plan = PageComposer::new(&self.config, &self.font).compose(&layout);
        writer.add_page(&plan, &image);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_sources_is_no_pages() {
        let converter = PageToPdfConverter::new(ConversionConfig::default()).unwrap();
        let err = converter.render("t", &[]).err().unwrap();
        assert!(matches!(err, Page2PdfError::NoPages { failed: 0 }));
    }

    #[test]
    fn unreadable_pages_are_reported() {
        let converter = PageToPdfConverter::new(ConversionConfig::default()).unwrap();
        let sources = [
            PageSource::new("/nonexistent/a.xml", "/nonexistent/a.tif"),
            PageSource::new("/nonexistent/b.xml", "/nonexistent/b.tif"),
        ];
        let err = converter.render("t", &sources).err().unwrap();
        assert!(matches!(err, Page2PdfError::NoPages { failed: 2 }));
    }

    #[test]
    fn missing_font_fails_construction() {
        let config = ConversionConfig {
            font_path: Some("/nonexistent/font.ttf".into()),
            ..ConversionConfig::default()
        };
        let err = PageToPdfConverter::new(config).err().unwrap();
        assert!(matches!(err, Page2PdfError::FontError(_)));
    }

    #[test]
    fn report_completeness() {
        let mut report = ConversionReport {
            pages_written: 1,
            failures: Vec::new(),
        };
        assert!(report.is_complete());
        report.failures.push(PageFailure {
            layout: "x.xml".into(),
            error: Page2PdfError::ImageError("broken".into()),
        });
        assert!(!report.is_complete());
    }
}
