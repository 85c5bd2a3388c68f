// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page image loading. Decoding is done by the `image` crate; the pixels are
// handed to `printpdf` as a raw image, grayscale scans as single-channel data.

use std::path::Path;

use image::{ColorType, DynamicImage};
use page2pdf_core::error::{Page2PdfError, Result};
use printpdf::{RawImage, RawImageData, RawImageFormat};
use tracing::{debug, info, instrument};

/// A decoded page image ready for embedding.
pub struct PageImage {
    raw: RawImage,
    width: u32,
    height: u32,
}

impl PageImage {
    /// Decode an image file (TIFF, PNG, JPEG, ...).
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|err| {
            Page2PdfError::ImageError(format!("failed to open {}: {}", path.display(), err))
        })?;
        info!(width = img.width(), height = img.height(), "Page image loaded");
        Self::from_dynamic(img)
    }

    /// Decode an in-memory encoded image.
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(data).map_err(|err| {
            Page2PdfError::ImageError(format!("failed to decode image: {}", err))
        })?;
        Self::from_dynamic(img)
    }

    /// Wrap an already decoded image.
    pub fn from_dynamic(img: DynamicImage) -> Result<Self> {
        let (width, height) = (img.width(), img.height());
        if width == 0 || height == 0 {
            return Err(Page2PdfError::ImageError(format!(
                "image has no pixels ({width}x{height})"
            )));
        }

        let grayscale = matches!(
            img.color(),
            ColorType::L8 | ColorType::La8 | ColorType::L16 | ColorType::La16
        );
        let (pixels, data_format) = if grayscale {
            (img.to_luma8().into_raw(), RawImageFormat::R8)
        } else {
            (img.to_rgb8().into_raw(), RawImageFormat::RGB8)
        };
        debug!(width, height, grayscale, "Page image converted for embedding");

        Ok(Self {
            raw: RawImage {
                pixels: RawImageData::U8(pixels),
                width: width as usize,
                height: height as usize,
                data_format,
                tag: Vec::new(),
            },
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_grayscale(&self) -> bool {
        matches!(self.raw.data_format, RawImageFormat::R8)
    }

    pub fn raw(&self) -> &RawImage {
        &self.raw
    }

    /// Uniform scale that fits the image inside a `page_width` × `page_height`
    /// page (at one pixel per point), preserving its aspect ratio.
    pub fn fit_scale(&self, page_width: f32, page_height: f32) -> f32 {
        let scale_x = page_width / self.width as f32;
        let scale_y = page_height / self.height as f32;
        scale_x.min(scale_y)
    }
}
