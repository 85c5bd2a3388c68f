// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Source discovery: pairs layout files with their page images.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use page2pdf_core::error::{Page2PdfError, Result};
use page2pdf_document::{PageFailure, PageSource};
use page2pdf_layout::PageXmlReader;
use tracing::{debug, info, warn};

/// Image extensions tried for a layout stem, in order of preference.
pub const IMAGE_EXTENSIONS: [&str; 3] = ["tif", "png", "jpg"];

/// Pages to convert, plus layouts for which no image was found.
#[derive(Debug, Default)]
pub struct SourceSet {
    pub sources: Vec<PageSource>,
    pub unpaired: Vec<PageFailure>,
}

/// Resolve the `--xml`/`--image` arguments into page sources.
///
/// A layout file pairs with the given image file. A layout folder pairs each
/// `*.xml` file in it (sorted by name) with `<stem>.tif|.png|.jpg` from the
/// image folder, or failing that with the file its `imageFilename` names.
pub fn collect_sources(xml: &Path, image: &Path) -> Result<SourceSet> {
    if !xml.exists() {
        return Err(Page2PdfError::MissingSource(xml.to_path_buf()));
    }

    if !xml.is_dir() {
        if !image.is_file() {
            return Err(Page2PdfError::MissingSource(image.to_path_buf()));
        }
        return Ok(SourceSet {
            sources: vec![PageSource::new(xml, image)],
            unpaired: Vec::new(),
        });
    }

    if !image.is_dir() {
        return Err(Page2PdfError::InvalidArgument(format!(
            "--image must be a folder when --xml is a folder ({})",
            image.display()
        )));
    }

    let layouts = layout_files(xml)?;
    if layouts.is_empty() {
        return Err(Page2PdfError::InvalidArgument(format!(
            "no .xml files in {}",
            xml.display()
        )));
    }

    let mut set = SourceSet::default();
    for layout in layouts {
        let Some(stem) = layout.file_stem() else {
            continue;
        };
        match find_image(image, stem).or_else(|| declared_image(&layout, image)) {
            Some(found) => {
                debug!(layout = %layout.display(), image = %found.display(), "Paired");
                set.sources.push(PageSource::new(layout, found));
            }
            None => {
                warn!(layout = %layout.display(), "No matching image found");
                let expected = image_path(image, stem, IMAGE_EXTENSIONS[0]);
                set.unpaired.push(PageFailure {
                    layout,
                    error: Page2PdfError::MissingSource(expected),
                });
            }
        }
    }

    info!(
        paired = set.sources.len(),
        unpaired = set.unpaired.len(),
        "Batch sources collected"
    );
    Ok(set)
}

/// `*.xml` files directly in `dir`, sorted by file name.
fn layout_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_xml = path
            .extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"));
        if is_xml && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// First existing `<dir>/<stem>.<ext>` over [`IMAGE_EXTENSIONS`].
pub fn find_image(dir: &Path, stem: &OsStr) -> Option<PathBuf> {
    IMAGE_EXTENSIONS.iter().find_map(|ext| {
        let candidate = image_path(dir, stem, ext);
        candidate.is_file().then_some(candidate)
    })
}

/// The page image a layout names in `imageFilename`, looked up by file name
/// in `dir`.
fn declared_image(layout: &Path, dir: &Path) -> Option<PathBuf> {
    let page = match PageXmlReader::read_file(layout) {
        Ok(page) => page,
        Err(err) => {
            debug!(layout = %layout.display(), error = %err, "No declared image");
            return None;
        }
    };
    let file_name = Path::new(page.image_filename.as_deref()?).file_name()?;
    let candidate = dir.join(file_name);
    candidate.is_file().then_some(candidate)
}

/// `<dir>/<stem>.<ext>`; the stem may itself contain dots.
fn image_path(dir: &Path, stem: &OsStr, ext: &str) -> PathBuf {
    let mut name = stem.to_os_string();
    name.push(".");
    name.push(ext);
    dir.join(name)
}
