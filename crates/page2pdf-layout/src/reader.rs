// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PAGE XML reader: builds a `PageLayout` from a PAGE document using the
// `quick-xml` event reader.
//
// Namespaces and schema versions are not checked: elements are matched by local
// name. Coordinates are accepted both as a `points` attribute (2010+ schemas)
// and as `<Point x=".." y=".."/>` children (2009 schema). Text is taken from the
// first `TextEquiv/Unicode` of each object.

use std::path::Path;

use page2pdf_core::error::{Page2PdfError, Result};
use page2pdf_core::{Point, Polygon, RegionKind};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::{debug, instrument, warn};

use crate::model::{Glyph, PageLayout, Region, TextLine, Word};

/// Elements whose nested `Coords`/`TextEquiv` belong to something other than
/// the enclosing content object.
const OPAQUE_ELEMENTS: &[&str] = &["Graphemes", "Border", "PrintSpace", "Grid", "Roles"];

/// Reads PAGE XML layout documents.
pub struct PageXmlReader;

impl PageXmlReader {
    /// Read and parse a PAGE XML file.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn read_file(path: impl AsRef<Path>) -> Result<PageLayout> {
        let path = path.as_ref();
        let source_name = path.display().to_string();
        let xml = std::fs::read_to_string(path)
            .map_err(|err| Page2PdfError::layout(&source_name, format!("failed to read: {err}")))?;
        Self::parse_str(&xml, &source_name)
    }

    /// Parse a PAGE XML document held in memory.
    ///
    /// `source_name` only labels errors and log lines.
    pub fn parse_str(xml: &str, source_name: &str) -> Result<PageLayout> {
        let mut reader = Reader::from_str(xml);
        let mut builder = LayoutBuilder::new(source_name);

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => builder.open(e)?,
                Ok(Event::Empty(ref e)) => {
                    builder.open(e)?;
                    builder.close(&local_name(e))?;
                }
                Ok(Event::End(ref e)) => {
                    let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                    builder.close(&name)?;
                }
                Ok(Event::Text(e)) => {
                    if builder.capturing_text() {
                        let text = e.unescape().map_err(|err| {
                            Page2PdfError::layout(source_name, format!("bad text content: {err}"))
                        })?;
                        builder.push_text(&text);
                    }
                }
                Ok(Event::CData(e)) => {
                    if builder.capturing_text() {
                        builder.push_text(&String::from_utf8_lossy(&e.into_inner()));
                    }
                }
                Ok(Event::Eof) => break,
                Err(err) => {
                    return Err(Page2PdfError::layout(
                        source_name,
                        format!("XML error at byte {}: {}", reader.buffer_position(), err),
                    ));
                }
                _ => {}
            }
        }

        builder.finish()
    }
}

/// A content object under construction.
enum Frame {
    Region(Region),
    Line(TextLine),
    Word(Word),
    Glyph(Glyph),
}

impl Frame {
    fn coords_mut(&mut self) -> &mut Polygon {
        match self {
            Frame::Region(r) => &mut r.coords,
            Frame::Line(l) => &mut l.coords,
            Frame::Word(w) => &mut w.coords,
            Frame::Glyph(g) => &mut g.coords,
        }
    }

    fn text_mut(&mut self) -> &mut Option<String> {
        match self {
            Frame::Region(r) => &mut r.text,
            Frame::Line(l) => &mut l.text,
            Frame::Word(w) => &mut w.text,
            Frame::Glyph(g) => &mut g.text,
        }
    }
}

#[derive(Debug)]
enum TextEquivState {
    Idle,
    /// Inside a `TextEquiv` that does not supply the object's text.
    Skipping,
    /// Inside the first `TextEquiv` of an object, before its `Unicode`.
    Capturing,
    InUnicode(String),
}

struct LayoutBuilder<'s> {
    source_name: &'s str,
    page: Option<PageLayout>,
    stack: Vec<Frame>,
    /// Inside a `<Coords>` element that lists `<Point>` children.
    in_point_list: bool,
    opaque_depth: usize,
    text_equiv: TextEquivState,
}

impl<'s> LayoutBuilder<'s> {
    fn new(source_name: &'s str) -> Self {
        Self {
            source_name,
            page: None,
            stack: Vec::new(),
            in_point_list: false,
            opaque_depth: 0,
            text_equiv: TextEquivState::Idle,
        }
    }

    fn error(&self, detail: impl Into<String>) -> Page2PdfError {
        Page2PdfError::layout(self.source_name, detail)
    }

    fn capturing_text(&self) -> bool {
        matches!(self.text_equiv, TextEquivState::InUnicode(_))
    }

    fn push_text(&mut self, text: &str) {
        if let TextEquivState::InUnicode(buf) = &mut self.text_equiv {
            buf.push_str(text);
        }
    }

    fn open(&mut self, e: &BytesStart<'_>) -> Result<()> {
        let name = local_name(e);

        if OPAQUE_ELEMENTS.contains(&name.as_str()) {
            self.opaque_depth += 1;
            return Ok(());
        }
        if self.opaque_depth > 0 {
            return Ok(());
        }

        match name.as_str() {
            "Page" => self.open_page(e)?,
            "TextLine" => self.push_frame(Frame::Line(TextLine {
                id: attribute(e, "id").unwrap_or_default(),
                ..Default::default()
            }))?,
            "Word" => self.push_frame(Frame::Word(Word {
                id: attribute(e, "id").unwrap_or_default(),
                ..Default::default()
            }))?,
            "Glyph" => self.push_frame(Frame::Glyph(Glyph {
                id: attribute(e, "id").unwrap_or_default(),
                ..Default::default()
            }))?,
            "Coords" => self.open_coords(e)?,
            "Point" if self.in_point_list => {
                let point = parse_point_element(e).ok_or_else(|| {
                    self.error("<Point> requires integer x and y attributes")
                })?;
                if let Some(frame) = self.stack.last_mut() {
                    frame.coords_mut().push(point);
                }
            }
            "TextEquiv" => {
                let wants_text = self
                    .stack
                    .last_mut()
                    .is_some_and(|frame| frame.text_mut().is_none());
                self.text_equiv = if wants_text {
                    TextEquivState::Capturing
                } else {
                    TextEquivState::Skipping
                };
            }
            "Unicode" if matches!(self.text_equiv, TextEquivState::Capturing) => {
                self.text_equiv = TextEquivState::InUnicode(String::new());
            }
            other => {
                if let Some(kind) = RegionKind::from_element_name(other) {
                    self.push_frame(Frame::Region(Region::new(
                        attribute(e, "id").unwrap_or_default(),
                        kind,
                    )))?;
                }
            }
        }
        Ok(())
    }

    fn close(&mut self, name: &str) -> Result<()> {
        if OPAQUE_ELEMENTS.contains(&name) {
            self.opaque_depth = self.opaque_depth.saturating_sub(1);
            return Ok(());
        }
        if self.opaque_depth > 0 {
            return Ok(());
        }

        match name {
            "TextLine" | "Word" | "Glyph" => self.pop_frame(),
            "Coords" => self.in_point_list = false,
            "TextEquiv" => self.text_equiv = TextEquivState::Idle,
            "Unicode" => {
                let state = std::mem::replace(&mut self.text_equiv, TextEquivState::Skipping);
                match state {
                    TextEquivState::InUnicode(text) => {
                        if let Some(frame) = self.stack.last_mut() {
                            *frame.text_mut() = Some(text);
                        }
                    }
                    other => self.text_equiv = other,
                }
            }
            other if RegionKind::from_element_name(other).is_some() => self.pop_frame(),
            _ => {}
        }
        Ok(())
    }

    fn open_page(&mut self, e: &BytesStart<'_>) -> Result<()> {
        if self.page.is_some() {
            return Err(self.error("multiple <Page> elements"));
        }
        let width = self.dimension(e, "imageWidth")?;
        let height = self.dimension(e, "imageHeight")?;
        let mut page = PageLayout::new(width, height);
        page.image_filename = attribute(e, "imageFilename").filter(|f| !f.is_empty());
        self.page = Some(page);
        Ok(())
    }

    fn dimension(&self, e: &BytesStart<'_>, attr: &str) -> Result<u32> {
        let raw = attribute(e, attr)
            .ok_or_else(|| self.error(format!("<Page> is missing {attr}")))?;
        match raw.trim().parse::<u32>() {
            Ok(value) if value > 0 => Ok(value),
            _ => Err(self.error(format!("<Page> {attr} must be a positive integer, got '{raw}'"))),
        }
    }

    fn open_coords(&mut self, e: &BytesStart<'_>) -> Result<()> {
        let Some(frame) = self.stack.last_mut() else {
            return Ok(());
        };
        match attribute(e, "points") {
            Some(points) => {
                let polygon = Polygon::parse_points(&points)
                    .map_err(|detail| Page2PdfError::layout(self.source_name, detail))?;
                *frame.coords_mut() = polygon;
            }
            None => self.in_point_list = true,
        }
        Ok(())
    }

    fn push_frame(&mut self, frame: Frame) -> Result<()> {
        if self.page.is_none() {
            return Err(self.error("content object outside of <Page>"));
        }
        self.stack.push(frame);
        Ok(())
    }

    /// Pop the innermost object and attach it to its parent.
    fn pop_frame(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };
        let parent = self.stack.last_mut();
        match (frame, parent) {
            (Frame::Region(region), Some(Frame::Region(parent))) => parent.children.push(region),
            (Frame::Region(region), _) => {
                if let Some(page) = self.page.as_mut() {
                    page.regions.push(region);
                }
            }
            (Frame::Line(line), Some(Frame::Region(parent))) => parent.lines.push(line),
            (Frame::Word(word), Some(Frame::Line(parent))) => parent.words.push(word),
            (Frame::Glyph(glyph), Some(Frame::Word(parent))) => parent.glyphs.push(glyph),
            (Frame::Line(line), _) => warn!(id = %line.id, "text line outside a region, dropped"),
            (Frame::Word(word), _) => warn!(id = %word.id, "word outside a text line, dropped"),
            (Frame::Glyph(glyph), _) => warn!(id = %glyph.id, "glyph outside a word, dropped"),
        }
    }

    fn finish(self) -> Result<PageLayout> {
        if !self.stack.is_empty() {
            return Err(self.error("unexpected end of document"));
        }
        let page = self
            .page
            .ok_or_else(|| Page2PdfError::layout(self.source_name, "missing <Page> element"))?;
        debug!(
            source = self.source_name,
            width = page.width,
            height = page.height,
            regions = page.regions.len(),
            "PAGE layout parsed"
        );
        Ok(page)
    }
}

fn local_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).to_string()
}

/// Get an attribute value from an element.
fn attribute(e: &BytesStart<'_>, name: &str) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == name.as_bytes())
        .map(|attr| match attr.unescape_value() {
            Ok(value) => value.into_owned(),
            Err(_) => String::from_utf8_lossy(&attr.value).to_string(),
        })
}

fn parse_point_element(e: &BytesStart<'_>) -> Option<Point> {
    let x = attribute(e, "x")?.trim().parse().ok()?;
    let y = attribute(e, "y")?.trim().parse().ok()?;
    Some(Point::new(x, y))
}
