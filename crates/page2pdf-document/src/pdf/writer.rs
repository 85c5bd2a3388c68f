// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF writer: serialises composed pages with `printpdf` 0.8.
//
// printpdf 0.8 uses a data-oriented API: each page is a `PdfPage` holding a
// `Vec<Op>` operation list, and the document is serialised once with
// `PdfDocument::save()`. Page images are added as XObjects; the text layer
// uses either built-in Helvetica or an embedded TrueType font.
//
// printpdf writes built-in font text as UTF-8 while declaring
// `/WinAnsiEncoding`, so Helvetica text is emitted as a raw `Tj` with
// WinAnsi bytes. The empty `WriteTextBuiltinFont` before it only registers the
// font resource on the page.

use std::path::Path;

use page2pdf_core::error::{Page2PdfError, Result};
use printpdf::{
    BuiltinFont, Color, DictItem, FontId, Line, LinePoint, Mm, Op, ParsedFont, PdfDocument,
    PdfPage, PdfSaveOptions, PdfWarnMsg, Point, Pt, Rgb, TextItem, TextRenderingMode,
    XObjectTransform,
};
use tracing::{debug, info, instrument};

use crate::font::TextFont;
use crate::font::builtin::encode_win_ansi;
use crate::image::PageImage;
use crate::render::{OutlineStroke, PagePlan, TextDraw};

/// How page content refers to the text-layer font.
#[derive(Debug, Clone)]
enum FontRef {
    Builtin(BuiltinFont),
    Embedded(FontId),
}

/// Accumulates pages of one output document.
pub struct PdfWriter {
    doc: PdfDocument,
    font: FontRef,
    pages: Vec<PdfPage>,
}

impl PdfWriter {
    /// Start a document. A TrueType text font is embedded here, once.
    pub fn new(title: &str, font: &TextFont) -> Result<Self> {
        let mut doc = PdfDocument::new(title);
        let font = match font {
            TextFont::Helvetica(_) => FontRef::Builtin(BuiltinFont::Helvetica),
            TextFont::TrueType(ttf) => {
                let mut warnings: Vec<PdfWarnMsg> = Vec::new();
                let parsed = ParsedFont::from_bytes(ttf.bytes(), 0, &mut warnings).ok_or_else(
                    || Page2PdfError::FontError(format!("cannot embed font {}", ttf.name())),
                )?;
                debug!(font = ttf.name(), warnings = warnings.len(), "Font embedded");
                FontRef::Embedded(doc.add_font(&parsed))
            }
        };
        info!(title, font = ?font, "PDF document started");
        Ok(Self {
            doc,
            font,
            pages: Vec::new(),
        })
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Append one page: the image stretched to the page, the text layer, and
    /// the outlines on top.
    ///
    /// An invisible text layer is drawn before the image so that it stays
    /// selectable but is covered; a visible one is drawn over it.
    #[instrument(skip_all, fields(page = self.pages.len() + 1))]
    pub fn add_page(&mut self, plan: &PagePlan, image: &PageImage) {
        let image_id = self.doc.add_image(image.raw());
        let scale = image.fit_scale(plan.width, plan.height);
        let image_op = Op::UseXobject {
            id: image_id,
            transform: XObjectTransform {
                translate_x: Some(Pt(0.0)),
                translate_y: Some(Pt(0.0)),
                scale_x: Some(scale),
                scale_y: Some(scale),
                // One image pixel per point.
                dpi: Some(72.0),
                rotate: None,
            },
        };

        let mut ops: Vec<Op> = Vec::new();
        if plan.visible_text {
            ops.push(image_op);
            ops.extend(self.text_ops(&plan.text, TextRenderingMode::Fill));
        } else {
            ops.extend(self.text_ops(&plan.text, TextRenderingMode::Invisible));
            ops.push(image_op);
        }
        for stroke in &plan.outlines {
            ops.extend(outline_ops(stroke));
        }

        debug!(
            ops = ops.len(),
            text = plan.text.len(),
            outlines = plan.outlines.len(),
            scale,
            "Page written"
        );
        self.pages
            .push(PdfPage::new(pt_to_mm(plan.width), pt_to_mm(plan.height), ops));
    }

    /// Serialise the document.
    pub fn finish(mut self) -> Vec<u8> {
        let page_count = self.pages.len();
        self.doc.with_pages(self.pages);
        // Raw `Tj` operators are dropped in secure mode.
        let options = PdfSaveOptions {
            secure: false,
            ..PdfSaveOptions::default()
        };
        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let output = self.doc.save(&options, &mut warnings);
        debug!(
            pages = page_count,
            bytes = output.len(),
            warnings = warnings.len(),
            "PDF serialised"
        );
        output
    }

    /// Serialise the document and write it to `path`.
    pub fn write_to_file(self, path: impl AsRef<Path>) -> Result<()> {
        let page_count = self.pages.len();
        let bytes = self.finish();
        std::fs::write(path.as_ref(), &bytes)?;
        info!(pages = page_count, "Wrote PDF to {}", path.as_ref().display());
        Ok(())
    }

    fn text_ops(&self, draws: &[TextDraw], mode: TextRenderingMode) -> Vec<Op> {
        if draws.is_empty() {
            return Vec::new();
        }
        let mut ops = vec![Op::SaveGraphicsState];
        for draw in draws {
            ops.push(Op::StartTextSection);
            ops.push(Op::SetTextRenderingMode { mode });
            ops.push(Op::SetTextCursor {
                pos: Point {
                    x: Pt(draw.x),
                    y: Pt(draw.y),
                },
            });
            match &self.font {
                FontRef::Builtin(font) => {
                    ops.push(Op::SetFontSizeBuiltinFont {
                        size: Pt(draw.font_size),
                        font: *font,
                    });
                    ops.push(Op::WriteTextBuiltinFont {
                        items: Vec::new(),
                        font: *font,
                    });
                    ops.push(win_ansi_show_text(&draw.text));
                }
                FontRef::Embedded(font) => {
                    ops.push(Op::SetFontSize {
                        size: Pt(draw.font_size),
                        font: font.clone(),
                    });
                    ops.push(Op::WriteText {
                        items: vec![TextItem::Text(draw.text.clone())],
                        font: font.clone(),
                    });
                }
            }
            ops.push(Op::EndTextSection);
        }
        ops.push(Op::RestoreGraphicsState);
        ops
    }
}

/// `Tj` showing `text` as WinAnsi bytes in a hex string.
fn win_ansi_show_text(text: &str) -> Op {
    Op::Unknown {
        key: "Tj".to_string(),
        value: vec![DictItem::String {
            data: encode_win_ansi(text),
            literal: false,
        }],
    }
}

fn outline_ops(stroke: &OutlineStroke) -> Vec<Op> {
    let (r, g, b) = stroke.colour.to_unit();
    let points = stroke
        .path
        .iter()
        .map(|&(x, y)| LinePoint {
            p: Point { x: Pt(x), y: Pt(y) },
            bezier: false,
        })
        .collect();
    vec![
        Op::SaveGraphicsState,
        Op::SetOutlineColor {
            col: Color::Rgb(Rgb::new(r, g, b, None)),
        },
        Op::SetOutlineThickness {
            pt: Pt(stroke.line_width),
        },
        Op::DrawLine {
            line: Line {
                points,
                is_closed: false,
            },
        },
        Op::RestoreGraphicsState,
    ]
}

fn pt_to_mm(pt: f32) -> Mm {
    Mm(pt * 25.4 / 72.0)
}
