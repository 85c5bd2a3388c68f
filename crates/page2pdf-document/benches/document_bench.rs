// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the page2pdf-document crate: font size fitting and
// composition of a dense synthetic page.

use std::collections::BTreeSet;

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use page2pdf_core::{ContentLevel, ConversionConfig, FitMode, Point, Polygon, RegionKind};
use page2pdf_document::font::BuiltinFontMetrics;
use page2pdf_document::{FitCalculator, PageComposer, TextFont};
use page2pdf_layout::{PageLayout, Region, TextLine, Word};

fn rect(left: i32, top: i32, right: i32, bottom: i32) -> Polygon {
    Polygon::new(vec![
        Point::new(left, top),
        Point::new(right, top),
        Point::new(right, bottom),
        Point::new(left, bottom),
    ])
}

/// A 2500x3500 page with 40 regions of 5 lines of 8 words each.
fn dense_layout() -> PageLayout {
    let mut layout = PageLayout::new(2500, 3500);
    for r in 0..40 {
        let top = 100 + r * 80;
        let mut region = Region::new(format!("r{r}"), RegionKind::Text);
        region.coords = rect(100, top, 2400, top + 75);
        let mut lines_text = Vec::new();
        for l in 0..5 {
            let line_top = top + l * 15;
            let mut line = TextLine {
                id: format!("r{r}l{l}"),
                coords: rect(100, line_top, 2400, line_top + 15),
                ..TextLine::default()
            };
            let mut words = Vec::new();
            for w in 0..8 {
                let left = 100 + w * 287;
                let text = format!("word{w}");
                line.words.push(Word {
                    id: format!("r{r}l{l}w{w}"),
                    coords: rect(left, line_top, left + 280, line_top + 15),
                    text: Some(text.clone()),
                    ..Word::default()
                });
                words.push(text);
            }
            let line_text = words.join(" ");
            line.text = Some(line_text.clone());
            lines_text.push(line_text);
            region.lines.push(line);
        }
        region.text = Some(lines_text.join("\n"));
        layout.regions.push(region);
    }
    layout
}

fn bench_fit(c: &mut Criterion) {
    let font = BuiltinFontMetrics;
    let fit = FitCalculator::new(&font, FitMode::Width);
    c.bench_function("fit_width (sentence, 1200pt)", |b| {
        b.iter(|| fit.fit_width(black_box("The quick brown fox jumps over the lazy dog"), 1200.0));
    });
}

fn bench_compose(c: &mut Criterion) {
    let layout = dense_layout();
    let font = TextFont::helvetica();

    for level in [ContentLevel::Region, ContentLevel::Word] {
        let config = ConversionConfig {
            text_source: Some(level),
            outlines: BTreeSet::from([level]),
            ..ConversionConfig::default()
        };
        let composer = PageComposer::new(&config, &font);
        c.bench_function(&format!("compose (dense page, {level})"), |b| {
            b.iter(|| black_box(composer.compose(black_box(&layout))));
        });
    }
}

criterion_group!(benches, bench_fit, bench_compose);
criterion_main!(benches);
