// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types: content levels, content types, and the outline colour table.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{Page2PdfError, Result};

/// Granularity of a content unit in the layout hierarchy.
///
/// The derived ordering (region, line, word, glyph) is also the order in which
/// outline layers are stacked on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentLevel {
    Region,
    TextLine,
    Word,
    Glyph,
}

impl ContentLevel {
    /// Parse a single-letter level code (`R`, `L`/`T`, `W`, `G`), case-insensitive.
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'R' => Some(Self::Region),
            'L' | 'T' => Some(Self::TextLine),
            'W' => Some(Self::Word),
            'G' => Some(Self::Glyph),
            _ => None,
        }
    }

    /// Parse a level argument such as `"L"`; exactly one code is expected.
    pub fn parse(value: &str) -> Result<Self> {
        let mut chars = value.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => Self::from_code(code).ok_or_else(|| {
                Page2PdfError::InvalidArgument(format!(
                    "unknown content level '{value}' (expected one of R, L, W, G)"
                ))
            }),
            _ => Err(Page2PdfError::InvalidArgument(format!(
                "content level must be a single letter (R, L, W, G), got '{value}'"
            ))),
        }
    }

    /// Parse a combination of level codes such as `"RW"` or `"r,l"`.
    pub fn parse_set(value: &str) -> Result<BTreeSet<Self>> {
        let mut levels = BTreeSet::new();
        for code in value.chars().filter(|c| !c.is_whitespace() && *c != ',') {
            let level = Self::from_code(code).ok_or_else(|| {
                Page2PdfError::InvalidArgument(format!(
                    "unknown outline level '{code}' in '{value}' (expected R, L, W, G)"
                ))
            })?;
            levels.insert(level);
        }
        Ok(levels)
    }
}

impl std::fmt::Display for ContentLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Region => "region",
            Self::TextLine => "text-line",
            Self::Word => "word",
            Self::Glyph => "glyph",
        };
        f.write_str(name)
    }
}

/// Region subtypes of the PAGE format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionKind {
    Text,
    Image,
    LineDrawing,
    Graphic,
    Table,
    Chart,
    Separator,
    Maths,
    Chem,
    Music,
    Advert,
    Noise,
    Map,
    Custom,
    Unknown,
}

impl RegionKind {
    /// Map a PAGE element local name (e.g. `TextRegion`) to its kind.
    ///
    /// Returns `None` for names that are not region elements at all.
    pub fn from_element_name(name: &str) -> Option<Self> {
        let kind = match name {
            "TextRegion" => Self::Text,
            "ImageRegion" => Self::Image,
            "LineDrawingRegion" => Self::LineDrawing,
            "GraphicRegion" => Self::Graphic,
            "TableRegion" => Self::Table,
            "ChartRegion" => Self::Chart,
            "SeparatorRegion" => Self::Separator,
            "MathsRegion" => Self::Maths,
            "ChemRegion" => Self::Chem,
            "MusicRegion" => Self::Music,
            "AdvertRegion" => Self::Advert,
            "NoiseRegion" => Self::Noise,
            "MapRegion" => Self::Map,
            "CustomRegion" => Self::Custom,
            "UnknownRegion" => Self::Unknown,
            other if other.ends_with("Region") && other.len() > "Region".len() => Self::Unknown,
            _ => return None,
        };
        Some(kind)
    }
}

/// Type tag of a content object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    Region(RegionKind),
    TextLine,
    Word,
    Glyph,
}

impl ContentType {
    /// Whether objects of this type carry recognised text.
    pub fn is_text_bearing(&self) -> bool {
        !matches!(self, Self::Region(kind) if *kind != RegionKind::Text)
    }

    /// Stroke colour used when drawing this type's outline.
    pub fn outline_colour(&self) -> Rgb8 {
        match self {
            Self::TextLine => Rgb8::new(50, 205, 50),
            Self::Word => Rgb8::new(178, 34, 34),
            Self::Glyph => Rgb8::new(46, 139, 8),
            Self::Region(kind) => match kind {
                RegionKind::Text => Rgb8::new(0, 0, 255),
                RegionKind::Chart => Rgb8::new(128, 0, 128),
                RegionKind::Graphic => Rgb8::new(0, 128, 0),
                RegionKind::Image => Rgb8::new(0, 206, 209),
                RegionKind::LineDrawing => Rgb8::new(184, 134, 11),
                RegionKind::Maths => Rgb8::new(0, 191, 255),
                RegionKind::Noise => Rgb8::new(255, 0, 0),
                RegionKind::Separator => Rgb8::new(255, 0, 255),
                RegionKind::Table => Rgb8::new(139, 69, 19),
                RegionKind::Advert => Rgb8::new(70, 130, 180),
                RegionKind::Chem => Rgb8::new(255, 140, 0),
                RegionKind::Music => Rgb8::new(148, 0, 211),
                RegionKind::Map | RegionKind::Custom | RegionKind::Unknown => Rgb8::BLUE,
            },
        }
    }
}

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLUE: Rgb8 = Rgb8::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Components scaled to `0.0..=1.0`.
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_codes_are_case_insensitive_with_t_alias() {
        assert_eq!(ContentLevel::parse("r").unwrap(), ContentLevel::Region);
        assert_eq!(ContentLevel::parse("L").unwrap(), ContentLevel::TextLine);
        assert_eq!(ContentLevel::parse("t").unwrap(), ContentLevel::TextLine);
        assert_eq!(ContentLevel::parse("W").unwrap(), ContentLevel::Word);
        assert_eq!(ContentLevel::parse(" g ").unwrap(), ContentLevel::Glyph);
    }

    #[test]
    fn invalid_level_codes_are_rejected() {
        assert!(ContentLevel::parse("X").is_err());
        assert!(ContentLevel::parse("RL").is_err());
        assert!(ContentLevel::parse("").is_err());
        assert!(ContentLevel::parse_set("RQ").is_err());
    }

    #[test]
    fn outline_set_is_deduplicated_and_ordered() {
        let set = ContentLevel::parse_set("gWrT,w").unwrap();
        let levels: Vec<_> = set.into_iter().collect();
        assert_eq!(
            levels,
            vec![
                ContentLevel::Region,
                ContentLevel::TextLine,
                ContentLevel::Word,
                ContentLevel::Glyph
            ]
        );
    }

    #[test]
    fn region_element_names() {
        assert_eq!(RegionKind::from_element_name("TextRegion"), Some(RegionKind::Text));
        assert_eq!(RegionKind::from_element_name("ChemRegion"), Some(RegionKind::Chem));
        assert_eq!(
            RegionKind::from_element_name("FancyNewRegion"),
            Some(RegionKind::Unknown)
        );
        assert_eq!(RegionKind::from_element_name("Region"), None);
        assert_eq!(RegionKind::from_element_name("TextLine"), None);
        assert_eq!(RegionKind::from_element_name("RegionRef"), None);
    }

    #[test]
    fn only_text_regions_and_low_level_types_carry_text() {
        assert!(ContentType::Region(RegionKind::Text).is_text_bearing());
        assert!(ContentType::TextLine.is_text_bearing());
        assert!(ContentType::Word.is_text_bearing());
        assert!(ContentType::Glyph.is_text_bearing());
        assert!(!ContentType::Region(RegionKind::Image).is_text_bearing());
        assert!(!ContentType::Region(RegionKind::Table).is_text_bearing());
    }

    #[test]
    fn outline_colour_table() {
        let expected = [
            (ContentType::TextLine, (50, 205, 50)),
            (ContentType::Word, (178, 34, 34)),
            (ContentType::Glyph, (46, 139, 8)),
            (ContentType::Region(RegionKind::Text), (0, 0, 255)),
            (ContentType::Region(RegionKind::Chart), (128, 0, 128)),
            (ContentType::Region(RegionKind::Graphic), (0, 128, 0)),
            (ContentType::Region(RegionKind::Image), (0, 206, 209)),
            (ContentType::Region(RegionKind::LineDrawing), (184, 134, 11)),
            (ContentType::Region(RegionKind::Maths), (0, 191, 255)),
            (ContentType::Region(RegionKind::Noise), (255, 0, 0)),
            (ContentType::Region(RegionKind::Separator), (255, 0, 255)),
            (ContentType::Region(RegionKind::Table), (139, 69, 19)),
            (ContentType::Region(RegionKind::Advert), (70, 130, 180)),
            (ContentType::Region(RegionKind::Chem), (255, 140, 0)),
            (ContentType::Region(RegionKind::Music), (148, 0, 211)),
        ];
        for (content_type, (r, g, b)) in expected {
            assert_eq!(content_type.outline_colour(), Rgb8::new(r, g, b), "{content_type:?}");
        }
    }

    #[test]
    fn unlisted_region_types_default_to_blue() {
        for kind in [RegionKind::Map, RegionKind::Custom, RegionKind::Unknown] {
            assert_eq!(ContentType::Region(kind).outline_colour(), Rgb8::BLUE);
        }
    }

    #[test]
    fn unit_components() {
        let (r, g, b) = Rgb8::new(255, 0, 51).to_unit();
        assert_eq!(r, 1.0);
        assert_eq!(g, 0.0);
        assert!((b - 0.2).abs() < 1e-6);
    }
}
