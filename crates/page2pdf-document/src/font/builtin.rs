// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Metrics of the standard-14 Helvetica font, taken from the Adobe AFM file.
// The font itself is never embedded; viewers supply it.
//
// Helvetica is referenced with `/WinAnsiEncoding`, so text drawn with it is
// transcoded to Windows-1252 bytes first and measured on those bytes.

use encoding_rs::{EncoderResult, WINDOWS_1252};

use super::metrics::FontMetrics;

/// Stands in for characters Windows-1252 cannot represent, and for controls.
pub const WIN_ANSI_REPLACEMENT: u8 = b'?';

/// Advance widths for printable ASCII (0x20..=0x7E).
const HELVETICA_ASCII_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

/// Advance widths for WinAnsi codes 0x80..=0xFF. Undefined codes are 0 and
/// never produced by [`encode_win_ansi`].
const HELVETICA_WIN_ANSI_UPPER_WIDTHS: [u16; 128] = [
    556, 0, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0, // 0x80
    0, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 0, 500, 667, // 0x90
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333, // 0xA0
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611, // 0xB0
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, // 0xC0
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611, // 0xD0
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278, // 0xE0
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500, // 0xF0
];

const HELVETICA_ASCENDER: f32 = 718.0;
const HELVETICA_DESCENDER: f32 = -207.0;
/// FontBBox -166 -225 1000 931.
const HELVETICA_BBOX_HEIGHT: f32 = 1156.0;

/// Transcode `text` to the single-byte WinAnsi (Windows-1252) codes Helvetica
/// is drawn with. Tabs become spaces; other controls and unencodable
/// characters become [`WIN_ANSI_REPLACEMENT`].
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(c: char) -> u8 {
    match c {
        '\t' => b' ',
        c if c.is_control() => WIN_ANSI_REPLACEMENT,
        c if c.is_ascii() => c as u8,
        c => {
            let mut utf8 = [0u8; 4];
            let mut out = [0u8; 4];
            let mut encoder = WINDOWS_1252.new_encoder();
            let encoded = encoder.encode_from_utf8_without_replacement(
                c.encode_utf8(&mut utf8),
                &mut out,
                true,
            );
            match encoded {
                (EncoderResult::InputEmpty, _, 1) => out[0],
                _ => WIN_ANSI_REPLACEMENT,
            }
        }
    }
}

/// Helvetica metrics with font-wide vertical extents.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFontMetrics;

impl BuiltinFontMetrics {
    fn code_width(code: u8) -> u16 {
        match code {
            0x20..=0x7E => HELVETICA_ASCII_WIDTHS[usize::from(code - 0x20)],
            0x80..=0xFF => HELVETICA_WIN_ANSI_UPPER_WIDTHS[usize::from(code - 0x80)],
            _ => 0,
        }
    }
}

impl FontMetrics for BuiltinFontMetrics {
    fn string_width(&self, text: &str) -> f32 {
        text.chars()
            .map(|c| f32::from(Self::code_width(win_ansi_byte(c))))
            .sum()
    }

    fn ascent(&self, _text: &str) -> f32 {
        HELVETICA_ASCENDER
    }

    fn descent(&self, _text: &str) -> f32 {
        HELVETICA_DESCENDER
    }

    fn bbox_height(&self) -> f32 {
        HELVETICA_BBOX_HEIGHT
    }
}
