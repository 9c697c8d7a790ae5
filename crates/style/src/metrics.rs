//! Advance widths for the standard-14 fonts, in thousandths of the font size.
//!
//! Only the printable ASCII range is tabulated. Times reuses the Helvetica
//! tables: Times glyphs are narrower, so measurements err on the wide side and
//! truncation never lets text run past its column.

use crate::font::{FontFamily, FontWeight};

const FIRST_TABULATED: u32 = 32;
const FALLBACK_WIDTH: u16 = 556;
const COURIER_WIDTH: u16 = 600;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    278, 278, 584, 584, 584, 556, 1015,
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    278, 278, 278, 469, 556, 333,
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

/// Advance width of one character in thousandths of an em.
pub fn char_width(c: char, family: FontFamily, weight: FontWeight) -> u16 {
    if family == FontFamily::Courier {
        return COURIER_WIDTH;
    }
    match c {
        '\u{2026}' | '\u{2014}' => 1000,
        '\u{2013}' => 556,
        _ => {
            let table = match weight {
                FontWeight::Regular => &HELVETICA,
                FontWeight::Bold => &HELVETICA_BOLD,
            };
            (c as u32)
                .checked_sub(FIRST_TABULATED)
                .and_then(|idx| table.get(idx as usize))
                .copied()
                .unwrap_or(FALLBACK_WIDTH)
        }
    }
}

/// Width of `text` set at `size` points.
pub fn text_width(text: &str, family: FontFamily, weight: FontWeight, size: f32) -> f32 {
    let units: u32 = text
        .chars()
        .map(|c| char_width(c, family, weight) as u32)
        .sum();
    units as f32 * size / 1000.0
}
