//! Metrics for the standard Helvetica font.
//!
//! The renderer draws all text with the non-embedded Type1 Helvetica face, so
//! the layout only needs its advance widths to measure and wrap text. Widths
//! are in thousandths of an em, taken from the Adobe core font AFM.

/// PostScript name of the face every text run is drawn with.
pub const BASE_FONT: &str = "Helvetica";

/// Advance widths for ASCII 32..=126.
const HELVETICA_WIDTHS: [u16; 95] = [
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

// Used for Latin-1 characters outside the ASCII table.
const DEFAULT_WIDTH: u16 = 556;

pub fn char_width(c: char) -> u16 {
    match c as u32 {
        code @ 32..=126 => HELVETICA_WIDTHS[(code - 32) as usize],
        _ => DEFAULT_WIDTH,
    }
}

/// Width of `text` in points at `font_size`.
pub fn text_width(text: &str, font_size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(c))).sum();
    units as f32 * font_size / 1000.0
}
