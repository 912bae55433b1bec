//! Text measurement in terminal cells.
//!
//! Widths come from `unicode-width`, so CJK and most emoji count as two
//! cells and zero-width marks as none. Heights assume hard wrapping at the
//! available width, which is what the paint pass does.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a single character, in cells.
#[inline]
pub fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

/// Display width of a string, in cells.
#[inline]
pub fn string_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Number of rows `text` occupies when wrapped at `available_width` cells.
///
/// Empty text still occupies one row, as does each empty line.
pub fn measure_text_height(text: &str, available_width: usize) -> usize {
    if text.is_empty() {
        return 1;
    }
    let width = available_width.max(1);
    text.split('\n')
        .map(|line| {
            let w = string_width(line);
            if w == 0 { 1 } else { w.div_ceil(width) }
        })
        .sum()
}

// =============================================================================
// Tests
// =============================================================================
