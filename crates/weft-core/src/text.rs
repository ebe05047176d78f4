#![forbid(unsafe_code)]

//! Text measurement helpers.
//!
//! All cursor arithmetic in the toolkit runs on grapheme-cluster indices,
//! while painting and scrolling run on display columns. These helpers
//! translate between the two, accounting for wide and zero-width
//! characters via `unicode-width`.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of a string in terminal columns.
#[must_use]
pub fn text_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Number of grapheme clusters in a string.
#[must_use]
pub fn grapheme_count(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Byte offset of the grapheme at `index`.
///
/// An index at or past the end maps to `s.len()`.
#[must_use]
pub fn byte_offset(s: &str, index: usize) -> usize {
    s.grapheme_indices(true)
        .nth(index)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Display column at which the grapheme at `index` starts.
#[must_use]
pub fn col_of_index(s: &str, index: usize) -> usize {
    s.graphemes(true)
        .take(index)
        .map(UnicodeWidthStr::width)
        .sum()
}

/// Grapheme index whose start column is closest to `col`.
///
/// Columns past the end of the string map to the index one past the last
/// grapheme. A column landing inside a wide character resolves to
/// whichever of its two edges is nearer.
#[must_use]
pub fn index_near_col(s: &str, col: usize) -> usize {
    let mut start = 0usize;
    for (i, g) in s.graphemes(true).enumerate() {
        let end = start + UnicodeWidthStr::width(g);
        if col < end {
            // Closer to the leading or the trailing edge? Ties go trailing.
            return if col - start < end - col { i } else { i + 1 };
        }
        start = end;
    }
    grapheme_count(s)
}
