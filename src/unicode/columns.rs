//! Column-accurate slicing of text rows.
//!
//! Each helper has a `_by` form taking the width function to measure with,
//! for hosts whose column rules differ from [`display_width`].

use unicode_segmentation::UnicodeSegmentation;

use super::width::display_width;

/// Byte index and reached column for the longest prefix fitting in `max_cols`.
///
/// A grapheme that would straddle `max_cols` is excluded.
fn fit_prefix(s: &str, max_cols: usize, width: impl Fn(&str) -> usize) -> (usize, usize) {
    let mut col = 0;
    for (idx, g) in s.grapheme_indices(true) {
        let w = width(g);
        if col + w > max_cols {
            return (idx, col);
        }
        col += w;
    }
    (s.len(), col)
}

/// Longest prefix of `s` that fits in `max_cols` columns.
///
/// Wide characters crossing the limit are dropped rather than split, so the
/// result may be narrower than `max_cols`.
#[must_use]
pub fn truncate_to_width(s: &str, max_cols: usize) -> &str {
    truncate_to_width_by(s, max_cols, display_width)
}

/// [`truncate_to_width`] measuring graphemes with `width`.
pub fn truncate_to_width_by(s: &str, max_cols: usize, width: impl Fn(&str) -> usize) -> &str {
    &s[..fit_prefix(s, max_cols, width).0]
}

/// Text covering columns `[start, end)` (`end = None` means to the end).
///
/// Graphemes cut by either edge are replaced by spaces for the columns that
/// fall inside the range, so the returned text lines up with the grid.
#[must_use]
pub fn slice_columns(s: &str, start: usize, end: Option<usize>) -> String {
    slice_columns_by(s, start, end, display_width)
}

/// [`slice_columns`] measuring graphemes with `width`.
pub fn slice_columns_by(
    s: &str,
    start: usize,
    end: Option<usize>,
    width: impl Fn(&str) -> usize,
) -> String {
    let end = end.unwrap_or(usize::MAX);
    let mut out = String::new();
    if start >= end {
        return out;
    }

    let mut col = 0usize;
    for g in s.graphemes(true) {
        if col >= end {
            break;
        }
        let g_end = col + width(g);
        if col >= start && g_end <= end {
            out.push_str(g);
        } else if g_end > start {
            let overlap = g_end.min(end) - col.max(start);
            out.extend(std::iter::repeat_n(' ', overlap));
        }
        col = g_end;
    }
    out
}

/// Right-pad `s` with spaces until it is `width` columns wide.
pub fn pad_to_width(s: &mut String, width: usize) {
    pad_to_width_by(s, width, display_width);
}

/// [`pad_to_width`] measuring `s` with `measure`.
pub fn pad_to_width_by(s: &mut String, width: usize, measure: impl Fn(&str) -> usize) {
    let current = measure(s.as_str());
    if current < width {
        s.extend(std::iter::repeat_n(' ', width - current));
    }
}
