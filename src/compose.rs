//! Combining components: side-by-side merges and overlays.
//!
//! Both operations copy the regions of their inputs before relocating them,
//! so the inputs are never modified.

use std::borrow::Cow;

use crate::component::{Component, StyleRegion};
use crate::geometry::{Bounds, Rect};
use crate::unicode::{
    display_width, pad_to_width, pad_to_width_by, slice_columns_by, truncate_to_width,
};

/// Place components side by side, left to right.
///
/// Empty slots are skipped. Every component is cut to its display width
/// (including a width set with [`Component::with_width`]), and every one
/// except the last is padded to it on every row, so the next one starts on
/// a common column. Rows a shorter component lacks are filled with blanks.
/// Regions keep to the rows and columns of their own component: widths and
/// heights are frozen at merge time. `separator` is inserted between
/// neighbours on every row and carries no style.
///
/// Returns the merged component and where the rightmost input landed in it,
/// or `None` when nothing with a non-zero height was given. A single
/// survivor is returned as-is, borrowed.
#[must_use]
pub fn merge_horizontal<'a>(
    components: &[Option<&'a Component>],
    separator: Option<&str>,
) -> Option<(Cow<'a, Component>, Rect)> {
    let present: Vec<&'a Component> = components.iter().flatten().copied().collect();
    let height = present.iter().map(|c| c.height()).max().unwrap_or(0);
    if height == 0 {
        return None;
    }
    if let [only] = present.as_slice() {
        let rect = Rect::new(0, 0, only.display_width(), only.height());
        return Some((Cow::Borrowed(*only), rect));
    }

    let separator = separator.unwrap_or("");
    let separator_width = display_width(separator);
    let mut lines = vec![String::new(); height];
    let mut regions = Vec::new();
    let mut offset = 0;
    let mut last = Rect::default();

    for (index, component) in present.iter().enumerate() {
        let is_last = index + 1 == present.len();
        if index > 0 {
            for line in &mut lines {
                line.push_str(separator);
            }
            offset += separator_width;
        }

        let width = component.display_width();
        let rows = component.height();
        let mut row_starts = Vec::with_capacity(height);
        for (row, line) in lines.iter_mut().enumerate() {
            let start = display_width(line);
            row_starts.push(start);
            if row < rows {
                line.push_str(truncate_to_width(component.line(row), width));
            }
            if !is_last {
                pad_to_width(line, start + width);
            }
        }

        for region in component.regions() {
            let Some(&start) = row_starts.get(region.y()) else {
                continue;
            };
            if region.x() >= width || region.y() >= rows {
                continue;
            }
            let remaining = rows - region.y();
            let mut relocated = region.translated(start, 0);
            relocated.area.width = Some(
                region
                    .resolved_width(component.line_width(region.y()))
                    .min(width - region.x()),
            );
            relocated.area.height = Some(region.area.height.map_or(remaining, |h| h.min(remaining)));
            regions.push(relocated);
        }

        last = Rect::new(offset, 0, width, component.height());
        offset += width;
    }

    Some((Cow::Owned(Component::from_parts(lines, regions)), last))
}

/// Write `overlay` on top of `base` at `bounds` (origin and unbounded when
/// `None`).
///
/// Overlay rows replace the base columns they cover; base text left and
/// right of the overlay is kept. Overlay text is cut to `bounds.width`
/// columns and only `bounds.height` rows are written. Base rows are added
/// as needed so the result has no gaps.
#[must_use]
pub fn merge_overlap(base: &Component, overlay: &Component, bounds: Option<Bounds>) -> Component {
    let bounds = bounds.unwrap_or_default();
    let mut lines: Vec<String> = (0..base.height())
        .map(|row| base.line(row).to_owned())
        .collect();

    let rows = bounds
        .height
        .map_or(overlay.height(), |h| h.min(overlay.height()));
    for row in 0..rows {
        let target = bounds.y + row;
        if lines.len() <= target {
            lines.resize(target + 1, String::new());
        }
        let text = overlay.line(row);
        let text = bounds.width.map_or(text, |w| truncate_to_width(text, w));
        lines[target] = splice_row(
            &lines[target],
            bounds.x,
            text,
            display_width(text),
            false,
            display_width,
        );
    }

    let mut regions = base.regions().to_vec();
    regions.extend(
        overlay
            .regions()
            .iter()
            .filter_map(|region| relocate_overlay_region(region, overlay, bounds, rows)),
    );

    Component::from_parts(lines, regions)
}

fn relocate_overlay_region(
    region: &StyleRegion,
    overlay: &Component,
    bounds: Bounds,
    rows: usize,
) -> Option<StyleRegion> {
    if region.y() >= rows {
        return None;
    }
    let mut width = region.resolved_width(overlay.line_width(region.y()));
    if let Some(limit) = bounds.width {
        if region.x() >= limit {
            return None;
        }
        width = width.min(limit - region.x());
    }

    let remaining = rows - region.y();
    let mut relocated = region.translated(bounds.x, bounds.y);
    relocated.area.width = Some(width);
    relocated.area.height = Some(region.area.height.map_or(remaining, |h| h.min(remaining)));
    Some(relocated)
}

/// Replace columns `[x, x + window)` of `row` with `text`.
///
/// A row shorter than `x` is padded up to it. `text` is padded to fill the
/// window when `pad` is set or when there is text after the window that
/// must stay in place.
pub(crate) fn splice_row(
    row: &str,
    x: usize,
    text: &str,
    window: usize,
    pad: bool,
    width: impl Fn(&str) -> usize + Copy,
) -> String {
    let mut out = if width(row) <= x {
        let mut prefix = row.to_owned();
        pad_to_width_by(&mut prefix, x, width);
        prefix
    } else {
        slice_columns_by(row, 0, Some(x), width)
    };
    let suffix = slice_columns_by(row, x + window, None, width);

    out.push_str(text);
    if pad || !suffix.is_empty() {
        pad_to_width_by(&mut out, x + window, width);
    }
    out.push_str(&suffix);
    out
}
