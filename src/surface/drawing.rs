//! Drawing components into surfaces.

use super::{Surface, WriteGuard};
use crate::component::{Component, StyleRegion};
use crate::compose::splice_row;
use crate::error::Error;
use crate::event::{LogLevel, emit_log};
use crate::geometry::{Bounds, Rect};
use crate::unicode::{slice_columns_by, truncate_to_width_by};

/// Draw `component` into `surface` at `bounds`, relative to the surface
/// origin.
///
/// Only the window covered by the component is replaced: text left and
/// right of it on the same rows is kept in place, and so are style regions
/// outside the window. A bounded window never grows past the component; a
/// component larger than the window is clipped. Zero-sized bounds draw
/// nothing.
///
/// Columns are measured with [`Surface::display_width`], so a host that
/// counts some characters differently keeps its own column layout.
///
/// When the surface is not current and cannot be made current through
/// [`Surface::focus_fallback`], nothing is drawn.
pub fn draw_component<S: Surface + ?Sized>(surface: &mut S, component: &Component, bounds: Bounds) {
    let mut surface = WriteGuard::new(surface);
    if bounds.is_empty() {
        return;
    }
    if !surface.is_current() && !(surface.focus_fallback() && surface.is_current()) {
        emit_log(LogLevel::Debug, "surface is not current; skipping draw");
        return;
    }

    let origin = surface.origin();
    let area = bounds
        .clamp(
            component.display_width_by(|text| surface.display_width(text)),
            component.height(),
        )
        .offset(origin.x, origin.y);
    if area.height == 0 {
        return;
    }
    let bounded = bounds.width.is_some();

    let count = surface.line_count();
    if count < area.y {
        surface.set_lines(count, count, vec![String::new(); area.y - count]);
    }

    let measure = |text: &str| surface.display_width(text);
    let line_widths: Vec<usize> = (0..area.height)
        .map(|row| measure(component.line(row)))
        .collect();

    // Width of the replaced window on each row. Unbounded rows never lose
    // text, even when the component declares a narrower width.
    let windows: Vec<usize> = line_widths
        .iter()
        .map(|&line_width| {
            if bounded {
                area.width
            } else {
                area.width.max(line_width)
            }
        })
        .collect();

    let existing = surface.lines(area.y, area.bottom());
    let replaced = existing.len();
    let new_lines: Vec<String> = windows
        .iter()
        .enumerate()
        .map(|(row, &window)| {
            let current = existing.get(row).map_or("", String::as_str);
            let text = truncate_to_width_by(component.line(row), window, measure);
            splice_row(current, area.x, text, window, bounded, measure)
        })
        .collect();
    surface.set_lines(area.y, area.y + replaced, new_lines);

    let kept = surface.style_regions(area.y, area.bottom());
    surface.clear_style_regions(area.y, area.bottom());
    for region in &kept {
        let window = windows[region.y() - area.y];
        restore_outside_window(&mut *surface, region, area.x, area.x + window);
    }

    for region in component.regions() {
        let Some(tag) = region.tag.as_deref() else {
            continue;
        };
        if region.y() >= area.height {
            continue;
        }
        let last_row = region
            .area
            .height
            .map_or(area.height, |h| (region.y() + h).min(area.height));
        for row in region.y()..last_row {
            let start = region.x();
            let end = (start + region.resolved_width(line_widths[row])).min(windows[row]);
            if start < end {
                surface.add_style_region(area.y + row, area.x + start, area.x + end, tag);
            }
        }
    }
}

/// Re-add the parts of an existing region that lie outside `[left, right)`.
fn restore_outside_window<S: Surface + ?Sized>(
    surface: &mut S,
    region: &StyleRegion,
    left: usize,
    right: usize,
) {
    let Some(tag) = region.tag.as_deref() else {
        return;
    };
    let start = region.x();
    let end = start + region.area.width.unwrap_or(0);
    if start < left {
        surface.add_style_region(region.y(), start, end.min(left), tag);
    }
    if end > right {
        surface.add_style_region(region.y(), start.max(right), end, tag);
    }
}

/// Every style region tagged `tag`, in absolute surface coordinates.
///
/// An empty tag matches nothing and is reported as an invalid argument.
#[must_use]
pub fn find_tagged_regions<S: Surface + ?Sized>(surface: &S, tag: &str) -> Vec<Rect> {
    if tag.is_empty() {
        let _ = Error::InvalidArgument("cannot search for an empty tag".to_string()).log();
        return Vec::new();
    }
    surface
        .style_regions(0, surface.line_count())
        .into_iter()
        .filter(|region| region.tag.as_deref() == Some(tag))
        .map(|region| {
            Rect::new(
                region.x(),
                region.y(),
                region.area.width.unwrap_or(0),
                region.area.height.unwrap_or(1),
            )
        })
        .collect()
}

/// Text covered by `rect`, one entry per row that exists.
#[must_use]
pub fn read_region<S: Surface + ?Sized>(surface: &S, rect: Rect) -> Vec<String> {
    surface
        .lines(rect.y, rect.bottom())
        .iter()
        .map(|line| {
            slice_columns_by(line, rect.x, Some(rect.right()), |text| {
                surface.display_width(text)
            })
        })
        .collect()
}
