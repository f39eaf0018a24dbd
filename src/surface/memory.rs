//! In-memory surface.

use std::collections::BTreeMap;
use std::fmt;

use super::{Surface, WriteCounter};
use crate::component::StyleRegion;
use crate::event::{LogLevel, emit_log};
use crate::geometry::Rect;
use crate::options::{OptionHost, OptionValue, SurfaceOption};

#[derive(Clone, Debug, PartialEq, Eq)]
struct Highlight {
    col_start: usize,
    col_end: usize,
    tag: String,
}

/// A surface held entirely in memory.
///
/// Behaves like an editor buffer: text can only be replaced while the
/// `modifiable` option is on (which is what [`Surface::set_writable`]
/// toggles), style regions can be added at any time, and regions follow
/// their rows when rows are inserted or removed above them.
#[derive(Clone, Debug, Default)]
pub struct MemorySurface {
    lines: Vec<String>,
    highlights: BTreeMap<usize, Vec<Highlight>>,
    origin: Rect,
    options: BTreeMap<SurfaceOption, OptionValue>,
    write_counter: WriteCounter,
}

impl MemorySurface {
    /// Create an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a surface with initial content.
    #[must_use]
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Restrict drawing to a sub-area starting at `origin`.
    #[must_use]
    pub fn with_origin(mut self, origin: Rect) -> Self {
        self.origin = origin;
        self
    }

    /// All rows.
    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.lines
    }

    /// One row, if it exists.
    #[must_use]
    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(String::as_str)
    }

    /// Whether text may currently be replaced.
    #[must_use]
    pub fn is_writable(&self) -> bool {
        matches!(
            self.options.get(&SurfaceOption::Modifiable),
            Some(OptionValue::Bool(true))
        )
    }

    fn clamp_range(&self, start: usize, end: usize) -> (usize, usize) {
        let len = self.lines.len();
        let start = start.min(len);
        (start, end.clamp(start, len))
    }
}

impl Surface for MemorySurface {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn lines(&self, start: usize, end: usize) -> Vec<String> {
        let (start, end) = self.clamp_range(start, end);
        self.lines[start..end].to_vec()
    }

    fn set_lines(&mut self, start: usize, end: usize, lines: Vec<String>) {
        if !self.is_writable() {
            emit_log(
                LogLevel::Error,
                "refusing to replace rows of a surface that is not modifiable",
            );
            return;
        }

        let (start, end) = self.clamp_range(start, end);
        let removed = end - start;
        let inserted = lines.len();
        self.lines.splice(start..end, lines);

        let old = std::mem::take(&mut self.highlights);
        for (row, marks) in old {
            let moved = if row < start {
                Some(row)
            } else if row < end {
                (row - start < inserted).then_some(row)
            } else {
                Some(row - removed + inserted)
            };
            if let Some(row) = moved {
                self.highlights.entry(row).or_default().extend(marks);
            }
        }
    }

    fn style_regions(&self, start: usize, end: usize) -> Vec<StyleRegion> {
        if start >= end {
            return Vec::new();
        }
        self.highlights
            .range(start..end)
            .flat_map(|(&row, marks)| {
                marks.iter().map(move |mark| {
                    StyleRegion::span(mark.col_start, row, mark.col_end - mark.col_start, &mark.tag)
                })
            })
            .collect()
    }

    fn clear_style_regions(&mut self, start: usize, end: usize) {
        self.highlights.retain(|row, _| !(start..end).contains(row));
    }

    fn add_style_region(&mut self, row: usize, col_start: usize, col_end: usize, tag: &str) {
        if col_end <= col_start {
            return;
        }
        self.highlights.entry(row).or_default().push(Highlight {
            col_start,
            col_end,
            tag: tag.to_owned(),
        });
    }

    fn set_writable(&mut self, writable: bool) {
        self.options
            .insert(SurfaceOption::Modifiable, OptionValue::Bool(writable));
    }

    fn write_counter(&mut self) -> &mut WriteCounter {
        &mut self.write_counter
    }

    fn origin(&self) -> Rect {
        self.origin
    }
}

impl OptionHost for MemorySurface {
    fn option(&self, option: SurfaceOption) -> Option<OptionValue> {
        self.options.get(&option).cloned()
    }

    fn set_option(&mut self, option: SurfaceOption, value: OptionValue) {
        self.options.insert(option, value);
    }

    fn clear_option(&mut self, option: SurfaceOption) {
        self.options.remove(&option);
    }
}

impl fmt::Display for MemorySurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writable(lines: &[&str]) -> MemorySurface {
        let mut surface = MemorySurface::from_lines(lines.iter().copied());
        surface.set_writable(true);
        surface
    }

    #[test]
    fn test_lines_range_is_clamped() {
        let surface = MemorySurface::from_lines(["a", "b"]);
        assert_eq!(surface.lines(1, 10), ["b"]);
        assert!(surface.lines(5, 10).is_empty());
        assert!(surface.lines(2, 1).is_empty());
    }

    #[test]
    fn test_set_lines_requires_modifiable() {
        let mut surface = MemorySurface::from_lines(["keep"]);
        surface.set_lines(0, 1, vec!["changed".to_string()]);
        assert_eq!(surface.rows(), ["keep"]);
    }

    #[test]
    fn test_set_lines_can_insert() {
        let mut surface = writable(&["a", "d"]);
        surface.set_lines(1, 1, vec!["b".to_string(), "c".to_string()]);
        assert_eq!(surface.rows(), ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_highlights_follow_their_rows() {
        let mut surface = writable(&["a", "b", "c"]);
        surface.add_style_region(0, 0, 1, "A");
        surface.add_style_region(2, 0, 1, "C");

        surface.set_lines(1, 2, vec!["x".to_string(), "y".to_string()]);
        let regions = surface.style_regions(0, surface.line_count());
        assert_eq!(
            regions,
            [StyleRegion::span(0, 0, 1, "A"), StyleRegion::span(0, 3, 1, "C")]
        );
    }

    #[test]
    fn test_highlights_on_removed_rows_are_dropped() {
        let mut surface = writable(&["a", "b", "c"]);
        surface.add_style_region(1, 0, 1, "B");
        surface.add_style_region(2, 0, 1, "C");
        surface.set_lines(0, 2, Vec::new());

        assert_eq!(surface.rows(), ["c"]);
        assert_eq!(surface.style_regions(0, 1), [StyleRegion::span(0, 0, 1, "C")]);
    }

    #[test]
    fn test_clear_style_regions_is_row_limited() {
        let mut surface = MemorySurface::from_lines(["a", "b", "c"]);
        for row in 0..3 {
            surface.add_style_region(row, 0, 1, "T");
        }
        surface.clear_style_regions(1, 2);
        let rows: Vec<_> = surface
            .style_regions(0, 3)
            .into_iter()
            .map(|r| r.y())
            .collect();
        assert_eq!(rows, [0, 2]);
    }

    #[test]
    fn test_empty_regions_are_ignored() {
        let mut surface = MemorySurface::new();
        surface.add_style_region(0, 3, 3, "T");
        assert!(surface.style_regions(0, 1).is_empty());
    }

    #[test]
    fn test_writable_is_modifiable_option() {
        let mut surface = MemorySurface::new();
        surface.set_option(SurfaceOption::Modifiable, OptionValue::Bool(true));
        assert!(surface.is_writable());
        surface.set_writable(false);
        assert_eq!(
            surface.option(SurfaceOption::Modifiable),
            Some(OptionValue::Bool(false))
        );
    }

    #[test]
    fn test_display_lists_rows() {
        let surface = MemorySurface::from_lines(["one", "two"]);
        assert_eq!(surface.to_string(), "one\ntwo\n");
    }
}
