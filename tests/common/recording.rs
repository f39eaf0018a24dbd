//! Surface wrapper that records host-visible calls.

use std::cell::Cell;

use textgrid::component::StyleRegion;
use textgrid::geometry::Rect;
use textgrid::surface::{MemorySurface, Surface, WriteCounter};

/// Focus behaviour of a [`RecordingSurface`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    /// Always current.
    Current,
    /// Not current; the fallback makes it current.
    Fallback,
    /// Not current and no fallback exists.
    Lost,
    /// Not current; the fallback claims success but nothing changes.
    Stuck,
}

/// A [`MemorySurface`] that logs `set_writable`, `set_lines`, width and
/// focus calls.
///
/// With [`with_tab_width`](Self::with_tab_width) it measures `\t` like a
/// host with tab stops would, so column math that bypasses
/// [`Surface::display_width`] shows up as misplaced text.
#[derive(Debug)]
pub struct RecordingSurface {
    pub inner: MemorySurface,
    pub writable_calls: Vec<bool>,
    pub set_lines_calls: usize,
    pub fallback_calls: usize,
    pub width_calls: Cell<usize>,
    tab_width: Option<usize>,
    focus: Focus,
    current: bool,
}

impl RecordingSurface {
    pub fn new(focus: Focus) -> Self {
        Self::wrap(MemorySurface::new(), focus)
    }

    pub fn wrap(inner: MemorySurface, focus: Focus) -> Self {
        Self {
            inner,
            writable_calls: Vec::new(),
            set_lines_calls: 0,
            fallback_calls: 0,
            width_calls: Cell::new(0),
            tab_width: None,
            focus,
            current: focus == Focus::Current,
        }
    }

    pub fn with_tab_width(mut self, columns: usize) -> Self {
        self.tab_width = Some(columns);
        self
    }

    pub fn rows(&self) -> &[String] {
        self.inner.rows()
    }
}

impl Surface for RecordingSurface {
    fn line_count(&self) -> usize {
        self.inner.line_count()
    }

    fn lines(&self, start: usize, end: usize) -> Vec<String> {
        self.inner.lines(start, end)
    }

    fn set_lines(&mut self, start: usize, end: usize, lines: Vec<String>) {
        self.set_lines_calls += 1;
        self.inner.set_lines(start, end, lines);
    }

    fn style_regions(&self, start: usize, end: usize) -> Vec<StyleRegion> {
        self.inner.style_regions(start, end)
    }

    fn clear_style_regions(&mut self, start: usize, end: usize) {
        self.inner.clear_style_regions(start, end);
    }

    fn add_style_region(&mut self, row: usize, col_start: usize, col_end: usize, tag: &str) {
        self.inner.add_style_region(row, col_start, col_end, tag);
    }

    fn set_writable(&mut self, writable: bool) {
        self.writable_calls.push(writable);
        self.inner.set_writable(writable);
    }

    fn write_counter(&mut self) -> &mut WriteCounter {
        self.inner.write_counter()
    }

    fn display_width(&self, text: &str) -> usize {
        self.width_calls.set(self.width_calls.get() + 1);
        match self.tab_width {
            Some(columns) => text
                .split('\t')
                .map(|part| self.inner.display_width(part))
                .sum::<usize>()
                + columns * text.matches('\t').count(),
            None => self.inner.display_width(text),
        }
    }

    fn origin(&self) -> Rect {
        self.inner.origin()
    }

    fn is_current(&self) -> bool {
        self.current
    }

    fn focus_fallback(&mut self) -> bool {
        self.fallback_calls += 1;
        match self.focus {
            Focus::Current => true,
            Focus::Fallback => {
                self.current = true;
                true
            }
            Focus::Lost => false,
            Focus::Stuck => true,
        }
    }
}
