//! Drawable text surfaces.
//!
//! A [`Surface`] is whatever the host gives the engine to draw into: an
//! editor buffer, a floating window, or the in-memory [`MemorySurface`].
//! It stores rows of text plus a sparse index of tagged single-row style
//! regions.
//!
//! # Examples
//!
//! ```
//! use textgrid::component::ComponentBuilder;
//! use textgrid::geometry::Bounds;
//! use textgrid::surface::{MemorySurface, draw_component, find_tagged_regions};
//!
//! let mut builder = ComponentBuilder::new();
//! builder.line("XYZ", Some("T"));
//! let component = builder.build();
//!
//! let mut surface = MemorySurface::new();
//! draw_component(&mut surface, &component, Bounds::at(1, 0));
//!
//! assert_eq!(surface.line(0), Some(" XYZ"));
//! let found = find_tagged_regions(&surface, "T");
//! assert_eq!((found[0].x, found[0].right()), (1, 4));
//! ```

mod drawing;
mod memory;

pub use drawing::{draw_component, find_tagged_regions, read_region};
pub use memory::MemorySurface;

use std::ops::{Deref, DerefMut};

use crate::component::StyleRegion;
use crate::geometry::Rect;
use crate::unicode;

/// Depth counter for the writable state of a surface.
///
/// Only the outermost enter/exit pair changes the surface's real state, so
/// a draw nested inside another draw does not lock the surface early.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WriteCounter {
    depth: u32,
}

impl WriteCounter {
    /// Increase depth; true on the 0 → 1 transition.
    pub fn enter(&mut self) -> bool {
        self.depth += 1;
        self.depth == 1
    }

    /// Decrease depth; true on the 1 → 0 transition.
    pub fn exit(&mut self) -> bool {
        if self.depth == 0 {
            return false;
        }
        self.depth -= 1;
        self.depth == 0
    }

    /// Current nesting depth.
    #[must_use]
    pub const fn depth(&self) -> u32 {
        self.depth
    }
}

/// Line store with a parallel style-region index.
///
/// Rows are zero-based. Ranges are half-open `[start, end)` and are clamped
/// to the rows that exist.
pub trait Surface {
    /// Number of rows.
    fn line_count(&self) -> usize;

    /// Rows `[start, end)`.
    fn lines(&self, start: usize, end: usize) -> Vec<String>;

    /// Replace rows `[start, end)` with `lines`; the row count may change.
    fn set_lines(&mut self, start: usize, end: usize, lines: Vec<String>);

    /// Style regions on rows `[start, end)` in absolute coordinates, each
    /// one row high with a concrete width.
    fn style_regions(&self, start: usize, end: usize) -> Vec<StyleRegion>;

    /// Remove every style region on rows `[start, end)`.
    fn clear_style_regions(&mut self, start: usize, end: usize);

    /// Tag columns `[col_start, col_end)` of `row`.
    fn add_style_region(&mut self, row: usize, col_start: usize, col_end: usize, tag: &str);

    /// Switch the host-visible writable state.
    fn set_writable(&mut self, writable: bool);

    /// Nesting counter for [`WriteGuard`].
    fn write_counter(&mut self) -> &mut WriteCounter;

    /// Column width of `text` as the host displays it.
    fn display_width(&self, text: &str) -> usize {
        unicode::display_width(text)
    }

    /// Where this surface's drawable area starts inside its rows.
    fn origin(&self) -> Rect {
        Rect::default()
    }

    /// Whether the surface is the one active in the host right now.
    fn is_current(&self) -> bool {
        true
    }

    /// Switch the host to a context where this surface is current.
    /// Returns false when no such context is known.
    fn focus_fallback(&mut self) -> bool {
        false
    }
}

/// Scoped writable state for a surface.
///
/// Creating a guard makes the surface writable (if it is the outermost
/// guard) and dropping it makes it read-only again, on every exit path.
pub struct WriteGuard<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: Surface + ?Sized> WriteGuard<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        if surface.write_counter().enter() {
            surface.set_writable(true);
        }
        Self { surface }
    }
}

impl<S: Surface + ?Sized> Deref for WriteGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for WriteGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for WriteGuard<'_, S> {
    fn drop(&mut self) {
        if self.surface.write_counter().exit() {
            self.surface.set_writable(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_transitions() {
        let mut counter = WriteCounter::default();
        assert!(counter.enter());
        assert!(!counter.enter());
        assert_eq!(counter.depth(), 2);
        assert!(!counter.exit());
        assert!(counter.exit());
        assert!(!counter.exit());
        assert_eq!(counter.depth(), 0);
    }

    #[test]
    fn test_nested_guards_toggle_once() {
        let mut surface = MemorySurface::new();
        assert!(!surface.is_writable());
        {
            let mut outer = WriteGuard::new(&mut surface);
            assert!(outer.is_writable());
            {
                let inner = WriteGuard::new(&mut *outer);
                assert!(inner.is_writable());
            }
            assert!(outer.is_writable());
        }
        assert!(!surface.is_writable());
    }
}
