//! Redraw loop for a single surface.
//!
//! [`Renderer`] owns a surface, where to place content on it, and a closure
//! that produces the content. Each [`refresh`](Renderer::refresh) renders a
//! new frame and erases whatever the previous frame covered that the new one
//! does not.
//!
//! # Examples
//!
//! ```
//! use textgrid::component::Component;
//! use textgrid::geometry::Bounds;
//! use textgrid::renderer::Renderer;
//! use textgrid::surface::MemorySurface;
//!
//! let mut count = 0;
//! let mut renderer = Renderer::new(MemorySurface::new(), Bounds::at(0, 0), move || {
//!     count += 1;
//!     Component::new([format!("frame {count}")])
//! });
//!
//! renderer.refresh();
//! renderer.refresh();
//! assert_eq!(renderer.surface().line(0), Some("frame 2"));
//! ```

use crate::component::Component;
use crate::event::{LogLevel, emit_log};
use crate::geometry::{Bounds, Rect};
use crate::surface::{Surface, WriteGuard, draw_component};

/// Re-renders a component into a surface on demand.
pub struct Renderer<S: Surface> {
    surface: S,
    bounds: Bounds,
    render: Box<dyn FnMut() -> Component>,
    last_frame: Option<Rect>,
    frames: u64,
}

impl<S: Surface> Renderer<S> {
    /// Create a renderer. Nothing is drawn until the first refresh.
    pub fn new<F>(surface: S, bounds: Bounds, render: F) -> Self
    where
        F: FnMut() -> Component + 'static,
    {
        Self {
            surface,
            bounds,
            render: Box::new(render),
            last_frame: None,
            frames: 0,
        }
    }

    /// Move the drawing area. Takes effect on the next refresh.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Render a new frame and draw it.
    ///
    /// Returns the area the frame occupies in absolute surface coordinates,
    /// or `None` when nothing was drawn.
    pub fn refresh(&mut self) -> Option<Rect> {
        let component = (self.render)();
        let mut surface = WriteGuard::new(&mut self.surface);
        if !surface.is_current() && !(surface.focus_fallback() && surface.is_current()) {
            emit_log(LogLevel::Debug, "surface is not current; skipping refresh");
            return None;
        }

        let origin = surface.origin();
        let frame = if self.bounds.is_empty() {
            None
        } else {
            let width = component.display_width_by(|text| surface.display_width(text));
            Some(self.bounds.clamp(width, component.height()))
                .filter(|area| !area.is_empty())
        };

        if let Some(previous) = self.last_frame {
            for stale in uncovered(previous, frame) {
                let blank = Component::default()
                    .with_width(stale.width)
                    .with_height(stale.height);
                draw_component(&mut *surface, &blank, Bounds::from(stale));
            }
        }
        draw_component(&mut *surface, &component, self.bounds);

        self.last_frame = frame;
        self.frames += 1;
        emit_log(
            LogLevel::Debug,
            &format!("refreshed frame {} at {frame:?}", self.frames),
        );
        frame.map(|area| area.offset(origin.x, origin.y))
    }

    /// Area of the last drawn frame in absolute surface coordinates.
    #[must_use]
    pub fn last_frame(&self) -> Option<Rect> {
        let origin = self.surface.origin();
        self.last_frame.map(|area| area.offset(origin.x, origin.y))
    }

    /// Number of completed refreshes.
    #[must_use]
    pub const fn frame_count(&self) -> u64 {
        self.frames
    }

    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

/// Parts of `previous` that `next` does not cover, as at most four bands.
fn uncovered(previous: Rect, next: Option<Rect>) -> Vec<Rect> {
    let Some(overlap) = next.and_then(|next| previous.intersect(&next)) else {
        return vec![previous];
    };
    [
        Rect::new(previous.x, previous.y, previous.width, overlap.y - previous.y),
        Rect::new(
            previous.x,
            overlap.bottom(),
            previous.width,
            previous.bottom() - overlap.bottom(),
        ),
        Rect::new(previous.x, overlap.y, overlap.x - previous.x, overlap.height),
        Rect::new(
            overlap.right(),
            overlap.y,
            previous.right() - overlap.right(),
            overlap.height,
        ),
    ]
    .into_iter()
    .filter(|band| !band.is_empty())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentBuilder;
    use crate::surface::{MemorySurface, find_tagged_regions};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn scripted(frames: Vec<Component>) -> impl FnMut() -> Component {
        let mut frames = frames.into_iter();
        move || frames.next().unwrap_or_default()
    }

    #[test]
    fn test_refresh_draws_frame() {
        let mut renderer = Renderer::new(
            MemorySurface::new(),
            Bounds::at(1, 0),
            scripted(vec![Component::new(["ab"])]),
        );
        assert_eq!(renderer.refresh(), Some(Rect::new(1, 0, 2, 1)));
        assert_eq!(renderer.surface().rows(), [" ab"]);
        assert_eq!(renderer.frame_count(), 1);
        assert!(!renderer.surface().is_writable());
    }

    #[test]
    fn test_shrinking_frame_blanks_stale_area() {
        let mut renderer = Renderer::new(
            MemorySurface::from_lines(["..........", "..........", ".........."]),
            Bounds::at(2, 0),
            scripted(vec![
                Component::new(["abcd", "efgh", "ijkl"]),
                Component::new(["xy"]),
            ]),
        );
        renderer.refresh();
        renderer.refresh();

        assert_eq!(
            renderer.surface().rows(),
            ["..xy  ....", "..    ....", "..    ...."]
        );
        assert_eq!(renderer.last_frame(), Some(Rect::new(2, 0, 2, 1)));
    }

    #[test]
    fn test_stale_regions_are_removed() {
        let mut tagged = ComponentBuilder::new();
        tagged.line("abc", Some("Old"));
        let mut renderer = Renderer::new(
            MemorySurface::new(),
            Bounds::at(0, 0),
            scripted(vec![tagged.build(), Component::new(["z"])]),
        );
        renderer.refresh();
        renderer.refresh();
        assert!(find_tagged_regions(renderer.surface(), "Old").is_empty());
    }

    #[test]
    fn test_empty_frame_clears_previous() {
        let mut renderer = Renderer::new(
            MemorySurface::new(),
            Bounds::at(0, 0),
            scripted(vec![Component::new(["abc"])]),
        );
        renderer.refresh();
        assert_eq!(renderer.refresh(), None);
        assert_eq!(renderer.surface().rows(), ["   "]);
        assert_eq!(renderer.last_frame(), None);
    }

    #[test]
    fn test_closure_state_is_kept_between_frames() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        let mut n = 0;
        let mut renderer = Renderer::new(MemorySurface::new(), Bounds::at(0, 0), move || {
            n += 1;
            log.borrow_mut().push(n);
            Component::new([n.to_string()])
        });
        renderer.refresh();
        renderer.refresh();
        assert_eq!(*seen.borrow(), [1, 2]);
        assert_eq!(renderer.into_surface().rows(), ["2"]);
    }

    #[test]
    fn test_uncovered_bands() {
        let previous = Rect::new(0, 0, 4, 3);
        assert_eq!(uncovered(previous, None), [previous]);
        assert_eq!(
            uncovered(previous, Some(Rect::new(1, 1, 2, 1))),
            [
                Rect::new(0, 0, 4, 1),
                Rect::new(0, 2, 4, 1),
                Rect::new(0, 1, 1, 1),
                Rect::new(3, 1, 1, 1),
            ]
        );
        assert!(uncovered(previous, Some(previous)).is_empty());
    }
}
