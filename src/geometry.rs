//! Rectangles in column/row space.

/// An axis-aligned region with concrete size.
///
/// Coordinates are zero-based columns (`x`) and rows (`y`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Column just past the right edge.
    #[must_use]
    pub const fn right(&self) -> usize {
        self.x.saturating_add(self.width)
    }

    /// Row just past the bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> usize {
        self.y.saturating_add(self.height)
    }

    /// Check if a point is inside this rectangle.
    #[must_use]
    pub const fn contains(&self, px: usize, py: usize) -> bool {
        px >= self.x && py >= self.y && px < self.right() && py < self.bottom()
    }

    /// Compute intersection with another rectangle.
    #[must_use]
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());

        if x2 > x1 && y2 > y1 {
            Some(Rect::new(x1, y1, x2 - x1, y2 - y1))
        } else {
            None
        }
    }

    /// Check if this rectangle is empty (zero area).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Shift by another rectangle's origin.
    #[must_use]
    pub const fn offset(&self, dx: usize, dy: usize) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

/// Placement with optional size.
///
/// A missing width or height means "unbounded in this axis": drawing and
/// clipping use the content's natural size instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub x: usize,
    pub y: usize,
    pub width: Option<usize>,
    pub height: Option<usize>,
}

impl Bounds {
    /// Unbounded placement at the given origin.
    #[must_use]
    pub const fn at(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            width: None,
            height: None,
        }
    }

    /// Fully sized placement.
    #[must_use]
    pub const fn sized(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width: Some(width),
            height: Some(height),
        }
    }

    /// Constrain the width.
    #[must_use]
    pub const fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Constrain the height.
    #[must_use]
    pub const fn with_height(mut self, height: usize) -> Self {
        self.height = Some(height);
        self
    }

    /// True when either axis is constrained to zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.width, Some(0)) || matches!(self.height, Some(0))
    }

    /// Resolve against a natural size, never growing past it.
    #[must_use]
    pub fn clamp(&self, natural_width: usize, natural_height: usize) -> Rect {
        Rect::new(
            self.x,
            self.y,
            self.width.map_or(natural_width, |w| w.min(natural_width)),
            self.height.map_or(natural_height, |h| h.min(natural_height)),
        )
    }
}

impl From<Rect> for Bounds {
    fn from(rect: Rect) -> Self {
        Self::sized(rect.x, rect.y, rect.width, rect.height)
    }
}
