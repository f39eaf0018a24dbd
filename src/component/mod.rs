//! Components: immutable grids of text rows with tagged style regions.
//!
//! A [`Component`] is produced once, either by a [`ComponentBuilder`] or by
//! one of the merge operations in [`crate::compose`], and is read-only from
//! then on. Its rows are private, which is what makes the lazily cached
//! display width safe.
//!
//! # Examples
//!
//! ```
//! use textgrid::component::ComponentBuilder;
//!
//! let mut builder = ComponentBuilder::new();
//! builder.line("Name", Some("Title"));
//! builder.append(": ", None).append("value", Some("String"));
//! let component = builder.build();
//!
//! assert_eq!(component.height(), 1);
//! assert_eq!(component.display_width(), 11);
//! assert_eq!(component.regions().len(), 2);
//! ```

mod builder;

pub use builder::ComponentBuilder;

use std::cell::OnceCell;

use crate::event::{LogLevel, emit_log};
use crate::geometry::Bounds;
use crate::unicode::display_width;

/// A tagged rectangle inside a component or surface.
///
/// `area.x`/`area.y` are relative to the owner's origin. A missing width
/// means "to the end of the line's text" and is resolved against the line
/// as it is when the region is merged or drawn. A missing height means the
/// region grows to cover every drawn row from `area.y` down.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StyleRegion {
    pub area: Bounds,
    pub tag: Option<String>,
}

impl StyleRegion {
    /// Create a region over `area`.
    #[must_use]
    pub fn new(area: Bounds, tag: Option<&str>) -> Self {
        Self {
            area,
            tag: tag.map(str::to_owned),
        }
    }

    /// Single-row region of a fixed width.
    #[must_use]
    pub fn span(x: usize, y: usize, width: usize, tag: &str) -> Self {
        Self::new(Bounds::at(x, y).with_width(width).with_height(1), Some(tag))
    }

    /// Single-row region running to the end of the line.
    #[must_use]
    pub fn to_line_end(x: usize, y: usize, tag: &str) -> Self {
        Self::new(Bounds::at(x, y).with_height(1), Some(tag))
    }

    /// Column of the region's left edge.
    #[must_use]
    pub const fn x(&self) -> usize {
        self.area.x
    }

    /// Row of the region's top edge.
    #[must_use]
    pub const fn y(&self) -> usize {
        self.area.y
    }

    /// Copy moved by `(dx, dy)`.
    #[must_use]
    pub fn translated(&self, dx: usize, dy: usize) -> Self {
        let mut region = self.clone();
        region.area.x += dx;
        region.area.y += dy;
        region
    }

    /// Width in columns given the width of the line the region sits on.
    #[must_use]
    pub fn resolved_width(&self, line_width: usize) -> usize {
        self.area
            .width
            .unwrap_or_else(|| line_width.saturating_sub(self.area.x))
    }
}

/// Immutable grid of text rows plus style regions.
#[derive(Clone, Debug, Default)]
pub struct Component {
    lines: Vec<String>,
    regions: Vec<StyleRegion>,
    width: Option<usize>,
    natural_width: OnceCell<usize>,
    height: Option<usize>,
}

impl Component {
    /// Create a component from its rows.
    #[must_use]
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Attach style regions.
    ///
    /// Regions pointing at a row that does not exist are dropped and logged.
    #[must_use]
    pub fn with_regions<I>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = StyleRegion>,
    {
        let rows = self.height();
        for region in regions {
            if region.y() < rows {
                self.regions.push(region);
            } else {
                emit_log(
                    LogLevel::Warn,
                    &format!(
                        "dropping style region on row {} of a {rows}-row component",
                        region.y()
                    ),
                );
            }
        }
        self
    }

    /// Override the display width.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Override the height.
    #[must_use]
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = Some(height);
        self
    }

    /// Rows as stored (no trailing padding).
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Row text, empty when the row has no stored content.
    #[must_use]
    pub fn line(&self, row: usize) -> &str {
        self.lines.get(row).map_or("", String::as_str)
    }

    /// Display width of one row.
    #[must_use]
    pub fn line_width(&self, row: usize) -> usize {
        display_width(self.line(row))
    }

    /// Style regions in attachment order.
    #[must_use]
    pub fn regions(&self) -> &[StyleRegion] {
        &self.regions
    }

    /// Height override, or the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height.unwrap_or(self.lines.len())
    }

    /// Width override, or the widest row. Computed once.
    #[must_use]
    pub fn display_width(&self) -> usize {
        self.width.unwrap_or_else(|| {
            *self
                .natural_width
                .get_or_init(|| self.display_width_by(display_width))
        })
    }

    /// Width override, or the widest row as measured by `measure`.
    ///
    /// Used when a surface decides column widths itself; the result is not
    /// cached.
    pub fn display_width_by(&self, measure: impl Fn(&str) -> usize) -> usize {
        self.width.unwrap_or_else(|| {
            self.lines
                .iter()
                .map(|line| measure(line))
                .max()
                .unwrap_or(0)
        })
    }

    /// True when the component occupies no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.height() == 0
    }

    pub(crate) fn from_parts(lines: Vec<String>, regions: Vec<StyleRegion>) -> Self {
        Self {
            lines,
            regions,
            ..Self::default()
        }
    }
}

impl PartialEq for Component {
    fn eq(&self, other: &Self) -> bool {
        self.lines == other.lines
            && self.regions == other.regions
            && self.height() == other.height()
            && self.display_width() == other.display_width()
    }
}

impl Eq for Component {}
