//! Incremental construction of components.

use std::fmt::Display;

use super::{Component, StyleRegion};
use crate::error::{Error, Result};
use crate::unicode::{display_width, pad_to_width};

/// Text waiting to be right-aligned when the builder is finished.
#[derive(Clone, Debug)]
struct RightAligned {
    row: usize,
    text: String,
    tag: Option<String>,
}

/// Mutable accumulator producing a [`Component`].
///
/// Every method that adds text accepts anything implementing [`Display`],
/// so numbers and other values can be rendered directly.
#[derive(Clone, Debug, Default)]
pub struct ComponentBuilder {
    lines: Vec<String>,
    regions: Vec<StyleRegion>,
    right_aligned: Vec<RightAligned>,
}

impl ComponentBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows added so far.
    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// True when nothing has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Rows added so far.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Regions recorded so far.
    #[must_use]
    pub fn regions(&self) -> &[StyleRegion] {
        &self.regions
    }

    /// Start a new row. A tag highlights the whole row.
    pub fn line(&mut self, text: impl Display, tag: Option<&str>) -> &mut Self {
        let text = text.to_string();
        if let Some(tag) = tag {
            self.regions.push(StyleRegion::span(
                0,
                self.lines.len(),
                display_width(&text),
                tag,
            ));
        }
        self.lines.push(text);
        self
    }

    /// Append to the last row. A tag highlights just the appended text.
    pub fn append(&mut self, text: impl Display, tag: Option<&str>) -> &mut Self {
        let text = text.to_string();
        let row = self.current_row();
        if let Some(tag) = tag {
            let start = display_width(&self.lines[row]);
            self.regions
                .push(StyleRegion::span(start, row, display_width(&text), tag));
        }
        self.lines[row].push_str(&text);
        self
    }

    /// Append a single-row component to the last row, keeping its regions.
    ///
    /// Components with any other number of rows are rejected with
    /// [`Error::InvalidShape`] and the builder is left untouched.
    pub fn append_component(&mut self, component: &Component) -> Result<&mut Self> {
        if component.height() != 1 {
            return Err(Error::InvalidShape {
                expected_rows: 1,
                actual_rows: component.height(),
            }
            .log());
        }

        let row = self.current_row();
        let start = display_width(&self.lines[row]);
        let source_width = component.line_width(0);
        self.regions.extend(component.regions().iter().map(|region| {
            let mut region = region.translated(start, row);
            // Freeze open-ended regions so they stop at the appended text.
            region.area.width = Some(region.resolved_width(start + source_width));
            region
        }));
        self.lines[row].push_str(component.line(0));
        Ok(self)
    }

    /// Right-align text on the current row once [`build`](Self::build) runs.
    pub fn append_right(&mut self, text: impl Display, tag: Option<&str>) -> &mut Self {
        self.right_aligned.push(RightAligned {
            row: self.lines.len().saturating_sub(1),
            text: text.to_string(),
            tag: tag.map(str::to_owned),
        });
        self
    }

    /// Resolve right-aligned text and produce the component.
    ///
    /// Right-aligned text ends flush with the widest row. Text that does not
    /// fit widens the component instead of being truncated.
    #[must_use]
    pub fn build(mut self) -> Component {
        if self.right_aligned.is_empty() {
            return Component::from_parts(self.lines, self.regions);
        }

        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        let mut width = self
            .lines
            .iter()
            .map(|line| display_width(line))
            .max()
            .unwrap_or(0);

        for pending in std::mem::take(&mut self.right_aligned) {
            let row = if pending.row < self.lines.len() {
                pending.row
            } else {
                0
            };
            let line = &mut self.lines[row];
            let used = display_width(line);
            let text_width = display_width(&pending.text);
            if used + text_width > width {
                width = used + text_width;
            } else {
                pad_to_width(line, width - text_width);
            }

            if let Some(tag) = pending.tag.as_deref() {
                self.regions
                    .push(StyleRegion::span(display_width(line), row, text_width, tag));
            }
            line.push_str(&pending.text);
        }

        Component::from_parts(self.lines, self.regions).with_width(width)
    }

    fn current_row(&mut self) -> usize {
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        self.lines.len() - 1
    }
}
