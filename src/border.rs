//! Borders drawn around components.

use bitflags::bitflags;

use crate::component::{Component, ComponentBuilder};
use crate::compose::merge_overlap;
use crate::error::{Error, Result};
use crate::geometry::Bounds;
use crate::unicode::{display_width, truncate_to_width};

bitflags! {
    /// Which edges of a border are drawn.
    #[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
    pub struct BorderSides: u8 {
        const TOP    = 0x01;
        const RIGHT  = 0x02;
        const BOTTOM = 0x04;
        const LEFT   = 0x08;
        const ALL    = Self::TOP.bits() | Self::RIGHT.bits() | Self::BOTTOM.bits() | Self::LEFT.bits();
    }
}

impl Default for BorderSides {
    fn default() -> Self {
        Self::ALL
    }
}

/// Title placement on the top edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TitleAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Border glyphs and options.
///
/// Every glyph occupies exactly one column. The glyph order used by
/// [`from_parts`](Self::from_parts) is top-left, top, top-right, right,
/// bottom-right, bottom, bottom-left, left.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Border {
    pub top_left: String,
    pub top: String,
    pub top_right: String,
    pub right: String,
    pub bottom_right: String,
    pub bottom: String,
    pub bottom_left: String,
    pub left: String,
    pub sides: BorderSides,
    pub tag: Option<String>,
    pub title: Option<String>,
    pub title_align: TitleAlign,
}

impl Border {
    fn from_glyphs(glyphs: [&str; 8]) -> Self {
        let [top_left, top, top_right, right, bottom_right, bottom, bottom_left, left] =
            glyphs.map(str::to_owned);
        Self {
            top_left,
            top,
            top_right,
            right,
            bottom_right,
            bottom,
            bottom_left,
            left,
            sides: BorderSides::ALL,
            tag: None,
            title: None,
            title_align: TitleAlign::Left,
        }
    }

    /// Single-line box drawing characters.
    #[must_use]
    pub fn single() -> Self {
        Self::from_glyphs(["┌", "─", "┐", "│", "┘", "─", "└", "│"])
    }

    /// Double-line box drawing characters.
    #[must_use]
    pub fn double() -> Self {
        Self::from_glyphs(["╔", "═", "╗", "║", "╝", "═", "╚", "║"])
    }

    /// Rounded corner box drawing characters.
    #[must_use]
    pub fn rounded() -> Self {
        Self::from_glyphs(["╭", "─", "╮", "│", "╯", "─", "╰", "│"])
    }

    /// Heavy (bold) box drawing characters.
    #[must_use]
    pub fn heavy() -> Self {
        Self::from_glyphs(["┏", "━", "┓", "┃", "┛", "━", "┗", "┃"])
    }

    /// ASCII box drawing characters (works everywhere).
    #[must_use]
    pub fn ascii() -> Self {
        Self::from_glyphs(["+", "-", "+", "|", "+", "-", "+", "|"])
    }

    /// Preset by name: `single`, `double`, `rounded`, `heavy`, `ascii` or
    /// `none`.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "single" => Ok(Self::single()),
            "double" => Ok(Self::double()),
            "rounded" => Ok(Self::rounded()),
            "heavy" => Ok(Self::heavy()),
            "ascii" => Ok(Self::ascii()),
            "none" => Ok(Self::single().with_sides(BorderSides::empty())),
            _ => Err(Error::Configuration(format!("unknown border style '{name}'")).log()),
        }
    }

    /// Border from a list of 1, 2, 4 or 8 glyphs, repeated to fill all
    /// eight positions.
    pub fn from_parts(parts: &[&str]) -> Result<Self> {
        if !matches!(parts.len(), 1 | 2 | 4 | 8) {
            return Err(Error::Configuration(format!(
                "border needs 1, 2, 4 or 8 parts, got {}",
                parts.len()
            ))
            .log());
        }
        if let Some(bad) = parts.iter().find(|part| display_width(part) != 1) {
            return Err(
                Error::Configuration(format!("border part '{bad}' is not one column wide")).log(),
            );
        }
        Ok(Self::from_glyphs(std::array::from_fn(|i| parts[i % parts.len()])))
    }

    #[must_use]
    pub fn with_sides(mut self, sides: BorderSides) -> Self {
        self.sides = sides;
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>, align: TitleAlign) -> Self {
        self.title = Some(title.into());
        self.title_align = align;
        self
    }

    /// A new component with this border around `component`.
    ///
    /// The content keeps its regions, shifted past the left and top edges.
    /// Border glyphs carry the border tag.
    #[must_use]
    pub fn wrap(&self, component: &Component) -> Component {
        if self.sides.is_empty() {
            return component.clone();
        }

        let width = component.display_width();
        let height = component.height();
        let has = |side| self.sides.contains(side);
        let tag = self.tag.as_deref();
        let corner = |present: bool, glyph: &str| {
            if present {
                glyph.to_owned()
            } else {
                String::new()
            }
        };

        let mut frame = ComponentBuilder::new();
        if has(BorderSides::TOP) {
            frame.line(
                format!(
                    "{}{}{}",
                    corner(has(BorderSides::LEFT), &self.top_left),
                    self.top.repeat(width),
                    corner(has(BorderSides::RIGHT), &self.top_right)
                ),
                tag,
            );
        }
        for _ in 0..height {
            if has(BorderSides::LEFT) {
                frame.line(&self.left, tag);
            } else {
                frame.line("", None);
            }
            frame.append(" ".repeat(width), None);
            if has(BorderSides::RIGHT) {
                frame.append(&self.right, tag);
            }
        }
        if has(BorderSides::BOTTOM) {
            frame.line(
                format!(
                    "{}{}{}",
                    corner(has(BorderSides::LEFT), &self.bottom_left),
                    self.bottom.repeat(width),
                    corner(has(BorderSides::RIGHT), &self.bottom_right)
                ),
                tag,
            );
        }

        let dx = usize::from(has(BorderSides::LEFT));
        let dy = usize::from(has(BorderSides::TOP));
        let framed = merge_overlap(
            &frame.build(),
            component,
            Some(Bounds::sized(dx, dy, width, height)),
        );

        match self.title.as_deref() {
            Some(title) if has(BorderSides::TOP) && width > 0 => {
                let title = truncate_to_width(title, width);
                let spare = width - display_width(title);
                let offset = match self.title_align {
                    TitleAlign::Left => 0,
                    TitleAlign::Center => spare / 2,
                    TitleAlign::Right => spare,
                };
                merge_overlap(
                    &framed,
                    &Component::new([title]),
                    Some(Bounds::at(dx + offset, 0).with_height(1)),
                )
            }
            _ => framed,
        }
    }
}

impl Default for Border {
    fn default() -> Self {
        Self::single()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::StyleRegion;

    #[test]
    fn test_single_border() {
        let framed = Border::single().wrap(&Component::new(["ab", "c"]));
        assert_eq!(framed.lines(), ["┌──┐", "│ab│", "│c │", "└──┘"]);
        assert_eq!(framed.display_width(), 4);
    }

    #[test]
    fn test_border_tags_edges_and_shifts_content() {
        let mut b = ComponentBuilder::new();
        b.line("ab", Some("Body"));
        let framed = Border::ascii().with_tag("Edge").wrap(&b.build());

        assert_eq!(framed.lines(), ["+--+", "|ab|", "+--+"]);
        assert_eq!(
            framed.regions(),
            [
                StyleRegion::span(0, 0, 4, "Edge"),
                StyleRegion::span(0, 1, 1, "Edge"),
                StyleRegion::span(3, 1, 1, "Edge"),
                StyleRegion::span(0, 2, 4, "Edge"),
                StyleRegion::span(1, 1, 2, "Body"),
            ]
        );
    }

    #[test]
    fn test_partial_sides() {
        let border = Border::ascii().with_sides(BorderSides::LEFT | BorderSides::BOTTOM);
        let framed = border.wrap(&Component::new(["ab"]));
        assert_eq!(framed.lines(), ["|ab", "+--"]);
    }

    #[test]
    fn test_no_sides_returns_content() {
        let content = Component::new(["ab"]);
        assert_eq!(Border::from_name("none").unwrap().wrap(&content), content);
    }

    #[test]
    fn test_title_alignment() {
        let content = Component::new(["abcdef"]);
        let left = Border::ascii().with_title("T", TitleAlign::Left).wrap(&content);
        let center = Border::ascii().with_title("T", TitleAlign::Center).wrap(&content);
        let right = Border::ascii().with_title("T", TitleAlign::Right).wrap(&content);

        assert_eq!(left.line(0), "+T-----+");
        assert_eq!(center.line(0), "+--T---+");
        assert_eq!(right.line(0), "+-----T+");
    }

    #[test]
    fn test_long_title_is_truncated() {
        let framed = Border::ascii()
            .with_title("a very long title", TitleAlign::Left)
            .wrap(&Component::new(["abc"]));
        assert_eq!(framed.line(0), "+a v+");
    }

    #[test]
    fn test_from_parts_cycles() {
        let border = Border::from_parts(&["*"]).unwrap();
        assert_eq!(border.wrap(&Component::new(["x"])).lines(), ["***", "*x*", "***"]);

        let border = Border::from_parts(&["+", "-"]).unwrap();
        assert_eq!(border.top_left, "+");
        assert_eq!(border.top, "-");
        assert_eq!(border.left, "-");
    }

    #[test]
    fn test_from_parts_rejects_bad_specs() {
        assert!(matches!(
            Border::from_parts(&["a", "b", "c"]),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(
            Border::from_parts(&["ab"]),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(Border::from_parts(&[]), Err(Error::Configuration(_))));
    }

    #[test]
    fn test_unknown_name_is_configuration_error() {
        assert!(matches!(
            Border::from_name("fancy"),
            Err(Error::Configuration(_))
        ));
        assert_eq!(Border::from_name("rounded").unwrap(), Border::rounded());
    }
}
