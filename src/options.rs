//! Typed surface options with scoped apply/restore.
//!
//! Hosts expose their per-buffer or per-window settings through
//! [`OptionHost`]. [`SurfaceOptions`] describes a set of values to apply;
//! [`OptionSnapshot`] remembers what was there before so it can be put
//! back, and [`OptionScope`] does both around a borrow.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use crate::error::{Error, Result};

/// Recognised option keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SurfaceOption {
    /// Whether the text may be changed at all.
    Modifiable,
    /// Whether writing the surface back to storage is refused.
    ReadOnly,
    /// Soft-wrap long rows.
    Wrap,
    /// Highlight the cursor row.
    CursorLine,
    /// Show row numbers.
    Number,
    /// Show row numbers relative to the cursor.
    RelativeNumber,
    /// Minimum number of columns used for row numbers (1 to 20).
    NumberWidth,
    /// Sign column mode (`"yes"`, `"no"`, `"auto"`).
    SignColumn,
    /// File type used by the host for syntax and plugins.
    FileType,
    /// What the host does with the surface when it is hidden.
    BufHidden,
    /// Whether a swap file is kept.
    SwapFile,
}

/// Kind of value an option accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionKind {
    Bool,
    Int,
    Str,
}

impl SurfaceOption {
    /// Every recognised key, in apply order.
    pub const ALL: [Self; 11] = [
        Self::Modifiable,
        Self::ReadOnly,
        Self::Wrap,
        Self::CursorLine,
        Self::Number,
        Self::RelativeNumber,
        Self::NumberWidth,
        Self::SignColumn,
        Self::FileType,
        Self::BufHidden,
        Self::SwapFile,
    ];

    /// Host-facing option name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Modifiable => "modifiable",
            Self::ReadOnly => "readonly",
            Self::Wrap => "wrap",
            Self::CursorLine => "cursorline",
            Self::Number => "number",
            Self::RelativeNumber => "relativenumber",
            Self::NumberWidth => "numberwidth",
            Self::SignColumn => "signcolumn",
            Self::FileType => "filetype",
            Self::BufHidden => "bufhidden",
            Self::SwapFile => "swapfile",
        }
    }

    /// Key for a host-facing option name.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|option| option.name() == name)
            .ok_or_else(|| Error::Configuration(format!("unknown option '{name}'")).log())
    }

    /// Kind of value this option takes.
    #[must_use]
    pub const fn kind(self) -> OptionKind {
        match self {
            Self::NumberWidth => OptionKind::Int,
            Self::SignColumn | Self::FileType | Self::BufHidden => OptionKind::Str,
            _ => OptionKind::Bool,
        }
    }
}

impl fmt::Display for SurfaceOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SurfaceOption {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Self::from_name(name)
    }
}

/// An option value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl OptionValue {
    #[must_use]
    pub const fn kind(&self) -> OptionKind {
        match self {
            Self::Bool(_) => OptionKind::Bool,
            Self::Int(_) => OptionKind::Int,
            Self::Str(_) => OptionKind::Str,
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

/// Something that stores option values.
pub trait OptionHost {
    /// Current value, `None` when unset.
    fn option(&self, option: SurfaceOption) -> Option<OptionValue>;

    /// Set a value.
    fn set_option(&mut self, option: SurfaceOption, value: OptionValue);

    /// Return an option to its unset state. Hosts without that notion can
    /// leave the default, which keeps the current value.
    fn clear_option(&mut self, option: SurfaceOption) {
        let _ = option;
    }
}

const NUMBER_WIDTH_RANGE: std::ops::RangeInclusive<i64> = 1..=20;

/// A set of option values to apply; unset fields are left alone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SurfaceOptions {
    pub modifiable: Option<bool>,
    pub read_only: Option<bool>,
    pub wrap: Option<bool>,
    pub cursor_line: Option<bool>,
    pub number: Option<bool>,
    pub relative_number: Option<bool>,
    pub number_width: Option<i64>,
    pub sign_column: Option<String>,
    pub file_type: Option<String>,
    pub buf_hidden: Option<String>,
    pub swap_file: Option<bool>,
}

impl SurfaceOptions {
    /// Options for a throwaway surface that only the engine writes to.
    #[must_use]
    pub fn scratch() -> Self {
        Self::default()
            .with_modifiable(false)
            .with_swap_file(false)
            .with_buf_hidden("wipe")
            .with_wrap(false)
            .with_number(false)
            .with_relative_number(false)
            .with_sign_column("no")
    }

    /// Parse `(name, value)` pairs, rejecting unknown names and values of
    /// the wrong kind.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, OptionValue)>,
    {
        let mut options = Self::default();
        for (name, value) in pairs {
            options.set(name.parse()?, value)?;
        }
        Ok(options)
    }

    /// Set one option by key.
    pub fn set(&mut self, option: SurfaceOption, value: OptionValue) -> Result<()> {
        if value.kind() != option.kind() {
            return Err(Error::Configuration(format!(
                "option '{option}' expects {:?}, got {value:?}",
                option.kind()
            ))
            .log());
        }
        match (option, value) {
            (SurfaceOption::Modifiable, OptionValue::Bool(v)) => self.modifiable = Some(v),
            (SurfaceOption::ReadOnly, OptionValue::Bool(v)) => self.read_only = Some(v),
            (SurfaceOption::Wrap, OptionValue::Bool(v)) => self.wrap = Some(v),
            (SurfaceOption::CursorLine, OptionValue::Bool(v)) => self.cursor_line = Some(v),
            (SurfaceOption::Number, OptionValue::Bool(v)) => self.number = Some(v),
            (SurfaceOption::RelativeNumber, OptionValue::Bool(v)) => {
                self.relative_number = Some(v);
            }
            (SurfaceOption::NumberWidth, OptionValue::Int(v)) => {
                if !NUMBER_WIDTH_RANGE.contains(&v) {
                    return Err(Error::Configuration(format!(
                        "option '{option}' must be between {} and {}, got {v}",
                        NUMBER_WIDTH_RANGE.start(),
                        NUMBER_WIDTH_RANGE.end()
                    ))
                    .log());
                }
                self.number_width = Some(v);
            }
            (SurfaceOption::SwapFile, OptionValue::Bool(v)) => self.swap_file = Some(v),
            (SurfaceOption::SignColumn, OptionValue::Str(v)) => self.sign_column = Some(v),
            (SurfaceOption::FileType, OptionValue::Str(v)) => self.file_type = Some(v),
            (SurfaceOption::BufHidden, OptionValue::Str(v)) => self.buf_hidden = Some(v),
            // Kinds were checked above.
            _ => {}
        }
        Ok(())
    }

    #[must_use]
    pub fn with_modifiable(mut self, value: bool) -> Self {
        self.modifiable = Some(value);
        self
    }

    #[must_use]
    pub fn with_read_only(mut self, value: bool) -> Self {
        self.read_only = Some(value);
        self
    }

    #[must_use]
    pub fn with_wrap(mut self, value: bool) -> Self {
        self.wrap = Some(value);
        self
    }

    #[must_use]
    pub fn with_cursor_line(mut self, value: bool) -> Self {
        self.cursor_line = Some(value);
        self
    }

    #[must_use]
    pub fn with_number(mut self, value: bool) -> Self {
        self.number = Some(value);
        self
    }

    #[must_use]
    pub fn with_relative_number(mut self, value: bool) -> Self {
        self.relative_number = Some(value);
        self
    }

    /// Values outside 1 to 20 are clamped into that range.
    #[must_use]
    pub fn with_number_width(mut self, value: i64) -> Self {
        let (min, max) = (*NUMBER_WIDTH_RANGE.start(), *NUMBER_WIDTH_RANGE.end());
        self.number_width = Some(value.clamp(min, max));
        self
    }

    #[must_use]
    pub fn with_sign_column(mut self, value: impl Into<String>) -> Self {
        self.sign_column = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_file_type(mut self, value: impl Into<String>) -> Self {
        self.file_type = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_buf_hidden(mut self, value: impl Into<String>) -> Self {
        self.buf_hidden = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_swap_file(mut self, value: bool) -> Self {
        self.swap_file = Some(value);
        self
    }

    /// Set values in key order.
    #[must_use]
    pub fn entries(&self) -> Vec<(SurfaceOption, OptionValue)> {
        let flag = |key, value: Option<bool>| value.map(|v| (key, OptionValue::Bool(v)));
        let text = |key, value: &Option<String>| {
            value.as_deref().map(|v| (key, OptionValue::from(v)))
        };

        [
            flag(SurfaceOption::Modifiable, self.modifiable),
            flag(SurfaceOption::ReadOnly, self.read_only),
            flag(SurfaceOption::Wrap, self.wrap),
            flag(SurfaceOption::CursorLine, self.cursor_line),
            flag(SurfaceOption::Number, self.number),
            flag(SurfaceOption::RelativeNumber, self.relative_number),
            self.number_width
                .map(|v| (SurfaceOption::NumberWidth, OptionValue::Int(v))),
            text(SurfaceOption::SignColumn, &self.sign_column),
            text(SurfaceOption::FileType, &self.file_type),
            text(SurfaceOption::BufHidden, &self.buf_hidden),
            flag(SurfaceOption::SwapFile, self.swap_file),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Prior values of the options changed by [`OptionSnapshot::apply`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OptionSnapshot {
    saved: Vec<(SurfaceOption, Option<OptionValue>)>,
}

impl OptionSnapshot {
    /// Record the current values of every option in `options`, then set them.
    pub fn apply<H: OptionHost + ?Sized>(host: &mut H, options: &SurfaceOptions) -> Self {
        let mut saved = Vec::new();
        for (option, value) in options.entries() {
            saved.push((option, host.option(option)));
            host.set_option(option, value);
        }
        Self { saved }
    }

    /// Put the recorded values back, last applied first.
    pub fn restore<H: OptionHost + ?Sized>(self, host: &mut H) {
        for (option, prior) in self.saved.into_iter().rev() {
            match prior {
                Some(value) => host.set_option(option, value),
                None => host.clear_option(option),
            }
        }
    }

    /// Recorded `(option, prior value)` pairs in apply order.
    #[must_use]
    pub fn saved(&self) -> &[(SurfaceOption, Option<OptionValue>)] {
        &self.saved
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.saved.is_empty()
    }
}

/// Options applied for as long as the scope lives.
pub struct OptionScope<'a, H: OptionHost + ?Sized> {
    host: &'a mut H,
    snapshot: Option<OptionSnapshot>,
}

impl<'a, H: OptionHost + ?Sized> OptionScope<'a, H> {
    /// Apply `options` to `host`; they are restored when the scope drops.
    pub fn new(host: &'a mut H, options: &SurfaceOptions) -> Self {
        let snapshot = OptionSnapshot::apply(&mut *host, options);
        Self {
            host,
            snapshot: Some(snapshot),
        }
    }
}

impl<H: OptionHost + ?Sized> Deref for OptionScope<'_, H> {
    type Target = H;

    fn deref(&self) -> &H {
        self.host
    }
}

impl<H: OptionHost + ?Sized> DerefMut for OptionScope<'_, H> {
    fn deref_mut(&mut self) -> &mut H {
        self.host
    }
}

impl<H: OptionHost + ?Sized> Drop for OptionScope<'_, H> {
    fn drop(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            snapshot.restore(&mut *self.host);
        }
    }
}
