//! `textgrid` - Component composition for text surfaces
//!
//! Builds immutable grids of text with tagged style regions, composes them
//! side by side or on top of each other, and draws them into editor-like
//! surfaces without disturbing the text around them.
//!
//! # Examples
//!
//! ```
//! use textgrid::{Bounds, ComponentBuilder, MemorySurface, draw_component, find_tagged_regions};
//!
//! let mut builder = ComponentBuilder::new();
//! builder.line("a", Some("H1"));
//! builder.append("b", Some("H2"));
//! let component = builder.build();
//!
//! let mut surface = MemorySurface::new();
//! draw_component(&mut surface, &component, Bounds::at(0, 0));
//!
//! assert_eq!(surface.line(0), Some("ab"));
//! assert_eq!(find_tagged_regions(&surface, "H2")[0].x, 1);
//! ```

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // Allow component::ComponentBuilder etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::must_use_candidate)] // Builder-style &mut Self returns are chained, not used
#![allow(clippy::return_self_not_must_use)] // Same as above
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::items_after_statements)] // Common pattern in tests

pub mod border;
pub mod component;
pub mod compose;
pub mod error;
pub mod event;
pub mod geometry;
pub mod options;
pub mod renderer;
pub mod surface;
pub mod unicode;

// Re-export core types at crate root
pub use component::{Component, ComponentBuilder, StyleRegion};
pub use compose::{merge_horizontal, merge_overlap};
pub use error::{Error, Result};
pub use event::{LogLevel, clear_log_callback, emit_log, set_log_callback};
pub use geometry::{Bounds, Rect};

// Re-export drawing types
pub use border::{Border, BorderSides, TitleAlign};
pub use renderer::Renderer;
pub use surface::{
    MemorySurface, Surface, WriteCounter, WriteGuard, draw_component, find_tagged_regions,
    read_region,
};

// Re-export configuration
pub use options::{
    OptionHost, OptionScope, OptionSnapshot, OptionValue, SurfaceOption, SurfaceOptions,
};
pub use unicode::{WidthMethod, set_width_method};
