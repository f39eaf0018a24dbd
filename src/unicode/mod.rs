//! Unicode display width and column slicing.
//!
//! All horizontal positions in this crate are display columns. These helpers
//! convert between columns and string slices without ever cutting a
//! grapheme cluster in half.

mod columns;
mod width;

pub use columns::{
    pad_to_width, pad_to_width_by, slice_columns, slice_columns_by, truncate_to_width,
    truncate_to_width_by,
};
pub use width::{
    WidthMethod, display_width, display_width_with_method, set_width_method, width_method,
};
