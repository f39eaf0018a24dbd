//! Fuzz target for composition and drawing.
//!
//! Arbitrary text, positions and sizes must never panic, and drawing must
//! keep the rows before the drawn area untouched.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use textgrid::unicode::{slice_columns, truncate_to_width};
use textgrid::{
    Bounds, Component, MemorySurface, Surface, draw_component, find_tagged_regions,
    merge_horizontal, merge_overlap,
};

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    surface: Vec<&'a str>,
    left: Vec<&'a str>,
    right: Vec<&'a str>,
    separator: Option<&'a str>,
    x: u8,
    y: u8,
    width: Option<u8>,
    height: Option<u8>,
}

fuzz_target!(|input: Input<'_>| {
    let left = Component::new(input.left.iter().take(32).copied());
    let right = Component::new(input.right.iter().take(32).copied());
    let mut bounds = Bounds::at(usize::from(input.x), usize::from(input.y));
    bounds.width = input.width.map(usize::from);
    bounds.height = input.height.map(usize::from);

    for line in left.lines() {
        let _ = truncate_to_width(line, usize::from(input.x));
        let _ = slice_columns(line, usize::from(input.y), bounds.width);
    }

    let merged = merge_horizontal(&[Some(&left), Some(&right)], input.separator)
        .map(|(merged, _)| merged.into_owned())
        .unwrap_or_default();
    let layered = merge_overlap(&merged, &right, Some(bounds));

    let mut surface = MemorySurface::from_lines(input.surface.iter().take(32).copied());
    let before = surface.lines(0, bounds.y);
    draw_component(&mut surface, &layered, bounds);
    assert_eq!(surface.lines(0, before.len()), before);
    let _ = find_tagged_regions(&surface, "fuzz");
});
