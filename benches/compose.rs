//! Composition and drawing performance benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use textgrid::{
    Border, Bounds, Component, ComponentBuilder, MemorySurface, draw_component, merge_horizontal,
    merge_overlap,
};

fn table_column(rows: usize, label: &str) -> Component {
    let mut builder = ComponentBuilder::new();
    builder.line(label, Some("Header"));
    for row in 0..rows {
        builder.line(format!("{label}-{row}"), Some("Cell"));
    }
    builder.build()
}

fn build_components(c: &mut Criterion) {
    c.bench_function("builder_100_rows_right_aligned", |b| {
        b.iter(|| {
            let mut builder = ComponentBuilder::new();
            for row in 0..100 {
                builder.line(black_box("resource"), Some("Name"));
                builder.append(": ", None).append(row, Some("Number"));
                builder.append_right("ok", Some("Status"));
            }
            builder.build()
        });
    });
}

fn merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_horizontal");
    for rows in [10, 100, 1000] {
        let columns: Vec<Component> = ["name", "status", "age", "node"]
            .iter()
            .map(|label| table_column(rows, label))
            .collect();
        let slots: Vec<Option<&Component>> = columns.iter().map(Some).collect();
        group.bench_with_input(BenchmarkId::from_parameter(rows), &slots, |b, slots| {
            b.iter(|| merge_horizontal(black_box(slots), Some(" │ ")));
        });
    }
    group.finish();

    let base = Component::new(vec![".".repeat(120); 40]);
    let dialog = Border::rounded().wrap(&table_column(10, "dialog"));
    c.bench_function("merge_overlap_dialog", |b| {
        b.iter(|| merge_overlap(black_box(&base), black_box(&dialog), Some(Bounds::at(30, 10))));
    });
}

fn draw(c: &mut Criterion) {
    let component = table_column(50, "row");
    let template = MemorySurface::from_lines(vec!["x".repeat(200); 100]);

    c.bench_function("draw_component_50_rows", |b| {
        b.iter_batched(
            || template.clone(),
            |mut surface| {
                draw_component(&mut surface, black_box(&component), Bounds::sized(20, 10, 40, 50));
                surface
            },
            criterion::BatchSize::SmallInput,
        );
    });

    let wide = Component::new(vec!["中文字符".repeat(10); 20]);
    c.bench_function("draw_component_wide_chars", |b| {
        b.iter_batched(
            || template.clone(),
            |mut surface| {
                draw_component(&mut surface, black_box(&wide), Bounds::sized(3, 0, 33, 20));
                surface
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, build_components, merge, draw);
criterion_main!(benches);
