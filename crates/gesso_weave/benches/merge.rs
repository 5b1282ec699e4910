//! Benchmarks for attribute merging.
//!
//! Run with: cargo bench -p gesso_weave

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use gesso_relief::AttributeSet;
use gesso_weave::{AttributeMerger, ClassMerger, DisplayOrder, MergeOptions, TailwindMerger};

// =============================================================================
// Test Data
// =============================================================================

const BUTTON_BASE: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap \
    rounded-md text-sm font-medium transition-colors focus-visible:outline-none \
    focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 \
    disabled:pointer-events-none disabled:opacity-50";

const BUTTON_VARIANT: &str = "bg-primary text-primary-foreground hover:bg-primary/90 h-10 px-4 py-2";

const USER_CLASSES: &str = "w-full p-0 bg-destructive hover:bg-destructive/90 my-widget";

fn component_sources() -> Vec<AttributeSet> {
    vec![
        AttributeSet::new()
            .with("class", BUTTON_BASE)
            .with("type", "button"),
        AttributeSet::new()
            .with("class", BUTTON_VARIANT)
            .with_data("controller", "button"),
        AttributeSet::new()
            .with("class", USER_CLASSES)
            .with("id", "save")
            .with_data("action", "click->form#submit")
            .with_aria("label", "Save changes"),
    ]
}

fn bench_merge(c: &mut Criterion) {
    let merger = AttributeMerger::default();
    let sources = component_sources();
    let refs: Vec<&AttributeSet> = sources.iter().collect();

    let mut group = c.benchmark_group("attribute_merge");
    group.throughput(Throughput::Elements(refs.len() as u64));

    group.bench_function("button_source_order", |b| {
        b.iter(|| merger.merge(black_box(&refs)))
    });

    group.bench_function("button_highest_first", |b| {
        let options = MergeOptions {
            display: DisplayOrder::HighestFirst,
        };
        b.iter(|| merger.merge_with(black_box(&refs), options))
    });

    group.finish();
}

fn bench_tailwind(c: &mut Criterion) {
    let merger = TailwindMerger::default();
    let tokens: Vec<String> = [BUTTON_BASE, BUTTON_VARIANT, USER_CLASSES]
        .iter()
        .flat_map(|s| s.split_whitespace())
        .map(String::from)
        .collect();

    let mut group = c.benchmark_group("class_merge");
    group.throughput(Throughput::Elements(tokens.len() as u64));

    group.bench_function("tailwind_button", |b| {
        b.iter(|| merger.resolve(black_box(tokens.clone())))
    });

    group.finish();
}

criterion_group!(benches, bench_merge, bench_tailwind);
criterion_main!(benches);
