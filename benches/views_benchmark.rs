//! Performance benchmarks for derived views and filters
//!
//! Measures view recomputation and filter queries over datasets of the
//! size the bulk request returns.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tvdash::models::{Show, ShowQuery, SortBy, SortOrder};
use tvdash::state::filters::{apply_query, filter_by_category, filter_by_rate_range};
use tvdash::state::{DerivedViews, ViewSettings};

const CATEGORIES: [&str; 6] = ["Drama", "Comedy", "Crime", "Sci-Fi", "Romance", "Documentary"];

/// Generate a dataset with spread-out ratings, years and categories
fn generate_shows(count: usize) -> Vec<Show> {
    (0..count)
        .map(|i| {
            let rate = 5.0 + (i * 37 % 50) as f64 / 10.0;
            let year = 1990 + (i * 13 % 35) as i32;
            Show::new(
                format!("Show {}", i),
                format!("https://movie.douban.com/subject/{}/", i),
                rate,
                year,
            )
            .with_categories([CATEGORIES[i % CATEGORIES.len()], CATEGORIES[(i / 3) % CATEGORIES.len()]])
        })
        .collect()
}

/// Benchmark recomputing both views after a dataset replacement
fn bench_view_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("view_recompute");

    for size in [100, 500, 1000].iter() {
        let shows = generate_shows(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &shows, |b, shows| {
            b.iter(|| DerivedViews::compute(black_box(shows), ViewSettings::default(), 1))
        });
    }

    group.finish();
}

/// Benchmark the filter functions on a full bulk load
fn bench_filters(c: &mut Criterion) {
    let shows = generate_shows(1000);
    let mut group = c.benchmark_group("filters_1000");

    group.bench_function("by_category", |b| {
        b.iter(|| filter_by_category(black_box(&shows), black_box("Crime")))
    });
    group.bench_function("by_rate_range", |b| {
        b.iter(|| filter_by_rate_range(black_box(&shows), black_box(8.0), black_box(9.0)))
    });

    let query = ShowQuery::new()
        .with_keyword("9")
        .with_rate_range(6.0, 10.0)
        .with_sort(SortBy::Year, SortOrder::Desc)
        .with_page(2, 20);
    group.bench_function("apply_query", |b| {
        b.iter(|| apply_query(black_box(&shows), black_box(&query)))
    });

    group.finish();
}

criterion_group!(benches, bench_view_recompute, bench_filters);
criterion_main!(benches);
