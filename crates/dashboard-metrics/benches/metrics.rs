//! Benchmarks for the metric calculators.

use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dashboard_core::{PriceBar, PriceSeries};
use dashboard_metrics::{week52_range, year_over_year_change, MetricSummary};

fn generate_series(size: usize) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2000, 1, 3).unwrap();
    let bars = (0..size)
        .map(|i| {
            let close = 100.0 + (i as f64 * 0.1).sin() * 10.0;
            let date = start.checked_add_days(Days::new(i as u64)).unwrap();
            PriceBar::new(date, close, close + 1.0, close - 1.0, close, 1_000_000)
        })
        .collect();
    PriceSeries::new("BENCH", bars).unwrap()
}

fn benchmark_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("metrics");

    for size in [252, 1260, 10000].iter() {
        let series = generate_series(*size);

        group.bench_with_input(BenchmarkId::new("year_over_year", size), &series, |b, s| {
            b.iter(|| year_over_year_change(black_box(s)))
        });

        group.bench_with_input(BenchmarkId::new("week52_range", size), &series, |b, s| {
            b.iter(|| week52_range(black_box(s)))
        });

        group.bench_with_input(BenchmarkId::new("summary", size), &series, |b, s| {
            b.iter(|| MetricSummary::compute(black_box(s)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_metrics);
criterion_main!(benches);
