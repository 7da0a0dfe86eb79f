// ABOUTME: Criterion benchmarks for trend estimation
// ABOUTME: Measures regression and full projection cost over growing weight histories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the trend estimator.
//!
//! Histories are synthetic daily weights with a slow downward drift, so the
//! toward-target branch with its longer projection is what gets measured.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gravity_log::intelligence::{date_to_nanos, StatisticalAnalyzer, TrendEstimator};
use gravity_log::models::{MeasurementSeries, TrendWindow, WeightSample};

const HISTORY_SIZES: [usize; 3] = [30, 365, 3650];

#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
fn generate_series(days: usize) -> MeasurementSeries {
    let start = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
    let samples = (0..days)
        .map(|i| {
            let noise = ((i * 37) % 11) as f64 / 10.0 - 0.5;
            WeightSample::new(
                start + Duration::days(i as i64),
                95.0 - i as f64 * 0.005 + noise,
            )
        })
        .collect();
    MeasurementSeries::new(samples).unwrap()
}

fn bench_linear_regression(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear_regression");

    for size in HISTORY_SIZES {
        let points: Vec<(f64, f64)> = generate_series(size)
            .samples()
            .iter()
            .map(|s| (date_to_nanos(s.date), s.weight))
            .collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &points, |b, points| {
            b.iter(|| StatisticalAnalyzer::linear_regression(black_box(points)));
        });
    }

    group.finish();
}

fn bench_trend_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("trend_estimate");
    let estimator = TrendEstimator::default();

    for size in HISTORY_SIZES {
        let series = generate_series(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::new("full_history", size),
            &series,
            |b, series| {
                b.iter(|| {
                    estimator.estimate(
                        black_box(series),
                        black_box(&TrendWindow::FullHistory),
                        black_box(80.0),
                    )
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("twelve_weeks", size),
            &series,
            |b, series| {
                b.iter(|| {
                    estimator.estimate(
                        black_box(series),
                        black_box(&TrendWindow::DateRange { weeks: 12 }),
                        black_box(80.0),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_linear_regression, bench_trend_estimate);
criterion_main!(benches);
