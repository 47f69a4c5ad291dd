//! Criterion benchmarks for NavLab hot paths.
//!
//! Benchmarks:
//! 1. Normalization of unsorted raw feeds
//! 2. SIP / Lumpsum / SWP simulation
//! 3. Concurrent strategy comparison
//! 4. Moving average and risk/return overlays

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use navlab_core::config::CompareConfig;
use navlab_core::data::{normalize, synthetic_records, synthetic_series};
use navlab_core::stats::{moving_average, risk_return_point};
use navlab_core::strategy::{
    compare_strategies, simulate_lumpsum, simulate_sip, simulate_swp, Frequency, LumpsumParams,
    SipParams, SwpParams,
};

// ── Helpers ──────────────────────────────────────────────────────────

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// Weekday history ending 2024-12-31, roughly `years` long.
fn range(years: i32) -> (NaiveDate, NaiveDate) {
    (d(2025 - years, 1, 1), d(2024, 12, 31))
}

// ── Benchmarks ───────────────────────────────────────────────────────

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for &years in &[1, 5, 20] {
        let (start, end) = range(years);
        let mut records = synthetic_records("BENCH", start, end);
        records.reverse();
        let dup = records.clone();
        records.extend(dup);

        group.bench_with_input(BenchmarkId::new("reversed_with_dups", years), &years, |b, _| {
            b.iter(|| normalize(black_box(&records)));
        });
    }

    group.finish();
}

fn bench_simulators(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");

    for &years in &[1, 5, 20] {
        let (start, end) = range(years);
        let series = synthetic_series("BENCH", start, end);

        let sip = SipParams {
            amount: 5000.0,
            frequency: Frequency::Weekly,
            start_date: start,
            end_date: end,
        };
        group.bench_with_input(BenchmarkId::new("sip_weekly", years), &years, |b, _| {
            b.iter(|| simulate_sip(black_box(&series), black_box(&sip)));
        });

        let lump = LumpsumParams {
            amount: 50000.0,
            start_date: start,
            end_date: end,
        };
        group.bench_with_input(BenchmarkId::new("lumpsum", years), &years, |b, _| {
            b.iter(|| simulate_lumpsum(black_box(&series), black_box(&lump)));
        });

        let swp = SwpParams {
            withdrawal: 2000.0,
            frequency: Frequency::Monthly,
            start_date: start,
        };
        group.bench_with_input(BenchmarkId::new("swp_monthly", years), &years, |b, _| {
            b.iter(|| simulate_swp(black_box(&series), black_box(&swp)));
        });
    }

    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let (start, end) = range(20);
    let series = synthetic_series("BENCH", start, end);
    let request = CompareConfig {
        start_date: start,
        end_date: end,
        ..Default::default()
    }
    .to_request()
    .unwrap();

    c.bench_function("compare_strategies_20y", |b| {
        b.iter(|| compare_strategies(black_box(&series), black_box(&request)));
    });
}

fn bench_overlays(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlays");

    for &years in &[1, 20] {
        let (start, end) = range(years);
        let series = synthetic_series("BENCH", start, end);
        let navs = series.navs();

        group.bench_with_input(BenchmarkId::new("moving_average_10", years), &years, |b, _| {
            b.iter(|| moving_average(black_box(&navs), 10));
        });
        group.bench_with_input(BenchmarkId::new("risk_return", years), &years, |b, _| {
            b.iter(|| risk_return_point(black_box(&series)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_normalize,
    bench_simulators,
    bench_compare,
    bench_overlays
);
criterion_main!(benches);
