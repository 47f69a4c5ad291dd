//! Property tests for engine invariants.
//!
//! Uses proptest to verify:
//! 1. Normalization is idempotent and produces a strictly increasing, positive series
//! 2. Short histories need review instead of failing
//! 3. No simulator ever emits a NaN or negative value
//! 4. Moving average stays within the range of its inputs

use chrono::{Duration, NaiveDate};
use navlab_core::data::normalize;
use navlab_core::domain::{NavSeries, Period, RawNav, RawNavRecord};
use navlab_core::returns::compute_return;
use navlab_core::review::NeedsReview;
use navlab_core::stats::{moving_average, risk_return_point};
use navlab_core::strategy::{
    simulate_lumpsum, simulate_sip, simulate_swp, Frequency, LumpsumParams, SipParams, SwpParams,
};
use proptest::prelude::*;

// ── Strategies (proptest) ────────────────────────────────────────────

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 1, 1).unwrap()
}

fn arb_raw_nav() -> impl Strategy<Value = RawNav> {
    prop_oneof![
        6 => (1.0..500.0_f64).prop_map(RawNav::Number),
        2 => (1.0..500.0_f64).prop_map(|v| RawNav::Text(format!("{v:.4}"))),
        1 => Just(RawNav::Missing),
        1 => (-50.0..=0.0_f64).prop_map(RawNav::Number),
        1 => Just(RawNav::Text("n/a".into())),
    ]
}

/// Unsorted records with repeated dates and some garbage.
fn arb_records() -> impl Strategy<Value = Vec<RawNavRecord>> {
    prop::collection::vec((0i64..400, arb_raw_nav()), 0..120).prop_map(|cells| {
        cells
            .into_iter()
            .map(|(offset, nav)| {
                let date = (base_date() + Duration::days(offset))
                    .format("%Y-%m-%d")
                    .to_string();
                RawNavRecord::new(date, nav)
            })
            .collect()
    })
}

fn arb_series() -> impl Strategy<Value = NavSeries> {
    arb_records().prop_map(|r| normalize(&r))
}

fn arb_frequency() -> impl Strategy<Value = Frequency> {
    prop_oneof![
        Just(Frequency::Weekly),
        Just(Frequency::Monthly),
        Just(Frequency::Yearly),
    ]
}

// ── 1. Normalization ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn normalize_is_idempotent(records in arb_records()) {
        let once = normalize(&records);
        let twice = normalize(&once.to_raw_records());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalized_series_is_strictly_increasing_and_positive(series in arb_series()) {
        for w in series.points().windows(2) {
            prop_assert!(w[0].date < w[1].date);
        }
        for p in series.iter() {
            prop_assert!(p.nav > 0.0 && p.nav.is_finite());
        }
    }
}

// ── 2. Short histories ───────────────────────────────────────────────

proptest! {
    /// A series spanning less than the period never has a start NAV.
    #[test]
    fn short_history_needs_review(days in 1i64..28, nav in 1.0..100.0_f64) {
        let records: Vec<RawNavRecord> = (0..days)
            .map(|i| RawNavRecord::new(
                (base_date() + Duration::days(i)).format("%Y-%m-%d").to_string(),
                RawNav::Number(nav),
            ))
            .collect();
        let series = normalize(&records);
        for period in [Period::ThreeMonths, Period::SixMonths, Period::OneYear] {
            prop_assert_eq!(
                compute_return(&series, period),
                Err(NeedsReview::InsufficientHistory { period })
            );
        }
    }
}

// ── 3. Simulators never emit NaN ─────────────────────────────────────

proptest! {
    #[test]
    fn simulations_are_finite_and_non_negative(
        series in arb_series(),
        amount in 1.0..100_000.0_f64,
        frequency in arb_frequency(),
        start in 0i64..400,
        len in 0i64..400,
    ) {
        let start_date = base_date() + Duration::days(start);
        let end_date = start_date + Duration::days(len);

        let sip = simulate_sip(&series, &SipParams { amount, frequency, start_date, end_date });
        if let Ok(out) = &sip {
            prop_assert!(out.summary.current_value.is_finite());
            prop_assert!(out.summary.annualized_return_pct.is_finite());
            prop_assert!(out.trajectory.iter().all(|v| v.value.is_finite() && v.value >= 0.0));
        }

        let lump = simulate_lumpsum(&series, &LumpsumParams { amount, start_date, end_date });
        prop_assert!(lump.trajectory.iter().all(|v| v.value.is_finite() && v.value >= 0.0));

        let swp = simulate_swp(&series, &SwpParams { withdrawal: amount, frequency, start_date });
        prop_assert!(swp.final_units >= 0.0);
        prop_assert!(swp.trajectory.iter().all(|v| v.value.is_finite() && v.value >= 0.0));

        let rr = risk_return_point(&series);
        prop_assert!(rr.volatility_pct.is_finite() && rr.avg_return_pct.is_finite());
    }
}

// ── 4. Moving average bounds ─────────────────────────────────────────

proptest! {
    #[test]
    fn moving_average_within_input_range(
        values in prop::collection::vec(-1000.0..1000.0_f64, 1..80),
        window in 1usize..20,
    ) {
        let out = moving_average(&values, window);
        prop_assert_eq!(out.len(), values.len());
        let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        for v in out {
            let v = v.unwrap();
            prop_assert!(v >= lo - 1e-9 && v <= hi + 1e-9);
        }
    }
}
