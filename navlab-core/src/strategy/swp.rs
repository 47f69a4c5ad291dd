//! Systematic Withdrawal Plan: periodic redemptions from a notional corpus.
//!
//! The corpus is 12 × the withdrawal amount. Withdrawals trigger on every
//! Nth observation after entry (N = 7 / 30 / 365), not on calendar dates, so
//! on a non-daily series the effective frequency drifts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::schedule::Frequency;
use super::ValuePoint;
use crate::domain::{NavPoint, NavSeries};
use crate::numeric::{checked_div, round2};

/// Starting corpus as a multiple of the periodic withdrawal.
pub const SWP_CORPUS_MULTIPLE: f64 = 12.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwpParams {
    pub withdrawal: f64,
    pub frequency: Frequency,
    pub start_date: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwpOutcome {
    pub entry: Option<NavPoint>,
    pub initial_units: f64,
    pub final_units: f64,
    /// Number of triggered withdrawals (including ones against an exhausted balance).
    pub withdrawals: usize,
    /// Holding value at every observation from entry onward.
    pub trajectory: Vec<ValuePoint>,
}

/// Walk the series from the first NAV on or after `start_date`, withdrawing
/// on every `frequency.row_stride()`-th observation. Units never go negative.
///
/// No entry point yields an empty trajectory.
pub fn simulate_swp(series: &NavSeries, params: &SwpParams) -> SwpOutcome {
    if !(params.withdrawal.is_finite() && params.withdrawal > 0.0) {
        log::debug!("swp: non-positive withdrawal {}, nothing to simulate", params.withdrawal);
        return SwpOutcome::default();
    }
    let Some(start_index) = series.index_on_or_after(params.start_date) else {
        return SwpOutcome::default();
    };

    let points = &series.points()[start_index..];
    let entry = points[0];
    let corpus = params.withdrawal * SWP_CORPUS_MULTIPLE;
    let Some(initial_units) = checked_div(corpus, entry.nav) else {
        return SwpOutcome::default();
    };

    let stride = params.frequency.row_stride();
    let mut units = initial_units;
    let mut withdrawals = 0;
    let mut trajectory = Vec::with_capacity(points.len());

    for (counter, point) in points.iter().enumerate() {
        if counter > 0 && counter % stride == 0 {
            if let Some(redeemed) = checked_div(params.withdrawal, point.nav) {
                units = (units - redeemed).max(0.0);
            }
            withdrawals += 1;
        }
        trajectory.push(ValuePoint::new(point.date, round2(units * point.nav)));
    }

    SwpOutcome {
        entry: Some(entry),
        initial_units,
        final_units: units,
        withdrawals,
        trajectory,
    }
}
