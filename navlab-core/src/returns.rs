//! Period returns: simple and annualized growth between two NAV observations.
//!
//! Every function is pure: series in, `Result<_, NeedsReview>` out.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{NavSeries, Period};
use crate::numeric::{checked_div, round2};
use crate::review::NeedsReview;

/// Days per year used to turn a date span into fractional years.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Floor for the annualization exponent's denominator. A zero-length span
/// would otherwise divide by zero.
pub const MIN_YEARS: f64 = 1e-4;

/// Return between two dates of one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnResult {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_nav: f64,
    pub end_nav: f64,
    pub simple_return_pct: f64,
    pub annualized_return_pct: f64,
}

/// One row of the returns table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodReturn {
    pub period: Period,
    pub outcome: Result<ReturnResult, NeedsReview>,
}

/// Elapsed fractional years between two dates, clamped to [`MIN_YEARS`].
pub fn years_between(start: NaiveDate, end: NaiveDate) -> f64 {
    let days = (end - start).num_days() as f64;
    (days / DAYS_PER_YEAR).max(MIN_YEARS)
}

/// Simple and annualized growth (percent, unrounded) from `start_value` to
/// `end_value` over `years`.
///
/// Short-circuits to `DegenerateArithmetic` when the ratio or its annualized
/// form is not finite.
pub fn growth_pcts(start_value: f64, end_value: f64, years: f64) -> Result<(f64, f64), NeedsReview> {
    let ratio = checked_div(end_value, start_value).ok_or(NeedsReview::DegenerateArithmetic)?;
    let simple = checked_div(end_value - start_value, start_value)
        .ok_or(NeedsReview::DegenerateArithmetic)?
        * 100.0;
    let annualized = (ratio.powf(1.0 / years.max(MIN_YEARS)) - 1.0) * 100.0;
    if !simple.is_finite() || !annualized.is_finite() {
        return Err(NeedsReview::DegenerateArithmetic);
    }
    Ok((simple, annualized))
}

/// Return over a named lookback period ending at the latest observation.
///
/// The start NAV is carried backward from the period start date; a series
/// with less history than the period needs review.
pub fn compute_return(series: &NavSeries, period: Period) -> Result<ReturnResult, NeedsReview> {
    let last = series.last().ok_or(NeedsReview::NoData)?;
    let insufficient = NeedsReview::InsufficientHistory { period };

    let start_date = period.start_from(last.date).ok_or(insufficient)?;
    let start = series.latest_on_or_before(start_date).ok_or(insufficient)?;

    build_result(start_date, last.date, start.nav, last.nav)
}

/// Return between two arbitrary dates. Both ends use carry-backward.
pub fn compute_return_between(
    series: &NavSeries,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<ReturnResult, NeedsReview> {
    if series.is_empty() {
        return Err(NeedsReview::NoData);
    }
    if start_date > end_date {
        return Err(NeedsReview::InvalidRange);
    }
    let start = series
        .latest_on_or_before(start_date)
        .ok_or(NeedsReview::InsufficientData)?;
    let end = series
        .latest_on_or_before(end_date)
        .ok_or(NeedsReview::InsufficientData)?;

    build_result(start_date, end_date, start.nav, end.nav)
}

/// Returns table: 1m, 3m, 6m, 1y, each row independently computed.
pub fn compute_all_returns(series: &NavSeries) -> Vec<PeriodReturn> {
    Period::ALL
        .iter()
        .map(|&period| {
            let outcome = compute_return(series, period);
            if let Err(reason) = &outcome {
                log::debug!("returns: {period} needs review: {reason}");
            }
            PeriodReturn { period, outcome }
        })
        .collect()
}

fn build_result(
    start_date: NaiveDate,
    end_date: NaiveDate,
    start_nav: f64,
    end_nav: f64,
) -> Result<ReturnResult, NeedsReview> {
    let years = years_between(start_date, end_date);
    let (simple, annualized) = growth_pcts(start_nav, end_nav, years)?;
    Ok(ReturnResult {
        start_date,
        end_date,
        start_nav,
        end_nav,
        simple_return_pct: round2(simple),
        annualized_return_pct: round2(annualized),
    })
}
