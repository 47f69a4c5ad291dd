//! Systematic Investment Plan: fixed contribution on a calendar schedule.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::schedule::{contribution_schedule, Frequency};
use super::ValuePoint;
use crate::domain::NavSeries;
use crate::numeric::{checked_div, round2};
use crate::returns::{growth_pcts, years_between};
use crate::review::NeedsReview;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SipParams {
    pub amount: f64,
    pub frequency: Frequency,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Cumulative SIP result, all figures rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SipSummary {
    pub total_invested: f64,
    pub current_value: f64,
    pub absolute_return_pct: f64,
    pub annualized_return_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SipOutcome {
    /// Portfolio value right after each executed contribution.
    pub trajectory: Vec<ValuePoint>,
    pub summary: SipSummary,
    pub total_units: f64,
    pub executed: usize,
    /// Scheduled dates with no NAV on or before them (before fund inception).
    pub skipped: usize,
}

/// Replay a SIP schedule against the series.
///
/// Each scheduled date buys at the latest NAV on or before it; dates with
/// no such NAV are skipped, never deferred. The final value uses the latest
/// NAV in the series.
pub fn simulate_sip(series: &NavSeries, params: &SipParams) -> Result<SipOutcome, NeedsReview> {
    if series.is_empty() {
        return Err(NeedsReview::NoData);
    }
    if params.start_date > params.end_date {
        return Err(NeedsReview::InvalidRange);
    }
    if !(params.amount.is_finite() && params.amount > 0.0) {
        return Err(NeedsReview::InvalidAmount);
    }

    let points = series.points();
    let schedule = contribution_schedule(params.start_date, params.end_date, params.frequency);

    let mut trajectory = Vec::with_capacity(schedule.len());
    let mut total_units = 0.0;
    let mut total_invested = 0.0;
    let mut skipped = 0;

    // Schedule dates are increasing, so one forward cursor finds every
    // carry-backward price in a single pass over the series.
    let mut cursor = 0;
    for date in schedule {
        while cursor < points.len() && points[cursor].date <= date {
            cursor += 1;
        }
        let Some(price) = cursor.checked_sub(1).map(|i| points[i]) else {
            log::debug!("sip: no NAV on or before {date}, contribution skipped");
            skipped += 1;
            continue;
        };
        let Some(units) = checked_div(params.amount, price.nav) else {
            skipped += 1;
            continue;
        };
        total_units += units;
        total_invested += params.amount;
        trajectory.push(ValuePoint::new(date, round2(total_units * price.nav)));
    }

    let last = series.last().ok_or(NeedsReview::InsufficientData)?;
    if total_invested <= 0.0 {
        log::debug!("sip: nothing invested between {} and {}", params.start_date, params.end_date);
        return Err(NeedsReview::InsufficientData);
    }

    let current_value = total_units * last.nav;
    let years = years_between(params.start_date, params.end_date);
    let (absolute, annualized) = growth_pcts(total_invested, current_value, years)?;

    Ok(SipOutcome {
        summary: SipSummary {
            total_invested: round2(total_invested),
            current_value: round2(current_value),
            absolute_return_pct: round2(absolute),
            annualized_return_pct: round2(annualized),
        },
        executed: trajectory.len(),
        trajectory,
        total_units,
        skipped,
    })
}
