//! Lumpsum: one purchase, then mark to market.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ValuePoint;
use crate::domain::{NavPoint, NavSeries};
use crate::numeric::{checked_div, round2};
use crate::review::NeedsReview;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LumpsumParams {
    pub amount: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LumpsumOutcome {
    /// Observation the purchase was made at.
    pub entry: Option<NavPoint>,
    pub units: f64,
    /// `units * nav` for every observation in `[start_date, end_date]`.
    pub trajectory: Vec<ValuePoint>,
    /// Set when the parameters were rejected before simulation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<NeedsReview>,
}

impl LumpsumOutcome {
    fn rejected(reason: NeedsReview) -> Self {
        Self {
            review: Some(reason),
            ..Default::default()
        }
    }
}

/// Invest `amount` at the first NAV on or after `start_date` (falling back to
/// the first observation) and value the holding at every observation in range.
///
/// No usable entry point yields an empty trajectory. An inverted date range
/// or a non-positive amount is rejected up front and recorded in `review`.
pub fn simulate_lumpsum(series: &NavSeries, params: &LumpsumParams) -> LumpsumOutcome {
    if params.start_date > params.end_date {
        log::debug!(
            "lumpsum: start {} after end {}, nothing to simulate",
            params.start_date,
            params.end_date
        );
        return LumpsumOutcome::rejected(NeedsReview::InvalidRange);
    }
    if !(params.amount.is_finite() && params.amount > 0.0) {
        log::debug!("lumpsum: non-positive amount {}, nothing to simulate", params.amount);
        return LumpsumOutcome::rejected(NeedsReview::InvalidAmount);
    }

    let Some(entry) = series
        .first_on_or_after(params.start_date)
        .or_else(|| series.first())
        .copied()
    else {
        return LumpsumOutcome::default();
    };
    let Some(units) = checked_div(params.amount, entry.nav) else {
        return LumpsumOutcome::default();
    };

    let trajectory = series
        .between(params.start_date, params.end_date)
        .iter()
        .map(|p| ValuePoint::new(p.date, round2(units * p.nav)))
        .collect();

    LumpsumOutcome {
        entry: Some(entry),
        units,
        trajectory,
        review: None,
    }
}
