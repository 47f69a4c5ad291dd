//! Risk/return point for fund comparison scatter plots.
//!
//! Uses the trailing [`RISK_LOOKBACK`] observations (about one trading year):
//! mean and population standard deviation of day-over-day simple returns,
//! both scaled to percent.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::{mean, population_std_dev};
use crate::domain::{NavSeries, SchemeCode};
use crate::numeric::checked_div;

/// Trailing observations used for the risk/return statistics.
pub const RISK_LOOKBACK: usize = 260;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskReturnPoint {
    pub volatility_pct: f64,
    pub avg_return_pct: f64,
}

/// Risk/return point labelled with its fund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundRiskReturn {
    pub scheme_code: SchemeCode,
    pub point: RiskReturnPoint,
}

/// Day-over-day simple returns, skipping any that are not finite
/// (a zero prior value).
pub fn daily_returns(values: &[f64]) -> Vec<f64> {
    values
        .windows(2)
        .filter_map(|w| checked_div(w[1] - w[0], w[0]))
        .collect()
}

/// Volatility and average daily return (percent) over the trailing
/// [`RISK_LOOKBACK`] observations. Fewer than two observations give zeros.
pub fn risk_return_point(series: &NavSeries) -> RiskReturnPoint {
    let navs = series.tail(RISK_LOOKBACK).navs();
    let returns = daily_returns(&navs);
    if returns.is_empty() {
        return RiskReturnPoint::default();
    }
    RiskReturnPoint {
        volatility_pct: population_std_dev(&returns) * 100.0,
        avg_return_pct: mean(&returns) * 100.0,
    }
}

/// Risk/return points for several funds, computed in parallel.
/// Output order matches input order.
pub fn risk_return_for_funds(funds: &[(SchemeCode, NavSeries)]) -> Vec<FundRiskReturn> {
    funds
        .par_iter()
        .map(|(code, series)| FundRiskReturn {
            scheme_code: code.clone(),
            point: risk_return_point(series),
        })
        .collect()
}
