//! Series windows: trailing slices and multi-fund date alignment.
//!
//! Every helper returns a subsequence of an existing canonical series, so the
//! ordering/positivity invariant carries over unchanged.

use chrono::{Months, NaiveDate};
use std::collections::HashSet;

use crate::domain::NavSeries;

/// Points dated within one calendar year of the latest observation
/// (inclusive of the boundary day).
pub fn trailing_year(series: &NavSeries) -> NavSeries {
    let Some(last) = series.last() else {
        return NavSeries::default();
    };
    let from = last
        .date
        .checked_sub_months(Months::new(12))
        .unwrap_or(NaiveDate::MIN);
    NavSeries::from_canonical(series.between(from, last.date).to_vec())
}

/// The trailing `n` observations.
pub fn last_n(series: &NavSeries, n: usize) -> NavSeries {
    series.tail(n)
}

/// Restrict `series` to the dates present in `reference`.
///
/// Used when several funds are charted against one axis: every fund keeps
/// only the observations that share a date with the reference fund.
pub fn align_to_dates(series: &NavSeries, reference: &[NaiveDate]) -> NavSeries {
    let wanted: HashSet<NaiveDate> = reference.iter().copied().collect();
    NavSeries::from_canonical(
        series
            .iter()
            .filter(|p| wanted.contains(&p.date))
            .copied()
            .collect(),
    )
}

/// Align every fund to the trailing-year dates of the first fund.
///
/// Mirrors the comparison chart: the first selected fund defines the axis.
pub fn align_trailing_year(funds: &[NavSeries]) -> Vec<NavSeries> {
    let Some(anchor) = funds.first() else {
        return Vec::new();
    };
    let axis = trailing_year(anchor).dates();
    funds.iter().map(|s| align_to_dates(s, &axis)).collect()
}
