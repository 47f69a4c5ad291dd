//! Side-by-side strategy comparison.
//!
//! The comparison chart uses a row-stride SIP approximation (contribute on
//! every Nth observation of the whole series) rather than the calendar SIP,
//! so all three curves share the observation axis.

use serde::{Deserialize, Serialize};

use super::lumpsum::{simulate_lumpsum, LumpsumParams};
use super::sip::SipParams;
use super::swp::{simulate_swp, SwpParams};
use super::ValuePoint;
use crate::domain::NavSeries;
use crate::numeric::{checked_div, round2};

/// Parameters for all three strategies of one comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareRequest {
    pub sip: SipParams,
    pub lumpsum: LumpsumParams,
    pub swp: SwpParams,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrategyComparison {
    pub sip: Vec<ValuePoint>,
    pub lumpsum: Vec<ValuePoint>,
    pub swp: Vec<ValuePoint>,
}

/// SIP value series for the comparison chart.
///
/// Walks every observation in `[start_date, end_date]`. A contribution is
/// made when the observation's index in the full series is a multiple of the
/// frequency's row stride. The holding is valued on every in-range row.
pub fn simulate_sip_stride_series(series: &NavSeries, params: &SipParams) -> Vec<ValuePoint> {
    if !(params.amount.is_finite() && params.amount > 0.0) {
        return Vec::new();
    }
    let stride = params.frequency.row_stride();
    let mut units = 0.0;
    let mut values = Vec::new();

    for (index, point) in series.iter().enumerate() {
        if point.date < params.start_date || point.date > params.end_date {
            continue;
        }
        if index % stride == 0 {
            if let Some(bought) = checked_div(params.amount, point.nav) {
                units += bought;
            }
        }
        values.push(ValuePoint::new(point.date, round2(units * point.nav)));
    }

    values
}

/// Run the stride SIP, Lumpsum and SWP simulations concurrently.
///
/// The series is shared read-only; each simulation allocates its own output.
pub fn compare_strategies(series: &NavSeries, request: &CompareRequest) -> StrategyComparison {
    let (sip, (lumpsum, swp)) = rayon::join(
        || simulate_sip_stride_series(series, &request.sip),
        || {
            rayon::join(
                || simulate_lumpsum(series, &request.lumpsum).trajectory,
                || simulate_swp(series, &request.swp).trajectory,
            )
        },
    );
    StrategyComparison { sip, lumpsum, swp }
}
