//! Strategy simulators: replay a cash-flow schedule against a NAV series.
//!
//! All simulators are pure: an immutable series and parameter struct in,
//! a freshly allocated outcome out. Any of them may run concurrently over
//! the same series.

pub mod compare;
pub mod lumpsum;
pub mod schedule;
pub mod sip;
pub mod swp;

pub use compare::{compare_strategies, simulate_sip_stride_series, CompareRequest, StrategyComparison};
pub use lumpsum::{simulate_lumpsum, LumpsumOutcome, LumpsumParams};
pub use schedule::{contribution_schedule, Frequency};
pub use sip::{simulate_sip, SipOutcome, SipParams, SipSummary};
pub use swp::{simulate_swp, SwpOutcome, SwpParams, SWP_CORPUS_MULTIPLE};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::NavSeries;
use crate::review::NeedsReview;

/// Portfolio value on one date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuePoint {
    pub date: NaiveDate,
    pub value: f64,
}

impl ValuePoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// Parameters for any one strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StrategyParams {
    Sip(SipParams),
    Lumpsum(LumpsumParams),
    Swp(SwpParams),
}

impl StrategyParams {
    pub fn kind(&self) -> &'static str {
        match self {
            StrategyParams::Sip(_) => "sip",
            StrategyParams::Lumpsum(_) => "lumpsum",
            StrategyParams::Swp(_) => "swp",
        }
    }

    /// Run the matching simulator.
    pub fn simulate(&self, series: &NavSeries) -> StrategyRun {
        match self {
            StrategyParams::Sip(p) => StrategyRun::Sip(simulate_sip(series, p)),
            StrategyParams::Lumpsum(p) => StrategyRun::Lumpsum(simulate_lumpsum(series, p)),
            StrategyParams::Swp(p) => StrategyRun::Swp(simulate_swp(series, p)),
        }
    }
}

/// Outcome of [`StrategyParams::simulate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "outcome", rename_all = "lowercase")]
pub enum StrategyRun {
    Sip(Result<SipOutcome, NeedsReview>),
    Lumpsum(LumpsumOutcome),
    Swp(SwpOutcome),
}

impl StrategyRun {
    /// Value trajectory; empty when the SIP needs review.
    pub fn trajectory(&self) -> &[ValuePoint] {
        match self {
            StrategyRun::Sip(Ok(out)) => &out.trajectory,
            StrategyRun::Sip(Err(_)) => &[],
            StrategyRun::Lumpsum(out) => &out.trajectory,
            StrategyRun::Swp(out) => &out.trajectory,
        }
    }

    /// Reason the run could not be completed, if any.
    pub fn needs_review(&self) -> Option<NeedsReview> {
        match self {
            StrategyRun::Sip(Err(reason)) => Some(*reason),
            StrategyRun::Lumpsum(out) if out.review.is_some() => out.review,
            StrategyRun::Lumpsum(out) if out.entry.is_none() => Some(NeedsReview::InsufficientData),
            StrategyRun::Swp(out) if out.entry.is_none() => Some(NeedsReview::InsufficientData),
            _ => None,
        }
    }
}
