//! NavLab Core: mutual fund NAV returns and strategy simulation.
//!
//! This crate contains the calculation engine:
//! - Domain types (NAV points, canonical series, raw feed records, periods)
//! - Normalizer, the only producer of a canonical `NavSeries`
//! - Period returns (simple and annualized)
//! - SIP, Lumpsum and SWP simulators plus the side-by-side comparison
//! - Moving average and risk/return overlays
//!
//! Every calculation is a pure function of an immutable series and a
//! parameter set. Data problems surface as [`NeedsReview`], never as a panic
//! or a NaN.

pub mod config;
pub mod data;
pub mod domain;
pub mod fingerprint;
pub mod numeric;
pub mod returns;
pub mod review;
pub mod stats;
pub mod strategy;

pub use data::normalize;
pub use domain::{NavPoint, NavSeries, Period, RawNavRecord};
pub use returns::{compute_all_returns, compute_return, ReturnResult};
pub use review::NeedsReview;
pub use stats::{moving_average, risk_return_point, RiskReturnPoint};
pub use strategy::{
    compare_strategies, simulate_lumpsum, simulate_sip, simulate_swp, StrategyParams, ValuePoint,
};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: series and results can cross threads.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        // Domain types
        require_send::<domain::NavPoint>();
        require_sync::<domain::NavPoint>();
        require_send::<domain::NavSeries>();
        require_sync::<domain::NavSeries>();
        require_send::<domain::RawNavRecord>();
        require_sync::<domain::RawNavRecord>();
        require_send::<domain::SchemeMeta>();
        require_sync::<domain::SchemeMeta>();

        // Results
        require_send::<returns::ReturnResult>();
        require_sync::<returns::ReturnResult>();
        require_send::<review::NeedsReview>();
        require_sync::<review::NeedsReview>();
        require_send::<strategy::SipOutcome>();
        require_sync::<strategy::SipOutcome>();
        require_send::<strategy::LumpsumOutcome>();
        require_sync::<strategy::LumpsumOutcome>();
        require_send::<strategy::SwpOutcome>();
        require_sync::<strategy::SwpOutcome>();
        require_send::<strategy::StrategyRun>();
        require_sync::<strategy::StrategyRun>();
        require_send::<strategy::StrategyComparison>();
        require_sync::<strategy::StrategyComparison>();
        require_send::<stats::RiskReturnPoint>();
        require_sync::<stats::RiskReturnPoint>();

        // Config and fingerprints
        require_send::<config::SimulationConfig>();
        require_sync::<config::SimulationConfig>();
        require_send::<config::ConfigError>();
        require_sync::<config::ConfigError>();
        require_send::<fingerprint::RunStamp>();
        require_sync::<fingerprint::RunStamp>();
    }

    #[test]
    fn root_reexports_cover_the_core_operations() {
        let series = normalize(&[]);
        assert!(series.is_empty());
        assert_eq!(compute_return(&series, Period::OneYear), Err(NeedsReview::NoData));
        assert_eq!(moving_average(&[1.0], 1), vec![Some(1.0)]);
        assert_eq!(risk_return_point(&series), RiskReturnPoint::default());
    }
}
