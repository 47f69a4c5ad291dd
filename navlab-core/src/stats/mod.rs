//! Statistics overlays: moving average and risk/return points.

pub mod moving_average;
pub mod risk_return;

pub use moving_average::{moving_average, MovingAverage};
pub use risk_return::{
    daily_returns, risk_return_for_funds, risk_return_point, FundRiskReturn, RiskReturnPoint,
    RISK_LOOKBACK,
};

/// Arithmetic mean. Returns 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by n). Returns 0.0 for an empty slice.
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}
