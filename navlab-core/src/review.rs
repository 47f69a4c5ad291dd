//! "Needs review": the structured non-fatal outcome of every calculation.
//!
//! Malformed or insufficient data never panics and never yields NaN. Instead
//! the operation returns `Err(NeedsReview)` with a reason the caller can show
//! or branch on.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Period;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum NeedsReview {
    #[error("No NAV history available")]
    NoData,

    #[error("Invalid date range")]
    InvalidRange,

    #[error("Investment amount must be a positive number")]
    InvalidAmount,

    #[error("Insufficient data for calculation")]
    InsufficientData,

    #[error("Not enough NAV history for the {period} period")]
    InsufficientHistory { period: Period },

    #[error("Calculation produced a non-finite result")]
    DegenerateArithmetic,
}

impl NeedsReview {
    /// Human-readable reason string.
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reasons_are_readable() {
        assert_eq!(NeedsReview::NoData.reason(), "No NAV history available");
        assert_eq!(
            NeedsReview::InsufficientHistory {
                period: Period::OneYear
            }
            .reason(),
            "Not enough NAV history for the 1y period"
        );
    }

    #[test]
    fn serializes_with_reason_tag() {
        let json = serde_json::to_string(&NeedsReview::InvalidRange).unwrap();
        assert_eq!(json, r#"{"reason":"invalid_range"}"#);
        let json = serde_json::to_string(&NeedsReview::InsufficientHistory {
            period: Period::ThreeMonths,
        })
        .unwrap();
        assert_eq!(json, r#"{"reason":"insufficient_history","period":"3m"}"#);
    }
}
