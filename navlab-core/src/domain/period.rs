//! Named lookback periods for the returns table.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

/// Fixed lookback measured back from the latest observation in a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Period {
    #[serde(rename = "1m")]
    OneMonth,
    #[serde(rename = "3m")]
    ThreeMonths,
    #[serde(rename = "6m")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
}

impl Period {
    /// All periods in returns-table order.
    pub const ALL: [Period; 4] = [
        Period::OneMonth,
        Period::ThreeMonths,
        Period::SixMonths,
        Period::OneYear,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Period::OneMonth => "1m",
            Period::ThreeMonths => "3m",
            Period::SixMonths => "6m",
            Period::OneYear => "1y",
        }
    }

    pub fn months(&self) -> u32 {
        match self {
            Period::OneMonth => 1,
            Period::ThreeMonths => 3,
            Period::SixMonths => 6,
            Period::OneYear => 12,
        }
    }

    /// Start of the lookback window ending at `end`.
    ///
    /// Calendar arithmetic; a day that does not exist in the target month
    /// clamps to that month's last day (31 May - 3m = 28/29 Feb).
    pub fn start_from(&self, end: NaiveDate) -> Option<NaiveDate> {
        end.checked_sub_months(Months::new(self.months()))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

impl FromStr for Period {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1m" => Ok(Period::OneMonth),
            "3m" => Ok(Period::ThreeMonths),
            "6m" => Ok(Period::SixMonths),
            "1y" | "12m" => Ok(Period::OneYear),
            other => Err(ConfigError::UnknownPeriod(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn start_dates_step_back_in_calendar_months() {
        let end = d(2024, 6, 15);
        assert_eq!(Period::OneMonth.start_from(end), Some(d(2024, 5, 15)));
        assert_eq!(Period::ThreeMonths.start_from(end), Some(d(2024, 3, 15)));
        assert_eq!(Period::SixMonths.start_from(end), Some(d(2023, 12, 15)));
        assert_eq!(Period::OneYear.start_from(end), Some(d(2023, 6, 15)));
    }

    #[test]
    fn month_end_clamps() {
        assert_eq!(Period::ThreeMonths.start_from(d(2024, 5, 31)), Some(d(2024, 2, 29)));
        assert_eq!(Period::OneYear.start_from(d(2024, 2, 29)), Some(d(2023, 2, 28)));
    }

    #[test]
    fn parse_and_display_roundtrip() {
        for p in Period::ALL {
            assert_eq!(p.to_string().parse::<Period>().unwrap(), p);
        }
        assert!(matches!(
            "2w".parse::<Period>(),
            Err(ConfigError::UnknownPeriod(_))
        ));
    }

    #[test]
    fn serde_uses_short_labels() {
        assert_eq!(serde_json::to_string(&Period::SixMonths).unwrap(), "\"6m\"");
        assert_eq!(serde_json::from_str::<Period>("\"1Y\"").unwrap(), Period::OneYear);
        assert_eq!(serde_json::from_str::<Period>("\"12m\"").unwrap(), Period::OneYear);
    }
}
