//! Cash-flow frequency and contribution schedules.

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

/// How often a recurring cash flow happens.
/// Serializes lowercase; deserializes through `FromStr`, so any casing
/// accepted on the command line is accepted in config files too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Yearly => "yearly",
        }
    }

    /// Row-count stride approximating this frequency on a daily series.
    ///
    /// Used by the SWP walk and the comparison SIP series, which trigger on
    /// every Nth observation rather than on calendar dates.
    pub fn row_stride(&self) -> usize {
        match self {
            Frequency::Weekly => 7,
            Frequency::Monthly => 30,
            Frequency::Yearly => 365,
        }
    }

    /// Next calendar date one period after `date`.
    ///
    /// Month and year steps clamp to the end of shorter months, and each step
    /// starts from the previous (possibly clamped) date.
    pub fn step(&self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Frequency::Weekly => date.checked_add_days(Days::new(7)),
            Frequency::Monthly => date.checked_add_months(Months::new(1)),
            Frequency::Yearly => date.checked_add_months(Months::new(12)),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Frequency {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            "yearly" => Ok(Frequency::Yearly),
            other => Err(ConfigError::UnknownFrequency(other.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Frequency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Scheduled cash-flow dates from `start` through `end` inclusive.
///
/// Empty when `start > end`.
pub fn contribution_schedule(start: NaiveDate, end: NaiveDate, frequency: Frequency) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = Some(start);
    while let Some(date) = current {
        if date > end {
            break;
        }
        dates.push(date);
        current = frequency.step(date);
    }
    dates
}
