//! Raw NAV records as delivered by upstream feeds (before normalization).

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::nav::NavPoint;

/// NAV cell as it arrives over the wire: a number, a numeric string, or null.
/// Anything else (booleans, objects) is kept as `Other` and never yields a value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNav {
    Number(f64),
    Text(String),
    #[default]
    Missing,
    Other(serde_json::Value),
}

impl RawNav {
    /// Numeric value if the cell holds a finite number.
    pub fn value(&self) -> Option<f64> {
        let v = match self {
            RawNav::Number(n) => *n,
            RawNav::Text(s) => s.trim().parse::<f64>().ok()?,
            RawNav::Missing | RawNav::Other(_) => return None,
        };
        v.is_finite().then_some(v)
    }
}

/// One `{date, nav}` record from the external NAV history source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawNavRecord {
    #[serde(default, deserialize_with = "text_or_empty")]
    pub date: String,
    #[serde(default)]
    pub nav: RawNav,
}

impl RawNavRecord {
    pub fn new(date: impl Into<String>, nav: RawNav) -> Self {
        Self {
            date: date.into(),
            nav,
        }
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_nav_date(&self.date)
    }
}

impl From<&NavPoint> for RawNavRecord {
    fn from(point: &NavPoint) -> Self {
        Self {
            date: point.date.format("%Y-%m-%d").to_string(),
            nav: RawNav::Number(point.nav),
        }
    }
}

// A missing or non-string date becomes empty, which the normalizer drops.
fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        _ => String::new(),
    })
}

/// Parse a NAV date.
///
/// Accepts ISO `YYYY-MM-DD` (optionally followed by a `T...` time part) and
/// the `DD-MM-YYYY` form used by Indian AMFI-derived feeds.
pub fn parse_nav_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    let day_part = text.split_once('T').map_or(text, |(day, _)| day);
    NaiveDate::parse_from_str(day_part, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(day_part, "%d-%m-%Y"))
        .ok()
}
