//! Run fingerprinting: deterministic identity for a series and a parameter set.
//!
//! - `SeriesHash`: BLAKE3 over every point's ISO date and NAV bytes.
//! - `ParamsHash`: BLAKE3 over the canonical JSON of a parameter struct.
//! - `RunStamp`: both hashes plus the series extent, attached to reports so a
//!   result can be reproduced from the same inputs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::NavSeries;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeriesHash(pub String);

impl fmt::Display for SeriesHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParamsHash(pub String);

impl fmt::Display for ParamsHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hash a canonical series. Equal series always hash equal; any change to a
/// date or NAV changes the hash.
pub fn series_hash(series: &NavSeries) -> SeriesHash {
    let mut hasher = blake3::Hasher::new();
    for p in series {
        hasher.update(p.date.format("%Y-%m-%d").to_string().as_bytes());
        hasher.update(&p.nav.to_le_bytes());
    }
    SeriesHash(hasher.finalize().to_hex().to_string())
}

/// Hash any serializable parameter set via its JSON form.
///
/// Struct fields serialize in declaration order, so the JSON is stable.
pub fn params_hash<T: Serialize>(params: &T) -> Result<ParamsHash, serde_json::Error> {
    let json = serde_json::to_string(params)?;
    Ok(ParamsHash(blake3::hash(json.as_bytes()).to_hex().to_string()))
}

/// Identity of one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStamp {
    pub series_hash: SeriesHash,
    pub params_hash: ParamsHash,
    pub points: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

impl RunStamp {
    pub fn new<T: Serialize>(series: &NavSeries, params: &T) -> Result<Self, serde_json::Error> {
        Ok(Self {
            series_hash: series_hash(series),
            params_hash: params_hash(params)?,
            points: series.len(),
            first_date: series.first().map(|p| p.date),
            last_date: series.last().map(|p| p.date),
        })
    }

    /// Short form for report headers.
    pub fn short(&self) -> String {
        format!(
            "series:{} params:{}",
            prefix(&self.series_hash.0),
            prefix(&self.params_hash.0)
        )
    }
}

fn prefix(hex: &str) -> &str {
    hex.get(..12).unwrap_or(hex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Normalizer;
    use crate::domain::NavPoint;
    use crate::strategy::{Frequency, SipParams};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn series(navs: &[f64]) -> NavSeries {
        Normalizer::from_points(
            navs.iter()
                .enumerate()
                .map(|(i, &nav)| NavPoint::new(d(2024, 1, 1 + i as u32), nav)),
        )
    }

    fn sip(amount: f64) -> SipParams {
        SipParams {
            amount,
            frequency: Frequency::Monthly,
            start_date: d(2023, 1, 1),
            end_date: d(2023, 12, 31),
        }
    }

    #[test]
    fn series_hash_is_deterministic() {
        assert_eq!(series_hash(&series(&[10.0, 11.0])), series_hash(&series(&[10.0, 11.0])));
    }

    #[test]
    fn series_hash_sees_nav_changes() {
        assert_ne!(series_hash(&series(&[10.0, 11.0])), series_hash(&series(&[10.0, 11.01])));
    }

    #[test]
    fn empty_series_hash_is_stable() {
        let h = series_hash(&NavSeries::default());
        assert_eq!(h.0.len(), 64);
        assert_eq!(h, series_hash(&NavSeries::default()));
    }

    #[test]
    fn params_hash_differs_for_different_amounts() {
        let a = params_hash(&sip(5000.0)).unwrap();
        let b = params_hash(&sip(5001.0)).unwrap();
        assert_ne!(a, b);
        assert_eq!(a, params_hash(&sip(5000.0)).unwrap());
    }

    #[test]
    fn run_stamp_records_extent() {
        let s = series(&[10.0, 11.0, 12.0]);
        let stamp = RunStamp::new(&s, &sip(5000.0)).unwrap();
        assert_eq!(stamp.points, 3);
        assert_eq!(stamp.first_date, Some(d(2024, 1, 1)));
        assert_eq!(stamp.last_date, Some(d(2024, 1, 3)));
        assert!(stamp.short().starts_with("series:"));
    }

    #[test]
    fn short_form_tolerates_short_hashes() {
        let stamp = RunStamp {
            series_hash: SeriesHash("abc".into()),
            params_hash: ParamsHash("0123456789abcdef".into()),
            points: 0,
            first_date: None,
            last_date: None,
        };
        assert_eq!(stamp.short(), "series:abc params:0123456789ab");
    }
}
