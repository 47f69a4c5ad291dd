//! Normalizer: the only producer of a canonical `NavSeries`.
//!
//! Filter unusable records, stable-sort by date, collapse duplicate dates
//! (last occurrence wins). Never fails: all-invalid input yields an empty
//! series, which downstream code reports as "needs review".

use serde::{Deserialize, Serialize};

use crate::domain::{NavPoint, NavSeries, RawNavRecord};

/// Counts of what the normalizer kept and dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeReport {
    pub input: usize,
    pub kept: usize,
    pub invalid_date: usize,
    pub invalid_nav: usize,
    pub duplicate_date: usize,
}

impl NormalizeReport {
    pub fn dropped(&self) -> usize {
        self.invalid_date + self.invalid_nav + self.duplicate_date
    }
}

/// Normalizer for raw NAV records
pub struct Normalizer;

impl Normalizer {
    /// Normalize raw `{date, nav}` records into a canonical series.
    pub fn normalize(raw: &[RawNavRecord]) -> NavSeries {
        Self::normalize_with_report(raw).0
    }

    /// Normalize and report how many records were dropped, and why.
    pub fn normalize_with_report(raw: &[RawNavRecord]) -> (NavSeries, NormalizeReport) {
        let mut report = NormalizeReport {
            input: raw.len(),
            ..Default::default()
        };

        let mut points = Vec::with_capacity(raw.len());
        for record in raw {
            let Some(date) = record.parsed_date() else {
                report.invalid_date += 1;
                continue;
            };
            let point = match record.nav.value() {
                Some(nav) => NavPoint::new(date, nav),
                None => {
                    report.invalid_nav += 1;
                    continue;
                }
            };
            if !point.is_usable() {
                report.invalid_nav += 1;
                continue;
            }
            points.push(point);
        }

        let (series, duplicates) = Self::canonicalize(points);
        report.duplicate_date = duplicates;
        report.kept = series.len();

        if report.dropped() > 0 {
            log::debug!(
                "normalize: kept {} of {} records (invalid date {}, invalid nav {}, duplicate {})",
                report.kept,
                report.input,
                report.invalid_date,
                report.invalid_nav,
                report.duplicate_date
            );
        }

        (series, report)
    }

    /// Normalize already-typed points (unsorted, possibly duplicated or
    /// non-positive).
    pub fn from_points(points: impl IntoIterator<Item = NavPoint>) -> NavSeries {
        let usable: Vec<NavPoint> = points.into_iter().filter(NavPoint::is_usable).collect();
        Self::canonicalize(usable).0
    }

    /// Stable sort by date, then keep the last point of each run of equal
    /// dates. Returns the series and the number of duplicates collapsed.
    fn canonicalize(mut points: Vec<NavPoint>) -> (NavSeries, usize) {
        points.sort_by_key(|p| p.date);

        let mut out: Vec<NavPoint> = Vec::with_capacity(points.len());
        let mut duplicates = 0;
        for point in points {
            match out.last_mut() {
                Some(prev) if prev.date == point.date => {
                    *prev = point;
                    duplicates += 1;
                }
                _ => out.push(point),
            }
        }

        (NavSeries::from_canonical(out), duplicates)
    }
}

/// Normalize raw records into a canonical series.
pub fn normalize(raw: &[RawNavRecord]) -> NavSeries {
    Normalizer::normalize(raw)
}

impl NavSeries {
    /// Raw records reproducing this series (ISO dates, numeric NAVs).
    ///
    /// `normalize(&s.to_raw_records()) == s` for every canonical series.
    pub fn to_raw_records(&self) -> Vec<RawNavRecord> {
        self.iter().map(RawNavRecord::from).collect()
    }
}
