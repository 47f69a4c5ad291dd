//! NavPoint and NavSeries: the fundamental price data unit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One fund's published per-unit price on a single day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavPoint {
    pub date: NaiveDate,
    pub nav: f64,
}

impl NavPoint {
    pub fn new(date: NaiveDate, nav: f64) -> Self {
        Self { date, nav }
    }

    /// True if the NAV can be used as a price (finite and strictly positive).
    pub fn is_usable(&self) -> bool {
        self.nav.is_finite() && self.nav > 0.0
    }
}

/// Canonical NAV history for one scheme.
///
/// Strictly increasing by date, every NAV finite and > 0. Only the normalizer
/// (and window helpers slicing an existing series) can build one, so the
/// invariant holds for every value a caller can observe. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NavSeries {
    points: Vec<NavPoint>,
}

impl NavSeries {
    /// Wrap points that are already canonical. Callers inside the crate must
    /// uphold the ordering and positivity invariant.
    pub(crate) fn from_canonical(points: Vec<NavPoint>) -> Self {
        debug_assert!(points.windows(2).all(|w| w[0].date < w[1].date));
        debug_assert!(points.iter().all(NavPoint::is_usable));
        Self { points }
    }

    pub fn points(&self) -> &[NavPoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NavPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&NavPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&NavPoint> {
        self.points.last()
    }

    /// NAV column, in date order.
    pub fn navs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.nav).collect()
    }

    /// Date column, in date order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    /// Carry-backward lookup: the latest point with `date <= target`.
    pub fn latest_on_or_before(&self, target: NaiveDate) -> Option<&NavPoint> {
        let idx = self.points.partition_point(|p| p.date <= target);
        idx.checked_sub(1).map(|i| &self.points[i])
    }

    /// Index of the first point with `date >= target`.
    pub fn index_on_or_after(&self, target: NaiveDate) -> Option<usize> {
        let idx = self.points.partition_point(|p| p.date < target);
        (idx < self.points.len()).then_some(idx)
    }

    /// First point with `date >= target`.
    pub fn first_on_or_after(&self, target: NaiveDate) -> Option<&NavPoint> {
        self.index_on_or_after(target).map(|i| &self.points[i])
    }

    /// Points with `start <= date <= end`. Empty when `start > end`.
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> &[NavPoint] {
        if start > end {
            return &[];
        }
        let lo = self.points.partition_point(|p| p.date < start);
        let hi = self.points.partition_point(|p| p.date <= end);
        &self.points[lo..hi]
    }

    /// Trailing `n` points as a new series.
    pub(crate) fn tail(&self, n: usize) -> Self {
        let start = self.points.len().saturating_sub(n);
        Self::from_canonical(self.points[start..].to_vec())
    }
}

impl<'a> IntoIterator for &'a NavSeries {
    type Item = &'a NavPoint;
    type IntoIter = std::slice::Iter<'a, NavPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
