//! Synthetic NAV history for demos, tests and benchmarks.
//!
//! Produces a deterministic random walk from a starting NAV of 10.0, seeded
//! from the scheme code. These are clearly fake; the CLI tags any report built
//! on them.

use chrono::{Datelike, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::data::normalize;
use crate::domain::{NavSeries, RawNav, RawNavRecord};

/// Starting NAV of every synthetic walk.
pub const SYNTHETIC_START_NAV: f64 = 10.0;

/// Generate raw weekday NAV records for `scheme_code` over `[start, end]`.
///
/// Output is raw (string NAVs, ISO dates) so it flows through the same
/// normalizer as real feeds.
pub fn synthetic_records(scheme_code: &str, start: NaiveDate, end: NaiveDate) -> Vec<RawNavRecord> {
    // Deterministic seed from scheme code
    let seed: [u8; 32] = *blake3::hash(scheme_code.as_bytes()).as_bytes();
    let mut rng = StdRng::from_seed(seed);

    let mut records = Vec::new();
    let mut nav = SYNTHETIC_START_NAV;
    let mut current = start;

    while current <= end {
        if matches!(current.weekday(), Weekday::Sat | Weekday::Sun) {
            current += chrono::Duration::days(1);
            continue;
        }

        records.push(RawNavRecord::new(
            current.format("%Y-%m-%d").to_string(),
            RawNav::Text(format!("{nav:.4}")),
        ));

        let daily_return: f64 = rng.gen_range(-0.012..0.014);
        nav *= 1.0 + daily_return;
        current += chrono::Duration::days(1);
    }

    records
}

/// Normalized synthetic series for `scheme_code` over `[start, end]`.
pub fn synthetic_series(scheme_code: &str, start: NaiveDate, end: NaiveDate) -> NavSeries {
    normalize(&synthetic_records(scheme_code, start, end))
}
