//! Resolve a `NavSource` into a canonical series.

use anyhow::{Context, Result};
use navlab_core::config::NavSource;
use navlab_core::data::{synthetic_records, NormalizeReport, Normalizer, SchemePayload};
use navlab_core::domain::{NavSeries, SchemeMeta};
use std::path::Path;

/// A loaded NAV history ready for calculation.
pub struct LoadedNav {
    pub meta: SchemeMeta,
    pub series: NavSeries,
    pub report: NormalizeReport,
    pub synthetic: bool,
}

impl LoadedNav {
    pub fn label(&self) -> &str {
        self.meta.label()
    }
}

pub fn load(source: &NavSource) -> Result<LoadedNav> {
    match source {
        NavSource::File(path) => load_file(path),
        NavSource::Synthetic(s) => Ok(load_synthetic(&s.code, s.start, s.end)),
    }
}

pub fn load_file(path: &Path) -> Result<LoadedNav> {
    let payload = SchemePayload::from_file(path)
        .with_context(|| format!("failed to load NAV history from {}", path.display()))?;
    let (mut meta, series, report) = payload.into_series();
    if meta.scheme_name.is_none() && meta.scheme_code.is_none() {
        meta.scheme_name = path.file_stem().map(|s| s.to_string_lossy().into_owned());
    }
    if report.dropped() > 0 {
        log::warn!(
            "{}: dropped {} of {} NAV records",
            path.display(),
            report.dropped(),
            report.input
        );
    }
    Ok(LoadedNav {
        meta,
        series,
        report,
        synthetic: false,
    })
}

pub fn load_synthetic(code: &str, start: chrono::NaiveDate, end: chrono::NaiveDate) -> LoadedNav {
    log::info!("generating synthetic NAV history for {code} ({start} to {end})");
    let (series, report) = Normalizer::normalize_with_report(&synthetic_records(code, start, end));
    LoadedNav {
        meta: SchemeMeta {
            scheme_code: Some(code.to_string()),
            ..Default::default()
        },
        series,
        report,
        synthetic: true,
    }
}
