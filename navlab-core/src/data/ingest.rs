//! Scheme payload ingest: `{ "meta": {...}, "data": [{ "date", "nav" }] }`.
//!
//! A payload that is not valid JSON is a transport error. Bad records inside a
//! valid payload are not: they pass through to the normalizer, which drops them.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::data::normalize::{NormalizeReport, Normalizer};
use crate::domain::{NavSeries, RawNavRecord, SchemeMeta};

/// Errors from reading a scheme payload.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read NAV file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed NAV payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// NAV history plus catalog metadata for one scheme, as delivered upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemePayload {
    #[serde(default, alias = "metadata")]
    pub meta: SchemeMeta,
    #[serde(default, alias = "navHistory")]
    pub data: Vec<RawNavRecord>,
}

impl SchemePayload {
    /// Parse a payload from JSON. A bare array of records is also accepted.
    pub fn from_json(content: &str) -> Result<Self, IngestError> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        if value.is_array() {
            let data: Vec<RawNavRecord> = serde_json::from_value(value)?;
            return Ok(Self {
                meta: SchemeMeta::default(),
                data,
            });
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Read and parse a payload file.
    pub fn from_file(path: &Path) -> Result<Self, IngestError> {
        let content = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Normalize the raw records into a canonical series.
    pub fn into_series(self) -> (SchemeMeta, NavSeries, NormalizeReport) {
        let (series, report) = Normalizer::normalize_with_report(&self.data);
        (self.meta, series, report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_feed_payload() {
        let json = r#"{
            "meta": {"scheme_code": 119551, "scheme_name": "Alpha Growth", "fund_house": "Alpha AMC"},
            "data": [
                {"date": "03-01-2024", "nav": "10.50"},
                {"date": "02-01-2024", "nav": "10.00"},
                {"date": "01-01-2024", "nav": null}
            ]
        }"#;
        let payload = SchemePayload::from_json(json).unwrap();
        assert_eq!(payload.data.len(), 3);
        let (meta, series, report) = payload.into_series();
        assert_eq!(meta.scheme_code.as_deref(), Some("119551"));
        assert_eq!(series.navs(), vec![10.0, 10.5]);
        assert_eq!(report.invalid_nav, 1);
    }

    #[test]
    fn accepts_camel_case_api_shape() {
        let json = r#"{"metadata": {"schemeName": "Beta"}, "navHistory": [{"date": "2024-01-02", "nav": 11}]}"#;
        let payload = SchemePayload::from_json(json).unwrap();
        assert_eq!(payload.meta.label(), "Beta");
        assert_eq!(payload.data.len(), 1);
    }

    #[test]
    fn accepts_bare_record_array() {
        let json = r#"[{"date": "2024-01-02", "nav": "11.1"}]"#;
        let payload = SchemePayload::from_json(json).unwrap();
        assert_eq!(payload.data.len(), 1);
        assert!(payload.meta.scheme_name.is_none());
    }

    #[test]
    fn malformed_records_are_dropped_not_fatal() {
        let json = r#"{"data": [
            {"date": "2024-01-01", "nav": "10"},
            {"date": "2024-01-02", "nav": true},
            {"nav": "11"},
            {"date": "2024-01-04", "nav": {"value": 12}}
        ]}"#;
        let payload = SchemePayload::from_json(json).unwrap();
        assert_eq!(payload.data.len(), 4);
        let (_, series, report) = payload.into_series();
        assert_eq!(series.navs(), vec![10.0]);
        assert_eq!(report.invalid_nav, 2);
        assert_eq!(report.invalid_date, 1);
    }

    #[test]
    fn invalid_json_is_an_error() {
        let err = SchemePayload::from_json("{not json").unwrap_err();
        assert!(matches!(err, IngestError::Json(_)));
        assert!(err.to_string().contains("malformed NAV payload"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SchemePayload::from_file(Path::new("/nonexistent/navlab/nav.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/navlab/nav.json"));
    }
}
