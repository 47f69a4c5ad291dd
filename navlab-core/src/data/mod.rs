//! Data ingestion and normalization

pub mod ingest;
pub mod normalize;
pub mod synthetic;
pub mod window;

pub use ingest::{IngestError, SchemePayload};
pub use normalize::{normalize, NormalizeReport, Normalizer};
pub use synthetic::{synthetic_records, synthetic_series, SYNTHETIC_START_NAV};
pub use window::{align_to_dates, align_trailing_year, last_n, trailing_year};
