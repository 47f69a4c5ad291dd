//! Serializable simulation configuration (TOML).
//!
//! ```toml
//! [nav]
//! file = "data/119551.json"
//!
//! [strategy]
//! kind = "sip"
//! amount = 5000.0
//! frequency = "monthly"
//! start_date = "2023-01-01"
//! end_date = "2023-12-31"
//! ```
//!
//! `[nav]` may instead name a synthetic series:
//! `[nav.synthetic]` with `code`, and optional `start` / `end`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::strategy::{
    CompareRequest, Frequency, LumpsumParams, SipParams, StrategyParams, SwpParams,
};

/// Configuration and parameter errors. These are caller mistakes, not data
/// problems, so they are errors rather than "needs review" outcomes.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown frequency '{0}' (expected weekly, monthly or yearly)")]
    UnknownFrequency(String),

    #[error("unknown period '{0}' (expected 1m, 3m, 6m or 1y)")]
    UnknownPeriod(String),

    #[error("{field} must be a positive number, got {value}")]
    NonPositiveAmount { field: &'static str, value: f64 },

    #[error("start_date {start} is after end_date {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("config has no [{0}] section")]
    MissingSection(&'static str),

    #[error("read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialize config TOML: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Where the NAV history for a run comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavSource {
    /// JSON scheme payload on disk.
    File(PathBuf),
    /// Deterministic synthetic walk seeded by a scheme code.
    Synthetic(SyntheticSource),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticSource {
    pub code: String,
    #[serde(default = "default_synthetic_start")]
    pub start: NaiveDate,
    #[serde(default = "default_synthetic_end")]
    pub end: NaiveDate,
}

fn default_synthetic_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2019, 1, 1).unwrap_or(NaiveDate::MIN)
}

fn default_synthetic_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or(NaiveDate::MAX)
}

/// Parameters for the comparison view. Defaults mirror the calculator's
/// initial form values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub sip_amount: f64,
    pub sip_frequency: Frequency,
    pub lumpsum_amount: f64,
    pub swp_withdrawal: f64,
    pub swp_frequency: Frequency,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or(NaiveDate::MIN),
            end_date: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap_or(NaiveDate::MIN),
            sip_amount: 5000.0,
            sip_frequency: Frequency::Monthly,
            lumpsum_amount: 50000.0,
            swp_withdrawal: 2000.0,
            swp_frequency: Frequency::Monthly,
        }
    }
}

impl CompareConfig {
    pub fn to_request(&self) -> Result<CompareRequest, ConfigError> {
        require_positive("sip_amount", self.sip_amount)?;
        require_positive("lumpsum_amount", self.lumpsum_amount)?;
        require_positive("swp_withdrawal", self.swp_withdrawal)?;
        require_ordered(self.start_date, self.end_date)?;
        Ok(CompareRequest {
            sip: SipParams {
                amount: self.sip_amount,
                frequency: self.sip_frequency,
                start_date: self.start_date,
                end_date: self.end_date,
            },
            lumpsum: LumpsumParams {
                amount: self.lumpsum_amount,
                start_date: self.start_date,
                end_date: self.end_date,
            },
            swp: SwpParams {
                withdrawal: self.swp_withdrawal,
                frequency: self.swp_frequency,
                start_date: self.start_date,
            },
        })
    }
}

/// A complete simulation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub nav: NavSource,
    #[serde(default)]
    pub strategy: Option<StrategyParams>,
    #[serde(default)]
    pub compare: Option<CompareConfig>,
}

impl SimulationConfig {
    /// Load a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        if let Some(strategy) = &config.strategy {
            validate_strategy(strategy)?;
        }
        Ok(config)
    }

    /// Serialize the config to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The `[strategy]` section, required by single-strategy commands.
    pub fn strategy(&self) -> Result<&StrategyParams, ConfigError> {
        self.strategy
            .as_ref()
            .ok_or(ConfigError::MissingSection("strategy"))
    }

    /// Comparison request from `[compare]`, or the defaults when absent.
    pub fn compare_request(&self) -> Result<CompareRequest, ConfigError> {
        self.compare.clone().unwrap_or_default().to_request()
    }
}

fn validate_strategy(strategy: &StrategyParams) -> Result<(), ConfigError> {
    match strategy {
        StrategyParams::Sip(p) => {
            require_positive("amount", p.amount)?;
            require_ordered(p.start_date, p.end_date)
        }
        StrategyParams::Lumpsum(p) => {
            require_positive("amount", p.amount)?;
            require_ordered(p.start_date, p.end_date)
        }
        StrategyParams::Swp(p) => require_positive("withdrawal", p.withdrawal),
    }
}

fn require_ordered(start: NaiveDate, end: NaiveDate) -> Result<(), ConfigError> {
    if start > end {
        Err(ConfigError::InvalidRange { start, end })
    } else {
        Ok(())
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositiveAmount { field, value })
    }
}
