//! Market data provider trait, lookback buckets and structured error types.
//!
//! The MarketDataProvider trait abstracts over data sources (Yahoo Finance,
//! CSV files, synthetic walks) so the analyzer can swap implementations and
//! tests can use fixtures.

use crate::domain::{PriceBar, PriceSeries};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Structured error types for data operations.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("rate limited by provider (retry after {retry_after_secs}s)")]
    RateLimited { retry_after_secs: u64 },

    #[error("response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error("authentication required: {0}")]
    AuthenticationRequired(String),

    #[error("symbol not found: {symbol}")]
    SymbolNotFound { symbol: String },

    #[error("hard stop: data provider has blocked requests (circuit breaker tripped)")]
    CircuitBreakerTripped,

    #[error("unknown lookback period '{0}' (expected one of 1mo, 3mo, 6mo, 1y, 2y)")]
    InvalidPeriod(String),

    #[error("unknown data source '{0}' (expected one of yahoo, csv, synthetic)")]
    InvalidSource(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("data error: {0}")]
    Other(String),
}

/// Historical window requested for one analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LookbackPeriod {
    #[serde(rename = "1mo")]
    OneMonth,
    #[serde(rename = "3mo")]
    ThreeMonths,
    #[serde(rename = "6mo")]
    #[default]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "2y")]
    TwoYears,
}

impl LookbackPeriod {
    pub const ALL: [LookbackPeriod; 5] = [
        LookbackPeriod::OneMonth,
        LookbackPeriod::ThreeMonths,
        LookbackPeriod::SixMonths,
        LookbackPeriod::OneYear,
        LookbackPeriod::TwoYears,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LookbackPeriod::OneMonth => "1mo",
            LookbackPeriod::ThreeMonths => "3mo",
            LookbackPeriod::SixMonths => "6mo",
            LookbackPeriod::OneYear => "1y",
            LookbackPeriod::TwoYears => "2y",
        }
    }

    /// Number of daily bars a provider keeps for this bucket.
    pub fn trading_days(&self) -> usize {
        match self {
            LookbackPeriod::OneMonth => 21,
            LookbackPeriod::ThreeMonths => 63,
            LookbackPeriod::SixMonths => 126,
            LookbackPeriod::OneYear => 252,
            LookbackPeriod::TwoYears => 504,
        }
    }

    /// Calendar span a provider requests for this bucket.
    pub fn calendar_days(&self) -> i64 {
        match self {
            LookbackPeriod::OneMonth => 30,
            LookbackPeriod::ThreeMonths => 91,
            LookbackPeriod::SixMonths => 182,
            LookbackPeriod::OneYear => 365,
            LookbackPeriod::TwoYears => 730,
        }
    }
}

impl fmt::Display for LookbackPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LookbackPeriod {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        LookbackPeriod::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| DataError::InvalidPeriod(s.to_string()))
    }
}

/// Where a series comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    #[default]
    Yahoo,
    Csv,
    Synthetic,
}

impl DataSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSource::Yahoo => "yahoo",
            DataSource::Csv => "csv",
            DataSource::Synthetic => "synthetic",
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataSource {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yahoo" => Ok(DataSource::Yahoo),
            "csv" => Ok(DataSource::Csv),
            "synthetic" => Ok(DataSource::Synthetic),
            _ => Err(DataError::InvalidSource(s.to_string())),
        }
    }
}

/// Trait for market data providers.
///
/// Implementations return a canonical series (ascending, de-duplicated, sane
/// bars only) holding at most `period.trading_days()` bars.
pub trait MarketDataProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch the daily history of `symbol` over `period`.
    fn fetch(&self, symbol: &str, period: LookbackPeriod) -> Result<PriceSeries, DataError>;

    /// Check if the provider is currently available (not rate-limited, not blocked).
    fn is_available(&self) -> bool {
        true
    }
}

/// Canonicalize provider output and keep the bars the bucket asks for.
pub(crate) fn finish_series(symbol: &str, bars: Vec<PriceBar>, period: LookbackPeriod) -> PriceSeries {
    PriceSeries::canonicalize(symbol, bars).truncate_to_last(period.trading_days())
}
