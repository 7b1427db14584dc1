//! Application configuration loaded from TOML.
//!
//! ```toml
//! [data]
//! period = "6mo"
//! source = "yahoo"
//! timeout_secs = 30
//! max_retries = 3
//! backoff_ms = 500
//! breaker_cooldown_secs = 1800
//! csv_dir = "data"
//!
//! [indicators]
//! rsi_period = 14
//!
//! [watchlist]
//! symbols = ["SPY", "QQQ"]
//! ```
//!
//! Every section and key is optional; missing ones take their defaults.

use crate::data::{
    CircuitBreaker, CsvProvider, DataError, DataSource, LookbackPeriod, MarketDataProvider,
    SyntheticProvider, YahooProvider, YahooSettings,
};
use crate::indicators::IndicatorParams;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub period: LookbackPeriod,
    pub source: DataSource,
    pub timeout_secs: u64,
    pub max_retries: u32,
    pub backoff_ms: u64,
    pub breaker_cooldown_secs: u64,
    pub csv_dir: PathBuf,
    /// Last day of synthetic walks; today when unset.
    pub synthetic_end: Option<NaiveDate>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            period: LookbackPeriod::default(),
            source: DataSource::default(),
            timeout_secs: 30,
            max_retries: 3,
            backoff_ms: 500,
            breaker_cooldown_secs: 30 * 60,
            csv_dir: PathBuf::from("data"),
            synthetic_end: None,
        }
    }
}

impl DataConfig {
    pub fn yahoo_settings(&self) -> YahooSettings {
        YahooSettings {
            timeout: Duration::from_secs(self.timeout_secs),
            max_retries: self.max_retries,
            base_delay: Duration::from_millis(self.backoff_ms),
        }
    }

    /// Build the provider for `source`.
    pub fn provider(&self, source: DataSource) -> Result<Box<dyn MarketDataProvider>, DataError> {
        Ok(match source {
            DataSource::Yahoo => {
                let breaker = Arc::new(CircuitBreaker::new(Duration::from_secs(
                    self.breaker_cooldown_secs,
                )));
                Box::new(YahooProvider::new(self.yahoo_settings(), breaker)?)
            }
            DataSource::Csv => Box::new(CsvProvider::new(&self.csv_dir)),
            DataSource::Synthetic => Box::new(SyntheticProvider::new(
                self.synthetic_end.unwrap_or_else(|| Utc::now().date_naive()),
            )),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Watchlist {
    pub symbols: Vec<String>,
}

impl Watchlist {
    /// Upper-cased symbols with blanks and repeats removed, in file order.
    pub fn normalized(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::with_capacity(self.symbols.len());
        for symbol in &self.symbols {
            let symbol = symbol.trim().to_ascii_uppercase();
            if !symbol.is_empty() && !out.contains(&symbol) {
                out.push(symbol);
            }
        }
        out
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data: DataConfig,
    pub indicators: IndicatorParams,
    pub watchlist: Watchlist,
}

impl AppConfig {
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
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.indicators.validate().map_err(ConfigError::Invalid)
    }
}
