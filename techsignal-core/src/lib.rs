//! techsignal core: price series, technical indicators, signal synthesis, reports.
//!
//! This crate contains the whole analysis pipeline:
//! - Domain types (daily bars, validated price series)
//! - Indicator engine (moving averages, RSI, MACD, Bollinger, volume, pivots)
//! - Signal synthesis into one composite call
//! - Analysis reports and their text presentation
//! - Market data providers (Yahoo Finance, CSV, synthetic) and configuration

pub mod config;
pub mod data;
pub mod domain;
pub mod indicators;
pub mod present;
pub mod report;
pub mod signals;

pub use config::{AppConfig, ConfigError};
pub use data::{DataError, DataSource, LookbackPeriod, MarketDataProvider};
pub use domain::{PriceBar, PriceSeries, SeriesError};
pub use indicators::{IndicatorParams, IndicatorResult, IndicatorSet};
pub use report::{AnalysisError, AnalysisReport, TechnicalAnalyzer};
pub use signals::{CompositeSignal, Direction};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: everything shared across the CLI's worker threads
    /// is Send + Sync. If any type fails this check, the build breaks.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        // Domain types
        require_send::<domain::PriceBar>();
        require_sync::<domain::PriceBar>();
        require_send::<domain::PriceSeries>();
        require_sync::<domain::PriceSeries>();

        // Indicator records
        require_send::<indicators::IndicatorSet>();
        require_sync::<indicators::IndicatorSet>();
        require_send::<indicators::IndicatorResult>();
        require_sync::<indicators::IndicatorResult>();
        require_send::<indicators::Sma>();
        require_sync::<indicators::Sma>();
        require_send::<indicators::Ema>();
        require_sync::<indicators::Ema>();
        require_send::<indicators::Rsi>();
        require_sync::<indicators::Rsi>();
        require_send::<indicators::Bollinger>();
        require_sync::<indicators::Bollinger>();

        // Signals and reports
        require_send::<signals::CompositeSignal>();
        require_sync::<signals::CompositeSignal>();
        require_send::<report::AnalysisReport>();
        require_sync::<report::AnalysisReport>();
        require_send::<report::TechnicalAnalyzer>();
        require_sync::<report::TechnicalAnalyzer>();
        require_send::<report::AnalysisError>();
        require_sync::<report::AnalysisError>();

        // Providers
        require_send::<data::YahooProvider>();
        require_sync::<data::YahooProvider>();
        require_send::<data::CsvProvider>();
        require_sync::<data::CsvProvider>();
        require_send::<data::SyntheticProvider>();
        require_sync::<data::SyntheticProvider>();
        require_send::<data::CircuitBreaker>();
        require_sync::<data::CircuitBreaker>();
        require_send::<Box<dyn data::MarketDataProvider>>();
        require_sync::<Box<dyn data::MarketDataProvider>>();
    }

    /// Architecture contract: indicators see bars, never providers.
    ///
    /// `Indicator::compute` takes only `&[PriceBar]`. If this compiles, no
    /// indicator can reach the network or the filesystem through its inputs.
    #[test]
    fn indicator_trait_only_sees_bars() {
        fn _check_trait_object_builds(ind: &dyn indicators::Indicator, bars: &[PriceBar]) -> Vec<f64> {
            ind.compute(bars)
        }
    }
}
