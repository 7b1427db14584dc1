//! TechnicalAnalyzer: entry point tying series, indicators and synthesis together.

use super::analysis::{AnalysisReport, SeriesSummary};
use super::error::AnalysisError;
use crate::config::ConfigError;
use crate::data::{LookbackPeriod, MarketDataProvider};
use crate::domain::PriceSeries;
use crate::indicators::{IndicatorParams, IndicatorSet};
use crate::signals::{synthesize, SignalInputs};
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct TechnicalAnalyzer {
    params: IndicatorParams,
}

impl TechnicalAnalyzer {
    /// Rejects params that `IndicatorParams::validate` refuses.
    pub fn new(params: IndicatorParams) -> Result<Self, ConfigError> {
        params.validate().map_err(ConfigError::Invalid)?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &IndicatorParams {
        &self.params
    }

    /// Analyze a series already in hand.
    pub fn analyze(&self, series: &PriceSeries) -> Result<AnalysisReport, AnalysisError> {
        self.run(series, None)
    }

    /// Fetch `symbol` through `provider` and analyze it.
    pub fn analyze_symbol(
        &self,
        provider: &dyn MarketDataProvider,
        symbol: &str,
        period: LookbackPeriod,
    ) -> Result<AnalysisReport, AnalysisError> {
        let symbol = symbol.trim().to_ascii_uppercase();
        debug!(%symbol, %period, provider = provider.name(), "fetching series");

        let series = provider
            .fetch(&symbol, period)
            .map_err(|source| AnalysisError::FetchFailed {
                symbol: symbol.clone(),
                source,
            })?;

        self.run(&series, Some(period))
    }

    fn run(
        &self,
        series: &PriceSeries,
        period: Option<LookbackPeriod>,
    ) -> Result<AnalysisReport, AnalysisError> {
        let summary = SeriesSummary::of(series).ok_or_else(|| AnalysisError::NoData {
            symbol: series.symbol().to_string(),
        })?;

        let indicators = IndicatorSet::compute(series, &self.params);
        let signal = synthesize(&SignalInputs::from_indicators(&indicators));

        info!(
            symbol = series.symbol(),
            bars = summary.data_points,
            direction = %signal.direction,
            strength = signal.strength,
            "analysis complete"
        );

        Ok(AnalysisReport::new(
            series.symbol().to_string(),
            period,
            summary,
            self.params.clone(),
            indicators,
            signal,
        ))
    }
}
