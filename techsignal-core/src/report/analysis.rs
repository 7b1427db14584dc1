//! AnalysisReport: the immutable result of analyzing one series.

use crate::data::LookbackPeriod;
use crate::domain::PriceSeries;
use crate::indicators::{IndicatorParams, IndicatorResult, IndicatorSet};
use crate::signals::CompositeSignal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Shape of the analyzed series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub latest_price: f64,
    pub latest_date: NaiveDate,
    pub first_date: NaiveDate,
    pub data_points: usize,
}

impl SeriesSummary {
    /// `None` for an empty series.
    pub fn of(series: &PriceSeries) -> Option<Self> {
        let first = series.first()?;
        let latest = series.latest()?;
        Some(Self {
            latest_price: latest.close,
            latest_date: latest.date,
            first_date: first.date,
            data_points: series.len(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    symbol: String,
    period: Option<LookbackPeriod>,
    summary: SeriesSummary,
    params: IndicatorParams,
    indicators: IndicatorSet,
    signal: CompositeSignal,
}

impl AnalysisReport {
    pub(crate) fn new(
        symbol: String,
        period: Option<LookbackPeriod>,
        summary: SeriesSummary,
        params: IndicatorParams,
        indicators: IndicatorSet,
        signal: CompositeSignal,
    ) -> Self {
        Self {
            symbol,
            period,
            summary,
            params,
            indicators,
            signal,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The lookback bucket the series was fetched for, when it came from a provider.
    pub fn period(&self) -> Option<LookbackPeriod> {
        self.period
    }

    pub fn summary(&self) -> &SeriesSummary {
        &self.summary
    }

    pub fn latest_price(&self) -> f64 {
        self.summary.latest_price
    }

    pub fn params(&self) -> &IndicatorParams {
        &self.params
    }

    pub fn indicator_set(&self) -> &IndicatorSet {
        &self.indicators
    }

    /// Every family record, tagged.
    pub fn indicators(&self) -> Vec<IndicatorResult> {
        self.indicators.results()
    }

    pub fn signal(&self) -> &CompositeSignal {
        &self.signal
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
