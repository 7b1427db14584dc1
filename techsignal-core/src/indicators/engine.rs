//! Runs every indicator family over one series.

use super::bollinger::{bollinger_bands, BollingerReading};
use super::levels::{support_resistance, PriceLevels};
use super::macd::{macd, MacdReading};
use super::moving_averages::{moving_averages, MovingAverages};
use super::result::IndicatorResult;
use super::rsi::{relative_strength, RsiReading};
use super::volume::{volume_analysis, VolumeReading};
use crate::domain::PriceSeries;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Windows and multipliers for the tunable families.
///
/// The moving-average family is fixed at SMA 20/50/200 and EMA 12/26 since
/// its trend rule names those windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorParams {
    pub rsi_period: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub bollinger_period: usize,
    pub bollinger_multiplier: f64,
    pub volume_window: usize,
    pub levels_window: usize,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            bollinger_period: 20,
            bollinger_multiplier: 2.0,
            volume_window: 20,
            levels_window: 30,
        }
    }
}

impl IndicatorParams {
    /// Every window must be at least one bar.
    pub fn validate(&self) -> Result<(), String> {
        let windows = [
            ("rsi_period", self.rsi_period),
            ("macd_fast", self.macd_fast),
            ("macd_slow", self.macd_slow),
            ("macd_signal", self.macd_signal),
            ("bollinger_period", self.bollinger_period),
            ("volume_window", self.volume_window),
            ("levels_window", self.levels_window),
        ];
        for (name, value) in windows {
            if value == 0 {
                return Err(format!("{name} must be >= 1"));
            }
        }
        if !(self.bollinger_multiplier.is_finite() && self.bollinger_multiplier > 0.0) {
            return Err("bollinger_multiplier must be a positive number".into());
        }
        Ok(())
    }
}

/// Latest reading of every family for one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub moving_averages: MovingAverages,
    pub rsi: RsiReading,
    pub macd: MacdReading,
    pub bollinger: BollingerReading,
    pub volume: VolumeReading,
    pub levels: PriceLevels,
}

impl IndicatorSet {
    pub fn compute(series: &PriceSeries, params: &IndicatorParams) -> Self {
        let moving_averages = moving_averages(series);
        debug!(symbol = series.symbol(), trend = %moving_averages.trend, "moving averages");

        let rsi = relative_strength(series, params.rsi_period);
        debug!(symbol = series.symbol(), value = ?rsi.value, "rsi");

        let macd = macd(
            series,
            params.macd_fast,
            params.macd_slow,
            params.macd_signal,
        );
        debug!(symbol = series.symbol(), crossover = %macd.crossover, "macd");

        let bollinger = bollinger_bands(
            series,
            params.bollinger_period,
            params.bollinger_multiplier,
        );
        debug!(symbol = series.symbol(), percent_b = ?bollinger.percent_b, "bollinger");

        let volume = volume_analysis(series, params.volume_window);
        debug!(symbol = series.symbol(), ratio = ?volume.ratio, "volume");

        let levels = support_resistance(series, params.levels_window);

        Self {
            moving_averages,
            rsi,
            macd,
            bollinger,
            volume,
            levels,
        }
    }

    /// The six family records as tagged results, in report order.
    pub fn results(&self) -> Vec<IndicatorResult> {
        vec![
            IndicatorResult::MovingAverages(self.moving_averages.clone()),
            IndicatorResult::Rsi(self.rsi.clone()),
            IndicatorResult::Macd(self.macd.clone()),
            IndicatorResult::Bollinger(self.bollinger.clone()),
            IndicatorResult::Volume(self.volume.clone()),
            IndicatorResult::Levels(self.levels.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::make_series;

    #[test]
    fn default_params_are_valid() {
        assert!(IndicatorParams::default().validate().is_ok());
    }

    #[test]
    fn zero_window_is_rejected() {
        let params = IndicatorParams {
            rsi_period: 0,
            ..IndicatorParams::default()
        };
        let err = params.validate().unwrap_err();
        assert!(err.contains("rsi_period"));
    }

    #[test]
    fn bad_multiplier_is_rejected() {
        let params = IndicatorParams {
            bollinger_multiplier: f64::NAN,
            ..IndicatorParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn results_cover_every_family() {
        let set = IndicatorSet::compute(&make_series(&[100.0; 30]), &IndicatorParams::default());
        let families: Vec<&str> = set.results().iter().map(|r| r.family()).collect();
        assert_eq!(
            families,
            ["moving_averages", "rsi", "macd", "bollinger", "volume", "levels"]
        );
    }
}
