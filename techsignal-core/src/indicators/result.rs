//! Tagged per-family indicator results.
//!
//! Each variant wraps the typed record of one family. `metrics()` flattens a
//! record into named sub-metrics where `None` marks a value that could not be
//! computed for the series at hand.

use super::bollinger::BollingerReading;
use super::levels::PriceLevels;
use super::macd::MacdReading;
use super::moving_averages::MovingAverages;
use super::rsi::RsiReading;
use super::volume::VolumeReading;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum IndicatorResult {
    MovingAverages(MovingAverages),
    Rsi(RsiReading),
    Macd(MacdReading),
    Bollinger(BollingerReading),
    Volume(VolumeReading),
    Levels(PriceLevels),
}

impl IndicatorResult {
    pub fn family(&self) -> &'static str {
        match self {
            IndicatorResult::MovingAverages(_) => "moving_averages",
            IndicatorResult::Rsi(_) => "rsi",
            IndicatorResult::Macd(_) => "macd",
            IndicatorResult::Bollinger(_) => "bollinger",
            IndicatorResult::Volume(_) => "volume",
            IndicatorResult::Levels(_) => "levels",
        }
    }

    pub fn metrics(&self) -> Vec<(&'static str, Option<f64>)> {
        match self {
            IndicatorResult::MovingAverages(ma) => vec![
                ("sma_20", ma.sma_20),
                ("sma_50", ma.sma_50),
                ("sma_200", ma.sma_200),
                ("ema_12", ma.ema_12),
                ("ema_26", ma.ema_26),
            ],
            IndicatorResult::Rsi(rsi) => vec![("rsi_value", rsi.value)],
            IndicatorResult::Macd(macd) => vec![
                ("macd", macd.macd),
                ("signal", macd.signal),
                ("histogram", macd.histogram),
            ],
            IndicatorResult::Bollinger(bb) => vec![
                ("upper", bb.upper),
                ("middle", bb.middle),
                ("lower", bb.lower),
                ("bandwidth", bb.bandwidth),
                ("percent_b", bb.percent_b),
            ],
            IndicatorResult::Volume(vol) => vec![
                ("current", vol.current),
                ("avg_volume", vol.average),
                ("ratio", vol.ratio),
            ],
            IndicatorResult::Levels(lv) => vec![
                ("pivot", lv.pivot),
                ("resistance_1", lv.resistance_1),
                ("resistance_2", lv.resistance_2),
                ("support_1", lv.support_1),
                ("support_2", lv.support_2),
                ("high_30d", lv.recent_high),
                ("low_30d", lv.recent_low),
            ],
        }
    }

    /// Look up one named sub-metric. Outer `None`: no such metric.
    pub fn metric(&self, name: &str) -> Option<Option<f64>> {
        self.metrics()
            .into_iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }
}
