//! Relative Strength Index (RSI).
//!
//! Simple-average variant: mean gain and mean loss over the last `period`
//! per-bar deltas, where the first bar contributes a zero delta.
//! RSI = 100 - 100 / (1 + avg_gain / avg_loss)
//! Lookback: period - 1 (a series of exactly `period` bars has one value).
//! avg_loss == 0 saturates to 100, including the flat case.

use super::indicator::{latest_finite, Indicator};
use crate::domain::{PriceBar, PriceSeries};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const OVERBOUGHT: f64 = 70.0;
pub const OVERSOLD: f64 = 30.0;

#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
    name: String,
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "RSI period must be >= 1");
        Self {
            period,
            name: format!("rsi_{period}"),
        }
    }
}

impl Indicator for Rsi {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period - 1
    }

    fn compute(&self, bars: &[PriceBar]) -> Vec<f64> {
        let n = bars.len();
        let mut result = vec![f64::NAN; n];

        if n < self.period {
            return result;
        }

        let mut gains = vec![0.0; n];
        let mut losses = vec![0.0; n];
        for i in 1..n {
            let change = bars[i].close - bars[i - 1].close;
            if change > 0.0 {
                gains[i] = change;
            } else if change < 0.0 {
                losses[i] = -change;
            }
        }

        for i in (self.period - 1)..n {
            let start = i + 1 - self.period;
            let avg_gain = gains[start..=i].iter().sum::<f64>() / self.period as f64;
            let avg_loss = losses[start..=i].iter().sum::<f64>() / self.period as f64;
            result[i] = compute_rsi(avg_gain, avg_loss);
        }

        result
    }
}

fn compute_rsi(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        100.0
    } else {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    }
}

/// Momentum zone of an RSI reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RsiZone {
    Overbought,
    Oversold,
    Neutral,
}

impl RsiZone {
    pub fn classify(value: f64) -> Self {
        if value > OVERBOUGHT {
            RsiZone::Overbought
        } else if value < OVERSOLD {
            RsiZone::Oversold
        } else {
            RsiZone::Neutral
        }
    }
}

impl fmt::Display for RsiZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RsiZone::Overbought => "Overbought",
            RsiZone::Oversold => "Oversold",
            RsiZone::Neutral => "Neutral",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RsiReading {
    pub value: Option<f64>,
    pub period: usize,
    pub zone: Option<RsiZone>,
}

/// Latest RSI over `period` bars; absent when the series is shorter or the
/// period is zero.
pub fn relative_strength(series: &PriceSeries, period: usize) -> RsiReading {
    if period == 0 {
        return RsiReading {
            value: None,
            period,
            zone: None,
        };
    }
    let values = Rsi::new(period).compute(series.bars());
    let value = latest_finite(&values);
    RsiReading {
        value,
        period,
        zone: value.map(RsiZone::classify),
    }
}
