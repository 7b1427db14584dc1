//! Moving Average Convergence/Divergence (MACD).
//!
//! macd_line = EMA(fast) - EMA(slow), signal_line = EMA(signal) of macd_line,
//! histogram = macd_line - signal_line. All EMAs are seeded by their first
//! input, so every line is defined from the first bar.

use super::ema::ema_of_series;
use super::indicator::latest_finite;
use super::moving_averages::Trend;
use crate::domain::PriceSeries;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Histogram sign change between the last two bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Crossover {
    Bullish,
    Bearish,
    None,
}

impl Crossover {
    /// Compare the last two histogram values. Fires only on a strict sign
    /// flip; touching zero is not a crossover.
    pub fn from_histogram(histogram: &[f64]) -> Self {
        match histogram {
            [.., prev, curr] if *prev < 0.0 && *curr > 0.0 => Crossover::Bullish,
            [.., prev, curr] if *prev > 0.0 && *curr < 0.0 => Crossover::Bearish,
            _ => Crossover::None,
        }
    }
}

impl fmt::Display for Crossover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Crossover::Bullish => "Bullish Crossover",
            Crossover::Bearish => "Bearish Crossover",
            Crossover::None => "None",
        };
        f.write_str(label)
    }
}

/// The three MACD lines over the full series.
#[derive(Debug, Clone, Default)]
pub struct MacdLines {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

pub fn macd_lines(closes: &[f64], fast: usize, slow: usize, signal: usize) -> MacdLines {
    let fast_ema = ema_of_series(closes, fast);
    let slow_ema = ema_of_series(closes, slow);
    let macd: Vec<f64> = fast_ema.iter().zip(&slow_ema).map(|(f, s)| f - s).collect();
    let signal_line = ema_of_series(&macd, signal);
    let histogram = macd.iter().zip(&signal_line).map(|(m, s)| m - s).collect();

    MacdLines {
        macd,
        signal: signal_line,
        histogram,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacdReading {
    pub macd: Option<f64>,
    pub signal: Option<f64>,
    pub histogram: Option<f64>,
    pub crossover: Crossover,
    /// `None` for an empty series or when a line is undefined.
    pub trend: Option<Trend>,
}

pub fn macd(series: &PriceSeries, fast: usize, slow: usize, signal: usize) -> MacdReading {
    let lines = macd_lines(&series.closes(), fast, slow, signal);
    let macd = latest_finite(&lines.macd);
    let signal = latest_finite(&lines.signal);

    let trend = match (macd, signal) {
        (Some(m), Some(s)) if m > s => Some(Trend::Bullish),
        (Some(_), Some(_)) => Some(Trend::Bearish),
        _ => None,
    };

    MacdReading {
        macd,
        signal,
        histogram: latest_finite(&lines.histogram),
        crossover: Crossover::from_histogram(&lines.histogram),
        trend,
    }
}
