//! Additive point tally over the indicator readings.
//!
//! Points:
//! - MA trend: Bullish +2 bull, Bearish +2 bear
//! - RSI zone: Oversold +1 bull, Overbought +1 bear
//! - MACD trend: +1 to the side it points at
//! - MACD crossover: +1 to the side it points at
//! - Volume ratio > 1.2: +1 to bull if bull leads, else +1 to bear
//!
//! score = (bull - bear) / (bull + bear); > 0.3 Bullish, < -0.3 Bearish.

use super::composite::{CompositeSignal, Direction};
use crate::indicators::{Crossover, IndicatorSet, RsiZone, Trend};
use serde::{Deserialize, Serialize};

const MA_TREND_POINTS: u32 = 2;
const VOLUME_CONFIRMATION_RATIO: f64 = 1.2;
const DIRECTION_THRESHOLD: f64 = 0.3;

/// The categorical facts synthesis reads. Absent readings carry no points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalInputs {
    pub ma_trend: Trend,
    pub rsi_zone: Option<RsiZone>,
    pub macd_trend: Option<Trend>,
    pub macd_crossover: Crossover,
    pub volume_ratio: Option<f64>,
}

impl SignalInputs {
    pub fn from_indicators(set: &IndicatorSet) -> Self {
        Self {
            ma_trend: set.moving_averages.trend,
            rsi_zone: set.rsi.zone,
            macd_trend: set.macd.trend,
            macd_crossover: set.macd.crossover,
            volume_ratio: set.volume.ratio,
        }
    }
}

pub fn synthesize(inputs: &SignalInputs) -> CompositeSignal {
    let mut bull = 0u32;
    let mut bear = 0u32;

    match inputs.ma_trend {
        Trend::Bullish => bull += MA_TREND_POINTS,
        Trend::Bearish => bear += MA_TREND_POINTS,
        Trend::Neutral => {}
    }

    match inputs.rsi_zone {
        Some(RsiZone::Oversold) => bull += 1,
        Some(RsiZone::Overbought) => bear += 1,
        Some(RsiZone::Neutral) | None => {}
    }

    match inputs.macd_trend {
        Some(Trend::Bullish) => bull += 1,
        Some(_) => bear += 1,
        None => {}
    }

    match inputs.macd_crossover {
        Crossover::Bullish => bull += 1,
        Crossover::Bearish => bear += 1,
        Crossover::None => {}
    }

    // Volume confirms whichever side already leads; a tie counts as bearish.
    if inputs
        .volume_ratio
        .is_some_and(|ratio| ratio > VOLUME_CONFIRMATION_RATIO)
    {
        if bull > bear {
            bull += 1;
        } else {
            bear += 1;
        }
    }

    let total = bull + bear;
    if total == 0 {
        return CompositeSignal::neutral();
    }

    let score = (f64::from(bull) - f64::from(bear)) / f64::from(total);
    let direction = if score > DIRECTION_THRESHOLD {
        Direction::Bullish
    } else if score < -DIRECTION_THRESHOLD {
        Direction::Bearish
    } else {
        Direction::Neutral
    };

    CompositeSignal {
        direction,
        strength: (score.abs() * 100.0 * 10.0).round() / 10.0,
        bullish_points: bull,
        bearish_points: bear,
    }
}
