//! Moving-average family: SMA 20/50/200, EMA 12/26, trend and cross labels.

use super::ema::Ema;
use super::indicator::Indicator;
use super::sma::Sma;
use crate::domain::PriceSeries;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Directional label shared by the moving-average and MACD families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Bullish,
    Bearish,
    Neutral,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Trend::Bullish => "Bullish",
            Trend::Bearish => "Bearish",
            Trend::Neutral => "Neutral",
        };
        f.write_str(label)
    }
}

/// Long-horizon SMA 50 / SMA 200 relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaCross {
    GoldenCross,
    DeathCross,
}

impl fmt::Display for MaCross {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MaCross::GoldenCross => "Golden Cross",
            MaCross::DeathCross => "Death Cross",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingAverages {
    pub sma_20: Option<f64>,
    pub sma_50: Option<f64>,
    pub sma_200: Option<f64>,
    pub ema_12: Option<f64>,
    pub ema_26: Option<f64>,
    pub trend: Trend,
    pub cross: Option<MaCross>,
}

impl MovingAverages {
    /// (label, value) pairs for the three SMAs, in window order.
    pub fn smas(&self) -> [(&'static str, Option<f64>); 3] {
        [
            ("SMA 20", self.sma_20),
            ("SMA 50", self.sma_50),
            ("SMA 200", self.sma_200),
        ]
    }
}

pub fn moving_averages(series: &PriceSeries) -> MovingAverages {
    let bars = series.bars();
    let sma_20 = Sma::new(20).latest(bars);
    let sma_50 = Sma::new(50).latest(bars);
    let sma_200 = Sma::new(200).latest(bars);

    let trend = match series.latest() {
        Some(last) => classify_trend(last.close, sma_20, sma_50, sma_200),
        None => Trend::Neutral,
    };

    MovingAverages {
        sma_20,
        sma_50,
        sma_200,
        ema_12: Ema::new(12).latest(bars),
        ema_26: Ema::new(26).latest(bars),
        trend,
        cross: classify_cross(sma_50, sma_200),
    }
}

/// Price strictly above at least two SMAs is bullish; strictly below every
/// present SMA (with SMA 20 available) is bearish. A price sitting on an SMA
/// is neither above nor below it.
fn classify_trend(
    price: f64,
    sma_20: Option<f64>,
    sma_50: Option<f64>,
    sma_200: Option<f64>,
) -> Trend {
    let present: Vec<f64> = [sma_20, sma_50, sma_200].into_iter().flatten().collect();
    let above = present.iter().filter(|&&ma| price > ma).count();
    let below = present.iter().filter(|&&ma| price < ma).count();

    if above >= 2 {
        Trend::Bullish
    } else if sma_20.is_some() && below == present.len() {
        Trend::Bearish
    } else {
        Trend::Neutral
    }
}

fn classify_cross(sma_50: Option<f64>, sma_200: Option<f64>) -> Option<MaCross> {
    match (sma_50, sma_200) {
        (Some(fast), Some(slow)) if fast > slow => Some(MaCross::GoldenCross),
        (Some(fast), Some(slow)) if fast < slow => Some(MaCross::DeathCross),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::make_series;

    fn rising(n: usize) -> Vec<f64> {
        (0..n).map(|i| 100.0 + 0.5 * i as f64).collect()
    }

    #[test]
    fn windows_gate_presence() {
        let ma = moving_averages(&make_series(&rising(49)));
        assert!(ma.sma_20.is_some());
        assert!(ma.sma_50.is_none());
        assert!(ma.sma_200.is_none());
        assert!(ma.ema_12.is_some());
        assert!(ma.ema_26.is_some());
        assert_eq!(ma.cross, None);
    }

    #[test]
    fn rising_series_is_bullish_golden_cross() {
        let ma = moving_averages(&make_series(&rising(250)));
        assert!(ma.sma_200.is_some());
        assert_eq!(ma.trend, Trend::Bullish);
        assert_eq!(ma.cross, Some(MaCross::GoldenCross));
    }

    #[test]
    fn falling_series_is_bearish_death_cross() {
        let closes: Vec<f64> = (0..250).map(|i| 300.0 - 0.5 * i as f64).collect();
        let ma = moving_averages(&make_series(&closes));
        assert_eq!(ma.trend, Trend::Bearish);
        assert_eq!(ma.cross, Some(MaCross::DeathCross));
    }

    #[test]
    fn flat_series_is_neutral_without_cross() {
        let ma = moving_averages(&make_series(&[100.0; 250]));
        assert_eq!(ma.sma_20, Some(100.0));
        assert_eq!(ma.sma_50, Some(100.0));
        assert_eq!(ma.sma_200, Some(100.0));
        assert_eq!(ma.trend, Trend::Neutral);
        assert_eq!(ma.cross, None);
    }

    #[test]
    fn short_series_without_smas_is_neutral() {
        let ma = moving_averages(&make_series(&rising(5)));
        assert_eq!(ma.trend, Trend::Neutral);
    }

    #[test]
    fn trend_counts_only_present_smas() {
        // above sma_20 only, others absent → one of one is not enough
        assert_eq!(classify_trend(10.0, Some(9.0), None, None), Trend::Neutral);
        assert_eq!(classify_trend(10.0, Some(9.0), Some(9.5), None), Trend::Bullish);
        assert_eq!(classify_trend(8.0, Some(9.0), Some(9.5), None), Trend::Bearish);
        assert_eq!(classify_trend(8.0, None, None, None), Trend::Neutral);
        // price sitting on the SMAs is neither above nor below them
        assert_eq!(classify_trend(9.0, Some(9.0), Some(9.0), Some(9.0)), Trend::Neutral);
        assert_eq!(classify_trend(9.0, Some(9.0), Some(9.5), None), Trend::Neutral);
    }
}
