//! Bollinger Bands: moving average +/- standard deviation multiplier.
//!
//! Three bands (separate Indicator instances):
//! - Middle: SMA(close, period)
//! - Upper: middle + mult * stddev(close, period)
//! - Lower: middle - mult * stddev(close, period)
//!
//! Uses population stddev (divide by N).
//! Lookback: period - 1.

use super::indicator::Indicator;
use crate::domain::{PriceBar, PriceSeries};
use serde::{Deserialize, Serialize};
use std::fmt;

const NEAR_UPPER: f64 = 0.8;
const NEAR_LOWER: f64 = 0.2;

/// Which band of the Bollinger Bands to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BollingerBand {
    Upper,
    Middle,
    Lower,
}

#[derive(Debug, Clone)]
pub struct Bollinger {
    period: usize,
    multiplier: f64,
    band: BollingerBand,
    name: String,
}

impl Bollinger {
    pub fn new(band: BollingerBand, period: usize, multiplier: f64) -> Self {
        assert!(period >= 1, "Bollinger period must be >= 1");
        let label = match band {
            BollingerBand::Upper => "upper",
            BollingerBand::Middle => "middle",
            BollingerBand::Lower => "lower",
        };
        Self {
            period,
            multiplier,
            band,
            name: format!("bollinger_{label}_{period}_{multiplier}"),
        }
    }

    pub fn upper(period: usize, multiplier: f64) -> Self {
        Self::new(BollingerBand::Upper, period, multiplier)
    }

    pub fn middle(period: usize, multiplier: f64) -> Self {
        Self::new(BollingerBand::Middle, period, multiplier)
    }

    pub fn lower(period: usize, multiplier: f64) -> Self {
        Self::new(BollingerBand::Lower, period, multiplier)
    }
}

impl Indicator for Bollinger {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period.saturating_sub(1)
    }

    fn compute(&self, bars: &[PriceBar]) -> Vec<f64> {
        let n = bars.len();
        let mut result = vec![f64::NAN; n];

        if n < self.period {
            return result;
        }

        for i in (self.period - 1)..n {
            let window = &bars[i + 1 - self.period..=i];
            let mean = window.iter().map(|b| b.close).sum::<f64>() / self.period as f64;

            result[i] = match self.band {
                BollingerBand::Middle => mean,
                BollingerBand::Upper => mean + self.multiplier * population_stddev(window, mean),
                BollingerBand::Lower => mean - self.multiplier * population_stddev(window, mean),
            };
        }

        result
    }
}

fn population_stddev(window: &[PriceBar], mean: f64) -> f64 {
    let variance = window
        .iter()
        .map(|bar| {
            let diff = bar.close - mean;
            diff * diff
        })
        .sum::<f64>()
        / window.len() as f64;
    variance.sqrt()
}

/// Where the latest close sits inside the bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BandPosition {
    NearUpper,
    NearLower,
    Middle,
}

impl fmt::Display for BandPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BandPosition::NearUpper => "Near Upper",
            BandPosition::NearLower => "Near Lower",
            BandPosition::Middle => "Middle",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BollingerReading {
    pub upper: Option<f64>,
    pub middle: Option<f64>,
    pub lower: Option<f64>,
    pub bandwidth: Option<f64>,
    pub percent_b: Option<f64>,
    pub position: Option<BandPosition>,
}

pub fn bollinger_bands(series: &PriceSeries, period: usize, multiplier: f64) -> BollingerReading {
    let bars = series.bars();
    let upper = Bollinger::upper(period, multiplier).latest(bars);
    let middle = Bollinger::middle(period, multiplier).latest(bars);
    let lower = Bollinger::lower(period, multiplier).latest(bars);

    let (Some(up), Some(mid), Some(low), Some(last)) = (upper, middle, lower, series.latest())
    else {
        return BollingerReading {
            upper,
            middle,
            lower,
            bandwidth: None,
            percent_b: None,
            position: None,
        };
    };

    let width = up - low;
    let percent_b = (width > 0.0).then(|| (last.close - low) / width);
    let bandwidth = (mid != 0.0).then(|| width / mid);

    let position = match percent_b {
        Some(b) if b > NEAR_UPPER => BandPosition::NearUpper,
        Some(b) if b < NEAR_LOWER => BandPosition::NearLower,
        _ => BandPosition::Middle,
    };

    BollingerReading {
        upper,
        middle,
        lower,
        bandwidth,
        percent_b,
        position: Some(position),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_bars, make_series, DEFAULT_EPSILON};

    #[test]
    fn bollinger_middle_is_sma() {
        let bars = make_bars(&[10.0, 11.0, 12.0, 13.0, 14.0]);
        let result = Bollinger::middle(3, 2.0).compute(&bars);

        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
        assert_approx(result[2], 11.0, DEFAULT_EPSILON);
        assert_approx(result[3], 12.0, DEFAULT_EPSILON);
    }

    #[test]
    fn bollinger_uses_population_stddev() {
        // window [10, 11, 12]: population variance = 2/3
        let bars = make_bars(&[10.0, 11.0, 12.0]);
        let upper = Bollinger::upper(3, 2.0).compute(&bars);
        assert_approx(upper[2], 11.0 + 2.0 * (2.0_f64 / 3.0).sqrt(), DEFAULT_EPSILON);
    }

    #[test]
    fn bollinger_bands_symmetric() {
        let bars = make_bars(&[10.0, 11.0, 12.0, 13.0, 14.0]);
        let upper = Bollinger::upper(3, 2.0).compute(&bars);
        let middle = Bollinger::middle(3, 2.0).compute(&bars);
        let lower = Bollinger::lower(3, 2.0).compute(&bars);

        for i in 2..5 {
            let half_width = upper[i] - middle[i];
            assert_approx(middle[i] - lower[i], half_width, DEFAULT_EPSILON);
        }
    }

    #[test]
    fn short_series_is_absent() {
        let reading = bollinger_bands(&make_series(&[100.0; 19]), 20, 2.0);
        assert_eq!(reading.upper, None);
        assert_eq!(reading.middle, None);
        assert_eq!(reading.lower, None);
        assert_eq!(reading.bandwidth, None);
        assert_eq!(reading.percent_b, None);
        assert_eq!(reading.position, None);
    }

    #[test]
    fn flat_series_has_zero_bandwidth() {
        let reading = bollinger_bands(&make_series(&[100.0; 30]), 20, 2.0);
        assert_eq!(reading.bandwidth, Some(0.0));
        assert_eq!(reading.percent_b, None);
        assert_eq!(reading.upper, Some(100.0));
        assert_eq!(reading.lower, Some(100.0));
        assert_eq!(reading.position, Some(BandPosition::Middle));
    }

    #[test]
    fn breakout_is_near_upper() {
        let mut closes = vec![100.0; 19];
        closes.push(110.0);
        let reading = bollinger_bands(&make_series(&closes), 20, 2.0);
        assert!(reading.percent_b.unwrap() > 0.8);
        assert_eq!(reading.position, Some(BandPosition::NearUpper));
        assert!(reading.upper.unwrap() >= reading.middle.unwrap());
        assert!(reading.middle.unwrap() >= reading.lower.unwrap());
    }

    #[test]
    fn breakdown_is_near_lower() {
        let mut closes = vec![100.0; 19];
        closes.push(90.0);
        let reading = bollinger_bands(&make_series(&closes), 20, 2.0);
        assert!(reading.percent_b.unwrap() < 0.2);
        assert_eq!(reading.position, Some(BandPosition::NearLower));
    }

    #[test]
    fn bollinger_lookback() {
        assert_eq!(Bollinger::upper(20, 2.0).lookback(), 19);
    }
}
