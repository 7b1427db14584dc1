//! Exponential Moving Average (EMA).
//!
//! Recursive: EMA[t] = alpha * x[t] + (1 - alpha) * EMA[t-1], alpha = 2 / (span + 1)
//! Seed: EMA[0] = x[0], so the series is defined from the first bar onward.
//! Lookback: 0.

use super::indicator::Indicator;
use crate::domain::PriceBar;

#[derive(Debug, Clone)]
pub struct Ema {
    span: usize,
    name: String,
}

impl Ema {
    pub fn new(span: usize) -> Self {
        assert!(span >= 1, "EMA span must be >= 1");
        Self {
            span,
            name: format!("ema_{span}"),
        }
    }
}

impl Indicator for Ema {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        0
    }

    fn compute(&self, bars: &[PriceBar]) -> Vec<f64> {
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        ema_of_series(&closes, self.span)
    }
}

/// EMA of an arbitrary series. Used by MACD to smooth its own line.
pub fn ema_of_series(values: &[f64], span: usize) -> Vec<f64> {
    let mut result = Vec::with_capacity(values.len());
    if span == 0 {
        result.resize(values.len(), f64::NAN);
        return result;
    }

    let alpha = 2.0 / (span as f64 + 1.0);
    let mut prev: Option<f64> = None;

    for &v in values {
        let ema = match prev {
            None => v,
            Some(p) => alpha * v + (1.0 - alpha) * p,
        };
        result.push(ema);
        prev = Some(ema);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_bars, DEFAULT_EPSILON};

    #[test]
    fn ema_span_1_equals_close() {
        let bars = make_bars(&[100.0, 200.0, 300.0]);
        let result = Ema::new(1).compute(&bars);
        assert_approx(result[0], 100.0, DEFAULT_EPSILON);
        assert_approx(result[1], 200.0, DEFAULT_EPSILON);
        assert_approx(result[2], 300.0, DEFAULT_EPSILON);
    }

    #[test]
    fn ema_3_known_values() {
        // alpha = 2/(3+1) = 0.5, seed = 10
        // EMA[1] = 0.5*11 + 0.5*10   = 10.5
        // EMA[2] = 0.5*12 + 0.5*10.5 = 11.25
        // EMA[3] = 0.5*13 + 0.5*11.25 = 12.125
        let bars = make_bars(&[10.0, 11.0, 12.0, 13.0]);
        let result = Ema::new(3).compute(&bars);

        assert_approx(result[0], 10.0, DEFAULT_EPSILON);
        assert_approx(result[1], 10.5, DEFAULT_EPSILON);
        assert_approx(result[2], 11.25, DEFAULT_EPSILON);
        assert_approx(result[3], 12.125, DEFAULT_EPSILON);
    }

    #[test]
    fn ema_defined_from_one_bar() {
        let bars = make_bars(&[42.0]);
        assert_eq!(Ema::new(26).latest(&bars), Some(42.0));
    }

    #[test]
    fn ema_empty_input() {
        assert!(ema_of_series(&[], 12).is_empty());
        assert_eq!(Ema::new(12).latest(&[]), None);
    }

    #[test]
    fn ema_lags_a_rising_series() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
        let fast = ema_of_series(&closes, 12);
        let slow = ema_of_series(&closes, 26);
        let last = closes.len() - 1;
        assert!(fast[last] < closes[last]);
        assert!(slow[last] < fast[last]);
    }

    #[test]
    fn ema_of_series_matches_indicator() {
        let bars = make_bars(&[10.0, 11.0, 12.0, 13.0, 14.0, 15.0]);
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let from_indicator = Ema::new(3).compute(&bars);
        let from_series = ema_of_series(&closes, 3);
        for i in 0..6 {
            assert_approx(from_indicator[i], from_series[i], DEFAULT_EPSILON);
        }
    }

    #[test]
    fn ema_no_lookahead() {
        let closes = [5.0, 7.0, 6.0, 9.0, 8.0, 12.0];
        let full = ema_of_series(&closes, 4);
        let truncated = ema_of_series(&closes[..4], 4);
        for i in 0..4 {
            assert_approx(full[i], truncated[i], DEFAULT_EPSILON);
        }
    }
}
