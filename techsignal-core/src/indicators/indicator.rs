//! Indicator trait for series-level primitives.
//!
//! Primitives are pure functions: bar history in, numeric series out. The
//! indicator families only ever read the latest value, but computing the full
//! series keeps each primitive testable bar by bar and lets MACD chain EMAs.

use crate::domain::PriceBar;

/// A series-level indicator.
///
/// `compute` returns a `Vec<f64>` the same length as `bars`; the first
/// `lookback()` values are `f64::NAN` (warmup).
///
/// # Look-ahead guard
/// No value at bar t may depend on bars after t. Truncating the input must not
/// change any earlier output.
pub trait Indicator: Send + Sync {
    /// Metric name (e.g. "sma_20", "rsi_14").
    fn name(&self) -> &str;

    /// Number of warmup values before the first valid output.
    fn lookback(&self) -> usize;

    fn compute(&self, bars: &[PriceBar]) -> Vec<f64>;

    /// Latest value, or `None` during warmup or on empty input.
    fn latest(&self, bars: &[PriceBar]) -> Option<f64> {
        latest_finite(&self.compute(bars))
    }
}

/// Last element of a series if it exists and is finite.
pub fn latest_finite(values: &[f64]) -> Option<f64> {
    values.last().copied().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_finite_handles_warmup_and_empty() {
        assert_eq!(latest_finite(&[]), None);
        assert_eq!(latest_finite(&[1.0, f64::NAN]), None);
        assert_eq!(latest_finite(&[f64::NAN, 2.5]), Some(2.5));
        assert_eq!(latest_finite(&[f64::INFINITY]), None);
    }
}
