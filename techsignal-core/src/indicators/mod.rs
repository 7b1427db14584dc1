//! Indicator engine.
//!
//! Series-level primitives (SMA, EMA, RSI, Bollinger) implement the
//! `Indicator` trait. Family functions read the latest value of those series
//! and attach categorical labels; `IndicatorSet::compute` runs every family.
//!
//! Nothing in here fails on short input. A window that the series cannot
//! fill yields `None` for the affected fields.

pub mod bollinger;
pub mod ema;
pub mod engine;
pub mod indicator;
pub mod levels;
pub mod macd;
pub mod moving_averages;
pub mod result;
pub mod rsi;
pub mod sma;
pub mod volume;

pub use bollinger::{BandPosition, Bollinger, BollingerBand, BollingerReading};
pub use ema::Ema;
pub use engine::{IndicatorParams, IndicatorSet};
pub use indicator::Indicator;
pub use levels::PriceLevels;
pub use macd::{Crossover, MacdReading};
pub use moving_averages::{MaCross, MovingAverages, Trend};
pub use result::IndicatorResult;
pub use rsi::{Rsi, RsiReading, RsiZone};
pub use sma::Sma;
pub use volume::{VolumeActivity, VolumeReading};

/// Create synthetic bars from close prices for testing.
///
/// Generates plausible OHLV: open = prev_close (or close for first bar),
/// high = max(open,close) + 1.0, low = min(open,close) - 1.0, volume = 1000.
#[cfg(test)]
pub fn make_bars(closes: &[f64]) -> Vec<crate::domain::PriceBar> {
    make_bars_with_volume(closes, &vec![1_000; closes.len()])
}

#[cfg(test)]
pub fn make_bars_with_volume(closes: &[f64], volumes: &[u64]) -> Vec<crate::domain::PriceBar> {
    use crate::domain::PriceBar;
    assert_eq!(closes.len(), volumes.len());
    let base_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    closes
        .iter()
        .zip(volumes)
        .enumerate()
        .map(|(i, (&close, &volume))| {
            let open = if i == 0 { close } else { closes[i - 1] };
            PriceBar {
                date: base_date + chrono::Duration::days(i as i64),
                open,
                high: open.max(close) + 1.0,
                low: open.min(close) - 1.0,
                close,
                volume,
            }
        })
        .collect()
}

#[cfg(test)]
pub fn make_series(closes: &[f64]) -> crate::domain::PriceSeries {
    crate::domain::PriceSeries::new("TEST", make_bars(closes)).unwrap()
}

#[cfg(test)]
pub fn make_series_with_volume(closes: &[f64], volumes: &[u64]) -> crate::domain::PriceSeries {
    crate::domain::PriceSeries::new("TEST", make_bars_with_volume(closes, volumes)).unwrap()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
