//! Shared helpers for integration tests.

#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use techsignal_core::{PriceBar, PriceSeries};

pub fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 2).unwrap()
}

/// Bars from closes with constant volume. open = previous close,
/// high/low = envelope of open and close widened by 1.0.
pub fn make_bars(closes: &[f64], volume: u64) -> Vec<PriceBar> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            PriceBar {
                date: base_date() + Duration::days(i as i64),
                open,
                high: open.max(close) + 1.0,
                low: (open.min(close) - 1.0).max(0.0),
                close,
                volume,
            }
        })
        .collect()
}

pub fn make_series(symbol: &str, closes: &[f64]) -> PriceSeries {
    PriceSeries::new(symbol, make_bars(closes, 1_000_000)).unwrap()
}

/// 100.00 rising by 0.50 per bar.
pub fn rising(n: usize) -> Vec<f64> {
    (0..n).map(|i| 100.0 + 0.5 * i as f64).collect()
}

pub fn flat(n: usize, price: f64) -> Vec<f64> {
    vec![price; n]
}
