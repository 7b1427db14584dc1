//! Deterministic synthetic provider for offline demos and tests.
//!
//! Each symbol gets its own random walk seeded from a BLAKE3 hash of the
//! symbol, so the same symbol always yields the same bars.

use super::provider::{finish_series, DataError, LookbackPeriod, MarketDataProvider};
use crate::domain::{PriceBar, PriceSeries};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const START_PRICE: f64 = 100.0;

pub struct SyntheticProvider {
    end: NaiveDate,
}

impl SyntheticProvider {
    /// Walks end on `end` (or the last weekday before it).
    pub fn new(end: NaiveDate) -> Self {
        Self { end }
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Generate `count` weekday bars ending at the provider's end date.
    pub fn generate(&self, symbol: &str, count: usize) -> Vec<PriceBar> {
        let dates = weekdays_ending_at(self.end, count);

        let seed = *blake3::hash(symbol.to_ascii_uppercase().as_bytes()).as_bytes();
        let mut rng = StdRng::from_seed(seed);

        let mut price = START_PRICE;
        dates
            .into_iter()
            .map(|date| {
                let daily_return: f64 = rng.gen_range(-0.03..0.03);
                let open = price;
                let close = price * (1.0 + daily_return);
                let high = open.max(close) * (1.0 + rng.gen_range(0.0..0.01));
                let low = open.min(close) * (1.0 - rng.gen_range(0.0..0.01));
                let volume = rng.gen_range(500_000..5_000_000u64);
                price = close;
                PriceBar {
                    date,
                    open,
                    high,
                    low,
                    close,
                    volume,
                }
            })
            .collect()
    }
}

/// The `count` most recent weekdays on or before `end`, ascending.
fn weekdays_ending_at(end: NaiveDate, count: usize) -> Vec<NaiveDate> {
    let mut dates = Vec::with_capacity(count);
    let mut current = end;
    while dates.len() < count {
        if !matches!(current.weekday(), Weekday::Sat | Weekday::Sun) {
            dates.push(current);
        }
        current -= Duration::days(1);
    }
    dates.reverse();
    dates
}

impl MarketDataProvider for SyntheticProvider {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn fetch(&self, symbol: &str, period: LookbackPeriod) -> Result<PriceSeries, DataError> {
        let bars = self.generate(symbol, period.trading_days());
        Ok(finish_series(symbol, bars, period))
    }
}
