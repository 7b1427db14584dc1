//! PriceSeries: the ordered daily history one analysis runs over.
//!
//! Bars are strictly ascending by date with no duplicates. Two constructors:
//! `new` rejects anything out of order or malformed, `canonicalize` repairs
//! provider output (drop insane bars, sort, dedupe) and logs what it dropped.

use super::bar::PriceBar;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error, PartialEq)]
pub enum SeriesError {
    #[error("bar {index} ({date}) is not after the previous bar ({previous})")]
    OutOfOrder {
        index: usize,
        date: NaiveDate,
        previous: NaiveDate,
    },

    #[error("duplicate bar for {date}")]
    DuplicateDate { date: NaiveDate },

    #[error("bar for {date} failed OHLC sanity checks")]
    InsaneBar { date: NaiveDate },
}

/// Deserialized input goes through `PriceSeries::new`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSeries")]
pub struct PriceSeries {
    symbol: String,
    bars: Vec<PriceBar>,
}

#[derive(Deserialize)]
struct RawSeries {
    symbol: String,
    bars: Vec<PriceBar>,
}

impl TryFrom<RawSeries> for PriceSeries {
    type Error = SeriesError;

    fn try_from(raw: RawSeries) -> Result<Self, Self::Error> {
        PriceSeries::new(raw.symbol, raw.bars)
    }
}

impl PriceSeries {
    /// Build a validated series. The symbol is upper-cased.
    pub fn new(symbol: impl Into<String>, bars: Vec<PriceBar>) -> Result<Self, SeriesError> {
        for (i, bar) in bars.iter().enumerate() {
            if !bar.is_sane() {
                return Err(SeriesError::InsaneBar { date: bar.date });
            }
            if i > 0 {
                let previous = bars[i - 1].date;
                if bar.date == previous {
                    return Err(SeriesError::DuplicateDate { date: bar.date });
                }
                if bar.date < previous {
                    return Err(SeriesError::OutOfOrder {
                        index: i,
                        date: bar.date,
                        previous,
                    });
                }
            }
        }

        Ok(Self {
            symbol: symbol.into().to_uppercase(),
            bars,
        })
    }

    /// Drop insane bars, sort by date, keep the first remaining bar of each date.
    pub fn canonicalize(symbol: impl Into<String>, mut bars: Vec<PriceBar>) -> Self {
        let symbol = symbol.into().to_uppercase();
        let received = bars.len();

        bars.retain(PriceBar::is_sane);
        let insane = received - bars.len();

        // stable sort keeps provider order within a date, so dedup keeps the first sane bar
        bars.sort_by_key(|b| b.date);
        bars.dedup_by_key(|b| b.date);
        let duplicates = received - insane - bars.len();

        if duplicates > 0 || insane > 0 {
            warn!(
                symbol = %symbol,
                duplicates,
                insane,
                kept = bars.len(),
                "dropped bars while canonicalizing series"
            );
        }

        Self { symbol, bars }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn first(&self) -> Option<&PriceBar> {
        self.bars.first()
    }

    pub fn latest(&self) -> Option<&PriceBar> {
        self.bars.last()
    }

    /// The most recent `n` bars (all of them if the series is shorter).
    pub fn tail(&self, n: usize) -> &[PriceBar] {
        let start = self.bars.len().saturating_sub(n);
        &self.bars[start..]
    }

    /// Keep only the most recent `n` bars.
    pub fn truncate_to_last(mut self, n: usize) -> Self {
        let start = self.bars.len().saturating_sub(n);
        self.bars.drain(..start);
        self
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn highs(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.high).collect()
    }

    pub fn lows(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.low).collect()
    }

    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume as f64).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(day: u32, close: f64) -> PriceBar {
        PriceBar {
            date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            open: close,
            high: close + 1.0,
            low: close - 1.0,
            close,
            volume: 1_000,
        }
    }

    #[test]
    fn new_accepts_ascending_bars() {
        let series = PriceSeries::new("spy", vec![bar(1, 10.0), bar(2, 11.0)]).unwrap();
        assert_eq!(series.symbol(), "SPY");
        assert_eq!(series.len(), 2);
        assert_eq!(series.latest().unwrap().close, 11.0);
        assert_eq!(series.first().unwrap().close, 10.0);
    }

    #[test]
    fn new_accepts_empty() {
        let series = PriceSeries::new("SPY", vec![]).unwrap();
        assert!(series.is_empty());
        assert!(series.latest().is_none());
    }

    #[test]
    fn new_rejects_out_of_order() {
        let err = PriceSeries::new("SPY", vec![bar(2, 10.0), bar(1, 11.0)]).unwrap_err();
        assert!(matches!(err, SeriesError::OutOfOrder { index: 1, .. }));
    }

    #[test]
    fn new_rejects_duplicates() {
        let err = PriceSeries::new("SPY", vec![bar(1, 10.0), bar(1, 11.0)]).unwrap_err();
        assert!(matches!(err, SeriesError::DuplicateDate { .. }));
    }

    #[test]
    fn new_rejects_insane_bar() {
        let mut b = bar(1, 10.0);
        b.high = 5.0;
        let err = PriceSeries::new("SPY", vec![b]).unwrap_err();
        assert!(matches!(err, SeriesError::InsaneBar { .. }));
    }

    #[test]
    fn canonicalize_sorts_dedupes_and_drops() {
        let mut broken = bar(4, 13.0);
        broken.close = f64::NAN;
        let bars = vec![bar(3, 12.0), bar(1, 10.0), bar(3, 99.0), broken, bar(2, 11.0)];
        let series = PriceSeries::canonicalize("qqq", bars);

        assert_eq!(series.symbol(), "QQQ");
        assert_eq!(series.closes(), vec![10.0, 11.0, 12.0]);
    }

    #[test]
    fn canonicalize_keeps_sane_bar_behind_insane_duplicate() {
        let mut broken = bar(2, 50.0);
        broken.high = 1.0;
        let bars = vec![bar(1, 10.0), broken, bar(2, 11.0)];
        let series = PriceSeries::canonicalize("spy", bars);
        assert_eq!(series.closes(), vec![10.0, 11.0]);
    }

    #[test]
    fn deserialize_validates_like_new() {
        let good = PriceSeries::new("spy", vec![bar(1, 10.0), bar(2, 11.0)]).unwrap();
        let json = serde_json::to_string(&good).unwrap();
        let back: PriceSeries = serde_json::from_str(&json.replace("SPY", "spy")).unwrap();
        assert_eq!(back, good);

        let encode = |bars: Vec<PriceBar>| {
            serde_json::json!({ "symbol": "spy", "bars": bars }).to_string()
        };
        let mut insane = bar(2, 11.0);
        insane.high = 1.0;

        for bars in [
            vec![bar(2, 11.0), bar(1, 10.0)],
            vec![bar(1, 10.0), bar(1, 10.5)],
            vec![bar(1, 10.0), insane],
        ] {
            let err = serde_json::from_str::<PriceSeries>(&encode(bars)).unwrap_err();
            assert!(err.is_data(), "{err}");
        }
    }

    #[test]
    fn tail_and_truncate() {
        let bars = (1..=10).map(|d| bar(d, d as f64 + 10.0)).collect();
        let series = PriceSeries::new("SPY", bars).unwrap();
        assert_eq!(series.tail(3).len(), 3);
        assert_eq!(series.tail(30).len(), 10);
        assert_eq!(series.tail(3)[0].close, 18.0);

        let short = series.truncate_to_last(4);
        assert_eq!(short.closes(), vec![17.0, 18.0, 19.0, 20.0]);
    }

    #[test]
    fn column_accessors() {
        let series = PriceSeries::new("SPY", vec![bar(1, 10.0), bar(2, 11.0)]).unwrap();
        assert_eq!(series.highs(), vec![11.0, 12.0]);
        assert_eq!(series.lows(), vec![9.0, 10.0]);
        assert_eq!(series.volumes(), vec![1_000.0, 1_000.0]);
    }
}
