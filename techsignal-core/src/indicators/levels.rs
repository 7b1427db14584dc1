//! Support and resistance: recent range plus floor-trader pivot points.
//!
//! pivot = (H + L + C) / 3 from the latest bar
//! R1 = 2*pivot - L, S1 = 2*pivot - H
//! R2 = pivot + (H - L), S2 = pivot - (H - L)

use crate::domain::PriceSeries;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceLevels {
    pub pivot: Option<f64>,
    pub resistance_1: Option<f64>,
    pub resistance_2: Option<f64>,
    pub support_1: Option<f64>,
    pub support_2: Option<f64>,
    /// Highest high over the lookback window.
    pub recent_high: Option<f64>,
    /// Lowest low over the lookback window.
    pub recent_low: Option<f64>,
    pub window: usize,
}

pub fn support_resistance(series: &PriceSeries, window: usize) -> PriceLevels {
    let recent = series.tail(window);
    let recent_high = recent.iter().map(|b| b.high).reduce(f64::max);
    let recent_low = recent.iter().map(|b| b.low).reduce(f64::min);

    let Some(last) = series.latest() else {
        return PriceLevels {
            pivot: None,
            resistance_1: None,
            resistance_2: None,
            support_1: None,
            support_2: None,
            recent_high,
            recent_low,
            window,
        };
    };

    let pivot = (last.high + last.low + last.close) / 3.0;
    let range = last.range();

    PriceLevels {
        pivot: Some(pivot),
        resistance_1: Some(2.0 * pivot - last.low),
        resistance_2: Some(pivot + range),
        support_1: Some(2.0 * pivot - last.high),
        support_2: Some(pivot - range),
        recent_high,
        recent_low,
        window,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PriceBar;
    use crate::indicators::{assert_approx, make_series, DEFAULT_EPSILON};
    use chrono::NaiveDate;

    #[test]
    fn pivot_points_from_latest_bar() {
        let bar = PriceBar {
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            open: 100.0,
            high: 110.0,
            low: 95.0,
            close: 105.0,
            volume: 1_000,
        };
        let series = PriceSeries::new("TEST", vec![bar]).unwrap();
        let levels = support_resistance(&series, 30);

        // pivot = (110 + 95 + 105) / 3 = 103.333...
        let pivot = 310.0 / 3.0;
        assert_approx(levels.pivot.unwrap(), pivot, DEFAULT_EPSILON);
        assert_approx(levels.resistance_1.unwrap(), 2.0 * pivot - 95.0, DEFAULT_EPSILON);
        assert_approx(levels.support_1.unwrap(), 2.0 * pivot - 110.0, DEFAULT_EPSILON);
        assert_approx(levels.resistance_2.unwrap(), pivot + 15.0, DEFAULT_EPSILON);
        assert_approx(levels.support_2.unwrap(), pivot - 15.0, DEFAULT_EPSILON);
        assert_eq!(levels.recent_high, Some(110.0));
        assert_eq!(levels.recent_low, Some(95.0));
    }

    #[test]
    fn recent_range_only_covers_window() {
        // make_series bars: high = max(open, close) + 1, low = min(open, close) - 1
        // the 500 spike and the bar gapping down from it fall outside the window
        let mut closes = vec![500.0, 100.0];
        closes.extend((0..30).map(|i| 100.0 + i as f64));
        let levels = support_resistance(&make_series(&closes), 30);
        assert_eq!(levels.recent_high, Some(130.0));
        assert_eq!(levels.recent_low, Some(99.0));
    }

    #[test]
    fn levels_are_ordered() {
        let closes: Vec<f64> = (0..40).map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0).collect();
        let levels = support_resistance(&make_series(&closes), 30);
        let (s2, s1, p, r1, r2) = (
            levels.support_2.unwrap(),
            levels.support_1.unwrap(),
            levels.pivot.unwrap(),
            levels.resistance_1.unwrap(),
            levels.resistance_2.unwrap(),
        );
        assert!(s2 <= s1 && s1 <= p && p <= r1 && r1 <= r2);
    }

    #[test]
    fn empty_series_is_absent() {
        let levels = support_resistance(&make_series(&[]), 30);
        assert_eq!(levels.pivot, None);
        assert_eq!(levels.recent_high, None);
    }
}
