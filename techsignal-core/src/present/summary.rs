//! Multi-line plain-text summary of one report.

use super::format::{format_currency, format_number, format_ratio, NOT_AVAILABLE};
use crate::report::AnalysisReport;
use std::fmt::Display;

fn label<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string())
}

pub fn summary_text(report: &AnalysisReport) -> String {
    let set = report.indicator_set();
    let signal = report.signal();
    let ma = &set.moving_averages;
    let levels = &set.levels;

    let mut lines = vec![
        format!(
            "Technical Analysis for {} ({})",
            report.symbol(),
            format_currency(Some(report.latest_price()))
        ),
        format!(
            "Overall Signal: {} (Strength: {:.1}%, Bullish: {}, Bearish: {})",
            signal.direction, signal.strength, signal.bullish_points, signal.bearish_points
        ),
        format!("Moving Average Trend: {}", ma.trend),
    ];

    for (name, value) in ma.smas() {
        if value.is_some() {
            lines.push(format!("  {name}: {}", format_currency(value)));
        }
    }
    if let Some(cross) = ma.cross {
        lines.push(format!("  {cross}"));
    }

    lines.push(format!(
        "RSI ({}): {} - {}",
        set.rsi.period,
        format_number(set.rsi.value, 2),
        label(set.rsi.zone)
    ));
    lines.push(format!(
        "MACD: {}, Crossover: {}",
        label(set.macd.trend),
        set.macd.crossover
    ));
    lines.push(format!(
        "Bollinger Position: {}",
        label(set.bollinger.position)
    ));
    lines.push(format!(
        "Volume: {} avg - {}",
        format_ratio(set.volume.ratio),
        label(set.volume.activity)
    ));
    lines.push(format!(
        "Support: {} / {}",
        format_currency(levels.support_1),
        format_currency(levels.support_2)
    ));
    lines.push(format!(
        "Resistance: {} / {}",
        format_currency(levels.resistance_1),
        format_currency(levels.resistance_2)
    ));

    lines.join("\n")
}

impl AnalysisReport {
    /// Human-readable summary; absent values render as `N/A`.
    pub fn summary_text(&self) -> String {
        summary_text(self)
    }
}
