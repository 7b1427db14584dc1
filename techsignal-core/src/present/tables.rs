//! Tabular text rendering of a full report.

use super::format::{
    format_currency, format_number, format_percent, format_ratio, format_signed_percent,
    format_volume, NOT_AVAILABLE,
};
use crate::report::AnalysisReport;

struct TextTable {
    title: String,
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    fn new(title: impl Into<String>, headers: &[&'static str]) -> Self {
        Self {
            title: title.into(),
            headers: headers.to_vec(),
            rows: Vec::new(),
        }
    }

    fn row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cells: Vec<String> = cells.into_iter().map(Into::into).collect();
        cells.resize(self.headers.len(), String::new());
        self.rows.push(cells);
    }

    /// First column left-aligned, the rest right-aligned.
    fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let line = |cells: &[String]| -> String {
            cells
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(i, (cell, &w))| {
                    if i == 0 {
                        format!("{cell:<w$}")
                    } else {
                        format!("{cell:>w$}")
                    }
                })
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let headers: Vec<String> = self.headers.iter().map(|h| h.to_string()).collect();
        let rule_width = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);

        let mut out = vec![self.title.clone(), line(&headers), "-".repeat(rule_width)];
        out.extend(self.rows.iter().map(|row| line(row)));
        out.join("\n")
    }
}

/// Percentage distance of `price` above (+) or below (-) `reference`.
fn vs_price(price: f64, reference: f64) -> Option<f64> {
    (reference != 0.0).then(|| (price - reference) / reference * 100.0)
}

pub fn render_tables(report: &AnalysisReport) -> String {
    let set = report.indicator_set();
    let params = report.params();
    let signal = report.signal();
    let price = report.latest_price();

    let mut header = format!(
        "Technical Analysis: {} @ {} | Signal: {} ({:.1}%)",
        report.symbol(),
        format_currency(Some(price)),
        signal.direction,
        signal.strength
    );
    if let Some(period) = report.period() {
        header.push_str(&format!(" | Period: {period}"));
    }

    let ma = &set.moving_averages;
    let mut ma_table = TextTable::new("Moving Averages", &["Indicator", "Value", "vs Price"]);
    let averages = [
        ("SMA 20", ma.sma_20),
        ("SMA 50", ma.sma_50),
        ("SMA 200", ma.sma_200),
        ("EMA 12", ma.ema_12),
        ("EMA 26", ma.ema_26),
    ];
    for (name, value) in averages {
        if let Some(v) = value {
            ma_table.row([
                name.to_string(),
                format_currency(Some(v)),
                format_signed_percent(vs_price(price, v)),
            ]);
        }
    }
    ma_table.row(["Trend".to_string(), ma.trend.to_string()]);
    if let Some(cross) = ma.cross {
        ma_table.row(["Cross".to_string(), cross.to_string()]);
    }

    let rsi = &set.rsi;
    let macd = &set.macd;
    let mut momentum = TextTable::new("Momentum Indicators", &["Indicator", "Value", "Signal"]);
    momentum.row([
        format!("RSI ({})", rsi.period),
        format_number(rsi.value, 2),
        rsi.zone.map_or_else(|| NOT_AVAILABLE.to_string(), |z| z.to_string()),
    ]);
    momentum.row([
        "MACD".to_string(),
        format_number(macd.macd, 4),
        macd.trend.map_or_else(|| NOT_AVAILABLE.to_string(), |t| t.to_string()),
    ]);
    momentum.row([
        "MACD Signal".to_string(),
        format_number(macd.signal, 4),
        macd.crossover.to_string(),
    ]);
    momentum.row(["Histogram".to_string(), format_number(macd.histogram, 4)]);

    let bb = &set.bollinger;
    let mut bollinger = TextTable::new(
        format!(
            "Bollinger Bands ({}, {})",
            params.bollinger_period, params.bollinger_multiplier
        ),
        &["Band", "Value"],
    );
    bollinger.row(["Upper".to_string(), format_currency(bb.upper)]);
    bollinger.row(["Middle".to_string(), format_currency(bb.middle)]);
    bollinger.row(["Lower".to_string(), format_currency(bb.lower)]);
    bollinger.row([
        "Position".to_string(),
        bb.position.map_or_else(|| NOT_AVAILABLE.to_string(), |p| p.to_string()),
    ]);
    bollinger.row(["%B".to_string(), format_percent(bb.percent_b)]);
    bollinger.row(["Bandwidth".to_string(), format_percent(bb.bandwidth)]);

    let vol = &set.volume;
    let mut volume = TextTable::new("Volume Analysis", &["Metric", "Value"]);
    volume.row(["Current Volume".to_string(), format_volume(vol.current)]);
    volume.row([
        format!("{}D Avg Volume", params.volume_window),
        format_volume(vol.average),
    ]);
    volume.row(["Vol Ratio".to_string(), format_ratio(vol.ratio)]);
    volume.row([
        "Assessment".to_string(),
        vol.activity.map_or_else(|| NOT_AVAILABLE.to_string(), |a| a.to_string()),
    ]);

    let lv = &set.levels;
    let mut levels = TextTable::new("Support & Resistance", &["Level", "Price"]);
    levels.row(["Resistance 2".to_string(), format_currency(lv.resistance_2)]);
    levels.row(["Resistance 1".to_string(), format_currency(lv.resistance_1)]);
    levels.row(["Pivot".to_string(), format_currency(lv.pivot)]);
    levels.row(["Support 1".to_string(), format_currency(lv.support_1)]);
    levels.row(["Support 2".to_string(), format_currency(lv.support_2)]);
    levels.row([format!("{}D High", lv.window), format_currency(lv.recent_high)]);
    levels.row([format!("{}D Low", lv.window), format_currency(lv.recent_low)]);

    let sections = [
        header,
        ma_table.render(),
        momentum.render(),
        bollinger.render(),
        volume.render(),
        levels.render(),
    ];
    sections.join("\n\n")
}
