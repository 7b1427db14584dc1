//! CSV file provider.
//!
//! Reads `<dir>/<SYMBOL>.csv` with the header `date,open,high,low,close,volume`
//! (dates as `YYYY-MM-DD`). Rows may come in any order; canonicalization sorts
//! them and drops duplicates and malformed bars.

use super::provider::{finish_series, DataError, LookbackPeriod, MarketDataProvider};
use crate::domain::{PriceBar, PriceSeries};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct CsvProvider {
    dir: PathBuf,
}

impl CsvProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `symbol`'s history.
    pub fn path_for(&self, symbol: &str) -> PathBuf {
        self.dir.join(format!("{}.csv", symbol.to_ascii_uppercase()))
    }

    /// Parse a CSV file into bars, in file order.
    pub fn read_bars(path: &Path) -> Result<Vec<PriceBar>, DataError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| csv_error(path, e))?;

        reader
            .deserialize::<PriceBar>()
            .map(|row| row.map_err(|e| csv_error(path, e)))
            .collect()
    }
}

fn csv_error(path: &Path, err: csv::Error) -> DataError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => DataError::Io {
            path: path.to_path_buf(),
            source,
        },
        _ => DataError::Csv {
            path: path.to_path_buf(),
            message,
        },
    }
}

impl MarketDataProvider for CsvProvider {
    fn name(&self) -> &str {
        "csv"
    }

    fn fetch(&self, symbol: &str, period: LookbackPeriod) -> Result<PriceSeries, DataError> {
        let path = self.path_for(symbol);
        if !path.is_file() {
            return Err(DataError::SymbolNotFound {
                symbol: symbol.to_string(),
            });
        }

        let bars = Self::read_bars(&path)?;
        debug!(symbol, path = %path.display(), rows = bars.len(), "read CSV history");
        Ok(finish_series(symbol, bars, period))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const HEADER: &str = "date,open,high,low,close,volume\n";

    fn write(dir: &Path, name: &str, body: &str) {
        fs::write(dir.join(name), format!("{HEADER}{body}")).unwrap();
    }

    #[test]
    fn reads_and_sorts_rows() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "SPY.csv",
            "2024-01-03,101,103,100,102,2000\n2024-01-02,100,102,99,101,1000\n",
        );

        let provider = CsvProvider::new(dir.path());
        let series = provider.fetch("spy", LookbackPeriod::OneMonth).unwrap();
        assert_eq!(series.symbol(), "SPY");
        assert_eq!(series.len(), 2);
        assert_eq!(series.closes(), vec![101.0, 102.0]);
    }

    #[test]
    fn keeps_only_the_bucket() {
        let dir = tempfile::tempdir().unwrap();
        let start = chrono::NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
        let body: String = (0..40)
            .map(|i| {
                let date = start + chrono::Duration::days(i);
                format!("{date},100,101,99,100,500\n")
            })
            .collect();
        write(dir.path(), "QQQ.csv", &body);

        let series = CsvProvider::new(dir.path())
            .fetch("QQQ", LookbackPeriod::OneMonth)
            .unwrap();
        assert_eq!(series.len(), LookbackPeriod::OneMonth.trading_days());
        assert_eq!(
            series.latest().unwrap().date,
            start + chrono::Duration::days(39)
        );
    }

    #[test]
    fn missing_file_is_symbol_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = CsvProvider::new(dir.path())
            .fetch("NOPE", LookbackPeriod::OneYear)
            .unwrap_err();
        assert!(matches!(err, DataError::SymbolNotFound { .. }));
    }

    #[test]
    fn malformed_row_is_csv_error() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "BAD.csv", "2024-01-02,abc,102,99,101,1000\n");
        let err = CsvProvider::new(dir.path())
            .fetch("BAD", LookbackPeriod::OneYear)
            .unwrap_err();
        assert!(matches!(err, DataError::Csv { .. }));
    }

    #[test]
    fn insane_rows_are_dropped() {
        let dir = tempfile::tempdir().unwrap();
        // second row has high below low
        write(
            dir.path(),
            "IWM.csv",
            "2024-01-02,100,102,99,101,1000\n2024-01-03,100,90,99,95,1000\n",
        );
        let series = CsvProvider::new(dir.path())
            .fetch("IWM", LookbackPeriod::OneYear)
            .unwrap();
        assert_eq!(series.len(), 1);
    }
}
