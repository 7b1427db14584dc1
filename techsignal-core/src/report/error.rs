use crate::data::DataError;
use thiserror::Error;

/// Terminal failures of one analysis call.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no price data for {symbol}")]
    NoData { symbol: String },

    #[error("failed to fetch {symbol}: {source}")]
    FetchFailed {
        symbol: String,
        #[source]
        source: DataError,
    },
}

impl AnalysisError {
    /// True when the analysis produced no report because there was nothing
    /// to analyze. Fetch failures count: the caller ends up without data.
    pub fn is_no_data(&self) -> bool {
        matches!(
            self,
            AnalysisError::NoData { .. } | AnalysisError::FetchFailed { .. }
        )
    }

    pub fn symbol(&self) -> &str {
        match self {
            AnalysisError::NoData { symbol } | AnalysisError::FetchFailed { symbol, .. } => symbol,
        }
    }
}
