//! Market data providers.
//!
//! Every provider hands back a canonical `PriceSeries` for a symbol and a
//! lookback bucket. Network access is confined to `YahooProvider`.

pub mod circuit_breaker;
pub mod csv_import;
pub mod provider;
pub mod synthetic;
pub mod yahoo;

pub use circuit_breaker::CircuitBreaker;
pub use csv_import::CsvProvider;
pub use provider::{DataError, DataSource, LookbackPeriod, MarketDataProvider};
pub use synthetic::SyntheticProvider;
pub use yahoo::{YahooProvider, YahooSettings};
