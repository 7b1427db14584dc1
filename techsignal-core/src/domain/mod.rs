//! Domain types: daily bars and the price series an analysis runs over.

pub mod bar;
pub mod series;

pub use bar::PriceBar;
pub use series::{PriceSeries, SeriesError};
