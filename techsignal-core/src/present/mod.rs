//! Presentation adapter: number formatting, the text summary and the
//! tabular report. Nothing in here feeds back into the numeric core.

pub mod format;
pub mod summary;
pub mod tables;

pub use format::{
    format_currency, format_number, format_percent, format_ratio, format_signed_percent,
    format_volume, NOT_AVAILABLE,
};
pub use summary::summary_text;
pub use tables::render_tables;
