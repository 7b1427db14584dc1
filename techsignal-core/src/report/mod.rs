//! Analysis reports and the analyzer that builds them.

pub mod analysis;
pub mod analyzer;
pub mod error;

pub use analysis::{AnalysisReport, SeriesSummary};
pub use analyzer::TechnicalAnalyzer;
pub use error::AnalysisError;
