//! Portfolio-level analytics.
//!
//! - [`PortfolioSummary`]: grand totals across all sector groups

mod summary;

pub use summary::*;
