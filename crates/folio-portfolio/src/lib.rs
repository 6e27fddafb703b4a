//! # Folio Portfolio
//!
//! Sector aggregation for the Folio dashboard.
//!
//! This crate turns the flat list of holdings delivered by the data source
//! into the sector-grouped, total-annotated view the dashboard renders.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: every calculation is stateless with explicit inputs
//! - **Source figures are authoritative**: investment, present value and
//!   gain/loss are taken as supplied; disagreements are reported, not fixed
//! - **Exact totals**: decimal sums, with gain/loss derived from the two totals
//!
//! ## Quick Start
//!
//! ```rust
//! use folio_portfolio::prelude::*;
//!
//! let holdings = vec![
//!     Holding::builder().id("h1").sector("Tech").investment(dec!(100)).present_value(dec!(150)).build().unwrap(),
//!     Holding::builder().id("h2").sector("").investment(dec!(50)).present_value(dec!(40)).build().unwrap(),
//!     Holding::builder().id("h3").sector("Tech").investment(dec!(200)).present_value(dec!(180)).build().unwrap(),
//! ];
//!
//! let groups = group_by_sector(&holdings);
//! assert_eq!(groups[0].total_gain_loss(), dec!(30));
//! assert_eq!(groups[1].sector_name(), "Other");
//!
//! let summary = PortfolioSummary::from_groups(&groups);
//! assert_eq!(summary.total_gain_loss, dec!(20));
//! ```
//!
//! ## Module Overview
//!
//! - [`bucketing`] - Sector grouping
//! - [`analytics`] - Portfolio-wide totals
//! - [`validation`] - Consistency checks on source figures

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod analytics;
pub mod bucketing;
pub mod validation;

pub use analytics::PortfolioSummary;
pub use bucketing::{group_by_sector, SectorGroup, SectorIndex};
pub use validation::{
    check_consistency, check_consistency_with, ConsistencyIssue, ConsistencyWarning,
    DEFAULT_TOLERANCE,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use folio_portfolio::prelude::*;
/// ```
pub mod prelude {
    pub use crate::analytics::PortfolioSummary;
    pub use crate::bucketing::{group_by_sector, SectorGroup};
    pub use crate::validation::{check_consistency, ConsistencyIssue, ConsistencyWarning};

    // Re-export commonly used types from dependencies
    pub use folio_core::prelude::*;
    pub use rust_decimal::Decimal;
    pub use rust_decimal_macros::dec;
}
