//! Portfolio bucketing.
//!
//! - **Sector grouping**: holdings grouped by sector key in first-seen order,
//!   each group annotated with investment, present value and gain/loss totals
//!
//! All functions are pure - they take holdings and return groups
//! without modifying state.
//!
//! # Example
//!
//! ```rust
//! use folio_core::Holding;
//! use folio_portfolio::bucketing::group_by_sector;
//! use rust_decimal_macros::dec;
//!
//! let holdings = vec![
//!     Holding::builder().id("a").sector("Tech").investment(dec!(100)).present_value(dec!(150)).build().unwrap(),
//!     Holding::builder().id("b").investment(dec!(50)).present_value(dec!(40)).build().unwrap(),
//! ];
//!
//! let groups = group_by_sector(&holdings);
//! assert_eq!(groups[0].sector_name(), "Tech");
//! assert_eq!(groups[1].sector_name(), "Other");
//! assert_eq!(groups[1].total_gain_loss(), dec!(-10));
//! ```

mod sector;

pub(crate) use sector::{percent_of, saturating_sum};
pub use sector::*;
