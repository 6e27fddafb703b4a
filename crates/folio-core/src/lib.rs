//! # Folio Core
//!
//! Core types and formatting for the Folio portfolio dashboard.
//!
//! This crate provides the building blocks shared by every other Folio crate:
//!
//! - **Types**: the [`Holding`] wire record, the [`PeRatio`] sentinel and [`GainDirection`]
//! - **Money**: Indian Rupee formatting with lakh/crore digit grouping
//! - **Errors**: [`CoreError`] for malformed holdings
//!
//! ## Design Philosophy
//!
//! - **Explicit optionality**: every field the data source may omit is an `Option`
//!   with a documented fallback, never a truthiness check
//! - **Exact arithmetic**: money is `rust_decimal::Decimal` end to end
//!
//! ## Example
//!
//! ```rust
//! use folio_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let holding = Holding::builder()
//!     .id("h-1")
//!     .name("Infosys")
//!     .sector("Technology")
//!     .quantity(10)
//!     .investment(dec!(15000))
//!     .present_value(dec!(16250.50))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(holding.sector_key(), "Technology");
//! assert_eq!(format_currency(dec!(1234567.5)), "₹12,34,567.50");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod money;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::money::{
        format_currency, format_percent, format_ratio, format_signed_currency,
        group_indian_digits, round_currency,
    };
    pub use crate::types::{GainDirection, Holding, HoldingBuilder, PeRatio, OTHER_SECTOR};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use money::format_currency;
pub use types::{GainDirection, Holding, HoldingBuilder, PeRatio, OTHER_SECTOR};
