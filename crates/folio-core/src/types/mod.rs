//! Domain types for portfolio holdings.
//!
//! - [`Holding`]: one portfolio line item as supplied by the data source
//! - [`PeRatio`]: price/earnings figure or the `"N/A"` sentinel
//! - [`GainDirection`]: sign of a gain/loss amount for display

mod holding;
mod pe_ratio;

pub use holding::{GainDirection, Holding, HoldingBuilder, OTHER_SECTOR};
pub use pe_ratio::PeRatio;
