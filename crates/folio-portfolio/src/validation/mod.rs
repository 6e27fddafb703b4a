//! Consistency checks on source-supplied figures.
//!
//! The data source computes investment, present value and gain/loss. These
//! checks compare them with the figures they should derive from and report
//! disagreements as warnings. Numbers are never corrected.

mod consistency;

pub use consistency::*;
