//! Source figure consistency checks.

use folio_core::Holding;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Default absolute tolerance for figure comparisons (one paisa).
pub const DEFAULT_TOLERANCE: Decimal = dec!(0.01);

/// What disagreed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ConsistencyIssue {
    /// `investment` is not `quantity * purchase_price`.
    InvestmentMismatch {
        /// `quantity * purchase_price`.
        expected: Decimal,
        /// Figure supplied by the source.
        reported: Decimal,
    },

    /// `present_value` is not `quantity * cmp`.
    PresentValueMismatch {
        /// `quantity * cmp`.
        expected: Decimal,
        /// Figure supplied by the source.
        reported: Decimal,
    },

    /// `gain_loss` is not `present_value - investment`.
    GainLossMismatch {
        /// `present_value - investment`.
        expected: Decimal,
        /// Figure supplied by the source.
        reported: Decimal,
    },

    /// The identifier was already used by an earlier holding.
    DuplicateId,
}

/// A non-fatal disagreement found in one holding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsistencyWarning {
    /// The holding concerned.
    pub holding_id: String,

    /// What disagreed.
    pub issue: ConsistencyIssue,
}

impl fmt::Display for ConsistencyIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsistencyIssue::InvestmentMismatch { expected, reported } => write!(
                f,
                "investment {} differs from quantity x purchase price {}",
                reported, expected
            ),
            ConsistencyIssue::PresentValueMismatch { expected, reported } => write!(
                f,
                "present value {} differs from quantity x CMP {}",
                reported, expected
            ),
            ConsistencyIssue::GainLossMismatch { expected, reported } => write!(
                f,
                "gain/loss {} differs from present value - investment {}",
                reported, expected
            ),
            ConsistencyIssue::DuplicateId => f.write_str("identifier appears more than once"),
        }
    }
}

impl fmt::Display for ConsistencyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.holding_id, self.issue)
    }
}

/// Checks holdings against [`DEFAULT_TOLERANCE`].
///
/// See [`check_consistency_with`].
#[must_use]
pub fn check_consistency(holdings: &[Holding]) -> Vec<ConsistencyWarning> {
    check_consistency_with(holdings, DEFAULT_TOLERANCE)
}

/// Compares source-supplied figures with the figures they derive from.
///
/// A comparison only runs when every figure it needs is present; the
/// present value check also needs a usable market price. Warnings come out
/// in input order. Holdings are never modified.
#[must_use]
pub fn check_consistency_with(holdings: &[Holding], tolerance: Decimal) -> Vec<ConsistencyWarning> {
    let mut warnings = Vec::new();
    let mut seen_ids = HashSet::with_capacity(holdings.len());

    for h in holdings {
        if !seen_ids.insert(h.id.as_str()) {
            warnings.push(warning(h, ConsistencyIssue::DuplicateId));
        }

        let quantity = Decimal::from(h.quantity);

        if let (Some(price), Some(reported)) = (h.purchase_price, h.investment) {
            if let Some(expected) = quantity.checked_mul(price) {
                if differs(expected, reported, tolerance) {
                    warnings.push(warning(
                        h,
                        ConsistencyIssue::InvestmentMismatch { expected, reported },
                    ));
                }
            }
        }

        if let (Some(cmp), Some(reported)) = (h.market_price(), h.present_value) {
            if let Some(expected) = quantity.checked_mul(cmp) {
                if differs(expected, reported, tolerance) {
                    warnings.push(warning(
                        h,
                        ConsistencyIssue::PresentValueMismatch { expected, reported },
                    ));
                }
            }
        }

        if let (Some(pv), Some(inv), Some(reported)) = (h.present_value, h.investment, h.gain_loss)
        {
            let expected = pv.saturating_sub(inv);
            if differs(expected, reported, tolerance) {
                warnings.push(warning(
                    h,
                    ConsistencyIssue::GainLossMismatch { expected, reported },
                ));
            }
        }
    }

    warnings
}

fn warning(h: &Holding, issue: ConsistencyIssue) -> ConsistencyWarning {
    ConsistencyWarning {
        holding_id: h.id.clone(),
        issue,
    }
}

fn differs(expected: Decimal, reported: Decimal, tolerance: Decimal) -> bool {
    expected.saturating_sub(reported).abs() > tolerance
}
