//! Sector-based grouping.
//!
//! Groups holdings by their effective sector key and annotates each group
//! with investment, present value and gain/loss totals.

use folio_core::{GainDirection, Holding};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

/// Holdings sharing one sector key, with their totals.
///
/// Totals are computed once at construction. `total_gain_loss` is always
/// `total_present_value - total_investment`, never summed from the
/// holdings' own `gain_loss` figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorGroup {
    sector_name: String,
    holdings: Vec<Holding>,
    total_investment: Decimal,
    total_present_value: Decimal,
    total_gain_loss: Decimal,
}

impl SectorGroup {
    /// Builds a group and computes its totals.
    ///
    /// Missing `investment` or `present_value` figures count as zero.
    /// Totals saturate at the bounds of [`Decimal`] instead of overflowing.
    #[must_use]
    pub fn new(sector_name: impl Into<String>, holdings: Vec<Holding>) -> Self {
        let total_investment = saturating_sum(holdings.iter().map(Holding::investment_or_zero));
        let total_present_value =
            saturating_sum(holdings.iter().map(Holding::present_value_or_zero));

        Self {
            sector_name: sector_name.into(),
            holdings,
            total_investment,
            total_present_value,
            total_gain_loss: total_present_value.saturating_sub(total_investment),
        }
    }

    /// The grouping key.
    #[must_use]
    pub fn sector_name(&self) -> &str {
        &self.sector_name
    }

    /// Holdings in input order.
    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    /// Sum of `investment` over the group.
    #[must_use]
    pub fn total_investment(&self) -> Decimal {
        self.total_investment
    }

    /// Sum of `present_value` over the group.
    #[must_use]
    pub fn total_present_value(&self) -> Decimal {
        self.total_present_value
    }

    /// `total_present_value - total_investment`.
    #[must_use]
    pub fn total_gain_loss(&self) -> Decimal {
        self.total_gain_loss
    }

    /// Number of holdings in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    /// Returns true if the group holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Gain/loss as a percentage of the invested amount.
    ///
    /// `None` when nothing was invested.
    #[must_use]
    pub fn gain_loss_pct(&self) -> Option<Decimal> {
        percent_of(self.total_gain_loss, self.total_investment)
    }

    /// Share of `portfolio_value` held in this sector, in percent.
    #[must_use]
    pub fn weight_pct(&self, portfolio_value: Decimal) -> Option<Decimal> {
        percent_of(self.total_present_value, portfolio_value)
    }

    /// Display direction of the group total.
    #[must_use]
    pub fn direction(&self) -> GainDirection {
        GainDirection::of(self.total_gain_loss)
    }
}

/// Insertion-ordered index from sector key to its pending group.
///
/// Keys iterate in the order they were first seen, which a plain
/// `HashMap` does not guarantee.
#[derive(Debug, Default)]
pub struct SectorIndex {
    positions: HashMap<String, usize>,
    groups: Vec<(String, Vec<Holding>)>,
}

impl SectorIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a holding under its sector key, opening the key at the end if unseen.
    pub fn push(&mut self, holding: Holding) {
        let key = holding.sector_key();
        let slot = match self.positions.get(key) {
            Some(&slot) => slot,
            None => {
                let slot = self.groups.len();
                self.positions.insert(key.to_string(), slot);
                self.groups.push((key.to_string(), Vec::new()));
                slot
            }
        };
        self.groups[slot].1.push(holding);
    }

    /// Number of distinct keys seen so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if no holding has been pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(k, _)| k.as_str())
    }

    /// Closes the index into totalled groups, in first-seen key order.
    #[must_use]
    pub fn into_groups(self) -> Vec<SectorGroup> {
        self.groups
            .into_iter()
            .map(|(name, holdings)| SectorGroup::new(name, holdings))
            .collect()
    }
}

/// Groups holdings by sector.
///
/// Single linear pass. Holdings without a sector (absent or empty)
/// land in the `"Other"` group. Groups come out in first-occurrence order
/// of their key, and each group keeps the input order of its holdings.
///
/// # Arguments
///
/// * `holdings` - Holdings in source order
///
/// # Returns
///
/// One [`SectorGroup`] per distinct key; empty input gives an empty vector.
#[must_use]
pub fn group_by_sector(holdings: &[Holding]) -> Vec<SectorGroup> {
    let mut index = SectorIndex::new();
    for h in holdings {
        index.push(h.clone());
    }
    index.into_groups()
}

pub(crate) fn saturating_sum(values: impl Iterator<Item = Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, Decimal::saturating_add)
}

pub(crate) fn percent_of(part: Decimal, whole: Decimal) -> Option<Decimal> {
    if whole.is_zero() {
        return None;
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
}
