//! Portfolio summary.
//!
//! Grand totals across every sector group, derived the same way as the
//! per-group totals.

use crate::bucketing::{percent_of, saturating_sum, SectorGroup};
use folio_core::GainDirection;
use rust_decimal::Decimal;
use serde::Serialize;

/// Whole-portfolio totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Number of holdings.
    pub holding_count: usize,

    /// Number of sector groups.
    pub sector_count: usize,

    /// Holdings with a usable market price.
    pub priced_count: usize,

    /// Sum of all group investment totals.
    pub total_investment: Decimal,

    /// Sum of all group present value totals.
    pub total_present_value: Decimal,

    /// `total_present_value - total_investment`.
    pub total_gain_loss: Decimal,
}

impl PortfolioSummary {
    /// Summarizes a set of sector groups.
    ///
    /// # Example
    ///
    /// ```rust
    /// use folio_portfolio::{group_by_sector, PortfolioSummary};
    ///
    /// let summary = PortfolioSummary::from_groups(&group_by_sector(&[]));
    /// assert_eq!(summary.holding_count, 0);
    /// assert!(summary.total_gain_loss.is_zero());
    /// ```
    #[must_use]
    pub fn from_groups(groups: &[SectorGroup]) -> Self {
        let total_investment = saturating_sum(groups.iter().map(SectorGroup::total_investment));
        let total_present_value =
            saturating_sum(groups.iter().map(SectorGroup::total_present_value));

        Self {
            holding_count: groups.iter().map(SectorGroup::len).sum(),
            sector_count: groups.len(),
            priced_count: groups
                .iter()
                .flat_map(SectorGroup::holdings)
                .filter(|h| h.has_market_price())
                .count(),
            total_investment,
            total_present_value,
            total_gain_loss: total_present_value.saturating_sub(total_investment),
        }
    }

    /// Holdings without a usable market price.
    #[must_use]
    pub fn unpriced_count(&self) -> usize {
        self.holding_count - self.priced_count
    }

    /// Overall gain/loss as a percentage of the invested amount.
    #[must_use]
    pub fn gain_loss_pct(&self) -> Option<Decimal> {
        percent_of(self.total_gain_loss, self.total_investment)
    }

    /// Display direction of the overall gain/loss.
    #[must_use]
    pub fn direction(&self) -> GainDirection {
        GainDirection::of(self.total_gain_loss)
    }
}
