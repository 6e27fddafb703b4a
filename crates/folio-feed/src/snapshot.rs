//! Refresh results and the dashboard state built from them.

use chrono::{DateTime, Local};
use folio_core::Holding;
use folio_portfolio::{
    check_consistency, group_by_sector, ConsistencyWarning, PortfolioSummary, SectorGroup,
};
use serde::Serialize;

/// One successful refresh: grouped holdings, totals and data-quality warnings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    /// Sector groups in first-occurrence order
    pub groups: Vec<SectorGroup>,
    /// Portfolio-wide totals
    pub summary: PortfolioSummary,
    /// Consistency warnings for the fetched holdings
    pub warnings: Vec<ConsistencyWarning>,
    /// When the holdings were received
    pub last_updated: DateTime<Local>,
}

impl PortfolioSnapshot {
    /// Group, summarize and check `holdings`, stamped with `last_updated`.
    pub fn build(holdings: &[Holding], last_updated: DateTime<Local>) -> Self {
        let groups = group_by_sector(holdings);
        let summary = PortfolioSummary::from_groups(&groups);
        let warnings = check_consistency(holdings);

        Self {
            groups,
            summary,
            warnings,
            last_updated,
        }
    }

    /// Same as [`build`](Self::build), stamped now.
    pub fn now(holdings: &[Holding]) -> Self {
        Self::build(holdings, Local::now())
    }

    /// `HH:MM:SS` of the last update, local time.
    pub fn last_updated_label(&self) -> String {
        self.last_updated.format("%H:%M:%S").to_string()
    }

    /// Number of holdings across all groups.
    pub fn holding_count(&self) -> usize {
        self.summary.holding_count
    }
}

/// What the dashboard shows: the last good snapshot plus refresh health.
///
/// A failed refresh never clears `snapshot`; it only records the error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardState {
    /// Last successful snapshot
    pub snapshot: Option<PortfolioSnapshot>,
    /// Message of the most recent failure, cleared on success
    pub last_error: Option<String>,
    /// Failures since the last success
    pub consecutive_failures: u32,
    /// Completed refresh attempts, successful or not
    pub refresh_count: u64,
}

impl DashboardState {
    /// True until the first snapshot arrives.
    pub fn is_loading(&self) -> bool {
        self.snapshot.is_none()
    }

    /// True when data is shown but the latest refresh failed.
    pub fn is_stale(&self) -> bool {
        self.snapshot.is_some() && self.last_error.is_some()
    }

    /// Record a successful refresh.
    pub fn record_success(&mut self, snapshot: PortfolioSnapshot) {
        self.snapshot = Some(snapshot);
        self.last_error = None;
        self.consecutive_failures = 0;
        self.refresh_count += 1;
    }

    /// Record a failed refresh, keeping the previous snapshot.
    pub fn record_failure(&mut self, error: impl Into<String>) {
        self.last_error = Some(error.into());
        self.consecutive_failures = self.consecutive_failures.saturating_add(1);
        self.refresh_count += 1;
    }
}
