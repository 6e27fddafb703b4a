//! Property-based tests for sector grouping invariants.
//!
//! These tests verify properties that must hold for every input:
//! - Every holding lands in exactly one group
//! - Equal keys share a group, different keys never do
//! - Missing sectors fall back to "Other"
//! - Group and holding order follow first occurrence in the input
//! - Totals are exact sums, gain/loss is derived
//! - Grouping is deterministic

use folio_portfolio::prelude::*;
use proptest::prelude::*;
use std::collections::HashMap;

// =============================================================================
// Generators
// =============================================================================

/// Generates an optional sector drawn from a small pool so keys repeat.
fn arb_sector() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        Just(Some("Technology".to_string())),
        Just(Some(" Technology".to_string())),
        Just(Some("  ".to_string())),
        Just(Some("Financials".to_string())),
        Just(Some("Energy".to_string())),
        Just(Some("Pharma".to_string())),
        Just(Some("Other".to_string())),
    ]
}

/// Generates an optional amount with two decimal places.
fn arb_amount() -> impl Strategy<Value = Option<Decimal>> {
    proptest::option::weighted(0.9, (-5_000_000i64..50_000_000).prop_map(|c| Decimal::new(c, 2)))
}

/// Generates holdings with unique, index-based identifiers.
fn arb_holdings(max: usize) -> impl Strategy<Value = Vec<Holding>> {
    proptest::collection::vec((arb_sector(), arb_amount(), arb_amount()), 0..=max).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (sector, investment, present_value))| {
                    let mut h = Holding::builder().id(format!("H{i}")).build().unwrap();
                    h.sector = sector;
                    h.investment = investment;
                    h.present_value = present_value;
                    h
                })
                .collect()
        },
    )
}

fn expected_key(h: &Holding) -> &str {
    match h.sector.as_deref() {
        Some(s) if !s.is_empty() => s,
        _ => "Other",
    }
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every input holding appears exactly once across all groups.
    #[test]
    fn prop_coverage(holdings in arb_holdings(60)) {
        let groups = group_by_sector(&holdings);

        let mut ids: Vec<&str> = groups
            .iter()
            .flat_map(|g| g.holdings().iter().map(|h| h.id.as_str()))
            .collect();
        let mut input_ids: Vec<&str> = holdings.iter().map(|h| h.id.as_str()).collect();
        ids.sort_unstable();
        input_ids.sort_unstable();

        prop_assert_eq!(ids, input_ids);
    }

    /// Holdings share a group exactly when their effective keys match.
    #[test]
    fn prop_grouping_by_key(holdings in arb_holdings(60)) {
        let groups = group_by_sector(&holdings);

        let mut names: Vec<&str> = groups.iter().map(SectorGroup::sector_name).collect();
        names.sort_unstable();
        names.dedup();
        prop_assert_eq!(names.len(), groups.len(), "group keys must be distinct");

        for group in &groups {
            for h in group.holdings() {
                prop_assert_eq!(expected_key(h), group.sector_name());
            }
        }
    }

    /// Missing, empty and literal "Other" sectors all share the "Other" group.
    #[test]
    fn prop_fallback_key(holdings in arb_holdings(60)) {
        let groups = group_by_sector(&holdings);
        let other_count = holdings.iter().filter(|h| expected_key(h) == "Other").count();

        let other = groups.iter().find(|g| g.sector_name() == OTHER_SECTOR);
        match other {
            Some(g) => {
                prop_assert_eq!(g.len(), other_count);
            }
            None => {
                prop_assert_eq!(other_count, 0);
            }
        }
    }

    /// Groups follow first occurrence; holdings keep relative input order.
    #[test]
    fn prop_order_stability(holdings in arb_holdings(60)) {
        let groups = group_by_sector(&holdings);

        let mut first_seen: Vec<&str> = Vec::new();
        for h in &holdings {
            let key = expected_key(h);
            if !first_seen.contains(&key) {
                first_seen.push(key);
            }
        }
        let names: Vec<&str> = groups.iter().map(SectorGroup::sector_name).collect();
        prop_assert_eq!(names, first_seen);

        let position: HashMap<&str, usize> = holdings
            .iter()
            .enumerate()
            .map(|(i, h)| (h.id.as_str(), i))
            .collect();
        for group in &groups {
            let positions: Vec<usize> = group.holdings().iter().map(|h| position[h.id.as_str()]).collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    /// Totals are exact sums and gain/loss is derived from them.
    #[test]
    fn prop_totals(holdings in arb_holdings(60)) {
        for group in group_by_sector(&holdings) {
            let investment: Decimal = group.holdings().iter().map(|h| h.investment.unwrap_or_default()).sum();
            let present_value: Decimal = group.holdings().iter().map(|h| h.present_value.unwrap_or_default()).sum();

            prop_assert_eq!(group.total_investment(), investment);
            prop_assert_eq!(group.total_present_value(), present_value);
            prop_assert_eq!(
                group.total_gain_loss(),
                group.total_present_value() - group.total_investment()
            );
        }
    }

    /// Grouping the same input twice gives identical output.
    #[test]
    fn prop_idempotent(holdings in arb_holdings(60)) {
        let first = group_by_sector(&holdings);
        let second = group_by_sector(&holdings.clone());
        prop_assert_eq!(first, second);
    }

    /// The summary agrees with the groups it was built from.
    #[test]
    fn prop_summary_consistent(holdings in arb_holdings(60)) {
        let groups = group_by_sector(&holdings);
        let summary = PortfolioSummary::from_groups(&groups);

        prop_assert_eq!(summary.holding_count, holdings.len());
        prop_assert_eq!(summary.sector_count, groups.len());
        prop_assert_eq!(
            summary.total_gain_loss,
            summary.total_present_value - summary.total_investment
        );
    }
}

#[test]
fn property_empty_input_gives_no_groups() {
    assert!(group_by_sector(&[]).is_empty());
    let summary = PortfolioSummary::from_groups(&[]);
    assert_eq!(summary, PortfolioSummary::default());
}
