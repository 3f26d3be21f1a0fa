//! Balance and settlement engine
//!
//! Pure functions over a [`Tour`]. Nothing here is cached: callers recompute
//! the full overview after every mutation.

pub mod aggregate;
pub mod balance;
pub mod settlement;

pub use aggregate::{
    category_totals, daily_breakdown, daily_totals, summarize, CategoryTotal, DailyBreakdown,
    DailyTotal, TourSummary,
};
pub use balance::{calculate_balances, BalanceSheet, BalanceStatus, MemberBalance};
pub use settlement::{calculate_settlements, Settlement};

use serde::Serialize;

use crate::models::Tour;

/// Amounts within this distance of zero count as settled
pub const SETTLEMENT_TOLERANCE: f64 = 0.01;

/// Everything derived from a tour in one pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TourOverview {
    pub balances: BalanceSheet,
    pub settlements: Vec<Settlement>,
    pub category_totals: Vec<CategoryTotal>,
    pub daily_breakdown: Vec<DailyBreakdown>,
    pub daily_totals: Vec<DailyTotal>,
    pub summary: TourSummary,
}

impl TourOverview {
    pub fn compute(tour: &Tour) -> Self {
        tracing::debug!(
            tour = %tour.id,
            members = tour.members.len(),
            expenses = tour.expenses.len(),
            "Recomputing tour overview"
        );

        let balances = calculate_balances(tour);
        let settlements = calculate_settlements(&balances);

        Self {
            settlements,
            balances,
            category_totals: category_totals(&tour.expenses),
            daily_breakdown: daily_breakdown(tour),
            daily_totals: daily_totals(&tour.expenses),
            summary: summarize(tour),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sample_tour;

    #[test]
    fn test_sample_tour_balances() {
        let tour = sample_tour();
        let overview = TourOverview::compute(&tour);

        let expected = [
            ("Alex", 5400.0, 4490.0, 910.0),
            ("Sarah", 5300.0, 4490.0, 810.0),
            ("Mike", 8000.0, 4490.0, 3510.0),
            ("Emma", 3300.0, 4490.0, -1190.0),
            ("David", 0.0, 4040.0, -4040.0),
        ];
        for (name, paid, share, net) in expected {
            let member = tour.member_by_name(name).unwrap();
            let balance = overview.balances.get(member.id).unwrap();
            assert!((balance.total_paid - paid).abs() < 1e-6, "{} paid", name);
            assert!((balance.total_share - share).abs() < 1e-6, "{} share", name);
            assert!((balance.net - net).abs() < 1e-6, "{} net", name);
        }
        assert!(overview.balances.total_net().abs() < SETTLEMENT_TOLERANCE);
    }

    #[test]
    fn test_sample_tour_settlements() {
        let tour = sample_tour();
        let overview = TourOverview::compute(&tour);

        assert!(overview.settlements.len() <= 4);
        let paid_by = |name: &str| -> f64 {
            let id = tour.member_by_name(name).unwrap().id;
            overview.settlements.iter().filter(|s| s.from == id).map(|s| s.amount).sum()
        };
        let received_by = |name: &str| -> f64 {
            let id = tour.member_by_name(name).unwrap().id;
            overview.settlements.iter().filter(|s| s.to == id).map(|s| s.amount).sum()
        };

        assert!((paid_by("David") - 4040.0).abs() < SETTLEMENT_TOLERANCE);
        assert!((paid_by("Emma") - 1190.0).abs() < SETTLEMENT_TOLERANCE);
        assert!((received_by("Mike") - 3510.0).abs() < SETTLEMENT_TOLERANCE);
        assert!((received_by("Alex") - 910.0).abs() < SETTLEMENT_TOLERANCE);
        assert!((received_by("Sarah") - 810.0).abs() < SETTLEMENT_TOLERANCE);
    }

    #[test]
    fn test_sample_tour_daily_views() {
        let overview = TourOverview::compute(&sample_tour());

        let days: Vec<_> = overview
            .daily_breakdown
            .iter()
            .map(|d| d.total.dollars())
            .collect();
        assert_eq!(days, vec![2500, 1800, 2800, 4200]);
        assert!((overview.daily_breakdown[0].per_person - 500.0).abs() < 1e-9);

        assert_eq!(overview.summary.total_expenses.dollars(), 22000);
        assert_eq!(overview.summary.hotel_costs.dollars(), 8000);
        assert_eq!(overview.summary.transport_costs.dollars(), 2700);
        assert!((overview.summary.daily_average - 2825.0).abs() < 1e-9);

        let trend: i64 = overview.daily_totals.iter().map(|d| d.total.dollars()).sum();
        assert_eq!(trend, 22000);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let tour = sample_tour();
        assert_eq!(TourOverview::compute(&tour), TourOverview::compute(&tour));
    }

    #[test]
    fn test_balances_after_member_removal() {
        let mut tour = sample_tour();
        let david = tour.member_by_name("David").unwrap().id;
        tour.remove_member(david);

        // Every sample expense except the Emma-paid tour involves David
        assert_eq!(tour.expenses.len(), 1);
        let overview = TourOverview::compute(&tour);
        assert!(overview.balances.get(david).is_none());
        assert!(overview.balances.total_net().abs() < SETTLEMENT_TOLERANCE);

        let emma = tour.member_by_name("Emma").unwrap().id;
        assert!((overview.balances.get(emma).unwrap().net - 1350.0).abs() < 1e-6);
    }
}
