//! Settlement optimizer
//!
//! Greedy debt resolution: the largest creditor is paired with the largest
//! debtor until one side runs out. Each step exhausts at least one party, so
//! at most `creditors + debtors - 1` payments are produced.

use serde::Serialize;

use crate::models::{format_units, MemberId};

use super::balance::BalanceSheet;
use super::SETTLEMENT_TOLERANCE;

/// A suggested payment from a debtor to a creditor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settlement {
    pub from: MemberId,
    pub from_name: String,
    pub to: MemberId,
    pub to_name: String,
    pub amount: f64,
}

impl Settlement {
    /// One-line description, e.g. "David pays Mike $3510.00"
    pub fn describe(&self, symbol: &str) -> String {
        format!(
            "{} pays {} {}",
            self.from_name,
            self.to_name,
            format_units(self.amount, symbol)
        )
    }
}

struct Party<'a> {
    id: MemberId,
    name: &'a str,
    remaining: f64,
}

/// Compute the settlement list for a balance table
pub fn calculate_settlements(balances: &BalanceSheet) -> Vec<Settlement> {
    let mut creditors: Vec<Party> = Vec::new();
    let mut debtors: Vec<Party> = Vec::new();

    for balance in balances.iter() {
        if balance.net > SETTLEMENT_TOLERANCE {
            creditors.push(Party {
                id: balance.member_id,
                name: &balance.name,
                remaining: balance.net,
            });
        } else if balance.net < -SETTLEMENT_TOLERANCE {
            debtors.push(Party {
                id: balance.member_id,
                name: &balance.name,
                remaining: -balance.net,
            });
        }
    }

    // Stable sorts: equal amounts keep member order
    creditors.sort_by(|a, b| b.remaining.total_cmp(&a.remaining));
    debtors.sort_by(|a, b| b.remaining.total_cmp(&a.remaining));

    let mut settlements = Vec::new();
    let (mut i, mut j) = (0, 0);

    while i < creditors.len() && j < debtors.len() {
        let credit = &creditors[i];
        let debt = &debtors[j];
        let amount = credit.remaining.min(debt.remaining);

        if amount > SETTLEMENT_TOLERANCE {
            settlements.push(Settlement {
                from: debt.id,
                from_name: debt.name.to_string(),
                to: credit.id,
                to_name: credit.name.to_string(),
                amount,
            });
        }

        creditors[i].remaining -= amount;
        debtors[j].remaining -= amount;

        if creditors[i].remaining < SETTLEMENT_TOLERANCE {
            i += 1;
        }
        if debtors[j].remaining < SETTLEMENT_TOLERANCE {
            j += 1;
        }
    }

    tracing::debug!(
        creditors = creditors.len(),
        debtors = debtors.len(),
        settlements = settlements.len(),
        "Computed settlements"
    );

    settlements
}
