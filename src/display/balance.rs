//! Balance and settlement display
//!
//! Renders the per-member balance table and the suggested payments.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::engine::{BalanceSheet, Settlement};
use crate::models::format_units;

use super::format::format_signed;

#[derive(Tabled)]
struct BalanceRow {
    #[tabled(rename = "Member")]
    name: String,
    #[tabled(rename = "Paid")]
    paid: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "Balance")]
    net: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Format the balance table
pub fn format_balance_table(balances: &BalanceSheet, symbol: &str) -> String {
    if balances.is_empty() {
        return "No members yet. Add one with 'toursplit member add'.".to_string();
    }

    let rows: Vec<BalanceRow> = balances
        .iter()
        .map(|b| BalanceRow {
            name: b.name.clone(),
            paid: format_units(b.total_paid, symbol),
            share: format_units(b.total_share, symbol),
            net: format_signed(b.net, symbol),
            status: b.status().to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::new(1..4)).with(Alignment::right()));

    table.to_string()
}

/// Format the settlement suggestions
pub fn format_settlements(settlements: &[Settlement], symbol: &str) -> String {
    if settlements.is_empty() {
        return "All settled up! No payments needed.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{} payment(s) to settle up:\n\n", settlements.len()));

    for (i, settlement) in settlements.iter().enumerate() {
        output.push_str(&format!(
            "  {}. {}\n",
            i + 1,
            settlement.describe(symbol)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{calculate_balances, calculate_settlements};
    use crate::storage::sample_tour;

    #[test]
    fn test_format_balance_table() {
        let balances = calculate_balances(&sample_tour());
        let output = format_balance_table(&balances, "$");

        assert!(output.contains("Member"));
        assert!(output.contains("David"));
        assert!(output.contains("+$3510.00"));
        assert!(output.contains("-$4040.00"));
        assert!(output.contains("Owes Money"));
        assert!(output.contains("Owed Money"));
    }

    #[test]
    fn test_format_settlements() {
        let balances = calculate_balances(&sample_tour());
        let output = format_settlements(&calculate_settlements(&balances), "$");

        assert!(output.starts_with("4 payment(s)"));
        assert!(output.contains("David pays Mike $3510.00"));
    }

    #[test]
    fn test_nothing_to_settle() {
        assert!(format_settlements(&[], "$").contains("All settled up"));
        assert!(format_balance_table(&BalanceSheet::default(), "$").starts_with("No members"));
    }
}
