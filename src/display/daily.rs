//! Daily breakdown display
//!
//! Hotel and Transport never show up in the breakdown; the trend view lists
//! every category.

use crate::engine::{DailyBreakdown, DailyTotal};
use crate::models::{format_units, Money};

use super::format::{format_bar, separator, truncate};

/// Format the per-day variable spend with each day's expenses
pub fn format_daily_breakdown(days: &[DailyBreakdown], symbol: &str) -> String {
    if days.is_empty() {
        return "No daily expenses (Hotel and Transport are excluded).".to_string();
    }

    let mut output = String::new();
    output.push_str("Daily Expenses (excluding Hotel and Transport)\n");

    for day in days {
        output.push('\n');
        output.push_str(&format!(
            "{}  {}  {} per person  ({} expense(s))\n",
            day.date.format("%a %Y-%m-%d"),
            day.total.format_with_symbol(symbol),
            format_units(day.per_person, symbol),
            day.expense_count()
        ));
        output.push_str(&format!("{}\n", separator(60)));
        for expense in &day.expenses {
            output.push_str(&format!(
                "  {:<30}  {:<13}  {:>12}\n",
                truncate(&expense.label(), 30),
                expense.category.to_string(),
                expense.amount.format_with_symbol(symbol)
            ));
        }
    }

    let total: Money = days.iter().map(|d| d.total).sum();
    output.push_str(&format!(
        "\nTotal over {} day(s): {}\n",
        days.len(),
        total.format_with_symbol(symbol)
    ));

    output
}

/// Format the all-category spending trend as a bar chart
pub fn format_daily_trend(totals: &[DailyTotal], symbol: &str) -> String {
    if totals.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let max = totals.iter().map(|t| t.total.cents()).max().unwrap_or(0) as f64;

    let mut output = String::new();
    output.push_str("Spending Trend (all categories)\n\n");
    for total in totals {
        output.push_str(&format!(
            "  {}  {:>12}  {}\n",
            total.date.format("%Y-%m-%d"),
            total.total.format_with_symbol(symbol),
            format_bar(total.total.cents() as f64, max, 30)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{daily_breakdown, daily_totals};
    use crate::storage::sample_tour;

    #[test]
    fn test_format_daily_breakdown() {
        let tour = sample_tour();
        let output = format_daily_breakdown(&daily_breakdown(&tour), "$");

        assert!(output.contains("2025-07-20  $2500.00  $500.00 per person"));
        assert!(output.contains("Welcome dinner"));
        assert!(!output.contains("Hotel booking"));
        assert!(!output.contains("Airport taxi"));
        assert!(output.contains("Total over 4 day(s): $11300.00"));
    }

    #[test]
    fn test_format_daily_trend() {
        let tour = sample_tour();
        let output = format_daily_trend(&daily_totals(&tour.expenses), "$");

        assert!(output.contains("2025-07-20"));
        assert!(output.contains("$11700.00"));
        assert_eq!(output.lines().filter(|l| l.contains("2025-07")).count(), 4);
    }

    #[test]
    fn test_format_empty() {
        assert!(format_daily_breakdown(&[], "$").starts_with("No daily expenses"));
        assert_eq!(format_daily_trend(&[], "$"), "No expenses recorded.");
    }
}
