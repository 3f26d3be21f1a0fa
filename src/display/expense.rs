//! Expense display formatting
//!
//! Formats expense lists and the category breakdown.

use crate::config::settings::format_date;
use crate::engine::CategoryTotal;
use crate::models::{Expense, Money, Tour};

use super::format::{format_bar, format_percentage, truncate};

const DESCRIPTION_WIDTH: usize = 28;

/// Format expenses as a register
///
/// Payer and participant names are resolved against `tour`; ids that no
/// longer resolve render as `?`. An unusable `date_format` falls back to ISO
/// dates.
pub fn format_expense_list(
    tour: &Tour,
    expenses: &[&Expense],
    symbol: &str,
    date_format: &str,
) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<10}  {:<DESCRIPTION_WIDTH$}  {:<13}  {:>12}  {:<12}  {:>5}  {}\n",
        "Date", "Description", "Category", "Amount", "Paid By", "Split", "ID"
    ));
    output.push_str(&format!(
        "{:-<10}  {:-<DESCRIPTION_WIDTH$}  {:-<13}  {:->12}  {:-<12}  {:->5}  {:-<12}\n",
        "", "", "", "", "", "", ""
    ));

    for expense in expenses {
        output.push_str(&format!(
            "{:<10}  {:<DESCRIPTION_WIDTH$}  {:<13}  {:>12}  {:<12}  {:>5}  {}\n",
            format_date(expense.date, date_format)
                .unwrap_or_else(|| expense.date.format("%Y-%m-%d").to_string()),
            truncate(&expense.label(), DESCRIPTION_WIDTH),
            expense.category.to_string(),
            expense.amount.format_with_symbol(symbol),
            truncate(tour.member_name(expense.paid_by).unwrap_or("?"), 12),
            expense.participants.len(),
            expense.id,
        ));
    }

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    output.push_str(&format!(
        "\n{} expense(s), total {}\n",
        expenses.len(),
        total.format_with_symbol(symbol)
    ));

    output
}

/// Format a single expense with its participants
pub fn format_expense_details(tour: &Tour, expense: &Expense, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense: {}\n", expense.label()));
    output.push_str(&format!("  ID:        {}\n", expense.id));
    output.push_str(&format!("  Date:      {}\n", expense.date));
    output.push_str(&format!("  Category:  {}\n", expense.category));
    output.push_str(&format!(
        "  Amount:    {}\n",
        expense.amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Paid By:   {}\n",
        tour.member_name(expense.paid_by).unwrap_or("?")
    ));

    let names: Vec<&str> = expense
        .participants
        .iter()
        .map(|id| tour.member_name(*id).unwrap_or("?"))
        .collect();
    output.push_str(&format!("  Split:     {}\n", names.join(", ")));

    output
}

/// Format category totals with share percentages and a bar
///
/// Categories with no spend are omitted.
pub fn format_category_totals(totals: &[CategoryTotal], symbol: &str) -> String {
    let grand_total: Money = totals.iter().map(|t| t.total).sum();
    if grand_total.is_zero() {
        return "No expenses recorded.".to_string();
    }

    let max = totals
        .iter()
        .map(|t| t.total.cents())
        .max()
        .unwrap_or(0) as f64;

    let mut output = String::new();
    output.push_str("Expenses by Category\n\n");

    for total in totals.iter().filter(|t| !t.total.is_zero()) {
        output.push_str(&format!(
            "  {:<13}  {:>12}  {:>6}  {}\n",
            total.category.to_string(),
            total.total.format_with_symbol(symbol),
            format_percentage(total.percentage(grand_total)),
            format_bar(total.total.cents() as f64, max, 20),
        ));
    }

    output.push_str(&format!(
        "\n  {:<13}  {:>12}\n",
        "Total",
        grand_total.format_with_symbol(symbol)
    ));

    output
}
