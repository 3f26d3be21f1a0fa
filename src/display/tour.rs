//! Tour display formatting
//!
//! Formats tours for terminal output in list, detail and dashboard views.

use crate::engine::TourSummary;
use crate::models::{format_units, Tour, TourId};

use super::format::truncate;

/// Format a list of tours, marking the active one
pub fn format_tour_list(tours: &[&Tour], active: Option<TourId>) -> String {
    if tours.is_empty() {
        return "No tours found. Create one with 'toursplit tour create'.".to_string();
    }

    let name_width = tours
        .iter()
        .map(|t| t.name.chars().count().min(40))
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "  {:<name_width$}  {:<24}  {:>7}  {:>8}  {}\n",
        "Name",
        "Dates",
        "Members",
        "Expenses",
        "ID",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "  {:-<name_width$}  {:-<24}  {:->7}  {:->8}  {:-<13}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for tour in tours {
        let marker = if Some(tour.id) == active { "*" } else { " " };
        output.push_str(&format!(
            "{} {:<name_width$}  {:<24}  {:>7}  {:>8}  {}\n",
            marker,
            truncate(&tour.name, 40),
            tour.date_range_label(),
            tour.members.len(),
            tour.expenses.len(),
            tour.id,
            name_width = name_width,
        ));
    }

    output
}

/// Format a single tour's details
pub fn format_tour_details(tour: &Tour) -> String {
    let mut output = String::new();

    output.push_str(&format!("Tour: {}\n", tour.name));
    output.push_str(&format!("  ID:          {}\n", tour.id));
    if !tour.description.is_empty() {
        output.push_str(&format!("  Description: {}\n", tour.description));
    }
    output.push_str(&format!(
        "  Dates:       {} ({} days)\n",
        tour.date_range_label(),
        tour.duration_days()
    ));
    output.push_str(&format!("  Members:     {}\n", tour.members.len()));
    output.push_str(&format!("  Expenses:    {}\n", tour.expenses.len()));
    output.push_str(&format!(
        "  Created:     {}\n",
        tour.created_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}

/// Format the dashboard summary
pub fn format_summary(tour: &Tour, summary: &TourSummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", tour.name));
    output.push_str(&format!("{}\n\n", tour.date_range_label()));
    output.push_str(&format!(
        "  Total Expenses:  {}\n",
        summary.total_expenses.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Hotel Costs:     {}\n",
        summary.hotel_costs.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Transport Costs: {}\n",
        summary.transport_costs.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Daily Average:   {}\n",
        format_units(summary.daily_average, symbol)
    ));
    output.push_str(&format!("  Members:         {}\n", summary.member_count));
    output.push_str(&format!("  Expenses:        {}\n", summary.expense_count));

    output
}
