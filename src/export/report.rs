//! Plain-text report export
//!
//! Assembles the terminal views into a single shareable document.

use std::io::Write;

use chrono::Local;

use crate::config::settings::Settings;
use crate::display::format::separator;
use crate::display::{
    format_balance_table, format_category_totals, format_daily_breakdown, format_expense_list,
    format_settlements, format_summary,
};
use crate::engine::TourOverview;
use crate::error::{TourError, TourResult};
use crate::models::{Expense, Tour};

const WIDTH: usize = 72;

/// Write a full text report for `tour`
pub fn export_tour_report<W: Write>(tour: &Tour, settings: &Settings, writer: &mut W) -> TourResult<()> {
    settings
        .validate()
        .map_err(|e| TourError::Export(e.to_string()))?;

    let overview = TourOverview::compute(tour);
    let symbol = settings.currency_symbol.as_str();

    let mut expenses: Vec<&Expense> = tour.expenses.iter().collect();
    expenses.sort_by(|a, b| a.date.cmp(&b.date));

    let sections = [
        ("SUMMARY", format_summary(tour, &overview.summary, symbol)),
        ("MEMBER BALANCES", format_balance_table(&overview.balances, symbol)),
        ("SETTLEMENTS", format_settlements(&overview.settlements, symbol)),
        ("CATEGORIES", format_category_totals(&overview.category_totals, symbol)),
        ("DAILY BREAKDOWN", format_daily_breakdown(&overview.daily_breakdown, symbol)),
        (
            "ALL EXPENSES",
            format_expense_list(tour, &expenses, symbol, &settings.date_format),
        ),
    ];

    let mut output = String::new();
    output.push_str(&format!("TOUR EXPENSE REPORT: {}\n", tour.name));
    if !tour.description.is_empty() {
        output.push_str(&format!("{}\n", tour.description));
    }
    output.push_str(&format!(
        "Generated {}\n",
        Local::now().format("%Y-%m-%d %H:%M")
    ));

    for (title, body) in sections {
        output.push('\n');
        output.push_str(&format!("{}\n{}\n", title, separator(WIDTH)));
        output.push_str(body.trim_end());
        output.push('\n');
    }

    writer
        .write_all(output.as_bytes())
        .map_err(|e| TourError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sample_tour;

    #[test]
    fn test_report_sections() {
        let mut buffer = Vec::new();
        export_tour_report(&sample_tour(), &Settings::default(), &mut buffer).unwrap();
        let report = String::from_utf8(buffer).unwrap();

        assert!(report.starts_with("TOUR EXPENSE REPORT: Bangkok Adventure 2025"));
        for title in [
            "SUMMARY",
            "MEMBER BALANCES",
            "SETTLEMENTS",
            "CATEGORIES",
            "DAILY BREAKDOWN",
            "ALL EXPENSES",
        ] {
            assert!(report.contains(title), "missing {}", title);
        }
        assert!(report.contains("David pays Mike $3510.00"));
        assert!(report.contains("Total Expenses:  $22000.00"));
    }

    #[test]
    fn test_report_uses_settings() {
        let settings = Settings {
            currency_symbol: "€".into(),
            date_format: "%d.%m.%Y".into(),
            ..Settings::default()
        };
        let mut buffer = Vec::new();
        export_tour_report(&sample_tour(), &settings, &mut buffer).unwrap();
        let report = String::from_utf8(buffer).unwrap();

        assert!(report.contains("€22000.00"));
        assert!(report.contains("20.07.2025"));
        assert!(!report.contains("$"));
    }

    #[test]
    fn test_report_with_bad_date_format_fails() {
        let settings = Settings {
            date_format: "%Q".into(),
            ..Settings::default()
        };
        let mut buffer = Vec::new();
        let err = export_tour_report(&sample_tour(), &settings, &mut buffer).unwrap_err();

        assert!(matches!(err, TourError::Export(_)));
        assert!(buffer.is_empty());
    }
}
