//! Report CLI commands
//!
//! Balances, settlements, daily breakdown and the dashboard summary for the
//! active tour. Every view recomputes from the current expenses.

use crate::config::settings::Settings;
use crate::display::{
    format_balance_table, format_category_totals, format_daily_breakdown, format_daily_trend,
    format_settlements, format_summary,
};
use crate::error::TourResult;
use crate::session::Session;

/// Print the per-member balance table
pub fn handle_balances(session: &Session, settings: &Settings) -> TourResult<()> {
    let tour = session.active_tour()?;
    let overview = session.overview()?;

    println!("Balances for {}\n", tour.name);
    println!(
        "{}",
        format_balance_table(&overview.balances, &settings.currency_symbol)
    );
    Ok(())
}

/// Print the suggested payments
pub fn handle_settle(session: &Session, settings: &Settings) -> TourResult<()> {
    let overview = session.overview()?;
    print!(
        "{}",
        format_settlements(&overview.settlements, &settings.currency_symbol)
    );
    if overview.settlements.is_empty() {
        println!();
    }
    Ok(())
}

/// Print the daily breakdown, or the all-category trend with `trend`
pub fn handle_daily(session: &Session, settings: &Settings, trend: bool) -> TourResult<()> {
    let overview = session.overview()?;
    let symbol = &settings.currency_symbol;

    if trend {
        print!("{}", format_daily_trend(&overview.daily_totals, symbol));
    } else {
        print!("{}", format_daily_breakdown(&overview.daily_breakdown, symbol));
    }
    Ok(())
}

/// Print the dashboard summary with the category breakdown
pub fn handle_summary(session: &Session, settings: &Settings) -> TourResult<()> {
    let tour = session.active_tour()?;
    let overview = session.overview()?;
    let symbol = &settings.currency_symbol;

    print!("{}", format_summary(tour, &overview.summary, symbol));
    println!();
    print!("{}", format_category_totals(&overview.category_totals, symbol));
    if overview.category_totals.iter().all(|t| t.total.is_zero()) {
        println!();
    }
    Ok(())
}
