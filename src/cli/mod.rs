//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod export;
pub mod member;
pub mod report;
pub mod tour;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands};
pub use member::{handle_member_command, MemberCommands};
pub use report::{handle_balances, handle_daily, handle_settle, handle_summary};
pub use tour::{handle_tour_command, TourCommands};

use chrono::NaiveDate;

use crate::error::{TourError, TourResult};

/// Parse a `YYYY-MM-DD` command-line date
pub fn parse_date(s: &str) -> TourResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| TourError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", s)))
}
