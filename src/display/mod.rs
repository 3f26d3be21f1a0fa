//! Display formatting for terminal output
//!
//! Provides utilities for formatting tours, balances and daily views for
//! terminal display, including tables and color hints.

pub mod balance;
pub mod daily;
pub mod expense;
pub mod format;
pub mod member;
pub mod tour;

pub use balance::{format_balance_table, format_settlements};
pub use daily::{format_daily_breakdown, format_daily_trend};
pub use expense::{format_category_totals, format_expense_details, format_expense_list};
pub use member::format_member_list;
pub use tour::{format_summary, format_tour_details, format_tour_list};
