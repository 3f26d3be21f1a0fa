//! Core data models for tour-splitter
//!
//! This module contains the records that describe a group trip: the tour
//! itself, its members, and the expenses they share.

pub mod expense;
pub mod ids;
pub mod member;
pub mod money;
pub mod tour;

pub use expense::{Expense, ExpenseCategory, ExpenseValidationError};
pub use ids::{ExpenseId, MemberId, TourId};
pub use member::{Member, MemberValidationError};
pub use money::{format_units, Money, MoneyParseError};
pub use tour::{Tour, TourValidationError};

/// Case-insensitive name comparison, ignoring surrounding whitespace
pub fn names_match(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}
