//! Tour model
//!
//! A tour owns its members and expenses exclusively. Both collections keep
//! insertion order, which is the order members appear in balance tables.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::expense::{Expense, ExpenseValidationError};
use super::ids::{ExpenseId, MemberId, TourId};
use super::member::Member;
use super::money::Money;
use super::ExpenseCategory;

/// A group trip with its members and shared expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    /// Unique identifier
    pub id: TourId,

    /// Tour name
    pub name: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// First day of the tour
    pub start_date: NaiveDate,

    /// Last day of the tour
    pub end_date: NaiveDate,

    /// When the tour was created
    pub created_at: DateTime<Utc>,

    /// Members in insertion order
    #[serde(default)]
    pub members: Vec<Member>,

    /// Expenses in insertion order
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl Tour {
    /// Create a new, empty tour
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: TourId::new(),
            name: name.into(),
            description: description.into(),
            start_date,
            end_date,
            created_at: Utc::now(),
            members: Vec::new(),
            expenses: Vec::new(),
        }
    }

    /// Validate name and date range
    pub fn validate(&self) -> Result<(), TourValidationError> {
        if self.name.trim().is_empty() {
            return Err(TourValidationError::EmptyName);
        }
        if self.end_date < self.start_date {
            return Err(TourValidationError::EndBeforeStart {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }

    /// Number of days covered by the tour, inclusive
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Get a member by ID
    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Get a member by name (case-insensitive)
    pub fn member_by_name(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.has_name(name))
    }

    /// Find a member by name or ID
    pub fn find_member(&self, identifier: &str) -> Option<&Member> {
        self.member_by_name(identifier)
            .or_else(|| self.members.iter().find(|m| m.id.matches(identifier)))
    }

    /// Display name for a member ID, if the member still exists
    pub fn member_name(&self, id: MemberId) -> Option<&str> {
        self.member(id).map(|m| m.name.as_str())
    }

    /// Get an expense by ID
    pub fn expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Find an expense by (short) ID
    pub fn find_expense(&self, identifier: &str) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id.matches(identifier))
    }

    /// Append a member
    pub fn add_member(&mut self, member: Member) {
        self.members.push(member);
    }

    /// Remove a member and every expense that references it as payer or
    /// participant. Returns the removed member and the swept expenses.
    pub fn remove_member(&mut self, id: MemberId) -> Option<(Member, Vec<Expense>)> {
        let index = self.members.iter().position(|m| m.id == id)?;
        let member = self.members.remove(index);

        let (removed, kept): (Vec<Expense>, Vec<Expense>) = std::mem::take(&mut self.expenses)
            .into_iter()
            .partition(|e| e.involves(id));
        self.expenses = kept;

        Some((member, removed))
    }

    /// Validate an expense against this tour's member set
    pub fn check_expense(&self, expense: &Expense) -> Result<(), ExpenseValidationError> {
        expense.validate()?;

        if self.member(expense.paid_by).is_none() {
            return Err(ExpenseValidationError::UnknownPayer(expense.paid_by));
        }
        if let Some(unknown) = expense
            .participants
            .iter()
            .find(|id| self.member(**id).is_none())
        {
            return Err(ExpenseValidationError::UnknownParticipant(*unknown));
        }
        Ok(())
    }

    /// Validate and append an expense
    pub fn add_expense(&mut self, expense: Expense) -> Result<(), ExpenseValidationError> {
        self.check_expense(&expense)?;
        self.expenses.push(expense);
        Ok(())
    }

    /// Remove an expense
    pub fn remove_expense(&mut self, id: ExpenseId) -> Option<Expense> {
        let index = self.expenses.iter().position(|e| e.id == id)?;
        Some(self.expenses.remove(index))
    }

    /// Sum of all expense amounts
    pub fn total_expenses(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Sum of expense amounts in one category
    pub fn category_total(&self, category: ExpenseCategory) -> Money {
        self.expenses
            .iter()
            .filter(|e| e.category == category)
            .map(|e| e.amount)
            .sum()
    }

    /// "2025-07-20 to 2025-07-24"
    pub fn date_range_label(&self) -> String {
        format!(
            "{} to {}",
            self.start_date.format("%Y-%m-%d"),
            self.end_date.format("%Y-%m-%d")
        )
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.date_range_label())
    }
}

/// Validation errors for tours
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TourValidationError {
    EmptyName,
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
}

impl fmt::Display for TourValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Tour name cannot be empty"),
            Self::EndBeforeStart { start, end } => {
                write!(f, "Tour end date {} is before start date {}", end, start)
            }
        }
    }
}

impl std::error::Error for TourValidationError {}
