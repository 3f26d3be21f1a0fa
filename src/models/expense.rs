//! Expense model
//!
//! A dated, categorized payment made by one member and shared equally among a
//! set of participants.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{ExpenseId, MemberId};
use super::money::Money;

/// Fixed set of expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Food,
    Hotel,
    Transport,
    Tour,
    Activity,
    Shopping,
    Entertainment,
    Misc,
}

impl ExpenseCategory {
    /// All categories in display order
    pub const ALL: [ExpenseCategory; 8] = [
        Self::Food,
        Self::Hotel,
        Self::Transport,
        Self::Tour,
        Self::Activity,
        Self::Shopping,
        Self::Entertainment,
        Self::Misc,
    ];

    /// Lodging and transport are tour-wide fixed costs and are left out of
    /// the day-by-day variable spend views
    pub fn is_daily_excluded(&self) -> bool {
        matches!(self, Self::Hotel | Self::Transport)
    }

    /// Parse a category from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "food" | "meal" | "meals" => Some(Self::Food),
            "hotel" | "lodging" | "accommodation" => Some(Self::Hotel),
            "transport" | "transportation" | "travel" => Some(Self::Transport),
            "tour" | "tours" => Some(Self::Tour),
            "activity" | "activities" => Some(Self::Activity),
            "shopping" => Some(Self::Shopping),
            "entertainment" => Some(Self::Entertainment),
            "misc" | "miscellaneous" | "other" => Some(Self::Misc),
            _ => None,
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Food => "Food",
            Self::Hotel => "Hotel",
            Self::Transport => "Transport",
            Self::Tour => "Tour",
            Self::Activity => "Activity",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::Misc => "Misc",
        };
        write!(f, "{}", name)
    }
}

/// A shared expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Free-form description (may be empty)
    #[serde(default)]
    pub description: String,

    /// Total amount paid
    pub amount: Money,

    /// Expense category
    pub category: ExpenseCategory,

    /// Calendar date of the expense
    pub date: NaiveDate,

    /// The member who paid
    pub paid_by: MemberId,

    /// Members sharing the cost equally
    pub participants: Vec<MemberId>,
}

impl Expense {
    /// Create a new expense
    ///
    /// Duplicate participant ids are collapsed; the first occurrence wins.
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        category: ExpenseCategory,
        date: NaiveDate,
        paid_by: MemberId,
        participants: impl IntoIterator<Item = MemberId>,
    ) -> Self {
        let mut unique: Vec<MemberId> = Vec::new();
        for id in participants {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }

        Self {
            id: ExpenseId::new(),
            description: description.into(),
            amount,
            category,
            date,
            paid_by,
            participants: unique,
        }
    }

    /// Whether this expense is left out of the daily breakdown
    pub fn is_daily_excluded(&self) -> bool {
        self.category.is_daily_excluded()
    }

    /// Each participant's equal portion, or None when there are no participants
    pub fn share_per_person(&self) -> Option<f64> {
        if self.participants.is_empty() {
            None
        } else {
            Some(self.amount.as_units() / self.participants.len() as f64)
        }
    }

    /// Whether the member paid for or shares in this expense
    pub fn involves(&self, member_id: MemberId) -> bool {
        self.paid_by == member_id || self.participants.contains(&member_id)
    }

    /// Description, falling back to the category name when empty
    pub fn label(&self) -> String {
        if self.description.trim().is_empty() {
            self.category.to_string()
        } else {
            self.description.clone()
        }
    }

    /// Validate the expense on its own (references are checked by the tour)
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }
        if self.participants.is_empty() {
            return Err(ExpenseValidationError::NoParticipants);
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.label(),
            self.amount,
            self.category
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount(Money),
    NoParticipants,
    UnknownPayer(MemberId),
    UnknownParticipant(MemberId),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be positive, got {}", amount)
            }
            Self::NoParticipants => write!(f, "Expense needs at least one participant"),
            Self::UnknownPayer(id) => write!(f, "Payer {} is not a member of this tour", id),
            Self::UnknownParticipant(id) => {
                write!(f, "Participant {} is not a member of this tour", id)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
