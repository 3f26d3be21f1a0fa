//! Daily and category aggregation
//!
//! Hotel and Transport are fixed tour-wide costs. They are left out of the
//! daily breakdown but still count in category totals and the daily trend.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{Expense, ExpenseCategory, Money, Tour};

/// Total spend in one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub total: Money,
}

impl CategoryTotal {
    /// Share of `grand_total` as a percentage (0 when the grand total is zero)
    pub fn percentage(&self, grand_total: Money) -> f64 {
        if grand_total.is_zero() {
            0.0
        } else {
            self.total.cents() as f64 / grand_total.cents() as f64 * 100.0
        }
    }
}

/// Variable spend on one calendar day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyBreakdown {
    pub date: NaiveDate,
    pub expenses: Vec<Expense>,
    pub total: Money,
    /// Day total divided by the current member count
    pub per_person: f64,
}

impl DailyBreakdown {
    pub fn expense_count(&self) -> usize {
        self.expenses.len()
    }
}

/// All-category spend on one calendar day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: Money,
}

/// Headline numbers for a tour
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TourSummary {
    pub total_expenses: Money,
    pub hotel_costs: Money,
    pub transport_costs: Money,
    pub member_count: usize,
    pub expense_count: usize,
    /// Daily breakdown total divided by the number of days it covers
    pub daily_average: f64,
}

/// Totals for every category in canonical order, zero totals included
pub fn category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    ExpenseCategory::ALL
        .iter()
        .map(|category| CategoryTotal {
            category: *category,
            total: expenses
                .iter()
                .filter(|e| e.category == *category)
                .map(|e| e.amount)
                .sum(),
        })
        .collect()
}

/// Per-day variable spend, ordered by date
pub fn daily_breakdown(tour: &Tour) -> Vec<DailyBreakdown> {
    let mut by_date: BTreeMap<NaiveDate, Vec<Expense>> = BTreeMap::new();
    for expense in tour.expenses.iter().filter(|e| !e.is_daily_excluded()) {
        by_date.entry(expense.date).or_default().push(expense.clone());
    }

    let members = tour.members.len();

    by_date
        .into_iter()
        .map(|(date, expenses)| {
            let total: Money = expenses.iter().map(|e| e.amount).sum();
            let per_person = if members == 0 {
                0.0
            } else {
                total.as_units() / members as f64
            };
            DailyBreakdown {
                date,
                expenses,
                total,
                per_person,
            }
        })
        .collect()
}

/// Per-day totals across every category, ordered by date
pub fn daily_totals(expenses: &[Expense]) -> Vec<DailyTotal> {
    let mut by_date: BTreeMap<NaiveDate, Money> = BTreeMap::new();
    for expense in expenses {
        *by_date.entry(expense.date).or_default() += expense.amount;
    }

    by_date
        .into_iter()
        .map(|(date, total)| DailyTotal { date, total })
        .collect()
}

/// Headline numbers for the dashboard
pub fn summarize(tour: &Tour) -> TourSummary {
    let breakdown = daily_breakdown(tour);
    let variable: Money = breakdown.iter().map(|d| d.total).sum();
    let daily_average = if breakdown.is_empty() {
        0.0
    } else {
        variable.as_units() / breakdown.len() as f64
    };

    TourSummary {
        total_expenses: tour.total_expenses(),
        hotel_costs: tour.category_total(ExpenseCategory::Hotel),
        transport_costs: tour.category_total(ExpenseCategory::Transport),
        member_count: tour.members.len(),
        expense_count: tour.expenses.len(),
        daily_average,
    }
}
