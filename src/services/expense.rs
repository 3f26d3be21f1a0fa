//! Expense service
//!
//! Records and removes expenses on the active tour. Payer and participants are
//! addressed by member name or ID and must belong to the tour.

use chrono::NaiveDate;

use crate::error::{TourError, TourResult};
use crate::models::{Expense, ExpenseCategory, MemberId, Money, Tour};
use crate::session::Session;

/// Service for expense management
pub struct ExpenseService<'a> {
    session: &'a mut Session,
}

/// Options for filtering the expense list
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Only this category
    pub category: Option<ExpenseCategory>,
    /// Only this calendar date
    pub date: Option<NaiveDate>,
    /// Case-insensitive text matched against description and category name
    pub search: Option<String>,
    /// Maximum number of expenses to return
    pub limit: Option<usize>,
}

impl ExpenseFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: ExpenseCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        let text = text.into().trim().to_lowercase();
        self.search = (!text.is_empty()).then_some(text);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn accepts(&self, expense: &Expense) -> bool {
        self.category.map_or(true, |c| expense.category == c)
            && self.date.map_or(true, |d| expense.date == d)
            && self.search.as_deref().map_or(true, |needle| {
                expense.description.to_lowercase().contains(needle)
                    || expense.category.to_string().to_lowercase().contains(needle)
            })
    }
}

/// Input for recording an expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub description: String,
    pub amount: Money,
    pub category: ExpenseCategory,
    pub date: NaiveDate,
    /// Payer name or ID
    pub paid_by: String,
    /// Participant names or IDs; empty means every current member
    pub participants: Vec<String>,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(session: &'a mut Session) -> Self {
        Self { session }
    }

    /// Record an expense on the active tour
    pub fn add(&mut self, input: CreateExpenseInput) -> TourResult<Expense> {
        let tour = self.session.active_tour_mut()?;

        let paid_by = resolve_member(tour, &input.paid_by)?;
        let participants: Vec<MemberId> = if input.participants.is_empty() {
            tour.members.iter().map(|m| m.id).collect()
        } else {
            input
                .participants
                .iter()
                .map(|p| resolve_member(tour, p))
                .collect::<TourResult<_>>()?
        };

        let expense = Expense::new(
            input.description.trim(),
            input.amount,
            input.category,
            input.date,
            paid_by,
            participants,
        );

        tour.add_expense(expense.clone())
            .map_err(|e| TourError::Validation(e.to_string()))?;

        if expense.date < tour.start_date || expense.date > tour.end_date {
            tracing::warn!(
                expense = %expense.id,
                date = %expense.date,
                "Expense date falls outside the tour dates"
            );
        }
        tracing::info!(
            expense = %expense.id,
            amount = %expense.amount,
            category = %expense.category,
            participants = expense.participants.len(),
            "Added expense"
        );
        self.session.persist();

        Ok(expense)
    }

    /// The active tour
    pub fn tour(&self) -> TourResult<&Tour> {
        self.session.active_tour()
    }

    /// Find an expense of the active tour by (short) ID
    pub fn find(&self, identifier: &str) -> TourResult<&Expense> {
        self.session
            .active_tour()?
            .find_expense(identifier)
            .ok_or_else(|| TourError::expense_not_found(identifier))
    }

    /// Expenses of the active tour, newest date first
    pub fn list(&self, filter: &ExpenseFilter) -> TourResult<Vec<&Expense>> {
        let tour = self.session.active_tour()?;
        let mut expenses: Vec<&Expense> =
            tour.expenses.iter().filter(|e| filter.accepts(e)).collect();

        // Stable: same-day expenses stay in recording order
        expenses.sort_by(|a, b| b.date.cmp(&a.date));

        if let Some(limit) = filter.limit {
            expenses.truncate(limit);
        }
        Ok(expenses)
    }

    /// Remove an expense from the active tour
    pub fn remove(&mut self, identifier: &str) -> TourResult<Expense> {
        let id = self.find(identifier)?.id;
        let expense = self
            .session
            .active_tour_mut()?
            .remove_expense(id)
            .ok_or_else(|| TourError::expense_not_found(identifier))?;

        tracing::info!(expense = %expense.id, amount = %expense.amount, "Removed expense");
        self.session.persist();

        Ok(expense)
    }
}

fn resolve_member(tour: &Tour, identifier: &str) -> TourResult<MemberId> {
    tour.find_member(identifier)
        .map(|m| m.id)
        .ok_or_else(|| TourError::member_not_found(identifier))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SETTLEMENT_TOLERANCE;
    use crate::storage::{sample_tour, MemoryTourStore};

    fn session_with_sample() -> Session {
        Session::open(Box::new(MemoryTourStore::with_tours([sample_tour()])))
    }

    fn input(amount: i64, paid_by: &str, participants: &[&str]) -> CreateExpenseInput {
        CreateExpenseInput {
            description: "Street food".into(),
            amount: Money::from_units(amount),
            category: ExpenseCategory::Food,
            date: NaiveDate::from_ymd_opt(2025, 7, 24).unwrap(),
            paid_by: paid_by.into(),
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_add_with_named_participants() {
        let mut session = session_with_sample();
        let mut service = ExpenseService::new(&mut session);

        let expense = service.add(input(90, "david", &["David", "Emma", "emma"])).unwrap();
        assert_eq!(expense.participants.len(), 2);
        assert_eq!(expense.share_per_person(), Some(45.0));

        let overview = session.overview().unwrap();
        assert!(overview.balances.total_net().abs() < SETTLEMENT_TOLERANCE);
        assert_eq!(overview.summary.expense_count, 8);
    }

    #[test]
    fn test_add_defaults_to_all_members() {
        let mut session = session_with_sample();
        let expense = ExpenseService::new(&mut session)
            .add(input(50, "Mike", &[]))
            .unwrap();
        assert_eq!(expense.participants.len(), 5);
    }

    #[test]
    fn test_add_rejects_unknown_members_and_bad_amounts() {
        let mut session = session_with_sample();
        let mut service = ExpenseService::new(&mut session);

        assert!(service.add(input(10, "Zoe", &[])).unwrap_err().is_not_found());
        assert!(service
            .add(input(10, "Alex", &["Alex", "Zoe"]))
            .unwrap_err()
            .is_not_found());
        assert!(service.add(input(0, "Alex", &[])).unwrap_err().is_validation());
        assert_eq!(service.list(&ExpenseFilter::new()).unwrap().len(), 7);
    }

    #[test]
    fn test_add_without_members_is_rejected() {
        let mut session = session_with_sample();
        session.active_tour_mut().unwrap().members.clear();

        // Payer lookup fails before the empty participant set is reached
        let err = ExpenseService::new(&mut session)
            .add(input(10, "Alex", &[]))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_list_newest_first_with_filters() {
        let mut session = session_with_sample();
        let service = ExpenseService::new(&mut session);

        let all = service.list(&ExpenseFilter::new()).unwrap();
        assert!(all.windows(2).all(|w| w[0].date >= w[1].date));

        let food = service
            .list(&ExpenseFilter::new().category(ExpenseCategory::Food))
            .unwrap();
        assert_eq!(food.len(), 2);

        let day = NaiveDate::from_ymd_opt(2025, 7, 20).unwrap();
        assert_eq!(service.list(&ExpenseFilter::new().date(day)).unwrap().len(), 3);
        assert_eq!(service.list(&ExpenseFilter::new().limit(2)).unwrap().len(), 2);
    }

    #[test]
    fn test_list_search() {
        let mut session = session_with_sample();
        let service = ExpenseService::new(&mut session);

        let dinners = service.list(&ExpenseFilter::new().search("DINNER")).unwrap();
        assert_eq!(dinners.len(), 2);
        assert!(dinners.iter().all(|e| e.description.contains("dinner")));

        // Category names match too: two Transport expenses
        let transport = service.list(&ExpenseFilter::new().search("transp")).unwrap();
        assert_eq!(transport.len(), 2);

        // "tour" hits the two Tour-category trips plus the tuk-tuk description
        let tours = service.list(&ExpenseFilter::new().search("tour")).unwrap();
        assert_eq!(tours.len(), 3);

        let blank = service.list(&ExpenseFilter::new().search("   ")).unwrap();
        assert_eq!(blank.len(), 7);

        let combined = ExpenseFilter::new()
            .search("dinner")
            .category(ExpenseCategory::Tour);
        assert!(service.list(&combined).unwrap().is_empty());
    }

    #[test]
    fn test_remove_expense() {
        let mut session = session_with_sample();
        let mut service = ExpenseService::new(&mut session);

        let id = service.list(&ExpenseFilter::new()).unwrap()[0].id;
        let removed = service.remove(&id.to_string()).unwrap();
        assert_eq!(removed.id, id);
        assert!(service.remove(&id.to_string()).unwrap_err().is_not_found());
        assert_eq!(service.list(&ExpenseFilter::new()).unwrap().len(), 6);
    }
}
