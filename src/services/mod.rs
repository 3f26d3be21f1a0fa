//! Service layer for tour-splitter
//!
//! The service layer provides business logic on top of the session, handling
//! validation, name lookups, and cascading deletes.

pub mod expense;
pub mod member;
pub mod tour;

pub use expense::{CreateExpenseInput, ExpenseFilter, ExpenseService};
pub use member::MemberService;
pub use tour::TourService;
