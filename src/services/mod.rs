//! Service layer for Spendable
//!
//! Validation, persistence and audit logging for every mutation. Services
//! borrow the `Storage` they act on.

pub mod budget;
pub mod expense;
pub mod goal;
pub mod infusion;

pub use budget::BudgetService;
pub use expense::{ExpenseChanges, ExpenseService};
pub use goal::GoalService;
pub use infusion::InfusionService;
