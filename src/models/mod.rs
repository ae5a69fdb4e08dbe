//! Core data models for Spendable
//!
//! Value records for the weekly budget domain: the budget configuration,
//! expenses, infusions and savings goals. The four are independent; they
//! only meet inside the engine as aggregate sums.

pub mod budget_config;
pub mod expense;
pub mod goal;
pub mod ids;
pub mod infusion;
pub mod money;
pub mod week;

pub use budget_config::BudgetConfig;
pub use expense::Expense;
pub use goal::Goal;
pub use ids::{ExpenseId, GoalId, InfusionId};
pub use infusion::Infusion;
pub use money::Money;
pub use week::WeekStart;
