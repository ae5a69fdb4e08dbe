//! CLI command handlers
//!
//! Bridges the clap argument types with the service layer. Handlers print
//! their results and return `SpendableResult<()>`.

pub mod audit;
pub mod budget;
pub mod expense;
pub mod export;
pub mod goal;
pub mod infusion;
pub mod parse;

pub use audit::handle_audit;
pub use budget::{
    handle_budget_command, handle_chart, handle_init, handle_status, BudgetCommands,
};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use infusion::{handle_infusion_command, InfusionCommands};
