//! Export for Spendable data
//!
//! CSV only: the expense ledger and the running-balance series.

pub mod csv;

pub use self::csv::{export_chart_csv, export_expenses_csv};
